//! Heuristic complexity estimation
//!
//! Scans a snippet line by line, tracking loop nesting, recursion,
//! growth-rate multipliers and dynamic-allocation signals, then maps the
//! accumulated state to asymptotic time and space classes plus advisory
//! notes. Best-effort estimation only: signals come from pattern rules over
//! raw text, and absence of signal degrades to the weakest class.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Snippets shorter than this (in characters) get a brevity warning.
const SHORT_SNIPPET_CHARS: usize = 30;

/// Estimated complexity classes plus advisory notes for one snippet.
///
/// Plain value type: fields are always present, defaulting to "O(1)" and
/// empty lists. Warnings and suggestions are ordered; callers may rely on
/// the order they were detected in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct ComplexityReport {
  /// Estimated time complexity class
  pub time: String,
  /// Estimated space complexity class
  pub space: String,
  /// Advisory warnings, in detection order
  pub warnings: Vec<String>,
  /// Improvement suggestions, in detection order
  pub suggestions: Vec<String>,
}

impl Default for ComplexityReport {
  fn default() -> Self {
    Self {
      time: "O(1)".to_string(),
      space: "O(1)".to_string(),
      warnings: Vec::new(),
      suggestions: Vec::new(),
    }
  }
}

/// Accumulator threaded through a single left-to-right pass over the lines.
/// Created per estimation call, discarded at its end.
#[derive(Debug, Default)]
struct ScanState {
  current_nesting: usize,
  max_nesting: usize,
  loop_count: usize,
  is_logarithmic: bool,
  is_recursive: bool,
  has_dynamic_allocation: bool,
}

/// How loop nesting is tracked during the scan. Chosen once per snippet from
/// the precomputed brace check, then passed into the scanning loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NestingStrategy {
  /// Brace-delimited source: nesting follows `{` opens and `}` closes.
  Braced,
  /// Brace-less source: every loop line opens one nested level. This assumes
  /// one level per loop line rather than parsing indentation.
  Indented,
}

static FUNCTION_DECL: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?:int|void|def|public|private)\s+(\w+)\s*[({]").unwrap());
static LOOP_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:for|while)\b").unwrap());
static MULTIPLIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*=|/=|>>|<<").unwrap());
static SCALED_MULTIPLIER: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?:\*=|/=|>>|<<)\s*[2-9]").unwrap());
static ALLOCATION: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\bnew\s+\w+\s*\[|malloc\b|calloc\b|\b[A-Z]\w*List\b").unwrap());
static REPEATED_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*\]\s*\*").unwrap());
static LIST_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\blist\(").unwrap());
static BRANCHING_CALLS: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\b\w+\s*\(.*\)\s*[+\-*/]\s*\b\w+\s*\(").unwrap());

/// Estimate time and space complexity for a source snippet.
///
/// Deterministic and total: never fails, and absence of signal yields the
/// most conservative classes.
pub fn estimate(code: &str) -> ComplexityReport {
  let mut state = ScanState { is_recursive: detect_recursion(code), ..ScanState::default() };

  let strategy = if code.contains('{') && code.contains('}') {
    NestingStrategy::Braced
  } else {
    NestingStrategy::Indented
  };

  for line in code.lines() {
    scan_line(line, strategy, &mut state);
  }

  let mut report = ComplexityReport::default();
  classify_time(code, &state, &mut report);
  classify_space(&state, &mut report);
  append_notes(code, &state, &mut report);
  report
}

/// Recursion heuristic: take the first declared function name and count call
/// sites of that exact name across the whole text. More than one occurrence
/// (the declaration plus at least one call) marks the snippet recursive.
/// Name hits inside comments or strings count too, so a function merely
/// mentioned twice is a false positive; this is a pattern rule by intent,
/// not call-graph analysis.
fn detect_recursion(code: &str) -> bool {
  let Some(captures) = FUNCTION_DECL.captures(code) else {
    return false;
  };
  let name = &captures[1];
  let call_site = Regex::new(&format!(r"\b{}\s*\(", regex::escape(name))).unwrap();
  call_site.find_iter(code).count() > 1
}

/// Process one line, updating the scan state. Blank lines and pure comment
/// lines are skipped entirely.
fn scan_line(line: &str, strategy: NestingStrategy, state: &mut ScanState) {
  let stripped = line.trim();
  if stripped.is_empty() || stripped.starts_with("//") || stripped.starts_with('#') {
    return;
  }

  if LOOP_KEYWORD.is_match(stripped) {
    state.loop_count += 1;

    let opens_level = match strategy {
      // A loop header opens a level unless it is a degenerate one-liner
      // terminated on the same line without a block.
      NestingStrategy::Braced => stripped.contains('{') || !stripped.ends_with(';'),
      NestingStrategy::Indented => true,
    };
    if opens_level {
      state.current_nesting += 1;
    }
    state.max_nesting = state.max_nesting.max(state.current_nesting);

    if MULTIPLIER.is_match(stripped) {
      state.is_logarithmic = true;
    }
  }

  // Halving/doubling updates inside a loop body need a small numeric operand
  // to count; the loop header itself is matched above without one.
  if state.current_nesting > 0 && SCALED_MULTIPLIER.is_match(stripped) {
    state.is_logarithmic = true;
  }

  if ALLOCATION.is_match(stripped)
    || REPEATED_LITERAL.is_match(stripped)
    || LIST_CALL.is_match(stripped)
  {
    state.has_dynamic_allocation = true;
  }

  if strategy == NestingStrategy::Braced && stripped.contains('}') {
    let closed = stripped.matches('}').count();
    state.current_nesting = state.current_nesting.saturating_sub(closed);
  }
}

fn classify_time(code: &str, state: &ScanState, report: &mut ComplexityReport) {
  if state.is_recursive {
    // Two calls joined by an arithmetic operator on one line is the naive
    // multi-branch shape (e.g. fib(n-1) + fib(n-2)). Calls split across
    // lines or guarded by conditionals land in the plain O(n) branch.
    if BRANCHING_CALLS.is_match(code) {
      report.time = "O(2^n)".to_string();
      report
        .suggestions
        .push("Exponential recursion detected. Consider Dynamic Programming.".to_string());
    } else {
      report.time = "O(n)".to_string();
      report
        .suggestions
        .push("Recursive solution. Ensure base case prevents StackOverflow.".to_string());
    }
    return;
  }

  report.time = match state.max_nesting {
    0 => "O(1)".to_string(),
    1 if state.is_logarithmic => "O(log n)".to_string(),
    1 => "O(n)".to_string(),
    2 if state.is_logarithmic => "O(n log n)".to_string(),
    2 => "O(n^2)".to_string(),
    depth => {
      report.warnings.push(format!("High complexity detected (O(n^{depth}))."));
      format!("O(n^{depth})")
    }
  };
}

fn classify_space(state: &ScanState, report: &mut ComplexityReport) {
  report.space = if state.has_dynamic_allocation {
    if state.max_nesting >= 2 {
      "O(n^2)".to_string()
    } else {
      "O(n)".to_string()
    }
  } else if state.is_recursive {
    "O(n) (Stack)".to_string()
  } else {
    "O(1)".to_string()
  };
}

/// Trailing advisory notes. Order is fixed for reproducibility: the
/// classification already appended its own items, then these run, with the
/// short-snippet warning always last.
fn append_notes(code: &str, state: &ScanState, report: &mut ComplexityReport) {
  if report.time.contains("n^2") {
    report.suggestions.push("Nested loops detected. Try using HashMaps to optimize.".to_string());
  }
  if state.is_logarithmic {
    report.suggestions.push("Logarithmic efficiency detected. Good job!".to_string());
  }
  if state.loop_count == 0 && !state.is_recursive {
    report.suggestions.push("Constant time complexity. Very efficient.".to_string());
  }

  if code.chars().count() < SHORT_SNIPPET_CHARS {
    report.warnings.push("Code snippet is very short.".to_string());
  }
}
