//! Language sniffing from source text
//!
//! Ordered, first-match-wins signature rules over the raw snippet. The rules
//! are pattern-based, not grammar-based: a snippet matching no rule is
//! `Unknown`, and a snippet matching several languages resolves to whichever
//! rule runs first (python before c before java).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source language recognized by the sniffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Language {
  Python,
  C,
  Java,
  Unknown,
}

impl Language {
  /// Lowercase tag as used on the wire.
  pub fn as_str(&self) -> &'static str {
    match self {
      Language::Python => "python",
      Language::C => "c",
      Language::Java => "java",
      Language::Unknown => "unknown",
    }
  }

  /// Capitalized name for user-facing messages.
  pub fn title(&self) -> &'static str {
    match self {
      Language::Python => "Python",
      Language::C => "C",
      Language::Java => "Java",
      Language::Unknown => "Unknown",
    }
  }
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

static PYTHON_DEF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bdef\s+\w+").unwrap());
static PYTHON_BLOCK: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"(?m)\b(?:if|elif|else|for|while|class|try|except|finally|with)\b.*:\s*$").unwrap()
});
static PYTHON_IMPORT: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?m)^\s*(?:import|from)\s+[\w.]+").unwrap());

static C_INCLUDE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?m)^\s*#include\s+[<"]"#).unwrap());
static C_PRINTF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bprintf\s*\(").unwrap());
static C_MAIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bint\s+main\s*\(").unwrap());

static JAVA_CLASS: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\b(?:public\s+|private\s+|protected\s+)?class\s+\w+").unwrap());
static JAVA_MAIN: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\bpublic\s+static\s+void\s+main\s*\(").unwrap());
static JAVA_PRINTLN: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\bSystem\.out\.println\s*\(").unwrap());

/// Classify a snippet into one of the recognized languages.
///
/// Deterministic and total: always returns a value, never fails. Rules run
/// in a fixed order and the first hit wins.
pub fn detect(code: &str) -> Language {
  // Python: def statements, or a block keyword ending the line with a colon
  if PYTHON_DEF.is_match(code) || PYTHON_BLOCK.is_match(code) {
    return Language::Python;
  }
  // Python imports only count when the snippet is semicolon-free
  if PYTHON_IMPORT.is_match(code) && !code.contains(';') {
    return Language::Python;
  }

  if C_INCLUDE.is_match(code) || C_PRINTF.is_match(code) {
    return Language::C;
  }
  if C_MAIN.is_match(code) && code.contains('{') {
    return Language::C;
  }

  if JAVA_CLASS.is_match(code) && JAVA_MAIN.is_match(code) {
    return Language::Java;
  }
  if JAVA_PRINTLN.is_match(code) {
    return Language::Java;
  }

  Language::Unknown
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_detect_python_def() {
    assert_eq!(detect("def add(a, b):\n    return a + b"), Language::Python);
  }

  #[test]
  fn test_detect_python_block_colon() {
    assert_eq!(detect("for i in range(10):\n    total += i"), Language::Python);
  }

  #[test]
  fn test_detect_python_import_without_semicolons() {
    assert_eq!(detect("import os.path\nprint(os.path.sep)"), Language::Python);
  }

  #[test]
  fn test_import_with_semicolon_is_not_python() {
    // Semicolons veto the import rule; nothing else matches either.
    assert_eq!(detect("import x\nint y = 1;"), Language::Unknown);
  }

  #[test]
  fn test_detect_c_include() {
    let code = "#include <stdio.h>\nint main() {\n  return 0;\n}";
    assert_eq!(detect(code), Language::C);
  }

  #[test]
  fn test_detect_c_printf() {
    assert_eq!(detect("printf(\"%d\", value)"), Language::C);
  }

  #[test]
  fn test_detect_c_main_with_brace() {
    assert_eq!(detect("int main(void) { return 0; }"), Language::C);
  }

  #[test]
  fn test_detect_java_class_with_main() {
    let code = "public class Main {\n  public static void main(String[] args) {\n  }\n}";
    assert_eq!(detect(code), Language::Java);
  }

  #[test]
  fn test_detect_java_println() {
    assert_eq!(detect("System.out.println(42);"), Language::Java);
  }

  #[test]
  fn test_detect_unknown_for_pseudocode() {
    assert_eq!(detect("x + y * z"), Language::Unknown);
    assert_eq!(detect(""), Language::Unknown);
  }

  #[test]
  fn test_python_rules_win_over_c() {
    // Trailing-colon block and a printf call: python is evaluated first.
    let code = "if ready:\n    printf(\"go\")";
    assert_eq!(detect(code), Language::Python);
  }

  #[test]
  fn test_detect_is_pure() {
    let code = "def f():\n    pass";
    assert_eq!(detect(code), detect(code));
  }

  #[test]
  fn test_wire_tags() {
    assert_eq!(Language::Python.as_str(), "python");
    assert_eq!(Language::Unknown.to_string(), "unknown");
    assert_eq!(Language::Java.title(), "Java");
  }
}
