use clap::Parser;
use colored::*;
use gauge::{detect, estimate};
use std::path::{Path, PathBuf};
use std::process;

/// Gauge - Heuristic Complexity Estimation
#[derive(Parser)]
#[command(name = "gauge")]
#[command(about = "Heuristic time and space complexity estimation for source snippets")]
#[command(version)]
struct Cli {
  /// Files to analyze
  #[arg(value_name = "PATH")]
  paths: Vec<PathBuf>,

  /// Only show the complexity classes, no warnings or suggestions
  #[arg(short, long)]
  quiet: bool,
}

fn main() {
  let cli = Cli::parse();

  if cli.paths.is_empty() {
    eprintln!("Error: No paths specified");
    process::exit(1);
  }

  let mut failures = 0;

  for path in &cli.paths {
    match std::fs::read_to_string(path) {
      Ok(code) => print_analysis(path, &code, cli.quiet),
      Err(e) => {
        eprintln!("Error reading {}: {}", path.display(), e);
        failures += 1;
      }
    }
  }

  if failures > 0 {
    process::exit(1);
  }
}

fn print_analysis(path: &Path, code: &str, quiet: bool) {
  let language = detect(code);
  let report = estimate(code);

  println!("{}", path.display().to_string().bold());
  println!("  language: {}", language.title().cyan());
  println!("  time:     {}", report.time.green());
  println!("  space:    {}", report.space.green());

  if quiet {
    return;
  }

  for warning in &report.warnings {
    println!("  {} {}", "warning:".yellow(), warning);
  }
  for suggestion in &report.suggestions {
    println!("  {} {}", "suggest:".blue(), suggestion);
  }
}
