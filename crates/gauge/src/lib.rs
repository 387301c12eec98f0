//! Pattern-based complexity estimation for source snippets
//!
//! No lexer, no AST: both components are single-pass pattern rules over raw
//! text, total over arbitrary input. The sniffer classifies a snippet into a
//! small closed set of languages; the estimator infers loop nesting,
//! recursion and allocation signals and maps them to asymptotic classes.

pub mod estimator;
pub mod language;

pub use estimator::{estimate, ComplexityReport};
pub use language::{detect, Language};
