//! JSON rebranding tool
//!
//! Replaces a literal substring in every string value of the JSON files in a
//! directory and writes the files back pretty-printed.

pub mod cli;
pub mod error;
pub mod parser;
pub mod rewrite;

// Re-export commonly used types
pub use error::{ParseError, RewriteError, RewriteErrorKind, RewriteResult};
pub use parser::TopLevelKind;
pub use rewrite::{
    recursive_replace, RewriteConfig, RewriteEngine, RewriteSummary, Substitution,
};

/// Rewrite every `.json` file directly inside `dir` with the given substitution pair
/// and default settings
pub fn process_directory(
    dir: &std::path::Path,
    from: &str,
    to: &str,
) -> RewriteResult<RewriteSummary> {
    let config = RewriteConfig::default().with_substitution(from, to);
    RewriteEngine::new(config)?.process_directory(dir)
}
