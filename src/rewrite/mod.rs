//! JSON rewrite module
//!
//! This module contains the substitution transform, configuration, file writing
//! and the directory engine.

pub mod config;
pub mod engine;
pub mod serializer;
pub mod stats;
pub mod substitute;
pub mod writer;

pub use config::{NonObjectPolicy, RewriteConfig, Substitution, WriteMode};
pub use engine::{FileOutcome, RewriteEngine, RewriteEvent, RewriteSummary, RewrittenDocument};
pub use stats::RewriteStatistics;
pub use substitute::recursive_replace;
