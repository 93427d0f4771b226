//! Directory rewrite engine: list, load, transform, save

use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::{RewriteError, RewriteErrorKind, RewriteResult};
use crate::parser::directory::find_json_files;
use crate::parser::{parse_from_string, read_json_text, TopLevelKind};
use crate::rewrite::config::{NonObjectPolicy, RewriteConfig};
use crate::rewrite::serializer::to_pretty_string;
use crate::rewrite::stats::RewriteStatistics;
use crate::rewrite::substitute::{count_occurrences, recursive_replace};
use crate::rewrite::writer::write_file;

/// Result of processing a single file
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub top_level: TopLevelKind,
    pub replacements: usize,
    pub written: bool,
    pub input_size: u64,
    pub output_size: u64,
}

impl FileOutcome {
    pub fn changed(&self) -> bool {
        self.replacements > 0
    }
}

/// Rewritten in-memory document
#[derive(Debug, Clone)]
pub struct RewrittenDocument {
    pub content: String,
    pub top_level: TopLevelKind,
    pub replacements: usize,
}

/// Outcome of a directory run
#[derive(Debug)]
pub struct RewriteSummary {
    pub outcomes: Vec<FileOutcome>,
    /// Per-file failures, only populated when continuing on error
    pub failures: Vec<(PathBuf, RewriteError)>,
    pub statistics: RewriteStatistics,
}

impl RewriteSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Progress notifications emitted while processing a directory
#[derive(Debug)]
pub enum RewriteEvent<'a> {
    /// Listing finished with this many selected files
    Found(usize),
    /// A file was processed
    Processed(&'a FileOutcome),
    /// A file failed
    Failed(&'a Path, &'a RewriteError),
}

/// Main rewrite engine
pub struct RewriteEngine {
    config: RewriteConfig,
}

impl RewriteEngine {
    /// Create a new engine, rejecting invalid configuration
    pub fn new(config: RewriteConfig) -> RewriteResult<Self> {
        config.validate().map_err(RewriteError::configuration)?;
        let substitution = &config.substitution;
        if substitution.is_noop() {
            tracing::warn!(from = %substitution.from, "search and replacement are identical");
        } else if substitution.is_self_reintroducing() {
            tracing::warn!(
                from = %substitution.from,
                to = %substitution.to,
                "replacement contains the search string; repeated runs will keep matching"
            );
        }
        Ok(Self { config })
    }

    /// Substitute string values when the top level is an object. Other documents are
    /// returned unchanged with zero replacements.
    pub fn rewrite_value(&self, value: Value) -> (Value, usize) {
        if !value.is_object() {
            return (value, 0);
        }

        let substitution = &self.config.substitution;
        let replacements = count_occurrences(&value, &substitution.from);
        if replacements == 0 {
            return (value, 0);
        }

        (
            recursive_replace(value, &substitution.from, &substitution.to),
            replacements,
        )
    }

    /// Parse, transform and serialize JSON text without touching the filesystem
    pub fn rewrite_str(&self, text: &str) -> RewriteResult<RewrittenDocument> {
        let value = parse_from_string(text)?;
        self.render(value, None)
    }

    fn render(&self, value: Value, path: Option<&Path>) -> RewriteResult<RewrittenDocument> {
        let top_level = TopLevelKind::of(&value);
        let (value, replacements) = self.rewrite_value(value);
        let content = to_pretty_string(&value, self.config.indent_size).map_err(|e| {
            RewriteError::rewrite(RewriteErrorKind::serialize(
                e.to_string(),
                path.map(Path::to_path_buf),
            ))
        })?;

        Ok(RewrittenDocument {
            content,
            top_level,
            replacements,
        })
    }

    /// Load, transform and write back a single file
    pub fn process_file(&self, path: &Path) -> RewriteResult<FileOutcome> {
        let text = read_json_text(path)?;
        let input_size = text.len() as u64;
        let value = parse_from_string(&text).map_err(|e| e.with_path(path.to_path_buf()))?;

        let top_level = TopLevelKind::of(&value);
        if !top_level.is_object() && self.config.non_object == NonObjectPolicy::Skip {
            tracing::warn!(
                path = %path.display(),
                kind = top_level.as_str(),
                "skipping non-object document"
            );
            return Ok(FileOutcome {
                path: path.to_path_buf(),
                top_level,
                replacements: 0,
                written: false,
                input_size,
                output_size: 0,
            });
        }

        let document = self.render(value, Some(path))?;
        let skip_write =
            self.config.dry_run || (self.config.only_changed && document.replacements == 0);

        if !skip_write {
            write_file(path, &document.content, self.config.write_mode)?;
        }

        tracing::debug!(
            path = %path.display(),
            replacements = document.replacements,
            written = !skip_write,
            "processed file"
        );

        Ok(FileOutcome {
            path: path.to_path_buf(),
            top_level,
            replacements: document.replacements,
            written: !skip_write,
            input_size,
            output_size: document.content.len() as u64,
        })
    }

    /// Rewrite every selected JSON file in `dir`
    pub fn process_directory(&self, dir: &Path) -> RewriteResult<RewriteSummary> {
        self.process_directory_with(dir, |_| {})
    }

    /// Rewrite every selected JSON file in `dir`, reporting progress to `on_event`.
    ///
    /// Files are processed in listing order. Without `continue_on_error` the first
    /// failure is returned and files already rewritten stay rewritten.
    pub fn process_directory_with<F>(
        &self,
        dir: &Path,
        mut on_event: F,
    ) -> RewriteResult<RewriteSummary>
    where
        F: FnMut(RewriteEvent<'_>),
    {
        let start_time = Instant::now();
        let files = find_json_files(dir, self.config.recursive)?;
        on_event(RewriteEvent::Found(files.len()));
        tracing::info!(dir = %dir.display(), count = files.len(), "rewriting json files");

        let mut statistics = RewriteStatistics::new();
        statistics.files_found = files.len();
        let mut outcomes = Vec::with_capacity(files.len());
        let mut failures = Vec::new();

        for file in files {
            match self.process_file(&file) {
                Ok(outcome) => {
                    statistics.record(&outcome);
                    on_event(RewriteEvent::Processed(&outcome));
                    outcomes.push(outcome);
                }
                Err(e) => {
                    statistics.record_failure();
                    on_event(RewriteEvent::Failed(&file, &e));
                    if !self.config.continue_on_error {
                        return Err(e);
                    }
                    tracing::warn!(path = %file.display(), error = %e, "continuing after failure");
                    failures.push((file, e));
                }
            }
        }

        statistics.finish(start_time.elapsed());
        Ok(RewriteSummary {
            outcomes,
            failures,
            statistics,
        })
    }
}
