//! Statistics for rewrite runs

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::rewrite::engine::FileOutcome;

/// Counters collected over one directory run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteStatistics {
    /// JSON files selected for processing
    pub files_found: usize,
    /// Files whose contents were replaced on disk
    pub files_written: usize,
    /// Files with at least one replacement
    pub files_changed: usize,
    /// Files left untouched by policy or dry run
    pub files_skipped: usize,
    /// Files that failed to read, parse or write
    pub files_failed: usize,
    /// Total substring replacements across all files
    pub replacements: usize,
    /// Bytes read from selected files
    pub input_size_bytes: u64,
    /// Bytes of rewritten output
    pub output_size_bytes: u64,
    /// Wall-clock time of the run in milliseconds
    pub processing_time_ms: u64,
    /// Timestamp of when statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for RewriteStatistics {
    fn default() -> Self {
        Self {
            files_found: 0,
            files_written: 0,
            files_changed: 0,
            files_skipped: 0,
            files_failed: 0,
            replacements: 0,
            input_size_bytes: 0,
            output_size_bytes: 0,
            processing_time_ms: 0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl RewriteStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one successful file into the totals
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.replacements += outcome.replacements;
        self.input_size_bytes += outcome.input_size;
        self.output_size_bytes += outcome.output_size;
        if outcome.replacements > 0 {
            self.files_changed += 1;
        }
        if outcome.written {
            self.files_written += 1;
        } else {
            self.files_skipped += 1;
        }
    }

    pub fn record_failure(&mut self) {
        self.files_failed += 1;
    }

    /// Stamp the elapsed time and collection time
    pub fn finish(&mut self, elapsed: Duration) {
        self.processing_time_ms = elapsed.as_millis() as u64;
        self.collected_at = chrono::Utc::now();
    }

    /// Get a formatted summary
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Processed {} JSON files: {} written, {} changed, {} replacements",
            self.files_found, self.files_written, self.files_changed, self.replacements
        );
        if self.files_skipped > 0 {
            summary.push_str(&format!(", {} skipped", self.files_skipped));
        }
        if self.files_failed > 0 {
            summary.push_str(&format!(", {} failed", self.files_failed));
        }
        summary
    }

    /// Export to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
