//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{RewriteError, RewriteResult};
use crate::rewrite::config::{
    NonObjectPolicy, RewriteConfig, WriteMode, DEFAULT_FROM, DEFAULT_INDENT, DEFAULT_TO,
};

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "jsonrebrand")]
#[command(about = "Replace a substring in every string value of the JSON files in a directory")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Directory containing JSON files (default: current directory)
    #[arg()]
    pub dir: Option<PathBuf>,

    /// Substring to search for in string values
    #[arg(long, env = "JSONREBRAND_FROM", default_value = DEFAULT_FROM)]
    pub from: String,

    /// Replacement for every occurrence of --from
    #[arg(long, env = "JSONREBRAND_TO", default_value = DEFAULT_TO)]
    pub to: String,

    /// Recursively process subdirectories
    #[arg(long)]
    pub recursive: bool,

    /// Spaces per indentation level in rewritten files (0-8)
    #[arg(long, default_value_t = DEFAULT_INDENT)]
    pub indent: u8,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Only rewrite files that contain at least one match
    #[arg(long)]
    pub only_changed: bool,

    /// Leave files whose top-level value is not an object untouched
    #[arg(long)]
    pub skip_non_object: bool,

    /// Overwrite files in place instead of writing a temp file and renaming it
    #[arg(long)]
    pub no_atomic: bool,

    /// Continue rewriting other files when one file fails
    #[arg(long)]
    pub continue_on_error: bool,

    /// Output run statistics as JSON
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub rewrite_config: RewriteConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> RewriteResult<Self> {
        let rewrite_config = Self::create_rewrite_config(&args)?;

        Ok(Self {
            args,
            rewrite_config,
        })
    }

    /// Create rewrite configuration from CLI arguments
    fn create_rewrite_config(args: &Args) -> RewriteResult<RewriteConfig> {
        let config = RewriteConfig::default()
            .with_substitution(args.from.clone(), args.to.clone())
            .with_indent_size(args.indent)
            .map_err(RewriteError::configuration)?
            .with_recursive(args.recursive)
            .with_dry_run(args.dry_run)
            .with_only_changed(args.only_changed)
            .with_continue_on_error(args.continue_on_error)
            .with_non_object_policy(if args.skip_non_object {
                NonObjectPolicy::Skip
            } else {
                NonObjectPolicy::Reserialize
            })
            .with_write_mode(if args.no_atomic {
                WriteMode::Direct
            } else {
                WriteMode::Atomic
            });

        config.validate().map_err(RewriteError::configuration)?;
        Ok(config)
    }

    /// Target directory, defaulting to the current working directory
    pub fn target_dir(&self) -> std::io::Result<PathBuf> {
        match &self.args.dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir(),
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Whether to draw a progress bar instead of per-file lines
    pub fn want_progress_bar(&self, file_count: usize) -> bool {
        file_count > 1 && !self.args.quiet && !self.args.verbose && CliUtils::is_terminal()
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Create a progress bar for file processing
    pub fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
        let pb = indicatif::ProgressBar::new(total);
        let style = indicatif::ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        pb
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("{} {}", Self::paint("✓", console::Color::Green), message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("{} {}", Self::paint("✗", console::Color::Red), message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("{} {}", Self::paint("⚠", console::Color::Yellow), message);
        }
    }

    fn paint(symbol: &str, color: console::Color) -> String {
        if Self::should_use_color() {
            console::style(symbol).fg(color).bold().to_string()
        } else {
            symbol.to_string()
        }
    }

    pub fn is_terminal() -> bool {
        atty::is(atty::Stream::Stdout)
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        Self::is_terminal() && std::env::var("NO_COLOR").is_err()
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &RewriteError) {
    CliUtils::show_error(&error.user_message());

    if error.is_parse_error() {
        eprintln!("\nTip: Use --continue-on-error to rewrite the remaining files");
    }

    eprintln!("\nTry 'jsonrebrand --help' for usage information.");
}
