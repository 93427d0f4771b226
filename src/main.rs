use clap::Parser;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use jsonrebrand::cli::{handle_error, Args, CliConfig, CliUtils};
use jsonrebrand::rewrite::{RewriteEngine, RewriteEvent, RewriteSummary};
use jsonrebrand::RewriteError;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    match run(args) {
        Ok(summary) if summary.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            match e.downcast_ref::<RewriteError>() {
                Some(rewrite_error) => handle_error(rewrite_error),
                None => CliUtils::show_error(&format!("{:#}", e)),
            }
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr; RUST_LOG overrides the level picked from the flags
fn init_logging(args: &Args) {
    let level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<RewriteSummary> {
    let config = CliConfig::from_args(args)?;
    let dir = config
        .target_dir()
        .context("Failed to determine the current directory")?;
    let engine = RewriteEngine::new(config.rewrite_config.clone())?;
    let quiet = config.is_quiet();
    let dry_run = config.rewrite_config.dry_run;
    let continue_on_error = config.rewrite_config.continue_on_error;

    let mut progress: Option<indicatif::ProgressBar> = None;
    let summary = engine.process_directory_with(&dir, |event| match event {
        RewriteEvent::Found(0) => {
            CliUtils::show_warning(&format!("No JSON files found in {}", dir.display()), quiet);
        }
        RewriteEvent::Found(count) => {
            if config.want_progress_bar(count) {
                progress = Some(CliUtils::create_progress_bar(count as u64));
            } else if !quiet {
                println!("Found {} JSON files", count);
            }
        }
        RewriteEvent::Processed(outcome) => {
            let name = outcome.path.strip_prefix(&dir).unwrap_or(&outcome.path);
            if let Some(pb) = &progress {
                pb.set_message(name.display().to_string());
                pb.inc(1);
                return;
            }
            let verb = match (outcome.written, dry_run) {
                (true, _) => "rewrote",
                (false, true) => "would rewrite",
                (false, false) => "left unchanged",
            };
            CliUtils::show_success(
                &format!(
                    "{} ({} {}, {} replacements)",
                    name.display(),
                    verb,
                    outcome.top_level.as_str(),
                    outcome.replacements
                ),
                quiet,
            );
        }
        RewriteEvent::Failed(_, error) => {
            if let Some(pb) = &progress {
                pb.inc(1);
            }
            // An aborting failure is reported once by handle_error
            if continue_on_error {
                CliUtils::show_error(&error.user_message());
            }
        }
    });

    if let Some(pb) = progress.take() {
        pb.finish_and_clear();
    }
    let summary = summary?;

    if !quiet {
        println!(
            "{} in {}",
            summary.statistics.summary(),
            CliUtils::format_duration(std::time::Duration::from_millis(
                summary.statistics.processing_time_ms
            ))
        );
    }

    if config.want_stats() {
        println!("{}", summary.statistics.to_json()?);
    }

    Ok(summary)
}
