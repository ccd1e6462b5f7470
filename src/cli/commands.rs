//! Command execution for the case indexer CLI
//!
//! Builds a per-run [`AppContext`] from arguments and layered configuration,
//! runs the batch, and reports the outcome.

use crate::cli::args::{Args, OutputFormat};
use crate::cli::input::prompt_directory;
use crate::config::Config;
use crate::constants::LOG_TARGET;
use crate::error::{IndexerError, Result};
use crate::models::{BatchSummary, FileOrder, FileRecord};
use crate::processor::BatchReporter;
use colored::*;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Everything one run needs, resolved up front
#[derive(Debug, Clone)]
pub struct AppContext {
    pub directory: PathBuf,
    pub config: Config,
    pub output_format: OutputFormat,
    pub dry_run: bool,
    pub show_progress: bool,
}

impl AppContext {
    /// Resolve configuration layers and CLI overrides for `directory`
    pub fn from_args(args: &Args, directory: PathBuf) -> Result<Self> {
        Self::with_config(args, directory, load_configuration(args)?)
    }

    /// Apply CLI overrides on top of an already loaded `config`
    pub fn with_config(args: &Args, directory: PathBuf, mut config: Config) -> Result<Self> {
        apply_cli_overrides(&mut config, args);
        config.validate()?;

        Ok(Self {
            directory,
            config,
            output_format: args.output_format,
            dry_run: args.dry_run,
            show_progress: args.show_progress(),
        })
    }
}

/// Main command runner
///
/// 1. Set up logging
/// 2. Resolve the input directory, prompting if needed
/// 3. Build the run context
/// 4. Execute the batch and print the report
pub fn run(args: Args) -> Result<BatchSummary> {
    setup_logging(&args);
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let directory = match &args.directory {
        Some(directory) => directory.clone(),
        None => prompt_directory().map_err(|e| IndexerError::Prompt {
            message: format!("{:#}", e),
        })?,
    };

    let context = AppContext::from_args(&args, directory)?;
    execute(&context, &mut io::stdout())
}

/// Run the batch described by `context`, writing the report to `out`
pub fn execute<W: Write>(context: &AppContext, out: &mut W) -> Result<BatchSummary> {
    let reporter =
        BatchReporter::new(context.config.clone()).with_progress(context.show_progress);

    if context.dry_run {
        info!("Performing dry run - no spreadsheet will be created");
        let output = reporter.collect(&context.directory)?;
        write_dry_run(out, context.output_format, &output.summary, &output.rows)?;
        return Ok(output.summary);
    }

    let summary = reporter.run(&context.directory)?;
    write_report(out, context.output_format, &summary)?;
    Ok(summary)
}

/// Set up structured logging on stderr
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Load configuration using layered approach (file -> env)
fn load_configuration(args: &Args) -> Result<Config> {
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        debug!("No config file found, using defaults and environment variables");
    }

    Config::load_layered(config_file)
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(convention) = args.convention {
        config.parsing.convention = convention;
    }
    if let Some(lender) = &args.lender {
        config.parsing.tagged_lender = lender.trim().to_string();
    }
    if let Some(output_name) = &args.output_name {
        config.output.file_name = output_name.clone();
    }
    if args.sort {
        config.output.file_order = FileOrder::Name;
    }
}

fn write_report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    summary: &BatchSummary,
) -> Result<()> {
    match format {
        OutputFormat::Human => write_human_report(out, summary),
        OutputFormat::Json => write_json(out, summary),
    }
}

fn write_human_report<W: Write>(out: &mut W, summary: &BatchSummary) -> Result<()> {
    if let Some(path) = &summary.output_path {
        writeln!(
            out,
            "{} {}",
            "✅ Excel created:".bright_green().bold(),
            path.display()
        )?;
    }

    writeln!(
        out,
        "   {} files ({}): {} parsed, {} partial, {} unparsable",
        summary.files_total,
        summary.convention,
        summary.files_parsed,
        summary.files_partial,
        summary.files_unparsable
    )?;

    if summary.files_unparsable > 0 {
        writeln!(
            out,
            "   {}",
            format!(
                "{} file name(s) could not be parsed; their rows only carry the filename",
                summary.files_unparsable
            )
            .yellow()
        )?;
    }

    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| IndexerError::Io(io::Error::other(e)))?;
    writeln!(out, "{}", json)?;
    Ok(())
}

#[derive(Serialize)]
struct DryRunReport<'a> {
    summary: &'a BatchSummary,
    rows: &'a [FileRecord],
}

fn write_dry_run<W: Write>(
    out: &mut W,
    format: OutputFormat,
    summary: &BatchSummary,
    rows: &[FileRecord],
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &DryRunReport { summary, rows }),
        OutputFormat::Human => {
            writeln!(out, "{}", "Dry run - nothing written".bright_yellow().bold())?;
            for row in rows {
                let [reference, client, lender, filename] = row.export_row();
                writeln!(out, "   {} | {} | {} | {}", reference, client, lender, filename)?;
            }
            write_human_report(out, summary)
        }
    }
}
