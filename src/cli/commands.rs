//! Command implementations for the agronomic CSV translator CLI
//!
//! This module contains the main command execution logic, output rendering
//! and error handling for the CLI interface. The library surfaces typed
//! errors; the CLI wraps them with user-facing context.

use crate::cli::args::{Args, Commands, OutputFormat, TranslateArgs};
use crate::{CsvTranslator, TranslationOutput};
use anyhow::{Context, Result};
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Main command runner
///
/// Dispatches the parsed subcommand. Logging is initialized here so that
/// the verbosity flags of the subcommand take effect before any work runs.
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Translate(translate_args)) => run_translate(translate_args),
        None => {
            // main() shows help before calling run; nothing to do here
            Ok(())
        }
    }
}

/// Execute the translate command end to end
fn run_translate(args: TranslateArgs) -> Result<()> {
    let start_time = Instant::now();

    setup_logging(&args);
    info!("Starting agronomic CSV translation");
    debug!("Command line arguments: {:?}", args);

    validate_inputs(&args)?;

    let mut translator = CsvTranslator::default();
    for input in &args.inputs {
        translator
            .translate_file(input)
            .with_context(|| format!("failed to translate '{}'", input.display()))?;
    }

    let stats = translator.stats().clone();
    let output = translator.finish();

    info!(
        files = stats.files_processed,
        lines = stats.lines_read,
        records = output.record_count(),
        inserted = stats.values_inserted,
        dropped = stats.values_dropped,
        elapsed = ?start_time.elapsed(),
        "translation complete"
    );
    if !stats.is_clean() {
        warn!(
            count = stats.values_dropped,
            "some values were dropped during translation"
        );
    }
    if output.is_empty() {
        warn!("no records survived consolidation");
    }

    write_output(&args, &output)
}

/// Initialize the tracing subscriber from the verbosity flags
///
/// `RUST_LOG` takes precedence over `-v`/`-q` when set. Logs go to stderr
/// so JSON on stdout stays machine-readable.
fn setup_logging(args: &TranslateArgs) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.get_log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Check that every input path exists before any work starts
fn validate_inputs(args: &TranslateArgs) -> Result<()> {
    for input in &args.inputs {
        if !input.exists() {
            anyhow::bail!("input file does not exist: {}", input.display());
        }
        if input.is_dir() {
            anyhow::bail!(
                "'{}' is a directory; pass CSV files or ZIP bundles",
                input.display()
            );
        }
    }
    Ok(())
}

/// Render the translation result to the chosen destination
fn write_output(args: &TranslateArgs, output: &TranslationOutput) -> Result<()> {
    let rendered = match args.format {
        OutputFormat::Json => {
            if args.pretty {
                serde_json::to_string_pretty(output)
            } else {
                serde_json::to_string(output)
            }
            .context("failed to serialize translation output")?
        }
        OutputFormat::Summary => format!(
            "experiments: {}\nweathers: {}\nsoils: {}",
            output.experiments.len(),
            output.weathers.len(),
            output.soils.len()
        ),
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write output to '{}'", path.display()))?;
            info!(file = %path.display(), "wrote translation output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{rendered}").context("failed to write output to stdout")?;
        }
    }
    Ok(())
}
