//! Bosun - telemetry dictionary and normalization tool
//!
//! Validates field dictionaries and batch-normalizes telemetry exports to
//! the canonical starboard-tack representation.

mod ingest;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tracing::Level;

use common::logging::{init_logging, LogConfig};
use windward_config::{load_rule_table, validate_headers, TransformKind};
use windward_model::normalize_batch;

#[derive(Parser)]
#[command(name = "bosun")]
#[command(about = "Bosun - windward telemetry tool")]
#[command(long_about = "Bosun - windward telemetry tool

Dictionary Management:
  validate    Validate a field dictionary without processing any rows
  fields      List the channels a dictionary declares

Telemetry Processing:
  normalize   Normalize a telemetry CSV to starboard-tack representation

Examples:
  bosun validate -d config/fields.yaml
  bosun fields -d config/fields.yaml
  bosun normalize race.csv normalized.csv
  bosun normalize race.csv normalized.csv --tack-column PORT_TACK --strict

Use 'bosun <command> --help' for more information on a specific command.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Field dictionary path
    #[arg(
        short = 'd',
        long = "dictionary",
        global = true,
        default_value = "config/fields.yaml"
    )]
    dictionary: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a field dictionary without processing any rows
    Validate,

    /// List the channels a dictionary declares
    Fields,

    /// Normalize a telemetry CSV to starboard-tack representation
    Normalize {
        /// Input telemetry CSV
        input: PathBuf,

        /// Output CSV for normalized rows
        output: PathBuf,

        /// Boolean column giving the port-tack flag; when omitted, tack is
        /// derived from the sign of TWA_SGP_deg
        #[arg(long = "tack-column")]
        tack_column: Option<String>,

        /// Abort on the first bad row instead of skipping it
        #[arg(long)]
        strict: bool,

        /// Print the batch report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let log_config = LogConfig {
        service_name: "bosun".to_string(),
        console_level: if cli.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        },
        log_dir: None,
    };
    let _guard = init_logging(&log_config)
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    match cli.command {
        Commands::Validate => cmd_validate(&cli.dictionary),
        Commands::Fields => cmd_fields(&cli.dictionary),
        Commands::Normalize {
            input,
            output,
            tack_column,
            strict,
            json,
        } => cmd_normalize(
            &cli.dictionary,
            &input,
            &output,
            tack_column.as_deref(),
            strict,
            json,
        ),
    }
}

fn cmd_validate(dictionary: &Path) -> Result<()> {
    match load_rule_table(dictionary) {
        Ok((dict, table)) => {
            let swaps = dict.fields.iter().filter(|f| f.transform.is_swap()).count();
            println!(
                "{} {} ({} fields, {} swap pairs)",
                "✓".green().bold(),
                dictionary.display(),
                table.len(),
                swaps / 2
            );
            Ok(())
        },
        Err(e) => {
            println!("{} {}", "✗".red().bold(), e);
            bail!("dictionary validation failed");
        },
    }
}

fn cmd_fields(dictionary: &Path) -> Result<()> {
    let (dict, _) = load_rule_table(dictionary)
        .with_context(|| format!("loading {}", dictionary.display()))?;

    println!(
        "{:<28} {:<8} {:<28} {}",
        "FIELD".bold(),
        "UNIT".bold(),
        "TRANSFORM".bold(),
        "DESCRIPTION".bold()
    );
    for field in &dict.fields {
        println!(
            "{:<28} {:<8} {:<28} {}",
            field.name,
            field.unit,
            rule_label(&field.transform),
            field.description
        );
    }
    Ok(())
}

fn rule_label(kind: &TransformKind) -> String {
    match kind {
        TransformKind::Identity => "identity".to_string(),
        TransformKind::Negate => "negate".to_string(),
        TransformKind::OffsetWrap { offset, modulus } => {
            format!("offset_wrap({}, {})", offset, modulus)
        },
        TransformKind::SwapPair { partner } => format!("swap({})", partner),
    }
}

fn cmd_normalize(
    dictionary: &Path,
    input: &Path,
    output: &Path,
    tack_column: Option<&str>,
    strict: bool,
    json: bool,
) -> Result<()> {
    let (dict, table) = load_rule_table(dictionary)
        .with_context(|| format!("loading {}", dictionary.display()))?;

    let file = ingest::read_telemetry(input, tack_column)
        .with_context(|| format!("reading {}", input.display()))?;

    let header_report = validate_headers(&file.headers, &dict);
    for warning in &header_report.warnings {
        tracing::warn!("{}", warning);
    }
    if !header_report.is_valid() {
        for error in &header_report.errors {
            println!("{} {}", "✗".red().bold(), error);
        }
        bail!("input header cannot be normalized against this dictionary");
    }

    let outcome = normalize_batch(&table, file.rows, strict)
        .map_err(|e| anyhow::anyhow!("strict mode abort: {}", e))?;

    ingest::write_telemetry(output, &file.headers, &outcome.rows)
        .with_context(|| format!("writing {}", output.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.report)?);
    } else {
        println!(
            "{} {} rows normalized to {}",
            "✓".green().bold(),
            outcome.report.normalized,
            output.display()
        );
        if outcome.report.skipped > 0 {
            println!(
                "{} {} rows skipped",
                "⚠".yellow().bold(),
                outcome.report.skipped
            );
            for issue in &outcome.report.issues {
                println!("    row {}: {}", issue.index, issue.error);
            }
        }
    }

    Ok(())
}
