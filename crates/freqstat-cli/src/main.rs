mod config;

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};

use freqstat::prelude::*;

use crate::config::{load_config, load_table, OutputFormat};

#[derive(Parser)]
#[command(
    name = "freqstat",
    version,
    about = "Statistics for grouped frequency tables"
)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available procedures
    List,

    /// Compute a procedure over a frequency table
    Compute {
        /// Procedure slug or label (see `freqstat list`)
        problem: String,

        /// Row as INTERVAL:FREQUENCY, e.g. `10-20:5` or `3:4` (repeatable)
        #[arg(short, long = "row", value_name = "INTERVAL:FREQ")]
        rows: Vec<String>,

        /// TOML file with a `rows` array
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Number of rows the table must have
        #[arg(long)]
        rows_limit: Option<usize>,

        /// Emit JSON instead of a text report
        #[arg(long)]
        json: bool,

        /// Decimal places in the text report
        #[arg(short, long)]
        precision: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::List => {
            for kind in ProblemKind::ALL {
                println!("{:<24} {}", kind.slug(), kind.label());
            }
        }
        Commands::Compute {
            problem,
            rows,
            input,
            rows_limit,
            json,
            precision,
        } => {
            let kind: ProblemKind = problem.parse()?;

            let mut pairs = Vec::new();
            let mut file_limit = None;
            if let Some(path) = &input {
                let table = load_table(path)?;
                file_limit = table.rows_limit;
                pairs.extend(
                    table
                        .rows
                        .into_iter()
                        .map(|r| (r.interval, r.frequency.to_string())),
                );
            }
            for spec in &rows {
                pairs.push(split_row(spec)?);
            }

            let limit = resolve_rows_limit(
                pairs.len(),
                [rows_limit, file_limit, config.entry.rows_limit],
            )?;
            tracing::debug!(rows = pairs.len(), limit, problem = kind.slug(), "table loaded");

            let mut entry = DataEntry::<f64>::with_rows_limit(limit)?;
            for (i, (interval, frequency)) in pairs.iter().enumerate() {
                entry
                    .add_row(interval, frequency)
                    .with_context(|| format!("row {}", i + 1))?;
            }

            let result = entry
                .select_problem(kind)
                .with_context(|| format!("computing {}", kind))?;

            let format = if json {
                OutputFormat::Json
            } else {
                config.output.format
            };
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
                OutputFormat::Text => {
                    let precision = precision.unwrap_or(config.output.precision);
                    print!("{:.prec$}", result, prec = precision);
                }
            }
        }
    }

    Ok(())
}

/// Pick the row limit: the first explicit setting, else the number of rows supplied.
fn resolve_rows_limit(supplied: usize, explicit: [Option<usize>; 3]) -> Result<usize> {
    if supplied == 0 {
        bail!("no rows supplied (use --row or --input)");
    }
    Ok(explicit.into_iter().flatten().next().unwrap_or(supplied))
}

/// Split `INTERVAL:FREQUENCY` into its two parts.
fn split_row(spec: &str) -> Result<(String, String)> {
    let (interval, frequency) = spec
        .rsplit_once(':')
        .ok_or_else(|| anyhow!("row '{spec}' must be INTERVAL:FREQUENCY, e.g. 10-20:5"))?;
    Ok((interval.to_string(), frequency.to_string()))
}
