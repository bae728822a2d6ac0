//! CLI argument parsing for Schedlens

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for analysis reports
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "schedlens")]
#[command(version)]
#[command(about = "CPU scheduler trace analyzer", long_about = None)]
pub struct Cli {
    /// Scheduler tick trace CSV (one `time,thread` row per tick; thread -1 = idle)
    #[arg(short = 't', long = "trace", value_name = "FILE")]
    pub trace: Option<PathBuf>,

    /// Thread metadata CSV exported by the simulator
    #[arg(short = 'm', long = "meta", value_name = "FILE")]
    pub meta: Option<PathBuf>,

    /// Label for the analyzed algorithm
    #[arg(short = 'l', long = "label", default_value = "trace")]
    pub label: String,

    /// Include the run table and timeline in the report
    #[arg(short = 'r', long = "runs")]
    pub runs: bool,

    /// Comparison trial spec LABEL=TRACE:META (repeat for each algorithm)
    #[arg(long = "trial", value_name = "SPEC")]
    pub trials: Vec<String>,

    /// Output format (text, json or csv)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,
}

/// Parsed `LABEL=TRACE:META` comparison spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialSpec {
    pub label: String,
    pub trace: PathBuf,
    pub meta: PathBuf,
}

impl TrialSpec {
    /// Parse a `--trial` argument
    ///
    /// The label is everything before the first `=`; the two paths are
    /// split on the LAST `:` so drive-letter-free paths containing `:`
    /// still work on the trace side.
    pub fn parse(spec: &str) -> Result<Self> {
        let (label, files) = spec
            .split_once('=')
            .with_context(|| format!("trial spec `{}` is missing `=` (LABEL=TRACE:META)", spec))?;
        let (trace, meta) = files
            .rsplit_once(':')
            .with_context(|| format!("trial spec `{}` is missing `:` (LABEL=TRACE:META)", spec))?;
        if label.is_empty() || trace.is_empty() || meta.is_empty() {
            bail!("trial spec `{}` has an empty label or path", spec);
        }
        Ok(Self {
            label: label.to_string(),
            trace: PathBuf::from(trace),
            meta: PathBuf::from(meta),
        })
    }
}
