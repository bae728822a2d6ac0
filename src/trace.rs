//! Trace and metadata input types
//!
//! A scheduler simulation produces two CSV files per algorithm trial:
//! a headerless tick log (`time,thread` per row, one row per scheduler
//! tick) and a metadata export with one record per thread. Both are
//! loaded once and treated as immutable for the analysis session.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Thread id reserved for "no thread is executing"
pub const IDLE_THREAD: i64 = -1;

/// One scheduler tick: which thread held the processor at `time`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Timestamp of the tick (milliseconds in the simulator's clock)
    pub time: f64,
    /// Occupying thread id, or [`IDLE_THREAD`]
    pub thread: i64,
}

impl Sample {
    pub fn new(time: f64, thread: i64) -> Self {
        Self { time, thread }
    }

    /// True if the processor was idle at this tick
    pub fn is_idle(&self) -> bool {
        self.thread == IDLE_THREAD
    }
}

/// Per-thread metadata exported by the simulator
///
/// The idle sentinel never has a metadata record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadMeta {
    pub id: i64,
    pub arrival_time: f64,
    pub burst_time: f64,
    pub completion_time: f64,
    pub waiting_time: f64,
    /// `completion_time - arrival_time`; derived when the export omits it
    pub turn_around_time: f64,
}

/// Load a headerless `time,thread` tick log
///
/// Tolerates an optional `time,thread` header row and blank lines.
pub fn load_samples(path: &Path) -> Result<Vec<Sample>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read trace file {}", path.display()))?;
    parse_samples(&content).with_context(|| format!("in trace file {}", path.display()))
}

/// Parse tick log content (exposed for tests and in-memory use)
pub fn parse_samples(content: &str) -> Result<Vec<Sample>> {
    let mut samples = Vec::new();
    let mut first_row = true;
    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split(',').map(str::trim);
        let (time, thread) = match (fields.next(), fields.next()) {
            (Some(t), Some(p)) => (t, p),
            _ => bail!("line {}: expected `time,thread`, got `{}`", lineno + 1, line),
        };
        if first_row {
            first_row = false;
            if time.parse::<f64>().is_err() {
                // Header row
                continue;
            }
        }
        let time: f64 = time
            .parse()
            .with_context(|| format!("line {}: bad timestamp `{}`", lineno + 1, time))?;
        let thread: i64 = thread
            .parse()
            .with_context(|| format!("line {}: bad thread id `{}`", lineno + 1, thread))?;
        samples.push(Sample { time, thread });
    }
    Ok(samples)
}

/// Load a thread metadata CSV
///
/// The header names the columns; order does not matter and unknown
/// columns (e.g. `priority`) are ignored. The simulator pads some
/// fields with spaces, so every field is trimmed.
pub fn load_thread_meta(path: &Path) -> Result<Vec<ThreadMeta>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read metadata file {}", path.display()))?;
    parse_thread_meta(&content).with_context(|| format!("in metadata file {}", path.display()))
}

/// Parse metadata CSV content (exposed for tests and in-memory use)
pub fn parse_thread_meta(content: &str) -> Result<Vec<ThreadMeta>> {
    let mut rows = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());
    let header = match rows.next() {
        Some((_, h)) => h,
        None => return Ok(Vec::new()),
    };
    let columns: Vec<&str> = header.split(',').map(str::trim).collect();
    let col = |name: &str| columns.iter().position(|c| *c == name);

    let id_col = col("id").context("metadata header is missing the `id` column")?;
    let arrival_col =
        col("arrival_time").context("metadata header is missing the `arrival_time` column")?;
    let burst_col =
        col("burst_time").context("metadata header is missing the `burst_time` column")?;
    let completion_col = col("completion_time")
        .context("metadata header is missing the `completion_time` column")?;
    let waiting_col =
        col("waiting_time").context("metadata header is missing the `waiting_time` column")?;
    let turnaround_col = col("turn_around_time");

    let mut records = Vec::new();
    for (lineno, line) in rows {
        let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
        if fields.len() < columns.len() {
            bail!(
                "line {}: expected {} fields, got {}",
                lineno + 1,
                columns.len(),
                fields.len()
            );
        }
        let num = |idx: usize, name: &str| -> Result<f64> {
            fields[idx]
                .parse()
                .with_context(|| format!("line {}: bad {} `{}`", lineno + 1, name, fields[idx]))
        };
        let id: i64 = fields[id_col]
            .parse()
            .with_context(|| format!("line {}: bad thread id `{}`", lineno + 1, fields[id_col]))?;
        let arrival_time = num(arrival_col, "arrival_time")?;
        let burst_time = num(burst_col, "burst_time")?;
        let completion_time = num(completion_col, "completion_time")?;
        let waiting_time = num(waiting_col, "waiting_time")?;
        let turn_around_time = match turnaround_col {
            Some(idx) => num(idx, "turn_around_time")?,
            None => completion_time - arrival_time,
        };
        records.push(ThreadMeta {
            id,
            arrival_time,
            burst_time,
            completion_time,
            waiting_time,
            turn_around_time,
        });
    }
    Ok(records)
}
