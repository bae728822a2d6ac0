//! Side-by-side comparison of algorithm trials
//!
//! Each trial bundles a label with its tick log and metadata. The
//! comparator computes one metrics snapshot per trial, preserving input
//! order so the caller's ranking/tabulation sees trials exactly as they
//! were given. Any failing trial fails the whole comparison with the
//! offending label attached; there are no partial results.

use crate::metrics::{compute_metrics, MetricsSnapshot};
use crate::trace::{Sample, ThreadMeta};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One algorithm trial: a labelled trace plus its metadata
#[derive(Debug, Clone)]
pub struct Trial {
    pub label: String,
    pub meta: Vec<ThreadMeta>,
    pub samples: Vec<Sample>,
}

impl Trial {
    pub fn new(label: impl Into<String>, meta: Vec<ThreadMeta>, samples: Vec<Sample>) -> Self {
        Self {
            label: label.into(),
            meta,
            samples,
        }
    }
}

/// Comparison row: a trial's label with its computed metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialMetrics {
    pub label: String,
    pub metrics: MetricsSnapshot,
}

/// Compute metrics for every trial, in input order
///
/// Fail-fast: the first trial whose metrics cannot be computed aborts
/// the comparison, with the trial's label in the error context.
pub fn compare(trials: &[Trial]) -> Result<Vec<TrialMetrics>> {
    let mut rows = Vec::with_capacity(trials.len());
    for trial in trials {
        let metrics = compute_metrics(&trial.meta, &trial.samples)
            .with_context(|| format!("trial '{}'", trial.label))?;
        rows.push(TrialMetrics {
            label: trial.label.clone(),
            metrics,
        });
    }
    Ok(rows)
}
