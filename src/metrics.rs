//! Scheduling-quality metrics derived from a trial's trace and metadata
//!
//! All metrics are computed in one pass over already-loaded data and
//! returned as an immutable snapshot; nothing is accumulated in place,
//! so there is no required call order and recomputation is always safe.

use crate::error::{AnalysisError, Result};
use crate::trace::{Sample, ThreadMeta};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Derived metrics for one algorithm trial
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Mean of `waiting_time` over all metadata records (ms)
    pub avg_waiting_time: f64,
    /// Maximum `waiting_time` over all metadata records (ms)
    pub peak_waiting_time: f64,
    /// Mean of `burst_time` over all metadata records (ms)
    pub avg_burst_time: f64,
    /// Mean of `turn_around_time` over all metadata records (ms)
    pub avg_turnaround_time: f64,
    /// Mean of (first scheduled tick - arrival) over threads observed in
    /// the trace (ms); a thread that never runs is excluded from the
    /// denominator
    pub avg_response_time: f64,
    /// Number of adjacent tick pairs with differing thread ids, idle
    /// transitions included
    pub context_switch_overhead: u64,
    /// Share of ticks with a real thread on the processor, in `0.0..=1.0`
    pub cpu_utilization: f64,
}

/// Count context switches directly from the tick log
///
/// A switch is any adjacent pair of ticks with differing thread ids,
/// including transitions into and out of idle. Equals
/// `extract_runs(samples).len() - 1` for the same non-empty input; the
/// two are kept as independently computed quantities.
pub fn count_switches(samples: &[Sample]) -> u64 {
    samples
        .windows(2)
        .filter(|pair| pair[0].thread != pair[1].thread)
        .count() as u64
}

/// Compute the full metrics snapshot for one trial
///
/// Fails with [`AnalysisError::EmptyInput`] when either input is empty
/// (averages over nothing are an error, not a NaN) and with
/// [`AnalysisError::UnknownThread`] when the trace references a thread
/// id with no metadata record. Metadata lookups go through a map built
/// once per call.
pub fn compute_metrics(meta: &[ThreadMeta], samples: &[Sample]) -> Result<MetricsSnapshot> {
    if meta.is_empty() {
        return Err(AnalysisError::EmptyInput {
            what: "thread metadata",
        });
    }
    if samples.is_empty() {
        return Err(AnalysisError::EmptyInput { what: "samples" });
    }

    let by_id: HashMap<i64, &ThreadMeta> = meta.iter().map(|m| (m.id, m)).collect();

    let n = meta.len() as f64;
    let avg_waiting_time = meta.iter().map(|m| m.waiting_time).sum::<f64>() / n;
    let avg_burst_time = meta.iter().map(|m| m.burst_time).sum::<f64>() / n;
    let avg_turnaround_time = meta.iter().map(|m| m.turn_around_time).sum::<f64>() / n;
    let peak_waiting_time = meta
        .iter()
        .map(|m| m.waiting_time)
        .fold(f64::NEG_INFINITY, f64::max);

    let context_switch_overhead = count_switches(samples);

    // First-seen map keyed by thread id: response time uses the first
    // tick at which each real thread appears. Every distinct id passes
    // through the metadata lookup here, so an unknown thread fails the
    // whole computation.
    let mut first_seen: HashMap<i64, f64> = HashMap::new();
    let mut response_total = 0.0;
    let mut busy_ticks = 0usize;
    for sample in samples {
        if sample.is_idle() {
            continue;
        }
        busy_ticks += 1;
        if first_seen.contains_key(&sample.thread) {
            continue;
        }
        let record = by_id
            .get(&sample.thread)
            .ok_or(AnalysisError::UnknownThread {
                thread: sample.thread,
            })?;
        response_total += sample.time - record.arrival_time;
        first_seen.insert(sample.thread, sample.time);
    }
    let avg_response_time = if first_seen.is_empty() {
        0.0
    } else {
        response_total / first_seen.len() as f64
    };

    let cpu_utilization = busy_ticks as f64 / samples.len() as f64;

    Ok(MetricsSnapshot {
        avg_waiting_time,
        peak_waiting_time,
        avg_burst_time,
        avg_turnaround_time,
        avg_response_time,
        context_switch_overhead,
        cpu_utilization,
    })
}
