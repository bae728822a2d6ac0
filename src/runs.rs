//! Run extraction: run-length encoding over the occupancy trace
//!
//! A "run" is a maximal contiguous span of ticks during which the same
//! thread (or the idle sentinel) held the processor. Runs partition the
//! tick log: the first run starts at the first sample's time and the
//! last run ends at the last sample's time. A run's `end_time` is the
//! time of its LAST sample, not the start of the successor run, so two
//! adjacent runs are normally separated by one tick.
//!
//! Run extraction is the input to timeline rendering and is an
//! independent check on the context-switch count:
//! `extract_runs(s).len() - 1 == count_switches(s)` for every non-empty
//! trace.

use crate::error::{AnalysisError, Result};
use crate::trace::{Sample, IDLE_THREAD};
use serde::{Deserialize, Serialize};

/// A maximal contiguous span of ticks sharing one thread id
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Time of the run's first sample
    pub start_time: f64,
    /// Time of the run's last sample (inclusive)
    pub end_time: f64,
    /// Occupying thread id, or [`IDLE_THREAD`]
    pub thread: i64,
}

impl Run {
    /// Span covered by the run's own samples (zero for a single-tick run)
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// True if this run is an idle gap
    pub fn is_idle(&self) -> bool {
        self.thread == IDLE_THREAD
    }
}

/// Extract the ordered run sequence from a tick log
///
/// Scans the samples once, closing the current run whenever the thread
/// id changes and always closing the final run with the last sample's
/// time. Output length ranges from 1 (no changes) to `samples.len()`
/// (every tick differs from its predecessor). Pure function; an empty
/// trace is an error, not an empty result.
pub fn extract_runs(samples: &[Sample]) -> Result<Vec<Run>> {
    if samples.is_empty() {
        return Err(AnalysisError::EmptyInput { what: "samples" });
    }

    let mut runs = Vec::new();
    let mut start = samples[0].time;

    for i in 1..samples.len() {
        if samples[i].thread != samples[i - 1].thread {
            runs.push(Run {
                start_time: start,
                end_time: samples[i - 1].time,
                thread: samples[i - 1].thread,
            });
            start = samples[i].time;
        }
    }

    let last = samples[samples.len() - 1];
    runs.push(Run {
        start_time: start,
        end_time: last.time,
        thread: last.thread,
    });

    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(pairs: &[(f64, i64)]) -> Vec<Sample> {
        pairs.iter().map(|&(t, p)| Sample::new(t, p)).collect()
    }

    #[test]
    fn test_empty_trace_is_an_error() {
        assert_eq!(
            extract_runs(&[]),
            Err(AnalysisError::EmptyInput { what: "samples" })
        );
    }

    #[test]
    fn test_single_sample_yields_one_zero_duration_run() {
        let runs = extract_runs(&trace(&[(3.0, 1)])).unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].start_time, 3.0);
        assert_eq!(runs[0].end_time, 3.0);
        assert_eq!(runs[0].duration(), 0.0);
        assert_eq!(runs[0].thread, 1);
    }

    #[test]
    fn test_all_same_thread_yields_one_run() {
        let runs = extract_runs(&trace(&[(0.0, 2), (1.0, 2), (2.0, 2), (3.0, 2)])).unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].start_time, 0.0);
        assert_eq!(runs[0].end_time, 3.0);
    }

    #[test]
    fn test_alternating_threads_yield_one_run_per_sample() {
        let samples = trace(&[(0.0, 1), (1.0, 2), (2.0, 1), (3.0, 2)]);
        let runs = extract_runs(&samples).unwrap();
        assert_eq!(runs.len(), samples.len());
        for (run, sample) in runs.iter().zip(&samples) {
            assert_eq!(run.start_time, sample.time);
            assert_eq!(run.end_time, sample.time);
            assert_eq!(run.thread, sample.thread);
        }
    }

    #[test]
    fn test_mixed_trace_with_idle_tail() {
        // Worked example: two threads then an idle tail.
        let samples = trace(&[(0.0, 1), (1.0, 1), (2.0, 2), (3.0, 2), (4.0, -1), (5.0, -1)]);
        let runs = extract_runs(&samples).unwrap();
        assert_eq!(
            runs,
            vec![
                Run { start_time: 0.0, end_time: 1.0, thread: 1 },
                Run { start_time: 2.0, end_time: 3.0, thread: 2 },
                Run { start_time: 4.0, end_time: 5.0, thread: -1 },
            ]
        );
        assert!(runs[2].is_idle());
        assert!(!runs[0].is_idle());
    }

    #[test]
    fn test_runs_cover_trace_endpoints() {
        let samples = trace(&[(10.0, 1), (11.0, -1), (12.0, -1), (13.0, 3)]);
        let runs = extract_runs(&samples).unwrap();
        assert_eq!(runs[0].start_time, 10.0);
        assert_eq!(runs[runs.len() - 1].end_time, 13.0);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let samples = trace(&[(0.0, 1), (1.0, 2), (2.0, 2), (3.0, -1)]);
        let first = extract_runs(&samples).unwrap();
        let second = extract_runs(&samples).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_idle_only_trace() {
        let runs = extract_runs(&trace(&[(0.0, -1), (1.0, -1)])).unwrap();
        assert_eq!(runs.len(), 1);
        assert!(runs[0].is_idle());
    }
}
