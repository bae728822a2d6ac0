//! JSON output format for analysis results

use crate::compare::TrialMetrics;
use crate::metrics::MetricsSnapshot;
use crate::runs::Run;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Full report for a single analyzed trial
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonTrialReport {
    /// Algorithm label
    pub label: String,
    /// Derived metrics
    pub metrics: MetricsSnapshot,
    /// Run sequence (present only when requested)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runs: Option<Vec<Run>>,
}

/// Comparison report: one row per trial, input order preserved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonComparison {
    pub trials: Vec<TrialMetrics>,
}

/// Serialize a single-trial report as pretty JSON
pub fn trial_to_json(report: &JsonTrialReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Serialize a comparison as pretty JSON
pub fn comparison_to_json(rows: &[TrialMetrics]) -> Result<String> {
    let report = JsonComparison {
        trials: rows.to_vec(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> MetricsSnapshot {
        MetricsSnapshot {
            avg_waiting_time: 4.0,
            peak_waiting_time: 6.0,
            avg_burst_time: 3.0,
            avg_turnaround_time: 7.0,
            avg_response_time: 1.5,
            context_switch_overhead: 2,
            cpu_utilization: 0.75,
        }
    }

    #[test]
    fn test_trial_report_serializes_metrics() {
        let report = JsonTrialReport {
            label: "FCFS".to_string(),
            metrics: snapshot(),
            runs: None,
        };
        let json = trial_to_json(&report).unwrap();
        assert!(json.contains("\"label\": \"FCFS\""));
        assert!(json.contains("\"avg_waiting_time\": 4.0"));
        assert!(json.contains("\"context_switch_overhead\": 2"));
        // Absent runs are omitted entirely.
        assert!(!json.contains("\"runs\""));
    }

    #[test]
    fn test_trial_report_includes_runs_when_present() {
        let report = JsonTrialReport {
            label: "RR".to_string(),
            metrics: snapshot(),
            runs: Some(vec![Run {
                start_time: 0.0,
                end_time: 1.0,
                thread: 1,
            }]),
        };
        let json = trial_to_json(&report).unwrap();
        assert!(json.contains("\"runs\""));
        assert!(json.contains("\"start_time\": 0.0"));
    }

    #[test]
    fn test_trial_report_round_trip() {
        let report = JsonTrialReport {
            label: "SJF".to_string(),
            metrics: snapshot(),
            runs: Some(vec![Run {
                start_time: 2.0,
                end_time: 5.0,
                thread: -1,
            }]),
        };
        let json = trial_to_json(&report).unwrap();
        let parsed: JsonTrialReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.label, "SJF");
        assert_eq!(parsed.metrics, report.metrics);
        assert_eq!(parsed.runs.unwrap()[0].thread, -1);
    }

    #[test]
    fn test_comparison_preserves_order() {
        let rows = vec![
            TrialMetrics {
                label: "RR".to_string(),
                metrics: snapshot(),
            },
            TrialMetrics {
                label: "FCFS".to_string(),
                metrics: snapshot(),
            },
        ];
        let json = comparison_to_json(&rows).unwrap();
        assert!(json.find("RR").unwrap() < json.find("FCFS").unwrap());
        let parsed: JsonComparison = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.trials.len(), 2);
        assert_eq!(parsed.trials[0].label, "RR");
    }
}
