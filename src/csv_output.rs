//! CSV output format for analysis results
//!
//! Spreadsheet-friendly exports of the run sequence and the metrics /
//! comparison table.

use crate::compare::TrialMetrics;
use crate::runs::Run;

/// Escape CSV field (handle commas, quotes, newlines)
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Generate CSV output for a run sequence
pub fn runs_to_csv(runs: &[Run]) -> String {
    let mut output = String::new();
    output.push_str("start_time,end_time,duration,thread\n");
    for run in runs {
        output.push_str(&format!(
            "{},{},{},{}\n",
            run.start_time,
            run.end_time,
            run.duration(),
            run.thread
        ));
    }
    output
}

/// Generate CSV output for metrics rows (single trial or comparison)
pub fn metrics_to_csv(rows: &[TrialMetrics]) -> String {
    let mut output = String::new();
    output.push_str(
        "algorithm,avg_waiting_time,peak_waiting_time,avg_burst_time,avg_turnaround_time,avg_response_time,context_switch_overhead,cpu_utilization\n",
    );
    for row in rows {
        output.push_str(&escape_field(&row.label));
        output.push_str(&format!(
            ",{},{},{},{},{},{},{}\n",
            row.metrics.avg_waiting_time,
            row.metrics.peak_waiting_time,
            row.metrics.avg_burst_time,
            row.metrics.avg_turnaround_time,
            row.metrics.avg_response_time,
            row.metrics.context_switch_overhead,
            row.metrics.cpu_utilization
        ));
    }
    output
}
