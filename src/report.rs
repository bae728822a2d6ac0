//! Plain-text reports: metrics blocks, run tables, and the comparison
//! table
//!
//! Formatting only; every number printed here comes straight out of the
//! analysis core.

use crate::compare::TrialMetrics;
use crate::metrics::MetricsSnapshot;
use crate::runs::Run;

/// Label shown for a run in tables and timelines
fn thread_label(run: &Run) -> String {
    if run.is_idle() {
        "x".to_string()
    } else {
        format!("T{}", run.thread)
    }
}

/// Render the metrics summary block for one trial
pub fn metrics_block(label: &str, m: &MetricsSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n", label));
    out.push_str(&format!(
        "Average waiting time:     {:.2} ms\n",
        m.avg_waiting_time
    ));
    out.push_str(&format!(
        "Peak waiting time:        {:.2} ms\n",
        m.peak_waiting_time
    ));
    out.push_str(&format!(
        "Average burst time:       {:.2} ms\n",
        m.avg_burst_time
    ));
    out.push_str(&format!(
        "Average turnaround time:  {:.2} ms\n",
        m.avg_turnaround_time
    ));
    out.push_str(&format!(
        "Average response time:    {:.2} ms\n",
        m.avg_response_time
    ));
    out.push_str(&format!(
        "Context switch overhead:  {}\n",
        m.context_switch_overhead
    ));
    out.push_str(&format!(
        "CPU utilization:          {:.1}%\n",
        m.cpu_utilization * 100.0
    ));
    out
}

/// Render the run sequence as an aligned table
pub fn run_table(runs: &[Run]) -> String {
    let mut out = String::new();
    out.push_str("     start        end   duration  thread\n");
    out.push_str("---------- ---------- ----------  ------\n");
    for run in runs {
        out.push_str(&format!(
            "{:>10.4} {:>10.4} {:>10.4}  {}\n",
            run.start_time,
            run.end_time,
            run.duration(),
            thread_label(run)
        ));
    }
    out
}

/// Render a one-line Gantt-style timeline
///
/// Each run becomes a bracketed cell whose width is proportional to its
/// share of the trace extent; idle gaps are marked `x`.
pub fn timeline(runs: &[Run], width: usize) -> String {
    if runs.is_empty() {
        return String::new();
    }
    let extent = runs[runs.len() - 1].end_time - runs[0].start_time;
    let mut line = String::new();
    for run in runs {
        let label = thread_label(run);
        let cells = if extent > 0.0 {
            ((run.duration() / extent) * width as f64).round() as usize
        } else {
            0
        };
        let body = cells.max(label.len() + 1);
        line.push('[');
        line.push_str(&label);
        for _ in label.len()..body {
            line.push('=');
        }
        line.push(']');
    }
    line.push('\n');
    line
}

/// Render the algorithm comparison table, one row per trial in input
/// order
pub fn comparison_table(rows: &[TrialMetrics]) -> String {
    let mut out = String::new();
    out.push_str(
        "algorithm         avg_wait  peak_wait  avg_burst  avg_turnaround  avg_response  switches   cpu%\n",
    );
    out.push_str(
        "----------------  --------  ---------  ---------  --------------  ------------  --------  -----\n",
    );
    for row in rows {
        out.push_str(&format!(
            "{:<16} {:>9.2} {:>10.2} {:>10.2} {:>15.2} {:>13.2} {:>9} {:>6.1}\n",
            row.label,
            row.metrics.avg_waiting_time,
            row.metrics.peak_waiting_time,
            row.metrics.avg_burst_time,
            row.metrics.avg_turnaround_time,
            row.metrics.avg_response_time,
            row.metrics.context_switch_overhead,
            row.metrics.cpu_utilization * 100.0
        ));
    }
    out
}
