/*!
 * Report Rendering
 * Plain-text views of a simulation for terminal output
 *
 * Layout follows the desktop simulator's panels: the process list, a Gantt
 * strip with time markers, the results table and the averages line.
 */

use crate::core::limits::{BURST_COLUMN_WIDTH, PID_COLUMN_WIDTH};
use crate::engine::SimulationReport;
use crate::metrics::ResultRow;
use crate::process::ProcessInfo;
use crate::timeline::Timeline;
use std::fmt::Write;

const HEADERS: [&str; 4] = ["Process ID", "Burst Time", "Waiting Time", "Turnaround Time"];

/// One line per registered process
pub fn format_process_list(processes: &[ProcessInfo]) -> String {
    let mut out = String::new();
    for p in processes {
        let _ = writeln!(
            out,
            "PID: {:<pw$} | Burst: {:<bw$}",
            p.pid,
            p.burst,
            pw = PID_COLUMN_WIDTH,
            bw = BURST_COLUMN_WIDTH
        );
    }
    out
}

/// Text Gantt strip: a bar of labelled cells above a time axis
pub fn render_gantt(timeline: &Timeline, title: &str) -> String {
    let mut out = format!("Gantt Chart - {}\n", title);
    if timeline.is_empty() {
        return out;
    }

    // Column where each cell starts (the position of its left '|'),
    // counted in chars so non-ASCII pids stay aligned with the axis
    let mut columns = Vec::with_capacity(timeline.len() + 1);
    let mut bar = String::from("|");
    let mut column = 0;
    for segment in timeline {
        columns.push(column);
        let width = cell_width(segment.pid.as_str(), segment.end);
        let _ = write!(bar, "{:^width$}|", segment.pid.as_str(), width = width);
        column += width + 1;
    }
    columns.push(column);

    let mut axis = String::new();
    for marker in timeline.markers() {
        let segment = &timeline.segments()[marker.segment];
        let column = if marker.time == segment.start {
            columns[marker.segment]
        } else {
            columns[marker.segment + 1]
        };
        let target = if axis.is_empty() {
            column
        } else {
            column.max(axis.len() + 1)
        };
        while axis.len() < target {
            axis.push(' ');
        }
        let _ = write!(axis, "{}", marker.time);
    }

    out.push_str(&bar);
    out.push('\n');
    out.push_str(&axis);
    out.push('\n');
    out
}

fn cell_width(pid: &str, end: u64) -> usize {
    let label = pid.chars().count() + 2;
    let time = end.to_string().len() + 1;
    label.max(time).max(3)
}

/// Results table with the columns of the desktop view
pub fn render_results_table(rows: &[ResultRow]) -> String {
    let widths = HEADERS.map(str::len);
    let mut out = String::new();

    let _ = writeln!(out, "{}", HEADERS.join(" | "));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));

    for row in rows {
        let _ = writeln!(
            out,
            "{:^w0$} | {:^w1$} | {:^w2$} | {:^w3$}",
            row.pid,
            row.burst,
            row.waiting,
            row.turnaround,
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        );
    }
    out
}

/// Averages line, two decimals
pub fn format_averages(report: &SimulationReport) -> String {
    format!(
        "Average Waiting Time: {:.2}  |  Average Turnaround Time: {:.2}",
        report.avg_waiting, report.avg_turnaround
    )
}

/// Full text report
pub fn render_text(processes: &[ProcessInfo], report: &SimulationReport) -> String {
    let mut out = String::new();
    out.push_str("Processes\n");
    out.push_str(&format_process_list(processes));
    out.push('\n');
    out.push_str(&render_gantt(&report.timeline, report.policy.display_name()));
    out.push('\n');
    out.push_str(&render_results_table(&report.results));
    out.push('\n');
    out.push_str(&format_averages(report));
    out.push('\n');
    out
}
