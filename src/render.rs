// src/render.rs

//! Plain-text rendering of schedules and plan reports for the terminal.

use crate::schedule::{PlanDiagnostics, ScheduleEntry, ScheduleView};
use crate::store::PlanSummary;
use crate::types::RenderStyle;

const MAX_LABEL: usize = 32;
const BAR: char = '█';
const GAP: char = ' ';

pub fn render_view(view: &ScheduleView, style: RenderStyle, width: usize) -> String {
    if view.is_empty() {
        return "(no tasks)\n".to_string();
    }
    match style {
        RenderStyle::Gantt => render_gantt(view, width),
        RenderStyle::Table => render_table(view),
    }
}

/// One bar per task, scaled so the latest end lands on `width` columns.
pub fn render_gantt(view: &ScheduleView, width: usize) -> String {
    let label_width = label_width(view.entries());
    let span = view.span_days();
    let scale = width as f64 / span;

    let mut out = String::new();
    out.push_str(&format!(
        "{:<label_width$} |{}| {} days\n",
        "task",
        axis(width),
        fmt_num(span)
    ));

    for entry in view.entries() {
        // Every row is exactly `width` columns: short bars near the end are
        // pulled left rather than spilling past the axis.
        let len = ((entry.duration_days * scale).round() as usize).clamp(1, width.max(1));
        let offset =
            ((entry.start_days * scale).round() as usize).min(width.saturating_sub(len));
        let pad = width.saturating_sub(offset + len);

        out.push_str(&format!(
            "{:<label_width$} |{}{}{}| {}-{}\n",
            truncate(&entry.name, label_width),
            GAP.to_string().repeat(offset),
            BAR.to_string().repeat(len),
            GAP.to_string().repeat(pad),
            fmt_num(entry.start_days),
            fmt_num(entry.end_days()),
        ));
    }
    out
}

pub fn render_table(view: &ScheduleView) -> String {
    let label_width = label_width(view.entries());

    let mut out = String::new();
    out.push_str(&format!(
        "{:>3}  {:>7}  {:>7}  {:>7}  {:<label_width$}  {}\n",
        "#", "start", "end", "days", "task", "depends on"
    ));
    for (pos, entry) in view.entries().iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:>7}  {:>7}  {:>7}  {:<label_width$}  {}\n",
            pos + 1,
            fmt_num(entry.start_days),
            fmt_num(entry.end_days()),
            fmt_num(entry.duration_days),
            truncate(&entry.name, label_width),
            entry.depends_on.as_deref().unwrap_or("-"),
        ));
    }
    out
}

pub fn render_diagnostics(diag: &PlanDiagnostics) -> String {
    if diag.is_clean() {
        return "plan ok: no dangling references, duplicates or cycles\n".to_string();
    }

    let mut out = String::new();
    for (task, missing) in &diag.dangling {
        out.push_str(&format!(
            "dangling: \"{task}\" depends on unknown task \"{missing}\"\n"
        ));
    }
    for name in &diag.duplicates {
        out.push_str(&format!("duplicate: \"{name}\" is defined more than once\n"));
    }
    for cycle in &diag.cycles {
        out.push_str(&format!("cycle: {}\n", cycle.join(" -> ")));
    }
    out
}

pub fn render_history(plans: &[PlanSummary]) -> String {
    if plans.is_empty() {
        return "no stored plans\n".to_string();
    }
    let mut out = String::new();
    for plan in plans {
        out.push_str(&format!(
            "{}  {}  {:>3} tasks  {}\n",
            plan.id,
            plan.created_at.format("%Y-%m-%d %H:%M"),
            plan.task_count,
            plan.goal
        ));
    }
    out
}

fn axis(width: usize) -> String {
    "-".repeat(width)
}

fn label_width(entries: &[ScheduleEntry]) -> usize {
    entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(4, MAX_LABEL)
}

fn truncate(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        return name.to_string();
    }
    let mut cut: String = name.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Up to two decimals, trailing zeros dropped.
fn fmt_num(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
