// src/schedule/order.rs

//! Execution order for display: earliest start first, ties by name.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::plan::Task;
use crate::schedule::resolver::ResolvedTask;

/// Sort resolved tasks by start offset, breaking ties by name.
pub fn order(resolved: &[ResolvedTask]) -> Vec<ResolvedTask> {
    let mut ordered = resolved.to_vec();
    ordered.sort_by(|a, b| by_start_then_name(a.start_days, &a.name, b.start_days, &b.name));
    ordered
}

/// Put the original task records into the same order as [`order`].
///
/// Each task's start is looked up by name in `resolved`; tasks with no
/// resolved record go last, sorted among themselves by name.
pub fn order_tasks(tasks: &[Task], resolved: &[ResolvedTask]) -> Vec<Task> {
    let starts: HashMap<&str, f64> = resolved
        .iter()
        .map(|r| (r.name.as_str(), r.start_days))
        .collect();
    let start_of = |task: &Task| {
        starts
            .get(task.name.as_str())
            .copied()
            .unwrap_or(f64::INFINITY)
    };

    let mut ordered = tasks.to_vec();
    ordered.sort_by(|a, b| by_start_then_name(start_of(a), &a.name, start_of(b), &b.name));
    ordered
}

fn by_start_then_name(a_start: f64, a_name: &str, b_start: f64, b_name: &str) -> Ordering {
    a_start
        .total_cmp(&b_start)
        .then_with(|| a_name.cmp(b_name))
}
