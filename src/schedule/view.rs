// src/schedule/view.rs

//! Read-only schedule handed to renderers.

use std::collections::HashMap;

use serde::Serialize;

use crate::plan::Task;
use crate::schedule::order::{order, order_tasks};
use crate::schedule::resolver::resolve;
use crate::types::TaskName;

/// One bar on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub name: TaskName,
    pub start_days: f64,
    pub duration_days: f64,
    pub depends_on: Option<TaskName>,
}

impl ScheduleEntry {
    pub fn end_days(&self) -> f64 {
        self.start_days + self.duration_days
    }
}

/// Resolved, execution-ordered schedule plus the task list in that order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleView {
    #[serde(rename = "schedule")]
    entries: Vec<ScheduleEntry>,
    tasks: Vec<Task>,
}

impl ScheduleView {
    /// Resolve and order `tasks`. Always succeeds.
    pub fn build(tasks: &[Task]) -> Self {
        let resolved = resolve(tasks);

        let depends_on: HashMap<&str, Option<&str>> = tasks
            .iter()
            .map(|t| (t.name.as_str(), t.dependency()))
            .collect();

        let entries = order(&resolved)
            .into_iter()
            .map(|r| {
                let dep = depends_on
                    .get(r.name.as_str())
                    .copied()
                    .flatten()
                    .map(str::to_string);
                ScheduleEntry {
                    name: r.name,
                    start_days: r.start_days,
                    duration_days: r.duration_days,
                    depends_on: dep,
                }
            })
            .collect();

        Self {
            entries,
            tasks: order_tasks(tasks, &resolved),
        }
    }

    /// Timeline entries, earliest start first.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// The original task records in execution order.
    pub fn ordered_tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, name: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Extent of the timeline axis: the latest end, and at least one day.
    pub fn span_days(&self) -> f64 {
        self.entries
            .iter()
            .map(ScheduleEntry::end_days)
            .fold(1.0, f64::max)
    }
}
