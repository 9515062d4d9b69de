// src/schedule/propagate.rs

//! Applying a single edit to a task list.
//!
//! An edit can rename a task, change its duration or re-parent it. Renames
//! rewrite every `depends_on` that pointed at the old name, so the schedule
//! keeps its shape. The outcome also names every task whose timeline moves
//! because of the edit, for user feedback.
//!
//! Offsets are not computed here; callers re-run
//! [`resolve`](crate::schedule::resolve) on the returned list.

use std::collections::BTreeSet;

use tracing::debug;

use crate::errors::{PlanError, Result};
use crate::plan::Task;
use crate::schedule::duration::{DEFAULT_DURATION_DAYS, format_days};
use crate::schedule::graph::DependentsIndex;
use crate::types::TaskName;

/// Fields to change on one task. `None` keeps the current value.
///
/// `depends_on` is tri-state: `None` keeps the dependency,
/// `Some(None)` clears it and `Some(Some(name))` re-parents the task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    pub name: Option<TaskName>,
    pub duration: Option<String>,
    pub depends_on: Option<Option<TaskName>>,
}

impl TaskEdit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rename(mut self, name: impl Into<TaskName>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn duration(mut self, text: impl Into<String>) -> Self {
        self.duration = Some(text.into());
        self
    }

    /// Duration from a numeric day count, as typed into the edit dialog.
    ///
    /// Values that are not a positive number become one day.
    pub fn days(mut self, days: f64) -> Self {
        let days = if days.is_finite() && days > 0.0 {
            days
        } else {
            DEFAULT_DURATION_DAYS
        };
        self.duration = Some(format_days(days));
        self
    }

    pub fn depends_on(mut self, dep: impl Into<TaskName>) -> Self {
        self.depends_on = Some(Some(dep.into()));
        self
    }

    pub fn no_dependency(mut self) -> Self {
        self.depends_on = Some(None);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.duration.is_none() && self.depends_on.is_none()
    }

    fn merge_into(&self, original: &Task) -> Task {
        Task {
            name: self.name.clone().unwrap_or_else(|| original.name.clone()),
            duration: self
                .duration
                .clone()
                .unwrap_or_else(|| original.duration.clone()),
            depends_on: match &self.depends_on {
                Some(dep) => dep.clone(),
                None => original.depends_on.clone(),
            },
        }
    }
}

/// Result of [`apply_edit`].
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    /// The full rewritten task list.
    pub tasks: Vec<Task>,
    /// Name of the edited task after the edit.
    pub edited: TaskName,
    /// Previous name, if the edit renamed the task.
    pub renamed_from: Option<TaskName>,
    /// Tasks transitively depending on the edited one.
    pub affected: BTreeSet<TaskName>,
}

impl EditOutcome {
    /// One-line feedback for the user.
    pub fn summary(&self) -> String {
        match self.affected.len() {
            0 => format!("Updated \"{}\".", self.edited),
            1 => format!(
                "Updated \"{}\" and 1 dependent task automatically adjusted its timeline.",
                self.edited
            ),
            n => format!(
                "Updated \"{}\" and {n} dependent tasks automatically adjusted their timeline.",
                self.edited
            ),
        }
    }
}

/// Apply `edit` to the task at `index`, returning the rewritten list.
///
/// Fails only when `index` is out of range or the edit would leave the task
/// without a name; the input is never modified.
pub fn apply_edit(tasks: &[Task], index: usize, edit: &TaskEdit) -> Result<EditOutcome> {
    let original = tasks.get(index).ok_or(PlanError::TaskIndexOutOfRange {
        index,
        len: tasks.len(),
    })?;

    if edit.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(PlanError::InvalidEdit("task name must not be empty".to_string()));
    }

    let mut new_tasks = tasks.to_vec();
    new_tasks[index] = edit.merge_into(original);

    let old_name = original.name.as_str();
    let new_name = new_tasks[index].name.clone();

    let mut index_by_dep = DependentsIndex::build(&new_tasks);

    let renamed_from = if old_name != new_name {
        // Includes the edited task itself, so a self-reference stays one.
        let moved = index_by_dep.redirect(old_name, &new_name);
        for &pos in &moved {
            new_tasks[pos].depends_on = Some(new_name.clone());
        }
        debug!(
            from = %old_name,
            to = %new_name,
            rewritten = moved.len(),
            "task renamed; dependency references rewritten"
        );
        Some(old_name.to_string())
    } else {
        None
    };

    let affected = index_by_dep.transitive_dependents(&new_tasks, &new_name);
    debug!(task = %new_name, affected = ?affected, "edit applied");

    Ok(EditOutcome {
        tasks: new_tasks,
        edited: new_name,
        renamed_from,
        affected,
    })
}
