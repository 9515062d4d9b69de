// src/plan/task.rs

use serde::{Deserialize, Serialize};

use crate::types::TaskName;

/// A single task record as produced by the plan source.
///
/// The serialized field names are fixed by the plan source and the history
/// store:
///
/// ```json
/// { "task": "Market research", "duration": "2 days", "depends_on": null }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Display name; also the task's identity for dependency lookups.
    #[serde(rename = "task")]
    pub name: TaskName,

    /// Free-text duration, e.g. `"3 days"`, `"1 week"`, `"4 hours"`.
    pub duration: String,

    /// Name of the single task this one waits for.
    #[serde(default)]
    pub depends_on: Option<TaskName>,
}

impl Task {
    pub fn new(name: impl Into<TaskName>, duration: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration: duration.into(),
            depends_on: None,
        }
    }

    /// Set the dependency (builder style).
    pub fn after(mut self, dep: impl Into<TaskName>) -> Self {
        self.depends_on = Some(dep.into());
        self
    }

    /// The effective dependency name. An empty `depends_on` counts as none.
    pub fn dependency(&self) -> Option<&str> {
        self.depends_on.as_deref().filter(|dep| !dep.is_empty())
    }
}
