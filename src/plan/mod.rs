// src/plan/mod.rs

//! Task plans as exchanged with the outside world.
//!
//! - [`task`] holds the `{task, duration, depends_on}` record.
//! - [`source`] turns generator output into a normalized task list.
//!
//! A plan document on disk is either a bare array of tasks or the wrapped
//! form returned alongside a stored plan id:
//!
//! ```json
//! { "tasks": [ ... ], "taskPlanId": "3f2a..." }
//! ```

pub mod source;
pub mod task;

use serde::{Deserialize, Serialize};

pub use source::{fallback_plan, parse_generated, sample_plan};
pub use task::Task;

/// Either shape of a plan document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlanDocument {
    Bare(Vec<Task>),
    Wrapped {
        tasks: Vec<Task>,
        #[serde(
            rename = "taskPlanId",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        task_plan_id: Option<String>,
    },
}

impl PlanDocument {
    pub fn tasks(&self) -> &[Task] {
        match self {
            PlanDocument::Bare(tasks) => tasks,
            PlanDocument::Wrapped { tasks, .. } => tasks,
        }
    }

    pub fn into_tasks(self) -> Vec<Task> {
        match self {
            PlanDocument::Bare(tasks) => tasks,
            PlanDocument::Wrapped { tasks, .. } => tasks,
        }
    }

    /// Replace the task list, keeping the document's shape.
    pub fn with_tasks(self, tasks: Vec<Task>) -> Self {
        match self {
            PlanDocument::Bare(_) => PlanDocument::Bare(tasks),
            PlanDocument::Wrapped { task_plan_id, .. } => PlanDocument::Wrapped {
                tasks,
                task_plan_id,
            },
        }
    }

    pub fn from_json(text: &str) -> crate::errors::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> crate::errors::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
