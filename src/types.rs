use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Canonical task name type. Tasks are identified by name throughout.
pub type TaskName = String;

/// How the CLI draws a schedule.
///
/// - `Gantt`: one bar per task, scaled to the plan's total span (default).
/// - `Table`: start / end / duration columns only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    #[default]
    Gantt,
    Table,
}

/// Opaque identifier of a stored task plan.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanId(String);

impl PlanId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Ids double as file stems in the store, so only a conservative
    /// character set is accepted.
    pub fn is_well_formed(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
