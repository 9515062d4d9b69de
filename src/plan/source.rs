// src/plan/source.rs

//! Plan source: turning generator output into a task list.
//!
//! Generators (language models, mostly) are asked for a bare JSON array of
//! `{task, duration, depends_on}` records but routinely wrap it in markdown
//! fences or drop fields. Parsing here is deliberately forgiving:
//!
//! - markdown code fences are stripped before parsing,
//! - text that is not JSON at all yields [`fallback_plan`],
//! - JSON that is not an array is an error ([`PlanError::NotAnArray`]),
//! - each record is normalized so the scheduler always sees a usable task.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::{PlanError, Result};
use crate::plan::Task;

const UNNAMED_TASK: &str = "Unnamed task";
const DEFAULT_DURATION: &str = "1 day";

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?\n?").expect("code fence pattern is valid"));

/// Parse raw generator output into a normalized task list.
pub fn parse_generated(text: &str) -> Result<Vec<Task>> {
    let cleaned = strip_code_fences(text);

    let value: Value = match serde_json::from_str(&cleaned) {
        Ok(v) => v,
        Err(err) => {
            warn!(error = %err, "generated plan is not valid JSON; using fallback plan");
            debug!(text = %text, "unparseable generator output");
            return Ok(fallback_plan());
        }
    };

    let Value::Array(records) = value else {
        return Err(PlanError::NotAnArray);
    };

    let tasks: Vec<Task> = records.iter().map(normalize_record).collect();
    debug!(count = tasks.len(), "parsed generated plan");
    Ok(tasks)
}

fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text.trim(), "").trim().to_string()
}

/// Coerce one loosely-typed record into a [`Task`].
fn normalize_record(record: &Value) -> Task {
    let name = non_empty_str(record.get("task"))
        .unwrap_or(UNNAMED_TASK)
        .to_string();

    let duration = match record.get("duration") {
        Some(Value::Number(n)) => format!("{n} days"),
        other => non_empty_str(other).unwrap_or(DEFAULT_DURATION).to_string(),
    };

    let depends_on = non_empty_str(record.get("depends_on")).map(str::to_string);

    Task {
        name,
        duration,
        depends_on,
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// Generic plan used when generator output cannot be parsed at all.
pub fn fallback_plan() -> Vec<Task> {
    vec![
        Task::new("Research and planning", "2 days"),
        Task::new("Initial setup", "1 day").after("Research and planning"),
        Task::new("Core development", "1 week").after("Initial setup"),
        Task::new("Testing and refinement", "3 days").after("Core development"),
        Task::new("Launch preparation", "2 days").after("Testing and refinement"),
    ]
}

/// Product-launch sample plan, used when no generator is configured.
pub fn sample_plan() -> Vec<Task> {
    vec![
        Task::new("Market research", "2 days"),
        Task::new("Finalize product design", "3 days").after("Market research"),
        Task::new("Set up landing page", "2 days").after("Market research"),
        Task::new("Marketing plan & assets", "4 days").after("Finalize product design"),
        Task::new("Launch & feedback", "1 week").after("Set up landing page"),
    ]
}
