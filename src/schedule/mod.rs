// src/schedule/mod.rs

//! The task dependency scheduler.
//!
//! - [`duration`] turns duration text into days.
//! - [`resolver`] computes start offsets, tolerating cycles and dangling
//!   references.
//! - [`order`] sorts for display.
//! - [`propagate`] applies edits and finds the tasks they move.
//! - [`graph`] holds the dependents index and plan diagnostics.
//! - [`view`] is the read-only model renderers consume.
//! - [`session`] is the edit state machine tying the above together.
//!
//! Everything here is synchronous and pure over its inputs.

pub mod duration;
pub mod graph;
pub mod order;
pub mod propagate;
pub mod resolver;
pub mod session;
pub mod view;

pub use duration::{format_days, parse_duration};
pub use graph::{DependentsIndex, PlanDiagnostics, diagnose};
pub use order::{order, order_tasks};
pub use propagate::{EditOutcome, TaskEdit, apply_edit};
pub use resolver::{ResolvedTask, resolve};
pub use session::{EditorState, PlanSession};
pub use view::{ScheduleEntry, ScheduleView};
