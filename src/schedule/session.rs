// src/schedule/session.rs

//! Interactive editing session over one task plan.
//!
//! ```text
//! Idle --begin_edit(i)--> Editing { i, draft } --save()----> Idle (recomputed)
//!                                              \--cancel()--> Idle (unchanged)
//! ```
//!
//! The session owns the current task list and its [`ScheduleView`]. `save`
//! runs the edit propagator, the resolver and the sorter in sequence;
//! `cancel` drops the draft without touching the scheduler. Persisting the
//! saved list is the caller's job: a failed write leaves the session as is.

use std::mem;

use tracing::{debug, info};

use crate::errors::{PlanError, Result};
use crate::plan::Task;
use crate::schedule::propagate::{EditOutcome, TaskEdit, apply_edit};
use crate::schedule::view::ScheduleView;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorState {
    Idle,
    Editing { index: usize, draft: TaskEdit },
}

#[derive(Debug, Clone)]
pub struct PlanSession {
    tasks: Vec<Task>,
    view: ScheduleView,
    state: EditorState,
}

impl PlanSession {
    pub fn new(tasks: Vec<Task>) -> Self {
        let view = ScheduleView::build(&tasks);
        Self {
            tasks,
            view,
            state: EditorState::Idle,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn view(&self) -> &ScheduleView {
        &self.view
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditorState::Editing { .. })
    }

    /// Position of the first task with this name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.name == name)
    }

    /// Load a different plan, discarding any draft.
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.view = ScheduleView::build(&tasks);
        self.tasks = tasks;
        self.state = EditorState::Idle;
    }

    /// Start editing the task at `index` with an empty draft.
    ///
    /// Calling this while already editing replaces the previous draft.
    pub fn begin_edit(&mut self, index: usize) -> Result<()> {
        let Some(task) = self.tasks.get(index) else {
            return Err(PlanError::TaskIndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        };
        debug!(index, task = %task.name, "editing task");

        self.state = EditorState::Editing {
            index,
            draft: TaskEdit::default(),
        };
        Ok(())
    }

    /// Replace the whole draft of the edit in progress.
    pub fn set_draft(&mut self, edit: TaskEdit) -> Result<()> {
        match self.draft_mut() {
            Some(draft) => {
                *draft = edit;
                Ok(())
            }
            None => Err(PlanError::InvalidEdit(
                "no edit in progress".to_string(),
            )),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut TaskEdit> {
        match &mut self.state {
            EditorState::Editing { draft, .. } => Some(draft),
            EditorState::Idle => None,
        }
    }

    /// Discard the draft. The task list and schedule are untouched.
    pub fn cancel(&mut self) -> Result<()> {
        match mem::replace(&mut self.state, EditorState::Idle) {
            EditorState::Editing { index, .. } => {
                debug!(index, "edit cancelled");
                Ok(())
            }
            EditorState::Idle => Err(PlanError::InvalidEdit(
                "cancel called with no edit in progress".to_string(),
            )),
        }
    }

    /// Apply the draft and recompute the schedule.
    ///
    /// If the draft is rejected, the session stays in the editing state so
    /// the draft can be corrected.
    pub fn save(&mut self) -> Result<EditOutcome> {
        let (index, draft) = match mem::replace(&mut self.state, EditorState::Idle) {
            EditorState::Editing { index, draft } => (index, draft),
            EditorState::Idle => {
                return Err(PlanError::InvalidEdit(
                    "save called with no edit in progress".to_string(),
                ));
            }
        };

        let outcome = match apply_edit(&self.tasks, index, &draft) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.state = EditorState::Editing { index, draft };
                return Err(err);
            }
        };

        self.tasks = outcome.tasks.clone();
        self.view = ScheduleView::build(&self.tasks);
        info!(
            task = %outcome.edited,
            affected = outcome.affected.len(),
            "task updated; schedule recomputed"
        );
        Ok(outcome)
    }
}
