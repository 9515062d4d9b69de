// src/schedule/resolver.rs

//! Dependency resolution: task list in, absolute offsets out.
//!
//! Each task starts when its dependency ends:
//!
//! ```text
//! start(t) = start(dep) + duration(dep)    if t.depends_on names a task
//! start(t) = 0                             if t has no dependency
//! ```
//!
//! Resolution is a memoized depth-first walk over `depends_on` edges, run on
//! an explicit stack so long chains cannot exhaust the call stack. It never
//! fails:
//!
//! - a dependency naming no task resolves to [`ResolvedTask::fallback`],
//! - every task on a dependency cycle resolves to the fallback as well, and
//!   the cycle is reported with a `warn!`,
//! - duplicate names resolve through the last task defined with that name.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::plan::Task;
use crate::schedule::duration::{DEFAULT_DURATION_DAYS, parse_duration};
use crate::types::TaskName;

/// A task with its computed position on the timeline, in days.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTask {
    pub name: TaskName,
    pub duration_days: f64,
    pub start_days: f64,
}

impl ResolvedTask {
    /// Record used for dangling references and cycle members.
    pub fn fallback(name: impl Into<TaskName>) -> Self {
        Self {
            name: name.into(),
            duration_days: DEFAULT_DURATION_DAYS,
            start_days: 0.0,
        }
    }

    pub fn end_days(&self) -> f64 {
        self.start_days + self.duration_days
    }
}

/// Resolve every task, in input order.
///
/// Two input entries sharing a name receive the same record.
pub fn resolve(tasks: &[Task]) -> Vec<ResolvedTask> {
    let mut resolver = Resolver::new(tasks);
    tasks
        .iter()
        .map(|task| resolver.resolve_name(&task.name))
        .collect()
}

/// Per-call resolution state. Dropped when [`resolve`] returns.
struct Resolver<'a> {
    by_name: HashMap<&'a str, &'a Task>,
    memo: HashMap<&'a str, ResolvedTask>,
}

impl<'a> Resolver<'a> {
    fn new(tasks: &'a [Task]) -> Self {
        // Later entries overwrite earlier ones: last definition wins.
        let by_name = tasks.iter().map(|t| (t.name.as_str(), t)).collect();
        Self {
            by_name,
            memo: HashMap::new(),
        }
    }

    fn resolve_name(&mut self, root: &'a str) -> ResolvedTask {
        if let Some(done) = self.memo.get(root) {
            return done.clone();
        }
        if !self.by_name.contains_key(root) {
            return self.memoize_fallback(root);
        }

        // `on_stack` maps each in-progress name to its stack position, so a
        // back-edge yields the whole cycle as a stack suffix.
        let mut stack: Vec<&'a str> = vec![root];
        let mut on_stack: HashMap<&'a str, usize> = HashMap::from([(root, 0)]);

        while let Some(&name) = stack.last() {
            let Some(&task) = self.by_name.get(name) else {
                // Only known names are ever pushed.
                self.memoize_fallback(name);
                stack.pop();
                on_stack.remove(name);
                continue;
            };

            let dep = match task.dependency() {
                None => {
                    self.memoize(name, task, 0.0);
                    stack.pop();
                    on_stack.remove(name);
                    continue;
                }
                Some(dep) => dep,
            };

            if let Some(dep_record) = self.memo.get(dep) {
                let start = dep_record.end_days();
                self.memoize(name, task, start);
                stack.pop();
                on_stack.remove(name);
                continue;
            }

            if let Some(&pos) = on_stack.get(dep) {
                warn!(
                    task = %dep,
                    cycle = ?&stack[pos..],
                    "circular dependency detected; cycle members use the fallback schedule"
                );
                for member in stack.drain(pos..) {
                    on_stack.remove(member);
                    self.memoize_fallback(member);
                }
                continue;
            }

            if !self.by_name.contains_key(dep) {
                debug!(task = %name, dep = %dep, "dependency names no task; using fallback record");
                self.memoize_fallback(dep);
                continue;
            }

            on_stack.insert(dep, stack.len());
            stack.push(dep);
        }

        self.memo
            .get(root)
            .cloned()
            .unwrap_or_else(|| ResolvedTask::fallback(root))
    }

    fn memoize(&mut self, key: &'a str, task: &Task, start_days: f64) {
        let record = ResolvedTask {
            name: task.name.clone(),
            duration_days: parse_duration(&task.duration),
            start_days,
        };
        self.memo.insert(key, record);
    }

    fn memoize_fallback(&mut self, key: &'a str) -> ResolvedTask {
        let record = ResolvedTask::fallback(key);
        self.memo.insert(key, record.clone());
        record
    }
}
