// src/schedule/graph.rs

//! Graph views over a task list.
//!
//! - [`DependentsIndex`] maps a name to the positions of the tasks that
//!   depend on it. The edit propagator builds one per edit and uses it for
//!   both the rename rewrite and the affected-task walk.
//! - [`diagnose`] reports dangling references, duplicate names and cycles
//!   for the `check` command. It is read-only: resolution tolerates all of
//!   these on its own.

use std::collections::{BTreeSet, HashMap, HashSet};

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;

use crate::plan::Task;
use crate::types::TaskName;

/// Reverse adjacency: dependency name -> positions of its direct dependents.
#[derive(Debug, Clone, Default)]
pub struct DependentsIndex {
    dependents: HashMap<TaskName, Vec<usize>>,
}

impl DependentsIndex {
    pub fn build(tasks: &[Task]) -> Self {
        let mut dependents: HashMap<TaskName, Vec<usize>> = HashMap::new();
        for (pos, task) in tasks.iter().enumerate() {
            if let Some(dep) = task.dependency() {
                dependents.entry(dep.to_string()).or_default().push(pos);
            }
        }
        Self { dependents }
    }

    /// Positions of tasks whose `depends_on` is exactly `name`.
    pub fn dependents_of(&self, name: &str) -> &[usize] {
        self.dependents
            .get(name)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Move every edge pointing at `old` so it points at `new`, returning
    /// the positions that moved. The caller rewrites the task records.
    pub fn redirect(&mut self, old: &str, new: &str) -> Vec<usize> {
        let moved = self.dependents.remove(old).unwrap_or_default();
        if !moved.is_empty() {
            let target = self.dependents.entry(new.to_string()).or_default();
            target.extend(moved.iter().copied());
            target.sort_unstable();
            target.dedup();
        }
        moved
    }

    /// Names of all tasks that depend on `root`, directly or transitively.
    ///
    /// Each name is expanded at most once, so the walk terminates on cyclic
    /// lists. `root` itself is never part of the result.
    pub fn transitive_dependents(&self, tasks: &[Task], root: &str) -> BTreeSet<TaskName> {
        let mut visited: HashSet<&str> = HashSet::from([root]);
        let mut affected = BTreeSet::new();
        let mut stack: Vec<&str> = vec![root];

        while let Some(current) = stack.pop() {
            for &pos in self.dependents_of(current) {
                let Some(task) = tasks.get(pos) else {
                    continue;
                };
                let name = task.name.as_str();
                if visited.insert(name) {
                    affected.insert(name.to_string());
                    stack.push(name);
                }
            }
        }

        affected
    }
}

/// Structural problems found in a task list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanDiagnostics {
    /// `(task, missing dependency)` pairs, in input order.
    pub dangling: Vec<(TaskName, TaskName)>,
    /// Names defined more than once, sorted.
    pub duplicates: Vec<TaskName>,
    /// Each cycle's member names, sorted; cycles sorted by first member.
    pub cycles: Vec<Vec<TaskName>>,
}

impl PlanDiagnostics {
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.duplicates.is_empty() && self.cycles.is_empty()
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }
}

/// Inspect a task list for dangling references, duplicates and cycles.
pub fn diagnose(tasks: &[Task]) -> PlanDiagnostics {
    let known: HashSet<&str> = tasks.iter().map(|t| t.name.as_str()).collect();

    let dangling = tasks
        .iter()
        .filter_map(|t| {
            let dep = t.dependency()?;
            (!known.contains(dep)).then(|| (t.name.clone(), dep.to_string()))
        })
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let duplicates: BTreeSet<TaskName> = tasks
        .iter()
        .filter(|t| !seen.insert(t.name.as_str()))
        .map(|t| t.name.clone())
        .collect();

    PlanDiagnostics {
        dangling,
        duplicates: duplicates.into_iter().collect(),
        cycles: find_cycles(tasks, &known),
    }
}

fn find_cycles(tasks: &[Task], known: &HashSet<&str>) -> Vec<Vec<TaskName>> {
    // Edge direction: dep -> task, only for resolvable references.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for task in tasks {
        graph.add_node(task.name.as_str());
    }
    for task in tasks {
        if let Some(dep) = task.dependency().filter(|d| known.contains(d)) {
            graph.add_edge(dep, task.name.as_str(), ());
        }
    }

    let mut cycles: Vec<Vec<TaskName>> = tarjan_scc(&graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
        .map(|scc| {
            let mut members: Vec<TaskName> = scc.into_iter().map(str::to_string).collect();
            members.sort();
            members
        })
        .collect();
    cycles.sort();
    cycles
}
