mod common;

use common::{init_tracing, timing};
use ganttplan::plan::Task;
use ganttplan::schedule::{ResolvedTask, resolve};
use ganttplan_test_utils::builders::PlanBuilder;

#[test]
fn test_chain_starts_at_predecessor_end() {
    let tasks = PlanBuilder::new()
        .chain(&[("A", "2 days"), ("B", "3 days"), ("C", "1 day")])
        .build();

    let resolved = resolve(&tasks);

    assert_eq!(timing(&resolved, "A"), (0.0, 2.0));
    assert_eq!(timing(&resolved, "B"), (2.0, 3.0));
    assert_eq!(timing(&resolved, "C"), (5.0, 1.0));
}

#[test]
fn test_output_keeps_input_order_and_length() {
    let tasks = PlanBuilder::new()
        .task_after("C", "1 day", "B")
        .task("A", "2 days")
        .task_after("B", "3 days", "A")
        .build();

    let resolved = resolve(&tasks);

    let names: Vec<&str> = resolved.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["C", "A", "B"]);
    assert_eq!(timing(&resolved, "C"), (5.0, 1.0));
}

#[test]
fn test_two_cycle_falls_back_for_both_members() {
    init_tracing();
    let tasks = PlanBuilder::new()
        .task_after("A", "2 days", "B")
        .task_after("B", "3 days", "A")
        .build();

    let resolved = resolve(&tasks);

    assert_eq!(resolved[0], ResolvedTask::fallback("A"));
    assert_eq!(resolved[1], ResolvedTask::fallback("B"));
}

#[test]
fn test_self_dependency_falls_back() {
    let tasks = vec![Task::new("A", "4 days").after("A")];

    let resolved = resolve(&tasks);

    assert_eq!(resolved, vec![ResolvedTask::fallback("A")]);
}

#[test]
fn test_tasks_downstream_of_cycle_still_resolve() {
    init_tracing();
    let tasks = PlanBuilder::new()
        .task_after("A", "2 days", "C")
        .task_after("B", "2 days", "A")
        .task_after("C", "2 days", "B")
        .task_after("D", "3 days", "C")
        .build();

    let resolved = resolve(&tasks);

    for name in ["A", "B", "C"] {
        assert_eq!(timing(&resolved, name), (0.0, 1.0));
    }
    // D hangs off a fallback record ending at day 1.
    assert_eq!(timing(&resolved, "D"), (1.0, 3.0));
}

#[test]
fn test_dangling_dependency_starts_after_placeholder() {
    let tasks = PlanBuilder::new()
        .task("A", "2 days")
        .task_after("B", "3 days", "Ghost")
        .build();

    let resolved = resolve(&tasks);

    assert_eq!(resolved.len(), 2);
    assert_eq!(timing(&resolved, "A"), (0.0, 2.0));
    assert_eq!(timing(&resolved, "B"), (1.0, 3.0));
    assert!(resolved.iter().all(|r| r.name != "Ghost"));
}

#[test]
fn test_empty_dependency_is_no_dependency() {
    let tasks = vec![Task {
        name: "A".into(),
        duration: "2 days".into(),
        depends_on: Some(String::new()),
    }];

    assert_eq!(timing(&resolve(&tasks), "A"), (0.0, 2.0));
}

#[test]
fn test_duplicate_names_take_last_definition() {
    let tasks = PlanBuilder::new()
        .task("A", "2 days")
        .task("A", "5 days")
        .task_after("B", "1 day", "A")
        .build();

    let resolved = resolve(&tasks);

    assert_eq!(resolved[0], resolved[1]);
    assert_eq!(resolved[0].duration_days, 5.0);
    assert_eq!(timing(&resolved, "B"), (5.0, 1.0));
}

#[test]
fn test_shared_dependency_fans_out() {
    let tasks = PlanBuilder::new()
        .task("Root", "1 week")
        .task_after("Left", "2 days", "Root")
        .task_after("Right", "4 days", "Root")
        .build();

    let resolved = resolve(&tasks);

    assert_eq!(timing(&resolved, "Left"), (7.0, 2.0));
    assert_eq!(timing(&resolved, "Right"), (7.0, 4.0));
}

#[test]
fn test_resolution_is_deterministic() {
    let tasks = PlanBuilder::new()
        .task_after("A", "2 days", "B")
        .task_after("B", "3 days", "A")
        .chain(&[("C", "1 day"), ("D", "2 days")])
        .task_after("E", "1 day", "Nope")
        .build();

    assert_eq!(resolve(&tasks), resolve(&tasks));
}

#[test]
fn test_empty_input_resolves_to_nothing() {
    assert!(resolve(&[]).is_empty());
}
