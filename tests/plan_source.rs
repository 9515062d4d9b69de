mod common;

use common::init_tracing;
use ganttplan::errors::PlanError;
use ganttplan::plan::{PlanDocument, Task, fallback_plan, parse_generated, sample_plan};
use ganttplan::schedule::ScheduleView;

#[test]
fn test_plain_json_array() {
    let text = r#"[
        {"task": "Design", "duration": "2 days", "depends_on": null},
        {"task": "Build", "duration": "1 week", "depends_on": "Design"}
    ]"#;

    let tasks = parse_generated(text).unwrap();

    assert_eq!(
        tasks,
        vec![
            Task::new("Design", "2 days"),
            Task::new("Build", "1 week").after("Design"),
        ]
    );
}

#[test]
fn test_code_fences_are_stripped() {
    let text = "```json\n[{\"task\": \"A\", \"duration\": \"1 day\"}]\n```";

    let tasks = parse_generated(text).unwrap();

    assert_eq!(tasks, vec![Task::new("A", "1 day")]);
}

#[test]
fn test_bare_fences_are_stripped() {
    let text = "```\n[{\"task\": \"A\", \"duration\": \"3 days\"}]\n```\n";

    assert_eq!(parse_generated(text).unwrap()[0].duration, "3 days");
}

#[test]
fn test_records_are_normalized() {
    let text = r#"[
        {"duration": "2 days"},
        {"task": "", "duration": ""},
        {"task": "Numeric", "duration": 4},
        {"task": "Blank dep", "duration": "1 day", "depends_on": ""}
    ]"#;

    let tasks = parse_generated(text).unwrap();

    assert_eq!(tasks[0].name, "Unnamed task");
    assert_eq!(tasks[1].name, "Unnamed task");
    assert_eq!(tasks[1].duration, "1 day");
    assert_eq!(tasks[2].duration, "4 days");
    assert_eq!(tasks[3].depends_on, None);
}

#[test]
fn test_garbage_yields_fallback_plan() {
    init_tracing();

    let tasks = parse_generated("Sure! Here is your plan: step one, step two.").unwrap();

    assert_eq!(tasks, fallback_plan());
    assert_eq!(tasks.len(), 5);
}

#[test]
fn test_non_array_json_is_an_error() {
    let err = parse_generated(r#"{"tasks": []}"#).unwrap_err();

    assert!(matches!(err, PlanError::NotAnArray));
}

#[test]
fn test_fallback_plan_is_a_chain() {
    let view = ScheduleView::build(&fallback_plan());

    // 2 + 1 + 7 + 3 + 2 days, strictly sequential.
    assert_eq!(view.span_days(), 15.0);
    assert_eq!(view.entries()[0].name, "Research and planning");
}

#[test]
fn test_sample_plan_schedule() {
    let view = ScheduleView::build(&sample_plan());

    let start = |name: &str| view.get(name).map(|e| e.start_days);
    assert_eq!(start("Market research"), Some(0.0));
    assert_eq!(start("Finalize product design"), Some(2.0));
    assert_eq!(start("Set up landing page"), Some(2.0));
    assert_eq!(start("Marketing plan & assets"), Some(5.0));
    assert_eq!(start("Launch & feedback"), Some(4.0));
    assert_eq!(view.span_days(), 11.0);
}

#[test]
fn test_plan_document_accepts_both_shapes() {
    let bare = PlanDocument::from_json(r#"[{"task": "A", "duration": "1 day"}]"#).unwrap();
    assert!(matches!(bare, PlanDocument::Bare(_)));

    let wrapped = PlanDocument::from_json(
        r#"{"tasks": [{"task": "A", "duration": "1 day"}], "taskPlanId": "abc"}"#,
    )
    .unwrap();
    assert_eq!(wrapped.tasks(), bare.tasks());

    let rewritten = wrapped.with_tasks(vec![Task::new("B", "2 days")]);
    let json = rewritten.to_json().unwrap();
    assert!(json.contains("taskPlanId"));
    assert!(json.contains("\"B\""));
}
