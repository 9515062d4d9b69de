mod common;

use clap::Parser;
use common::init_tracing;
use ganttplan::App;
use ganttplan::cli::{CliArgs, Command, EditArgs, HistoryCommand};
use ganttplan::config::ConfigFile;
use ganttplan::fs::FileSystem;
use ganttplan::fs::mock::MockFileSystem;
use ganttplan::plan::PlanDocument;
use ganttplan::types::RenderStyle;
use ganttplan_test_utils::builders::{ConfigFileBuilder, PlanBuilder};
use std::path::Path;

const PLAN_FILE: &str = "plan.json";

fn app_with_plan() -> (MockFileSystem, App<MockFileSystem>) {
    let fs = MockFileSystem::new();
    let tasks = PlanBuilder::new()
        .chain(&[("A", "2 days"), ("B", "3 days"), ("C", "1 day")])
        .build();
    let json = PlanDocument::Bare(tasks).to_json().unwrap();
    fs.add_file(PLAN_FILE, json);

    let cfg = ConfigFileBuilder::new().style(RenderStyle::Table).build();
    let app = App::new(fs.clone(), "store", cfg);
    (fs, app)
}

fn edit_args(index: usize) -> EditArgs {
    EditArgs {
        plan: PLAN_FILE.to_string(),
        index: Some(index),
        task: None,
        name: None,
        duration: None,
        days: None,
        depends_on: None,
        no_depends_on: false,
    }
}

fn saved_tasks(fs: &MockFileSystem) -> PlanDocument {
    PlanDocument::from_json(&fs.read_to_string(Path::new(PLAN_FILE)).unwrap()).unwrap()
}

#[test]
fn test_cli_parses_edit_flags() {
    let args = CliArgs::try_parse_from([
        "ganttplan",
        "--log-level",
        "debug",
        "edit",
        "plan.json",
        "--index",
        "1",
        "--name",
        "Build v2",
        "--days",
        "4",
    ])
    .unwrap();

    match args.command {
        Command::Edit(edit) => {
            assert_eq!(edit.index, Some(1));
            assert_eq!(edit.name.as_deref(), Some("Build v2"));
            assert_eq!(edit.days, Some(4.0));
        }
        other => panic!("Expected Edit, got: {:?}", other),
    }
}

#[test]
fn test_cli_rejects_conflicting_flags() {
    let both_durations = CliArgs::try_parse_from([
        "ganttplan", "edit", "p.json", "--index", "0", "--duration", "2 days", "--days", "3",
    ]);
    assert!(both_durations.is_err());

    let no_target = CliArgs::try_parse_from(["ganttplan", "edit", "p.json", "--days", "3"]);
    assert!(no_target.is_err());
}

#[test]
fn test_show_table() {
    let (_, app) = app_with_plan();

    let out = app
        .execute(Command::Show {
            plan: PLAN_FILE.into(),
            style: None,
            json: false,
        })
        .unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].contains('A'));
    assert!(lines[3].contains("  5  "));
}

#[test]
fn test_show_json() {
    let (_, app) = app_with_plan();

    let out = app
        .execute(Command::Show {
            plan: PLAN_FILE.into(),
            style: None,
            json: true,
        })
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["schedule"][2]["name"], "C");
    assert_eq!(value["schedule"][2]["startDays"], 5.0);
}

#[test]
fn test_edit_writes_back_to_file() {
    init_tracing();
    let (fs, app) = app_with_plan();

    let mut args = edit_args(0);
    args.name = Some("Kickoff".into());
    args.days = Some(1.0);
    let out = app.execute(Command::Edit(args)).unwrap();

    assert!(out.contains("renamed \"A\" -> \"Kickoff\""));
    assert!(out.contains("2 dependent tasks"));

    let doc = saved_tasks(&fs);
    assert_eq!(doc.tasks()[0].name, "Kickoff");
    assert_eq!(doc.tasks()[0].duration, "1 day");
    assert_eq!(doc.tasks()[1].depends_on.as_deref(), Some("Kickoff"));
}

#[test]
fn test_edit_by_name() {
    let (fs, app) = app_with_plan();

    let mut args = edit_args(0);
    args.index = None;
    args.task = Some("C".into());
    args.no_depends_on = true;
    app.execute(Command::Edit(args)).unwrap();

    assert_eq!(saved_tasks(&fs).tasks()[2].depends_on, None);
}

#[test]
fn test_edit_without_changes_is_rejected() {
    let (_, app) = app_with_plan();

    assert!(app.execute(Command::Edit(edit_args(0))).is_err());
}

#[test]
fn test_edit_survives_failed_write() {
    init_tracing();
    let (fs, app) = app_with_plan();
    fs.fail_writes(true);

    let mut args = edit_args(0);
    args.duration = Some("1 week".into());
    let out = app.execute(Command::Edit(args)).unwrap();

    assert!(out.contains("changes were not saved"));
    // The recomputed schedule is still shown: C now starts at day 10.
    assert!(out.contains(" 10 "));
    assert_eq!(saved_tasks(&fs).tasks()[0].duration, "2 days");
}

#[test]
fn test_check_fails_on_cycles() {
    let fs = MockFileSystem::new();
    let tasks = PlanBuilder::new()
        .task_after("A", "1 day", "B")
        .task_after("B", "1 day", "A")
        .build();
    fs.add_file("cyclic.json", PlanDocument::Bare(tasks).to_json().unwrap());
    let app = App::new(fs, "store", ConfigFile::default());

    let err = app
        .execute(Command::Check {
            plan: "cyclic.json".into(),
        })
        .unwrap_err();

    assert!(format!("{err}").contains("cycle"));
}

#[test]
fn test_check_reports_clean_plan() {
    let (_, app) = app_with_plan();

    let out = app
        .execute(Command::Check {
            plan: PLAN_FILE.into(),
        })
        .unwrap();

    assert!(out.starts_with("plan ok"));
}

#[test]
fn test_import_history_and_edit_stored_plan() {
    let fs = MockFileSystem::new();
    fs.add_file(
        "generated.txt",
        "```json\n[{\"task\": \"Plan\", \"duration\": \"2 days\"}, {\"task\": \"Do\", \"duration\": 3, \"depends_on\": \"Plan\"}]\n```",
    );
    let app = App::new(fs, "store", ConfigFile::default());

    let id = app
        .execute(Command::Import {
            file: "generated.txt".into(),
            goal: "Get it done".into(),
        })
        .unwrap()
        .trim()
        .to_string();

    let listing = app
        .execute(Command::History {
            action: HistoryCommand::List,
        })
        .unwrap();
    assert!(listing.contains(&id));
    assert!(listing.contains("Get it done"));

    let mut args = edit_args(1);
    args.plan = id.clone();
    args.depends_on = Some("Nothing".into());
    app.execute(Command::Edit(args)).unwrap();

    let (_, tasks) = app.open_plan(&id).unwrap();
    assert_eq!(tasks[1].depends_on.as_deref(), Some("Nothing"));

    let shown = app
        .execute(Command::History {
            action: HistoryCommand::Show { id: id.clone() },
        })
        .unwrap();
    assert!(shown.starts_with("Get it done"));

    app.execute(Command::History {
        action: HistoryCommand::Delete { id: id.clone() },
    })
    .unwrap();
    assert!(app.open_plan(&id).is_err());
}

#[test]
fn test_demo_renders_gantt() {
    let app = App::new(MockFileSystem::new(), "store", ConfigFile::default());

    let out = app.execute(Command::Demo { style: None }).unwrap();

    assert!(out.contains("Market research"));
    assert!(out.contains('█'));
    assert_eq!(out.lines().count(), 6);
}
