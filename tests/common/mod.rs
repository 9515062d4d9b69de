#![allow(dead_code)]

use ganttplan::schedule::{ResolvedTask, ScheduleView};

#[allow(unused_imports)]
pub use ganttplan_test_utils::init_tracing;

/// `(start, duration)` of the first resolved record named `name`.
pub fn timing(resolved: &[ResolvedTask], name: &str) -> (f64, f64) {
    let record = resolved
        .iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("no resolved record for {name}"));
    (record.start_days, record.duration_days)
}

/// Entry names of a view in display order.
pub fn entry_names(view: &ScheduleView) -> Vec<&str> {
    view.entries().iter().map(|e| e.name.as_str()).collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
