mod common;

use common::assert_close;
use ganttplan::schedule::duration::{DEFAULT_DURATION_DAYS, MIN_DURATION_DAYS};
use ganttplan::schedule::{format_days, parse_duration};

#[test]
fn test_units_convert_to_days() {
    let cases = [
        ("2 days", 2.0),
        ("1 day", 1.0),
        ("3d", 3.0),
        ("1 week", 7.0),
        ("2 weeks", 14.0),
        ("1.5w", 10.5),
        ("48 hours", 2.0),
        ("12h", 0.5),
        ("5", 5.0),
    ];
    for (text, expected) in cases {
        assert_close(parse_duration(text), expected);
    }
}

#[test]
fn test_parsing_is_case_and_whitespace_insensitive() {
    assert_close(parse_duration("  2 WEEKS "), 14.0);
    assert_close(parse_duration("3 Days"), 3.0);
    assert_close(parse_duration("4   d"), 4.0);
}

#[test]
fn test_text_without_number_is_one_day() {
    for text in ["", "   ", "soon", "a couple of days", "ten days"] {
        assert_close(parse_duration(text), DEFAULT_DURATION_DAYS);
    }
}

#[test]
fn test_overflowing_magnitude_is_one_day() {
    let huge = format!("{} days", "9".repeat(400));
    assert_close(parse_duration(&huge), DEFAULT_DURATION_DAYS);

    let huge_weeks = format!("{} weeks", "9".repeat(308));
    assert_close(parse_duration(&huge_weeks), DEFAULT_DURATION_DAYS);
}

#[test]
fn test_short_durations_clamp_to_quarter_day() {
    assert_close(parse_duration("0 days"), MIN_DURATION_DAYS);
    assert_close(parse_duration("1 hour"), MIN_DURATION_DAYS);
    assert_close(parse_duration("4 hours"), MIN_DURATION_DAYS);
    assert_close(parse_duration("0.1"), MIN_DURATION_DAYS);
}

#[test]
fn test_first_number_wins() {
    assert_close(parse_duration("about 2 weeks"), 14.0);
    assert_close(parse_duration("2-3 days"), 2.0);
    assert_close(parse_duration("3 days, maybe 5"), 3.0);
}

#[test]
fn test_unknown_unit_means_days() {
    assert_close(parse_duration("2 months"), 2.0);
    assert_close(parse_duration("6 sprints"), 6.0);
}

#[test]
fn test_format_days_reads_back() {
    assert_eq!(format_days(3.0), "3 days");
    assert_eq!(format_days(1.0), "1 day");
    assert_eq!(format_days(1.5), "1.5 days");
    assert_eq!(format_days(1e20), "100000000000000000000 days");
    for days in [0.25, 1.0, 2.5, 14.0, 1e20, 3e300] {
        assert_close(parse_duration(&format_days(days)), days);
    }
}
