// src/schedule/duration.rs

//! Free-text duration parsing.
//!
//! `"2 days"`, `"1 week"`, `"4 hours"`, `"3d"`, `"1.5w"` all parse; the first
//! numeric magnitude in the string wins and an optional unit may follow it.
//! A missing unit means days. Anything without a usable number is one day.

use std::sync::LazyLock;

use regex::Regex;

/// Smallest bar the timeline will draw: a quarter day.
pub const MIN_DURATION_DAYS: f64 = 0.25;

/// Duration assumed for text that contains no number.
pub const DEFAULT_DURATION_DAYS: f64 = 1.0;

// Alternation order matters: leftmost-first picks "day" over "d", etc.
static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(day|days|d|week|weeks|w|hour|hours|h)?")
        .expect("duration pattern is valid")
});

/// Unit token recognised after the magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DurationUnit {
    Days,
    Weeks,
    Hours,
}

impl DurationUnit {
    fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("week" | "weeks" | "w") => DurationUnit::Weeks,
            Some("hour" | "hours" | "h") => DurationUnit::Hours,
            _ => DurationUnit::Days,
        }
    }

    fn to_days(self, value: f64) -> f64 {
        match self {
            DurationUnit::Days => value,
            DurationUnit::Weeks => value * 7.0,
            DurationUnit::Hours => value / 24.0,
        }
    }
}

/// Convert a duration string into days. Never fails.
pub fn parse_duration(text: &str) -> f64 {
    let normalized = text.trim().to_lowercase();

    let Some(caps) = DURATION.captures(&normalized) else {
        return DEFAULT_DURATION_DAYS;
    };

    let Ok(value) = caps[1].parse::<f64>() else {
        return DEFAULT_DURATION_DAYS;
    };

    let unit = DurationUnit::from_token(caps.get(2).map(|m| m.as_str()));
    let days = unit.to_days(value);
    // Digit runs too long for f64 overflow to infinity.
    if !days.is_finite() {
        return DEFAULT_DURATION_DAYS;
    }
    days.max(MIN_DURATION_DAYS)
}

/// Render a day count as the canonical duration text, e.g. `"3 days"`.
///
/// Whole numbers print without a fractional part; `parse_duration` reads
/// the result back to the same value.
pub fn format_days(days: f64) -> String {
    if days == 1.0 {
        "1 day".to_string()
    } else if days.fract() == 0.0 {
        format!("{days:.0} days")
    } else {
        format!("{days} days")
    }
}
