//! Date/time helpers around the intended-time flow.
//!
//! The questionnaire and travel-details request both traffic in a canonical
//! `YYYY-MM-DDTHH:MM` string. Everything here is pure; functions that need
//! the clock take a `now` in their `_at` form, with convenience wrappers
//! reading local time.

use chrono::{Datelike, Days, Local, NaiveDateTime, NaiveTime, Weekday};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PlannerError, Result};

/// Canonical planning datetime format.
pub const PLANNING_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Quick-pick labels offered alongside free-form time input.
pub const TIME_SHORTCUTS: [&str; 4] = ["Right Now", "Tonight", "Tomorrow Evening", "This Weekend"];

/// When the user intends to head out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Timing {
    #[serde(rename = "Right Now!")]
    RightNow,
    #[serde(rename = "Later Today")]
    LaterToday,
    #[serde(rename = "Sometime This Week")]
    SometimeThisWeek,
}

impl Timing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timing::RightNow => "Right Now!",
            Timing::LaterToday => "Later Today",
            Timing::SometimeThisWeek => "Sometime This Week",
        }
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human confirmation line for the chosen intended time.
///
/// Yields `"Right Now"`, `"Today at 7:00 PM"`, a long form like
/// `"Friday, March 6 at 7:00 PM"`, or the empty string when there is
/// nothing formattable.
pub fn format_intended_time(specific: Option<&str>, timing: Option<Timing>) -> String {
    let Some(specific) = specific.filter(|s| !s.is_empty()) else {
        return match timing {
            Some(Timing::RightNow) => "Right Now".to_string(),
            _ => String::new(),
        };
    };

    match timing {
        Some(Timing::LaterToday) => match parse_clock_time(specific) {
            Some(time) => format!("Today at {}", time.format("%-I:%M %p")),
            None => String::new(),
        },
        Some(Timing::SometimeThisWeek) => {
            match NaiveDateTime::parse_from_str(specific, PLANNING_DATE_TIME_FORMAT) {
                Ok(when) => long_form(when),
                Err(_) => String::new(),
            }
        }
        _ => String::new(),
    }
}

/// Resolve an intended time to a concrete datetime, falling back to `now`
/// for anything unparseable. Accepts the canonical format or a bare `HH:MM`
/// meaning today.
pub fn parse_specific_date_time_at(specific: Option<&str>, now: NaiveDateTime) -> NaiveDateTime {
    let Some(specific) = specific.filter(|s| !s.is_empty()) else {
        return now;
    };

    if specific.contains('T') {
        NaiveDateTime::parse_from_str(specific, PLANNING_DATE_TIME_FORMAT).unwrap_or(now)
    } else if specific.contains(':') {
        match parse_clock_time(specific) {
            Some(time) => now.date().and_time(time),
            None => now,
        }
    } else {
        now
    }
}

/// [`parse_specific_date_time_at`] anchored to local time.
pub fn parse_specific_date_time(specific: Option<&str>) -> NaiveDateTime {
    parse_specific_date_time_at(specific, Local::now().naive_local())
}

/// Rough outing length in hours for a time-window answer.
pub fn get_duration_hours(time_window: Option<&str>) -> u32 {
    let Some(window) = time_window else { return 2 };
    if window.contains("1-2") {
        2
    } else if window.contains("3-4") {
        4
    } else if window.contains("5+") {
        5
    } else if window.contains("8+") {
        8
    } else {
        2
    }
}

/// Expand a quick-pick label into a canonical datetime string.
pub fn date_time_from_shortcut_at(shortcut: &str, now: NaiveDateTime) -> Option<String> {
    let target = match shortcut {
        "Right Now" => now,
        "Tonight" => now.date().and_hms_opt(19, 0, 0)?,
        "Tomorrow Evening" => now
            .date()
            .checked_add_days(Days::new(1))?
            .and_hms_opt(19, 0, 0)?,
        "This Weekend" => {
            let days_ahead = (Weekday::Sat.num_days_from_monday() + 7
                - now.weekday().num_days_from_monday())
                % 7;
            now.date()
                .checked_add_days(Days::new(u64::from(days_ahead)))?
                .and_hms_opt(16, 0, 0)?
        }
        _ => return None,
    };
    Some(target.format(PLANNING_DATE_TIME_FORMAT).to_string())
}

/// [`date_time_from_shortcut_at`] anchored to local time.
pub fn date_time_from_shortcut(shortcut: &str) -> Option<String> {
    date_time_from_shortcut_at(shortcut, Local::now().naive_local())
}

/// Normalize whatever the user typed for the intended time.
///
/// Shortcut labels expand, canonical datetimes and bare `HH:MM` times are
/// canonicalized, and free-form text passes through trimmed for the travel
/// service to interpret.
pub fn normalize_time_input_at(input: &str, now: NaiveDateTime) -> String {
    let input = input.trim();

    if let Some(normalized) = date_time_from_shortcut_at(input, now) {
        return normalized;
    }
    if NaiveDateTime::parse_from_str(input, PLANNING_DATE_TIME_FORMAT).is_ok() {
        return input.to_string();
    }
    if let Some(time) = parse_clock_time(input) {
        return now
            .date()
            .and_time(time)
            .format(PLANNING_DATE_TIME_FORMAT)
            .to_string();
    }

    input.to_string()
}

/// [`normalize_time_input_at`] anchored to local time.
pub fn normalize_time_input(input: &str) -> String {
    normalize_time_input_at(input, Local::now().naive_local())
}

/// Strict parse of a canonical planning datetime.
pub fn parse_planning_date_time(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), PLANNING_DATE_TIME_FORMAT).map_err(|_| {
        PlannerError::InvalidDateTime {
            value: value.to_string(),
        }
    })
}

/// Long confirmation line for a canonical datetime; unparseable input is
/// returned unchanged.
pub fn format_planning_date_time(value: &str) -> String {
    match parse_planning_date_time(value) {
        Ok(when) => long_form(when),
        Err(_) => value.to_string(),
    }
}

fn long_form(when: NaiveDateTime) -> String {
    when.format("%A, %B %-d at %-I:%M %p").to_string()
}

fn parse_clock_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}
