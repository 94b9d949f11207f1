//! Calendar arithmetic and date-part extraction.
//!
//! `date_diff` follows the platform's calendar semantics rather than pure
//! elapsed time: Month/Quarter/Year differences compare calendar
//! components (so Jan 31 → Feb 1 is one month), Day counts date
//! boundaries, Week counts week-start boundaries crossed, and the
//! sub-day units are truncated elapsed intervals.
//!
//! `week_number` implements the three classic calendar-week rules (week
//! containing Jan 1, first full week, first 4-day week) against a
//! configurable week-start day. Dates falling before a year's week one
//! are numbered as the trailing week of the previous year; the count never
//! rolls forward into the next year's week 1.

use crate::error::{ActionError, Result};
use chrono::{
    DateTime, Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike,
    Utc, Weekday,
};
use serde::{Deserialize, Serialize};

/// Calendar unit for differences and additions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

/// Numbering scheme for [`weekday_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekdayNumbering {
    /// Sunday = 1 … Saturday = 7.
    SundayStartOne,
    /// Monday = 1 … Sunday = 7.
    MondayStartOne,
    /// Monday = 0 … Sunday = 6.
    MondayStartZero,
}

/// Rule deciding which week of a year counts as week 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekRule {
    /// Week 1 is the week containing January 1.
    FirstDay,
    /// Week 1 is the first week lying entirely within the year.
    FirstFullWeek,
    /// Week 1 is the first week with at least four days in the year.
    FirstFourDayWeek,
}

/// Difference `to - from` expressed in the given calendar unit.
pub fn date_diff(unit: DateUnit, from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    match unit {
        DateUnit::Second => (to - from).num_seconds(),
        DateUnit::Minute => (to - from).num_minutes(),
        DateUnit::Hour => (to - from).num_hours(),
        DateUnit::Day => (to.date() - from.date()).num_days(),
        // Week boundaries crossed, with Sunday-started weeks.
        DateUnit::Week => {
            let from_start = week_start_of(from.date(), Weekday::Sun);
            let to_start = week_start_of(to.date(), Weekday::Sun);
            (to_start - from_start).num_days() / 7
        }
        DateUnit::Month => {
            i64::from(to.year() - from.year()) * 12 + i64::from(to.month()) - i64::from(from.month())
        }
        DateUnit::Quarter => {
            i64::from(to.year() - from.year()) * 4 + i64::from(quarter(to.date()))
                - i64::from(quarter(from.date()))
        }
        DateUnit::Year => i64::from(to.year() - from.year()),
    }
}

/// Shift a datetime by a signed amount of the given unit.
pub fn date_add(unit: DateUnit, datetime: NaiveDateTime, amount: i64) -> Result<NaiveDateTime> {
    match unit {
        DateUnit::Second => checked_duration(datetime, Duration::seconds(amount)),
        DateUnit::Minute => checked_duration(datetime, Duration::minutes(amount)),
        DateUnit::Hour => checked_duration(datetime, Duration::hours(amount)),
        DateUnit::Day => checked_duration(datetime, Duration::days(amount)),
        DateUnit::Week => checked_duration(datetime, Duration::weeks(amount)),
        DateUnit::Month => shift_months(datetime, amount),
        DateUnit::Quarter => shift_months(datetime, amount.saturating_mul(3)),
        DateUnit::Year => shift_months(datetime, amount.saturating_mul(12)),
    }
}

fn checked_duration(datetime: NaiveDateTime, delta: Duration) -> Result<NaiveDateTime> {
    datetime
        .checked_add_signed(delta)
        .ok_or(ActionError::DateOutOfRange)
}

fn shift_months(datetime: NaiveDateTime, months: i64) -> Result<NaiveDateTime> {
    let magnitude =
        u32::try_from(months.unsigned_abs()).map_err(|_| ActionError::DateOutOfRange)?;
    let shifted = if months >= 0 {
        datetime.checked_add_months(Months::new(magnitude))
    } else {
        datetime.checked_sub_months(Months::new(magnitude))
    };
    shifted.ok_or(ActionError::DateOutOfRange)
}

/// The day-of-week number under the chosen numbering scheme.
pub fn weekday_number(date: NaiveDate, numbering: WeekdayNumbering) -> u32 {
    match numbering {
        WeekdayNumbering::SundayStartOne => date.weekday().num_days_from_sunday() + 1,
        WeekdayNumbering::MondayStartOne => date.weekday().num_days_from_monday() + 1,
        WeekdayNumbering::MondayStartZero => date.weekday().num_days_from_monday(),
    }
}

/// Whether the date falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whether the date falls on a Monday through Friday.
pub fn is_working_day(date: NaiveDate) -> bool {
    !is_weekend(date)
}

/// Calendar month of the date, 1-based.
pub fn month(date: NaiveDate) -> u32 {
    date.month()
}

/// Day of the month, 1-based.
pub fn day(date: NaiveDate) -> u32 {
    date.day()
}

/// Calendar year of the date.
pub fn year(date: NaiveDate) -> i32 {
    date.year()
}

/// Hour component of the datetime, 0–23.
pub fn hour(datetime: NaiveDateTime) -> u32 {
    datetime.hour()
}

/// Minute component of the datetime, 0–59.
pub fn minute(datetime: NaiveDateTime) -> u32 {
    datetime.minute()
}

/// Week-of-year of the date under the given rule and week-start day.
pub fn week_number(date: NaiveDate, rule: WeekRule, week_start: Weekday) -> u32 {
    match rule {
        WeekRule::FirstDay => {
            let offset = days_past_week_start(jan1(date.year()).weekday(), week_start);
            ((i64::from(date.ordinal0()) + offset) / 7 + 1) as u32
        }
        WeekRule::FirstFullWeek => threshold_week(date, week_start, 7),
        WeekRule::FirstFourDayWeek => threshold_week(date, week_start, 4),
    }
}

/// Week number where week 1 is the first week holding at least `min_days`
/// days of the year. Dates before that week belong to the previous year's
/// trailing week.
fn threshold_week(date: NaiveDate, week_start: Weekday, min_days: i64) -> u32 {
    let week_one = week_one_start(date.year(), week_start, min_days);
    let anchor = if date < week_one {
        week_one_start(date.year() - 1, week_start, min_days)
    } else {
        week_one
    };
    ((date - anchor).num_days() / 7 + 1) as u32
}

fn week_one_start(year: i32, week_start: Weekday, min_days: i64) -> NaiveDate {
    let jan1 = jan1(year);
    let back = days_past_week_start(jan1.weekday(), week_start);
    let containing_week = jan1 - Duration::days(back);
    // Days of the Jan-1 week that fall inside `year`.
    if 7 - back >= min_days {
        containing_week
    } else {
        containing_week + Duration::days(7)
    }
}

fn days_past_week_start(day: Weekday, week_start: Weekday) -> i64 {
    (i64::from(day.num_days_from_monday()) - i64::from(week_start.num_days_from_monday()))
        .rem_euclid(7)
}

fn week_start_of(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    date - Duration::days(days_past_week_start(date.weekday(), week_start))
}

fn jan1(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).expect("January 1 exists in every year")
}

fn quarter(date: NaiveDate) -> u32 {
    (date.month0() / 3) + 1
}

/// Parse a date or datetime string against an explicit chrono format.
/// Date-only formats come back at midnight.
pub fn parse_date(input: &str, format: &str) -> Result<NaiveDateTime> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(input, format) {
        return Ok(datetime);
    }
    NaiveDate::parse_from_str(input, format)
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| ActionError::InvalidDate {
            input: input.to_string(),
            format: format.to_string(),
        })
}

/// Render a datetime through an explicit chrono format string. An
/// unsupported format specifier is an error; the `write!` indirection is
/// required because `to_string` on a bad `DelayedFormat` panics.
pub fn format_date(datetime: NaiveDateTime, format: &str) -> Result<String> {
    use std::fmt::Write;

    let mut out = String::new();
    write!(out, "{}", datetime.format(format)).map_err(|_| ActionError::InvalidDate {
        input: datetime.to_string(),
        format: format.to_string(),
    })?;
    Ok(out)
}

/// Today's date in local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The current UTC instant.
pub fn utc_now() -> DateTime<Utc> {
    Utc::now()
}
