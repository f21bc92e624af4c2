//! Calendar date parsing and chargeable-day counting.

use chrono::{Datelike, Duration, NaiveDate};

/// Strict `YYYY-MM-DD` parse. Anything else (other separators, missing
/// zero-padding, trailing text) yields `None`. Pure calendar date, no
/// timezone interpretation.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Number of chargeable days in the inclusive interval `[start, end]`.
///
/// With `working_days_only` unset every calendar day counts; otherwise
/// only Mon-Fri count. Computed by date arithmetic, O(1) in the interval
/// length. Returns 0 when `start > end`.
pub fn count_billable_days(start: NaiveDate, end: NaiveDate, working_days_only: bool) -> i64 {
    if start > end {
        return 0;
    }
    if !working_days_only {
        return (end - start).num_days() + 1;
    }
    let mut days = weekdays_in_exclusive_range(start, end);
    if is_weekday(end) {
        days += 1;
    }
    days
}

fn is_weekday(date: NaiveDate) -> bool {
    date.weekday().number_from_monday() <= 5
}

/// Weekday count over `[start, end)`. Every run of 7 consecutive days
/// holds exactly 5 weekdays, so only the remainder needs inspecting.
fn weekdays_in_exclusive_range(start: NaiveDate, end: NaiveDate) -> i64 {
    let span = (end - start).num_days();
    let mut count = span / 7 * 5;
    for offset in 0..span % 7 {
        if is_weekday(start + Duration::days(offset)) {
            count += 1;
        }
    }
    count
}
