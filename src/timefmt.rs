//! Message timestamp formatting.
//!
//! One of three forms, checked in order: the "YESTERDAY" literal, a 24-hour
//! `HH:MM` for same-day messages, or `"MON 2nd"` for anything older.

use chrono::{DateTime, Datelike, TimeZone, Timelike};

/// Literal shown when the message is one day-of-month older than now.
pub const YESTERDAY: &str = "YESTERDAY";

/// Fixed three-letter month abbreviations for the date form.
const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Format a message's creation instant relative to `now`.
///
/// The yesterday check subtracts day-of-month components numerically, not
/// calendar days: a message from the 31st seen on the 1st of the next month
/// yields -30 and falls through to the date form.
pub fn format_timestamp<Tz: TimeZone>(created_at: &DateTime<Tz>, now: &DateTime<Tz>) -> String {
    if i64::from(now.day()) - i64::from(created_at.day()) == 1 {
        return YESTERDAY.to_string();
    }
    if now.year() == created_at.year()
        && now.month() == created_at.month()
        && now.day() == created_at.day()
    {
        return format!("{:02}:{:02}", created_at.hour(), created_at.minute());
    }
    format!(
        "{} {}",
        MONTHS[created_at.month0() as usize],
        ordinal_day(created_at.day())
    )
}

/// English ordinal suffix chosen from the last digit alone, so 11 formats
/// as "11st" and 13 as "13rd".
fn ordinal_day(day: u32) -> String {
    let suffix = match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}
