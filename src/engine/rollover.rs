//! Day rollover for habit histories
//!
//! The engine never advances the calendar itself; the store calls this
//! before handing habits to a caller, comparing the last day it saw
//! against the current one. Rolling forward appends one `false` slot per
//! elapsed day so the "last element is today" invariant keeps holding.

use chrono::NaiveDate;

use crate::domain::Habit;

/// Format a date as a `YYYY-MM-DD` day bucket.
pub fn day_bucket(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM-DD` day bucket back into a date.
pub fn parse_day_bucket(bucket: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(bucket, "%Y-%m-%d").ok()
}

/// Roll every habit forward from `last_seen` to `today`.
///
/// Appends a `false` slot per elapsed calendar day and clears
/// `completed_today`. The streak survives only when exactly one day
/// elapsed and yesterday ended complete; any fully missed day resets it
/// to zero. Returns whether anything changed (`today` at or before
/// `last_seen` is a no-op).
pub fn advance_to(habits: &mut [Habit], last_seen: NaiveDate, today: NaiveDate) -> bool {
    let elapsed = (today - last_seen).num_days();
    if elapsed <= 0 {
        return false;
    }

    for habit in habits.iter_mut() {
        let yesterday_complete = habit.history.last().copied().unwrap_or(false);

        for _ in 0..elapsed {
            habit.history.push(false);
        }
        habit.completed_today = false;

        if !(elapsed == 1 && yesterday_complete) {
            habit.streak = 0;
        }
    }

    true
}
