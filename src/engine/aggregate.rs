//! Day-bucketed aggregation over habit histories
//!
//! Every view here offsets backward from the end of each history: the last
//! element is always today, offset `window - 1 - i` days before it is
//! bucket `i`. A habit whose history is shorter than the window simply
//! contributes nothing for the missing days.

use chrono::{Duration, NaiveDate};

use crate::domain::Habit;

/// Buckets in the weekly velocity view
pub const WEEKLY_WINDOW: usize = 7;

/// Days covered by the all-habits heatmap (18 weeks)
pub const HEATMAP_DAYS: usize = 126;

/// Days covered by the per-habit consistency log
pub const DETAIL_DAYS: usize = 90;

/// One bucket of the labelled weekly view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCount {
    /// 3-letter weekday name, e.g. "Mon"
    pub label: String,
    pub count: u32,
}

/// Completion counts per day over the trailing window.
///
/// Bucket 0 is the oldest day, bucket `window - 1` is today. A negative
/// history index contributes zero, never an error.
pub fn aggregate_by_day(habits: &[Habit], window: usize) -> Vec<u32> {
    (0..window)
        .map(|i| {
            let back = window - 1 - i;
            habits
                .iter()
                .filter(|h| {
                    h.history
                        .len()
                        .checked_sub(1 + back)
                        .map(|idx| h.history[idx])
                        .unwrap_or(false)
                })
                .count() as u32
        })
        .collect()
}

/// The 7-day completion chart ending at `today`, with weekday labels.
pub fn weekly_velocity(habits: &[Habit], today: NaiveDate) -> Vec<DayCount> {
    let counts = aggregate_by_day(habits, WEEKLY_WINDOW);
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let date = today - Duration::days((WEEKLY_WINDOW - 1 - i) as i64);
            DayCount {
                label: weekday_label(date),
                count,
            }
        })
        .collect()
}

/// The 18-week all-habits heatmap, oldest day first.
pub fn heatmap(habits: &[Habit]) -> Vec<u32> {
    aggregate_by_day(habits, HEATMAP_DAYS)
}

/// Per-habit daily log over the trailing window, oldest first.
///
/// `None` marks days before the habit existed, so callers can distinguish
/// "no data" from "not completed".
pub fn consistency_log(habit: &Habit, window: usize) -> Vec<Option<bool>> {
    let len = habit.history.len();
    (0..window)
        .map(|i| {
            let back = window - 1 - i;
            len.checked_sub(1 + back).map(|idx| habit.history[idx])
        })
        .collect()
}

fn weekday_label(date: NaiveDate) -> String {
    // chrono's %a gives the 3-letter English weekday name
    format!("{}", date.format("%a"))
}
