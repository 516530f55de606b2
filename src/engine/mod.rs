//! Habit engine - streaks, willpower XP, badges, day-bucketed aggregation
//!
//! Pure and synchronous: every operation is a transformation over a
//! caller-owned habit collection, with no I/O and cost linear in the number
//! of habits and the window size. The store hands the collection in, the
//! engine hands it back; durable storage and the clock are collaborators.

mod aggregate;
mod badges;
mod gamification;
mod ops;
mod rollover;

pub use aggregate::{
    aggregate_by_day, consistency_log, heatmap, weekly_velocity, DayCount, DETAIL_DAYS,
    HEATMAP_DAYS, WEEKLY_WINDOW,
};
pub use badges::{unlocked_badges, Badge, BadgeId, BADGES};
pub use gamification::{compute_gamification, daily_goal_percent, GamificationSummary, XpRewards};
pub use ops::{create_habit, delete_habit, toggle_completion, HabitError, DEFAULT_CUE};
pub use rollover::{advance_to, day_bucket, parse_day_bucket};
