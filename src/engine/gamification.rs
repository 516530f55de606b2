//! Willpower XP and level system
//!
//! XP is derived from scratch on every read - nothing here is persisted.
//! A habit contributes for its whole recorded history, its current streak,
//! and a same-day completion bonus. The daily total re-counts today's
//! completion and streak bonus on top of the history term; that
//! double-count is part of the reward curve and must stay numerically
//! exact.

use crate::domain::Habit;

use super::badges::{unlocked_badges, BadgeId};

/// XP rewards for habit activity
pub struct XpRewards;

impl XpRewards {
    /// XP per completed day anywhere in the history
    pub const COMPLETION: u32 = 10;

    /// XP per streak day currently held
    pub const STREAK_BONUS: u32 = 5;

    /// One-off bonus while today is marked complete
    pub const TODAY_BONUS: u32 = 25;

    /// XP needed to advance one level
    pub const LEVEL_THRESHOLD: u32 = 250;
}

/// Read-only gamification snapshot derived from the habit collection
#[derive(Debug, Clone)]
pub struct GamificationSummary {
    pub total_xp: u32,
    /// 1-based level
    pub level: u32,
    /// Progress into the current level, in [0, 1)
    pub progress_to_next: f64,
    /// XP earned by habits completed today
    pub daily_xp: u32,
    pub unlocked_badges: Vec<BadgeId>,
}

/// Compute the full gamification snapshot for a habit collection.
pub fn compute_gamification(habits: &[Habit]) -> GamificationSummary {
    let total_xp: u32 = habits
        .iter()
        .map(|h| {
            let completion_points = h.total_reps() as u32 * XpRewards::COMPLETION;
            let streak_bonus = h.streak * XpRewards::STREAK_BONUS;
            let today_bonus = if h.completed_today {
                XpRewards::TODAY_BONUS
            } else {
                0
            };
            completion_points + streak_bonus + today_bonus
        })
        .sum();

    let daily_xp: u32 = habits
        .iter()
        .filter(|h| h.completed_today)
        .map(|h| XpRewards::COMPLETION + XpRewards::TODAY_BONUS + h.streak * XpRewards::STREAK_BONUS)
        .sum();

    GamificationSummary {
        total_xp,
        level: total_xp / XpRewards::LEVEL_THRESHOLD + 1,
        progress_to_next: f64::from(total_xp % XpRewards::LEVEL_THRESHOLD)
            / f64::from(XpRewards::LEVEL_THRESHOLD),
        daily_xp,
        unlocked_badges: unlocked_badges(habits),
    }
}

/// Percentage of the configured daily XP goal reached, clamped to 100.
///
/// A zero goal is treated as met to avoid dividing by an unset value.
pub fn daily_goal_percent(daily_xp: u32, daily_xp_goal: u32) -> u32 {
    if daily_xp_goal == 0 {
        return 100;
    }
    ((daily_xp as u64 * 100) / daily_xp_goal as u64).min(100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Frequency;

    fn habit(streak: u32, completed: bool, history: Vec<bool>) -> Habit {
        Habit {
            id: "h".to_string(),
            title: "Read 10 Pages".to_string(),
            cue: "Before bed".to_string(),
            reminder_time: None,
            frequency: Frequency::Daily,
            streak,
            completed_today: completed,
            history,
        }
    }

    #[test]
    fn test_empty_collection_is_level_one() {
        let summary = compute_gamification(&[]);
        assert_eq!(summary.total_xp, 0);
        assert_eq!(summary.level, 1);
        assert_eq!(summary.daily_xp, 0);
        assert!(summary.unlocked_badges.is_empty());
    }

    #[test]
    fn test_per_habit_contribution() {
        // 3 completions * 10 + streak 2 * 5 + today 25 = 65
        let summary = compute_gamification(&[habit(2, true, vec![true, true, true])]);
        assert_eq!(summary.total_xp, 65);
        // daily: 10 + 25 + 2*5 = 45
        assert_eq!(summary.daily_xp, 45);
    }

    #[test]
    fn test_incomplete_today_earns_no_daily_xp() {
        let summary = compute_gamification(&[habit(3, false, vec![true, true, true, false])]);
        assert_eq!(summary.daily_xp, 0);
        // 3*10 + 3*5 = 45
        assert_eq!(summary.total_xp, 45);
    }

    #[test]
    fn test_level_formula_at_625_xp() {
        // 625 XP: 62 completions (620) + streak 1 (5). floor(625/250)+1 = 3.
        let mut history = vec![true; 62];
        history.push(false);
        let summary = compute_gamification(&[habit(1, false, history)]);
        assert_eq!(summary.total_xp, 625);
        assert_eq!(summary.level, 3);
        assert!((summary.progress_to_next - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_stays_below_one() {
        let summary = compute_gamification(&[habit(0, false, vec![true; 24])]);
        assert_eq!(summary.total_xp, 240);
        assert!(summary.progress_to_next < 1.0);
    }

    #[test]
    fn test_daily_goal_percent_clamps() {
        assert_eq!(daily_goal_percent(45, 100), 45);
        assert_eq!(daily_goal_percent(250, 100), 100);
        assert_eq!(daily_goal_percent(0, 100), 0);
        assert_eq!(daily_goal_percent(10, 0), 100);
    }
}
