//! Mutating operations over the habit collection
//!
//! All mutations follow a fail-silently-on-missing-id policy: toggling or
//! deleting an unknown id leaves the collection untouched and reports the
//! miss through the return value rather than an error.

use uuid::Uuid;

use crate::domain::{Frequency, Habit};

/// Cue text used when none is supplied at creation.
pub const DEFAULT_CUE: &str = "Whenever I can";

/// Validation errors raised by habit creation
#[derive(Debug, thiserror::Error)]
pub enum HabitError {
    #[error("habit title must not be empty")]
    EmptyTitle,
}

/// Create a new habit with a fresh id and a single "today" history slot.
///
/// The title is validated here, exactly once: empty-after-trim is rejected
/// so nothing with an empty title ever reaches the store.
pub fn create_habit(
    title: &str,
    cue: Option<&str>,
    reminder_time: Option<&str>,
    frequency: Frequency,
) -> Result<Habit, HabitError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(HabitError::EmptyTitle);
    }

    let cue = match cue.map(str::trim) {
        Some(c) if !c.is_empty() => c.to_string(),
        _ => DEFAULT_CUE.to_string(),
    };

    Ok(Habit {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        cue,
        reminder_time: reminder_time.map(|t| t.to_string()),
        frequency,
        streak: 0,
        completed_today: false,
        history: vec![false],
    })
}

/// Toggle today's completion for the habit with the given id.
///
/// Transitioning to complete bumps the streak by one; transitioning back
/// drops it by one, floored at zero. The last history slot is overwritten
/// with the new state (a slot is appended only when the history is empty),
/// so repeated toggles within the same day only flip that slot while
/// adjusting the streak by ±1 each time.
///
/// Returns `false` when no habit matched.
pub fn toggle_completion(habits: &mut [Habit], id: &str) -> bool {
    let Some(habit) = habits.iter_mut().find(|h| h.id == id) else {
        return false;
    };

    let is_now_complete = !habit.completed_today;
    habit.completed_today = is_now_complete;
    habit.streak = if is_now_complete {
        habit.streak + 1
    } else {
        habit.streak.saturating_sub(1)
    };

    match habit.history.last_mut() {
        Some(last) => *last = is_now_complete,
        None => habit.history.push(is_now_complete),
    }

    true
}

/// Remove the habit with the given id. Returns `false` when no habit matched.
pub fn delete_habit(habits: &mut Vec<Habit>, id: &str) -> bool {
    let before = habits.len();
    habits.retain(|h| h.id != id);
    habits.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habit(id: &str, streak: u32, completed: bool, history: Vec<bool>) -> Habit {
        Habit {
            id: id.to_string(),
            title: "Deep Work".to_string(),
            cue: "After morning coffee".to_string(),
            reminder_time: None,
            frequency: Frequency::Daily,
            streak,
            completed_today: completed,
            history,
        }
    }

    #[test]
    fn test_create_defaults() {
        let h = create_habit("  Meditate  ", None, None, Frequency::Daily).unwrap();
        assert_eq!(h.title, "Meditate");
        assert_eq!(h.cue, DEFAULT_CUE);
        assert_eq!(h.streak, 0);
        assert!(!h.completed_today);
        assert_eq!(h.history, vec![false]);
    }

    #[test]
    fn test_create_empty_cue_falls_back() {
        let h = create_habit("Gym", Some("   "), Some("17:00"), Frequency::Weekly).unwrap();
        assert_eq!(h.cue, DEFAULT_CUE);
        assert_eq!(h.reminder_time.as_deref(), Some("17:00"));
        assert_eq!(h.frequency, Frequency::Weekly);
    }

    #[test]
    fn test_create_rejects_empty_title() {
        assert!(matches!(
            create_habit("   ", None, None, Frequency::Daily),
            Err(HabitError::EmptyTitle)
        ));
    }

    #[test]
    fn test_create_ids_are_unique() {
        let a = create_habit("A", None, None, Frequency::Daily).unwrap();
        let b = create_habit("A", None, None, Frequency::Daily).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_toggle_to_complete() {
        let mut habits = vec![habit("h1", 4, false, vec![true, false])];
        assert!(toggle_completion(&mut habits, "h1"));
        assert_eq!(habits[0].streak, 5);
        assert!(habits[0].completed_today);
        assert_eq!(habits[0].history, vec![true, true]);
    }

    #[test]
    fn test_toggle_streak_floor() {
        let mut habits = vec![habit("h1", 0, true, vec![true])];
        toggle_completion(&mut habits, "h1");
        assert_eq!(habits[0].streak, 0);
        assert!(!habits[0].completed_today);
        assert_eq!(habits[0].history, vec![false]);
    }

    #[test]
    fn test_toggle_empty_history_appends_once() {
        let mut habits = vec![habit("h1", 0, false, vec![])];
        toggle_completion(&mut habits, "h1");
        assert_eq!(habits[0].history, vec![true]);
        toggle_completion(&mut habits, "h1");
        assert_eq!(habits[0].history, vec![false]);
    }

    #[test]
    fn test_toggle_preserves_history_length() {
        let mut habits = vec![habit("h1", 2, false, vec![false, true, false])];
        toggle_completion(&mut habits, "h1");
        assert_eq!(habits[0].history.len(), 3);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut habits = vec![habit("h1", 3, true, vec![true])];
        assert!(!toggle_completion(&mut habits, "nonexistent"));
        assert_eq!(habits[0].streak, 3);
        assert!(habits[0].completed_today);
    }

    #[test]
    fn test_toggle_roundtrip_restores_state() {
        let mut habits = vec![habit("h1", 4, false, vec![true, false])];
        toggle_completion(&mut habits, "h1");
        assert_eq!(habits[0].streak, 5);
        toggle_completion(&mut habits, "h1");
        assert_eq!(habits[0].streak, 4);
        assert!(!habits[0].completed_today);
        assert_eq!(habits[0].history, vec![true, false]);
    }

    #[test]
    fn test_toggle_only_touches_matched_habit() {
        let mut habits = vec![
            habit("h1", 1, false, vec![false]),
            habit("h2", 7, true, vec![true]),
        ];
        toggle_completion(&mut habits, "h1");
        assert_eq!(habits[1].streak, 7);
        assert!(habits[1].completed_today);
    }

    #[test]
    fn test_delete_by_id() {
        let mut habits = vec![habit("h1", 0, false, vec![false]), habit("h2", 0, false, vec![false])];
        assert!(delete_habit(&mut habits, "h1"));
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].id, "h2");
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut habits = vec![habit("h1", 0, false, vec![false])];
        assert!(!delete_habit(&mut habits, "nope"));
        assert_eq!(habits.len(), 1);
    }
}
