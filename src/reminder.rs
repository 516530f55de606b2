//! Due-reminder calculation
//!
//! Pure function of the habit collection, settings, and a wall-clock time.
//! Matching is minute-resolution on formatted `HH:MM`, the same contract
//! the stored reminder times use. Delivery is a collaborator concern: the
//! `remind` subcommand prints due events for an external scheduler to send.

use chrono::NaiveTime;

use crate::config::Settings;
use crate::domain::{Frequency, Habit};

/// An event that is due at the queried minute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderEvent {
    /// Strict mode lockdown begins.
    StrictModeStart,
    /// Strict mode lockdown ends.
    StrictModeEnd,
    /// A habit's cue reminder fired and the habit is still pending.
    HabitCue {
        id: String,
        title: String,
        cue: String,
    },
    /// The generic evening check: daily habits still pending.
    DisciplineCheck { pending: usize },
}

/// All events due at `now`.
pub fn due_events(habits: &[Habit], settings: &Settings, now: NaiveTime) -> Vec<ReminderEvent> {
    let current = now.format("%H:%M").to_string();
    let mut events = Vec::new();

    if settings.strict_mode {
        if settings.strict_mode_start == current {
            events.push(ReminderEvent::StrictModeStart);
        }
        if settings.strict_mode_end == current {
            events.push(ReminderEvent::StrictModeEnd);
        }
    }

    for habit in habits {
        if habit.reminder_time.as_deref() == Some(current.as_str()) && !habit.completed_today {
            events.push(ReminderEvent::HabitCue {
                id: habit.id.clone(),
                title: habit.title.clone(),
                cue: habit.cue.clone(),
            });
        }
    }

    if settings.evening_check == current {
        let pending = habits
            .iter()
            .filter(|h| h.frequency == Frequency::Daily && !h.completed_today)
            .count();
        if pending > 0 {
            events.push(ReminderEvent::DisciplineCheck { pending });
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habit(id: &str, reminder: Option<&str>, frequency: Frequency, completed: bool) -> Habit {
        Habit {
            id: id.to_string(),
            title: "Deep Work".to_string(),
            cue: "After morning coffee".to_string(),
            reminder_time: reminder.map(|r| r.to_string()),
            frequency,
            streak: 0,
            completed_today: completed,
            history: vec![completed],
        }
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_habit_cue_fires_when_pending() {
        let habits = vec![habit("h1", Some("09:00"), Frequency::Daily, false)];
        let events = due_events(&habits, &Settings::default(), time(9, 0));
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], ReminderEvent::HabitCue { id, .. } if id == "h1"));
    }

    #[test]
    fn test_completed_habit_does_not_fire() {
        let habits = vec![habit("h1", Some("09:00"), Frequency::Daily, true)];
        assert!(due_events(&habits, &Settings::default(), time(9, 0)).is_empty());
    }

    #[test]
    fn test_off_minute_does_not_fire() {
        let habits = vec![habit("h1", Some("09:00"), Frequency::Daily, false)];
        assert!(due_events(&habits, &Settings::default(), time(9, 1)).is_empty());
    }

    #[test]
    fn test_evening_check_counts_pending_dailies() {
        let habits = vec![
            habit("h1", None, Frequency::Daily, false),
            habit("h2", None, Frequency::Daily, true),
            habit("h3", None, Frequency::Weekly, false),
        ];
        let events = due_events(&habits, &Settings::default(), time(20, 0));
        assert_eq!(events, vec![ReminderEvent::DisciplineCheck { pending: 1 }]);
    }

    #[test]
    fn test_evening_check_silent_when_all_done() {
        let habits = vec![habit("h1", None, Frequency::Daily, true)];
        assert!(due_events(&habits, &Settings::default(), time(20, 0)).is_empty());
    }

    #[test]
    fn test_strict_mode_boundaries() {
        let settings = Settings {
            strict_mode: true,
            strict_mode_start: "22:00".to_string(),
            strict_mode_end: "06:00".to_string(),
            ..Settings::default()
        };
        assert_eq!(
            due_events(&[], &settings, time(22, 0)),
            vec![ReminderEvent::StrictModeStart]
        );
        assert_eq!(
            due_events(&[], &settings, time(6, 0)),
            vec![ReminderEvent::StrictModeEnd]
        );

        let disabled = Settings {
            strict_mode: false,
            ..settings
        };
        assert!(due_events(&[], &disabled, time(22, 0)).is_empty());
    }
}
