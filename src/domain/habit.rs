use serde::{Deserialize, Serialize};

/// How often a habit is meant to be performed.
///
/// Only affects which habits count toward the perfect-day badge and the
/// generic evening reminder; the engine never schedules anything itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    Weekly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Daily" => Some(Self::Daily),
            "Weekly" => Some(Self::Weekly),
            _ => None,
        }
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Self::Daily
    }
}

/// A tracked habit with its rolling daily completion history.
///
/// `history` is ordered oldest first, with the last element always standing
/// for the current day. Invariant: `history.last() == Some(&completed_today)`.
/// New days are appended by the day-rollover pass in the store, never by the
/// engine operations themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub title: String,
    /// Free-text trigger, e.g. "After morning coffee".
    pub cue: String,
    /// Wall-clock reminder in `HH:MM` (24h). Read by the reminder
    /// calculator; opaque to the engine.
    pub reminder_time: Option<String>,
    pub frequency: Frequency,
    /// Consecutive qualifying completions. Never negative.
    pub streak: u32,
    /// Whether the current day (last history slot) is marked complete.
    pub completed_today: bool,
    pub history: Vec<bool>,
}

impl Habit {
    /// Total completions recorded anywhere in the history.
    pub fn total_reps(&self) -> usize {
        self.history.iter().filter(|&&done| done).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_roundtrip() {
        assert_eq!(Frequency::from_str("Daily"), Some(Frequency::Daily));
        assert_eq!(Frequency::from_str("Weekly"), Some(Frequency::Weekly));
        assert_eq!(Frequency::from_str("hourly"), None);
        assert_eq!(Frequency::Daily.as_str(), "Daily");
    }

    #[test]
    fn test_total_reps() {
        let habit = Habit {
            id: "h1".to_string(),
            title: "Read".to_string(),
            cue: "Before bed".to_string(),
            reminder_time: None,
            frequency: Frequency::Daily,
            streak: 2,
            completed_today: true,
            history: vec![true, false, true, true],
        };
        assert_eq!(habit.total_reps(), 3);
    }
}
