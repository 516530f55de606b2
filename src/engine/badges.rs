//! Badge definitions and unlock predicates
//!
//! Badges are a fixed, closed set. Each kind has one pure predicate over
//! the full habit collection, re-evaluated from scratch on every read -
//! there is no stored "unlocked" flag anywhere.

use crate::domain::{Frequency, Habit};

/// Unique identifier for each badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeId {
    Starter,
    Streak3,
    Streak7,
    Streak30,
    PerfectDay,
}

impl BadgeId {
    /// Get the string ID for display and storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Streak3 => "streak-3",
            Self::Streak7 => "streak-7",
            Self::Streak30 => "streak-30",
            Self::PerfectDay => "perfect-day",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "starter" => Some(Self::Starter),
            "streak-3" => Some(Self::Streak3),
            "streak-7" => Some(Self::Streak7),
            "streak-30" => Some(Self::Streak30),
            "perfect-day" => Some(Self::PerfectDay),
            _ => None,
        }
    }

    /// All badge IDs, in evaluation order
    pub fn all() -> &'static [BadgeId] {
        &[
            Self::Starter,
            Self::Streak3,
            Self::Streak7,
            Self::Streak30,
            Self::PerfectDay,
        ]
    }

    /// Whether this badge's predicate holds for the collection.
    pub fn is_unlocked(&self, habits: &[Habit]) -> bool {
        match self {
            Self::Starter => habits.iter().any(|h| h.total_reps() > 0),
            Self::Streak3 => habits.iter().any(|h| h.streak >= 3),
            Self::Streak7 => habits.iter().any(|h| h.streak >= 7),
            Self::Streak30 => habits.iter().any(|h| h.streak >= 30),
            Self::PerfectDay => {
                let dailies: Vec<_> = habits
                    .iter()
                    .filter(|h| h.frequency == Frequency::Daily)
                    .collect();
                !dailies.is_empty() && dailies.iter().all(|h| h.completed_today)
            }
        }
    }
}

/// Badge definition with display metadata
#[derive(Debug, Clone)]
pub struct Badge {
    pub id: BadgeId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// All badge definitions
pub static BADGES: &[Badge] = &[
    Badge {
        id: BadgeId::Starter,
        name: "First Step",
        description: "Complete your first habit",
        icon: "⭐",
    },
    Badge {
        id: BadgeId::Streak3,
        name: "Momentum",
        description: "Reach a 3-day streak",
        icon: "⚡",
    },
    Badge {
        id: BadgeId::Streak7,
        name: "Week Warrior",
        description: "Maintain a 7-day streak",
        icon: "🔥",
    },
    Badge {
        id: BadgeId::Streak30,
        name: "Titan",
        description: "Achieve a 30-day streak",
        icon: "👑",
    },
    Badge {
        id: BadgeId::PerfectDay,
        name: "Perfectionist",
        description: "Complete all daily habits today",
        icon: "🎯",
    },
];

impl Badge {
    /// Get badge definition by ID
    pub fn get(id: BadgeId) -> &'static Badge {
        BADGES
            .iter()
            .find(|b| b.id == id)
            .expect("All badges should be defined")
    }
}

/// The subset of badges whose predicate currently holds.
pub fn unlocked_badges(habits: &[Habit]) -> Vec<BadgeId> {
    BadgeId::all()
        .iter()
        .copied()
        .filter(|b| b.is_unlocked(habits))
        .collect()
}
