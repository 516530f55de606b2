//! Daily discipline quotes

use chrono::{Datelike, NaiveDate};

/// A quotation with attribution
#[derive(Debug, Clone, Copy)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

pub static QUOTES: &[Quote] = &[
    Quote {
        text: "Discipline is freedom.",
        author: "Jocko Willink",
    },
    Quote {
        text: "He who has a why to live can bear almost any how.",
        author: "Friedrich Nietzsche",
    },
    Quote {
        text: "We are what we repeatedly do. Excellence, then, is not an act, but a habit.",
        author: "Aristotle",
    },
    Quote {
        text: "You have power over your mind - not outside events. Realize this, and you will find strength.",
        author: "Marcus Aurelius",
    },
    Quote {
        text: "Waste no more time arguing about what a good man should be. Be one.",
        author: "Marcus Aurelius",
    },
    Quote {
        text: "The happiness of your life depends upon the quality of your thoughts.",
        author: "Marcus Aurelius",
    },
    Quote {
        text: "Man conquers the world by conquering himself.",
        author: "Zeno of Citium",
    },
    Quote {
        text: "No man is free who is not master of himself.",
        author: "Epictetus",
    },
    Quote {
        text: "It is not death that a man should fear, but he should fear never beginning to live.",
        author: "Marcus Aurelius",
    },
    Quote {
        text: "To be calm is the highest achievement of the self.",
        author: "Zen Proverb",
    },
    Quote {
        text: "Focus on what you can control. Ignore the rest.",
        author: "Stoic Maxim",
    },
    Quote {
        text: "Amateurs sit and wait for inspiration, the rest of us just get up and go to work.",
        author: "Stephen King",
    },
];

/// The quote for a given date, stable across the day.
pub fn quote_of_day(date: NaiveDate) -> &'static Quote {
    &QUOTES[date.ordinal0() as usize % QUOTES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_is_stable_within_a_day() {
        let d = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(quote_of_day(d).text, quote_of_day(d).text);
    }

    #[test]
    fn test_quote_rotates_across_days() {
        let a = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        assert_ne!(quote_of_day(a).text, quote_of_day(b).text);
    }
}
