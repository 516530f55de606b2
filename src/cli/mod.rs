//! CLI command implementations

pub mod add;
pub mod apps;
pub mod badges;
pub mod done;
pub mod heatmap;
pub mod init;
pub mod list;
pub mod remind;
pub mod remove;
pub mod search;
pub mod stats;
pub mod week;

use dictator::domain::Habit;
use dictator::search::search as fuzzy_search;

/// Resolve a user-supplied habit reference to an id.
///
/// Matches the exact id first, then a case-insensitive title as long as it
/// is unambiguous.
pub(crate) fn find_habit_id(habits: &[Habit], query: &str) -> Option<String> {
    if let Some(habit) = habits.iter().find(|h| h.id == query) {
        return Some(habit.id.clone());
    }

    let query_lower = query.to_lowercase();
    let mut by_title = habits.iter().filter(|h| h.title.to_lowercase() == query_lower);
    match (by_title.next(), by_title.next()) {
        (Some(habit), None) => Some(habit.id.clone()),
        _ => None,
    }
}

/// Print a not-found message, with a fuzzy suggestion when one exists.
pub(crate) fn report_no_match(habits: &[Habit], query: &str) {
    match fuzzy_search(habits, query, 1).first() {
        Some(suggestion) => {
            eprintln!("No habit matching '{}'. Did you mean '{}'?", query, suggestion.title)
        }
        None => eprintln!("No habit matching '{}'.", query),
    }
}
