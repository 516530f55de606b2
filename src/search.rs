//! Fuzzy search over the habit collection
//!
//! Uses a combination of:
//! - Exact matching (highest priority)
//! - Substring matching
//! - Jaro-Winkler fuzzy similarity (for typos)
//!
//! Results are scored and sorted by relevance.

use strsim::jaro_winkler;

use crate::domain::Habit;

/// Minimum fuzzy similarity threshold (0.0 - 1.0)
const FUZZY_THRESHOLD: f64 = 0.75;

/// Search habits by query, best matches first.
pub fn search<'a>(habits: &'a [Habit], query: &str, limit: usize) -> Vec<&'a Habit> {
    let query_lower = query.to_lowercase();
    let query_parts: Vec<&str> = query_lower.split_whitespace().collect();
    if query_parts.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<(&Habit, u32)> = habits
        .iter()
        .filter_map(|habit| {
            let title_lower = habit.title.to_lowercase();
            let cue_lower = habit.cue.to_lowercase();

            let mut score: u32 = 0;
            let mut matched = false;

            if title_lower == query_lower {
                score += 1000;
                matched = true;
            } else if title_lower.starts_with(&query_lower) {
                score += 500;
                matched = true;
            } else if title_lower.contains(&query_lower) {
                score += 200;
                matched = true;
            } else if cue_lower.contains(&query_lower) {
                score += 100;
                matched = true;
            }

            // All query parts found somewhere in title or cue
            let all_parts_match = query_parts
                .iter()
                .all(|part| title_lower.contains(part) || cue_lower.contains(part));
            if all_parts_match {
                score += 50;
                matched = true;
            }

            // Fuzzy similarity against the title, for typos
            let similarity = jaro_winkler(&query_lower, &title_lower);
            if similarity >= FUZZY_THRESHOLD {
                score += (similarity * 100.0) as u32;
                matched = true;
            }

            matched.then_some((habit, score))
        })
        .collect();

    results.sort_by(|a, b| b.1.cmp(&a.1));
    results.truncate(limit);
    results.into_iter().map(|(habit, _)| habit).collect()
}
