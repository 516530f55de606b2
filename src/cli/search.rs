//! Search command implementation

use anyhow::Result;

use dictator::search::search;
use dictator::store::Store;

const RESULT_LIMIT: usize = 10;

/// Fuzzy-search habits by title or cue
pub fn search_command(store: &Store, query: &str) -> Result<()> {
    let habits = store.load_habits()?;
    let hits = search(&habits, query, RESULT_LIMIT);

    if hits.is_empty() {
        println!("No habits matching '{}'.", query);
        return Ok(());
    }

    for habit in hits {
        println!("  {}  {} | {}", habit.id, habit.title, habit.cue);
    }
    Ok(())
}
