//! Remove command implementation

use anyhow::Result;

use dictator::engine::delete_habit;
use dictator::store::Store;

use super::{find_habit_id, report_no_match};

/// Delete a habit from the collection
pub fn remove_command(store: &Store, query: &str) -> Result<()> {
    let mut habits = store.load_habits()?;

    let Some(id) = find_habit_id(&habits, query) else {
        report_no_match(&habits, query);
        return Ok(());
    };

    let title = habits
        .iter()
        .find(|h| h.id == id)
        .map(|h| h.title.clone())
        .unwrap_or_default();
    delete_habit(&mut habits, &id);
    store.save_habits(&habits)?;

    println!("Deleted '{}'", title);
    Ok(())
}
