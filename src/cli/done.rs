//! Done command implementation

use anyhow::Result;

use dictator::engine::toggle_completion;
use dictator::store::Store;

use super::{find_habit_id, report_no_match};

/// Toggle today's completion for a habit
pub fn done_command(store: &Store, query: &str) -> Result<()> {
    let mut habits = store.load_habits()?;

    let Some(id) = find_habit_id(&habits, query) else {
        report_no_match(&habits, query);
        return Ok(());
    };

    toggle_completion(&mut habits, &id);
    store.save_habits(&habits)?;

    let habit = habits.iter().find(|h| h.id == id).expect("toggled habit");
    if habit.completed_today {
        println!("'{}' done. Streak: {} 🔥", habit.title, habit.streak);
    } else {
        println!("'{}' marked pending. Streak: {}", habit.title, habit.streak);
    }
    Ok(())
}
