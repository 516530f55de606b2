//! Badges command implementation

use anyhow::Result;

use dictator::engine::{unlocked_badges, BADGES};
use dictator::store::Store;

/// Show the badge board
pub fn badges_command(store: &Store) -> Result<()> {
    let habits = store.load_habits()?;
    let unlocked = unlocked_badges(&habits);

    println!("Achievements ({}/{}):\n", unlocked.len(), BADGES.len());
    for badge in BADGES {
        let mark = if unlocked.contains(&badge.id) {
            badge.icon
        } else {
            "🔒"
        };
        println!("  {} {:<14} {}", mark, badge.name, badge.description);
    }

    Ok(())
}
