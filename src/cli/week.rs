//! Week command implementation

use anyhow::Result;
use chrono::NaiveDate;

use dictator::engine::weekly_velocity;
use dictator::store::Store;

/// Show completions per day for the trailing week
pub fn week_command(store: &Store, today: NaiveDate) -> Result<()> {
    let habits = store.load_habits()?;
    let week = weekly_velocity(&habits, today);

    println!("Weekly velocity:\n");
    for day in &week {
        println!(
            "  {}  {:<20} {}",
            day.label,
            "█".repeat(day.count as usize),
            day.count
        );
    }

    Ok(())
}
