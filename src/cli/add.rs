//! Add command implementation

use anyhow::{bail, Result};
use chrono::NaiveTime;

use dictator::domain::Frequency;
use dictator::engine::create_habit;
use dictator::store::Store;

/// Create a new habit and store it at the top of the list
pub fn add_command(
    store: &Store,
    title: &str,
    cue: Option<&str>,
    remind: Option<&str>,
    weekly: bool,
) -> Result<()> {
    if let Some(time) = remind {
        if NaiveTime::parse_from_str(time, "%H:%M").is_err() {
            bail!("Invalid reminder time '{}', expected HH:MM (24-hour)", time);
        }
    }

    let frequency = if weekly {
        Frequency::Weekly
    } else {
        Frequency::Daily
    };
    let habit = create_habit(title, cue, remind, frequency)?;

    let mut habits = store.load_habits()?;
    habits.insert(0, habit.clone());
    store.save_habits(&habits)?;

    println!("Added '{}' ({})", habit.title, habit.id);
    Ok(())
}
