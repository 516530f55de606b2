//! List command implementation

use anyhow::Result;

use dictator::engine::consistency_log;
use dictator::store::Store;

/// Days of history shown in the per-habit strip
const STRIP_DAYS: usize = 14;

/// List habits with streaks and a two-week completion strip
pub fn list_command(store: &Store) -> Result<()> {
    let habits = store.load_habits()?;

    if habits.is_empty() {
        println!("No habits tracked yet. Add one with `dictator add`.");
        return Ok(());
    }

    println!("Habits ({}):\n", habits.len());
    for habit in &habits {
        let check = if habit.completed_today { "✓" } else { " " };
        let strip: String = consistency_log(habit, STRIP_DAYS)
            .iter()
            .map(|day| match day {
                None => '·',
                Some(true) => '█',
                Some(false) => '░',
            })
            .collect();

        println!("  [{}] {}  {}", check, strip, habit.title);
        print!("      {} | {}", habit.id, habit.cue);
        if habit.streak > 0 {
            print!(" | {} day streak 🔥", habit.streak);
        }
        if let Some(time) = &habit.reminder_time {
            print!(" | ⏰ {}", time);
        }
        println!(" | {}", habit.frequency.as_str());
        println!();
    }

    Ok(())
}
