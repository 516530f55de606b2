//! Remind command implementation
//!
//! Prints events due at the current minute, one per line, so an external
//! scheduler (cron, systemd timer) can pipe them into a notifier.

use anyhow::Result;
use chrono::NaiveTime;

use dictator::config::Config;
use dictator::reminder::{due_events, ReminderEvent};
use dictator::store::Store;

/// Print reminders due this minute
pub fn remind_command(store: &Store, config: &Config, now: NaiveTime) -> Result<()> {
    let habits = store.load_habits()?;
    let events = due_events(&habits, &config.settings, now);

    for event in events {
        match event {
            ReminderEvent::StrictModeStart => {
                println!("⚠️ Strict Mode activated. Distractions are now blocked.");
            }
            ReminderEvent::StrictModeEnd => {
                println!("🔓 Strict Mode disengaged.");
            }
            ReminderEvent::HabitCue { title, cue, .. } => {
                println!("⚡ Reminder: {} — {}", title, cue);
            }
            ReminderEvent::DisciplineCheck { pending } => {
                println!(
                    "⚡ Discipline check: {} habit{} pending today. Don't break the streak.",
                    pending,
                    if pending == 1 { "" } else { "s" }
                );
            }
        }
    }

    Ok(())
}
