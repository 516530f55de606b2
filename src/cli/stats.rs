//! Stats command implementation

use anyhow::Result;
use chrono::NaiveDate;

use dictator::blocklist::{blocked_count, total_screen_time};
use dictator::config::Config;
use dictator::engine::{compute_gamification, daily_goal_percent, XpRewards};
use dictator::quotes::quote_of_day;
use dictator::store::Store;

const BAR_WIDTH: usize = 24;

/// Show the willpower summary: level, XP, daily goal and screen time
pub fn stats_command(store: &Store, config: &Config, today: NaiveDate) -> Result<()> {
    let habits = store.load_habits()?;
    let apps = store.load_apps()?;
    let summary = compute_gamification(&habits);

    let quote = quote_of_day(today);
    println!("\"{}\" — {}\n", quote.text, quote.author);

    println!("Level {}  ({} XP)", summary.level, summary.total_xp);
    let filled = (summary.progress_to_next * BAR_WIDTH as f64) as usize;
    let to_next = XpRewards::LEVEL_THRESHOLD - summary.total_xp % XpRewards::LEVEL_THRESHOLD;
    println!(
        "  [{}{}] {} XP to next level",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        to_next
    );

    let goal = config.settings.daily_xp_goal;
    let percent = daily_goal_percent(summary.daily_xp, goal);
    println!("\nToday: {} / {} XP ({}%)", summary.daily_xp, goal, percent);

    println!(
        "Badges: {}/{}",
        summary.unlocked_badges.len(),
        dictator::engine::BADGES.len()
    );

    let screen_time = total_screen_time(&apps);
    if !apps.is_empty() {
        println!(
            "\nScreen time: {}h {}m across {} apps ({} blocked)",
            screen_time / 60,
            screen_time % 60,
            apps.len(),
            blocked_count(&apps)
        );
    }

    Ok(())
}
