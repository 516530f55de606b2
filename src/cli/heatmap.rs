//! Heatmap command implementation

use anyhow::Result;

use dictator::engine::{consistency_log, heatmap, DETAIL_DAYS, HEATMAP_DAYS};
use dictator::store::Store;

use super::{find_habit_id, report_no_match};

const DAYS_PER_WEEK: usize = 7;

/// Show the 18-week all-habits heatmap, or one habit's 90-day log
pub fn heatmap_command(store: &Store, habit_query: Option<&str>) -> Result<()> {
    let habits = store.load_habits()?;

    if let Some(query) = habit_query {
        let Some(id) = find_habit_id(&habits, query) else {
            report_no_match(&habits, query);
            return Ok(());
        };
        let habit = habits.iter().find(|h| h.id == id).expect("resolved habit");

        println!("Consistency log for '{}' (last {} days):\n", habit.title, DETAIL_DAYS);
        let log = consistency_log(habit, DETAIL_DAYS);
        for row in log.chunks(15) {
            let line: String = row
                .iter()
                .map(|day| match day {
                    None => '·',
                    Some(true) => '█',
                    Some(false) => '░',
                })
                .collect();
            println!("  {}", line);
        }
        return Ok(());
    }

    let counts = heatmap(&habits);
    let weeks = HEATMAP_DAYS / DAYS_PER_WEEK;

    println!("Completions, last {} weeks (oldest column first):\n", weeks);
    // One row per weekday, one column per week; cell index walks the
    // oldest-first counts in week-sized strides.
    for row in 0..DAYS_PER_WEEK {
        let line: String = (0..weeks)
            .map(|col| intensity(counts[col * DAYS_PER_WEEK + row]))
            .collect();
        println!("  {}", line);
    }

    Ok(())
}

fn intensity(count: u32) -> char {
    match count {
        0 => '·',
        1 => '░',
        2 => '▒',
        3 => '▓',
        _ => '█',
    }
}
