//! End-to-end tests for the store + engine flow
//!
//! Exercises the path the CLI takes: open a store, roll it to today,
//! mutate habits through the engine, persist, and read derived stats back
//! after a reload.

use chrono::NaiveDate;
use tempfile::tempdir;

use dictator::blocklist;
use dictator::domain::Frequency;
use dictator::engine::{
    compute_gamification, create_habit, toggle_completion, BadgeId,
};
use dictator::store::Store;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_toggle_persists_across_reopen() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("dictator.db");

    let store = Store::with_path(&db_path).unwrap();
    let habit = create_habit("Deep Work", Some("After coffee"), None, Frequency::Daily).unwrap();
    let id = habit.id.clone();
    store.save_habits(&[habit]).unwrap();

    let mut habits = store.load_habits().unwrap();
    assert!(toggle_completion(&mut habits, &id));
    store.save_habits(&habits).unwrap();
    drop(store);

    let store = Store::with_path(&db_path).unwrap();
    let habits = store.load_habits().unwrap();
    assert!(habits[0].completed_today);
    assert_eq!(habits[0].streak, 1);
    assert_eq!(habits[0].history, vec![true]);

    let summary = compute_gamification(&habits);
    // 1 completion (10) + streak 1 (5) + today bonus (25)
    assert_eq!(summary.total_xp, 40);
    assert_eq!(summary.daily_xp, 40);
    assert!(summary.unlocked_badges.contains(&BadgeId::Starter));
    assert!(summary.unlocked_badges.contains(&BadgeId::PerfectDay));
}

#[test]
fn test_daily_flow_across_three_days() {
    let dir = tempdir().unwrap();
    let store = Store::with_path(&dir.path().join("dictator.db")).unwrap();

    let day1 = date(2026, 8, 4);
    let day2 = date(2026, 8, 5);
    let day4 = date(2026, 8, 7);

    store.sync_to_day(day1).unwrap();
    let habit = create_habit("Read 10 Pages", None, None, Frequency::Daily).unwrap();
    let id = habit.id.clone();
    store.save_habits(&[habit]).unwrap();

    // Day 1: complete.
    let mut habits = store.load_habits().unwrap();
    toggle_completion(&mut habits, &id);
    store.save_habits(&habits).unwrap();

    // Day 2: rollover keeps the streak, habit is pending again.
    store.sync_to_day(day2).unwrap();
    let mut habits = store.load_habits().unwrap();
    assert!(!habits[0].completed_today);
    assert_eq!(habits[0].streak, 1);
    assert_eq!(habits[0].history, vec![true, false]);
    toggle_completion(&mut habits, &id);
    assert_eq!(habits[0].streak, 2);
    store.save_habits(&habits).unwrap();

    // Two days later: the missed day in between resets the streak.
    store.sync_to_day(day4).unwrap();
    let habits = store.load_habits().unwrap();
    assert_eq!(habits[0].streak, 0);
    assert_eq!(habits[0].history, vec![true, true, false, false]);
}

#[test]
fn test_apps_roundtrip_and_daily_reset() {
    let dir = tempdir().unwrap();
    let store = Store::with_path(&dir.path().join("dictator.db")).unwrap();

    store.sync_to_day(date(2026, 8, 5)).unwrap();

    let mut apps = vec![blocklist::create_app("Instagram", "com.instagram.android", 30)];
    let id = apps[0].id.clone();
    let event = blocklist::record_usage(&mut apps, &id, 45);
    assert!(event.is_some());
    store.save_apps(&apps).unwrap();

    let apps = store.load_apps().unwrap();
    assert!(apps[0].is_blocked);
    assert_eq!(apps[0].daily_usage_minutes, 45);

    // Usage resets on the next day; the block survives.
    store.sync_to_day(date(2026, 8, 6)).unwrap();
    let apps = store.load_apps().unwrap();
    assert_eq!(apps[0].daily_usage_minutes, 0);
    assert!(apps[0].is_blocked);
}
