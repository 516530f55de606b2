//! Durable storage for habits and the app blocklist
//!
//! The store owns the SQLite database and the day-rollover pass: callers
//! get the habit collection only after it has been rolled forward to the
//! current day, so the engine's "last history slot is today" invariant
//! holds whenever habits leave this module. Collection writes replace the
//! whole set inside a transaction (last write wins).
//!
//! # Usage
//!
//! ```ignore
//! let store = Store::open_default()?;
//! store.sync_to_day(today)?;
//! let mut habits = store.load_habits()?;
//! engine::toggle_completion(&mut habits, &id);
//! store.save_habits(&habits)?;
//! ```

mod db;

pub use db::Db;

use anyhow::Result;
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::blocklist;
use crate::domain::{AppEntry, Frequency, Habit};
use crate::engine::{advance_to, day_bucket, parse_day_bucket};

const META_LAST_SEEN_DAY: &str = "last_seen_day";

/// Central handle for durable habit and blocklist state
#[derive(Clone)]
pub struct Store {
    db: Db,
}

impl Store {
    /// Open the store at the default database location
    pub fn open_default() -> Result<Self> {
        Ok(Self {
            db: Db::open_default()?,
        })
    }

    /// Open the store with a custom database path
    pub fn with_path(path: &std::path::Path) -> Result<Self> {
        Ok(Self {
            db: Db::open(path)?,
        })
    }

    // ========================================
    // HABITS
    // ========================================

    /// Load all habits in stored order.
    pub fn load_habits(&self) -> Result<Vec<Habit>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(
            "SELECT id, title, cue, reminder_time, frequency, streak, completed_today, history
             FROM habits ORDER BY position",
        )?;
        let habits = stmt
            .query_map([], |row| {
                let frequency: String = row.get(4)?;
                let history: String = row.get(7)?;
                Ok(Habit {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    cue: row.get(2)?,
                    reminder_time: row.get(3)?,
                    frequency: Frequency::from_str(&frequency).unwrap_or_default(),
                    streak: row.get(5)?,
                    completed_today: row.get(6)?,
                    history: serde_json::from_str(&history).unwrap_or_default(),
                })
            })?
            .filter_map(|r| r.ok())
            .collect();
        Ok(habits)
    }

    /// Replace the stored habit collection.
    pub fn save_habits(&self, habits: &[Habit]) -> Result<()> {
        let conn = self.db.conn();
        let tx = conn.unchecked_transaction()?;
        tx.execute("DELETE FROM habits", [])?;
        for (position, habit) in habits.iter().enumerate() {
            tx.execute(
                "INSERT INTO habits
                 (id, title, cue, reminder_time, frequency, streak, completed_today, history, position)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                rusqlite::params![
                    habit.id,
                    habit.title,
                    habit.cue,
                    habit.reminder_time,
                    habit.frequency.as_str(),
                    habit.streak,
                    habit.completed_today,
                    serde_json::to_string(&habit.history)?,
                    position as i64,
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    // ========================================
    // APPS
    // ========================================

    /// Load all blocklist entries in stored order.
    pub fn load_apps(&self) -> Result<Vec<AppEntry>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(
            "SELECT id, name, package_name, is_blocked, daily_usage_minutes, limit_minutes
             FROM apps ORDER BY position",
        )?;
        let apps = stmt
            .query_map([], |row| {
                Ok(AppEntry {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    package_name: row.get(2)?,
                    is_blocked: row.get(3)?,
                    daily_usage_minutes: row.get(4)?,
                    limit_minutes: row.get(5)?,
                })
            })?
            .filter_map(|r| r.ok())
            .collect();
        Ok(apps)
    }

    /// Replace the stored blocklist.
    pub fn save_apps(&self, apps: &[AppEntry]) -> Result<()> {
        let conn = self.db.conn();
        let tx = conn.unchecked_transaction()?;
        tx.execute("DELETE FROM apps", [])?;
        for (position, app) in apps.iter().enumerate() {
            tx.execute(
                "INSERT INTO apps
                 (id, name, package_name, is_blocked, daily_usage_minutes, limit_minutes, position)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                rusqlite::params![
                    app.id,
                    app.name,
                    app.package_name,
                    app.is_blocked,
                    app.daily_usage_minutes,
                    app.limit_minutes,
                    position as i64,
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    // ========================================
    // DAY ROLLOVER
    // ========================================

    /// The last day the store was rolled to, if any.
    pub fn last_seen_day(&self) -> Result<Option<NaiveDate>> {
        let conn = self.db.conn();
        let value: Option<String> = conn
            .query_row(
                "SELECT value FROM meta WHERE key = ?1",
                [META_LAST_SEEN_DAY],
                |r| r.get(0),
            )
            .ok();
        Ok(value.as_deref().and_then(parse_day_bucket))
    }

    pub fn set_last_seen_day(&self, day: NaiveDate) -> Result<()> {
        let conn = self.db.conn();
        conn.execute(
            "INSERT OR REPLACE INTO meta (key, value) VALUES (?1, ?2)",
            rusqlite::params![META_LAST_SEEN_DAY, day_bucket(day)],
        )?;
        Ok(())
    }

    /// Roll stored state forward to `today`.
    ///
    /// Appends the missing history slots to every habit and zeroes app
    /// usage counters when the calendar day changed. Returns whether a
    /// rollover happened. Call once before reading habits.
    pub fn sync_to_day(&self, today: NaiveDate) -> Result<bool> {
        let Some(last_seen) = self.last_seen_day()? else {
            debug!("no last-seen day recorded, starting at {}", day_bucket(today));
            self.set_last_seen_day(today)?;
            return Ok(false);
        };

        if today <= last_seen {
            return Ok(false);
        }

        let mut habits = self.load_habits()?;
        if advance_to(&mut habits, last_seen, today) {
            self.save_habits(&habits)?;
        }

        let mut apps = self.load_apps()?;
        blocklist::reset_daily_usage(&mut apps);
        self.save_apps(&apps)?;

        self.set_last_seen_day(today)?;
        info!(
            "rolled over from {} to {}",
            day_bucket(last_seen),
            day_bucket(today)
        );
        Ok(true)
    }
}
