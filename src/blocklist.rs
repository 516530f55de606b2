//! App blocklist and usage-limit depletion
//!
//! Tracks per-app daily usage against a configured allowance. Reaching the
//! allowance auto-blocks the app and surfaces a [`UsageEvent`] so the
//! caller can notify. Mutations on unknown ids are silent no-ops, the same
//! policy the habit operations follow.

use chrono::NaiveTime;
use uuid::Uuid;

use crate::domain::AppEntry;

/// Notable state changes produced while recording usage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageEvent {
    /// The app just crossed its daily allowance and was blocked.
    LimitReached { name: String },
}

/// Create a new blocklist entry, unblocked with zero usage.
pub fn create_app(name: &str, package_name: &str, limit_minutes: u32) -> AppEntry {
    AppEntry {
        id: Uuid::new_v4().to_string(),
        name: name.trim().to_string(),
        package_name: package_name.trim().to_string(),
        is_blocked: false,
        daily_usage_minutes: 0,
        limit_minutes,
    }
}

/// Add usage minutes to an app.
///
/// When the new total reaches the limit the app is force-blocked; the
/// event fires only on the transition, not while already blocked.
pub fn record_usage(apps: &mut [AppEntry], id: &str, minutes: u32) -> Option<UsageEvent> {
    let app = apps.iter_mut().find(|a| a.id == id)?;

    app.daily_usage_minutes = app.daily_usage_minutes.saturating_add(minutes);
    if app.is_over_limit() {
        let should_notify = !app.is_blocked;
        app.is_blocked = true;
        if should_notify {
            return Some(UsageEvent::LimitReached {
                name: app.name.clone(),
            });
        }
    }
    None
}

/// Block or unblock a single app. Returns `false` when no app matched.
pub fn set_blocked(apps: &mut [AppEntry], id: &str, blocked: bool) -> bool {
    match apps.iter_mut().find(|a| a.id == id) {
        Some(app) => {
            app.is_blocked = blocked;
            true
        }
        None => false,
    }
}

/// Block or unblock every app whose id is in `ids`.
pub fn set_blocked_bulk(apps: &mut [AppEntry], ids: &[&str], blocked: bool) {
    for app in apps.iter_mut() {
        if ids.contains(&app.id.as_str()) {
            app.is_blocked = blocked;
        }
    }
}

/// Total minutes used today across all apps.
pub fn total_screen_time(apps: &[AppEntry]) -> u32 {
    apps.iter().map(|a| a.daily_usage_minutes).sum()
}

pub fn blocked_count(apps: &[AppEntry]) -> usize {
    apps.iter().filter(|a| a.is_blocked).count()
}

/// Zero all usage counters. Called by the store on day rollover.
pub fn reset_daily_usage(apps: &mut [AppEntry]) {
    for app in apps.iter_mut() {
        app.daily_usage_minutes = 0;
    }
}

/// Whether `now` falls inside the strict-mode window `[start, end)`.
///
/// Windows may cross midnight (e.g. 22:00 to 06:00). Unparseable bounds
/// and zero-length windows are treated as inactive.
pub fn in_strict_window(now: NaiveTime, start: &str, end: &str) -> bool {
    let Ok(start) = NaiveTime::parse_from_str(start, "%H:%M") else {
        return false;
    };
    let Ok(end) = NaiveTime::parse_from_str(end, "%H:%M") else {
        return false;
    };

    if start < end {
        start <= now && now < end
    } else if start > end {
        now >= start || now < end
    } else {
        false
    }
}
