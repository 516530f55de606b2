use serde::{Deserialize, Serialize};

/// A monitored application on the blocklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppEntry {
    pub id: String,
    pub name: String,
    /// Platform package identifier, e.g. `com.instagram.android`.
    pub package_name: String,
    pub is_blocked: bool,
    /// Minutes used so far today. Reset to 0 on day rollover.
    pub daily_usage_minutes: u32,
    /// Daily allowance in minutes. Reaching it auto-blocks the app.
    pub limit_minutes: u32,
}

impl AppEntry {
    /// Minutes left before the daily limit is reached.
    pub fn remaining_minutes(&self) -> u32 {
        self.limit_minutes.saturating_sub(self.daily_usage_minutes)
    }

    pub fn is_over_limit(&self) -> bool {
        self.daily_usage_minutes >= self.limit_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(usage: u32, limit: u32) -> AppEntry {
        AppEntry {
            id: "a1".to_string(),
            name: "Instagram".to_string(),
            package_name: "com.instagram.android".to_string(),
            is_blocked: false,
            daily_usage_minutes: usage,
            limit_minutes: limit,
        }
    }

    #[test]
    fn test_remaining_saturates_at_zero() {
        assert_eq!(app(10, 30).remaining_minutes(), 20);
        assert_eq!(app(45, 30).remaining_minutes(), 0);
    }

    #[test]
    fn test_over_limit_boundary() {
        assert!(!app(29, 30).is_over_limit());
        assert!(app(30, 30).is_over_limit());
    }
}
