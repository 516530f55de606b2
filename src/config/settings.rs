//! Settings configuration types

use serde::{Deserialize, Serialize};

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Daily willpower XP target shown as a goal percentage
    #[serde(default = "default_daily_xp_goal")]
    pub daily_xp_goal: u32,

    /// Whether the strict-mode lockdown window is active
    #[serde(default)]
    pub strict_mode: bool,

    /// Strict-mode window start, `HH:MM` 24-hour
    #[serde(default = "default_strict_mode_start")]
    pub strict_mode_start: String,

    /// Strict-mode window end, `HH:MM` 24-hour
    #[serde(default = "default_strict_mode_end")]
    pub strict_mode_end: String,

    /// When the generic evening reminder checks for pending daily habits
    #[serde(default = "default_evening_check")]
    pub evening_check: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_xp_goal: default_daily_xp_goal(),
            strict_mode: false,
            strict_mode_start: default_strict_mode_start(),
            strict_mode_end: default_strict_mode_end(),
            evening_check: default_evening_check(),
        }
    }
}

fn default_daily_xp_goal() -> u32 {
    100
}

fn default_strict_mode_start() -> String {
    "22:00".to_string()
}

fn default_strict_mode_end() -> String {
    "06:00".to_string()
}

fn default_evening_check() -> String {
    "20:00".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.daily_xp_goal, 100);
        assert!(!settings.strict_mode);
        assert_eq!(settings.evening_check, "20:00");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str("daily_xp_goal = 250").unwrap();
        assert_eq!(settings.daily_xp_goal, 250);
        assert_eq!(settings.strict_mode_start, "22:00");
        assert_eq!(settings.strict_mode_end, "06:00");
    }
}
