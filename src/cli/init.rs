//! Init command implementation

use anyhow::{bail, Result};
use tracing::info;

use dictator::config::Config;

/// Default configuration content for dictator init
pub const DEFAULT_CONFIG: &str = r#"# Dictator configuration
#
# Available options:
#   daily_xp_goal     - Willpower XP target per day (default: 100)
#   strict_mode       - Enable the lockdown window (default: false)
#   strict_mode_start - Lockdown start, HH:MM 24-hour (default: "22:00")
#   strict_mode_end   - Lockdown end, HH:MM 24-hour (default: "06:00")
#   evening_check     - When the pending-habits reminder fires (default: "20:00")

[settings]
daily_xp_goal = 100
strict_mode = false
strict_mode_start = "22:00"
strict_mode_end = "06:00"
evening_check = "20:00"
"#;

/// Write the default config file
pub fn init_command(force: bool) -> Result<()> {
    let path = Config::global_config_path();

    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, DEFAULT_CONFIG)?;

    info!("wrote config to {}", path.display());
    println!("Created {}", path.display());
    Ok(())
}
