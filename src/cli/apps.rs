//! Apps command implementation

use anyhow::Result;
use clap::Subcommand;

use dictator::blocklist::{create_app, record_usage, set_blocked, UsageEvent};
use dictator::domain::AppEntry;
use dictator::store::Store;

#[derive(Subcommand)]
pub enum AppsCommand {
    /// List monitored apps with usage against their limits
    List,

    /// Add an app to the blocklist
    Add {
        name: String,

        /// Platform package name, e.g. com.instagram.android
        #[arg(long)]
        package: String,

        /// Daily allowance in minutes
        #[arg(long, default_value_t = 30)]
        limit: u32,
    },

    /// Block an app
    Block { app: String },

    /// Unblock an app
    Unblock { app: String },

    /// Record usage minutes against an app's allowance
    Use { app: String, minutes: u32 },

    /// Change an app's daily allowance
    Limit { app: String, minutes: u32 },

    /// Remove an app from the blocklist
    Rm { app: String },
}

/// Dispatch a blocklist subcommand
pub fn apps_command(store: &Store, action: AppsCommand) -> Result<()> {
    let mut apps = store.load_apps()?;

    match action {
        AppsCommand::List => {
            if apps.is_empty() {
                println!("No apps monitored. Add one with `dictator apps add`.");
                return Ok(());
            }
            println!("Apps ({}):\n", apps.len());
            for app in &apps {
                let state = if app.is_blocked { "BLOCKED" } else { "open" };
                println!(
                    "  {:<16} {:>3}m / {:>3}m  [{}]  {}",
                    app.name, app.daily_usage_minutes, app.limit_minutes, state, app.package_name
                );
            }
            return Ok(());
        }
        AppsCommand::Add {
            name,
            package,
            limit,
        } => {
            let app = create_app(&name, &package, limit);
            println!("Monitoring '{}' ({}m/day)", app.name, app.limit_minutes);
            apps.push(app);
        }
        AppsCommand::Block { app } => {
            let Some(id) = find_app_id(&apps, &app) else {
                eprintln!("No app matching '{}'.", app);
                return Ok(());
            };
            set_blocked(&mut apps, &id, true);
            println!("Blocked '{}'", app);
        }
        AppsCommand::Unblock { app } => {
            let Some(id) = find_app_id(&apps, &app) else {
                eprintln!("No app matching '{}'.", app);
                return Ok(());
            };
            set_blocked(&mut apps, &id, false);
            println!("Unblocked '{}'", app);
        }
        AppsCommand::Use { app, minutes } => {
            let Some(id) = find_app_id(&apps, &app) else {
                eprintln!("No app matching '{}'.", app);
                return Ok(());
            };
            match record_usage(&mut apps, &id, minutes) {
                Some(UsageEvent::LimitReached { name }) => {
                    println!("🚫 Limit reached: {} is now blocked.", name);
                }
                None => {
                    if let Some(entry) = apps.iter().find(|a| a.id == id) {
                        println!(
                            "'{}': {}m used, {}m remaining",
                            entry.name,
                            entry.daily_usage_minutes,
                            entry.remaining_minutes()
                        );
                    }
                }
            }
        }
        AppsCommand::Limit { app, minutes } => {
            let Some(id) = find_app_id(&apps, &app) else {
                eprintln!("No app matching '{}'.", app);
                return Ok(());
            };
            if let Some(entry) = apps.iter_mut().find(|a| a.id == id) {
                entry.limit_minutes = minutes;
                println!("'{}' allowance set to {}m/day", entry.name, minutes);
            }
        }
        AppsCommand::Rm { app } => {
            let Some(id) = find_app_id(&apps, &app) else {
                eprintln!("No app matching '{}'.", app);
                return Ok(());
            };
            apps.retain(|a| a.id != id);
            println!("Removed '{}'", app);
        }
    }

    store.save_apps(&apps)?;
    Ok(())
}

/// Resolve an app by id, exact name, or package name (case-insensitive).
fn find_app_id(apps: &[AppEntry], query: &str) -> Option<String> {
    if let Some(app) = apps.iter().find(|a| a.id == query) {
        return Some(app.id.clone());
    }
    let query_lower = query.to_lowercase();
    apps.iter()
        .find(|a| a.name.to_lowercase() == query_lower || a.package_name == query)
        .map(|a| a.id.clone())
}
