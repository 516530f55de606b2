use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dictator::config::Config;
use dictator::store::Store;

mod cli;

use cli::apps::AppsCommand;

#[derive(Parser)]
#[command(name = "dictator")]
#[command(about = "Dictator - habit streaks, willpower XP and app blocking from the terminal")]
#[command(version)]
struct Cli {
    /// Path to the database file (defaults to ~/.dictator/dictator.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file to ~/.dictator/config.toml
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Create a new habit
    Add {
        title: String,

        /// Trigger for the habit, e.g. "After morning coffee"
        #[arg(long)]
        cue: Option<String>,

        /// Reminder time (HH:MM, 24-hour)
        #[arg(long)]
        remind: Option<String>,

        /// Track weekly instead of daily
        #[arg(long)]
        weekly: bool,
    },

    /// Toggle today's completion for a habit
    Done {
        /// Habit id or title
        habit: String,
    },

    /// List habits with streaks and the last two weeks
    List,

    /// Delete a habit
    Rm {
        /// Habit id or title
        habit: String,
    },

    /// Show willpower level, XP and the daily goal
    Stats,

    /// Show the badge board
    Badges,

    /// Show completions per day for the last week
    Week,

    /// Show the 18-week consistency heatmap
    Heatmap {
        /// Show a single habit's 90-day log instead
        #[arg(long)]
        habit: Option<String>,
    },

    /// Manage the app blocklist
    Apps {
        #[command(subcommand)]
        action: AppsCommand,
    },

    /// Print reminders due this minute (for an external scheduler)
    Remind,

    /// Fuzzy-search habits by title or cue
    Search { query: String },
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    if let Commands::Init { force } = &args.command {
        return cli::init::init_command(*force);
    }

    let store = match &args.db {
        Some(path) => Store::with_path(path)?,
        None => Store::open_default()?,
    };
    let config = Config::load()?;

    // Roll habit histories and usage counters to the current day before
    // any command reads them.
    let now = Local::now();
    let today = now.date_naive();
    store.sync_to_day(today)?;

    match args.command {
        Commands::Init { .. } => unreachable!("handled above"),
        Commands::Add {
            title,
            cue,
            remind,
            weekly,
        } => cli::add::add_command(&store, &title, cue.as_deref(), remind.as_deref(), weekly),
        Commands::Done { habit } => cli::done::done_command(&store, &habit),
        Commands::List => cli::list::list_command(&store),
        Commands::Rm { habit } => cli::remove::remove_command(&store, &habit),
        Commands::Stats => cli::stats::stats_command(&store, &config, today),
        Commands::Badges => cli::badges::badges_command(&store),
        Commands::Week => cli::week::week_command(&store, today),
        Commands::Heatmap { habit } => cli::heatmap::heatmap_command(&store, habit.as_deref()),
        Commands::Apps { action } => cli::apps::apps_command(&store, action),
        Commands::Remind => cli::remind::remind_command(&store, &config, now.time()),
        Commands::Search { query } => cli::search::search_command(&store, &query),
    }
}
