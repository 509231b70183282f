//! Easy Unnote - replay harness
//!
//! Runs the menu entry filter against a recorded tick and prints the entries that survive.
//! Useful for checking a custom unnote list or a new rule against a menu captured in game.
//!
//! # Usage
//!
//! ```text
//! easy-unnote <snapshot.yaml> [config-dir]
//! ```
//!
//! `config-dir` defaults to `Easy Unnote Data` and is expected to hold `EasyUnnote.yaml`
//! (see [`ConfigManager`]). Settings can also be overridden with `EASY_UNNOTE_*`
//! environment variables, e.g. `EASY_UNNOTE_ENABLE_TABLES=true`.
//!
//! # Execution Flow
//!
//! 1. Initialize logging → logs/easy-unnote.<date>
//! 2. Load configuration and build the filter state
//! 3. Load the snapshot and run one tick
//! 4. Print kept and dropped entries, log metrics

use anyhow::{Context, Result, bail};
use camino::Utf8PathBuf;
use easy_unnote::replay::TickSnapshot;
use easy_unnote::{APP_NAME, ConfigManager, FilterState, VERSION};

const DEFAULT_CONFIG_DIR: &str = "Easy Unnote Data";

fn main() -> Result<()> {
    let _guard = easy_unnote::logging::setup_logging("logs", APP_NAME, false, true)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let mut args = std::env::args().skip(1);
    let Some(snapshot_path) = args.next().map(Utf8PathBuf::from) else {
        bail!("usage: {} <snapshot.yaml> [config-dir]", APP_NAME);
    };
    let config_dir = args
        .next()
        .map(Utf8PathBuf::from)
        .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CONFIG_DIR));

    let config_manager = ConfigManager::new(&config_dir)?;
    let state = FilterState::new(config_manager.load_config()?);

    let snapshot = TickSnapshot::load(&snapshot_path)
        .with_context(|| format!("Failed to load snapshot: {}", snapshot_path))?;

    let before = snapshot.entries.clone();
    let resolver = snapshot.resolver();

    match state.process_tick(&snapshot.context, snapshot.entries.clone(), &resolver) {
        None => println!("Tick skipped: menu left unchanged"),
        Some(kept) => {
            // Kept entries are an ordered subsequence of the input
            let mut remaining = kept.iter().peekable();
            for entry in &before {
                let marker = if remaining.next_if_eq(&entry).is_some() {
                    "keep"
                } else {
                    "drop"
                };
                println!("{marker}  {:?}  {} {}", entry.kind, entry.option, entry.target);
            }
            println!("{} of {} entries kept", kept.len(), before.len());
        }
    }

    state.metrics().log_summary();
    Ok(())
}
