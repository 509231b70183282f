// Easy Unnote - keeps "Use note on ..." menu entries limited to bank-like targets
//
// This is the library crate containing the classification rules and the entry filter.
// The binary crate (main.rs) replays recorded ticks against them.

pub mod allow_list;
pub mod classifier;
pub mod config;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod replay;
pub mod rules;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use allow_list::CustomAllowList;
pub use classifier::{Candidate, Classifier};
pub use config::ConfigManager;
pub use models::{
    CandidateEntry, EntityDescription, EntryKind, ItemDescription, NpcHandle, TickContext,
    UnnoteConfig,
};
pub use rules::RuleSet;
pub use services::{EntityResolver, EntryFilter};
pub use state::{FilterState, StateChange};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
