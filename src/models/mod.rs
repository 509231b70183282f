//! Data models for the unnote filter.
//!
//! - [`EntityDescription`] / [`ItemDescription`]: resolved identities the classifier works on
//! - [`CandidateEntry`] / [`EntryKind`]: menu entries offered by the host before filtering
//! - [`TickContext`]: host state sampled once per tick, used to decide whether to filter at all
//! - [`UnnoteConfig`]: user settings plus the host key names they are stored under
//!
//! All models derive `Serialize`/`Deserialize` so recorded ticks can be replayed from YAML
//! (see [`crate::replay`]).

pub mod config;
pub mod entity;
pub mod entry;

pub use config::{
    CONFIG_GROUP, KEY_CUSTOM_UNNOTE_LIST, KEY_ENABLE_GE_BOOTHS, KEY_ENABLE_TABLES, UnnoteConfig,
};
pub use entity::{EntityDescription, ItemDescription};
pub use entry::{
    CandidateEntry, EntryKind, GameState, INVENTORY_WIDGET_ID, NpcHandle, SceneCoordinate,
    SelectedWidget, TickContext,
};
