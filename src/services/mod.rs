//! Services module - the menu entry filter and the host lookups it depends on.
//!
//! # Components
//!
//! - [`EntryFilter`]: Applies the per-kind policy to a batch of candidate menu entries,
//!   delegating object and NPC decisions to the [`Classifier`](crate::classifier::Classifier)
//! - [`EntityResolver`]: The host-side lookups (scene objects, NPCs, items) the filter needs.
//!   Implemented by the game host, or by [`SnapshotResolver`](crate::replay::SnapshotResolver)
//!   when replaying a recorded tick
//!
//! The services hold no state of their own: the rule tiers and configuration are borrowed
//! for the duration of a tick, usually from [`FilterState`](crate::state::FilterState).
//!
//! # Usage Example
//!
//! ```ignore
//! use easy_unnote::classifier::Classifier;
//! use easy_unnote::services::EntryFilter;
//!
//! let filter = EntryFilter::new(Classifier::new(rules, &allow_list, &config));
//!
//! // `None` means the host should leave its menu alone this tick
//! if let Some(entries) = filter.process_tick(&ctx, entries, &resolver) {
//!     host.set_menu_entries(entries);
//! }
//! ```

pub mod filter;

pub use filter::{EntityResolver, EntryFilter};
