// State management module
//
// This module provides the FilterState which owns the rule tiers and configuration the
// filter reads on every tick, swaps the custom allow list on configuration changes, and
// emits change events for interested listeners.

use crate::allow_list::CustomAllowList;
use crate::classifier::Classifier;
use crate::metrics::Metrics;
use crate::models::{
    CONFIG_GROUP, CandidateEntry, ItemDescription, KEY_CUSTOM_UNNOTE_LIST, TickContext,
    UnnoteConfig,
};
use crate::rules::RuleSet;
use crate::services::{EntityResolver, EntryFilter};
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::broadcast;

/// Change events emitted when the filter state is modified
#[derive(Clone, Debug, PartialEq)]
pub enum StateChange {
    /// A configuration value was replaced
    ConfigUpdated { key: String },

    /// The custom allow list was rebuilt from new configuration text
    AllowListRebuilt { entries: usize },
}

/// Everything a classification call reads.
#[derive(Clone, Debug)]
pub struct UnnoteState {
    pub config: UnnoteConfig,
    pub rules: RuleSet,
    pub allow_list: CustomAllowList,
}

impl UnnoteState {
    pub fn classifier(&self) -> Classifier<'_> {
        Classifier::new(&self.rules, &self.allow_list, &self.config)
    }
}

/// Thread-safe owner of the filter's configuration and rule tiers
///
/// - Holds [`UnnoteState`] behind `Arc<RwLock<T>>`; ticks take a read lock
/// - The custom allow list is parsed outside the lock and swapped in under a single
///   write, so a tick sees either the old list or the new one
/// - Emits [`StateChange`] events over a tokio broadcast channel
///
/// The host calls [`on_config_changed`](Self::on_config_changed) from its configuration
/// notification and [`process_tick`](Self::process_tick) from its tick callback.
pub struct FilterState {
    state: Arc<RwLock<UnnoteState>>,

    /// Broadcast channel for emitting state change events
    state_tx: broadcast::Sender<StateChange>,

    metrics: Arc<Metrics>,
}

impl FilterState {
    /// Create a FilterState with the built-in rule set
    pub fn new(config: UnnoteConfig) -> Self {
        Self::with_rules(config, RuleSet::builtin().clone())
    }

    /// Create a FilterState with a custom rule set
    ///
    /// The allow list is built here once, before the first tick can observe it.
    pub fn with_rules(config: UnnoteConfig, rules: RuleSet) -> Self {
        let (state_tx, _) = broadcast::channel(16);
        let allow_list = CustomAllowList::from_text(&config.custom_unnote_list);

        tracing::info!(
            "Filter state initialized: ge_booths={}, tables={}, custom_entries={}",
            config.enable_ge_booths,
            config.enable_tables,
            allow_list.len()
        );

        Self {
            state: Arc::new(RwLock::new(UnnoteState {
                config,
                rules,
                allow_list,
            })),
            state_tx,
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// Execute a function with read access to the state
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&UnnoteState) -> R,
    {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Get a copy of the current configuration
    pub fn config(&self) -> UnnoteConfig {
        self.read(|s| s.config.clone())
    }

    /// Check whether `name` is on the custom allow list
    pub fn allow_list_contains(&self, name: &str) -> bool {
        self.read(|s| s.allow_list.contains(name))
    }

    /// Handle a configuration change notification from the host
    ///
    /// # Arguments
    /// * `group` - Configuration group of the changed key; other plugins' groups are ignored
    /// * `key` - Name of the changed key
    /// * `config` - The host's configuration snapshot after the change
    ///
    /// # Returns
    /// A vector of StateChange events that were emitted
    pub fn on_config_changed(
        &self,
        group: &str,
        key: &str,
        config: UnnoteConfig,
    ) -> Vec<StateChange> {
        if group != CONFIG_GROUP {
            return Vec::new();
        }

        // Build the replacement list before taking the write lock
        let rebuilt = (key == KEY_CUSTOM_UNNOTE_LIST).then(|| {
            let mut allow_list = CustomAllowList::default();
            allow_list.rebuild(&config.custom_unnote_list);
            allow_list
        });

        let mut changes = vec![StateChange::ConfigUpdated {
            key: key.to_string(),
        }];

        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state.config = config;

            if let Some(allow_list) = rebuilt {
                changes.push(StateChange::AllowListRebuilt {
                    entries: allow_list.len(),
                });
                state.allow_list = allow_list;
                self.metrics.record_allow_list_rebuild();
            }
        }

        tracing::info!("Configuration key '{}' changed", key);

        for change in &changes {
            // Ignore send errors - it's OK if no one is listening
            let _ = self.state_tx.send(change.clone());
        }

        changes
    }

    /// Filter entries for an already resolved selected item
    ///
    /// Ticks where the item is not note-like pass the entries through and are counted as
    /// inactive rather than filtered.
    pub fn apply<R>(
        &self,
        selected: &ItemDescription,
        entries: Vec<CandidateEntry>,
        resolver: &R,
    ) -> Vec<CandidateEntry>
    where
        R: EntityResolver + ?Sized,
    {
        let examined = entries.len();
        let (active, kept) = self.read(|s| {
            let filter = EntryFilter::new(s.classifier());
            let active = filter.is_active(selected);
            (active, filter.apply(selected, entries, resolver))
        });

        if active {
            self.metrics.record_filtered(examined, kept.len());
            tracing::debug!("Tick filtered: {} of {} entries kept", kept.len(), examined);
        } else {
            self.metrics.record_tick_inactive();
        }
        kept
    }

    /// Run the filter for one host tick
    ///
    /// # Returns
    /// `None` if the tick was gated off and the host should leave its menu untouched,
    /// otherwise the retained entries
    pub fn process_tick<R>(
        &self,
        ctx: &TickContext,
        entries: Vec<CandidateEntry>,
        resolver: &R,
    ) -> Option<Vec<CandidateEntry>>
    where
        R: EntityResolver + ?Sized,
    {
        let Some(item) = EntryFilter::selected_item(ctx, resolver) else {
            self.metrics.record_tick_skipped();
            return None;
        };

        Some(self.apply(&item, entries, resolver))
    }

    /// Subscribe to state change events
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.state_tx.subscribe()
    }

    /// Get the metrics collected for this state
    pub fn metrics(&self) -> Arc<Metrics> {
        Arc::clone(&self.metrics)
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(UnnoteConfig::default())
    }
}
