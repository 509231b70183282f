//! Recorded ticks for offline replay.
//!
//! A [`TickSnapshot`] captures what the host knew during one client tick: the tick
//! context, the candidate menu entries, and enough of the scene, NPC and item tables to
//! resolve them. [`SnapshotResolver`] answers [`EntityResolver`] lookups from a snapshot
//! the same way the live client does.
//!
//! ```yaml
//! context:
//!   game_state: logged_in
//!   selected_widget: { widget_id: 9764864, item_id: 1522, is_selected: true }
//! items:
//!   1522: { name: Yew logs, is_noted: true }
//! objects:
//!   - { x: 50, y: 52, id: 10583, slot: game_object,
//!       definition: { name: Bank booth, actions: [Bank, Collect] } }
//! npcs:
//!   3: { name: Banker, actions: [Talk-to, Bank] }
//! entries:
//!   - { kind: widget_target_on_game_object, option: Use, target: Bank booth,
//!       coordinate: { x: 50, y: 52, id: 10583 } }
//! ```

use crate::models::{
    CandidateEntry, EntityDescription, ItemDescription, NpcHandle, TickContext,
};
use crate::services::EntityResolver;
use camino::Utf8Path;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

/// Errors that can occur while loading a snapshot
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse snapshot: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    #[error("Object {id} at ({x}, {y}) is recorded more than once in the same slot")]
    DuplicateObject { x: i32, y: i32, id: i32 },
}

/// Which tile slot an object occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectSlot {
    #[default]
    GameObject,
    WallObject,
}

/// An object placed on a scene tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedObject {
    pub x: i32,
    pub y: i32,
    pub id: i32,

    #[serde(default)]
    pub slot: ObjectSlot,

    pub definition: EntityDescription,
}

/// One recorded client tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickSnapshot {
    #[serde(default)]
    pub context: TickContext,

    #[serde(default)]
    pub items: IndexMap<i32, ItemDescription>,

    #[serde(default)]
    pub objects: Vec<PlacedObject>,

    /// Transformed NPC definitions by handle
    #[serde(default)]
    pub npcs: IndexMap<u32, EntityDescription>,

    #[serde(default)]
    pub entries: Vec<CandidateEntry>,
}

impl TickSnapshot {
    /// Parse and validate a snapshot from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, SnapshotError> {
        let snapshot: TickSnapshot = serde_yaml_ng::from_str(text)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Load a snapshot file.
    pub fn load(path: &Utf8Path) -> Result<Self, SnapshotError> {
        let text = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
            path: path.to_string(),
            source,
        })?;

        let snapshot = Self::from_yaml(&text)?;
        tracing::info!(
            "Loaded snapshot from {}: {} entries, {} objects, {} npcs",
            path,
            snapshot.entries.len(),
            snapshot.objects.len(),
            snapshot.npcs.len()
        );
        Ok(snapshot)
    }

    /// A tile holds at most one object per id in each slot.
    fn validate(&self) -> Result<(), SnapshotError> {
        for (i, a) in self.objects.iter().enumerate() {
            let duplicate = self.objects[i + 1..]
                .iter()
                .any(|b| (a.x, a.y, a.id, a.slot) == (b.x, b.y, b.id, b.slot));
            if duplicate {
                return Err(SnapshotError::DuplicateObject {
                    x: a.x,
                    y: a.y,
                    id: a.id,
                });
            }
        }
        Ok(())
    }

    pub fn resolver(&self) -> SnapshotResolver<'_> {
        SnapshotResolver { snapshot: self }
    }
}

/// Resolves lookups against a recorded snapshot.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotResolver<'s> {
    snapshot: &'s TickSnapshot,
}

impl SnapshotResolver<'_> {
    fn find_on_tile(&self, x: i32, y: i32, id: i32, slot: ObjectSlot) -> Option<&PlacedObject> {
        self.snapshot
            .objects
            .iter()
            .find(|o| o.slot == slot && o.x == x && o.y == y && o.id == id)
    }
}

impl EntityResolver for SnapshotResolver<'_> {
    /// Game objects on the tile are searched before the wall object.
    fn resolve_object(&self, x: i32, y: i32, id: i32) -> Option<EntityDescription> {
        self.find_on_tile(x, y, id, ObjectSlot::GameObject)
            .or_else(|| self.find_on_tile(x, y, id, ObjectSlot::WallObject))
            .map(|o| o.definition.clone())
    }

    fn resolve_npc(&self, handle: NpcHandle) -> Option<EntityDescription> {
        self.snapshot.npcs.get(&handle.0).cloned()
    }

    fn resolve_item(&self, item_id: i32) -> Option<ItemDescription> {
        self.snapshot.items.get(&item_id).cloned()
    }
}
