use crate::classifier::{Candidate, Classifier};
use crate::models::{
    CandidateEntry, EntityDescription, EntryKind, ItemDescription, NpcHandle, TickContext,
};

/// Lookups the host provides so the filter can see what an entry points at.
///
/// "Not found" is a normal answer: the entry is dropped, nothing is reported.
#[cfg_attr(test, mockall::automock)]
pub trait EntityResolver {
    /// Find the object with definition `id` on scene tile (`x`, `y`) of the current plane,
    /// resolved to its definition (impostor name included).
    fn resolve_object(&self, x: i32, y: i32, id: i32) -> Option<EntityDescription>;

    /// Resolve an NPC handle to its transformed definition.
    fn resolve_npc(&self, handle: NpcHandle) -> Option<EntityDescription>;

    /// Look up item composition data for an item id.
    fn resolve_item(&self, item_id: i32) -> Option<ItemDescription>;
}

/// Prunes "Use note on ..." menu entries down to valid unnote targets.
///
/// # Per-kind policy (only while the selected item qualifies)
///
/// | kind                                  | decision                                  |
/// |---------------------------------------|-------------------------------------------|
/// | ground item / player target, examines | always dropped                            |
/// | game object target                    | kept iff resolved and the object qualifies |
/// | NPC target                            | kept iff resolved and the NPC qualifies   |
/// | anything else                         | always kept                               |
///
/// Retained entries keep their relative order.
#[derive(Debug, Clone, Copy)]
pub struct EntryFilter<'a> {
    classifier: Classifier<'a>,
}

impl<'a> EntryFilter<'a> {
    pub fn new(classifier: Classifier<'a>) -> Self {
        Self { classifier }
    }

    /// Filter `entries` for a player using `selected`.
    ///
    /// Returns `entries` untouched when the selected item is not note-like.
    pub fn apply<R>(
        &self,
        selected: &ItemDescription,
        entries: Vec<CandidateEntry>,
        resolver: &R,
    ) -> Vec<CandidateEntry>
    where
        R: EntityResolver + ?Sized,
    {
        if !self.is_active(selected) {
            return entries;
        }

        entries
            .into_iter()
            .filter(|entry| self.keep(entry, resolver))
            .collect()
    }

    /// Run one host tick.
    ///
    /// Returns `None` when the tick is gated off (not logged in, menu open, nothing usable
    /// selected, or the item could not be resolved); the host must then leave its menu
    /// as it is.
    pub fn process_tick<R>(
        &self,
        ctx: &TickContext,
        entries: Vec<CandidateEntry>,
        resolver: &R,
    ) -> Option<Vec<CandidateEntry>>
    where
        R: EntityResolver + ?Sized,
    {
        let item = Self::selected_item(ctx, resolver)?;
        Some(self.apply(&item, entries, resolver))
    }

    /// Whether entries are pruned at all for a player using `selected`.
    pub fn is_active(&self, selected: &ItemDescription) -> bool {
        self.classifier.qualifies(Candidate::Item(selected))
    }

    /// Resolve the inventory item selected this tick, or `None` if the tick is gated off.
    pub fn selected_item<R>(ctx: &TickContext, resolver: &R) -> Option<ItemDescription>
    where
        R: EntityResolver + ?Sized,
    {
        let item_id = ctx.selected_inventory_item()?;
        resolver.resolve_item(item_id)
    }

    fn keep<R>(&self, entry: &CandidateEntry, resolver: &R) -> bool
    where
        R: EntityResolver + ?Sized,
    {
        match entry.kind {
            EntryKind::WidgetTargetOnGroundItem
            | EntryKind::WidgetTargetOnPlayer
            | EntryKind::ExamineNpc
            | EntryKind::ExamineObject
            | EntryKind::ExamineGroundItem => false,
            EntryKind::WidgetTargetOnGameObject => {
                let Some(coordinate) = entry.coordinate else {
                    return false;
                };
                match resolver.resolve_object(coordinate.x, coordinate.y, coordinate.id) {
                    Some(object) => self.classifier.qualifies(Candidate::Object(&object)),
                    None => {
                        tracing::trace!(?coordinate, "Object not found, dropping entry");
                        false
                    }
                }
            }
            EntryKind::WidgetTargetOnNpc => entry
                .npc
                .and_then(|handle| resolver.resolve_npc(handle))
                .is_some_and(|npc| self.classifier.qualifies(Candidate::Npc(&npc))),
            EntryKind::Other => true,
        }
    }
}
