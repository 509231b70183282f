// Curated name lists for entities that accept banknotes without offering a "Bank" action.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Objects that act as a bank but have no "Bank" option.
pub const UNNOTE_OBJECTS: &[&str] = &["Bank chest", "Bank Chest-wreck"];

/// NPCs that can unnote items but have no "Bank" option.
pub const UNNOTE_NPCS: &[&str] = &[
    "Aisles",
    "Banknote Exchange Merchant",
    "Elder Chaos druid",
    "Phials",
    "Piles",
    "Tiles",
    // No unnote option, but useful to use noted items on
    "Wesley",
    "Rick",
    "Maid",
    "Cook",
    "Butler",
    "Demon butler",
];

/// Items that behave like banknotes without being flagged as noted.
pub const BANKNOTE_LIKE_ITEMS: &[&str] = &["Looting bag note"];

static BUILTIN: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        UNNOTE_OBJECTS.iter().copied(),
        UNNOTE_NPCS.iter().copied(),
        BANKNOTE_LIKE_ITEMS.iter().copied(),
    )
});

/// Static rule tier consulted before the user's custom list.
///
/// Object and NPC lookups ignore case. Banknote-like item lookups are exact: a
/// `"looting bag note"` is not treated as a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    object_names: Vec<String>,
    npc_names: Vec<String>,
    banknote_like_items: HashSet<String>,
}

impl RuleSet {
    pub fn new<O, N, I>(objects: O, npcs: N, items: I) -> Self
    where
        O: IntoIterator,
        O::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            object_names: objects.into_iter().map(Into::into).collect(),
            npc_names: npcs.into_iter().map(Into::into).collect(),
            banknote_like_items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in rule set, shared for the whole process.
    pub fn builtin() -> &'static RuleSet {
        &BUILTIN
    }

    pub fn is_unnote_object(&self, name: &str) -> bool {
        self.object_names
            .iter()
            .any(|o| o.eq_ignore_ascii_case(name))
    }

    pub fn is_unnote_npc(&self, name: &str) -> bool {
        self.npc_names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    pub fn is_banknote_like(&self, item_name: &str) -> bool {
        self.banknote_like_items.contains(item_name)
    }
}
