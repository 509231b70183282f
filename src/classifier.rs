//! Decides whether an item, object or NPC is a valid unnote target.
//!
//! Every check is a pure function of the description being classified plus the rule
//! tiers the [`Classifier`] borrows:
//!
//! 1. the built-in [`RuleSet`]
//! 2. the user's [`CustomAllowList`]
//! 3. the opt-in flags in [`UnnoteConfig`] for generic furniture (booths, tables, counters)
//! 4. the entity's own "Bank" action

use crate::allow_list::CustomAllowList;
use crate::models::{EntityDescription, ItemDescription, UnnoteConfig};
use crate::rules::RuleSet;

const BANK_ACTION: &str = "Bank";
const GE_BOOTH: &str = "Grand Exchange booth";
const COUNTER: &str = "Counter";
const TABLE_SUFFIX: &str = "table";

/// Something the classifier can be asked about.
#[derive(Debug, Clone, Copy)]
pub enum Candidate<'e> {
    Item(&'e ItemDescription),
    Object(&'e EntityDescription),
    /// An NPC, already resolved to its transformed identity by the host.
    Npc(&'e EntityDescription),
}

#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    rules: &'a RuleSet,
    allow_list: &'a CustomAllowList,
    config: &'a UnnoteConfig,
}

impl<'a> Classifier<'a> {
    pub fn new(
        rules: &'a RuleSet,
        allow_list: &'a CustomAllowList,
        config: &'a UnnoteConfig,
    ) -> Self {
        Self {
            rules,
            allow_list,
            config,
        }
    }

    pub fn qualifies(&self, candidate: Candidate<'_>) -> bool {
        match candidate {
            Candidate::Item(item) => self.item_qualifies(item),
            Candidate::Object(object) => self.object_qualifies(object),
            Candidate::Npc(npc) => self.npc_qualifies(npc),
        }
    }

    /// Noted items always qualify; a few unnoted items behave like notes.
    pub fn item_qualifies(&self, item: &ItemDescription) -> bool {
        item.is_noted || self.rules.is_banknote_like(&item.name)
    }

    /// Classify a scene object by the identity the player sees.
    ///
    /// The first matching tier decides. Booths and tables are common furniture, so their
    /// name matches only count when the user opted in, even if they have a "Bank" action.
    pub fn object_qualifies(&self, object: &EntityDescription) -> bool {
        let name = object.apparent_name();

        if self.rules.is_unnote_object(name) || self.allow_list.contains(name) {
            return true;
        }
        if name.eq_ignore_ascii_case(GE_BOOTH) {
            return self.config.enable_ge_booths;
        }
        if name.to_lowercase().ends_with(TABLE_SUFFIX) || name.eq_ignore_ascii_case(COUNTER) {
            return self.config.enable_tables;
        }

        object.has_action(BANK_ACTION)
    }

    pub fn npc_qualifies(&self, npc: &EntityDescription) -> bool {
        self.rules.is_unnote_npc(&npc.name)
            || self.allow_list.contains(&npc.name)
            || npc.has_action(BANK_ACTION)
    }
}
