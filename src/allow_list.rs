//! User-configured allow list of extra object and NPC names.
//!
//! The list is parsed from a single configuration string whose entries are separated by
//! commas or newlines. Entries are stored lower-cased and matched against lower-cased
//! candidate names, so matching ignores case.
//!
//! The set is only ever replaced wholesale: [`CustomAllowList::rebuild`] parses the new
//! text completely before swapping it in, so readers never see a half-built list.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\n]").expect("Invalid separator regex"));

/// Parse configuration text into a lower-cased name set.
///
/// Total: blank entries, stray separators and surrounding whitespace are dropped.
pub fn parse_names(text: &str) -> HashSet<String> {
    SEPARATOR
        .split(text)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomAllowList {
    names: HashSet<String>,
}

impl CustomAllowList {
    /// Build a list from configuration text.
    pub fn from_text(text: &str) -> Self {
        let mut list = Self::default();
        list.rebuild(text);
        list
    }

    /// Replace the whole list with the names parsed from `text`.
    pub fn rebuild(&mut self, text: &str) -> &HashSet<String> {
        let names = parse_names(text);
        self.names = names;

        tracing::debug!("Custom unnote list rebuilt with {} entries", self.names.len());
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }

    pub fn names(&self) -> &HashSet<String> {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
