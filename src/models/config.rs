use serde::{Deserialize, Deserializer, Serialize};

/// Configuration group the host stores plugin settings under.
pub const CONFIG_GROUP: &str = "easyUnnote";

/// Host key for [`UnnoteConfig::enable_ge_booths`].
pub const KEY_ENABLE_GE_BOOTHS: &str = "enableGEBooths";

/// Host key for [`UnnoteConfig::enable_tables`].
pub const KEY_ENABLE_TABLES: &str = "enableTables";

/// Host key for [`UnnoteConfig::custom_unnote_list`]. A change to this key triggers an
/// allow list rebuild.
pub const KEY_CUSTOM_UNNOTE_LIST: &str = "customUnnoteList";

/// User-tunable plugin settings.
///
/// The host owns persistence and change notification; the core only reads a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnnoteConfig {
    /// Allow unnoting at Grand Exchange booths.
    #[serde(default)]
    pub enable_ge_booths: bool,

    /// Allow placing banknotes on tables and counters.
    #[serde(default)]
    pub enable_tables: bool,

    /// Extra object and NPC names, separated by commas or newlines.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub custom_unnote_list: String,
}

/// A cleared value (`custom_unnote_list:` with nothing after it) is an empty list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
