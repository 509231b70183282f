use serde::{Deserialize, Serialize};

/// Resolved identity of a scene object or NPC.
///
/// Produced by an [`EntityResolver`](crate::services::EntityResolver) for the duration of a
/// single classification call. `actions` mirrors the game's fixed-size action slots, so
/// individual slots may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDescription {
    pub name: String,

    #[serde(default)]
    pub actions: Vec<Option<String>>,

    /// Name of the impostor definition the object is currently displayed as, if any.
    #[serde(default)]
    pub impostor_name: Option<String>,
}

impl EntityDescription {
    /// Create a description with no impostor.
    pub fn new<N, I, A>(name: N, actions: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            name: name.into(),
            actions: actions.into_iter().map(|a| Some(a.into())).collect(),
            impostor_name: None,
        }
    }

    /// Set the impostor name.
    pub fn with_impostor(mut self, impostor_name: impl Into<String>) -> Self {
        self.impostor_name = Some(impostor_name.into());
        self
    }

    /// The name the player actually sees: the impostor's if present, else the base name.
    pub fn apparent_name(&self) -> &str {
        self.impostor_name.as_deref().unwrap_or(&self.name)
    }

    /// Check whether any populated action slot equals `action`, ignoring case.
    pub fn has_action(&self, action: &str) -> bool {
        self.actions
            .iter()
            .flatten()
            .any(|a| a.eq_ignore_ascii_case(action))
    }
}

/// Item composition data relevant to unnoting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDescription {
    pub name: String,

    #[serde(default)]
    pub is_noted: bool,
}

impl ItemDescription {
    pub fn new(name: impl Into<String>, is_noted: bool) -> Self {
        Self {
            name: name.into(),
            is_noted,
        }
    }
}
