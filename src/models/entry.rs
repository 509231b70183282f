use serde::{Deserialize, Serialize};

/// Widget id of the player's inventory (interface group 149, child 0).
pub const INVENTORY_WIDGET_ID: i32 = 149 << 16;

/// Kind of a candidate menu entry.
///
/// Only the kinds the filter treats specially are named; everything else the host offers
/// maps to [`EntryKind::Other`] and always passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// "Use item -> ground item"
    WidgetTargetOnGroundItem,
    /// "Use item -> player"
    WidgetTargetOnPlayer,
    /// "Use item -> scene object"
    WidgetTargetOnGameObject,
    /// "Use item -> NPC"
    WidgetTargetOnNpc,
    ExamineNpc,
    ExamineObject,
    ExamineGroundItem,
    #[serde(other)]
    Other,
}

/// Scene coordinate plus object id carried by a game-object entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SceneCoordinate {
    pub x: i32,
    pub y: i32,
    pub id: i32,
}

/// Opaque handle to an NPC the host resolved for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NpcHandle(pub u32);

/// One potential interaction offered to the player before filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateEntry {
    pub kind: EntryKind,

    #[serde(default)]
    pub option: String,

    #[serde(default)]
    pub target: String,

    #[serde(default)]
    pub coordinate: Option<SceneCoordinate>,

    #[serde(default)]
    pub npc: Option<NpcHandle>,
}

impl CandidateEntry {
    /// Create an entry with no coordinate and no NPC handle.
    pub fn new(kind: EntryKind, option: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            kind,
            option: option.into(),
            target: target.into(),
            coordinate: None,
            npc: None,
        }
    }

    pub fn at(mut self, x: i32, y: i32, id: i32) -> Self {
        self.coordinate = Some(SceneCoordinate { x, y, id });
        self
    }

    pub fn on_npc(mut self, handle: NpcHandle) -> Self {
        self.npc = Some(handle);
        self
    }
}

/// Game state reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    #[default]
    LoginScreen,
    Loading,
    LoggedIn,
    Hopping,
}

/// The widget the player currently has selected for a "Use" action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedWidget {
    pub widget_id: i32,
    pub item_id: i32,

    /// Whether the host reports the widget as selected (the cursor is in "Use" mode).
    #[serde(default)]
    pub is_selected: bool,
}

impl SelectedWidget {
    /// An inventory item selected for use.
    pub fn inventory_item(item_id: i32) -> Self {
        Self {
            widget_id: INVENTORY_WIDGET_ID,
            item_id,
            is_selected: true,
        }
    }
}

/// Host state sampled at the start of a tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickContext {
    #[serde(default)]
    pub game_state: GameState,

    #[serde(default)]
    pub menu_open: bool,

    #[serde(default)]
    pub selected_widget: Option<SelectedWidget>,
}

impl TickContext {
    /// A logged-in, menu-closed tick with an inventory item selected.
    pub fn using_inventory_item(item_id: i32) -> Self {
        Self {
            game_state: GameState::LoggedIn,
            menu_open: false,
            selected_widget: Some(SelectedWidget::inventory_item(item_id)),
        }
    }

    /// The selected inventory item id, if this tick should be filtered at all.
    ///
    /// An open menu is not rebuilt by the client, so filtering it again would keep
    /// dropping entries from an already filtered list.
    pub fn selected_inventory_item(&self) -> Option<i32> {
        if self.game_state != GameState::LoggedIn || self.menu_open {
            return None;
        }

        let widget = self.selected_widget?;
        if widget.widget_id != INVENTORY_WIDGET_ID {
            return None;
        }
        if widget.item_id <= 0 || !widget.is_selected {
            return None;
        }

        Some(widget.item_id)
    }
}
