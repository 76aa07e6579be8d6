// ============================================================================
// Back-office Core - Permission Flags
// File: crates/backoffice-core/src/domain/permission.rs
// Description: Per-menu permission flags and their persisted row shape
// ============================================================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::menu_node::{MenuLevel, MenuNode};

/// The five granular permission flags of one menu entry.
///
/// `read`, `write` and `full` are always derived from these five and are
/// never stored on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionFlags {
    pub view_category: bool,
    pub read_data: bool,
    pub create_data: bool,
    pub edit_own: bool,
    pub edit_others: bool,
}

impl PermissionFlags {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self::uniform(true)
    }

    pub fn uniform(value: bool) -> Self {
        Self {
            view_category: value,
            read_data: value,
            create_data: value,
            edit_own: value,
            edit_others: value,
        }
    }

    pub fn read(&self) -> bool {
        self.view_category || self.read_data
    }

    pub fn write(&self) -> bool {
        self.create_data || self.edit_own
    }

    pub fn full(&self) -> bool {
        self.view_category && self.read_data && self.create_data && self.edit_own && self.edit_others
    }

    pub fn has_any(&self) -> bool {
        self.read() || self.write() || self.edit_others
    }
}

/// A single checkbox action in the permission matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PermissionToggle {
    Full,
    ViewCategory,
    ReadData,
    /// The paired create/edit-own checkbox.
    CombinedCreateEditOwn,
    EditOthers,
    /// Single-flag toggle, local to the node.
    CreateData,
    /// Single-flag toggle, local to the node.
    EditOwn,
}

impl PermissionToggle {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionToggle::Full => "full",
            PermissionToggle::ViewCategory => "viewCategory",
            PermissionToggle::ReadData => "readData",
            PermissionToggle::CombinedCreateEditOwn => "combinedCreateEditOwn",
            PermissionToggle::EditOthers => "editOthers",
            PermissionToggle::CreateData => "createData",
            PermissionToggle::EditOwn => "editOwn",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "full" => Some(PermissionToggle::Full),
            "viewCategory" => Some(PermissionToggle::ViewCategory),
            "readData" => Some(PermissionToggle::ReadData),
            "combinedCreateEditOwn" => Some(PermissionToggle::CombinedCreateEditOwn),
            "editOthers" => Some(PermissionToggle::EditOthers),
            "createData" => Some(PermissionToggle::CreateData),
            "editOwn" => Some(PermissionToggle::EditOwn),
            _ => None,
        }
    }
}

/// Permission flags of one menu node inside an open editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionState {
    pub menu_id: Uuid,
    pub level: MenuLevel,
    pub category: String,
    pub flags: PermissionFlags,
}

impl PermissionState {
    pub fn new(menu: &MenuNode, flags: PermissionFlags) -> Self {
        Self {
            menu_id: menu.id,
            level: menu.level,
            category: menu.category.clone(),
            flags,
        }
    }

    pub fn empty(menu: &MenuNode) -> Self {
        Self::new(menu, PermissionFlags::none())
    }

    pub fn is_category(&self) -> bool {
        self.level == MenuLevel::Category
    }

    /// True when this entry is a page under the category `parent`.
    pub fn is_child_of(&self, parent: &PermissionState) -> bool {
        parent.is_category() && self.level == MenuLevel::Page && self.category == parent.category
    }
}

/// Persisted permission row for one `(role, menu)` pair.
///
/// Legacy rows may carry only `can_read`, `can_write` and `can_full`, so every
/// flag defaults to `false` when missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionRow {
    pub menu_id: Uuid,
    #[serde(default)]
    pub can_view_category: bool,
    #[serde(default)]
    pub can_read_data: bool,
    #[serde(default)]
    pub can_create_data: bool,
    #[serde(default)]
    pub can_edit_own: bool,
    #[serde(default)]
    pub can_edit_others: bool,
    #[serde(default)]
    pub can_read: bool,
    #[serde(default)]
    pub can_write: bool,
    #[serde(default)]
    pub can_full: bool,
}

impl PermissionRow {
    pub fn from_flags(menu_id: Uuid, flags: &PermissionFlags) -> Self {
        Self {
            menu_id,
            can_view_category: flags.view_category,
            can_read_data: flags.read_data,
            can_create_data: flags.create_data,
            can_edit_own: flags.edit_own,
            can_edit_others: flags.edit_others,
            can_read: flags.read(),
            can_write: flags.write(),
            can_full: flags.full(),
        }
    }

    pub fn primary_flags(&self) -> PermissionFlags {
        PermissionFlags {
            view_category: self.can_view_category,
            read_data: self.can_read_data,
            create_data: self.can_create_data,
            edit_own: self.can_edit_own,
            edit_others: self.can_edit_others,
        }
    }
}

impl From<&PermissionState> for PermissionRow {
    fn from(state: &PermissionState) -> Self {
        PermissionRow::from_flags(state.menu_id, &state.flags)
    }
}
