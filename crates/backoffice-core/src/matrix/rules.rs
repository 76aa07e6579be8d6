//! Per-flag cascade rules.
//!
//! A toggle is resolved in two steps: the new value is decided once from the
//! toggled node's flags before the change, then the same value is written
//! into every affected node together with the flags it forces.

use crate::domain::{PermissionFlags, PermissionToggle};

impl PermissionToggle {
    /// Whether a toggle on a category node is mirrored onto its pages.
    pub fn cascades(&self) -> bool {
        !matches!(self, PermissionToggle::CreateData | PermissionToggle::EditOwn)
    }

    /// New value of the toggled flag, given the flags before the toggle.
    pub fn target_value(&self, before: &PermissionFlags) -> bool {
        match self {
            PermissionToggle::Full => !before.full(),
            PermissionToggle::ViewCategory => !before.view_category,
            PermissionToggle::ReadData => !before.read_data,
            PermissionToggle::CombinedCreateEditOwn => !(before.create_data && before.edit_own),
            PermissionToggle::EditOthers => !before.edit_others,
            PermissionToggle::CreateData => !before.create_data,
            PermissionToggle::EditOwn => !before.edit_own,
        }
    }

    /// Writes `value` into `flags` and forces the dependent flags. Flags the
    /// rule does not force keep their current value.
    pub fn apply(&self, flags: PermissionFlags, value: bool) -> PermissionFlags {
        let mut next = flags;
        match self {
            PermissionToggle::Full => {
                next = PermissionFlags::uniform(value);
            }
            PermissionToggle::ViewCategory => {
                next.view_category = value;
                if !value {
                    next.read_data = false;
                    next.create_data = false;
                    next.edit_own = false;
                    next.edit_others = false;
                }
            }
            PermissionToggle::ReadData => {
                next.read_data = value;
                if value {
                    next.view_category = true;
                } else {
                    next.create_data = false;
                    next.edit_own = false;
                    next.edit_others = false;
                }
            }
            PermissionToggle::CombinedCreateEditOwn => {
                next.create_data = value;
                next.edit_own = value;
                if value {
                    next.read_data = true;
                    next.view_category = true;
                } else {
                    next.edit_others = false;
                }
            }
            PermissionToggle::EditOthers => {
                next.edit_others = value;
                if value {
                    next.create_data = true;
                    next.edit_own = true;
                    next.read_data = true;
                    next.view_category = true;
                }
            }
            PermissionToggle::CreateData => {
                next.create_data = value;
            }
            PermissionToggle::EditOwn => {
                next.edit_own = value;
            }
        }
        next
    }
}
