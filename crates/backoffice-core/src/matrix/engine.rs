// ============================================================================
// Back-office Core - Permission Matrix
// File: crates/backoffice-core/src/matrix/engine.rs
// Description: Ordered permission states and the toggle transition
// ============================================================================

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::domain::{MenuNode, PermissionState, PermissionToggle};

/// Permission states of every catalog menu, in catalog order.
///
/// A matrix is never mutated in place: [`PermissionMatrix::apply_toggle`]
/// returns the next snapshot and callers replace their copy with it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionMatrix {
    states: Vec<PermissionState>,
}

impl PermissionMatrix {
    pub fn new(states: Vec<PermissionState>) -> Self {
        Self { states }
    }

    /// All-false matrix, used for a role that has never been saved.
    pub fn empty_for(menus: &[MenuNode]) -> Self {
        Self {
            states: menus.iter().map(PermissionState::empty).collect(),
        }
    }

    pub fn states(&self) -> &[PermissionState] {
        &self.states
    }

    pub fn into_states(self) -> Vec<PermissionState> {
        self.states
    }

    pub fn get(&self, menu_id: &Uuid) -> Option<&PermissionState> {
        self.states.iter().find(|s| &s.menu_id == menu_id)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Applies one checkbox action and returns the settled matrix.
    ///
    /// The direction (grant or revoke) comes from the toggled node's flags
    /// before the change. On a category node the same rule and value are
    /// applied to every page of that category, each page keeping the flags
    /// the rule does not force. Unknown menu ids leave the matrix unchanged.
    pub fn apply_toggle(&self, menu_id: &Uuid, toggle: PermissionToggle) -> PermissionMatrix {
        let Some(source) = self.get(menu_id) else {
            debug!("Ignoring {} toggle for unknown menu {}", toggle.as_str(), menu_id);
            return self.clone();
        };

        let value = toggle.target_value(&source.flags);
        let cascade = toggle.cascades() && source.is_category();

        let states = self
            .states
            .iter()
            .map(|state| {
                let affected =
                    state.menu_id == source.menu_id || (cascade && state.is_child_of(source));
                if affected {
                    PermissionState {
                        flags: toggle.apply(state.flags, value),
                        ..state.clone()
                    }
                } else {
                    state.clone()
                }
            })
            .collect();

        PermissionMatrix { states }
    }
}
