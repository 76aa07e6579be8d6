//! # Back-office Core - Domain Module
//! 
//! Domain entities for the role permission editor.

pub mod menu_node;
pub mod permission;
pub mod role;
pub mod role_form;
pub mod pending_edits;

// Re-export all entities and enums
pub use menu_node::{MenuLevel, MenuNode};
pub use permission::{PermissionFlags, PermissionRow, PermissionState, PermissionToggle};
pub use role::{RoleRecord, RoleStatus};
pub use role_form::{RoleField, RoleForm, RoleFormAction};
pub use pending_edits::PendingEdits;
