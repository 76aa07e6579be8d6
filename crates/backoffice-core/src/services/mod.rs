//! Domain services (business logic)

pub mod role_editor;
pub mod role_permission_service;

pub use role_editor::RoleEditor;
pub use role_permission_service::RolePermissionService;
