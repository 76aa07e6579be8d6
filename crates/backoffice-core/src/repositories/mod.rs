//! Repository traits (ports)

pub mod menu_repository;
pub mod permission_repository;
pub mod role_repository;

pub use menu_repository::MenuRepository;
pub use permission_repository::PermissionRepository;
pub use role_repository::RoleRepository;

#[cfg(test)]
pub use menu_repository::MockMenuRepository;
#[cfg(test)]
pub use permission_repository::MockPermissionRepository;
#[cfg(test)]
pub use role_repository::MockRoleRepository;
