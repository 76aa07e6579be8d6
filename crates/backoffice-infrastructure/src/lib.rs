//! # Back-office Infrastructure
//! 
//! PostgreSQL adapters for the menu catalog, roles, and role permissions.

pub mod database;

pub use database::{
    create_pool, run_migrations, PgMenuRepository, PgPermissionRepository, PgRoleRepository,
};
