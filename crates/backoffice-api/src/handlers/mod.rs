//! HTTP handlers

pub mod health;
pub mod menus;
pub mod permissions;
pub mod roles;
