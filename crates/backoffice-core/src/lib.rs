//! # Back-office Core
//! 
//! Domain entities, the role permission matrix, services, and repository
//! traits for the back-office role editor.

pub mod catalog;
pub mod domain;
pub mod matrix;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use matrix::PermissionMatrix;
