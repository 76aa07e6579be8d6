//! # Back-office API
//! 
//! HTTP handlers, DTOs, and the router for the role permission editor.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
