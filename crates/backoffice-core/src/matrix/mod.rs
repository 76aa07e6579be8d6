//! Permission matrix: cascade rules, the toggle transition, and the
//! load/save transforms between the matrix and persisted rows.

pub mod engine;
pub mod rules;
pub mod snapshot;

pub use engine::PermissionMatrix;
pub use snapshot::flags_from_row;
