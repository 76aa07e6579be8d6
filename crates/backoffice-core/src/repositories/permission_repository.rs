//! Role permission store trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use crate::domain::PermissionRow;
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait PermissionRepository: Send + Sync {
    /// Stored rows of a role. Menus the role was never saved against have no row.
    async fn find_by_role(&self, role_id: &Uuid) -> Result<Vec<PermissionRow>, DomainError>;

    /// Upserts the whole batch keyed by `(role_id, menu_id)`. Either every
    /// row is written or none is.
    async fn save_batch(&self, role_id: &Uuid, rows: &[PermissionRow]) -> Result<(), DomainError>;
}
