//! Role repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use crate::domain::RoleRecord;
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<RoleRecord>, DomainError>;
    async fn upsert(&self, role: &RoleRecord) -> Result<RoleRecord, DomainError>;
}
