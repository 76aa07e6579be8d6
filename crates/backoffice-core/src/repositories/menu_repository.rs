//! Menu catalog repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::MenuNode;
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Every menu node in display order.
    async fn list_menus(&self) -> Result<Vec<MenuNode>, DomainError>;
}
