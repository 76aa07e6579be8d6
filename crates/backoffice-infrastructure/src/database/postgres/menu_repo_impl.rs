// ============================================================================
// Back-office Infrastructure - PostgreSQL Menu Repository
// File: crates/backoffice-infrastructure/src/database/postgres/menu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{error, warn};
use uuid::Uuid;

use backoffice_core::domain::{MenuLevel, MenuNode};
use backoffice_core::error::DomainError;
use backoffice_core::repositories::MenuRepository;

pub struct PgMenuRepository {
    pool: PgPool,
}

impl PgMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuRow {
    pub id: Uuid,
    pub level: i32,
    pub category: String,
    pub page: String,
    pub url: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

impl MenuRow {
    fn into_node(self) -> Option<MenuNode> {
        let Some(level) = MenuLevel::from_i32(self.level) else {
            warn!("Skipping menu {} with unsupported level {}", self.id, self.level);
            return None;
        };
        Some(MenuNode {
            id: self.id,
            level,
            category: self.category,
            page: self.page,
            url: self.url,
            description: self.description,
            icon: self.icon,
        })
    }
}

#[async_trait]
impl MenuRepository for PgMenuRepository {
    async fn list_menus(&self) -> Result<Vec<MenuNode>, DomainError> {
        let rows: Vec<MenuRow> = sqlx::query_as(
            r#"
            SELECT id, level, category, page, url, description, icon
            FROM menus
            ORDER BY sort_order, category, level, page
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing menus: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().filter_map(MenuRow::into_node).collect())
    }
}
