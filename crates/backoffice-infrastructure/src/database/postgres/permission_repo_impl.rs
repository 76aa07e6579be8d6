// ============================================================================
// Back-office Infrastructure - PostgreSQL Permission Repository
// File: crates/backoffice-infrastructure/src/database/postgres/permission_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{debug, error, info};
use uuid::Uuid;

use backoffice_core::domain::PermissionRow;
use backoffice_core::error::DomainError;
use backoffice_core::repositories::PermissionRepository;

pub struct PgPermissionRepository {
    pool: PgPool,
}

impl PgPermissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct RolePermissionRow {
    pub menu_id: Uuid,
    pub can_view_category: bool,
    pub can_read_data: bool,
    pub can_create_data: bool,
    pub can_edit_own: bool,
    pub can_edit_others: bool,
    pub can_read: bool,
    pub can_write: bool,
    pub can_full: bool,
}

impl From<RolePermissionRow> for PermissionRow {
    fn from(row: RolePermissionRow) -> Self {
        PermissionRow {
            menu_id: row.menu_id,
            can_view_category: row.can_view_category,
            can_read_data: row.can_read_data,
            can_create_data: row.can_create_data,
            can_edit_own: row.can_edit_own,
            can_edit_others: row.can_edit_others,
            can_read: row.can_read,
            can_write: row.can_write,
            can_full: row.can_full,
        }
    }
}

fn database_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| {
        error!("Database error {}: {}", context, e);
        DomainError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl PermissionRepository for PgPermissionRepository {
    async fn find_by_role(&self, role_id: &Uuid) -> Result<Vec<PermissionRow>, DomainError> {
        let rows: Vec<RolePermissionRow> = sqlx::query_as(
            r#"
            SELECT
                menu_id,
                can_view_category, can_read_data, can_create_data,
                can_edit_own, can_edit_others,
                can_read, can_write, can_full
            FROM role_permissions
            WHERE role_id = $1
            "#
        )
        .bind(role_id)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("loading role permissions"))?;

        debug!("Loaded {} permission rows for role {}", rows.len(), role_id);
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn save_batch(&self, role_id: &Uuid, rows: &[PermissionRow]) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(database_error("starting permission batch"))?;

        for row in rows {
            sqlx::query(
                r#"
                INSERT INTO role_permissions (
                    role_id, menu_id,
                    can_view_category, can_read_data, can_create_data,
                    can_edit_own, can_edit_others,
                    can_read, can_write, can_full, modified_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NOW())
                ON CONFLICT (role_id, menu_id) DO UPDATE SET
                    can_view_category = EXCLUDED.can_view_category,
                    can_read_data = EXCLUDED.can_read_data,
                    can_create_data = EXCLUDED.can_create_data,
                    can_edit_own = EXCLUDED.can_edit_own,
                    can_edit_others = EXCLUDED.can_edit_others,
                    can_read = EXCLUDED.can_read,
                    can_write = EXCLUDED.can_write,
                    can_full = EXCLUDED.can_full,
                    modified_at = EXCLUDED.modified_at
                "#
            )
            .bind(role_id)
            .bind(row.menu_id)
            .bind(row.can_view_category)
            .bind(row.can_read_data)
            .bind(row.can_create_data)
            .bind(row.can_edit_own)
            .bind(row.can_edit_others)
            .bind(row.can_read)
            .bind(row.can_write)
            .bind(row.can_full)
            .execute(&mut *tx)
            .await
            .map_err(database_error("writing permission row"))?;
        }

        tx.commit()
            .await
            .map_err(database_error("committing permission batch"))?;

        info!("Saved {} permission rows for role {}", rows.len(), role_id);
        Ok(())
    }
}
