// ============================================================================
// Back-office Infrastructure - PostgreSQL Role Repository
// File: crates/backoffice-infrastructure/src/database/postgres/role_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use backoffice_core::domain::{RoleRecord, RoleStatus};
use backoffice_core::error::DomainError;
use backoffice_core::repositories::RoleRepository;

pub struct PgRoleRepository {
    pool: PgPool,
}

impl PgRoleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct RoleRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<RoleRow> for RoleRecord {
    fn from(row: RoleRow) -> Self {
        RoleRecord {
            id: row.id,
            name: row.name,
            description: row.description,
            status: RoleStatus::from_str(&row.status).unwrap_or_default(),
            code: row.code,
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

#[async_trait]
impl RoleRepository for PgRoleRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<RoleRecord>, DomainError> {
        let row: Option<RoleRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, status, code, created_at, modified_at
            FROM roles
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding role by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn upsert(&self, role: &RoleRecord) -> Result<RoleRecord, DomainError> {
        info!("Saving role: {}", role.name);

        let row: RoleRow = sqlx::query_as(
            r#"
            INSERT INTO roles (id, name, description, status, code, created_at, modified_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                status = EXCLUDED.status,
                code = EXCLUDED.code,
                modified_at = EXCLUDED.modified_at
            RETURNING id, name, description, status, code, created_at, modified_at
            "#
        )
        .bind(role.id)
        .bind(&role.name)
        .bind(&role.description)
        .bind(role.status.as_str())
        .bind(&role.code)
        .bind(role.created_at)
        .bind(role.modified_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error saving role: {}", e);
            let msg = e.to_string();
            if msg.contains("unique") || msg.contains("duplicate") {
                DomainError::RoleNameAlreadyExists(role.name.clone())
            } else {
                DomainError::DatabaseError(msg)
            }
        })?;

        Ok(row.into())
    }
}
