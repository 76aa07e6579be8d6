// ============================================================================
// Back-office Core - Role Permission Service
// File: crates/backoffice-core/src/services/role_permission_service.rs
// ============================================================================
//! Loading and saving role permissions around the in-memory matrix.

use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::catalog::default_menu_catalog;
use crate::domain::{MenuNode, PermissionRow, PermissionState, PermissionToggle, RoleRecord};
use crate::error::DomainError;
use crate::matrix::PermissionMatrix;
use crate::repositories::{MenuRepository, PermissionRepository, RoleRepository};
use crate::services::role_editor::RoleEditor;

/// Role permission service backing the role dialog and its HTTP surface
pub struct RolePermissionService {
    menu_repo: Arc<dyn MenuRepository>,
    permission_repo: Arc<dyn PermissionRepository>,
    role_repo: Arc<dyn RoleRepository>,
}

impl RolePermissionService {
    pub fn new(
        menu_repo: Arc<dyn MenuRepository>,
        permission_repo: Arc<dyn PermissionRepository>,
        role_repo: Arc<dyn RoleRepository>,
    ) -> Self {
        Self {
            menu_repo,
            permission_repo,
            role_repo,
        }
    }

    /// Stored catalog, or the built-in one when it cannot be loaded.
    pub async fn menu_catalog(&self) -> Vec<MenuNode> {
        match self.menu_repo.list_menus().await {
            Ok(menus) if !menus.is_empty() => menus,
            Ok(_) => {
                warn!("Menu catalog is empty, using default catalog");
                default_menu_catalog()
            }
            Err(e) => {
                warn!("Failed to load menu catalog, using default catalog: {}", e);
                default_menu_catalog()
            }
        }
    }

    /// Stored rows of a role, or none when they cannot be loaded.
    async fn permission_rows(&self, role_id: &Uuid) -> Vec<PermissionRow> {
        self.permission_repo
            .find_by_role(role_id)
            .await
            .unwrap_or_else(|e| {
                warn!("Failed to load permissions for role {}, starting empty: {}", role_id, e);
                Vec::new()
            })
    }

    /// Permission matrix of a role over the current catalog.
    pub async fn load_permissions(&self, role_id: &Uuid) -> PermissionMatrix {
        let menus = self.menu_catalog().await;
        let rows = self.permission_rows(role_id).await;
        PermissionMatrix::from_rows(&menus, &rows)
    }

    /// Opens the role dialog: create mode without an id, edit mode otherwise.
    pub async fn open_editor(&self, role_id: Option<Uuid>) -> Result<RoleEditor, DomainError> {
        let menus = self.menu_catalog().await;

        let Some(role_id) = role_id else {
            return Ok(RoleEditor::create(menus));
        };

        let record = self
            .role_repo
            .find_by_id(&role_id)
            .await?
            .ok_or(DomainError::RoleNotFound(role_id))?;
        let rows = self.permission_rows(&role_id).await;

        info!("Opened role editor for {} ({} stored rows)", role_id, rows.len());
        Ok(RoleEditor::edit(menus, record, &rows))
    }

    /// Writes a permission batch for an existing role. Rows are normalized
    /// against the catalog first: only the primary flags are read, derived
    /// columns are recomputed and every catalog menu gets a row.
    pub async fn save_permissions(
        &self,
        role_id: &Uuid,
        rows: &[PermissionRow],
    ) -> Result<PermissionMatrix, DomainError> {
        if self.role_repo.find_by_id(role_id).await?.is_none() {
            return Err(DomainError::RoleNotFound(*role_id));
        }

        let menus = self.menu_catalog().await;
        let matrix = PermissionMatrix::from_primary_rows(&menus, rows);
        self.write_batch(role_id, &matrix.to_rows()).await?;
        Ok(matrix)
    }

    /// Saves the role record and its permission batch. Validation runs first
    /// and blocks the save. The editor is only read: on any failure it still
    /// holds the user's edits and the save can be retried.
    pub async fn save_editor(&self, editor: &RoleEditor) -> Result<RoleRecord, DomainError> {
        let (record, rows) = editor.prepare_save().map_err(|e| {
            warn!("Role save rejected: {}", e);
            e
        })?;

        let saved = self.role_repo.upsert(&record).await.map_err(|e| {
            error!("Failed to save role {}: {}", record.id, e);
            e
        })?;
        self.write_batch(&saved.id, &rows).await?;

        info!("Saved role {} with {} permission rows", saved.id, rows.len());
        Ok(saved)
    }

    /// Applies one toggle to a caller-held list without touching storage.
    pub fn preview_toggle(
        &self,
        states: Vec<PermissionState>,
        menu_id: &Uuid,
        toggle: PermissionToggle,
    ) -> PermissionMatrix {
        PermissionMatrix::new(states).apply_toggle(menu_id, toggle)
    }

    async fn write_batch(&self, role_id: &Uuid, rows: &[PermissionRow]) -> Result<(), DomainError> {
        self.permission_repo
            .save_batch(role_id, rows)
            .await
            .map_err(|e| {
                error!("Failed to save permissions for role {}: {}", role_id, e);
                e
            })
    }
}
