// ============================================================================
// Back-office Core - Role Editor Session
// File: crates/backoffice-core/src/services/role_editor.rs
// ============================================================================
//! State of one open role dialog: the form, the permission matrix and the
//! pending text edits. Everything lives in memory until the service saves it.

use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    MenuNode, PendingEdits, PermissionRow, PermissionToggle, RoleForm, RoleFormAction, RoleRecord,
};
use crate::error::DomainError;
use crate::matrix::PermissionMatrix;

#[derive(Debug, Clone)]
pub struct RoleEditor {
    menus: Vec<MenuNode>,
    form: RoleForm,
    matrix: PermissionMatrix,
    pending: PendingEdits,
}

impl RoleEditor {
    /// Create mode: empty form, every permission off.
    pub fn create(menus: Vec<MenuNode>) -> Self {
        let matrix = PermissionMatrix::empty_for(&menus);
        Self {
            menus,
            form: RoleForm::new().reduce(RoleFormAction::InitNew),
            matrix,
            pending: PendingEdits::new(),
        }
    }

    /// Edit mode, seeded from the stored role and its permission rows.
    pub fn edit(menus: Vec<MenuNode>, record: RoleRecord, rows: &[PermissionRow]) -> Self {
        let matrix = PermissionMatrix::from_rows(&menus, rows);
        Self {
            menus,
            form: RoleForm::new().reduce(RoleFormAction::LoadRecord(record)),
            matrix,
            pending: PendingEdits::new(),
        }
    }

    pub fn menus(&self) -> &[MenuNode] {
        &self.menus
    }

    pub fn form(&self) -> &RoleForm {
        &self.form
    }

    pub fn matrix(&self) -> &PermissionMatrix {
        &self.matrix
    }

    /// Handle for inputs that hold uncommitted text. Clones share state with
    /// the editor.
    pub fn pending_edits(&self) -> PendingEdits {
        self.pending.clone()
    }

    pub fn role_id(&self) -> Option<Uuid> {
        self.form.role_id()
    }

    /// Rows a save would write, one per catalog menu.
    pub fn permission_rows(&self) -> Vec<PermissionRow> {
        self.matrix.to_rows()
    }

    pub fn toggle(&mut self, menu_id: &Uuid, toggle: PermissionToggle) {
        self.matrix = self.matrix.apply_toggle(menu_id, toggle);
    }

    /// Replaces every permission with client-supplied rows. Only their
    /// primary flags count.
    pub fn replace_permissions(&mut self, rows: &[PermissionRow]) {
        self.matrix = PermissionMatrix::from_primary_rows(&self.menus, rows);
    }

    pub fn dispatch(&mut self, action: RoleFormAction) {
        if matches!(action, RoleFormAction::Reset | RoleFormAction::InitNew) {
            self.pending.clear();
        }
        self.form = std::mem::take(&mut self.form).reduce(action);
    }

    /// Form with pending edits applied, without touching the editor.
    pub fn effective_form(&self) -> RoleForm {
        self.pending
            .snapshot()
            .into_iter()
            .fold(self.form.clone(), |form, (field, value)| {
                form.reduce(RoleFormAction::SetField(field, value))
            })
    }

    /// Validates and builds what a save writes. Nothing is changed, so a
    /// failed save leaves the editor as it was.
    pub fn prepare_save(&self) -> Result<(RoleRecord, Vec<PermissionRow>), DomainError> {
        let record = self.effective_form().to_record()?;
        Ok((record, self.permission_rows()))
    }

    /// Called after a successful save: the saved record becomes the form's
    /// baseline and pending edits are dropped.
    pub fn mark_saved(&mut self, record: RoleRecord) {
        debug!("Role editor committed role {}", record.id);
        self.pending.clear();
        self.form = RoleForm::new().reduce(RoleFormAction::LoadRecord(record));
    }
}
