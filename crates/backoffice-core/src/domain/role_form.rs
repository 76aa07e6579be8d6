// ============================================================================
// Back-office Core - Role Form State
// File: crates/backoffice-core/src/domain/role_form.rs
// Description: Reducer-driven form state for the role dialog
// ============================================================================

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use backoffice_shared::types::new_id;

use super::role::{non_blank, RoleRecord, RoleStatus};

/// Editable text fields of the role form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleField {
    Name,
    Description,
    Code,
}

/// Form actions
#[derive(Debug, Clone, PartialEq)]
pub enum RoleFormAction {
    SetField(RoleField, String),
    SetStatus(RoleStatus),
    /// Back to the loaded record, or to an empty form in create mode.
    Reset,
    LoadRecord(RoleRecord),
    /// Empty create-mode form with a fresh id for the role it will create.
    InitNew,
}

/// Immutable snapshot of the role form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoleForm {
    original: Option<RoleRecord>,
    /// Id reserved for the role in create mode, reused by every save attempt.
    draft_id: Option<Uuid>,
    pub name: String,
    pub description: String,
    pub code: String,
    pub status: RoleStatus,
}

impl RoleForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_record(record: RoleRecord) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone().unwrap_or_default(),
            code: record.code.clone().unwrap_or_default(),
            status: record.status,
            draft_id: None,
            original: Some(record),
        }
    }

    fn blank(draft_id: Option<Uuid>) -> Self {
        Self {
            draft_id,
            ..Self::default()
        }
    }

    pub fn role_id(&self) -> Option<Uuid> {
        self.original.as_ref().map(|r| r.id)
    }

    pub fn is_new(&self) -> bool {
        self.original.is_none()
    }

    pub fn field(&self, field: RoleField) -> &str {
        match field {
            RoleField::Name => &self.name,
            RoleField::Description => &self.description,
            RoleField::Code => &self.code,
        }
    }

    pub fn is_dirty(&self) -> bool {
        match &self.original {
            Some(record) => *self != Self::from_record(record.clone()),
            None => *self != Self::blank(self.draft_id),
        }
    }

    pub fn reduce(self, action: RoleFormAction) -> Self {
        match action {
            RoleFormAction::SetField(field, value) => {
                let mut next = self;
                match field {
                    RoleField::Name => next.name = value,
                    RoleField::Description => next.description = value,
                    RoleField::Code => next.code = value,
                }
                next
            }
            RoleFormAction::SetStatus(status) => Self { status, ..self },
            RoleFormAction::Reset => match self.original {
                Some(record) => Self::from_record(record),
                None => Self::blank(self.draft_id),
            },
            RoleFormAction::LoadRecord(record) => Self::from_record(record),
            RoleFormAction::InitNew => Self::blank(Some(new_id())),
        }
    }

    /// Builds the record to persist. Fails when required fields are missing.
    pub fn to_record(&self) -> Result<RoleRecord, validator::ValidationErrors> {
        let description = non_blank(Some(self.description.clone()));
        let code = non_blank(Some(self.code.clone()));

        match &self.original {
            Some(original) => {
                let record = RoleRecord {
                    id: original.id,
                    name: self.name.trim().to_string(),
                    description,
                    status: self.status,
                    code,
                    created_at: original.created_at,
                    modified_at: Some(Utc::now()),
                };
                record.validate()?;
                Ok(record)
            }
            None => {
                let mut record =
                    RoleRecord::new(self.name.clone(), description, self.status, code)?;
                if let Some(id) = self.draft_id {
                    record.id = id;
                }
                Ok(record)
            }
        }
    }
}
