// ============================================================================
// Back-office Core - Role Entity
// File: crates/backoffice-core/src/domain/role.rs
// Description: Role record edited alongside its permission matrix
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use backoffice_shared::types::new_id;

/// Role status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleStatus {
    #[default]
    Active,
    Inactive,
}

impl RoleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleStatus::Active => "active",
            RoleStatus::Inactive => "inactive",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(RoleStatus::Active),
            "inactive" => Some(RoleStatus::Inactive),
            _ => None,
        }
    }
}

/// Role entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RoleRecord {
    pub id: Uuid,

    #[validate(length(min = 1, max = 100, message = "Role name is required"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description too long"))]
    pub description: Option<String>,

    pub status: RoleStatus,

    #[validate(length(max = 50, message = "Role code too long"))]
    pub code: Option<String>,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl RoleRecord {
    pub fn new(
        name: String,
        description: Option<String>,
        status: RoleStatus,
        code: Option<String>,
    ) -> Result<Self, validator::ValidationErrors> {
        let role = Self {
            id: new_id(),
            name: name.trim().to_string(),
            description: non_blank(description),
            status,
            code: non_blank(code),
            created_at: Utc::now(),
            modified_at: None,
        };

        role.validate()?;
        Ok(role)
    }

    pub fn is_active(&self) -> bool {
        self.status == RoleStatus::Active
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
