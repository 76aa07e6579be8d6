//! Request and response payloads

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use backoffice_core::domain::{PermissionRow, PermissionState, PermissionToggle, RoleRecord, RoleStatus};

/// Permission state with the derived flags spelled out for the client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionStateView {
    #[serde(flatten)]
    pub state: PermissionState,
    pub read: bool,
    pub write: bool,
    pub full: bool,
}

impl From<PermissionState> for PermissionStateView {
    fn from(state: PermissionState) -> Self {
        Self {
            read: state.flags.read(),
            write: state.flags.write(),
            full: state.flags.full(),
            state,
        }
    }
}

/// Stateless toggle over a client-held matrix.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRequest {
    pub states: Vec<PermissionState>,
    pub menu_id: Uuid,
    pub flag: PermissionToggle,
}

/// Role record together with its full permission batch.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRoleRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: RoleStatus,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub permissions: Vec<PermissionRow>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRoleResponse {
    pub role: RoleRecord,
    pub permissions: Vec<PermissionRow>,
}
