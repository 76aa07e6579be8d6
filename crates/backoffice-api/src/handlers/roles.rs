//! Role save handler

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use backoffice_core::domain::{RoleField, RoleFormAction};

use crate::dto::{SaveRoleRequest, SaveRoleResponse};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Save role - POST /api/v1/roles
///
/// Creates the role when `id` is absent, otherwise updates it. The role
/// record and its permission batch go through the same editor as the dialog,
/// so required-field validation blocks the save before anything is written.
pub async fn save_role(
    State(state): State<AppState>,
    Json(payload): Json<SaveRoleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SaveRoleResponse>>), ApiError> {
    let creating = payload.id.is_none();
    let mut editor = state.permissions.open_editor(payload.id).await?;

    editor.dispatch(RoleFormAction::SetField(RoleField::Name, payload.name));
    editor.dispatch(RoleFormAction::SetField(
        RoleField::Description,
        payload.description.unwrap_or_default(),
    ));
    editor.dispatch(RoleFormAction::SetField(
        RoleField::Code,
        payload.code.unwrap_or_default(),
    ));
    editor.dispatch(RoleFormAction::SetStatus(payload.status));
    editor.replace_permissions(&payload.permissions);

    let role = state.permissions.save_editor(&editor).await?;
    info!("Role {} saved via API", role.id);

    let status = if creating { StatusCode::CREATED } else { StatusCode::OK };
    Ok((
        status,
        Json(ApiResponse::success(SaveRoleResponse {
            role,
            permissions: editor.permission_rows(),
        })),
    ))
}
