// ============================================================================
// Back-office API - Permission Handlers
// File: crates/backoffice-api/src/handlers/permissions.rs
// ============================================================================
//! Role permission load/save and the stateless toggle preview

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;
use uuid::Uuid;

use backoffice_core::domain::PermissionRow;

use crate::dto::{PermissionStateView, ToggleRequest};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Load handler - GET /api/v1/roles/{role_id}/permissions
///
/// Returns one row per catalog menu; menus without a stored row come back
/// with every flag off.
pub async fn get_permissions(
    State(state): State<AppState>,
    Path(role_id): Path<Uuid>,
) -> Json<ApiResponse<Vec<PermissionRow>>> {
    let matrix = state.permissions.load_permissions(&role_id).await;
    Json(ApiResponse::success(matrix.to_rows()))
}

/// Save handler - POST /api/v1/roles/{role_id}/permissions
pub async fn save_permissions(
    State(state): State<AppState>,
    Path(role_id): Path<Uuid>,
    Json(rows): Json<Vec<PermissionRow>>,
) -> Result<Json<ApiResponse<Vec<PermissionRow>>>, ApiError> {
    info!("Saving {} permission rows for role {}", rows.len(), role_id);
    let matrix = state.permissions.save_permissions(&role_id, &rows).await?;
    Ok(Json(ApiResponse::success(matrix.to_rows())))
}

/// Toggle preview - POST /api/v1/permission-matrix/toggle
pub async fn toggle(
    State(state): State<AppState>,
    Json(request): Json<ToggleRequest>,
) -> Json<ApiResponse<Vec<PermissionStateView>>> {
    let matrix = state
        .permissions
        .preview_toggle(request.states, &request.menu_id, request.flag);
    let states = matrix
        .into_states()
        .into_iter()
        .map(PermissionStateView::from)
        .collect();
    Json(ApiResponse::success(states))
}
