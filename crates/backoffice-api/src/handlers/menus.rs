//! Menu catalog handler

use axum::{extract::State, Json};

use backoffice_core::domain::MenuNode;

use crate::response::ApiResponse;
use crate::state::AppState;

/// Menu catalog - GET /api/v1/menus
pub async fn list_menus(State(state): State<AppState>) -> Json<ApiResponse<Vec<MenuNode>>> {
    Json(ApiResponse::success(state.permissions.menu_catalog().await))
}
