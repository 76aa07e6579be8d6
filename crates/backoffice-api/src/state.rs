use std::sync::Arc;

use backoffice_core::services::RolePermissionService;

#[derive(Clone)]
pub struct AppState {
    pub permissions: Arc<RolePermissionService>,
}

impl AppState {
    pub fn new(permissions: RolePermissionService) -> Self {
        Self {
            permissions: Arc::new(permissions),
        }
    }
}
