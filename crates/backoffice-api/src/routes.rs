//! Router

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, menus, permissions, roles};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Menu catalog
        .route("/api/v1/menus", get(menus::list_menus))
        // Roles and permissions
        .route("/api/v1/roles", post(roles::save_role))
        .route(
            "/api/v1/roles/{role_id}/permissions",
            get(permissions::get_permissions).post(permissions::save_permissions),
        )
        .route("/api/v1/permission-matrix/toggle", post(permissions::toggle))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use parking_lot::Mutex;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use backoffice_core::domain::{
        MenuNode, PermissionFlags, PermissionRow, RoleRecord, RoleStatus,
    };
    use backoffice_core::repositories::{MenuRepository, PermissionRepository, RoleRepository};
    use backoffice_core::services::RolePermissionService;
    use backoffice_core::{DomainError, PermissionMatrix};

    const CATEGORY: u128 = 1;
    const PAGE: u128 = 2;

    fn catalog() -> Vec<MenuNode> {
        vec![
            MenuNode::category(Uuid::from_u128(CATEGORY), "관리자", Some("shield")),
            MenuNode::page(Uuid::from_u128(PAGE), "관리자", "역할 관리", "/admin/roles"),
        ]
    }

    struct FakeMenus;

    #[async_trait]
    impl MenuRepository for FakeMenus {
        async fn list_menus(&self) -> Result<Vec<MenuNode>, DomainError> {
            Ok(catalog())
        }
    }

    #[derive(Default)]
    struct FakePermissions {
        rows: Mutex<HashMap<Uuid, Vec<PermissionRow>>>,
        unavailable: bool,
    }

    #[async_trait]
    impl PermissionRepository for FakePermissions {
        async fn find_by_role(&self, role_id: &Uuid) -> Result<Vec<PermissionRow>, DomainError> {
            Ok(self.rows.lock().get(role_id).cloned().unwrap_or_default())
        }

        async fn save_batch(&self, role_id: &Uuid, rows: &[PermissionRow]) -> Result<(), DomainError> {
            if self.unavailable {
                return Err(DomainError::DatabaseError("connection reset".into()));
            }
            self.rows.lock().insert(*role_id, rows.to_vec());
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeRoles {
        roles: Mutex<HashMap<Uuid, RoleRecord>>,
    }

    #[async_trait]
    impl RoleRepository for FakeRoles {
        async fn find_by_id(&self, id: &Uuid) -> Result<Option<RoleRecord>, DomainError> {
            Ok(self.roles.lock().get(id).cloned())
        }

        async fn upsert(&self, role: &RoleRecord) -> Result<RoleRecord, DomainError> {
            self.roles.lock().insert(role.id, role.clone());
            Ok(role.clone())
        }
    }

    struct Harness {
        app: Router,
        permissions: Arc<FakePermissions>,
        roles: Arc<FakeRoles>,
    }

    fn harness(permissions: FakePermissions) -> Harness {
        let permissions = Arc::new(permissions);
        let roles = Arc::new(FakeRoles::default());
        let service =
            RolePermissionService::new(Arc::new(FakeMenus), permissions.clone(), roles.clone());
        Harness {
            app: router(AppState::new(service)),
            permissions,
            roles,
        }
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn seeded_role(harness: &Harness) -> RoleRecord {
        let role = RoleRecord::new("Viewer".into(), None, RoleStatus::Active, None).unwrap();
        harness.roles.roles.lock().insert(role.id, role.clone());
        role
    }

    #[tokio::test]
    async fn test_health() {
        let h = harness(FakePermissions::default());
        let response = send(&h.app, "GET", "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_menus() {
        let h = harness(FakePermissions::default());
        let response = send(&h.app, "GET", "/api/v1/menus", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        let menus = body["data"].as_array().unwrap();
        assert_eq!(menus.len(), 2);
        assert_eq!(menus[0]["level"], 0);
        assert_eq!(menus[1]["category"], "관리자");
    }

    #[tokio::test]
    async fn test_load_without_rows_is_all_false() {
        let h = harness(FakePermissions::default());
        let uri = format!("/api/v1/roles/{}/permissions", Uuid::new_v4());
        let body = json_body(send(&h.app, "GET", &uri, None).await).await;

        let rows = body["data"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        for row in rows {
            for key in ["canViewCategory", "canReadData", "canCreateData", "canEditOwn", "canEditOthers", "canRead", "canWrite", "canFull"] {
                assert_eq!(row[key], false, "{}", key);
            }
        }
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let h = harness(FakePermissions::default());
        let role = seeded_role(&h);
        let uri = format!("/api/v1/roles/{}/permissions", role.id);

        let matrix = PermissionMatrix::empty_for(&catalog()).apply_toggle(
            &Uuid::from_u128(CATEGORY),
            backoffice_core::PermissionToggle::ReadData,
        );
        let rows = matrix.to_rows();

        let response = send(&h.app, "POST", &uri, Some(serde_json::to_value(&rows).unwrap())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(h.permissions.rows.lock().get(&role.id).unwrap(), &rows);

        let body = json_body(send(&h.app, "GET", &uri, None).await).await;
        let loaded: Vec<PermissionRow> = serde_json::from_value(body["data"].clone()).unwrap();
        assert_eq!(loaded, rows);
    }

    #[tokio::test]
    async fn test_saved_revoke_is_not_upgraded_to_full() {
        let h = harness(FakePermissions::default());
        let role = seeded_role(&h);
        let uri = format!("/api/v1/roles/{}/permissions", role.id);
        let payload = json!([{
            "menuId": Uuid::from_u128(PAGE),
            "canViewCategory": false,
            "canReadData": false,
            "canCreateData": false,
            "canEditOwn": false,
            "canEditOthers": false,
            "canFull": true
        }]);

        let response = send(&h.app, "POST", &uri, Some(payload)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let stored = h.permissions.rows.lock().get(&role.id).cloned().unwrap();
        assert_eq!(stored.len(), 2);
        for row in stored {
            assert_eq!(row.primary_flags(), PermissionFlags::none());
            assert!(!row.can_read && !row.can_write && !row.can_full);
        }
    }

    #[tokio::test]
    async fn test_save_permissions_for_unknown_role() {
        let h = harness(FakePermissions::default());
        let uri = format!("/api/v1/roles/{}/permissions", Uuid::new_v4());
        let response = send(&h.app, "POST", &uri, Some(json!([]))).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_create_role_with_permissions() {
        let h = harness(FakePermissions::default());
        let payload = json!({
            "name": "Hardware Admin",
            "description": "Hardware asset records",
            "code": "HW",
            "permissions": [
                PermissionRow::from_flags(Uuid::from_u128(PAGE), &PermissionFlags::all())
            ]
        });

        let response = send(&h.app, "POST", "/api/v1/roles", Some(payload)).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = json_body(response).await;
        let role_id: Uuid = serde_json::from_value(body["data"]["role"]["id"].clone()).unwrap();
        assert_eq!(body["data"]["role"]["name"], "Hardware Admin");

        let stored = h.permissions.rows.lock().get(&role_id).cloned().unwrap();
        assert_eq!(stored.len(), 2);
        assert!(!stored[0].can_full);
        assert!(stored[1].can_full);
        assert!(h.roles.roles.lock().contains_key(&role_id));
    }

    #[tokio::test]
    async fn test_create_role_requires_name() {
        let h = harness(FakePermissions::default());
        let response = send(&h.app, "POST", "/api/v1/roles", Some(json!({ "name": "   " }))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(h.roles.roles.lock().is_empty());
        assert!(h.permissions.rows.lock().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_is_reported() {
        let h = harness(FakePermissions {
            unavailable: true,
            ..FakePermissions::default()
        });
        let role = seeded_role(&h);
        let uri = format!("/api/v1/roles/{}/permissions", role.id);

        let response = send(&h.app, "POST", &uri, Some(json!([]))).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "STORE_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_toggle_preview_cascades() {
        let h = harness(FakePermissions::default());
        let states = PermissionMatrix::empty_for(&catalog()).into_states();
        let payload = json!({
            "states": states,
            "menuId": Uuid::from_u128(CATEGORY),
            "flag": "editOthers"
        });

        let response = send(&h.app, "POST", "/api/v1/permission-matrix/toggle", Some(payload)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let states = body["data"].as_array().unwrap();
        assert_eq!(states.len(), 2);
        for state in states {
            assert_eq!(state["full"], true);
            assert_eq!(state["read"], true);
            assert_eq!(state["write"], true);
            assert_eq!(state["flags"]["editOthers"], true);
        }
    }
}
