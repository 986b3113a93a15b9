use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use tower::ServiceExt;

use crate::workforce::directory::{DirectoryError, EmployeeDirectory};
use crate::workforce::domain::EmployeeId;
use crate::workforce::roster::{DirectoryUser, PostalAddress};
use crate::workforce::service::WorkforceService;
use crate::workforce::workforce_router;

#[derive(Default)]
pub(super) struct MemoryDirectory {
    users: Vec<DirectoryUser>,
}

impl MemoryDirectory {
    pub(super) fn with_users(users: Vec<DirectoryUser>) -> Self {
        Self { users }
    }
}

impl EmployeeDirectory for MemoryDirectory {
    fn list(&self) -> Result<Vec<DirectoryUser>, DirectoryError> {
        Ok(self.users.clone())
    }

    fn fetch(&self, id: EmployeeId) -> Result<Option<DirectoryUser>, DirectoryError> {
        Ok(self.users.iter().find(|user| user.id == id).cloned())
    }
}

pub(super) struct OfflineDirectory;

impl EmployeeDirectory for OfflineDirectory {
    fn list(&self) -> Result<Vec<DirectoryUser>, DirectoryError> {
        Err(DirectoryError::Unavailable("upstream offline".to_string()))
    }

    fn fetch(&self, _id: EmployeeId) -> Result<Option<DirectoryUser>, DirectoryError> {
        Err(DirectoryError::Unavailable("upstream offline".to_string()))
    }
}

pub(super) fn user(id: u32, first_name: &str, last_name: &str) -> DirectoryUser {
    DirectoryUser {
        id: EmployeeId::new(id),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}@x.dummyjson.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        age: 30,
        phone: "+1 555-0100".to_string(),
        image: format!("https://dummyjson.com/icon/{}/128", first_name.to_lowercase()),
        address: PostalAddress {
            address: "1 Main Street".to_string(),
            city: "Phoenix".to_string(),
            state: "Arizona".to_string(),
            postal_code: "85001".to_string(),
        },
    }
}

/// Departments and ratings: 1 Marketing/1, 2 Sales/2, 8 Engineering/1,
/// 9 Marketing/1, 10 Sales/2, 160 Engineering/5.
pub(super) fn roster() -> Vec<DirectoryUser> {
    vec![
        user(1, "Emily", "Johnson"),
        user(2, "Michael", "Williams"),
        user(8, "Ava", "Taylor"),
        user(9, "Evelyn", "Hughes"),
        user(10, "James", "Davis"),
        user(160, "Liam", "Garcia"),
    ]
}

pub(super) fn build_service() -> Arc<WorkforceService<MemoryDirectory>> {
    Arc::new(WorkforceService::new(Arc::new(MemoryDirectory::with_users(
        roster(),
    ))))
}

pub(super) async fn get(router: axum::Router, uri: &str) -> Response {
    router
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub(super) async fn json_body(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub(super) fn router() -> axum::Router {
    workforce_router(build_service())
}
