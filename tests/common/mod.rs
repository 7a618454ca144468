#![allow(dead_code)]

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    App,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use user_management_service::{
    middleware::RequestMetrics,
    models::User,
    server::{self, AppState},
    store::{StoreError, UserStore},
};

pub const INDEX_HTML: &str = "<!DOCTYPE html><html><body><div id=\"root\"></div></body></html>";

/// In-memory `UserStore`. Email and phone uniqueness is checked under the same lock as the
/// insert, like the unique indexes on the real collection.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
    /// Makes `find_by_email_or_phone` always miss, as if a concurrent request had not
    /// written yet.
    pub skip_lookup: bool,
}

impl MemoryUserStore {
    pub fn racing() -> Self {
        Self {
            skip_lookup: true,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email_or_phone(
        &self,
        email: &str,
        phone: &str,
    ) -> Result<Option<User>, StoreError> {
        if self.skip_lookup {
            return Ok(None);
        }
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.email == email || u.phone == phone)
            .cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.email == user.email || u.phone == user.phone)
        {
            return Err(StoreError::Duplicate);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.snapshot())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

pub struct TestContext {
    pub store: Arc<MemoryUserStore>,
    pub state: AppState,
    pub static_dir: TempDir,
}

impl TestContext {
    /// Context with a static directory holding `index.html` and one asset.
    pub fn new() -> Self {
        Self::with_store(MemoryUserStore::default())
    }

    pub fn with_store(store: MemoryUserStore) -> Self {
        let static_dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(static_dir.path().join("index.html"), INDEX_HTML).expect("write index");
        std::fs::create_dir(static_dir.path().join("assets")).expect("create assets dir");
        std::fs::write(static_dir.path().join("assets/app.js"), "console.log('app');")
            .expect("write asset");

        Self::build(store, static_dir)
    }

    /// Context whose static directory has no `index.html`.
    pub fn without_frontend_build() -> Self {
        let static_dir = tempfile::tempdir().expect("temp dir");
        Self::build(MemoryUserStore::default(), static_dir)
    }

    fn build(store: MemoryUserStore, static_dir: TempDir) -> Self {
        let store = Arc::new(store);
        let state = AppState::new(store.clone(), static_dir.path());
        Self {
            store,
            state,
            static_dir,
        }
    }
}

pub fn create_app(
    state: &AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(server::cors())
        .wrap(RequestMetrics)
        .configure(|cfg| server::configure(cfg, state))
}

pub fn user_json(email: &str, phone: &str) -> serde_json::Value {
    serde_json::json!({
        "name": "A",
        "email": email,
        "phone": phone,
        "password": "p",
        "role": "staff",
        "employeeId": "E1"
    })
}
