use async_trait::async_trait;

use super::{StoreError, UserStore};
use crate::models::User;

/// Stands in when no database client could be built at startup.
///
/// The process keeps serving the frontend and health endpoints; every store operation
/// fails with the reason captured at startup.
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> StoreError {
        StoreError::Unavailable(self.reason.clone())
    }
}

#[async_trait]
impl UserStore for UnavailableStore {
    async fn find_by_email_or_phone(&self, _: &str, _: &str) -> Result<Option<User>, StoreError> {
        Err(self.error())
    }

    async fn insert(&self, _: &User) -> Result<(), StoreError> {
        Err(self.error())
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        Err(self.error())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(self.error())
    }
}
