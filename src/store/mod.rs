//! Persistence seam for user records.
//!
//! Handlers receive a `UserStore` as shared app data, so the MongoDB-backed store can be
//! swapped for another implementation without touching the HTTP layer.

pub mod mongo;
pub mod unavailable;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::User;

pub use mongo::MongoUserStore;
pub use unavailable::UnavailableStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with the same email or phone already exists.
    #[error("duplicate user")]
    Duplicate,
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Any record whose email or phone matches.
    async fn find_by_email_or_phone(
        &self,
        email: &str,
        phone: &str,
    ) -> Result<Option<User>, StoreError>;

    /// Persists a new record. Fails with `StoreError::Duplicate` when the store itself
    /// detects an email or phone collision.
    async fn insert(&self, user: &User) -> Result<(), StoreError>;

    async fn list(&self) -> Result<Vec<User>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;

    /// Releases the underlying connection. Called once on shutdown.
    async fn close(&self) {}
}
