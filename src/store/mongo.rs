use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::Collection;

use super::{StoreError, UserStore};
use crate::database::MongoDB;
use crate::models::{User, USERS_COLLECTION};

const DUPLICATE_KEY: i32 = 11000;

#[derive(Clone)]
pub struct MongoUserStore {
    db: MongoDB,
}

impl MongoUserStore {
    pub fn new(db: MongoDB) -> Self {
        Self { db }
    }

    fn users(&self) -> Collection<User> {
        self.db.collection::<User>(USERS_COLLECTION)
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY
    )
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_by_email_or_phone(
        &self,
        email: &str,
        phone: &str,
    ) -> Result<Option<User>, StoreError> {
        let filter = doc! {
            "$or": [
                { "email": email },
                { "phone": phone },
            ]
        };

        Ok(self.users().find_one(filter).await?)
    }

    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        match self.users().insert_one(user).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => Err(StoreError::Duplicate),
            Err(e) => Err(StoreError::Database(e)),
        }
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let cursor = self.users().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(self.db.ping().await?)
    }

    async fn close(&self) {
        log::info!("🔌 Closing MongoDB client");
        self.db.shutdown().await;
    }
}
