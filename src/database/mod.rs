use mongodb::bson::{doc, Document};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};
use std::time::Duration;

use crate::models::USERS_COLLECTION;

pub const DEFAULT_DATABASE: &str = "user_management";

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    /// Builds the client. The driver connects lazily, so this only fails on a bad
    /// connection string; call `ping` to find out whether the server is reachable.
    pub async fn new(uri: &str, database: Option<&str>) -> mongodb::error::Result<Self> {
        let mut client_options = ClientOptions::parse(uri).await?;

        client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(2);
        client_options.max_idle_time = Some(Duration::from_secs(300));
        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        // Explicit name, then the one in the URI path, then the default
        let db = match database {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
        };

        Ok(Self { client, db })
    }

    pub async fn ping(&self) -> mongodb::error::Result<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Unique indexes on users(email) and users(phone).
    ///
    /// These make the store reject a duplicate even when two add-user requests pass the
    /// uniqueness pre-check at the same time.
    pub async fn ensure_indexes(&self) -> mongodb::error::Result<()> {
        log::info!("🔧 Creating database indexes...");

        let users = self.collection::<Document>(USERS_COLLECTION);

        for field in ["email", "phone"] {
            let index = IndexModel::builder()
                .keys(doc! { field: 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build();

            users.create_index(index).await?;
            log::info!("   ✅ Index ready: {}({}) unique", USERS_COLLECTION, field);
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub async fn shutdown(&self) {
        self.client.clone().shutdown().await;
    }
}
