use actix_web::{middleware::Logger, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

use user_management_service::{
    config::Config,
    database::MongoDB,
    middleware::RequestMetrics,
    server::{self, AppState},
    store::{MongoUserStore, UnavailableStore, UserStore},
};

/// Opens the store. Connection problems are logged and never stop the process.
async fn open_store(config: &Config) -> Arc<dyn UserStore> {
    let db = match MongoDB::new(&config.mongodb_url, config.mongodb_database.as_deref()).await {
        Ok(db) => db,
        Err(e) => {
            log::error!("❌ MongoDB connection error: {}", e);
            return Arc::new(UnavailableStore::new(e.to_string()));
        }
    };

    match db.ping().await {
        Ok(()) => {
            log::info!("✅ MongoDB connected successfully: {}", db.database().name());
            if let Err(e) = db.ensure_indexes().await {
                log::warn!("⚠️  Could not create unique indexes: {}", e);
            }
        }
        Err(e) => log::error!("❌ MongoDB connection error: {}", e),
    }

    Arc::new(MongoUserStore::new(db))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    log::info!("🚀 Starting User Management Service...");

    let store = open_store(&config).await;
    let state = AppState::new(store.clone(), config.static_dir.clone());

    log::info!("🌐 Server starting on {}", config.bind_address());
    log::info!("📁 Serving frontend from {}", config.static_dir.display());
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", config.bind_address());

    HttpServer::new(move || {
        App::new()
            .wrap(server::cors())
            .wrap(RequestMetrics)
            .wrap(Logger::default())
            .configure(|cfg| server::configure(cfg, &state))
    })
    .bind(config.bind_address())?
    .run()
    .await?;

    log::info!("🛑 Server stopped");
    store.close().await;

    Ok(())
}
