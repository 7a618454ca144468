pub mod auth;
pub mod frontend;
pub mod health;
pub mod metrics;
pub mod swagger;
pub mod users;
