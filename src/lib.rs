//! User management backend: registers and lists users stored in MongoDB and serves the
//! dashboard's single-page frontend.

pub mod api;
pub mod config;
pub mod database;
pub mod middleware;
pub mod models;
pub mod server;
pub mod services;
pub mod store;
pub mod ui;
pub mod utils;
