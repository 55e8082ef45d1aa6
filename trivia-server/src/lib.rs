//! trivia-server: HTTP API for the trivia question bank
//!
//! Exposes category and question CRUD plus stateless quiz play over
//! PostgreSQL. All persistence goes through [`db::repos`]; handlers in
//! [`http::routes`] only shape requests and responses.

pub mod db;
pub mod http;
pub mod models;
pub mod quiz;

pub use http::error::ApiError;
pub use http::server::{build_router, run_server, AppState, ServerConfig};
