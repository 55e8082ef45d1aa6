//! HTTP layer: error mapping, extractors, router, and route handlers

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;
