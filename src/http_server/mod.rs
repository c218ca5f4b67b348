//! # HTTP Server Module
//!
//! Axum-based API layer for the configuration store. Handlers translate
//! requests into store calls and map typed failures to transport-level
//! responses; no store semantics live here.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/v1/api/configuration/*` - Configuration item CRUD and search

pub mod config;
pub mod configuration_routes;
pub mod errors;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
