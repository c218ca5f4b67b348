//! configstore - a network-accessible key/value configuration store
//!
//! Clients create, read, update, delete, and paginate-search string-keyed
//! configuration entries whose value is an opaque JSON-encoded payload.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
