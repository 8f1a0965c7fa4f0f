//! svctrack server library entry.
//!
//! Wires the counter store, config, and HTTP routes into an axum service.
//! Consumed by the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod ops;
pub mod router;
pub mod server;
