//! svctrack core: the counter store, service-name validation, wire bodies and
//! the error surface shared by the server and its tests.
//!
//! This crate carries no transport or runtime dependencies; the HTTP layer
//! lives in `svctrack-server`.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `SvcTrackError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod name;
pub mod protocol;
pub mod store;

/// Shared result type.
pub use error::{Result, SvcTrackError};
pub use name::ServiceName;
pub use store::CounterStore;
