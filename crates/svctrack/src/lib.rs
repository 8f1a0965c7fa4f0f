//! Top-level facade crate for svctrack.
//!
//! Re-exports the core types and the server library so users can depend on a single crate.

pub mod core {
    pub use svctrack_core::*;
}

pub mod server {
    pub use svctrack_server::*;
}
