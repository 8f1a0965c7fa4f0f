//! Shared application state for the svctrack server.
//!
//! The counter store is built by the caller and injected here, so each test
//! can run against its own isolated store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use svctrack_core::error::Result;
use svctrack_core::{CounterStore, ServiceName};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    store: Arc<CounterStore>,
}

struct AppStateInner {
    cfg: ServerConfig,
    draining: AtomicBool,
}

impl AppState {
    pub fn new(cfg: ServerConfig, store: Arc<CounterStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                draining: AtomicBool::new(false),
            }),
            store,
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &CounterStore {
        &self.store
    }

    /// Validate a raw path segment against the configured name limit.
    pub fn service_name(&self, raw: String) -> Result<ServiceName> {
        ServiceName::parse(raw, self.inner.cfg.limits.max_service_name_bytes)
    }

    /// Mark draining state (shutdown signal received).
    pub fn set_draining(&self) {
        self.inner.draining.store(true, Ordering::Relaxed);
    }

    pub fn is_draining(&self) -> bool {
        self.inner.draining.load(Ordering::Relaxed)
    }
}
