//! Application state shared across handlers

use std::sync::Arc;

use crate::db::LocationStore;

/// Shared application state, built once at startup and cloned per request
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn LocationStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn LocationStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn LocationStore {
        self.store.as_ref()
    }
}
