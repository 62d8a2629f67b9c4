//! Shopping Cart State Management
//!
//! Holds the carts API implementation shared by every request handler.

use super::{contract::CartsApi, controller::CartController, store::InMemoryCartStore};
use std::sync::Arc;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state
pub struct AppState {
    /// The carts API the HTTP handlers delegate to
    pub carts: Arc<dyn CartsApi>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl AppState {
    pub fn new(carts: Arc<dyn CartsApi>) -> Self {
        Self { carts }
    }

    /// State backed by a fresh [`InMemoryCartStore`]
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryCartStore::new());
        Self::new(Arc::new(CartController::from_backend(store)))
    }
}
