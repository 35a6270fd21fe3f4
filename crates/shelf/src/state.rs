//! Shared application state.

use std::sync::Arc;

use shelf_core::clock::SystemClock;
use shelf_core::object::ObjectRepository;
use shelf_core::storage::StoreClient;

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "dynamodb", feature = "inmemory"))]
compile_error!("Cannot enable both 'dynamodb' and 'inmemory' storage features");

#[cfg(not(any(feature = "dynamodb", feature = "inmemory")))]
compile_error!("Must enable exactly one storage feature: 'dynamodb' or 'inmemory'");

/// Shared application state, cloned per request handler.
#[derive(Clone)]
pub struct AppState {
    /// Object repository over the configured store backend.
    pub repository: Arc<ObjectRepository>,
}

impl AppState {
    /// Creates application state over the given store with the system clock.
    pub fn new(store: Arc<dyn StoreClient>) -> Self {
        Self {
            repository: Arc::new(ObjectRepository::new(store, Arc::new(SystemClock))),
        }
    }
}
