//! Service context - dependency container for services
//!
//! Holds the storage collaborator shared by every request. It carries no
//! mutable state of its own; each operation opens its own transaction.

use std::sync::Arc;

use users_core::traits::UserStore;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_store: Arc<dyn UserStore>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self { user_store }
    }

    /// Get the user store
    pub fn user_store(&self) -> &dyn UserStore {
        self.user_store.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("user_store", &"dyn UserStore")
            .finish()
    }
}
