use crate::ports::ConfigTreeStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ConfigTreeStore> {
    store: S,
}

impl<S: ConfigTreeStore> AppContext<S> {
    /// Create a new application context.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the config tree store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
