use std::sync::Arc;
use arc_swap::ArcSwapOption;

use crate::core::state::registry::registry_store::RegistryStore;

/// Lock-free holder for an optional registry store handle.
///
/// `DiscoveryClient` implementations can embed one of these and forward
/// `registry_store` / `set_registry_store` to it.
#[derive(Debug, Default)]
pub struct RegistryStoreSlot {
    store: ArcSwapOption<RegistryStore>,
}

impl RegistryStoreSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Arc<RegistryStore>> {
        self.store.load_full()
    }

    pub fn set(&self, store: Arc<RegistryStore>) {
        self.store.store(Some(store));
    }
}
