use std::sync::Arc;
use async_trait::async_trait;

use crate::core::state::registry::instance::Instance;
use crate::core::state::registry::registry_store::RegistryStore;

/// Client of the external discovery backend.
///
/// Transport, authentication and the backend protocol belong to the
/// implementation. The client also owns the handle of the local registry
/// store; the refresh task creates it lazily through `set_registry_store`.
#[async_trait]
pub trait DiscoveryClient: Send + Sync {
    /// Fetch every live instance the backend knows about.
    async fn query_services(&self) -> anyhow::Result<Vec<Instance>>;

    /// The registry store attached to this client, if one exists yet.
    fn registry_store(&self) -> Option<Arc<RegistryStore>>;

    /// Attach a registry store to this client.
    fn set_registry_store(&self, store: Arc<RegistryStore>);
}
