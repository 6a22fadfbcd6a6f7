use std::sync::Arc;

use crate::core::client::discovery_client_trait::DiscoveryClient;
use crate::core::state::registry::registry_store::RegistryStore;
use crate::domain::registry::grouping::CandidateMap;

/// What one reconciliation pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// Services dropped because the backend no longer reports them
    pub removed: usize,
    /// Services inserted or overwritten
    pub upserted: usize,
}

/// Bring the client's registry store in line with `candidate`.
///
/// The store is mutated in place and never swapped out, so readers holding
/// the handle keep working. Each service is replaced with one atomic store;
/// services present on both sides are never missing in between.
pub fn reconcile<C>(client: &C, candidate: CandidateMap) -> ReconcileOutcome
where
    C: DiscoveryClient + ?Sized,
{
    let store = match client.registry_store() {
        Some(store) => store,
        None => {
            let store = RegistryStore::new().shared();
            client.set_registry_store(Arc::clone(&store));
            store
        }
    };

    // Services the local registry has but the backend no longer reports
    let exclusive_keys: Vec<String> = store
        .service_names()
        .into_iter()
        .filter(|name| !candidate.contains_key(name))
        .collect();

    for name in &exclusive_keys {
        store.remove(name);
    }

    let upserted = candidate.len();
    for (name, instances) in candidate {
        store.insert(name, instances);
    }

    ReconcileOutcome {
        removed: exclusive_keys.len(),
        upserted,
    }
}
