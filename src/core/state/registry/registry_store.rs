use std::collections::BTreeMap;
use std::sync::Arc;
use dashmap::DashMap;

use crate::core::state::registry::instance::Instance;

/// The gateway's local registry: service name → instances of that service.
///
/// Single writer (the refresh task), any number of readers. Every operation
/// is atomic per key; there is no multi-key transaction. Instance lists are
/// stored as `Arc<[Instance]>` so a reader keeps a complete list even if the
/// writer replaces it a moment later.
#[derive(Debug, Default)]
pub struct RegistryStore {
    services: DashMap<String, Arc<[Instance]>>,
}

impl RegistryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Current instances of `service_name` (no copy of the list itself).
    pub fn get(&self, service_name: &str) -> Option<Arc<[Instance]>> {
        self.services
            .get(service_name)
            .map(|entry| Arc::clone(entry.value()))
    }

    pub fn contains(&self, service_name: &str) -> bool {
        self.services.contains_key(service_name)
    }

    /// Insert or replace the whole instance list of one service.
    pub fn insert(&self, service_name: String, instances: Vec<Instance>) {
        self.services.insert(service_name, Arc::from(instances));
    }

    pub fn remove(&self, service_name: &str) -> Option<Arc<[Instance]>> {
        self.services.remove(service_name).map(|(_, instances)| instances)
    }

    /// Names currently registered. The result is collected, so no shard lock
    /// is held once this returns.
    pub fn service_names(&self) -> Vec<String> {
        self.services.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Total number of instances across all services.
    pub fn instance_count(&self) -> usize {
        self.services.iter().map(|entry| entry.value().len()).sum()
    }

    /// Sorted copy of the registry, for diagnostics and tests.
    ///
    /// Not a consistent cut across keys while a refresh is in flight.
    pub fn snapshot(&self) -> BTreeMap<String, Vec<Instance>> {
        self.services
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().to_vec()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_whole_list() {
        let store = RegistryStore::new();
        store.insert(
            "A".to_string(),
            vec![Instance::new("A", "10.0.0.1:80"), Instance::new("A", "10.0.0.2:80")],
        );
        store.insert("A".to_string(), vec![Instance::new("A", "10.0.0.3:80")]);

        let instances = store.get("A").unwrap();
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].address, "10.0.0.3:80");
        assert_eq!(store.instance_count(), 1);
    }

    #[test]
    fn reader_keeps_old_list_after_replace() {
        let store = RegistryStore::new();
        store.insert("A".to_string(), vec![Instance::new("A", "old:80")]);

        let held = store.get("A").unwrap();
        store.insert("A".to_string(), vec![Instance::new("A", "new:80")]);

        assert_eq!(held[0].address, "old:80");
        assert_eq!(store.get("A").unwrap()[0].address, "new:80");
    }

    #[test]
    fn remove_and_names() {
        let store = RegistryStore::new();
        assert!(store.is_empty());

        store.insert("A".to_string(), vec![Instance::new("A", "a:80")]);
        store.insert("B".to_string(), vec![Instance::new("B", "b:80")]);

        let mut names = store.service_names();
        names.sort();
        assert_eq!(names, vec!["A".to_string(), "B".to_string()]);

        assert!(store.remove("B").is_some());
        assert!(store.remove("B").is_none());
        assert!(!store.contains("B"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn snapshot_is_sorted_copy() {
        let store = RegistryStore::new();
        store.insert("b".to_string(), vec![Instance::new("b", "b:80")]);
        store.insert("a".to_string(), vec![]);

        let snapshot = store.snapshot();
        let keys: Vec<&str> = snapshot.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert!(snapshot["a"].is_empty());
    }
}
