use std::collections::HashMap;

use crate::core::state::registry::instance::Instance;

/// Replacement registry built from one backend response. Lives for a single
/// reconciliation pass and is never shown to readers.
pub type CandidateMap = HashMap<String, Vec<Instance>>;

/// Partition a flat instance list into per-service buckets.
///
/// Relative order inside each bucket follows the input; duplicates are kept.
pub fn group_by_service(instances: Vec<Instance>) -> CandidateMap {
    let mut services = CandidateMap::new();

    for instance in instances {
        services
            .entry(instance.service_name.clone())
            .or_insert_with(|| Vec::with_capacity(5))
            .push(instance);
    }

    services
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_and_preserves_order() {
        let inst1 = Instance::new("A", "10.0.0.1:80");
        let inst2 = Instance::new("B", "10.0.0.2:80");
        let inst3 = Instance::new("A", "10.0.0.3:80");

        let grouped = group_by_service(vec![inst1.clone(), inst2.clone(), inst3.clone()]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped["A"], vec![inst1, inst3]);
        assert_eq!(grouped["B"], vec![inst2]);
    }

    #[test]
    fn keeps_duplicates_in_backend_order() {
        let first = Instance::new("A", "10.0.0.1:80").with_metadata("weight", "1");
        let second = Instance::new("A", "10.0.0.1:80").with_metadata("weight", "9");

        let grouped = group_by_service(vec![first.clone(), second.clone()]);

        assert_eq!(grouped["A"], vec![first, second]);
    }

    #[test]
    fn empty_input_yields_empty_map() {
        assert!(group_by_service(Vec::new()).is_empty());
    }
}
