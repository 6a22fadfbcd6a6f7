use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// In-memory record of how the registry refresh has been going.
///
/// This state:
/// - lives only in memory (NOT persisted)
/// - is updated once per refresh cycle
/// - never affects the registry itself
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefreshStatus {
    // ===== Timestamps =====
    pub last_refreshed_at: Option<DateTime<Utc>>,
    pub last_error_at: Option<DateTime<Utc>>,

    // ===== Counters =====
    pub completed_cycles: u64,
    pub failed_cycles: u64,

    // ===== Registry size after the last reconciliation =====
    pub service_count: usize,
    pub instance_count: usize,

    pub last_error_message: Option<String>,
}

impl RefreshStatus {
    /// Record a successful cycle. `registry_size` is `None` when the backend
    /// returned nothing and the registry was left untouched.
    pub fn mark_refreshed(&mut self, registry_size: Option<(usize, usize)>) {
        self.last_refreshed_at = Some(Utc::now());
        self.completed_cycles += 1;

        if let Some((services, instances)) = registry_size {
            self.service_count = services;
            self.instance_count = instances;
        }
    }

    /// Record a failed cycle (registry counts remain intact).
    pub fn mark_error(&mut self, message: String) {
        self.last_error_at = Some(Utc::now());
        self.failed_cycles += 1;
        self.last_error_message = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_keeps_previous_counts() {
        let mut status = RefreshStatus::default();
        status.mark_refreshed(Some((3, 7)));
        status.mark_error("backend down".to_string());

        assert_eq!(status.service_count, 3);
        assert_eq!(status.instance_count, 7);
        assert_eq!(status.completed_cycles, 1);
        assert_eq!(status.failed_cycles, 1);
        assert_eq!(status.last_error_message.as_deref(), Some("backend down"));
        assert!(status.last_error_at.is_some());
    }

    #[test]
    fn empty_cycle_counts_but_keeps_size() {
        let mut status = RefreshStatus::default();
        status.mark_refreshed(Some((2, 2)));
        status.mark_refreshed(None);

        assert_eq!(status.completed_cycles, 2);
        assert_eq!(status.service_count, 2);
    }
}
