use std::time::Duration;
use tracing::{debug, error, info};

use crate::domain::registry::reconciler::ReconcileOutcome;

/// Logging capability handed to the refresh task.
///
/// Every hook has an empty default, so implementors only pick what they need.
pub trait RefreshLogger: Send + Sync {
    fn refresh_scheduled(&self, _interval: Duration) {}

    fn cycle_started(&self) {}

    fn instances_fetched(&self, _count: usize) {}

    fn no_instances(&self) {}

    fn reconciled(&self, _outcome: &ReconcileOutcome) {}

    /// A steady-state cycle failed; the previous registry stays in place.
    fn cycle_failed(&self, _error: &anyhow::Error) {}

    fn cycle_finished(&self) {}

    /// The bootstrap cycle resolved and startup may proceed.
    fn bootstrap_completed(&self) {}
}

/// Default logger, emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRefreshLogger;

impl RefreshLogger for TracingRefreshLogger {
    fn refresh_scheduled(&self, interval: Duration) {
        info!("refresh registry every {} sec", interval.as_secs());
    }

    fn cycle_started(&self) {
        info!("registry refresh started");
    }

    fn instances_fetched(&self, count: usize) {
        info!("total app count: {}", count);
    }

    fn no_instances(&self) {
        info!("no instance found");
    }

    fn reconciled(&self, outcome: &ReconcileOutcome) {
        debug!(
            removed = outcome.removed,
            upserted = outcome.upserted,
            "registry reconciled"
        );
    }

    fn cycle_failed(&self, error: &anyhow::Error) {
        error!(error = ?error, "registry refresh failed, keeping previous registry");
    }

    fn cycle_finished(&self) {
        info!("done refreshing registry");
    }

    fn bootstrap_completed(&self) {
        debug!("bootstrap refresh completed");
    }
}
