use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use futures::FutureExt;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::config::RefreshConfig;
use crate::core::client::discovery_client_trait::DiscoveryClient;
use crate::core::state::registry::registry_store::RegistryStore;
use crate::core::state::runtime::refresh::refresh_status_repository::RefreshStatusRepository;
use crate::domain::registry::grouping::group_by_service;
use crate::domain::registry::reconciler::reconcile;
use crate::errors::RefreshError;
use crate::scheduler::tasks::registry_refresh::refresh_logger::{RefreshLogger, TracingRefreshLogger};

/// Periodically pulls every instance from the discovery backend and
/// reconciles it into the client's registry store.
pub struct PeriodicalRefresh<C: DiscoveryClient + ?Sized + 'static> {
    client: Arc<C>,
    config: RefreshConfig,
    logger: Arc<dyn RefreshLogger>,
    status: Arc<RefreshStatusRepository>,
    started: AtomicBool,
    worker: OnceLock<JoinHandle<()>>,
}

impl<C: DiscoveryClient + ?Sized + 'static> PeriodicalRefresh<C> {
    pub fn new(client: Arc<C>, config: RefreshConfig) -> Self {
        Self {
            client,
            config,
            logger: Arc::new(TracingRefreshLogger),
            status: RefreshStatusRepository::new().shared(),
            started: AtomicBool::new(false),
            worker: OnceLock::new(),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn RefreshLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Outcome history of the refresh cycles run so far.
    pub fn status(&self) -> Arc<RefreshStatusRepository> {
        Arc::clone(&self.status)
    }

    /// The live registry, once the first non-empty refresh has landed.
    pub fn registry_store(&self) -> Option<Arc<RegistryStore>> {
        self.client.registry_store()
    }

    /// Whether the background refresh task is alive. False before start and
    /// after a failed bootstrap.
    pub fn is_running(&self) -> bool {
        self.worker
            .get()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Start the refresh loop and wait for the bootstrap cycle.
    ///
    /// Returns once the first cycle has resolved. A failed first query is
    /// returned as an error and the loop stops there; later failures are
    /// only logged and the previous registry stays in place.
    pub async fn start_periodical_refresh(&self) -> Result<()> {
        if self.config.interval.is_zero() {
            return Err(RefreshError::ZeroInterval.into());
        }
        if self.started.swap(true, Ordering::AcqRel) {
            return Err(RefreshError::AlreadyStarted.into());
        }

        self.logger.refresh_scheduled(self.config.interval);

        let (signal, bootstrap) = oneshot::channel();
        let worker = RefreshWorker {
            client: Arc::clone(&self.client),
            logger: Arc::clone(&self.logger),
            status: Arc::clone(&self.status),
            interval: self.config.interval,
        };
        let handle = tokio::spawn(worker.run(RefreshPhase::Bootstrap(signal)));
        let _ = self.worker.set(handle);

        match bootstrap.await {
            Ok(outcome) => outcome.context("failed to refresh registry"),
            Err(_) => Err(RefreshError::TaskAborted.into()),
        }
    }
}

/// Where the refresh loop is in its lifecycle. The bootstrap variant carries
/// the one-shot signal for whoever is waiting on startup.
enum RefreshPhase {
    Bootstrap(oneshot::Sender<Result<()>>),
    Steady,
}

impl RefreshPhase {
    /// Move to `Steady`, returning the bootstrap signal the first time only.
    fn leave_bootstrap(&mut self) -> Option<oneshot::Sender<Result<()>>> {
        match std::mem::replace(self, RefreshPhase::Steady) {
            RefreshPhase::Bootstrap(signal) => Some(signal),
            RefreshPhase::Steady => None,
        }
    }
}

struct RefreshWorker<C: DiscoveryClient + ?Sized> {
    client: Arc<C>,
    logger: Arc<dyn RefreshLogger>,
    status: Arc<RefreshStatusRepository>,
    interval: Duration,
}

impl<C: DiscoveryClient + ?Sized> RefreshWorker<C> {
    async fn run(self, mut phase: RefreshPhase) {
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // first tick completes immediately
        ticker.tick().await;

        loop {
            self.logger.cycle_started();

            if let Err(err) = self.refresh_once().await {
                let message = format!("{err:#}");
                self.status.update(|s| s.mark_error(message)).await;

                if let Some(signal) = phase.leave_bootstrap() {
                    let _ = signal.send(Err(err));
                    return;
                }
                self.logger.cycle_failed(&err);
            }

            self.logger.cycle_finished();

            if let Some(signal) = phase.leave_bootstrap() {
                self.logger.bootstrap_completed();
                let _ = signal.send(Ok(()));
            }

            ticker.tick().await;
        }
    }

    /// One cycle: query → group → reconcile.
    async fn refresh_once(&self) -> Result<()> {
        // A panicking client fails this cycle instead of killing the task
        let instances = AssertUnwindSafe(self.client.query_services())
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| Err(panic_error(payload)))
            .context("failed to query all services")?;

        // Nothing reported is treated as nothing new, not as "delete everything"
        if instances.is_empty() {
            self.logger.no_instances();
            self.status.update(|s| s.mark_refreshed(None)).await;
            return Ok(());
        }

        self.logger.instances_fetched(instances.len());

        let candidate = group_by_service(instances);
        let outcome = reconcile(self.client.as_ref(), candidate);
        self.logger.reconciled(&outcome);

        let size = self
            .client
            .registry_store()
            .map(|store| (store.len(), store.instance_count()));
        self.status.update(|s| s.mark_refreshed(size)).await;

        Ok(())
    }
}

fn panic_error(payload: Box<dyn Any + Send>) -> anyhow::Error {
    let message = payload
        .downcast_ref::<&str>()
        .map(|m| m.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());
    anyhow!("discovery client panicked: {message}")
}
