use std::sync::Arc;
use tokio::sync::RwLock;

use crate::core::state::runtime::refresh::refresh_status::RefreshStatus;

pub struct RefreshStatusRepository {
    state: RwLock<Arc<RefreshStatus>>,
}

impl Default for RefreshStatusRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshStatusRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(Arc::new(RefreshStatus::default())),
        }
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Return the shared Arc snapshot (zero cost).
    pub async fn get(&self) -> Arc<RefreshStatus> {
        self.state.read().await.clone()
    }

    /// Mutate the status by cloning and swapping the snapshot.
    pub async fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut RefreshStatus),
    {
        let mut guard = self.state.write().await;

        let mut next = (**guard).clone();
        f(&mut next);

        *guard = Arc::new(next);
    }
}
