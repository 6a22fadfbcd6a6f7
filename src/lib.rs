pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod scheduler;

pub use crate::config::RefreshConfig;
pub use crate::core::client::discovery_client_trait::DiscoveryClient;
pub use crate::core::state::registry::instance::Instance;
pub use crate::core::state::registry::registry_store::RegistryStore;
pub use crate::scheduler::tasks::registry_refresh::task::PeriodicalRefresh;
