pub mod instance;
pub mod registry_store;
