pub mod discovery_client_trait;
pub mod registry_store_slot;
