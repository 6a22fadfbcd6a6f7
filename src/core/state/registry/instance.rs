use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// One registered service endpoint as reported by the discovery backend.
///
/// `status` and `metadata` are passed through untouched; nothing in this crate
/// interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Name of the service this endpoint belongs to (grouping key)
    pub service_name: String,

    /// Network address, usually `host:port`
    pub address: String,

    /// Backend-reported status (e.g. `UP`)
    #[serde(default)]
    pub status: String,

    /// Backend-reported metadata
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl Instance {
    pub fn new(service_name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            address: address.into(),
            status: String::new(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
