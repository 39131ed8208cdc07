//! Process-wide schema cache shared across provider connections.
//!
//! Fetching a provider schema is the most expensive call in the protocol, and
//! hosts routinely open several connections to the same provider within one
//! run. Providers that declare the `get_provider_schema_optional` capability
//! promise a stable schema for their lifetime, which makes it valid to share
//! one fetched copy across connections. The cache is handed to each
//! [`GrpcProvider`] explicitly rather than living in a global.
//!
//! [`GrpcProvider`]: crate::client::GrpcProvider

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::schema::ProviderSchema;

/// The source address a provider was installed from, e.g.
/// `registry.hemmer.io/hemmer/aws`. Opaque to the client; used only as a
/// cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProviderAddr(String);

impl ProviderAddr {
    /// Wrap a provider source address.
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    /// The address as originally given.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProviderAddr {
    fn from(addr: &str) -> Self {
        Self::new(addr)
    }
}

/// Schemas by provider address. Writes are last-writer-wins; entries are
/// never invalidated because a capable provider's schema cannot change while
/// it is installed.
#[derive(Debug, Default)]
pub struct SchemaCache {
    entries: Mutex<HashMap<ProviderAddr, Arc<ProviderSchema>>>,
}

impl SchemaCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the schema for a provider address.
    pub fn get(&self, addr: &ProviderAddr) -> Option<Arc<ProviderSchema>> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(addr)
            .cloned()
    }

    /// Store the schema for a provider address, replacing any earlier entry.
    pub fn set(&self, addr: ProviderAddr, schema: Arc<ProviderSchema>) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(addr, schema);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let cache = SchemaCache::new();
        let addr = ProviderAddr::from("registry.hemmer.io/hemmer/null");
        assert!(cache.get(&addr).is_none());

        let schema = Arc::new(ProviderSchema::default());
        cache.set(addr.clone(), Arc::clone(&schema));
        assert!(Arc::ptr_eq(&cache.get(&addr).unwrap(), &schema));
    }

    #[test]
    fn test_last_writer_wins() {
        let cache = SchemaCache::new();
        let addr = ProviderAddr::from("registry.hemmer.io/hemmer/local");

        let first = Arc::new(ProviderSchema::default());
        let second = Arc::new(ProviderSchema::default());
        cache.set(addr.clone(), Arc::clone(&first));
        cache.set(addr.clone(), Arc::clone(&second));

        assert_eq!(cache.len(), 1);
        assert!(Arc::ptr_eq(&cache.get(&addr).unwrap(), &second));
    }
}
