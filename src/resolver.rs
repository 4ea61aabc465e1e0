//! The record-resolution seam: [`SrvResolver`] and the records it returns.
//!
//! The SRV transport never performs DNS lookups itself. It calls whatever
//! [`SrvResolver`] was injected at construction, which keeps resolution
//! swappable: production code uses [`DnsSrvResolver`](crate::DnsSrvResolver),
//! tests use [`StaticResolver`] or a closure-backed double. No process-wide
//! mutable state is involved, so concurrent tests cannot trample each other.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::ResolveError;

/// One instance of a named service, as returned by an SRV lookup.
///
/// The `target` is carried exactly as the resolver returned it, including
/// any trailing dot (`node1.consul.`). Priority and weight are reported for
/// callers that want them; the SRV transport itself trusts resolver order
/// and never re-sorts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrvRecord {
    /// Concrete target hostname for this instance.
    pub target: String,
    /// Port the instance listens on.
    pub port: u16,
    /// SRV priority (lower is preferred).
    pub priority: u16,
    /// SRV weight among records of equal priority.
    pub weight: u16,
}

impl SrvRecord {
    /// Create a record with default priority and weight.
    #[must_use]
    pub fn new(target: impl Into<String>, port: u16) -> Self {
        Self {
            target: target.into(),
            port,
            priority: 0,
            weight: 0,
        }
    }
}

/// Trait for SRV record resolvers.
///
/// Implementations map a service hostname to an ordered list of
/// [`SrvRecord`]s. The order is significant: the SRV transport treats the
/// first record as the selected one.
///
/// An `Ok(vec![])` result is valid from the resolver's point of view; the
/// caller decides whether an empty set is an error.
#[async_trait]
pub trait SrvResolver: Send + Sync + 'static {
    /// Resolve SRV records for `hostname`, in selection order.
    async fn resolve_srv(&self, hostname: &str) -> Result<Vec<SrvRecord>, ResolveError>;
}

/// A resolver that returns pre-configured records.
///
/// Useful for tests or fixed topologies known at configuration time.
#[derive(Debug, Default)]
pub struct StaticResolver {
    records: Mutex<HashMap<String, Vec<SrvRecord>>>,
}

impl StaticResolver {
    /// Create a new empty static resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the records for a hostname, replacing any previous entry.
    pub fn set_records(&self, hostname: impl Into<String>, records: Vec<SrvRecord>) {
        self.records
            .lock()
            .expect("static resolver lock poisoned")
            .insert(hostname.into(), records);
    }

    /// Append a single record for a hostname.
    pub fn add_record(&self, hostname: impl Into<String>, record: SrvRecord) {
        self.records
            .lock()
            .expect("static resolver lock poisoned")
            .entry(hostname.into())
            .or_default()
            .push(record);
    }
}

#[async_trait]
impl SrvResolver for StaticResolver {
    async fn resolve_srv(&self, hostname: &str) -> Result<Vec<SrvRecord>, ResolveError> {
        self.records
            .lock()
            .expect("static resolver lock poisoned")
            .get(hostname)
            .cloned()
            .ok_or_else(|| ResolveError::dns(format!("no such service: {hostname}")))
    }
}
