//! DNS-backed [`SrvResolver`] implementation.

use async_trait::async_trait;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::Resolver as HickoryResolver;

use crate::errors::ResolveError;
use crate::resolver::{SrvRecord, SrvResolver};

/// Type alias for the Tokio-based hickory resolver.
type TokioResolver = HickoryResolver<TokioConnectionProvider>;

/// SRV resolver backed by a real DNS client.
///
/// Records are returned in the order the DNS client yields them — no
/// re-sorting by priority or weight. The transport layer's selection policy
/// is "first record wins", so whatever ordering the DNS infrastructure
/// applies (e.g. Consul returning instances in its own preference order) is
/// what gets used.
///
/// # Example
/// ```no_run
/// use http_srv::DnsSrvResolver;
///
/// let resolver = DnsSrvResolver::new();
/// // let records = resolver.resolve_srv("api.service.consul").await?;
/// ```
pub struct DnsSrvResolver {
    resolver: TokioResolver,
}

impl DnsSrvResolver {
    /// Create a resolver with default configuration.
    #[must_use]
    pub fn new() -> Self {
        let resolver = HickoryResolver::builder_with_config(
            ResolverConfig::default(),
            TokioConnectionProvider::default(),
        )
        .with_options(ResolverOpts::default())
        .build();

        Self { resolver }
    }

    /// Create a resolver with custom configuration, e.g. pointing at a
    /// Consul agent's DNS interface instead of the system resolver.
    pub fn with_config(config: ResolverConfig, opts: ResolverOpts) -> Self {
        let resolver =
            HickoryResolver::builder_with_config(config, TokioConnectionProvider::default())
                .with_options(opts)
                .build();

        Self { resolver }
    }
}

impl Default for DnsSrvResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SrvResolver for DnsSrvResolver {
    async fn resolve_srv(&self, hostname: &str) -> Result<Vec<SrvRecord>, ResolveError> {
        let lookup = self
            .resolver
            .srv_lookup(hostname)
            .await
            .map_err(ResolveError::dns_with_source)?;

        Ok(lookup
            .iter()
            .map(|srv| SrvRecord {
                target: srv.target().to_string(),
                port: srv.port(),
                priority: srv.priority(),
                weight: srv.weight(),
            })
            .collect())
    }
}
