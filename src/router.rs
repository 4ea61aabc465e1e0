//! Scheme-based protocol dispatch and the public registration entry point.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Request, Response};

use crate::errors::Result;
use crate::resolver::SrvResolver;
use crate::srv::{SrvScheme, SrvTransport};
use crate::transport::Transport;

/// A host transport with a protocol-dispatch table.
///
/// Requests are routed to the transport registered for their URL scheme;
/// anything unregistered goes to the baseline transport unchanged. The
/// table is populated before the router is shared (registration takes
/// `&mut self`), after which the router is read-only and safe to share
/// across concurrent requests.
pub struct ProtocolRouter {
    table: HashMap<String, Arc<dyn Transport>>,
    baseline: Arc<dyn Transport>,
}

impl ProtocolRouter {
    /// Create a router whose baseline handles all unregistered schemes.
    #[must_use]
    pub fn new(baseline: Arc<dyn Transport>) -> Self {
        Self {
            table: HashMap::new(),
            baseline,
        }
    }

    /// Associate `scheme` with `transport`.
    ///
    /// Registering the same scheme twice silently overwrites the earlier
    /// entry; callers are responsible for registering once per router.
    pub fn register_protocol(&mut self, scheme: impl Into<String>, transport: Arc<dyn Transport>) {
        self.table.insert(scheme.into(), transport);
    }

    /// The baseline transport used for unregistered schemes.
    #[must_use]
    pub fn baseline(&self) -> Arc<dyn Transport> {
        self.baseline.clone()
    }

    /// Whether a transport is registered for `scheme`.
    #[must_use]
    pub fn is_registered(&self, scheme: &str) -> bool {
        self.table.contains_key(scheme)
    }

    pub(crate) fn registered(&self, scheme: &str) -> Option<&Arc<dyn Transport>> {
        self.table.get(scheme)
    }
}

#[async_trait]
impl Transport for ProtocolRouter {
    async fn execute(&self, request: Request) -> Result<Response> {
        match self.table.get(request.url().scheme()) {
            Some(transport) => transport.execute(request).await,
            None => self.baseline.execute(request).await,
        }
    }
}

/// Wire an SRV transport into `router` so that requests bearing either
/// SRV-aware scheme are dispatched to it automatically.
///
/// Constructs one [`SrvTransport`] wrapping `delegate` — `None` means
/// "forward to the router's own baseline transport" — and associates both
/// `http+srv` and `https+srv` with that single instance.
///
/// There is no idempotency guarantee: calling this twice on the same router
/// overwrites the earlier registration. Call once per router.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use http_srv::{register, DnsSrvResolver, ProtocolRouter, ReqwestTransport};
///
/// let baseline = Arc::new(ReqwestTransport::default());
/// let mut router = ProtocolRouter::new(baseline);
/// register(None, Arc::new(DnsSrvResolver::new()), &mut router);
/// ```
pub fn register(
    delegate: Option<Arc<dyn Transport>>,
    resolver: Arc<dyn SrvResolver>,
    router: &mut ProtocolRouter,
) {
    let delegate = delegate.unwrap_or_else(|| router.baseline());
    let srv = Arc::new(SrvTransport::new(delegate, resolver));

    router.register_protocol(SrvScheme::Http.alias(), srv.clone());
    router.register_protocol(SrvScheme::Https.alias(), srv);
}
