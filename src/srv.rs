//! The SRV transport: intercepts `http+srv`/`https+srv` requests, resolves
//! the service name, rewrites the destination, and forwards to a delegate.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Request, Response};
use url::{Position, Url};

use crate::errors::{Error, ResolveError, Result};
use crate::resolver::SrvResolver;
use crate::transport::Transport;

/// The two URL schemes that signal "resolve the host through SRV records".
///
/// Everything else is invalid input for the SRV transport; the unmatched
/// case is an explicit error arm, not a silent fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SrvScheme {
    /// `http+srv`, normalized to `http` before delegation.
    Http,
    /// `https+srv`, normalized to `https` before delegation.
    Https,
}

impl SrvScheme {
    /// Parse a URL scheme string. Returns `None` for anything other than
    /// the two SRV-aware aliases.
    #[must_use]
    pub fn from_scheme(scheme: &str) -> Option<Self> {
        match scheme {
            "http+srv" => Some(Self::Http),
            "https+srv" => Some(Self::Https),
            _ => None,
        }
    }

    /// The SRV-aware alias as it appears in request URLs.
    #[must_use]
    pub fn alias(self) -> &'static str {
        match self {
            Self::Http => "http+srv",
            Self::Https => "https+srv",
        }
    }

    /// The plain scheme the request is normalized to before delegation.
    #[must_use]
    pub fn plain(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

/// Transport decorator that concretizes SRV-located destinations.
///
/// Holds exactly one delegate [`Transport`] and one injected
/// [`SrvResolver`]; no other state. Instances are immutable once built and
/// safe to share across concurrent requests without locking.
///
/// For each request it:
/// 1. validates the scheme against [`SrvScheme`] (fails closed on anything
///    else, even though the dispatch table should only route the two
///    registered aliases here),
/// 2. resolves SRV records for the URL's hostname (any port in the URL is
///    discarded),
/// 3. selects the **first** record in resolver order — no re-sorting, no
///    priority or weight comparison,
/// 4. rewrites the URL to `<plain>://<target>:<port><path>` with the target
///    exactly as returned (trailing dot preserved); userinfo, path and
///    query untouched,
/// 5. forwards to the delegate and returns its result unchanged.
///
/// Every failure is terminal for the call: no retry, no fallback to a later
/// record, and the delegate is never invoked on a failure path.
pub struct SrvTransport {
    delegate: Arc<dyn Transport>,
    resolver: Arc<dyn SrvResolver>,
}

impl SrvTransport {
    /// Create a decorator forwarding to `delegate` and resolving through
    /// `resolver`.
    #[must_use]
    pub fn new(delegate: Arc<dyn Transport>, resolver: Arc<dyn SrvResolver>) -> Self {
        Self { delegate, resolver }
    }
}

#[async_trait]
impl Transport for SrvTransport {
    async fn execute(&self, mut request: Request) -> Result<Response> {
        let scheme = request.url().scheme();
        let scheme = SrvScheme::from_scheme(scheme)
            .ok_or_else(|| Error::UnrecognizedScheme(scheme.to_string()))?;

        let hostname = request
            .url()
            .host_str()
            .ok_or_else(|| Error::MissingHost(request.url().to_string()))?
            .to_string();

        let records = self.resolver.resolve_srv(&hostname).await?;
        let selected = match records.first() {
            Some(record) => record,
            None => return Err(ResolveError::NoRecords(hostname).into()),
        };

        // Userinfo, path, query and fragment carry over verbatim; only the
        // scheme and host:port change.
        let userinfo = match (request.url().username(), request.url().password()) {
            ("", None) => String::new(),
            (user, None) => format!("{user}@"),
            (user, Some(password)) => format!("{user}:{password}@"),
        };
        let rewritten = format!(
            "{}://{}{}:{}{}",
            scheme.plain(),
            userinfo,
            selected.target,
            selected.port,
            &request.url()[Position::BeforePath..],
        );
        tracing::debug!(
            service = %hostname,
            target = %selected.target,
            port = selected.port,
            "rewrote SRV destination"
        );
        *request.url_mut() = Url::parse(&rewritten)?;

        self.delegate.execute(request).await
    }
}
