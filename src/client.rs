//! Thin construction glue: a ready-wired client for SRV-aware requests.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, Request, Response};
use url::Url;

use crate::dns::DnsSrvResolver;
use crate::errors::{BuildError, Result};
use crate::resolver::SrvResolver;
use crate::router::{register, ProtocolRouter};
use crate::transport::{ReqwestTransport, Transport};

const DEFAULT_USER_AGENT: &str = concat!("http-srv", "@", env!("CARGO_PKG_VERSION"));

/// Configures a [`SrvClient`] before construction.
///
/// Most code obtains this via [`SrvClient::builder()`], which simply
/// returns `SrvClientBuilder::default()`.
///
/// # Defaults
/// - Resolver: [`DnsSrvResolver`] with default configuration
/// - Baseline transport: [`ReqwestTransport`] over a fresh [`reqwest::Client`]
/// - HTTP request timeout: reqwest default (no global timeout) unless set
///   via [`Self::request_timeout`]
/// - User-agent: `http-srv@<crate-version>` plus any [`Self::user_agent_extra`]
///
/// # Example
/// ```no_run
/// use std::time::Duration;
/// # use http_srv::SrvClient;
/// let client = SrvClient::builder()
///     .request_timeout(Duration::from_secs(10))
///     .user_agent_extra("myapp/1.2.3")
///     .build()?;
/// # Ok::<_, http_srv::BuildError>(())
/// ```
#[derive(Default)]
#[must_use]
pub struct SrvClientBuilder {
    resolver: Option<Arc<dyn SrvResolver>>,
    transport: Option<Arc<dyn Transport>>,
    request_timeout: Option<Duration>,

    /// Optional user-agent segment appended to the default UA for app-level telemetry.
    user_agent_extra: Option<String>,
}

impl SrvClientBuilder {
    /// Inject a custom [`SrvResolver`] instead of the default DNS-backed one.
    pub fn resolver(&mut self, resolver: Arc<dyn SrvResolver>) -> &mut Self {
        self.resolver = Some(resolver);
        self
    }

    /// Replace the baseline [`Transport`] (also used as the SRV delegate).
    ///
    /// When set, [`Self::request_timeout`] and [`Self::user_agent_extra`]
    /// have no effect: those knobs configure the default reqwest client.
    pub fn transport(&mut self, transport: Arc<dyn Transport>) -> &mut Self {
        self.transport = Some(transport);
        self
    }

    /// Set HTTP requests timeout.
    pub fn request_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Append an extra user-agent segment after the default
    /// `http-srv@<version>`.
    ///
    /// Example: `.user_agent_extra("myapp/1.2.3")`
    pub fn user_agent_extra<S: Into<String>>(&mut self, extra: S) -> &mut Self {
        self.user_agent_extra = Some(extra.into());
        self
    }

    /// Build a [`SrvClient`].
    pub fn build(&self) -> Result<SrvClient, BuildError> {
        let baseline = match &self.transport {
            Some(transport) => transport.clone(),
            None => {
                // Compose user agent with optional extra part.
                let user_agent = match &self.user_agent_extra {
                    Some(extra) if !extra.trim().is_empty() => {
                        format!("{DEFAULT_USER_AGENT} {}", extra.trim())
                    }
                    _ => DEFAULT_USER_AGENT.to_string(),
                };

                let mut http = reqwest::Client::builder().user_agent(user_agent);
                if let Some(timeout) = self.request_timeout {
                    http = http.timeout(timeout);
                }

                Arc::new(ReqwestTransport::new(http.build()?)) as Arc<dyn Transport>
            }
        };

        let resolver = self
            .resolver
            .clone()
            .unwrap_or_else(|| Arc::new(DnsSrvResolver::new()) as Arc<dyn SrvResolver>);

        let mut router = ProtocolRouter::new(baseline);
        register(None, resolver, &mut router);

        Ok(SrvClient {
            router: Arc::new(router),
        })
    }
}

/// A ready-wired HTTP client that understands `http+srv` and `https+srv`
/// URLs alongside plain `http`/`https`.
///
/// Reusable and cheap to clone; holds a [`ProtocolRouter`] with the SRV
/// transport registered for both aliases and a reqwest-backed baseline for
/// everything else.
#[derive(Clone)]
pub struct SrvClient {
    router: Arc<ProtocolRouter>,
}

impl SrvClient {
    /// Creates a client with the default DNS resolver and transport.
    pub fn new() -> Result<SrvClient, BuildError> {
        Self::builder().build()
    }

    /// Returns a builder to edit settings before creating a [`SrvClient`].
    pub fn builder() -> SrvClientBuilder {
        SrvClientBuilder::default()
    }

    /// The underlying protocol router.
    #[must_use]
    pub fn router(&self) -> &ProtocolRouter {
        &self.router
    }

    /// Execute a request with the given `Method` and `url`.
    ///
    /// # Errors
    ///
    /// Fails when the supplied `url` cannot be parsed, when SRV resolution
    /// fails or yields no records, or when the underlying exchange fails.
    pub async fn request(&self, method: Method, url: &str) -> Result<Response> {
        let url = Url::parse(url)?;
        self.router.execute(Request::new(method, url)).await
    }

    /// Convenience method to make a `GET` request to a URL.
    pub async fn get(&self, url: &str) -> Result<Response> {
        self.request(Method::GET, url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::resolver::{SrvRecord, StaticResolver};
    use crate::test_util::RecordingTransport;

    #[tokio::test]
    async fn client_routes_srv_urls_through_the_decorator() {
        let resolver = StaticResolver::new();
        resolver.set_records(
            "api.service.consul",
            vec![SrvRecord::new("node1.consul.", 8080)],
        );
        let transport = RecordingTransport::ok();

        let client = SrvClient::builder()
            .resolver(Arc::new(resolver))
            .transport(transport.clone())
            .build()
            .unwrap();

        let response = client.get("http+srv://api.service.consul/healthz").await.unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(
            transport.seen_url().unwrap().as_str(),
            "http://node1.consul.:8080/healthz"
        );
    }

    #[tokio::test]
    async fn client_passes_plain_urls_to_the_baseline_untouched() {
        let transport = RecordingTransport::ok();
        let client = SrvClient::builder()
            .resolver(Arc::new(StaticResolver::new()))
            .transport(transport.clone())
            .build()
            .unwrap();

        client.get("https://example.com/test").await.unwrap();

        assert_eq!(
            transport.seen_url().unwrap().as_str(),
            "https://example.com/test"
        );
    }

    #[tokio::test]
    async fn invalid_urls_surface_as_parse_errors() {
        let client = SrvClient::builder()
            .transport(RecordingTransport::ok())
            .build()
            .unwrap();

        let err = client.get("not a url").await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn builder_registers_both_schemes() {
        let client = SrvClient::builder()
            .resolver(Arc::new(StaticResolver::new()))
            .transport(RecordingTransport::ok())
            .build()
            .unwrap();

        assert!(client.router().is_registered("http+srv"));
        assert!(client.router().is_registered("https+srv"));
    }
}
