//! The delegate-transport seam: [`Transport`] and its reqwest-backed default.

use async_trait::async_trait;
use reqwest::{Request, Response};

use crate::errors::Result;

/// Abstract interface for anything that can execute a fully-formed HTTP
/// request and return a response or error.
///
/// This is the seam the SRV transport delegates to once a request's
/// destination has been concretized, and the seam tests substitute to
/// observe what the decorator forwarded. Implementations must be safe for
/// concurrent use; they are shared via `Arc` across all in-flight requests.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Execute `request` and return the response.
    async fn execute(&self, request: Request) -> Result<Response>;
}

/// The default [`Transport`], wrapping a [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Wrap an existing [`reqwest::Client`].
    #[must_use]
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: Request) -> Result<Response> {
        Ok(self.http.execute(request).await?)
    }
}
