//! Shared test doubles for the transport seam.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Request, Response};
use url::Url;

use crate::errors::{Error, Result};
use crate::transport::Transport;

/// A [`Transport`] double that counts invocations and captures the URL of
/// the last request it received.
pub(crate) struct RecordingTransport {
    calls: AtomicUsize,
    seen: Mutex<Option<Url>>,
    fail_with_status: Option<u16>,
}

impl RecordingTransport {
    /// A double that answers every request with `200 OK`.
    pub(crate) fn ok() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            seen: Mutex::new(None),
            fail_with_status: None,
        })
    }

    /// A double that fails every request with a real `reqwest::Error`
    /// carrying the given status, for error-identity assertions.
    pub(crate) fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            seen: Mutex::new(None),
            fail_with_status: Some(status),
        })
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn seen_url(&self) -> Option<Url> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: Request) -> Result<Response> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.seen.lock().unwrap() = Some(request.url().clone());

        if let Some(status) = self.fail_with_status {
            let response = http::Response::builder().status(status).body("").unwrap();
            let err = Response::from(response)
                .error_for_status()
                .expect_err("status codes used here are always errors");
            return Err(Error::Http(err));
        }

        let response = http::Response::builder().status(200).body("ok").unwrap();
        Ok(Response::from(response))
    }
}
