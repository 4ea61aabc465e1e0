//! Unified error types for the `http-srv` crate.
//!
//! This module centralizes all failures that can occur while routing a
//! request and provides a single top-level [`Error`] enum plus the
//! convenient [`Result`] alias. Errors from lower layers (`reqwest`, URL
//! parsing, SRV resolution) are mapped into structured variants so callers
//! can handle them precisely.

use thiserror::Error;

// --- Build-Time Error ---

/// Errors that can occur while building a [`SrvClient`](crate::SrvClient).
#[derive(Debug, Error)]
pub enum BuildError {
    /// Failed to build the HTTP client (reqwest configuration).
    #[error("Failed to build the HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

// --- The Main Operational Error Enum ---

/// The crate's top-level error type.
///
/// It groups failures into high-level categories:
/// - [`Error::UnrecognizedScheme`] — a request reached the SRV transport
///   with a scheme it does not handle
/// - [`Error::Resolve`] — SRV resolution failed or yielded no records
/// - [`Error::Parse`] — URL parsing failed while preparing a request
/// - [`Error::Http`] — the underlying HTTP transport failed
/// - [`Error::Build`] — construction of the client failed
///
/// Lower-level errors automatically convert into this enum via `From`.
#[derive(Debug, Error)]
pub enum Error {
    /// The request's scheme is neither `http+srv` nor `https+srv`.
    ///
    /// Reaching this arm signals a routing or configuration mistake: only
    /// the two registered schemes should ever be dispatched to the SRV
    /// transport, but it validates independently rather than trust the
    /// dispatch table.
    #[error("unrecognized scheme {0}")]
    UnrecognizedScheme(String),

    /// SRV resolution failed, or succeeded with zero usable records.
    #[error("SRV resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    /// The request URL carries no host to resolve.
    #[error("request URL has no host: {0}")]
    MissingHost(String),

    /// URL parsing failed while preparing a request.
    #[error("Failed to parse URL: {0}")]
    Parse(#[from] url::ParseError),

    /// The underlying HTTP exchange failed (transport, timeout, TLS).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Building the client failed (reqwest configuration).
    #[error("Client build failed: {0}")]
    Build(#[from] BuildError),
}

// --- Resolution Errors ---

/// Errors produced while resolving SRV records for a hostname.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The DNS lookup itself failed (network, NXDOMAIN, server failure).
    ///
    /// When the failure came from a resolver library, the original error
    /// stays reachable through [`std::error::Error::source`].
    #[error("dns error: {message}")]
    Dns {
        /// Human-readable description of the failure.
        message: String,
        /// The underlying resolver error, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },

    /// The lookup succeeded structurally but returned zero records.
    ///
    /// Distinct from [`ResolveError::Dns`]: this is a "service has no
    /// instances" condition, not a transport-level DNS failure.
    #[error("SRV lookup for {0} returned no records")]
    NoRecords(String),
}

impl ResolveError {
    /// A DNS failure described by a message alone, with no underlying
    /// machine-readable cause.
    pub fn dns(message: impl Into<String>) -> Self {
        Self::Dns {
            message: message.into(),
            source: None,
        }
    }

    /// A DNS failure wrapping the resolver library's error, preserved as
    /// the variant's source.
    pub fn dns_with_source(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Dns {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }
}

/// Alias for `Result<T, Error>`.
pub type Result<T, E = Error> = std::result::Result<T, E>;
