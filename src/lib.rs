//! SRV-aware transport decorator for HTTP clients.
//!
//! URLs with the schemes `http+srv` and `https+srv` name a *service
//! identity* rather than a concrete network address. This crate intercepts
//! such requests, resolves DNS SRV records for the hostname, rewrites the
//! destination to the first resolved target, normalizes the scheme back to
//! plain `http`/`https`, and forwards to a delegate transport:
//!
//! `http+srv://simple.service.consul/healthz -> http://ac1e1409.addr.lon.consul.:31883/healthz`
//!
//! Selection is deterministic: the first record in resolver order wins. No
//! load balancing, no caching, no retry across alternate records.
//!
//! Wire it up through [`register`] against a [`ProtocolRouter`], or use the
//! ready-made [`SrvClient`]:
//!
//! ```no_run
//! # async fn example() -> http_srv::Result<()> {
//! let client = http_srv::SrvClient::new()?;
//! let response = client.get("http+srv://api.service.consul/healthz").await?;
//! # Ok(()) }
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

mod client;
mod dns;
pub mod errors;
mod resolver;
mod router;
mod srv;
mod transport;

#[cfg(test)]
pub(crate) mod test_util;

// --- PUBLIC API EXPORTS ---
pub use client::{SrvClient, SrvClientBuilder};
pub use dns::DnsSrvResolver;
pub use errors::{BuildError, Error, ResolveError, Result};
pub use resolver::{SrvRecord, SrvResolver, StaticResolver};
pub use router::{register, ProtocolRouter};
pub use srv::{SrvScheme, SrvTransport};
pub use transport::{ReqwestTransport, Transport};
