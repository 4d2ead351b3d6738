use std::io;
use std::net::Ipv4Addr;
use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by interface resolution, the bound transport and
/// session construction. Nothing here is retried internally.
#[derive(Debug, Error)]
pub enum Error {
    #[error("get interface list failed: {0}")]
    Enumerate(#[source] io::Error),

    #[error("IP {0} doesn't belong to any interface")]
    NotFound(Ipv4Addr),

    #[error("invalid source IP address {0:?}")]
    InvalidSourceIp(String),

    /// The bind-to-device socket option is missing or was rejected.
    #[error("binding socket to device failed: {0}")]
    PlatformUnsupported(#[source] io::Error),

    #[error("connect failed: {0}")]
    Connect(#[source] io::Error),

    #[error("TLS handshake failed: {0}")]
    Tls(#[source] io::Error),

    #[error("{phase} timed out after {after:?}")]
    Timeout { phase: &'static str, after: Duration },

    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid request: {0}")]
    InvalidRequest(#[from] http::Error),

    #[error("HTTP exchange failed: {0}")]
    Http(#[source] hyper::Error),

    #[error("status code: {0}")]
    Status(u16),

    #[error("reading response body failed: {0}")]
    Read(#[source] hyper::Error),

    #[error("unknown login type {0:?}")]
    UnknownLoginType(String),
}
