use std::fmt;
use std::net::Ipv4Addr;

use bytes::Bytes;
use http::Method;
use tracing::debug;

use crate::error::Result;
use crate::iface::{find_interface_by_ip, InterfaceSource, SystemInterfaces};
use crate::platform::BindToDevice;
use crate::server::{select_server_ip, LoginType};
use crate::transport::{fetch, RequestDescriptor, Timeouts};

/// Send one request from the interface that owns `source_ip` and return the
/// body of the 200 response. Resolution failures return before any network
/// I/O happens.
pub async fn request_with_bound_source(
    source_ip: Ipv4Addr,
    url: &str,
    method: Method,
    user_agent: &str,
) -> Result<Bytes> {
    request_with_bound_source_from(&SystemInterfaces, source_ip, url, method, user_agent, &Timeouts::default()).await
}

/// Same as [`request_with_bound_source`] with an explicit interface table
/// and timeouts.
pub async fn request_with_bound_source_from<S>(
    source: &S,
    source_ip: Ipv4Addr,
    url: &str,
    method: Method,
    user_agent: &str,
    timeouts: &Timeouts,
) -> Result<Bytes>
where
    S: InterfaceSource + ?Sized,
{
    let iface = find_interface_by_ip(source, source_ip)?;
    let hook = BindToDevice::new(iface.name);
    let descriptor = RequestDescriptor::new(url, method, user_agent);

    debug!("{} {} via {}", descriptor.method, descriptor.url, hook.iface());
    fetch(&descriptor, &hook, timeouts).await
}

/// A login session bound to one source address and portal server
#[derive(Clone)]
pub struct Portal {
    username: String,
    password: String,
    extra: Option<String>,
    source_ip: Ipv4Addr,
    login_type: LoginType,
    server_ip: Ipv4Addr,
}

impl Portal {
    /// Build a session, rejecting unknown login types before anything touches
    /// the network.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        extra: Option<String>,
        source_ip: Ipv4Addr,
        login_type: &str,
    ) -> Result<Self> {
        let login_type: LoginType = login_type.parse()?;
        Ok(Self::with_login_type(username, password, extra, source_ip, login_type))
    }

    pub fn with_login_type(
        username: impl Into<String>,
        password: impl Into<String>,
        extra: Option<String>,
        source_ip: Ipv4Addr,
        login_type: LoginType,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            extra: extra.filter(|e| !e.is_empty()),
            source_ip,
            login_type,
            server_ip: select_server_ip(login_type),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn extra(&self) -> Option<&str> {
        self.extra.as_deref()
    }

    pub fn source_ip(&self) -> Ipv4Addr {
        self.source_ip
    }

    pub fn login_type(&self) -> LoginType {
        self.login_type
    }

    pub fn server_ip(&self) -> Ipv4Addr {
        self.server_ip
    }

    /// Root URL of the selected portal server
    pub fn default_url(&self) -> String {
        format!("http://{}/", self.server_ip)
    }

    /// Send one request from this session's source address
    pub async fn request(&self, url: &str, method: Method, user_agent: &str) -> Result<Bytes> {
        request_with_bound_source(self.source_ip, url, method, user_agent).await
    }
}

impl fmt::Debug for Portal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Portal")
            .field("username", &self.username)
            .field("password", &if self.password.is_empty() { "" } else { "<redacted>" })
            .field("extra", &self.extra)
            .field("source_ip", &self.source_ip)
            .field("login_type", &self.login_type)
            .field("server_ip", &self.server_ip)
            .finish()
    }
}
