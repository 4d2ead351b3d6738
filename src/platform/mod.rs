//! Per-connection socket customization
//!
//! A `SocketHook` runs on every outbound socket after it is created and
//! before it connects. `BindToDevice` is the hook that pins a socket to a
//! named interface; how that is done depends on the OS.

#[cfg(target_os = "linux")]
mod linux;

#[cfg(not(target_os = "linux"))]
mod generic;

use socket2::Socket;
use std::io;

#[cfg(target_os = "linux")]
use linux::bind_to_device;

#[cfg(not(target_os = "linux"))]
use generic::bind_to_device;

/// Customizes a freshly created socket before it connects
pub trait SocketHook: Send + Sync {
    fn on_socket(&self, socket: &Socket) -> io::Result<()>;
}

/// Forces outbound traffic through the named interface
#[derive(Debug, Clone)]
pub struct BindToDevice {
    iface: String,
}

impl BindToDevice {
    pub fn new(iface: impl Into<String>) -> Self {
        Self { iface: iface.into() }
    }

    pub fn iface(&self) -> &str {
        &self.iface
    }
}

impl SocketHook for BindToDevice {
    fn on_socket(&self, socket: &Socket) -> io::Result<()> {
        bind_to_device(socket, &self.iface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use socket2::{Domain, Protocol, Type};

    #[test]
    fn unknown_device_is_never_ignored() {
        let socket = Socket::new(Domain::IPV4, Type::STREAM, Some(Protocol::TCP)).unwrap();
        let hook = BindToDevice::new("nosuchif0");
        assert_eq!(hook.iface(), "nosuchif0");
        assert!(hook.on_socket(&socket).is_err());
    }
}
