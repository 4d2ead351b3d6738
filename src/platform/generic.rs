//! Generic (non-Linux) platform implementation
//! There is no bind-to-device primitive here, so binding always fails
//! rather than falling back to default routing

use socket2::Socket;
use std::io;

pub fn bind_to_device(_socket: &Socket, iface: &str) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        format!("binding to interface {} requires SO_BINDTODEVICE (Linux only)", iface),
    ))
}
