//! Linux-specific platform implementation
//! Uses SO_BINDTODEVICE for true per-interface binding

use socket2::Socket;
use std::io;

/// Bind the socket to `iface` using SO_BINDTODEVICE
// NOTE: Kernels before 5.7 require root or CAP_NET_RAW for this option
// sudo setcap cap_net_raw=eip ./portal-bind
pub fn bind_to_device(socket: &Socket, iface: &str) -> io::Result<()> {
    socket
        .bind_device(Some(iface.as_bytes()))
        .map_err(|e| io::Error::new(e.kind(), format!("couldn't bind to interface {}: {}", iface, e)))
}
