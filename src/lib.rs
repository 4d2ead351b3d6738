//! Captive portal login from a chosen source interface
//!
//! The portal server is picked from the login type, the interface owning the
//! caller's source IPv4 address is looked up, and the login request is sent
//! over a socket bound to that interface.

pub mod client;
pub mod error;
pub mod iface;
pub mod platform;
pub mod server;
pub mod transport;

pub use client::{request_with_bound_source, request_with_bound_source_from, Portal};
pub use error::{Error, Result};
pub use iface::{
    find_interface_by_ip, list_interfaces, parse_source_ip, InterfaceAddress, InterfaceSource, LocalInterface,
    SystemInterfaces,
};
pub use platform::{BindToDevice, SocketHook};
pub use server::{select_server_ip, LoginType};
pub use transport::{fetch, RequestDescriptor, Timeouts};
