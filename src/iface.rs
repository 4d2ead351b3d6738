//! Local interface discovery and source IP resolution
//!
//! Addresses reported by the OS come either with a netmask (CIDR form) or
//! bare. Both reduce to a single effective address, which is what the
//! source IP is compared against.

use std::io;
use std::net::{IpAddr, Ipv4Addr};

use get_if_addrs::IfAddr;
use tracing::debug;

use crate::error::{Error, Result};

/// An address bound to an interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceAddress {
    Cidr { ip: IpAddr, prefix: u8 },
    Bare(IpAddr),
}

impl InterfaceAddress {
    /// The bound address with any prefix dropped
    pub fn ip(&self) -> IpAddr {
        match *self {
            InterfaceAddress::Cidr { ip, .. } | InterfaceAddress::Bare(ip) => ip,
        }
    }

    /// Whether this binding is exactly `ip`. IPv4-mapped IPv6 bindings count
    /// as their IPv4 address.
    pub fn matches(&self, ip: Ipv4Addr) -> bool {
        match self.ip() {
            IpAddr::V4(v4) => v4 == ip,
            IpAddr::V6(v6) => v6.to_ipv4_mapped() == Some(ip),
        }
    }

    fn from_if_addr(addr: &IfAddr) -> Self {
        match addr {
            IfAddr::V4(v4) if v4.netmask.is_unspecified() => InterfaceAddress::Bare(IpAddr::V4(v4.ip)),
            IfAddr::V4(v4) => InterfaceAddress::Cidr {
                ip: IpAddr::V4(v4.ip),
                prefix: u32::from(v4.netmask).count_ones() as u8,
            },
            IfAddr::V6(v6) if v6.netmask.is_unspecified() => InterfaceAddress::Bare(IpAddr::V6(v6.ip)),
            IfAddr::V6(v6) => InterfaceAddress::Cidr {
                ip: IpAddr::V6(v6.ip),
                prefix: u128::from(v6.netmask).count_ones() as u8,
            },
        }
    }
}

/// A local network interface and the addresses bound to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalInterface {
    pub name: String,
    pub addresses: Vec<InterfaceAddress>,
}

impl LocalInterface {
    pub fn new(name: impl Into<String>, addresses: Vec<InterfaceAddress>) -> Self {
        Self {
            name: name.into(),
            addresses,
        }
    }

    pub fn owns(&self, ip: Ipv4Addr) -> bool {
        self.addresses.iter().any(|addr| addr.matches(ip))
    }
}

/// Where interface tables come from
pub trait InterfaceSource {
    fn interfaces(&self) -> io::Result<Vec<LocalInterface>>;
}

/// The interface table of the running host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInterfaces;

impl InterfaceSource for SystemInterfaces {
    fn interfaces(&self) -> io::Result<Vec<LocalInterface>> {
        // get_if_addrs yields one entry per (interface, address) pair
        let mut interfaces: Vec<LocalInterface> = Vec::new();
        for entry in get_if_addrs::get_if_addrs()? {
            let addr = InterfaceAddress::from_if_addr(&entry.addr);
            match interfaces.iter_mut().find(|iface| iface.name == entry.name) {
                Some(iface) => iface.addresses.push(addr),
                None => interfaces.push(LocalInterface::new(entry.name, vec![addr])),
            }
        }
        Ok(interfaces)
    }
}

/// Find the interface that owns `ip`.
///
/// Interfaces are scanned in the order the source reports them and the
/// first owner wins; if several interfaces claim the same address no
/// further tie-break is applied.
pub fn find_interface_by_ip<S>(source: &S, ip: Ipv4Addr) -> Result<LocalInterface>
where
    S: InterfaceSource + ?Sized,
{
    debug!("request ip: {}", ip);
    let interfaces = source.interfaces().map_err(Error::Enumerate)?;
    let iface = interfaces
        .into_iter()
        .find(|iface| iface.owns(ip))
        .ok_or(Error::NotFound(ip))?;
    debug!("ip {} bound to iface {}", ip, iface.name);
    Ok(iface)
}

/// Parse a caller supplied source IP
pub fn parse_source_ip(s: &str) -> Result<Ipv4Addr> {
    s.trim()
        .parse()
        .map_err(|_| Error::InvalidSourceIp(s.to_string()))
}

/// All interfaces of the running host
pub fn list_interfaces() -> Result<Vec<LocalInterface>> {
    SystemInterfaces.interfaces().map_err(Error::Enumerate)
}
