//! IP address and CIDR network parsing into canonical byte form

use ipnet::IpNet;
use std::cmp::Ordering;
use std::net::IpAddr;

/// Canonical fixed-width address bytes: 4 for IPv4, 16 for IPv6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressBytes {
    octets: [u8; 16],
    len: u8,
}

impl AddressBytes {
    pub fn as_bytes(&self) -> &[u8] {
        &self.octets[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl From<IpAddr> for AddressBytes {
    fn from(addr: IpAddr) -> Self {
        let mut octets = [0u8; 16];
        match addr {
            IpAddr::V4(v4) => {
                octets[..4].copy_from_slice(&v4.octets());
                Self { octets, len: 4 }
            }
            IpAddr::V6(v6) => {
                octets.copy_from_slice(&v6.octets());
                Self { octets, len: 16 }
            }
        }
    }
}

impl Ord for AddressBytes {
    /// Shorter addresses first, then unsigned byte-wise order
    fn cmp(&self, other: &Self) -> Ordering {
        self.len
            .cmp(&other.len)
            .then_with(|| self.as_bytes().cmp(other.as_bytes()))
    }
}

impl PartialOrd for AddressBytes {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A parsed network: address bytes plus prefix length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Network {
    pub address: AddressBytes,
    pub prefix_len: u8,
}

/// Parse raw IPv4 or IPv6 text; `None` when the text is not an address
pub fn parse_address(text: &str) -> Option<AddressBytes> {
    text.parse::<IpAddr>().ok().map(AddressBytes::from)
}

/// Parse `address/prefix` text; the address keeps any host bits as written
pub fn parse_cidr(text: &str) -> Option<Network> {
    let net = text.parse::<IpNet>().ok()?;
    Some(Network {
        address: AddressBytes::from(net.addr()),
        prefix_len: net.prefix_len(),
    })
}
