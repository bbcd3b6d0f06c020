//! Base module

use core::{fmt, net, str};

use crate::v6::{self, BITS_LEN};
use crate::parser::{parse, ParseError};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
///CIDR representation of IPv6 network
pub struct Cidr {
    prefix: u8,
    addr: net::Ipv6Addr,
}

impl Cidr {
    #[inline]
    ///Constructs new CIDR verifying that `prefix` fits provided `addrs`
    ///
    ///Returns `None` if `prefix` is greater than 128
    pub const fn new(addr: net::Ipv6Addr, prefix: u8) -> Option<Self> {
        if prefix > BITS_LEN {
            None
        } else {
            Some(Self {
                addr,
                prefix,
            })
        }
    }

    #[inline(always)]
    ///Constructs new CIDR for single `addr`
    pub const fn new_single(addr: net::Ipv6Addr) -> Self {
        Self {
            addr,
            prefix: BITS_LEN,
        }
    }

    #[inline(always)]
    ///Returns address
    pub const fn addr(&self) -> net::Ipv6Addr {
        self.addr
    }

    #[inline(always)]
    ///Returns prefix
    pub const fn prefix(&self) -> u8 {
        self.prefix
    }

    #[inline]
    ///Computes network address, which is `addr` with host part zeroed
    pub const fn network_addr(&self) -> net::Ipv6Addr {
        let octets = v6::mask(self.addr.octets(), self.prefix);
        net::Ipv6Addr::from_bits(u128::from_be_bytes(octets))
    }

    #[inline]
    ///Checks if a given `addr` is contained within `self`
    pub const fn contains(&self, addr: net::Ipv6Addr) -> bool {
        let octets = v6::mask(addr.octets(), self.prefix);
        u128::from_be_bytes(octets) == self.network_addr().to_bits()
    }
}

impl fmt::Display for Cidr {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::format::fmt_network(fmt, &self.addr.octets(), self.prefix)
    }
}

impl str::FromStr for Cidr {
    type Err = ParseError;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (addr, prefix) = parse(text.as_bytes())?;
        Ok(Self {
            addr: net::Ipv6Addr::from_bits(u128::from_be_bytes(addr)),
            prefix,
        })
    }
}
