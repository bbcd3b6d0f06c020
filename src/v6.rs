//!IPv6 address layout and prefix masking

use core::net;

///Number of bytes within IPv6 address
pub const ADDR_LEN: usize = 16;
///Number of bits within IPv6 address
pub const BITS_LEN: u8 = net::Ipv6Addr::BITS as u8;

///IPv6 address in network byte order
pub type Address = [u8; ADDR_LEN];

#[inline]
///Zeroes host part of `addr` in place, keeping leading `prefix` bits.
///
///`prefix` greater than [BITS_LEN](constant.BITS_LEN.html) leaves address unchanged.
pub const fn mask_in_place(addr: &mut Address, prefix: u8) {
    if prefix >= BITS_LEN {
        return;
    }

    let bytes = (prefix as usize + 7) / 8;
    let mut idx = bytes;
    while idx < ADDR_LEN {
        addr[idx] = 0;
        idx += 1;
    }

    let rem = prefix % 8;
    if rem != 0 {
        addr[bytes - 1] &= 0xFFu8 << (8 - rem);
    }
}

#[inline]
///Returns copy of `addr` with host part zeroed according to `prefix`
pub const fn mask(mut addr: Address, prefix: u8) -> Address {
    mask_in_place(&mut addr, prefix);
    addr
}

#[inline(always)]
///Returns 16-bit group at `idx` (0..8)
pub const fn group(addr: &Address, idx: usize) -> u16 {
    u16::from_be_bytes([addr[idx * 2], addr[idx * 2 + 1]])
}
