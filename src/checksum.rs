//!Upper-layer checksum of IPv6 packets (RFC 2460 section 8.1)
//!
//!Packet is expected to start with fixed IPv6 header immediately followed by the upper-layer header.

use thiserror::Error;
use tracing::trace;

///Length of fixed IPv6 header
pub const HEADER_LEN: usize = 40;
///Next header value of ICMPv6
pub const NEXT_HEADER_ICMP6: u8 = 58;
///Next header value of UDP
pub const NEXT_HEADER_UDP: u8 = 17;

const PAYLOAD_LEN_OFFSET: usize = 4;
const SRC_ADDR_OFFSET: usize = 8;
const ICMP6_CHECKSUM_OFFSET: usize = 2;
const UDP_CHECKSUM_OFFSET: usize = 6;

#[derive(Debug, Error, PartialEq, Eq)]
///Possible errors computing checksum
pub enum ChecksumError {
    #[error("Packet has {actual} bytes but requires {required}")]
    ///Packet is shorter than its headers or declared payload
    Truncated {
        ///Required packet length
        required: usize,
        ///Actual packet length
        actual: usize,
    },
}

#[inline(always)]
const fn add(sum: u16, value: u16) -> u16 {
    let (sum, is_carry) = sum.overflowing_add(value);
    sum + is_carry as u16
}

//One's complement sum of `data` as big-endian 16-bit words, odd byte is padded with zero
const fn sum(mut acc: u16, data: &[u8]) -> u16 {
    let mut idx = 0;
    while idx + 1 < data.len() {
        acc = add(acc, u16::from_be_bytes([data[idx], data[idx + 1]]));
        idx += 2;
    }

    if idx < data.len() {
        acc = add(acc, u16::from_be_bytes([data[idx], 0]));
    }
    acc
}

#[inline]
fn ensure_len(packet: &[u8], required: usize) -> Result<(), ChecksumError> {
    if packet.len() < required {
        trace!("packet of {} bytes is truncated, expected {required}", packet.len());
        Err(ChecksumError::Truncated {
            required,
            actual: packet.len(),
        })
    } else {
        Ok(())
    }
}

///Computes upper-layer checksum of `packet` with `next_header` protocol.
///
///Pseudo-header consists of source and destination addresses, payload length and `next_header`.
///Checksum field within upper-layer header is summed as is, so it must be zero to compute
///checksum, and a packet with valid checksum yields zero.
///
///Returns checksum in host byte order.
pub fn upper_layer(packet: &[u8], next_header: u8) -> Result<u16, ChecksumError> {
    ensure_len(packet, HEADER_LEN)?;
    let payload_len = u16::from_be_bytes([packet[PAYLOAD_LEN_OFFSET], packet[PAYLOAD_LEN_OFFSET + 1]]);
    let packet_len = HEADER_LEN + payload_len as usize;
    ensure_len(packet, packet_len)?;

    let mut acc = add(payload_len, next_header as u16);
    acc = sum(acc, &packet[SRC_ADDR_OFFSET..HEADER_LEN]);
    acc = sum(acc, &packet[HEADER_LEN..packet_len]);
    Ok(!acc)
}

///Zeroes ICMPv6 checksum field of `packet` and computes its checksum
pub fn icmp6(packet: &mut [u8]) -> Result<u16, ChecksumError> {
    let field = HEADER_LEN + ICMP6_CHECKSUM_OFFSET;
    ensure_len(packet, field + 2)?;
    packet[field..field + 2].fill(0);
    upper_layer(packet, NEXT_HEADER_ICMP6)
}

///Zeroes UDP checksum field of `packet` and computes its checksum
pub fn udp(packet: &mut [u8]) -> Result<u16, ChecksumError> {
    let field = HEADER_LEN + UDP_CHECKSUM_OFFSET;
    ensure_len(packet, field + 2)?;
    packet[field..field + 2].fill(0);
    upper_layer(packet, NEXT_HEADER_UDP)
}
