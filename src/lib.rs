//! IPv6 network/presentation conversion
//!
//! Presentation follows RFC 4291 with RFC 5952 update:
//! - Groups are lower case hex without leading zeros;
//! - The longest run of zero groups (if longer than 1) is abbreviated as `::`;
//! - IPv4-mapped and IPv4-compatible addresses end with dotted decimal IPv4;
//! - Prefix is appended as `/bits` unless it is 128.
//!
//! Network is always printed up to its prefix, host part is zeroed.

#![no_std]
#![warn(missing_docs)]
#![allow(clippy::style)]

mod parser;
pub use parser::{parse, ParseError};
mod format;
pub use format::{format, format_into, FormatError, Presentation, ZeroRun, PRESENTATION_CAPACITY};
pub mod base;
pub use base::Cidr;
pub mod checksum;
pub mod hex;
pub mod int;
pub mod v4;
pub mod v6;

use tracing::trace;

///Converts IPv6 network from network to presentation format.
///
///Writes presentation of `addr` with host part zeroed according to `bits` into `dst`, followed by NUL.
///
///Returns length of presentation written, or 0 if `bits` is greater than 128 or `dst` cannot fit
///presentation with NUL, in which case `dst` is untouched.
pub fn ntop(addr: &v6::Address, bits: u8, dst: &mut [u8]) -> usize {
    match format_into(addr, bits, dst) {
        Ok(len) => len,
        Err(error) => {
            trace!("ntop failed: {error}");
            0
        }
    }
}

///Converts IPv6 network from presentation to network format.
///
///Writes address with host part zeroed into `dst`.
///
///Returns prefix (128 if not specified), or 0 if `text` is not valid presentation, in which case
///`dst` is untouched.
pub fn pton(text: &[u8], dst: &mut v6::Address) -> u8 {
    match parse(text) {
        Ok((addr, bits)) => {
            *dst = addr;
            bits
        },
        Err(_) => 0,
    }
}
