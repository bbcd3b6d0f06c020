use core::fmt::{self, Write};

use thiserror::Error;
use tracing::trace;

use crate::v6::{self, Address, BITS_LEN};

///Maximum length of presentation, `xxxx:xxxx:xxxx:xxxx:xxxx:xxxx:255.255.255.255/128` plus NUL
pub const PRESENTATION_CAPACITY: usize = 50;

///Presentation text of IPv6 network
pub type Presentation = heapless::String<PRESENTATION_CAPACITY>;

#[derive(Debug, Error, PartialEq, Eq)]
///Possible errors formatting IPv6 network
pub enum FormatError {
    #[error("Prefix '{0}' is greater than 128")]
    ///Prefix is greater than 128
    InvalidPrefixLength(u8),
    #[error("Presentation requires {required} bytes but buffer has {capacity}")]
    ///Destination cannot fit presentation with terminating NUL
    BufferTooSmall {
        ///Presentation length including NUL
        required: usize,
        ///Destination length
        capacity: usize,
    },
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
///Run of zero 16-bit groups
pub struct ZeroRun {
    ///Index of the first group
    pub pos: u8,
    ///Number of groups
    pub len: u8,
}

impl ZeroRun {
    ///Finds the longest run of zero groups among first `words` groups of `addr`
    ///
    ///When runs are of equal length, the first one is returned.
    pub const fn find(addr: &Address, words: u8) -> Self {
        let mut best = Self { pos: 0, len: 0 };
        let mut current = Self { pos: 0, len: 0 };

        let mut idx = 0;
        while idx < words {
            if v6::group(addr, idx as usize) == 0 {
                if current.len == 0 {
                    current.pos = idx;
                }
                current.len += 1;
            } else {
                if current.len > best.len {
                    best = current;
                }
                current.len = 0;
            }
            idx += 1;
        }

        if current.len > best.len {
            best = current;
        }
        best
    }

    ///Determines whether `addr` carries IPv4 in its last 32 bits, judging by zero run.
    ///
    ///- Run of 6 groups at the start means IPv4-compatible address;
    ///- Run of 5 groups at the start, followed by `ffff` means IPv4-mapped address;
    ///- Run of 7 groups at the start is IPv4-compatible unless address is `::1`, in which case
    ///run is shortened to 6 so that 7th group is printed as part of IPv4.
    pub const fn detect_ipv4(&mut self, addr: &Address, words: u8) -> bool {
        if self.len == words || self.pos != 0 {
            return false;
        }

        match self.len {
            6 => true,
            5 => v6::group(addr, 5) == 0xffff,
            7 if v6::group(addr, 7) != 0x0001 => {
                self.len = 6;
                true
            },
            _ => false,
        }
    }

    #[inline(always)]
    const fn contains(&self, idx: u8) -> bool {
        idx >= self.pos && idx < self.pos + self.len
    }
}

//Writes masked `addr` as presentation
fn write_presentation<W: Write>(out: &mut W, addr: &Address, bits: u8) -> fmt::Result {
    if bits == 0 {
        return out.write_str("::");
    }

    //Always show at least 2 groups
    let words = match (bits + 15) / 16 {
        1 => 2,
        words => words,
    };

    let mut zeros = ZeroRun::find(addr, words);
    let is_ipv4 = zeros.detect_ipv4(addr, words);

    let mut is_empty = true;
    for idx in 0..words {
        if zeros.len > 1 && zeros.contains(idx) {
            if idx == zeros.pos {
                out.write_char(':')?;
            }
            if idx == words - 1 {
                out.write_char(':')?;
            }
        } else if is_ipv4 && idx > 5 {
            let offset = idx as usize * 2;
            out.write_char(if idx == 6 { ':' } else { '.' })?;
            out.write_fmt(format_args!("{}", addr[offset]))?;
            //Last octet is out of prefix
            if idx != 7 || bits > 120 {
                out.write_fmt(format_args!(".{}", addr[offset + 1]))?;
            }
        } else {
            if !is_empty {
                out.write_char(':')?;
            }
            out.write_fmt(format_args!("{:x}", v6::group(addr, idx as usize)))?;
        }
        is_empty = false;
    }

    if bits != BITS_LEN {
        out.write_fmt(format_args!("/{bits}"))?;
    }
    Ok(())
}

///Formats IPv6 network `addr` with `bits` prefix into presentation.
///
///Host part of `addr` is zeroed before formatting and only groups within prefix are printed.
///Prefix is appended unless it is 128.
///
///Returns `Err` if `bits` is greater than 128
pub fn format(addr: &Address, bits: u8) -> Result<Presentation, FormatError> {
    if bits > BITS_LEN {
        trace!("rejected prefix length {bits}");
        return Err(FormatError::InvalidPrefixLength(bits));
    }

    let addr = v6::mask(*addr, bits);
    let mut text = Presentation::new();
    //Capacity covers the longest presentation
    let _ = write_presentation(&mut text, &addr, bits);
    Ok(text)
}

///Formats IPv6 network into `dst` followed by NUL, returning presentation length.
///
///`dst` is untouched on error.
pub fn format_into(addr: &Address, bits: u8, dst: &mut [u8]) -> Result<usize, FormatError> {
    let text = format(addr, bits)?;
    let len = text.len();
    if len >= dst.len() {
        trace!("presentation '{text}' does not fit {} bytes", dst.len());
        return Err(FormatError::BufferTooSmall {
            required: len + 1,
            capacity: dst.len(),
        });
    }

    dst[..len].copy_from_slice(text.as_bytes());
    dst[len] = 0;
    Ok(len)
}

///Writes presentation of network into formatter, host part of `addr` is zeroed.
pub(crate) fn fmt_network(fmt: &mut fmt::Formatter<'_>, addr: &Address, bits: u8) -> fmt::Result {
    let addr = v6::mask(*addr, bits);
    write_presentation(fmt, &addr, bits)
}
