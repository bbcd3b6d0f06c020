//!Embedded IPv4 module

use crate::parser::{parse_prefix, ParseError};

///Number of bytes within IPv4 address
pub const ADDR_LEN: usize = 4;

///Parses dotted decimal IPv4 address embedded at the tail of IPv6 presentation
///
///`text` must start at the first IPv4 component and may be followed by CIDR prefix.
///
///Returns octets and prefix, which is 128 when not specified.
///
///When prefix is specified, trailing components may be omitted (but at least 2 must be present),
///in which case they are zero, mirroring presentation of partially masked IPv4 tail.
pub fn parse_embedded(text: &[u8]) -> Result<([u8; ADDR_LEN], u8), ParseError> {
    let mut octets = [0u8; ADDR_LEN];
    let mut size = 0usize;
    let mut value = 0u16;
    let mut digits = 0u8;
    let mut prefix = None;

    for (idx, ch) in text.iter().enumerate() {
        match ch {
            b'0'..=b'9' => {
                if digits != 0 && value == 0 {
                    return Err(ParseError::Ipv4LeadingZero);
                }

                digits += 1;
                value = value * 10 + (ch - b'0') as u16;
                if value > 255 {
                    return Err(ParseError::Ipv4ComponentOverflow(value));
                }
            },
            b'.' => {
                if digits == 0 {
                    return Err(ParseError::Ipv4EmptyComponent);
                }
                if size >= ADDR_LEN - 1 {
                    return Err(ParseError::Ipv4InvalidComponentSize(size as u8 + 2));
                }

                octets[size] = value as u8;
                size += 1;
                value = 0;
                digits = 0;
            },
            b'/' => {
                prefix = Some(parse_prefix(&text[idx + 1..])?);
                break;
            },
            0 => break,
            ch => return Err(ParseError::Ipv4UnexpectedCharacter(*ch as char)),
        }
    }

    if digits == 0 {
        return Err(ParseError::Ipv4EmptyComponent);
    }
    octets[size] = value as u8;
    size += 1;

    match prefix {
        None if size == ADDR_LEN => Ok((octets, crate::v6::BITS_LEN)),
        Some(prefix) if size >= 2 => Ok((octets, prefix)),
        _ => Err(ParseError::Ipv4InvalidComponentSize(size as u8)),
    }
}
