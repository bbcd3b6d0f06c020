use thiserror::Error;
use tracing::trace;

use crate::{int, v4, v6};
use crate::v6::{Address, ADDR_LEN, BITS_LEN};

#[derive(Debug, Error, PartialEq, Eq)]
///Possible errors parsing IPv6 presentation
pub enum ParseError {
    #[error("Input is too short to be IPv6 address")]
    ///Input is shorter than 2 characters
    TooShort,
    #[error("Leading ':' must be followed by ':'")]
    ///Address starts with single `:`
    InvalidLeadingColon,
    #[error("Encountered unexpected character '{0}' at idx={1}")]
    ///Unexpected character with position where it is encountered at
    UnexpectedCharacter(char, usize),
    #[error("Address component has more than 4 digits at idx={0}")]
    ///Hextet has more than 4 hexadecimal digits
    HextetTooLong(usize),
    #[error("IPv6 Address has more than 8 components")]
    ///Address components do not fit 16 bytes
    TooManyHextets,
    #[error("IPv6 contains more than 1 zero abbreviation")]
    ///Second `::` encountered
    MultipleZeroAbbrv,
    #[error("Invalid Cidr prefix")]
    ///Prefix is not a plain decimal number
    InvalidCidr,
    #[error("Prefix '{0}' is outside of 1..=128")]
    ///Prefix is not within `1..=128`
    CidrPrefixOutOfRange(i32),
    #[error("Encountered unexpected character '{0}' within IPv4 component")]
    ///Embedded IPv4 contains character other than digit, `.` or `/`
    Ipv4UnexpectedCharacter(char),
    #[error("IPv4 component is '{0}' while allowed range is 0..=255")]
    ///Embedded IPv4 component is greater than 255
    Ipv4ComponentOverflow(u16),
    #[error("IPv4 component has leading zero")]
    ///Embedded IPv4 component starts with 0 and has more digits
    Ipv4LeadingZero,
    #[error("IPv4 component is empty")]
    ///Embedded IPv4 has empty component
    Ipv4EmptyComponent,
    #[error("IPv4 Address has '{0}' components but expected 4")]
    ///Embedded IPv4 has invalid number of components
    Ipv4InvalidComponentSize(u8),
}

#[inline(always)]
const fn hex_value(ch: u8) -> Option<u16> {
    match ch {
        b'0'..=b'9' => Some((ch - b'0') as u16),
        b'a'..=b'f' => Some((ch - b'a') as u16 + 10),
        b'A'..=b'F' => Some((ch - b'A') as u16 + 10),
        _ => None,
    }
}

///Parses CIDR prefix after `/`
///
///Prefix must consist of decimal digits only and be within `1..=128`
pub(crate) fn parse_prefix(text: &[u8]) -> Result<u8, ParseError> {
    if !matches!(text.first(), Some(b'0'..=b'9')) {
        return Err(ParseError::InvalidCidr);
    }

    let (prefix, consumed) = int::parse_i32(text, 10);
    match text.get(consumed) {
        None | Some(0) => (),
        Some(_) => return Err(ParseError::InvalidCidr),
    }

    match prefix {
        1..=128 => Ok(prefix as u8),
        prefix => Err(ParseError::CidrPrefixOutOfRange(prefix)),
    }
}

struct Parser<'a> {
    text: &'a [u8],
    //Bytes in order of appearance, zero abbreviation is not included
    bytes: heapless::Vec<u8, ADDR_LEN>,
    //Offset within `bytes` where `::` was encountered
    zero_skip: Option<usize>,
    hextet: u16,
    digits: u8,
    //Start of the current component
    token_start: usize,
}

impl<'a> Parser<'a> {
    const fn new(text: &'a [u8]) -> Self {
        Self {
            text,
            bytes: heapless::Vec::new(),
            zero_skip: None,
            hextet: 0,
            digits: 0,
            token_start: 0,
        }
    }

    fn flush_hextet(&mut self) -> Result<(), ParseError> {
        if self.digits == 0 {
            return Ok(());
        }

        if self.bytes.len() + 2 > ADDR_LEN {
            return Err(ParseError::TooManyHextets);
        }
        self.bytes.extend_from_slice(&self.hextet.to_be_bytes()).map_err(|_| ParseError::TooManyHextets)?;
        self.hextet = 0;
        self.digits = 0;
        Ok(())
    }

    #[inline(always)]
    fn on_digit(&mut self, pos: usize, value: u16) -> Result<(), ParseError> {
        if self.digits >= 4 {
            return Err(ParseError::HextetTooLong(pos));
        }

        self.hextet = (self.hextet << 4) | value;
        self.digits += 1;
        Ok(())
    }

    #[inline(always)]
    fn on_v6_sep(&mut self, pos: usize) -> Result<(), ParseError> {
        if self.digits > 0 {
            self.flush_hextet()?;
        } else if self.zero_skip.is_none() {
            self.zero_skip = Some(self.bytes.len());
        } else {
            return Err(ParseError::MultipleZeroAbbrv);
        }

        self.token_start = pos + 1;
        Ok(())
    }

    //Consumes the rest of the input as embedded IPv4, returning prefix
    fn on_v4(&mut self) -> Result<u8, ParseError> {
        if self.bytes.len() + 4 > ADDR_LEN {
            return Err(ParseError::TooManyHextets);
        }

        //Digits seen so far belong to the first IPv4 component
        self.hextet = 0;
        self.digits = 0;

        let (octets, prefix) = v4::parse_embedded(&self.text[self.token_start..])?;
        self.bytes.extend_from_slice(&octets).map_err(|_| ParseError::TooManyHextets)?;
        Ok(prefix)
    }

    //Lays out parsed bytes into address, expanding zero abbreviation
    fn layout(&self) -> Address {
        let mut addr = [0u8; ADDR_LEN];
        match self.zero_skip {
            Some(skip) => {
                let (head, tail) = self.bytes.split_at(skip);
                addr[..head.len()].copy_from_slice(head);
                addr[ADDR_LEN - tail.len()..].copy_from_slice(tail);
            },
            None => addr[..self.bytes.len()].copy_from_slice(&self.bytes),
        }
        addr
    }

    fn parse(&mut self) -> Result<(Address, u8), ParseError> {
        if self.text.len() < 2 {
            return Err(ParseError::TooShort);
        }

        let mut idx = 0;
        //Leading `::` is a single zero abbreviation
        if self.text[0] == b':' {
            if self.text[1] != b':' {
                return Err(ParseError::InvalidLeadingColon);
            }
            idx = 1;
            self.token_start = 1;
        }

        let mut prefix = BITS_LEN;
        while idx < self.text.len() {
            let ch = self.text[idx];
            match ch {
                0 => break,
                b':' => self.on_v6_sep(idx)?,
                b'.' => {
                    prefix = self.on_v4()?;
                    break;
                },
                b'/' => {
                    prefix = parse_prefix(&self.text[idx + 1..])?;
                    break;
                },
                ch => match hex_value(ch) {
                    Some(value) => self.on_digit(idx, value)?,
                    None => return Err(ParseError::UnexpectedCharacter(ch as char, idx)),
                },
            }

            idx += 1;
        }

        self.flush_hextet()?;

        let mut addr = self.layout();
        v6::mask_in_place(&mut addr, prefix);
        Ok((addr, prefix))
    }
}

///Parses IPv6 presentation `text` with optional CIDR prefix into network address.
///
///Returns address with host part zeroed and prefix, which is 128 when not specified.
///
///Parsing stops at first NUL byte, if any.
pub fn parse(text: &[u8]) -> Result<(Address, u8), ParseError> {
    Parser::new(text).parse().inspect_err(|error| {
        trace!("rejected presentation {:?}: {error}", core::str::from_utf8(text).unwrap_or("<non-utf8>"));
    })
}
