//!ASCII hex codec
//!
//!Encoding always produces upper case digits, which is independent from lower case digits of
//!IPv6 presentation.

use thiserror::Error;

const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

#[derive(Debug, Error, PartialEq, Eq)]
///Possible errors of hex codec
pub enum HexError {
    #[error("Output requires {required} bytes but buffer has {capacity}")]
    ///Destination cannot fit output
    BufferTooSmall {
        ///Required output length
        required: usize,
        ///Destination length
        capacity: usize,
    },
}

#[inline(always)]
///Returns number of ASCII characters required to encode `len` bytes
pub const fn encoded_len(len: usize) -> usize {
    len * 2
}

#[inline(always)]
///Returns number of bytes required to decode `len` ASCII characters
pub const fn decoded_len(len: usize) -> usize {
    (len + 1) / 2
}

#[inline(always)]
const fn nibble(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

///Encodes `src` as upper case hex into `dst`, returning number of characters written
pub fn encode(src: &[u8], dst: &mut [u8]) -> Result<usize, HexError> {
    let required = encoded_len(src.len());
    if dst.len() < required {
        return Err(HexError::BufferTooSmall {
            required,
            capacity: dst.len(),
        });
    }

    for (byte, out) in src.iter().zip(dst.chunks_exact_mut(2)) {
        out[0] = UPPER_DIGITS[(byte >> 4) as usize];
        out[1] = UPPER_DIGITS[(byte & 0x0F) as usize];
    }
    Ok(required)
}

///Decodes hex `src` of either case into `dst`
///
///Odd length input is decoded as if it was prefixed with `0`, i.e. `ABC` is the same as `0ABC`.
///
///Decoding stops at the first non-hex character.
///
///Returns number of bytes written and number of characters consumed.
///Trailing half of a byte is not consumed.
pub fn decode(src: &[u8], dst: &mut [u8]) -> Result<(usize, usize), HexError> {
    let required = decoded_len(src.len());
    if dst.len() < required {
        return Err(HexError::BufferTooSmall {
            required,
            capacity: dst.len(),
        });
    }

    let offset = src.len() % 2;
    let mut pos = offset;
    let mut high = 0u8;
    let mut is_half = false;

    for ch in src {
        let value = match nibble(*ch) {
            Some(value) => value,
            None => break,
        };

        if pos % 2 == 0 {
            high = value;
            is_half = true;
        } else {
            dst[pos / 2] = (high << 4) | value;
            is_half = false;
        }
        pos += 1;
    }

    Ok((pos / 2, pos - offset - is_half as usize))
}
