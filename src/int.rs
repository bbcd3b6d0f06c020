//!Bounded-length integer parsing
//!
//!Parser operates on a byte span rather than NUL terminated string and never reads past it.
//!Semantics follow `strtol`: optional leading whitespace and sign, then digits of the requested radix.

///Maximum number of significant digits considered (base 2 representation of 32-bit integer)
pub const MAX_DIGITS: usize = 32;

#[inline(always)]
const fn digit_value(ch: u8, radix: u32) -> Option<u32> {
    let value = match ch {
        b'0'..=b'9' => (ch - b'0') as u32,
        b'a'..=b'z' => (ch - b'a') as u32 + 10,
        b'A'..=b'Z' => (ch - b'A') as u32 + 10,
        _ => return None,
    };

    if value < radix {
        Some(value)
    } else {
        None
    }
}

///Parses signed 32-bit integer of `radix` from the start of `text`
///
///Returns parsed value and offset of the first unconsumed byte.
///
///Returns `(0, 0)` when `text` contains no digits or `radix` is outside of `2..=36`.
///
///Overflowing values saturate to `i32::MIN` or `i32::MAX`.
///
///Only the first [MAX_DIGITS](constant.MAX_DIGITS.html) digits after sign are considered,
///the rest of digits are reported as unconsumed.
pub const fn parse_i32(text: &[u8], radix: u32) -> (i32, usize) {
    if radix < 2 || radix > 36 {
        return (0, 0);
    }

    let mut idx = 0;
    while idx < text.len() && text[idx].is_ascii_whitespace() {
        idx += 1;
    }

    let mut is_negative = false;
    if idx < text.len() && (text[idx] == b'-' || text[idx] == b'+') {
        is_negative = text[idx] == b'-';
        idx += 1;
    }

    let span_end = if text.len() - idx > MAX_DIGITS {
        idx + MAX_DIGITS
    } else {
        text.len()
    };

    let digits_start = idx;
    //Accumulate as negative to cover i32::MIN without overflow
    let mut value: i64 = 0;
    let mut is_overflow = false;
    while idx < span_end {
        let digit = match digit_value(text[idx], radix) {
            Some(digit) => digit,
            None => break,
        };

        if !is_overflow {
            value = value * radix as i64 - digit as i64;
            if value < i32::MIN as i64 {
                is_overflow = true;
            }
        }
        idx += 1;
    }

    if idx == digits_start {
        return (0, 0);
    }

    let value = if is_negative {
        if is_overflow {
            i32::MIN
        } else {
            value as i32
        }
    } else if is_overflow || value < -(i32::MAX as i64) {
        i32::MAX
    } else {
        (-value) as i32
    };

    (value, idx)
}
