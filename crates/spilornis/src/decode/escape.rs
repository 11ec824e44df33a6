//! Backslash escape decoding.
//!
//! Escapes are decoded against an explicit bound: `parse_backslash` is handed
//! the slice that starts at the backslash and ends at the element boundary,
//! and never looks past it.

use crate::chars::{
    BACKSLASH, SPACE, TAB, ascii, digit_value, is_bin_digit, is_dec_digit, is_hex_digit,
    is_oct_digit,
};

const REPLACEMENT: u16 = 0xFFFD;

/// The result of decoding one backslash sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backslash {
    consumed: usize,
    units: [u16; 2],
    len: usize,
}

impl Backslash {
    fn nothing() -> Self {
        Self {
            consumed: 0,
            units: [0; 2],
            len: 0,
        }
    }

    fn from_value(consumed: usize, value: u32) -> Self {
        if let Ok(unit) = u16::try_from(value) {
            return Self {
                consumed,
                units: [unit, 0],
                len: 1,
            };
        }
        let mut units = [0u16; 2];
        let len = match char::from_u32(value) {
            Some(c) => c.encode_utf16(&mut units).len(),
            None => {
                units[0] = REPLACEMENT;
                1
            }
        };
        Self {
            consumed,
            units,
            len,
        }
    }

    /// Number of source code units making up the sequence, backslash included.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Decoded code units: one, or two for a surrogate pair.
    pub fn units(&self) -> &[u16] {
        &self.units[..self.len]
    }
}

fn scan_digits(
    src: &[u16],
    max: usize,
    is_digit: fn(u16) -> bool,
    step: fn(u32, u32) -> u32,
) -> (usize, u32) {
    let mut value = 0u32;
    let mut count = 0usize;
    for &c in src.iter().take(max) {
        if !is_digit(c) {
            break;
        }
        value = step(value, digit_value(c));
        count += 1;
    }
    (count, value)
}

/// Scans at most `max` binary digits. Returns the digits consumed and their value.
pub fn parse_binary(src: &[u16], max: usize) -> (usize, u32) {
    scan_digits(src, max, is_bin_digit, |acc, d| (acc << 1) | d)
}

/// Scans at most `max` octal digits.
pub fn parse_octal(src: &[u16], max: usize) -> (usize, u32) {
    scan_digits(src, max, is_oct_digit, |acc, d| (acc << 3) | d)
}

/// Scans at most `max` decimal digits.
pub fn parse_decimal(src: &[u16], max: usize) -> (usize, u32) {
    scan_digits(src, max, is_dec_digit, |acc, d| {
        acc.wrapping_mul(10).wrapping_add(d)
    })
}

/// Scans at most `max` hexadecimal digits, either case.
pub fn parse_hex(src: &[u16], max: usize) -> (usize, u32) {
    scan_digits(src, max, is_hex_digit, |acc, d| (acc << 4) | d)
}

/// Builds the result of a lettered numeric escape from its scanned digits.
/// Without digits the escape stands for the bare letter.
fn radix_escape(letter: u16, (count, value): (usize, u32), byte_only: bool) -> Backslash {
    if count == 0 {
        return Backslash::from_value(2, u32::from(letter));
    }
    let value = if byte_only { value & 0xFF } else { value };
    Backslash::from_value(2 + count, value)
}

/// Decodes the backslash sequence at the start of `src`.
///
/// `src[0]` must be the backslash; `src.len()` is the number of code units
/// the sequence may draw from. An empty `src` consumes nothing.
pub fn parse_backslash(src: &[u16]) -> Backslash {
    let num_chars = src.len();
    if num_chars == 0 {
        return Backslash::nothing();
    }
    if num_chars == 1 {
        return Backslash::from_value(1, u32::from(BACKSLASH));
    }

    let trigger = src[1];
    let digits = &src[2..];
    match ascii(trigger) {
        0 => Backslash::from_value(1, u32::from(BACKSLASH)),
        b'a' => Backslash::from_value(2, 0x07),
        b'b' => Backslash::from_value(2, 0x08),
        b'f' => Backslash::from_value(2, 0x0C),
        b'n' => Backslash::from_value(2, 0x0A),
        b'r' => Backslash::from_value(2, 0x0D),
        b't' => Backslash::from_value(2, 0x09),
        b'v' => Backslash::from_value(2, 0x0B),
        b'\\' => Backslash::from_value(2, u32::from(BACKSLASH)),
        b'B' => radix_escape(trigger, parse_binary(digits, 8), true),
        b'o' => radix_escape(trigger, parse_octal(digits, 3), true),
        b'd' => radix_escape(trigger, parse_decimal(digits, 3), true),
        b'x' => radix_escape(trigger, parse_hex(digits, 2), true),
        b'X' => radix_escape(trigger, parse_hex(digits, 2), false),
        b'u' => radix_escape(trigger, parse_hex(digits, 4), false),
        b'U' => radix_escape(trigger, parse_hex(digits, 8), false),
        b'\n' => {
            let mut count = 2;
            while count < num_chars && matches!(src[count], SPACE | TAB) {
                count += 1;
            }
            Backslash::from_value(count, u32::from(SPACE))
        }
        b'0'..=b'7' => {
            // legacy \ooo form, no letter prefix
            let (count, value) = parse_octal(&src[1..], 3);
            Backslash::from_value(1 + count, value & 0xFF)
        }
        _ => Backslash::from_value(2, u32::from(trigger)),
    }
}

/// Copies `src` onto the end of `dst`, replacing every backslash sequence with
/// what it decodes to. Returns the number of code units appended.
pub fn copy_and_collapse(src: &[u16], dst: &mut Vec<u16>) -> usize {
    let start = dst.len();
    let mut i = 0usize;
    while i < src.len() {
        let c = src[i];
        if c == BACKSLASH {
            let seq = parse_backslash(&src[i..]);
            dst.extend_from_slice(seq.units());
            i += seq.consumed();
        } else {
            dst.push(c);
            i += 1;
        }
    }
    dst.len() - start
}
