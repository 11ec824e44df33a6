//! ASCII character classes used by every scanning routine.
//!
//! All predicates work on single UTF-16 code units and never consult the
//! locale; anything outside ASCII is simply "not a member".

pub const SPACE: u16 = b' ' as u16;
pub const TAB: u16 = b'\t' as u16;
pub const NEWLINE: u16 = b'\n' as u16;
pub const BACKSLASH: u16 = b'\\' as u16;
pub const OPEN_BRACE: u16 = b'{' as u16;
pub const CLOSE_BRACE: u16 = b'}' as u16;
pub const QUOTE: u16 = b'"' as u16;
pub const HASH: u16 = b'#' as u16;
pub const NUL: u16 = 0;

/// The code unit as an ASCII byte, or `u8::MAX` when it is not ASCII.
///
/// Lets scanners match on byte literals; no ASCII rule mentions `0xFF`.
#[inline]
pub(crate) fn ascii(c: u16) -> u8 {
    if c < 0x80 { c as u8 } else { u8::MAX }
}

/// Space, form feed, newline, carriage return, tab or vertical tab.
#[inline]
pub fn is_space(c: u16) -> bool {
    matches!(c, 0x20 | 0x0C | 0x0A | 0x0D | 0x09 | 0x0B)
}

#[inline]
pub fn is_bin_digit(c: u16) -> bool {
    matches!(c, 0x30..=0x31)
}

#[inline]
pub fn is_oct_digit(c: u16) -> bool {
    matches!(c, 0x30..=0x37)
}

#[inline]
pub fn is_dec_digit(c: u16) -> bool {
    matches!(c, 0x30..=0x39)
}

#[inline]
pub fn is_hex_digit(c: u16) -> bool {
    matches!(c, 0x30..=0x39 | 0x41..=0x46 | 0x61..=0x66)
}

/// Numeric value of a digit already accepted by one of the predicates above.
#[inline]
pub(crate) fn digit_value(c: u16) -> u32 {
    let c = u32::from(c);
    if c >= u32::from(b'a') {
        10 + c - u32::from(b'a')
    } else if c >= u32::from(b'A') {
        10 + c - u32::from(b'A')
    } else {
        c - u32::from(b'0')
    }
}
