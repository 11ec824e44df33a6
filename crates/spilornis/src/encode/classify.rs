//! Deciding how an element must be written.
//!
//! An element is written in one of three ways, preferring the earlier ones:
//! as-is when nothing in it is special, wrapped in braces when it holds
//! whitespace or substitution characters but its braces balance, and with
//! backslashes in front of every special character otherwise.

use core::ops::{BitOr, BitOrAssign};

use crate::chars::{BACKSLASH, CLOSE_BRACE, NEWLINE, OPEN_BRACE, QUOTE, ascii, is_space};
use crate::decode::escape::parse_backslash;

/// Encoding hints gathered by [`scan_element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags(u8);

impl Flags {
    pub const NONE: Flags = Flags(0);
    /// Braces cannot wrap the element; escape instead.
    pub const DONT_USE_BRACES: Flags = Flags(1);
    /// Wrapping the element in braces is enough to protect it.
    pub const USE_BRACES: Flags = Flags(2);
    /// The element's braces do not balance, so they must be escaped too.
    pub const BRACES_UNMATCHED: Flags = Flags(4);
    /// Leave a leading `#` alone; the element is not first in its list.
    pub const DONT_QUOTE_HASH: Flags = Flags(8);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when the element will be written inside braces.
    pub const fn braces(self) -> bool {
        self.contains(Self::USE_BRACES) && !self.contains(Self::DONT_USE_BRACES)
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

const ESCAPE_ONLY: Flags = Flags(Flags::DONT_USE_BRACES.0 | Flags::BRACES_UNMATCHED.0);

/// Scans `element` once and returns an upper bound on the code units
/// `convert_element` will write for it, together with its flags.
///
/// The bound covers a backslash before every unit plus a pair of braces.
pub fn scan_element(element: &[u16]) -> (usize, Flags) {
    let mut flags = Flags::NONE;
    let mut nesting = 0isize;

    if matches!(element.first(), None | Some(&OPEN_BRACE) | Some(&QUOTE)) {
        flags |= Flags::USE_BRACES;
    }

    let mut p = 0usize;
    while p < element.len() {
        let c = element[p];
        match c {
            OPEN_BRACE => nesting += 1,
            CLOSE_BRACE => {
                nesting -= 1;
                if nesting < 0 {
                    flags |= ESCAPE_ONLY;
                }
            }
            BACKSLASH => {
                if p + 1 >= element.len() || element[p + 1] == NEWLINE {
                    flags = ESCAPE_ONLY;
                } else {
                    let seq = parse_backslash(&element[p..]);
                    p += seq.consumed() - 1;
                    flags |= Flags::USE_BRACES;
                }
            }
            _ if matches!(ascii(c), b'[' | b'$' | b';') || is_space(c) => {
                flags |= Flags::USE_BRACES;
            }
            _ => {}
        }
        p += 1;
    }

    if nesting != 0 {
        flags = ESCAPE_ONLY;
    }

    (2 * element.len() + 2, flags)
}
