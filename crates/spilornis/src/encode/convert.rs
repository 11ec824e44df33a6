use crate::chars::{BACKSLASH, CLOSE_BRACE, HASH, OPEN_BRACE, ascii};
use crate::encode::classify::Flags;

/// Appends the list form of `element` to `dst`, guided by the flags
/// `scan_element` produced for it. Returns the number of code units written.
pub fn convert_element(element: &[u16], flags: Flags, dst: &mut Vec<u16>) -> usize {
    let start = dst.len();
    let Some(&lead) = element.first() else {
        dst.extend_from_slice(&[OPEN_BRACE, CLOSE_BRACE]);
        return 2;
    };

    let mut flags = flags;
    let guard_hash = lead == HASH && !flags.contains(Flags::DONT_QUOTE_HASH);
    if guard_hash {
        flags |= Flags::USE_BRACES;
    }

    if flags.braces() {
        dst.push(OPEN_BRACE);
        dst.extend_from_slice(element);
        dst.push(CLOSE_BRACE);
        return dst.len() - start;
    }

    let mut rest = element;
    if lead == OPEN_BRACE {
        // a bare leading brace would open a braced element
        dst.extend_from_slice(&[BACKSLASH, OPEN_BRACE]);
        rest = &element[1..];
        flags |= Flags::BRACES_UNMATCHED;
    } else if guard_hash {
        dst.extend_from_slice(&[BACKSLASH, HASH]);
        rest = &element[1..];
    }

    let escape_braces = flags.contains(Flags::BRACES_UNMATCHED);
    for &c in rest {
        match ascii(c) {
            b']' | b'[' | b'$' | b';' | b' ' | b'\\' | b'"' => {
                dst.extend_from_slice(&[BACKSLASH, c]);
            }
            b'{' | b'}' if escape_braces => {
                dst.extend_from_slice(&[BACKSLASH, c]);
            }
            0x0C => dst.extend_from_slice(&[BACKSLASH, u16::from(b'f')]),
            b'\n' => dst.extend_from_slice(&[BACKSLASH, u16::from(b'n')]),
            b'\r' => dst.extend_from_slice(&[BACKSLASH, u16::from(b'r')]),
            b'\t' => dst.extend_from_slice(&[BACKSLASH, u16::from(b't')]),
            0x0B => dst.extend_from_slice(&[BACKSLASH, u16::from(b'v')]),
            _ => dst.push(c),
        }
    }
    dst.len() - start
}
