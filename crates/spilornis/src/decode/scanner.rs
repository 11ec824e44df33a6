//! Element boundary finder.
//!
//! `find_element` locates one element without decoding it; `ElementIter`
//! walks a whole list with it.

use crate::chars::{BACKSLASH, CLOSE_BRACE, OPEN_BRACE, QUOTE, is_space};
use crate::decode::escape::parse_backslash;
use crate::error::{Error, Result};

/// Most code units of trailing garbage quoted in a syntax error.
const ERROR_CONTEXT: usize = 20;

/// Location of one element inside a list, delimiters excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawElement {
    pub start: usize,
    pub len: usize,
    /// Found between an outer `{`/`}` pair; the content is taken verbatim.
    pub braced: bool,
}

impl RawElement {
    pub fn slice<'a>(&self, list: &'a [u16]) -> &'a [u16] {
        &list[self.start..self.start + self.len]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Free,
    InBraces(usize),
    InQuotes,
}

fn skip_space(list: &[u16], mut p: usize) -> usize {
    while p < list.len() && is_space(list[p]) {
        p += 1;
    }
    p
}

fn trailing_garbage(list: &[u16], p: usize, delimiter: &str) -> Error {
    let end = list[p..]
        .iter()
        .take(ERROR_CONTEXT)
        .position(|&c| is_space(c))
        .map_or_else(|| (p + ERROR_CONTEXT).min(list.len()), |n| p + n);
    Error::syntax(format!(
        "list element in {} followed by \"{}\" instead of space",
        delimiter,
        String::from_utf16_lossy(&list[p..end])
    ))
}

/// Finds the element starting at or after `from`.
///
/// Returns the element (or `None` when only whitespace remains) and the
/// offset just past the whitespace that follows it. Backslash sequences are
/// skipped, not collapsed.
pub fn find_element(list: &[u16], from: usize) -> Result<(Option<RawElement>, usize)> {
    let limit = list.len();
    let mut p = skip_space(list, from);
    if p == limit {
        return Ok((None, limit));
    }

    let mut state = match list[p] {
        OPEN_BRACE => {
            p += 1;
            State::InBraces(1)
        }
        QUOTE => {
            p += 1;
            State::InQuotes
        }
        _ => State::Free,
    };
    let start = p;

    while p < limit {
        let c = list[p];
        match c {
            OPEN_BRACE => {
                if let State::InBraces(depth) = state {
                    state = State::InBraces(depth + 1);
                }
            }
            CLOSE_BRACE => match state {
                State::InBraces(depth) if depth > 1 => state = State::InBraces(depth - 1),
                State::InBraces(_) => {
                    let len = p - start;
                    p += 1;
                    if p < limit && !is_space(list[p]) {
                        return Err(trailing_garbage(list, p, "braces"));
                    }
                    return Ok(finish(list, start, len, true, p));
                }
                _ => {}
            },
            BACKSLASH => {
                let seq = parse_backslash(&list[p..]);
                p += seq.consumed() - 1;
            }
            QUOTE if state == State::InQuotes => {
                let len = p - start;
                p += 1;
                if p < limit && !is_space(list[p]) {
                    return Err(trailing_garbage(list, p, "quotes"));
                }
                return Ok(finish(list, start, len, false, p));
            }
            _ if is_space(c) && state == State::Free => {
                return Ok(finish(list, start, p - start, false, p));
            }
            _ => {}
        }
        p += 1;
    }

    match state {
        State::InBraces(_) => Err(Error::syntax("unmatched open brace in list")),
        State::InQuotes => Err(Error::syntax("unmatched open quote in list")),
        State::Free => Ok(finish(list, start, limit - start, false, limit)),
    }
}

fn finish(
    list: &[u16],
    start: usize,
    len: usize,
    braced: bool,
    p: usize,
) -> (Option<RawElement>, usize) {
    (Some(RawElement { start, len, braced }), skip_space(list, p))
}

/// Lazily yields the raw elements of a list.
///
/// Iteration stops after the first error.
pub struct ElementIter<'a> {
    list: &'a [u16],
    pos: usize,
    done: bool,
}

pub fn iter(list: &[u16]) -> ElementIter<'_> {
    ElementIter {
        list,
        pos: 0,
        done: false,
    }
}

impl<'a> ElementIter<'a> {
    /// The list being walked.
    pub fn list(&self) -> &'a [u16] {
        self.list
    }
}

impl Iterator for ElementIter<'_> {
    type Item = Result<RawElement>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match find_element(self.list, self.pos) {
            Ok((Some(element), next)) => {
                self.pos = next;
                Some(Ok(element))
            }
            Ok((None, _)) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
