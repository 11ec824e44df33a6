//! Splitting list text into elements.

pub mod escape;
pub mod scanner;

use tracing::debug;

use crate::buffer::reserve;
use crate::chars::{NUL, is_space};
use crate::error::{Error, Result};
use crate::list::{ElementList, Span};
use crate::options::Options;

use self::escape::copy_and_collapse;
use self::scanner::find_element;

/// Upper bound on the number of elements in `text`, plus one.
///
/// Every run of whitespace, however long, can separate at most one pair of
/// elements.
fn estimate_elements(text: &[u16]) -> usize {
    let mut size = 2usize;
    let mut in_space = false;
    for &c in text {
        let space = is_space(c);
        if space && !in_space {
            size += 1;
        }
        in_space = space;
    }
    size
}

pub fn split_list_with(text: &[u16], options: &Options) -> Result<ElementList> {
    options.check_length(text.len())?;
    split_inner(text).inspect_err(|e| debug!(error = %e, length = text.len(), "split failed"))
}

fn split_inner(text: &[u16]) -> Result<ElementList> {
    let estimate = estimate_elements(text);
    let mut spans = reserve::<Span>("list element lengths", estimate)?;
    let mut arena = reserve::<u16>("list element text", text.len() + 1)?;

    let mut pos = 0usize;
    while pos < text.len() {
        let (element, next) = find_element(text, pos)?;
        pos = next;
        let Some(element) = element else {
            break;
        };
        if spans.len() >= estimate {
            return Err(Error::Internal("wrong estimated list size".into()));
        }

        let start = arena.len();
        let raw = element.slice(text);
        let len = if element.braced {
            arena.extend_from_slice(raw);
            raw.len()
        } else {
            copy_and_collapse(raw, &mut arena)
        };
        arena.push(NUL);
        spans.push(Span { start, len });
    }

    debug!(elements = spans.len(), length = text.len(), "split list");
    Ok(ElementList::from_parts(arena, spans))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn estimate_counts_runs_not_characters() {
        assert_eq!(estimate_elements(&w("")), 2);
        assert_eq!(estimate_elements(&w("a")), 2);
        assert_eq!(estimate_elements(&w("a   b")), 3);
        assert_eq!(estimate_elements(&w(" a \t\n b ")), 5);
    }

    #[test]
    fn estimate_is_never_exceeded() -> Result<()> {
        for text in ["a b c", "  a  ", "{a b} \"c d\" e\\ f", "a\n\nb\tc"] {
            let units = w(text);
            let list = split_list_with(&units, &Options::default())?;
            assert!(list.len() < estimate_elements(&units));
        }
        Ok(())
    }

    #[test]
    fn braced_content_is_verbatim() -> Result<()> {
        let list = split_list_with(&w("{a\\tb} a\\tb"), &Options::default())?;
        assert_eq!(list.get(0), Some(w("a\\tb").as_slice()));
        assert_eq!(list.get(1), Some(w("a\tb").as_slice()));
        Ok(())
    }

    #[test]
    fn length_limit_applies() {
        let opts = Options {
            max_length: Some(3),
            ..Options::default()
        };
        let err = split_list_with(&w("a b c"), &opts).unwrap_err();
        assert!(matches!(err, Error::TooLong { length: 5, limit: 3 }));
    }
}
