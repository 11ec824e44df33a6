//! The result of a split: every element's text lives in one arena.

use std::fmt;

use crate::chars::NUL;
use crate::error::Result;

/// Written over the arena when an `ElementList` is released in debug builds.
pub const FREED_MARKER: u16 = 0xDDDD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) len: usize,
}

/// Decoded list elements.
///
/// All element text is stored back to back in a single buffer, each element
/// followed by a NUL code unit, so the arena can be handed to code expecting
/// terminated strings. Element lengths never include the terminator.
#[derive(Clone, Default)]
pub struct ElementList {
    text: Vec<u16>,
    spans: Vec<Span>,
}

impl ElementList {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(text: Vec<u16>, spans: Vec<Span>) -> Self {
        Self { text, spans }
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&[u16]> {
        self.spans
            .get(index)
            .map(|span| &self.text[span.start..span.start + span.len])
    }

    /// Length of every element in code units.
    pub fn lengths(&self) -> Vec<usize> {
        self.spans.iter().map(|span| span.len).collect()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            index: 0,
        }
    }

    /// The backing arena, terminators included.
    pub fn as_text(&self) -> &[u16] {
        &self.text
    }

    /// Appends an element, copying `element` into the arena.
    pub fn push(&mut self, element: &[u16]) {
        let start = self.text.len();
        self.text.extend_from_slice(element);
        self.text.push(NUL);
        self.spans.push(Span {
            start,
            len: element.len(),
        });
    }

    /// Every element as a `String`; fails on the first element that is not
    /// valid UTF-16 (an unpaired surrogate from a `\u` escape, say).
    pub fn to_strings(&self) -> Result<Vec<String>> {
        self.iter()
            .map(|element| String::from_utf16(element).map_err(Into::into))
            .collect()
    }

    /// Every element as a `String`, unpaired surrogates replaced by U+FFFD.
    pub fn to_strings_lossy(&self) -> Vec<String> {
        self.iter().map(String::from_utf16_lossy).collect()
    }
}

impl Drop for ElementList {
    fn drop(&mut self) {
        if cfg!(debug_assertions) {
            self.text.fill(FREED_MARKER);
        }
    }
}

impl PartialEq for ElementList {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for ElementList {}

impl fmt::Debug for ElementList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_strings_lossy()).finish()
    }
}

impl<'a> IntoIterator for &'a ElementList {
    type Item = &'a [u16];
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ElementList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = ElementList::new();
        let mut units = Vec::new();
        for s in iter {
            units.clear();
            units.extend(s.as_ref().encode_utf16());
            list.push(&units);
        }
        list
    }
}

pub struct Iter<'a> {
    list: &'a ElementList,
    index: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a [u16];

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.list.get(self.index)?;
        self.index += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.list.len() - self.index;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(feature = "serde")]
impl serde::Serialize for ElementList {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(&String::from_utf16_lossy(element))?;
        }
        seq.end()
    }
}

/// Releases a split result.
///
/// Dropping the list has the same effect; this exists for callers that want
/// the release to be explicit at the call site.
pub fn free_elements(list: ElementList) {
    drop(list);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_lays_out_terminated_elements() {
        let mut list = ElementList::new();
        list.push(&[0x61, 0x62]);
        list.push(&[]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.lengths(), vec![2, 0]);
        assert_eq!(list.as_text(), &[0x61, 0x62, 0, 0]);
        assert_eq!(list.get(1), Some(&[][..]));
        assert_eq!(list.get(2), None);
    }

    #[test]
    fn collects_from_strings() -> Result<()> {
        let list: ElementList = ["a", "b c", ""].into_iter().collect();
        assert_eq!(list.to_strings()?, vec!["a", "b c", ""]);
        Ok(())
    }

    #[test]
    fn lone_surrogate_fails_strict_conversion() {
        let mut list = ElementList::new();
        list.push(&[0xD800]);
        assert!(list.to_strings().is_err());
        assert_eq!(list.to_strings_lossy(), vec!["\u{FFFD}"]);
    }

    #[test]
    fn equality_is_by_value() {
        let mut a = ElementList::new();
        a.push(&[0x78]);
        let b: ElementList = ["x"].into_iter().collect();
        assert_eq!(a, b);
        free_elements(a);
    }
}
