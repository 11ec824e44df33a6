use crate::buffer::reserve;
use crate::chars::SPACE;
use crate::encode::classify::{Flags, scan_element};
use crate::encode::convert::convert_element;
use crate::error::Result;

/// Accumulates list text one element at a time, inserting single-space
/// separators between elements.
pub struct ListWriter {
    out: Vec<u16>,
    count: usize,
}

impl ListWriter {
    pub fn new() -> Self {
        Self {
            out: Vec::new(),
            count: 0,
        }
    }

    /// A writer whose buffer already holds `capacity` code units.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            out: reserve("list element text", capacity)?,
            count: 0,
        })
    }

    /// Writes `element` using flags computed beforehand.
    pub fn element_with_flags(&mut self, element: &[u16], flags: Flags) -> usize {
        let mut written = 0;
        if self.count > 0 {
            self.out.push(SPACE);
            written += 1;
        }
        written += convert_element(element, flags, &mut self.out);
        self.count += 1;
        written
    }

    /// Scans and writes `element`. A leading `#` is guarded only on the first
    /// element written.
    pub fn element(&mut self, element: &[u16]) -> usize {
        let (_, mut flags) = scan_element(element);
        if self.count > 0 {
            flags |= Flags::DONT_QUOTE_HASH;
        }
        self.element_with_flags(element, flags)
    }

    /// Number of elements written so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.out
    }

    pub fn into_inner(self) -> Vec<u16> {
        self.out
    }
}

impl Default for ListWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn separators_between_elements_only() {
        let mut writer = ListWriter::new();
        assert_eq!(writer.element(&w("a")), 1);
        assert_eq!(writer.element(&w("b c")), 6);
        assert_eq!(writer.count(), 2);
        assert_eq!(String::from_utf16_lossy(writer.as_slice()), "a {b c}");
    }

    #[test]
    fn hash_guard_only_on_first() {
        let mut writer = ListWriter::new();
        writer.element(&w("#a"));
        writer.element(&w("#b"));
        assert_eq!(String::from_utf16_lossy(&writer.into_inner()), "{#a} #b");
    }
}
