#![doc = include_str!("../README.md")]

pub mod chars;
pub mod decode;
pub mod encode;
pub mod error;
pub mod list;
pub mod options;
pub mod version;

mod buffer;

pub use crate::encode::classify::Flags;
pub use crate::encode::quote_element;
pub use crate::error::{Error, Result};
pub use crate::list::{ElementList, free_elements};
pub use crate::options::Options;
pub use crate::version::{is_compatible, version};

use std::io::{Read, Write};

/// Splits UTF-16 list text into its elements.
pub fn split_list(text: &[u16]) -> Result<ElementList> {
    split_list_with(text, &Options::default())
}

pub fn split_list_with(text: &[u16], options: &Options) -> Result<ElementList> {
    crate::decode::split_list_with(text, options)
}

/// Joins elements into canonical list text.
pub fn join_list<S: AsRef<[u16]>>(elements: &[S]) -> Result<Vec<u16>> {
    join_list_with(elements, &Options::default())
}

pub fn join_list_with<S: AsRef<[u16]>>(elements: &[S], options: &Options) -> Result<Vec<u16>> {
    crate::encode::join_list_with(elements, options)
}

/// The canonical spelling of a list: split then joined again.
pub fn canonicalize(text: &[u16]) -> Result<Vec<u16>> {
    let list = split_list(text)?;
    let elements: Vec<&[u16]> = list.iter().collect();
    join_list(&elements)
}

pub fn split_str(text: &str) -> Result<Vec<String>> {
    let units: Vec<u16> = text.encode_utf16().collect();
    split_list(&units)?.to_strings()
}

pub fn join_strs<S: AsRef<str>>(elements: &[S]) -> Result<String> {
    let units: Vec<Vec<u16>> = elements
        .iter()
        .map(|e| e.as_ref().encode_utf16().collect())
        .collect();
    let out = join_list(&units)?;
    Ok(String::from_utf16(&out)?)
}

pub fn split_reader<R: Read>(mut reader: R, options: &Options) -> Result<ElementList> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    let units: Vec<u16> = s.encode_utf16().collect();
    split_list_with(&units, options)
}

pub fn join_to_writer<W: Write, S: AsRef<str>>(
    mut writer: W,
    elements: &[S],
    options: &Options,
) -> Result<()> {
    let units: Vec<Vec<u16>> = elements
        .iter()
        .map(|e| e.as_ref().encode_utf16().collect())
        .collect();
    let out = join_list_with(&units, options)?;
    writer.write_all(String::from_utf16(&out)?.as_bytes())?;
    Ok(())
}
