//! Joining elements into canonical list text.

pub mod classify;
pub mod convert;
pub mod writer;

use smallvec::SmallVec;
use tracing::debug;

use crate::buffer::out_of_memory;
use crate::error::{Error, Result};
use crate::options::Options;

use self::classify::{Flags, scan_element};
use self::writer::ListWriter;

/// Joins of up to this many elements keep their flags on the stack.
pub const LOCAL_FLAGS: usize = 20;

pub fn join_list_with<S: AsRef<[u16]>>(elements: &[S], options: &Options) -> Result<Vec<u16>> {
    join_inner(elements, options)
        .inspect_err(|e| debug!(error = %e, elements = elements.len(), "join failed"))
}

fn join_inner<S: AsRef<[u16]>>(elements: &[S], options: &Options) -> Result<Vec<u16>> {
    let input = elements
        .iter()
        .try_fold(0usize, |acc, e| acc.checked_add(e.as_ref().len()))
        .ok_or_else(|| Error::Internal("total element length overflows".into()))?;
    options.check_length(input)?;

    // pass 1: flags and an upper bound on the output size
    let mut flags: SmallVec<[Flags; LOCAL_FLAGS]> = SmallVec::new();
    if elements.len() > LOCAL_FLAGS {
        flags
            .try_reserve_exact(elements.len())
            .map_err(|_| out_of_memory::<Flags>("list element flags", elements.len()))?;
    }
    let mut capacity = elements.len().saturating_sub(1);
    for element in elements {
        let (bound, element_flags) = scan_element(element.as_ref());
        capacity += bound;
        flags.push(element_flags);
    }

    // pass 2: write
    let mut writer = ListWriter::with_capacity(capacity)?;
    for (i, (element, element_flags)) in elements.iter().zip(flags).enumerate() {
        let element_flags = if i > 0 || !options.quote_hash {
            element_flags | Flags::DONT_QUOTE_HASH
        } else {
            element_flags
        };
        writer.element_with_flags(element.as_ref(), element_flags);
    }

    let out = writer.into_inner();
    debug!(elements = elements.len(), length = out.len(), "joined list");
    Ok(out)
}

/// The list form of a single element. `first` guards a leading `#`.
pub fn quote_element(element: &[u16], first: bool) -> Vec<u16> {
    let (bound, mut flags) = scan_element(element);
    if !first {
        flags |= Flags::DONT_QUOTE_HASH;
    }
    let mut out = Vec::with_capacity(bound);
    convert::convert_element(element, flags, &mut out);
    out
}
