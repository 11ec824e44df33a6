use core::mem::size_of;

use tracing::{trace, warn};

use crate::error::{Error, Result};

pub(crate) fn out_of_memory<T>(what: &'static str, count: usize) -> Error {
    let size = count.saturating_mul(size_of::<T>());
    warn!(what, size, "allocation refused");
    Error::OutOfMemory { what, size }
}

/// An empty vector with room for exactly `count` items, or `OutOfMemory`.
pub(crate) fn reserve<T>(what: &'static str, count: usize) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(count)
        .map_err(|_| out_of_memory::<T>(what, count))?;
    trace!(what, count, bytes = count * size_of::<T>(), "reserved buffer");
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserve_reports_what_failed() {
        let err = reserve::<u64>("list element text", usize::MAX).unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfMemory {
                what: "list element text",
                ..
            }
        ));
        assert!(err.to_string().starts_with("out of memory for list element text ("));
    }

    #[test]
    fn reserve_gives_exact_room() -> Result<()> {
        let buf = reserve::<u16>("list element lengths", 7)?;
        assert!(buf.is_empty());
        assert!(buf.capacity() >= 7);
        Ok(())
    }
}
