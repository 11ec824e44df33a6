//! Build descriptor used by callers as a compatibility probe.

/// Present in the descriptor of every build whose lists use 16-bit code units.
pub const CODE_UNIT_MARKER: &str = " SIZE_OF_WCHAR_T=2";

#[cfg(debug_assertions)]
const BUILD: &str = " DEBUG";
#[cfg(not(debug_assertions))]
const BUILD: &str = " RELEASE";

/// e.g. `Spilornis 1.0.0 (linux) RELEASE SIZE_OF_WCHAR_T=2`
pub fn version() -> String {
    format!(
        "Spilornis {} ({}){}{}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        BUILD,
        CODE_UNIT_MARKER
    )
}

/// Whether a descriptor returned by [`version`] names a build this crate's
/// text format is compatible with.
pub fn is_compatible(descriptor: &str) -> bool {
    descriptor.contains(CODE_UNIT_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_version_is_compatible() {
        let v = version();
        assert!(v.starts_with("Spilornis "));
        assert!(v.contains(env!("CARGO_PKG_VERSION")));
        assert!(is_compatible(&v));
    }

    #[test]
    fn wide_build_is_not_compatible() {
        assert!(!is_compatible("Spilornis 1.0.0 (linux) RELEASE SIZE_OF_WCHAR_T=4"));
        assert!(!is_compatible(""));
    }
}
