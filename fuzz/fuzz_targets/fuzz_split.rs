#![no_main]
use libfuzzer_sys::fuzz_target;

// Raw code units, lone surrogates and NULs included.
fuzz_target!(|data: &[u8]| {
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    if let Ok(list) = spilornis::split_list(&units) {
        let total: usize = list.lengths().iter().sum();
        assert!(total <= units.len());
    }
});
