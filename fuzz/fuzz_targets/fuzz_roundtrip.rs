#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let units: Vec<u16> = text.encode_utf16().collect();
        if let Ok(first) = spilornis::split_list(&units) {
            let elements: Vec<&[u16]> = first.iter().collect();
            let joined = spilornis::join_list(&elements).expect("join never fails here");
            match spilornis::split_list(&joined) {
                Ok(second) => {
                    if first != second {
                        panic!(
                            "List roundtrip mismatch!\nInput: {:?}\nFirst split: {:?}\nJoined: {}\nSecond split: {:?}",
                            text,
                            first,
                            String::from_utf16_lossy(&joined),
                            second
                        );
                    }
                    let again = spilornis::canonicalize(&joined).expect("canonical list splits");
                    assert_eq!(joined, again, "canonical form is not a fixed point");
                }
                Err(e) => {
                    panic!(
                        "Failed to split joined list!\nInput: {:?}\nJoined: {}\nError: {}",
                        text,
                        String::from_utf16_lossy(&joined),
                        e
                    );
                }
            }
        }
    }
});
