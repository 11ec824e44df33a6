#![no_main]
use libfuzzer_sys::{arbitrary, fuzz_target};
use arbitrary::Arbitrary;

const MAX_ELEMENTS: usize = 64;

#[derive(Arbitrary, Debug)]
struct FuzzList {
    elements: Vec<Vec<u16>>,
    quote_hash: bool,
}

fuzz_target!(|input: FuzzList| {
    let elements = &input.elements[..input.elements.len().min(MAX_ELEMENTS)];
    let options = spilornis::Options {
        quote_hash: input.quote_hash,
        ..spilornis::Options::default()
    };
    let joined = spilornis::join_list_with(elements, &options).expect("join");
    let back = spilornis::split_list(&joined).expect("joined list must split");
    assert_eq!(back.len(), elements.len());
    for (got, want) in back.iter().zip(elements) {
        assert_eq!(got, want.as_slice());
    }
});
