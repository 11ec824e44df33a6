use spilornis::decode::scanner::{RawElement, iter};

#[test]
fn scan_spans_of_mixed_list() -> Result<(), Box<dyn std::error::Error>> {
    let input: Vec<u16> = "a {b c} \"d\" e\\ f".encode_utf16().collect();
    let elements = iter(&input).collect::<Result<Vec<RawElement>, _>>()?;
    assert_eq!(elements.len(), 4);
    assert!(!elements[0].braced);
    assert!(elements[1].braced);
    assert!(!elements[2].braced);
    assert_eq!(elements[1].slice(&input), "b c".encode_utf16().collect::<Vec<_>>().as_slice());
    assert_eq!(elements[2].slice(&input), "d".encode_utf16().collect::<Vec<_>>().as_slice());
    // escapes are located, not decoded
    assert_eq!(elements[3].len, 4);
    Ok(())
}

#[test]
fn scan_reports_error_last() {
    let input: Vec<u16> = "a \"b".encode_utf16().collect();
    let mut it = iter(&input);
    assert!(matches!(it.next(), Some(Ok(_))));
    assert!(matches!(it.next(), Some(Err(_))));
    assert!(it.next().is_none());
}
