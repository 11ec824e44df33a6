use spilornis::{Error, Options, split_list_with, split_str};

#[test]
fn unmatched_open_brace() {
    let err = split_str("{abc").unwrap_err();
    assert!(err.is_syntax());
    assert!(err.to_string().contains("unmatched open brace"));
}

#[test]
fn unmatched_open_brace_after_good_elements() {
    let err = split_str("a b {c {d}").unwrap_err();
    assert_eq!(err.to_string(), "unmatched open brace in list");
}

#[test]
fn unmatched_open_quote() {
    let err = split_str("x \"abc").unwrap_err();
    assert_eq!(err.to_string(), "unmatched open quote in list");
}

#[test]
fn garbage_after_braces() {
    let err = split_str("{a}b").unwrap_err();
    assert_eq!(
        err.to_string(),
        "list element in braces followed by \"b\" instead of space"
    );
}

#[test]
fn garbage_after_quotes_is_truncated() {
    let err = split_str("\"a\"bbbbbbbbbbbbbbbbbbbbbbbbbbbbbb c").unwrap_err();
    assert_eq!(
        err.to_string(),
        "list element in quotes followed by \"bbbbbbbbbbbbbbbbbbbb\" instead of space"
    );
}

#[test]
fn failure_is_deterministic() {
    let a = split_str("{x").unwrap_err().to_string();
    let b = split_str("{x").unwrap_err().to_string();
    assert_eq!(a, b);
}

#[test]
fn too_long_input_is_refused() {
    let opts = Options {
        max_length: Some(2),
        ..Options::default()
    };
    let units: Vec<u16> = "abc".encode_utf16().collect();
    let err = split_list_with(&units, &opts).unwrap_err();
    assert!(matches!(err, Error::TooLong { length: 3, limit: 2 }));
    assert!(split_list_with(&units[..2], &opts).is_ok());
}

#[test]
fn join_length_limit_counts_all_elements() {
    let opts = Options {
        max_length: Some(3),
        ..Options::default()
    };
    let elements: Vec<Vec<u16>> = vec![vec![0x61; 2], vec![0x62; 2]];
    let err = spilornis::join_list_with(&elements, &opts).unwrap_err();
    assert!(matches!(err, Error::TooLong { length: 4, limit: 3 }));
}
