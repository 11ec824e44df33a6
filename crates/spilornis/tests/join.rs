use spilornis::{join_list, join_strs, quote_element};

#[test]
fn empty_join_is_empty_text() -> Result<(), Box<dyn std::error::Error>> {
    let none: [&[u16]; 0] = [];
    assert!(join_list(&none)?.is_empty());
    assert_eq!(join_strs::<&str>(&[])?, "");
    Ok(())
}

#[test]
fn single_empty_element_is_braces() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(join_strs(&[""])?, "{}");
    assert_eq!(join_strs(&["", ""])?, "{} {}");
    Ok(())
}

#[test]
fn whitespace_prefers_braces_over_escapes() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(join_strs(&["a\tb"])?, "{a\tb}");
    assert_eq!(join_strs(&["a b", "c"])?, "{a b} c");
    Ok(())
}

#[test]
fn leading_hash_guarded_on_first_element_only() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(join_strs(&["#foo", "bar"])?, "{#foo} bar");
    assert_eq!(join_strs(&["bar", "#foo"])?, "bar #foo");
    Ok(())
}

#[test]
fn hash_with_unbalanced_brace_is_escaped() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(join_strs(&["#{"])?, "\\#\\{");
    Ok(())
}

#[test]
fn unbalanced_content_is_escaped() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(join_strs(&["{abc"])?, "\\{abc");
    assert_eq!(join_strs(&["a}"])?, "a\\}");
    assert_eq!(join_strs(&["x y\\"])?, "x\\ y\\\\");
    assert_eq!(join_strs(&["a\\\nb"])?, "a\\\\\\nb");
    Ok(())
}

#[test]
fn substitution_characters_are_braced() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(join_strs(&["$x", "[cmd]", "a;b"])?, "{$x} {[cmd]} {a;b}");
    Ok(())
}

#[test]
fn quotes_and_braces_at_start_are_braced() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(join_strs(&["\"q", "{b}"])?, "{\"q} {{b}}");
    Ok(())
}

#[test]
fn quote_element_matches_join() -> Result<(), Box<dyn std::error::Error>> {
    let units: Vec<u16> = "a b".encode_utf16().collect();
    assert_eq!(String::from_utf16(&quote_element(&units, true))?, "{a b}");
    Ok(())
}
