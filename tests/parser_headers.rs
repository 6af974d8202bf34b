#![allow(missing_docs)]

use partwise::parse_header_line;

#[test]
fn parses_content_disposition_name_and_filename() {
    let header =
        parse_header_line(b"Content-Disposition: form-data; name=\"avatar\"; filename=\"face.png\"")
            .expect("header should parse");

    assert_eq!(header.name, "Content-Disposition");
    assert_eq!(header.value, "form-data");
    assert_eq!(header.param("name"), Some("avatar"));
    assert_eq!(header.param("filename"), Some("face.png"));
    assert_eq!(header.params.as_ref().map(|params| params.len()), Some(2));
}

#[test]
fn line_without_colon_is_not_a_header() {
    assert!(parse_header_line(b"not a header line").is_none());
}

#[test]
fn trims_value_whitespace() {
    let header = parse_header_line(b"X-Test:    spaced  ").expect("header should parse");
    assert_eq!(header.value, "spaced");
    assert!(header.params.is_none());
}

#[test]
fn trailing_semicolon_yields_empty_parameter_map() {
    let header = parse_header_line(b"Content-Type: text/plain;").expect("header should parse");
    assert_eq!(header.value, "text/plain");
    assert!(header.params.as_ref().is_some_and(|params| params.is_empty()));
}

#[test]
fn duplicate_parameters_keep_last_value() {
    let header = parse_header_line(b"X-Test: v; a=1; a=2").expect("header should parse");
    assert_eq!(header.param("a"), Some("2"));
    assert_eq!(header.params.as_ref().map(|params| params.len()), Some(1));
}

#[test]
fn quoted_value_stops_at_next_quote() {
    let header = parse_header_line(b"X-Test: v; name=\"abc\"def").expect("header should parse");
    assert_eq!(header.param("name"), Some("abc"));
}

#[test]
fn backslash_does_not_escape_quotes() {
    let header = parse_header_line(b"X-Test: v; name=\"a\\\"b\"").expect("header should parse");
    assert_eq!(header.param("name"), Some("a\\"));
}

#[test]
fn semicolon_inside_quotes_still_splits_parameters() {
    let header = parse_header_line(b"X-Test: v; name=\"a;b\"").expect("header should parse");
    assert_eq!(header.param("name"), Some("a"));
    assert_eq!(header.params.as_ref().map(|params| params.len()), Some(1));
}

#[test]
fn parameter_without_equals_is_dropped() {
    let header = parse_header_line(b"X-Test: v; flag").expect("header should parse");
    assert!(header.params.as_ref().is_some_and(|params| params.is_empty()));
}

#[test]
fn parameter_lookup_can_ignore_case() {
    let header = parse_header_line(b"Content-Type: multipart/mixed; Boundary=Z")
        .expect("header should parse");
    assert_eq!(header.param("boundary"), None);
    assert_eq!(header.param_ignore_case("boundary"), Some("Z"));
}

#[test]
fn replaces_non_utf8_header_bytes() {
    let header = parse_header_line(b"X-Name: caf\xe9").expect("header should parse");
    assert_eq!(header.value, "caf\u{FFFD}");
}

#[test]
fn name_matching_is_case_insensitive_substring() {
    let header = parse_header_line(b"X-Original-CONTENT-TYPE: text/html").expect("header should parse");
    assert!(header.name_contains("content-type"));
    assert!(!header.name_contains("disposition"));
}
