#![allow(missing_docs)]

use partwise::{Limits, MimeParser, ParseError, ParserConfig};

const DOUBLY_NESTED: &str = concat!(
    "--B\r\n",
    "Content-Type: multipart/mixed; boundary=L1\r\n",
    "\r\n",
    "--L1\r\n",
    "Content-Type: multipart/mixed; boundary=L2\r\n",
    "\r\n",
    "--L2\r\n",
    "\r\n",
    "deep\r\n",
    "--L2--\r\n",
    "--L1--\r\n",
    "--B--\r\n"
);

#[test]
fn default_limits_allow_moderate_nesting() {
    let message = MimeParser::new()
        .parse(DOUBLY_NESTED.as_bytes(), "B")
        .expect("message should parse");

    let deep = message.leaves().next().expect("leaf expected");
    assert_eq!(deep.boundary, "L2");
    assert_eq!(deep.body().map(|body| body.bytes()), Some(&b"deep"[..]));
}

#[test]
fn enforces_max_depth() {
    let parser = MimeParser::builder().max_depth(1).build().expect("config should validate");

    let err = parser
        .parse(DOUBLY_NESTED.as_bytes(), "B")
        .expect_err("nesting should exceed limit");
    assert_eq!(err, ParseError::DepthLimitExceeded { max_depth: 1 });
}

#[test]
fn max_depth_counts_container_levels() {
    let parser = MimeParser::builder().max_depth(2).build().expect("config should validate");
    assert!(parser.parse(DOUBLY_NESTED.as_bytes(), "B").is_ok());
}

#[test]
fn unbounded_limits_skip_depth_check() {
    let config = ParserConfig {
        limits: Limits::unbounded(),
    };
    let parser = MimeParser::with_config(config).expect("config should validate");
    assert!(parser.limits().max_depth.is_none());
    assert!(parser.parse(DOUBLY_NESTED.as_bytes(), "B").is_ok());
}

#[test]
fn enforces_max_parts_across_the_tree() {
    let parser = MimeParser::builder().max_parts(3).build().expect("config should validate");
    assert!(parser.parse(DOUBLY_NESTED.as_bytes(), "B").is_ok());

    let parser = MimeParser::builder().max_parts(2).build().expect("config should validate");
    let err = parser
        .parse(DOUBLY_NESTED.as_bytes(), "B")
        .expect_err("part count should exceed limit");
    assert_eq!(err, ParseError::PartsLimitExceeded { max_parts: 2 });
}

#[test]
fn enforces_max_headers() {
    let buffer = b"--B\r\nX-A: 1\r\nX-B: 2\r\n\r\nbody\r\n--B--";
    let parser = MimeParser::builder().max_headers(1).build().expect("config should validate");

    let err = parser.parse(buffer, "B").expect_err("header count should exceed limit");
    assert_eq!(err, ParseError::HeadersLimitExceeded { max_headers: 1 });
}

#[test]
fn enforces_max_body_size() {
    let buffer = b"--B\r\n\r\nbody\r\n--B--";
    let parser = MimeParser::builder()
        .max_body_size(10)
        .build()
        .expect("config should validate");

    let err = parser.parse(buffer, "B").expect_err("buffer should exceed limit");
    assert_eq!(err, ParseError::BodySizeLimitExceeded { max_body_size: 10 });

    let parser = MimeParser::builder()
        .max_body_size(buffer.len() as u64)
        .build()
        .expect("config should validate");
    assert!(parser.parse(buffer, "B").is_ok());
}

#[test]
fn counted_parse_applies_limits_to_declared_length() {
    let buffer = b"--B\r\n\r\nbody\r\n--B--trailing bytes past the declared length";
    let parser = MimeParser::builder()
        .max_body_size(18)
        .build()
        .expect("config should validate");

    let message = parser.parse_counted(buffer, 18, "B").expect("message should parse");
    assert_eq!(message.len(), 1);
}
