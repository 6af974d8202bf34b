/// Boundary delimiters and `Content-Type` boundary extraction.
pub mod boundary;
/// Bounds-checked read position over the message buffer.
pub mod cursor;
/// Header line and parameter tokenizer.
pub mod headers;
/// Message-level driver.
mod message;
/// Recursive part parser.
pub mod part;

pub use boundary::{extract_multipart_boundary, Delimiter};
pub use cursor::Cursor;
pub use headers::parse_header_line;
pub use part::{parse_part, PartOutcome};

pub(crate) use message::{parse_counted, parse_message};
