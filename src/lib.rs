#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Zero-copy MIME multipart parser.
//!
//! A fully buffered multipart payload is decomposed into a [`Message`]
//! tree: parts carry their headers and either a body view into the
//! original buffer or, for `multipart/*` parts, nested parts.

/// Fluent builder API.
pub mod builder;
/// Parser configuration.
pub mod config;
/// Error types exposed by this crate.
pub mod error;
/// Header and parameter model.
pub mod header;
/// Structural parsing limits.
pub mod limits;
/// Parsed message tree root.
pub mod message;
/// Owned multipart payloads.
pub mod multipart;
/// Parsed part model.
pub mod part;
/// Low-level parser components.
pub mod parser;

#[cfg(feature = "axum")]
pub mod axum;
#[cfg(any(feature = "axum", feature = "hyper"))]
mod body;
#[cfg(feature = "hyper")]
pub mod hyper;

pub use builder::ParserBuilder;
pub use config::ParserConfig;
pub use error::{ConfigError, MimeError, ParseError};
pub use header::{Header, Params};
pub use limits::Limits;
pub use message::{Leaves, Message};
pub use multipart::{boundary_from_headers, content_type_from_headers, MultipartBody};
pub use part::{Body, Part, PartKind};
pub use parser::{extract_multipart_boundary, parse_header_line, parse_part, Cursor, PartOutcome};

/// Parses `buffer` as a multipart message delimited by `boundary`.
///
/// Uses [`Limits::default`]. Leaf bodies borrow from `buffer`.
pub fn parse_message<'a>(buffer: &'a [u8], boundary: &str) -> Result<Message<'a>, ParseError> {
    parser::parse_message(buffer, boundary, &Limits::default())
}

/// Parses the first `length` bytes of `buffer`.
///
/// Fails with [`ParseError::DeclaredLengthExceedsBuffer`] when `length`
/// is larger than the buffer.
pub fn parse_message_counted<'a>(
    buffer: &'a [u8],
    length: usize,
    boundary: &str,
) -> Result<Message<'a>, ParseError> {
    parser::parse_counted(buffer, length, boundary, &Limits::default())
}

/// Configured multipart parser.
#[derive(Debug, Clone, Default)]
pub struct MimeParser {
    config: ParserConfig,
}

impl MimeParser {
    /// Creates a parser with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with explicit validated configuration.
    pub fn with_config(config: ParserConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a fluent builder with default limits.
    pub fn builder() -> ParserBuilder {
        ParserBuilder::default()
    }

    /// Returns an immutable reference to the active configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns the active limits.
    pub fn limits(&self) -> &Limits {
        &self.config.limits
    }

    /// Parses `buffer` as a multipart message delimited by `boundary`.
    pub fn parse<'a>(&self, buffer: &'a [u8], boundary: &str) -> Result<Message<'a>, ParseError> {
        parser::parse_message(buffer, boundary, &self.config.limits)
    }

    /// Parses the first `length` bytes of `buffer`.
    pub fn parse_counted<'a>(
        &self,
        buffer: &'a [u8],
        length: usize,
        boundary: &str,
    ) -> Result<Message<'a>, ParseError> {
        parser::parse_counted(buffer, length, boundary, &self.config.limits)
    }
}
