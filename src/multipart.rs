use bytes::Bytes;
use http::{header, HeaderMap};

use crate::{
    error::{MimeError, ParseError},
    message::Message,
    parser::{self, Delimiter},
    MimeParser,
};

/// A fully buffered multipart payload together with its boundary.
///
/// Parsed messages borrow from the payload, so they cannot outlive it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartBody {
    boundary: String,
    body: Bytes,
}

impl MultipartBody {
    /// Pairs an already extracted boundary with a body.
    pub fn new(boundary: impl Into<String>, body: impl Into<Bytes>) -> Result<Self, ParseError> {
        let boundary = boundary.into();
        Delimiter::new(&boundary)?;

        Ok(Self {
            boundary,
            body: body.into(),
        })
    }

    /// Extracts the boundary from a raw `Content-Type` value.
    pub fn from_content_type(
        content_type: &str,
        body: impl Into<Bytes>,
    ) -> Result<Self, MimeError> {
        let boundary = parser::extract_multipart_boundary(content_type)?;
        Ok(Self::new(boundary, body)?)
    }

    /// Extracts the boundary from request headers.
    pub fn from_headers(headers: &HeaderMap, body: impl Into<Bytes>) -> Result<Self, MimeError> {
        let boundary = boundary_from_headers(headers)?;
        Ok(Self::new(boundary, body)?)
    }

    /// Boundary token without leading dashes.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// The buffered payload.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Parses the payload with default limits.
    pub fn parse(&self) -> Result<Message<'_>, ParseError> {
        self.parse_with(&MimeParser::new())
    }

    /// Parses the payload with a configured parser.
    pub fn parse_with(&self, parser: &MimeParser) -> Result<Message<'_>, ParseError> {
        parser.parse(&self.body, &self.boundary)
    }

    /// Splits into boundary and payload.
    pub fn into_parts(self) -> (String, Bytes) {
        (self.boundary, self.body)
    }
}

/// Extracts the raw `Content-Type` header value.
pub fn content_type_from_headers(headers: &HeaderMap) -> Result<&str, MimeError> {
    let value = headers
        .get(header::CONTENT_TYPE)
        .ok_or(MimeError::MissingContentType)?;
    value
        .to_str()
        .map_err(|_| MimeError::content_type("Content-Type header must be ASCII"))
}

/// Extracts the multipart boundary from request headers.
pub fn boundary_from_headers(headers: &HeaderMap) -> Result<String, MimeError> {
    parser::extract_multipart_boundary(content_type_from_headers(headers)?)
}
