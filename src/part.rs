use std::{borrow::Cow, ops::Range};

use bytes::Bytes;

use crate::header::{starts_with_ignore_ascii_case, Header};

const MULTIPART_PREFIX: &str = "multipart/";

/// Borrowed view of a leaf part's body inside the caller's buffer.
///
/// The body is never copied: `bytes()` is a slice of the original buffer,
/// so the buffer must outlive every `Body` taken from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Body<'a> {
    offset: usize,
    bytes: &'a [u8],
}

impl<'a> Body<'a> {
    pub(crate) fn new(offset: usize, bytes: &'a [u8]) -> Self {
        Self { offset, bytes }
    }

    /// Offset of the first body byte in the original buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Body length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for an empty body.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Byte range of the body in the original buffer.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.bytes.len()
    }

    /// Raw body bytes, borrowed from the original buffer.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.bytes)
    }

    /// Copies the body out so it can outlive the buffer.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self.bytes)
    }
}

/// Either a body (leaf) or nested parts (container), never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartKind<'a> {
    /// Part with concrete body bytes.
    Leaf(Body<'a>),
    /// `multipart/*` part holding nested parts.
    Container(Vec<Part<'a>>),
}

/// One segment of a multipart message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part<'a> {
    /// Headers in the order they appeared.
    pub headers: Vec<Header>,
    /// Boundary token delimiting this part.
    pub boundary: String,
    /// Body or nested parts.
    pub kind: PartKind<'a>,
}

impl<'a> Part<'a> {
    /// First header whose name contains `name`, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&Header> {
        self.headers.iter().find(|header| header.name_contains(name))
    }

    /// Value of the `Content-Type` header, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type").map(|header| header.value.as_str())
    }

    /// Parameter `key` of the first header matching `header`.
    pub fn param(&self, header: &str, key: &str) -> Option<&str> {
        self.header(header)?.param(key)
    }

    /// Returns `true` when the content type is `multipart/*`.
    pub fn is_multipart(&self) -> bool {
        self.content_type()
            .is_some_and(|value| starts_with_ignore_ascii_case(value, MULTIPART_PREFIX))
    }

    /// Returns `true` for container parts.
    pub fn is_container(&self) -> bool {
        matches!(self.kind, PartKind::Container(_))
    }

    /// Body view for leaf parts; `None` for containers.
    pub fn body(&self) -> Option<Body<'a>> {
        match &self.kind {
            PartKind::Leaf(body) => Some(*body),
            PartKind::Container(_) => None,
        }
    }

    /// Nested parts; empty for leaves.
    pub fn parts(&self) -> &[Part<'a>] {
        match &self.kind {
            PartKind::Leaf(_) => &[],
            PartKind::Container(parts) => parts,
        }
    }

    /// The `name` parameter of `Content-Disposition`, as sent by HTML forms.
    pub fn field_name(&self) -> Option<&str> {
        self.param("content-disposition", "name")
    }

    /// The `filename` parameter of `Content-Disposition`.
    pub fn file_name(&self) -> Option<&str> {
        self.param("content-disposition", "filename")
    }
}
