use thiserror::Error;

/// Configuration-time validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A configured numeric limit must be strictly greater than zero.
    #[error("limit `{limit}` must be greater than 0")]
    InvalidLimitValue {
        /// Name of the limit.
        limit: &'static str,
    },
}

/// Failures raised while decomposing a multipart buffer.
///
/// Every variant is terminal for the message being parsed: no partially
/// assembled tree is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The top-level `--boundary` sequence never occurs in the buffer.
    #[error("boundary `{boundary}` not found in message")]
    BoundaryNotFound {
        /// Boundary token that was searched for.
        boundary: String,
    },
    /// Re-synchronizing on the next boundary failed mid-stream.
    #[error("no part delimited by `{boundary}` found at offset {offset}")]
    PartNotFound {
        /// Boundary token that was searched for.
        boundary: String,
        /// Buffer offset the search started from.
        offset: usize,
    },
    /// A `multipart/*` part declared no `boundary` parameter.
    #[error("multipart part at offset {offset} has no boundary parameter")]
    MissingNestedBoundary {
        /// Buffer offset of the part's headers.
        offset: usize,
    },
    /// A part body ran to the end of the buffer without a closing boundary.
    #[error("part at offset {offset} is not terminated by boundary `{boundary}`")]
    UnterminatedPart {
        /// Boundary token expected to close the part.
        boundary: String,
        /// Buffer offset where the unterminated part starts.
        offset: usize,
    },
    /// The boundary token cannot be used as a delimiter.
    #[error("{message}")]
    InvalidBoundary {
        /// Validation failure message.
        message: &'static str,
    },
    /// A declared message length is larger than the supplied buffer.
    #[error("declared length {declared} exceeds buffer length {actual}")]
    DeclaredLengthExceedsBuffer {
        /// Caller-declared length.
        declared: usize,
        /// Actual buffer length.
        actual: usize,
    },
    /// Nested multipart parts exceeded the configured depth.
    #[error("multipart nesting exceeded max depth of {max_depth}")]
    DepthLimitExceeded {
        /// Maximum allowed nesting depth.
        max_depth: usize,
    },
    /// The message held more parts than allowed.
    #[error("multipart message exceeded max parts limit of {max_parts}")]
    PartsLimitExceeded {
        /// Maximum allowed number of parts.
        max_parts: usize,
    },
    /// A part held more header lines than allowed.
    #[error("part exceeded max headers limit of {max_headers}")]
    HeadersLimitExceeded {
        /// Maximum allowed header lines per part.
        max_headers: usize,
    },
    /// The message buffer was larger than allowed.
    #[error("multipart message exceeded max body size of {max_body_size} bytes")]
    BodySizeLimitExceeded {
        /// Maximum allowed buffer size in bytes.
        max_body_size: u64,
    },
}

impl ParseError {
    pub(crate) fn invalid_boundary(message: &'static str) -> Self {
        Self::InvalidBoundary { message }
    }
}

/// Runtime error type used by `partwise` outside the pure parser.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MimeError {
    /// Configuration error surfaced at runtime.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Multipart parser failure.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The request carried no `Content-Type` header.
    #[error("missing Content-Type header")]
    MissingContentType,
    /// The `Content-Type` value is unusable for multipart parsing.
    #[error("{message}")]
    InvalidContentType {
        /// Failure message.
        message: String,
    },
    /// Reading the request body failed.
    #[error("body error: {message}")]
    Body {
        /// Failure message.
        message: String,
    },
}

impl MimeError {
    pub(crate) fn content_type(message: impl Into<String>) -> Self {
        Self::InvalidContentType {
            message: message.into(),
        }
    }
}
