use crate::{
    error::ParseError,
    limits::Limits,
    message::Message,
    parser::{
        boundary::Delimiter,
        cursor::Cursor,
        part::{PartOutcome, PartParser},
    },
};

/// Decomposes `buffer` into a part tree delimited by `boundary`.
///
/// Any error discards the parts collected so far.
pub(crate) fn parse_message<'a>(
    buffer: &'a [u8],
    boundary: &str,
    limits: &Limits,
) -> Result<Message<'a>, ParseError> {
    if !limits.is_body_size_allowed(buffer.len() as u64) {
        if let Some(max_body_size) = limits.max_body_size {
            return Err(ParseError::BodySizeLimitExceeded { max_body_size });
        }
    }

    let delimiter = Delimiter::new(boundary)?;
    let mut cursor = Cursor::new(buffer);

    let Some(start) = cursor.find(delimiter.open()) else {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            boundary = boundary,
            len = buffer.len(),
            "parser: boundary not found in message"
        );
        return Err(ParseError::BoundaryNotFound {
            boundary: boundary.to_owned(),
        });
    };
    cursor.advance(start);

    let mut parser = PartParser::new(limits);
    let mut parts = Vec::new();
    while let PartOutcome::Continue(part) = parser.parse_part(&mut cursor, &delimiter, 0)? {
        parts.push(part);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        boundary = boundary,
        parts = parts.len(),
        consumed = cursor.position(),
        "parser: message parsed"
    );

    Ok(Message { parts })
}

/// Parses only the first `length` bytes of `buffer`.
pub(crate) fn parse_counted<'a>(
    buffer: &'a [u8],
    length: usize,
    boundary: &str,
    limits: &Limits,
) -> Result<Message<'a>, ParseError> {
    let counted = buffer
        .get(..length)
        .ok_or(ParseError::DeclaredLengthExceedsBuffer {
            declared: length,
            actual: buffer.len(),
        })?;
    parse_message(counted, boundary, limits)
}
