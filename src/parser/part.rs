use crate::{
    error::ParseError,
    header::{starts_with_ignore_ascii_case, Header},
    limits::Limits,
    part::{Body, Part, PartKind},
    parser::{boundary::Delimiter, cursor::Cursor, headers::parse_header_line},
};

const CONTENT_TYPE: &str = "content-type";
const MULTIPART_PREFIX: &str = "multipart/";

/// Result of one Part Parser step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartOutcome<'a> {
    /// A part was parsed; more may follow.
    Continue(Part<'a>),
    /// The terminating `--boundary--` line was consumed.
    EndOfParts,
}

/// Parses the next part delimited by `boundary`, using default limits.
///
/// The cursor is re-synchronized on the next `--boundary` before parsing,
/// and is left on the delimiter that closes the part.
pub fn parse_part<'a>(
    cursor: &mut Cursor<'a>,
    boundary: &str,
) -> Result<PartOutcome<'a>, ParseError> {
    let limits = Limits::default();
    let delimiter = Delimiter::new(boundary)?;
    PartParser::new(&limits).parse_part(cursor, &delimiter, 0)
}

/// Recursive part parser carrying limits and tree-wide counters.
#[derive(Debug)]
pub(crate) struct PartParser<'l> {
    limits: &'l Limits,
    parts_seen: usize,
}

impl<'l> PartParser<'l> {
    pub(crate) fn new(limits: &'l Limits) -> Self {
        Self {
            limits,
            parts_seen: 0,
        }
    }

    pub(crate) fn parse_part<'a>(
        &mut self,
        cursor: &mut Cursor<'a>,
        delimiter: &Delimiter,
        depth: usize,
    ) -> Result<PartOutcome<'a>, ParseError> {
        let Some(skip) = cursor.find(delimiter.open()) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                boundary = delimiter.token(),
                offset = cursor.position(),
                "parser: no further delimiter"
            );
            return Err(ParseError::PartNotFound {
                boundary: delimiter.token().to_owned(),
                offset: cursor.position(),
            });
        };
        cursor.advance(skip);

        let line = cursor.take_line();
        if line == delimiter.close() {
            return Ok(PartOutcome::EndOfParts);
        }

        if cursor.is_exhausted() {
            return Err(unterminated(delimiter, cursor.position()));
        }

        self.count_part()?;

        let header_offset = cursor.position();
        let headers = self.parse_headers(cursor)?;

        let kind = match nested_delimiter(&headers, header_offset)? {
            Some(nested) => PartKind::Container(self.parse_container(cursor, &nested, depth + 1)?),
            None => PartKind::Leaf(scan_body(cursor, delimiter)?),
        };

        Ok(PartOutcome::Continue(Part {
            headers,
            boundary: delimiter.token().to_owned(),
            kind,
        }))
    }

    fn parse_container<'a>(
        &mut self,
        cursor: &mut Cursor<'a>,
        delimiter: &Delimiter,
        depth: usize,
    ) -> Result<Vec<Part<'a>>, ParseError> {
        if let Some(max_depth) = self.limits.max_depth {
            if depth > max_depth {
                return Err(ParseError::DepthLimitExceeded { max_depth });
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            boundary = delimiter.token(),
            depth = depth,
            offset = cursor.position(),
            "parser: entering nested multipart"
        );

        let mut parts = Vec::new();
        while let PartOutcome::Continue(part) = self.parse_part(cursor, delimiter, depth)? {
            parts.push(part);
        }
        Ok(parts)
    }

    // Headers end at the first line of one byte or less, blank or not.
    fn parse_headers(&self, cursor: &mut Cursor<'_>) -> Result<Vec<Header>, ParseError> {
        let mut headers = Vec::new();
        let mut lines = 0usize;

        loop {
            let line = cursor.take_line();
            if line.len() <= 1 {
                break;
            }

            lines += 1;
            if let Some(max_headers) = self.limits.max_headers {
                if lines > max_headers {
                    return Err(ParseError::HeadersLimitExceeded { max_headers });
                }
            }

            if let Some(header) = parse_header_line(line) {
                headers.push(header);
            }
        }

        Ok(headers)
    }

    fn count_part(&mut self) -> Result<(), ParseError> {
        self.parts_seen += 1;
        match self.limits.max_parts {
            Some(max_parts) if self.parts_seen > max_parts => {
                Err(ParseError::PartsLimitExceeded { max_parts })
            }
            _ => Ok(()),
        }
    }
}

fn nested_delimiter(headers: &[Header], offset: usize) -> Result<Option<Delimiter>, ParseError> {
    let Some(content_type) = headers.iter().find(|header| header.name_contains(CONTENT_TYPE)) else {
        return Ok(None);
    };

    if !starts_with_ignore_ascii_case(&content_type.value, MULTIPART_PREFIX) {
        return Ok(None);
    }

    let token = content_type
        .param_ignore_case("boundary")
        .filter(|token| !token.is_empty())
        .ok_or(ParseError::MissingNestedBoundary { offset })?;

    Delimiter::new(token).map(Some)
}

fn scan_body<'a>(cursor: &mut Cursor<'a>, delimiter: &Delimiter) -> Result<Body<'a>, ParseError> {
    let start = cursor.position();
    let Some(len) = cursor.find(delimiter.open()) else {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            boundary = delimiter.token(),
            offset = start,
            remaining = cursor.remaining(),
            "parser: part body runs past end of buffer"
        );
        return Err(unterminated(delimiter, start));
    };
    cursor.advance(len);

    let raw = cursor.slice(start, start + len);
    Ok(Body::new(start, strip_line_break(raw)))
}

// The line break before a delimiter belongs to the delimiter.
fn strip_line_break(raw: &[u8]) -> &[u8] {
    raw.strip_suffix(b"\r\n")
        .or_else(|| raw.strip_suffix(b"\n"))
        .unwrap_or(raw)
}

fn unterminated(delimiter: &Delimiter, offset: usize) -> ParseError {
    ParseError::UnterminatedPart {
        boundary: delimiter.token().to_owned(),
        offset,
    }
}
