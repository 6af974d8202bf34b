use crate::error::{MimeError, ParseError};

const MAX_BOUNDARY_LEN: usize = 70;

/// Byte sequences derived from one boundary token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiter {
    token: String,
    open: Vec<u8>,
    close: Vec<u8>,
}

impl Delimiter {
    /// Builds `--token` and `--token--` for a boundary token.
    pub fn new(token: &str) -> Result<Self, ParseError> {
        validate_boundary_input(token)?;

        Ok(Self {
            token: token.to_owned(),
            open: format!("--{token}").into_bytes(),
            close: format!("--{token}--").into_bytes(),
        })
    }

    /// The boundary token without dashes.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// `--token`, which opens every part and prefixes the terminator.
    pub fn open(&self) -> &[u8] {
        &self.open
    }

    /// `--token--`, which ends a part sequence.
    pub fn close(&self) -> &[u8] {
        &self.close
    }
}

/// Extracts and validates the `boundary` parameter from a `Content-Type` value.
///
/// Any `multipart/*` type is accepted.
pub fn extract_multipart_boundary(content_type: &str) -> Result<String, MimeError> {
    let mime = content_type
        .parse::<mime::Mime>()
        .map_err(|_| MimeError::content_type("invalid Content-Type header"))?;

    if mime.type_() != mime::MULTIPART {
        return Err(MimeError::content_type("Content-Type must be multipart/*"));
    }

    let boundary = mime
        .get_param("boundary")
        .map(|value| value.as_str())
        .ok_or_else(|| MimeError::content_type("missing multipart boundary parameter"))?;

    validate_boundary(boundary)?;
    Ok(boundary.to_owned())
}

fn validate_boundary(boundary: &str) -> Result<(), MimeError> {
    if boundary.is_empty() {
        return Err(MimeError::content_type("multipart boundary cannot be empty"));
    }

    if boundary.len() > MAX_BOUNDARY_LEN {
        return Err(MimeError::content_type(
            "multipart boundary cannot exceed 70 characters",
        ));
    }

    if boundary.ends_with(' ') {
        return Err(MimeError::content_type(
            "multipart boundary cannot end with whitespace",
        ));
    }

    if !boundary.chars().all(is_boundary_char) {
        return Err(MimeError::content_type(
            "multipart boundary contains invalid characters",
        ));
    }

    Ok(())
}

fn validate_boundary_input(boundary: &str) -> Result<(), ParseError> {
    if boundary.is_empty() {
        return Err(ParseError::invalid_boundary("multipart boundary cannot be empty"));
    }

    if boundary.contains('\r') || boundary.contains('\n') {
        return Err(ParseError::invalid_boundary(
            "multipart boundary cannot contain CRLF",
        ));
    }

    Ok(())
}

fn is_boundary_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '\'' | '(' | ')' | '+' | '_' | ',' | '-' | '.' | '/' | ':' | '=' | '?' | ' ')
}
