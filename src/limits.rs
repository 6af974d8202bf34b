/// Default nesting depth for `multipart/*` parts inside a message.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Structural limits enforced while parsing a message.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting depth of container parts.
    pub max_depth: Option<usize>,
    /// Maximum number of parts (containers and leaves) in the whole tree.
    pub max_parts: Option<usize>,
    /// Maximum number of header lines in a single part.
    pub max_headers: Option<usize>,
    /// Maximum size in bytes of the parsed buffer.
    pub max_body_size: Option<u64>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            max_parts: None,
            max_headers: None,
            max_body_size: None,
        }
    }
}

impl Limits {
    /// Creates the default limits: bounded nesting, everything else open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates limits that bound nothing, including nesting depth.
    pub fn unbounded() -> Self {
        Self {
            max_depth: None,
            ..Self::default()
        }
    }

    /// Returns `true` when `len` bytes fit under `max_body_size`.
    pub fn is_body_size_allowed(&self, len: u64) -> bool {
        let allowed = self.max_body_size.map_or(true, |max| len <= max);

        #[cfg(feature = "tracing")]
        if !allowed {
            tracing::debug!(
                len = len,
                max_body_size = ?self.max_body_size,
                "limits: body rejected by max_body_size"
            );
        }

        allowed
    }
}
