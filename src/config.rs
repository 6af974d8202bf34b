use crate::{error::ConfigError, limits::Limits};

/// Top-level parser configuration model.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParserConfig {
    /// Structural limits applied to every parsed message.
    pub limits: Limits,
}

impl ParserConfig {
    /// Creates a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates configured limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = &self.limits;
        ensure_positive("max_depth", limits.max_depth)?;
        ensure_positive("max_parts", limits.max_parts)?;
        ensure_positive("max_headers", limits.max_headers)?;
        ensure_positive("max_body_size", limits.max_body_size)?;
        Ok(())
    }
}

fn ensure_positive<T>(limit: &'static str, value: Option<T>) -> Result<(), ConfigError>
where
    T: Default + PartialEq,
{
    match value {
        Some(value) if value == T::default() => Err(ConfigError::InvalidLimitValue { limit }),
        _ => Ok(()),
    }
}
