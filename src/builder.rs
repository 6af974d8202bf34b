use crate::{config::ParserConfig, error::ConfigError, limits::Limits, MimeParser};

/// Builder for configuring a [`MimeParser`] instance.
#[derive(Debug, Clone, Default)]
pub struct ParserBuilder {
    config: ParserConfig,
}

impl ParserBuilder {
    /// Creates a builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current builder configuration snapshot.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Replaces the full builder configuration.
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces all structural limits.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.config.limits = limits;
        self
    }

    /// Sets the maximum nesting depth of container parts.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.limits.max_depth = Some(max_depth);
        self
    }

    /// Removes the nesting depth bound.
    pub fn unbounded_depth(mut self) -> Self {
        self.config.limits.max_depth = None;
        self
    }

    /// Sets the maximum number of parts in the whole tree.
    pub fn max_parts(mut self, max_parts: usize) -> Self {
        self.config.limits.max_parts = Some(max_parts);
        self
    }

    /// Sets the maximum number of header lines per part.
    pub fn max_headers(mut self, max_headers: usize) -> Self {
        self.config.limits.max_headers = Some(max_headers);
        self
    }

    /// Sets the maximum buffer size in bytes.
    pub fn max_body_size(mut self, max_body_size: u64) -> Self {
        self.config.limits.max_body_size = Some(max_body_size);
        self
    }

    /// Validates builder configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.config.validate()
    }

    /// Finalizes and returns validated configuration.
    pub fn build_config(self) -> Result<ParserConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Finalizes into a configured parser.
    pub fn build(self) -> Result<MimeParser, ConfigError> {
        MimeParser::with_config(self.build_config()?)
    }
}
