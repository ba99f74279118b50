//! Error types.

/// Result alias defaulting to [`ConfigError`].
pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

/// Errors raised while constructing a table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The bucket ceiling must allow at least one bucket.
    #[error("invalid configuration: max_buckets must be at least 1, got {max_buckets}")]
    InvalidConfiguration { max_buckets: usize },
}
