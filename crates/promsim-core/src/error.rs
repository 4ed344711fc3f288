//! Shared error type across promsim crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, PromSimError>;

/// Unified error type used by the core and the exporter.
#[derive(Debug, Error)]
pub enum PromSimError {
    /// Rejected command-line or derived configuration.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// Socket-level failure while binding or serving.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    /// Internal invariant failure (construction of a fixed distribution, etc).
    #[error("internal: {0}")]
    Internal(String),
}
