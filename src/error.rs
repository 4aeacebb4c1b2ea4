//! Error types for rankset
//!
//! Provides a unified error type for all operations.
//!
//! Absent members and empty ranges are expected outcomes and are reported
//! through `Option`/`bool`/empty sequences, never through this type. The
//! error enum only covers conditions that genuinely fail an operation.

use thiserror::Error;

/// Result type alias using RankSetError
pub type Result<T> = std::result::Result<T, RankSetError>;

/// Unified error type for rankset operations
#[derive(Debug, Error)]
pub enum RankSetError {
    // -------------------------------------------------------------------------
    // Allocation Errors
    // -------------------------------------------------------------------------
    /// A buffer or node reservation failed. Every mutating operation reserves
    /// all memory it needs before touching any structure, so on this error
    /// the set is exactly as it was before the call.
    #[error("out of memory: {0}")]
    OutOfMemory(#[from] std::collections::TryReserveError),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("configuration error: {0}")]
    Config(String),
}
