//! Shared error type across imdsmock crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, ImdsError>;

/// Unified error type used by core and server.
///
/// The protocol models exactly one failure: Not Found. Unmatched routes,
/// unknown MACs, unknown roles, unknown attributes, and missing files all
/// collapse into it. `Internal` exists only so an unexpected I/O failure is
/// answered instead of crashing the process mid-test-run.
#[derive(Debug, Error)]
pub enum ImdsError {
    #[error("not found")]
    NotFound,
    #[error("internal: {0}")]
    Internal(String),
}

impl ImdsError {
    /// HTTP status the transport should answer with.
    pub fn status(&self) -> u16 {
        match self {
            ImdsError::NotFound => 404,
            ImdsError::Internal(_) => 500,
        }
    }
}
