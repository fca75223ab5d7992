//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the status plugins.
#[derive(Error, Debug)]
pub enum Error {
    /// An external resource is missing or unreachable (no wifi interface,
    /// bus call failed). Surfaced as an unsuccessful response, never fatal.
    #[error("unavailable: {0}")]
    Unavailable(String),

    /// A vendor status with no entry in the mapping table.
    #[error("unmapped status: {0}")]
    UnmappedStatus(String),

    /// An identity string that does not match the expected shape
    /// (e.g. a netid without the `:` separator).
    #[error("malformed identity: {0}")]
    MalformedIdentity(String),

    /// No status has been cached yet (seeding query failed and no event
    /// has arrived).
    #[error("state unset: {0}")]
    StateUnset(String),

    /// Malformed request (missing field, bad value).
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown service or method.
    #[error("not found: {0}")]
    NotFound(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Error code carried in IPC error frames.
    pub fn to_ipc_error_code(&self) -> &'static str {
        match self {
            Error::Unavailable(_) => "UNAVAILABLE",
            Error::UnmappedStatus(_) => "UNMAPPED_STATUS",
            Error::MalformedIdentity(_) => "MALFORMED_IDENTITY",
            Error::StateUnset(_) => "STATE_UNSET",
            Error::Validation(_) => "INVALID_ARGUMENT",
            Error::NotFound(_) => "NOT_FOUND",
            Error::Serialization(_) => "INTERNAL",
            Error::Io(_) => "INTERNAL",
        }
    }
}

// Convenience constructors
impl Error {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn unmapped_status(msg: impl Into<String>) -> Self {
        Self::UnmappedStatus(msg.into())
    }

    pub fn malformed_identity(msg: impl Into<String>) -> Self {
        Self::MalformedIdentity(msg.into())
    }

    pub fn state_unset(msg: impl Into<String>) -> Self {
        Self::StateUnset(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
