//! Error types for acurl-http.
//!
//! The [`Response`](crate::Response) view never fails; these errors only come
//! from the helpers a transport uses before the view exists.

use derive_more::{Display, Error};

/// Main error type for acurl-http operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Numeric code with no entry in the status registry.
    #[display("unknown status code: {_0}")]
    UnknownStatusCode(#[error(not(source))] u16),

    /// Status line that does not follow `HTTP-version SP code SP reason`.
    #[display("invalid status line: {_0}")]
    InvalidStatusLine(#[error(not(source))] String),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an unknown status code error.
    #[must_use]
    pub const fn unknown_status_code(code: u16) -> Self {
        Self::UnknownStatusCode(code)
    }

    /// Create an invalid status line error.
    #[must_use]
    pub fn invalid_status_line(message: impl Into<String>) -> Self {
        Self::InvalidStatusLine(message.into())
    }

    /// Returns the offending code if this is an unknown status code error.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnknownStatusCode(code) => Some(*code),
            Self::InvalidStatusLine(_) => None,
        }
    }
}
