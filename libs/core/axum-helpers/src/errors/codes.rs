//! Error codes attached to every failed response.
//!
//! Codes never leave the process in the response body; they are recorded on
//! the [`ErrorReport`](super::ErrorReport) and logged so failures can be
//! grouped in log search.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.title(), "Validation Error");
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// One or more fields failed validation
    ValidationError,

    /// A domain rule rejected an argument
    InvalidArgument,

    /// Request body could not be read as JSON of the expected shape
    InvalidJson,

    /// Path parameter missing or not parseable
    InvalidPath,

    /// Request is well-formed but inconsistent (e.g. path id vs body id)
    BadRequest,

    NotFound,

    // Server errors
    InternalError,

    /// Handler panicked
    Panic,


    // Database errors (2000-2999)
    DatabaseError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::InvalidJson => "INVALID_JSON",
            Self::InvalidPath => "INVALID_PATH",
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::Panic => "PANIC",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Integer code for logs. 1xxx client, 15xx server, 2xxx database.
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidArgument => 1002,
            Self::InvalidJson => 1003,
            Self::InvalidPath => 1004,
            Self::BadRequest => 1005,
            Self::NotFound => 1006,
            Self::InternalError => 1500,
            Self::Panic => 1501,
            Self::DatabaseError => 2001,
        }
    }

    /// `title` member of the problem-details body
    pub fn title(&self) -> &'static str {
        match self {
            Self::ValidationError => "Validation Error",
            Self::InvalidArgument => "Invalid Argument",
            Self::InvalidJson | Self::InvalidPath | Self::BadRequest => "Bad Request",
            Self::NotFound => "Resource Not Found",
            Self::InternalError | Self::Panic | Self::DatabaseError => "Internal Server Error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
