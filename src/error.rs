//! Error types for the capability and composite layers
//!
//! Every fallible operation in the crate returns [`DomainError`]. Errors are
//! grouped by [`ErrorKind`] so callers can tell a bad calendar argument apart
//! from an arithmetic overflow without matching on every variant.

use crate::domain::value_objects::ValidationError;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DomainError>;

// =============================================================================
// ERROR KINDS
// =============================================================================

/// Coarse classification of a [`DomainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A caller supplied a value that cannot describe a real date or record
    InvalidArgument,
    /// Date arithmetic left the representable range
    OutOfRange,
}

impl ErrorKind {
    /// Get the error category for metrics and log fields
    pub fn category(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "client_error",
            ErrorKind::OutOfRange => "arithmetic_error",
        }
    }
}

// =============================================================================
// DOMAIN ERROR
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Calendar components that do not name a real instant, such as
    /// February 30th or April 31st.
    #[error(
        "invalid calendar date {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}"
    )]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    },

    #[error("date arithmetic out of range while {operation}")]
    OutOfRange { operation: &'static str },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DomainError {
    pub fn invalid_date(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        DomainError::InvalidDate {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    pub fn out_of_range(operation: &'static str) -> Self {
        DomainError::OutOfRange { operation }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidDate { .. } | DomainError::Validation(_) => {
                ErrorKind::InvalidArgument
            }
            DomainError::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }

    /// Shorthand for `self.kind().category()`
    pub fn category(&self) -> &'static str {
        self.kind().category()
    }
}
