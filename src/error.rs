//! Error types for csstype value construction.

use thiserror::Error;

/// Errors that can occur while constructing a CSS value.
///
/// Serialization never fails; every error is raised by a constructor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{what} must not be negative, got {value}")]
    Negative { what: &'static str, value: f32 },

    #[error("Invalid hex color: {0:?}")]
    InvalidHexColor(String),

    #[error("Identifier must not be empty")]
    EmptyIdent,

    #[error("{0:?} is a CSS-wide keyword and cannot be used as an identifier")]
    ReservedIdent(String),

    #[error("Dashed identifier must start with \"--\": {0:?}")]
    InvalidDashedIdent(String),

    #[error("{what} must be at least {min}, got {value}")]
    TooSmall { what: &'static str, value: i64, min: i64 },

    #[error("Empty list: {0} requires at least one entry")]
    EmptyList(&'static str),

    #[error("Grid line 0 does not exist")]
    ZeroLine,

    #[error("Invalid unicode range U+{start:X}-{end:X}")]
    InvalidUnicodeRange { start: u32, end: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
