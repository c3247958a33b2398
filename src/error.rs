//! Error handling for the JSON parser.
//!
//! Every parsing routine returns [`ParseResult`]; the first failure is
//! terminal for the call and propagates with `?`. [`Status`] is the flat
//! result code used by the slot-style entry point, with `Ok` alongside the
//! four failure codes.
//!
//! Numeric codes are stable: `Ok = 0`, `ExpectValue = 1`, `InvalidValue = 2`,
//! `RootNotSingular = 3`, `NumberTooBig = 4`.

use thiserror::Error;

/// A failed parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    /// Input was empty or held only whitespace (code 1)
    #[error("expected a value")]
    ExpectValue,

    /// A token was started but does not follow its grammar (code 2)
    #[error("invalid value")]
    InvalidValue,

    /// A complete value was followed by non-whitespace content (code 3)
    #[error("root value is not singular")]
    RootNotSingular,

    /// Number grammar is valid but the magnitude overflows f64 (code 4)
    #[error("number too big")]
    NumberTooBig,
}

impl ParseError {
    /// Get the numeric error code.
    pub const fn code(&self) -> u32 {
        match self {
            ParseError::ExpectValue => 1,
            ParseError::InvalidValue => 2,
            ParseError::RootNotSingular => 3,
            ParseError::NumberTooBig => 4,
        }
    }

    /// Get the error name as a string.
    pub const fn name(&self) -> &'static str {
        match self {
            ParseError::ExpectValue => "ExpectValue",
            ParseError::InvalidValue => "InvalidValue",
            ParseError::RootNotSingular => "RootNotSingular",
            ParseError::NumberTooBig => "NumberTooBig",
        }
    }
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Outcome of a slot-style parse.
///
/// Callers must check this before trusting the output value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Status {
    /// One value, surrounded only by whitespace
    Ok = 0,
    /// See [`ParseError::ExpectValue`]
    ExpectValue = 1,
    /// See [`ParseError::InvalidValue`]
    InvalidValue = 2,
    /// See [`ParseError::RootNotSingular`]
    RootNotSingular = 3,
    /// See [`ParseError::NumberTooBig`]
    NumberTooBig = 4,
}

impl Status {
    /// Returns true if the parse succeeded.
    pub const fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }

    /// Get the numeric status code.
    pub const fn code(&self) -> u32 {
        *self as u32
    }

    /// Get the status name as a string.
    pub const fn name(&self) -> &'static str {
        match self {
            Status::Ok => "Ok",
            Status::ExpectValue => ParseError::ExpectValue.name(),
            Status::InvalidValue => ParseError::InvalidValue.name(),
            Status::RootNotSingular => ParseError::RootNotSingular.name(),
            Status::NumberTooBig => ParseError::NumberTooBig.name(),
        }
    }
}

impl From<ParseError> for Status {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::ExpectValue => Status::ExpectValue,
            ParseError::InvalidValue => Status::InvalidValue,
            ParseError::RootNotSingular => Status::RootNotSingular,
            ParseError::NumberTooBig => Status::NumberTooBig,
        }
    }
}

impl From<ParseResult<()>> for Status {
    fn from(result: ParseResult<()>) -> Self {
        match result {
            Ok(()) => Status::Ok,
            Err(err) => err.into(),
        }
    }
}
