//! leptjson - a minimal strict JSON parser.
//!
//! Parses a document holding a single `null`, `true`, `false` or number into a
//! [`JsonValue`], or reports why it could not.
//!
//! - [`json`] - Parser, value types and options
//! - [`error`] - Parse errors and status codes
//!
//! Parsing is a single forward scan that borrows the input for one call and
//! keeps no state between calls.

// Library code reports failures through status codes, never by unwinding.
// Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod json;

// Re-export commonly used types
pub use error::{ParseError, ParseResult, Status};
pub use json::{parse, parse_into, JsonType, JsonValue, ParseOptions};
