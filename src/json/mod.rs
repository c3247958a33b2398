//! JSON parsing for the scalar subset: `null`, `true`, `false` and numbers.
//!
//! # Architecture
//!
//! - [`types`] - Value and type-tag definitions
//! - [`options`] - Parse options (whitespace set)
//! - [`cursor`] - Forward-only scan position over the input bytes
//! - [`parser`] - Literal/number matchers, value dispatch, trailing check
//!
//! # Example
//!
//! ```
//! use leptjson::json::{parse, parse_into, JsonType, JsonValue};
//! use leptjson::Status;
//!
//! let value = parse(b" -1.5E-3 ").unwrap();
//! assert_eq!(value.get_type(), JsonType::Number);
//! assert_eq!(value.get_number(), -1.5e-3);
//!
//! let mut slot = JsonValue::default();
//! assert_eq!(parse_into(&mut slot, b"true false"), Status::RootNotSingular);
//! assert!(slot.is_null());
//! ```

pub mod cursor;
pub mod options;
pub mod parser;
pub mod types;

// Re-export commonly used items
pub use options::{ParseOptions, WhitespaceSet};
pub use parser::{parse, parse_into, parse_into_with_options, parse_with_options};
pub use types::{get_number, get_type, JsonType, JsonValue};
