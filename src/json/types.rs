//! JSON value types.
//!
//! Only the scalar subset is modelled: `null`, `true`, `false` and numbers.
//! A value is replaced wholesale by a successful parse and is never patched
//! in place.

use std::fmt;

use serde::Serialize;

/// A parsed JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum JsonValue {
    /// JSON null literal
    #[default]
    Null,
    /// JSON `true` literal
    True,
    /// JSON `false` literal
    False,
    /// JSON number as an IEEE-754 double
    Number(f64),
}

/// The variant tag of a [`JsonValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    /// `null`
    Null,
    /// `false`
    False,
    /// `true`
    True,
    /// any number
    Number,
}

impl JsonType {
    /// Lowercase name, as used in reports.
    pub const fn as_str(&self) -> &'static str {
        match self {
            JsonType::Null => "null",
            JsonType::False => "false",
            JsonType::True => "true",
            JsonType::Number => "number",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsonValue {
    /// Returns the active variant tag.
    pub fn get_type(&self) -> JsonType {
        match self {
            JsonValue::Null => JsonType::Null,
            JsonValue::True => JsonType::True,
            JsonValue::False => JsonType::False,
            JsonValue::Number(_) => JsonType::Number,
        }
    }

    /// Returns the numeric payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a number. Use [`JsonValue::as_f64`] when the
    /// variant is not already known.
    #[allow(clippy::panic)]
    pub fn get_number(&self) -> f64 {
        match self {
            JsonValue::Number(n) => *n,
            other => panic!("get_number called on a {} value", other.type_name()),
        }
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns true if this is `true` or `false`.
    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::True | JsonValue::False)
    }

    /// Returns true if this is a number value.
    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    /// Returns the boolean value if this is `true`/`false`, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::True => Some(true),
            JsonValue::False => Some(false),
            _ => None,
        }
    }

    /// Returns the number value if this is a Number, None otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the type name as a string for error messages.
    pub fn type_name(&self) -> &'static str {
        self.get_type().as_str()
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        if b {
            JsonValue::True
        } else {
            JsonValue::False
        }
    }
}

impl From<f64> for JsonValue {
    fn from(n: f64) -> Self {
        JsonValue::Number(n)
    }
}

/// Returns the active variant tag of `value`.
pub fn get_type(value: &JsonValue) -> JsonType {
    value.get_type()
}

/// Returns the numeric payload of `value`.
///
/// # Panics
///
/// Panics if `value` is not a number.
pub fn get_number(value: &JsonValue) -> f64 {
    value.get_number()
}
