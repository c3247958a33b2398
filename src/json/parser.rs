//! JSON parser for the scalar subset.
//!
//! Recursive descent over a [`Cursor`]: skip whitespace, dispatch on one byte
//! of lookahead, then require that only whitespace follows the value.
//!
//! Numbers are validated against the JSON grammar before any conversion, so
//! forms that `str::parse::<f64>` would accept on its own (`+1`, `.5`, `1.`,
//! `inf`, `NaN`) never reach the conversion step.

use tracing::{debug, trace};

use super::cursor::Cursor;
use super::options::ParseOptions;
use super::types::JsonValue;
use crate::error::{ParseError, ParseResult, Status};

/// Single-document parser.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given input.
    pub fn new(input: &'a [u8], options: ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(input, options.whitespace),
        }
    }

    /// Get the current position in the input.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Parse the input as exactly one value.
    ///
    /// A failure of the value itself is reported as-is, even when trailing
    /// content follows it.
    pub fn parse(&mut self) -> ParseResult<JsonValue> {
        self.cursor.skip_whitespace();
        let value = self.parse_value()?;

        // Ensure no trailing content
        self.cursor.skip_whitespace();
        if !self.cursor.is_at_end() {
            return Err(ParseError::RootNotSingular);
        }

        Ok(value)
    }

    /// Parse a single value, chosen by the byte under the cursor.
    fn parse_value(&mut self) -> ParseResult<JsonValue> {
        match self.cursor.peek() {
            Some(b'n') => self.parse_literal(b"null", JsonValue::Null),
            Some(b't') => self.parse_literal(b"true", JsonValue::True),
            Some(b'f') => self.parse_literal(b"false", JsonValue::False),
            None => Err(ParseError::ExpectValue),
            Some(_) => self.parse_number(),
        }
    }

    /// Match `literal` at the cursor. The first byte has already been used
    /// for dispatch.
    fn parse_literal(&mut self, literal: &'static [u8], value: JsonValue) -> ParseResult<JsonValue> {
        debug_assert_eq!(self.cursor.peek(), literal.first().copied());
        self.cursor.skip(1);

        for &expected in literal.iter().skip(1) {
            if self.cursor.advance() != Some(expected) {
                return Err(ParseError::InvalidValue);
            }
        }

        // `truee` is a misspelled keyword, not `true` plus garbage
        if let Some(b) = self.cursor.peek() {
            if (b.is_ascii_alphanumeric() || b == b'_') && !self.cursor.is_whitespace(b) {
                return Err(ParseError::InvalidValue);
            }
        }

        Ok(value)
    }

    /// Validate a number token by lookahead, then convert it.
    fn parse_number(&mut self) -> ParseResult<JsonValue> {
        let mut len = 0;

        // Optional minus sign
        if self.cursor.peek_at(len) == Some(b'-') {
            len += 1;
        }

        // Integer part
        match self.cursor.peek_at(len) {
            Some(b'0') => {
                len += 1;
                // After leading zero, must not have more digits
                if let Some(b'0'..=b'9') = self.cursor.peek_at(len) {
                    return Err(ParseError::InvalidValue);
                }
            }
            Some(b'1'..=b'9') => {
                len += 1;
                len += self.digit_run(len);
            }
            _ => return Err(ParseError::InvalidValue),
        }

        // Fraction
        if self.cursor.peek_at(len) == Some(b'.') {
            len += 1;
            let digits = self.digit_run(len);
            if digits == 0 {
                return Err(ParseError::InvalidValue);
            }
            len += digits;
        }

        // Exponent
        if let Some(b'e' | b'E') = self.cursor.peek_at(len) {
            len += 1;
            if let Some(b'+' | b'-') = self.cursor.peek_at(len) {
                len += 1;
            }
            let digits = self.digit_run(len);
            if digits == 0 {
                return Err(ParseError::InvalidValue);
            }
            len += digits;
        }

        let span = self.cursor.slice(len).ok_or(ParseError::InvalidValue)?;
        let text = std::str::from_utf8(span).map_err(|_| ParseError::InvalidValue)?;
        let n: f64 = text.parse().map_err(|_| ParseError::InvalidValue)?;
        if n.is_infinite() {
            return Err(ParseError::NumberTooBig);
        }

        self.cursor.skip(len);
        Ok(JsonValue::Number(n))
    }

    /// Count consecutive ASCII digits starting `offset` bytes past the cursor.
    fn digit_run(&self, offset: usize) -> usize {
        let mut count = 0;
        while let Some(b'0'..=b'9') = self.cursor.peek_at(offset + count) {
            count += 1;
        }
        count
    }
}

/// Parse a document into a JsonValue with standard options.
pub fn parse(input: &[u8]) -> ParseResult<JsonValue> {
    parse_with_options(input, ParseOptions::standard())
}

/// Parse a document into a JsonValue with custom options.
pub fn parse_with_options(input: &[u8], options: ParseOptions) -> ParseResult<JsonValue> {
    let mut parser = Parser::new(input, options);
    let result = parser.parse();
    match &result {
        Ok(value) => trace!(value_type = %value.get_type(), "parsed json value"),
        Err(err) => debug!(
            offset = parser.position(),
            status = err.name(),
            "json parse failed"
        ),
    }
    result
}

/// Parse a document into a caller-owned slot with standard options.
///
/// The slot is reset to `Null` first and only receives the parsed value when
/// the returned status is [`Status::Ok`].
pub fn parse_into(out: &mut JsonValue, input: &[u8]) -> Status {
    parse_into_with_options(out, input, ParseOptions::standard())
}

/// Parse a document into a caller-owned slot with custom options.
pub fn parse_into_with_options(out: &mut JsonValue, input: &[u8], options: ParseOptions) -> Status {
    *out = JsonValue::Null;
    match parse_with_options(input, options) {
        Ok(value) => {
            *out = value;
            Status::Ok
        }
        Err(err) => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(input: &str) -> Status {
        let mut value = JsonValue::default();
        parse_into(&mut value, input.as_bytes())
    }

    fn number(input: &str) -> f64 {
        parse(input.as_bytes()).unwrap().get_number()
    }

    #[test]
    fn test_parse_null() {
        assert_eq!(parse(b"null").unwrap(), JsonValue::Null);
    }

    #[test]
    fn test_parse_booleans() {
        assert_eq!(parse(b"true").unwrap(), JsonValue::True);
        assert_eq!(parse(b"false").unwrap(), JsonValue::False);
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(parse(b" \t\n\r true \r\n").unwrap(), JsonValue::True);
    }

    #[test]
    fn test_expect_value() {
        assert_eq!(parse(b""), Err(ParseError::ExpectValue));
        assert_eq!(parse(b" \n\t\r"), Err(ParseError::ExpectValue));
    }

    #[test]
    fn test_bad_literals() {
        assert_eq!(parse(b"nul"), Err(ParseError::InvalidValue));
        assert_eq!(parse(b"tru"), Err(ParseError::InvalidValue));
        assert_eq!(parse(b"fals"), Err(ParseError::InvalidValue));
        assert_eq!(parse(b"nulL"), Err(ParseError::InvalidValue));
        assert_eq!(parse(b"False"), Err(ParseError::InvalidValue));
        assert_eq!(parse(b"?"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_literal_keyword_boundary() {
        assert_eq!(parse(b"truee"), Err(ParseError::InvalidValue));
        assert_eq!(parse(b"nullx"), Err(ParseError::InvalidValue));
        assert_eq!(parse(b"false0"), Err(ParseError::InvalidValue));
        assert_eq!(parse(b"null_"), Err(ParseError::InvalidValue));
        assert_eq!(parse(b"null,"), Err(ParseError::RootNotSingular));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(number("0"), 0.0);
        assert_eq!(number("-0"), 0.0);
        assert!(number("-0").is_sign_negative());
        assert_eq!(number("0.0"), 0.0);
        assert_eq!(number("1"), 1.0);
        assert_eq!(number("-1"), -1.0);
        assert_eq!(number("1.5"), 1.5);
        assert_eq!(number("-1.5"), -1.5);
        assert_eq!(number("3.1416"), 3.1416);
        assert_eq!(number("1E10"), 1e10);
        assert_eq!(number("1e10"), 1e10);
        assert_eq!(number("1E+10"), 1e10);
        assert_eq!(number("1E-10"), 1e-10);
        assert_eq!(number("-1E10"), -1e10);
        assert_eq!(number("1.234E+10"), 1.234e10);
        assert_eq!(number("1e-10000"), 0.0);
    }

    #[test]
    fn test_number_boundaries() {
        assert_eq!(number("1.0000000000000002"), 1.0000000000000002);
        assert_eq!(number("4.9406564584124654e-324"), 4.9406564584124654e-324);
        assert_eq!(number("2.2250738585072014e-308"), 2.2250738585072014e-308);
        assert_eq!(number("1.7976931348623157e+308"), 1.7976931348623157e308);
        assert_eq!(number("-1.7976931348623157e+308"), -1.7976931348623157e308);
    }

    #[test]
    fn test_invalid_numbers() {
        for input in [
            "+0", "+1", ".123", "1.", "INF", "inf", "NAN", "nan", "-", "1e", "1e+", "1E-", "-.5",
            "1.e5",
        ] {
            assert_eq!(status_of(input), Status::InvalidValue, "input {:?}", input);
        }
    }

    #[test]
    fn test_leading_zero_rejected() {
        assert_eq!(parse(b"01"), Err(ParseError::InvalidValue));
        assert_eq!(parse(b"-01"), Err(ParseError::InvalidValue));
        assert_eq!(parse(b"00.5"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_number_too_big() {
        assert_eq!(parse(b"1e309"), Err(ParseError::NumberTooBig));
        assert_eq!(parse(b"-1e309"), Err(ParseError::NumberTooBig));
        assert_eq!(parse(b"1e400"), Err(ParseError::NumberTooBig));
    }

    #[test]
    fn test_trailing_content_rejected() {
        assert_eq!(parse(b"null x"), Err(ParseError::RootNotSingular));
        assert_eq!(parse(b"true false"), Err(ParseError::RootNotSingular));
        assert_eq!(parse(b"123 abc"), Err(ParseError::RootNotSingular));
        assert_eq!(parse(b"0x0"), Err(ParseError::RootNotSingular));
        assert_eq!(parse(b"0x123"), Err(ParseError::RootNotSingular));
        assert_eq!(parse(b"1.5.2"), Err(ParseError::RootNotSingular));
        assert_eq!(parse(b"0\0"), Err(ParseError::RootNotSingular));
    }

    #[test]
    fn test_value_error_wins_over_trailing_content() {
        assert_eq!(parse(b"nul garbage"), Err(ParseError::InvalidValue));
        assert_eq!(parse(b"1e999 x"), Err(ParseError::NumberTooBig));
    }

    #[test]
    fn test_parse_into_resets_slot() {
        let mut value = JsonValue::Number(7.0);
        assert_eq!(parse_into(&mut value, b"tru"), Status::InvalidValue);
        assert_eq!(value, JsonValue::Null);

        let mut value = JsonValue::True;
        assert_eq!(parse_into(&mut value, b"1 2"), Status::RootNotSingular);
        assert_eq!(value, JsonValue::Null);

        assert_eq!(parse_into(&mut value, b" -2.5 "), Status::Ok);
        assert_eq!(value, JsonValue::Number(-2.5));
    }

    #[test]
    fn test_legacy_whitespace() {
        let legacy = ParseOptions::legacy();
        assert_eq!(parse_with_options(b"rnullr", legacy), Ok(JsonValue::Null));
        assert_eq!(parse_with_options(b"null\r", legacy), Err(ParseError::RootNotSingular));
        assert_eq!(parse_with_options(b"\rnull", legacy), Err(ParseError::InvalidValue));
        assert_eq!(parse(b"rnull"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_cursor_stops_after_value() {
        let mut parser = Parser::new(b"  -12.5e1  ", ParseOptions::standard());
        assert_eq!(parser.parse(), Ok(JsonValue::Number(-125.0)));
        assert_eq!(parser.position(), 11);
    }
}
