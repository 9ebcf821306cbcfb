//! # Error reporting
//!
//! Failures of rational arithmetic and of reading rationals from text.
use std::error::Error;
use std::fmt;
use std::num::ParseIntError;

/// A `RationalError` is returned when an operation can't produce a value in canonical form.
///
/// None of these are recovered from internally: the operation that failed leaves its operands
/// untouched.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum RationalError {
    /// A denominator of zero was provided at construction or through a setter.
    DenominatorZero,
    /// Division by a zero valued rational or integer, including the reciprocal of zero.
    DivisionByZero,
    /// The floating point value to convert is infinite or NaN.
    NonFinite,
    /// The floating point value to convert is so small that it evaluates to zero after scaling its
    /// denominator into the range of the element type.
    Underflow,
    /// An intermediate or final result doesn't fit in the element type.
    Overflow,
}

impl fmt::Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            RationalError::DenominatorZero => "Denominator can not be zero.",
            RationalError::DivisionByZero => "Division by zero.",
            RationalError::NonFinite => "Value can not be infinite or NaN.",
            RationalError::Underflow => "Value evaluates to zero due to being too small.",
            RationalError::Overflow => "Value doesn't fit in the element type.",
        })
    }
}

impl Error for RationalError {}

/// A `ParseRationalError` represents all errors encountered while reading a rational from text.
///
/// It may hold the error that caused it: either the failure to read one of the two integers, or
/// the rejection of the integers that were read.
#[derive(Debug)]
pub struct ParseRationalError {
    description: String,
    source: Option<ParseErrorSource>,
}

#[derive(Debug)]
enum ParseErrorSource {
    Integer(ParseIntError),
    Value(RationalError),
}

impl ParseRationalError {
    /// Create a new `ParseRationalError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong with the text.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), source: None, }
    }

    /// Wrap a failure to read one of the integers of the text.
    pub fn with_integer_cause(description: impl Into<String>, error: ParseIntError) -> Self {
        Self {
            description: description.into(),
            source: Some(ParseErrorSource::Integer(error)),
        }
    }

    /// Wrap the rejection of a syntactically valid numerator and denominator.
    pub fn with_cause(description: impl Into<String>, error: RationalError) -> Self {
        Self {
            description: description.into(),
            source: Some(ParseErrorSource::Value(error)),
        }
    }

    /// The `RationalError` that caused this error, if the text was syntactically valid.
    pub fn kind(&self) -> Option<RationalError> {
        match self.source {
            Some(ParseErrorSource::Value(error)) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for ParseRationalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseError: {}", self.description)?;
        match &self.source {
            Some(ParseErrorSource::Integer(error)) => write!(f, " ({})", error),
            Some(ParseErrorSource::Value(error)) => write!(f, " ({})", error),
            None => Ok(()),
        }
    }
}

impl Error for ParseRationalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(ParseErrorSource::Integer(error)) => Some(error),
            Some(ParseErrorSource::Value(error)) => Some(error),
            None => None,
        }
    }
}

#[cfg(test)]
mod test {
    use std::error::Error;

    use crate::error::{ParseRationalError, RationalError};

    #[test]
    fn display() {
        assert_eq!(RationalError::DenominatorZero.to_string(), "Denominator can not be zero.");
        assert_eq!(RationalError::DivisionByZero.to_string(), "Division by zero.");

        let error = ParseRationalError::new("Empty text.");
        assert_eq!(error.to_string(), "ParseError: Empty text.");
        assert!(error.source().is_none());
        assert_eq!(error.kind(), None);
    }

    #[test]
    fn source() {
        let error = ParseRationalError::with_cause("Invalid rational \"1/0\".", RationalError::DenominatorZero);
        assert_eq!(error.kind(), Some(RationalError::DenominatorZero));
        assert_eq!(error.source().unwrap().to_string(), "Denominator can not be zero.");

        let integer_error = "x".parse::<i32>().unwrap_err();
        let error = ParseRationalError::with_integer_cause("Invalid numerator \"x\".", integer_error);
        assert!(error.source().is_some());
        assert_eq!(error.kind(), None);
    }
}
