//! # Reading rationals from text
//!
//! The textual form is `numerator/denominator`, where the slash and denominator are optional.
//! Whitespace around both integers is ignored.
use std::str::FromStr;

use crate::error::ParseRationalError;
use crate::rational::Rational;
use crate::traits::Element;

impl<T: Element> FromStr for Rational<T> {
    type Err = ParseRationalError;

    /// Read a rational from text.
    ///
    /// The integers read are brought in canonical form through `Rational::new`, so a zero
    /// denominator is rejected the same way.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.trim().is_empty() {
            return Err(ParseRationalError::new("Can't read a rational from empty text."));
        }

        let (numerator, denominator) = match text.split_once('/') {
            None => (text, None),
            Some((numerator, denominator)) => (numerator, Some(denominator)),
        };

        let numerator = parse_part(numerator, "numerator")?;
        let denominator = match denominator {
            None => T::one(),
            Some(denominator) => parse_part(denominator, "denominator")?,
        };

        Self::new(numerator, denominator)
            .map_err(|error| ParseRationalError::with_cause(
                format!("Invalid rational \"{}\".", text.trim()),
                error,
            ))
    }
}

fn parse_part<T: Element>(text: &str, part: &str) -> Result<T, ParseRationalError> {
    let text = text.trim();
    text.parse()
        .map_err(|error| ParseRationalError::with_integer_cause(
            format!("Failed to parse {} \"{}\".", part, text),
            error,
        ))
}

#[cfg(test)]
mod test {
    use crate::error::RationalError;
    use crate::rational::{Rational32, RationalU8};

    #[test]
    fn with_denominator() {
        let value: Rational32 = "7/3".parse().unwrap();
        assert_eq!((value.numerator(), value.denominator()), (7, 3));

        let value: Rational32 = "6/-4".parse().unwrap();
        assert_eq!((value.numerator(), value.denominator()), (-3, 2));

        let value: Rational32 = " 10 / 15 ".parse().unwrap();
        assert_eq!((value.numerator(), value.denominator()), (2, 3));
    }

    #[test]
    fn without_denominator() {
        let value: Rational32 = "5".parse().unwrap();
        assert_eq!((value.numerator(), value.denominator()), (5, 1));

        let value: Rational32 = "-12".parse().unwrap();
        assert_eq!((value.numerator(), value.denominator()), (-12, 1));
    }

    #[test]
    fn denominator_zero() {
        let error = "1/0".parse::<Rational32>().unwrap_err();
        assert_eq!(error.kind(), Some(RationalError::DenominatorZero));
    }

    #[test]
    fn malformed() {
        for text in ["", "  ", "/", "1/", "/2", "1/2/3", "a/2", "1.5", "1 2"] {
            let error = text.parse::<Rational32>().unwrap_err();
            assert_eq!(error.kind(), None, "{:?}", text);
        }

        assert!("-1".parse::<RationalU8>().is_err());
        assert!("256".parse::<RationalU8>().is_err());
    }

    #[test]
    fn display_is_read_back() {
        for text in ["0/1", "-3/2", "7/3", "5/1"] {
            let value: Rational32 = text.parse().unwrap();
            assert_eq!(value.to_string(), text);
        }
    }
}
