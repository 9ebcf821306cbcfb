use std::error::Error;

use fixed_rational::{
    denominator, Fraction, numerator, Rational, Rational128, Rational16, Rational32, Rational64,
    Rational8, RationalError, RationalU128, RationalU16, RationalU32, RationalU64, RationalU8,
};
use fixed_rational::{R128, R16, R32, R64, R8, RU128, RU16, RU32, RU64, RU8};

use super::{mean, sqrt_two_convergents};

#[test]
fn literals() {
    assert_eq!(R8!(2, 4), Rational8::new(1, 2).unwrap());
    assert_eq!(R16!(-9, 6), Rational16::new(-3, 2).unwrap());
    assert_eq!(R32!(7), Rational32::from(7));
    assert_eq!(R64!(10, -4), Rational64::new(-5, 2).unwrap());
    assert_eq!(R128!(1, 3), Rational128::new(2, 6).unwrap());

    assert_eq!(RU8!(2, 4), RationalU8::new(1, 2).unwrap());
    assert_eq!(RU16!(9, 6), RationalU16::new(3, 2).unwrap());
    assert_eq!(RU32!(7), RationalU32::from(7));
    assert_eq!(RU64!(10, 4), RationalU64::new(5, 2).unwrap());
    assert_eq!(RU128!(1, 3), RationalU128::new(2, 6).unwrap());
}

#[test]
fn text() -> Result<(), Box<dyn Error>> {
    let value: Rational64 = "7/3".parse()?;
    assert_eq!((value.numerator(), value.denominator()), (7, 3));
    let value: Rational64 = "5".parse()?;
    assert_eq!((value.numerator(), value.denominator()), (5, 1));

    let sum = "1/6".parse::<Rational32>()? + "1/3".parse::<Rational32>()?;
    assert_eq!(sum.to_string(), "1/2");

    let error = "4/0".parse::<Rational32>().unwrap_err();
    assert_eq!(error.kind(), Some(RationalError::DenominatorZero));
    assert!(error.source().is_some());

    Ok(())
}

#[test]
fn uniform_access() {
    fn describe<F: Fraction>(value: F) -> String
    where
        F::Part: std::fmt::Display,
    {
        format!("{} over {}", numerator(&value), denominator(&value))
    }

    assert_eq!(describe(R32!(-6, 8)), "-3 over 4");
    assert_eq!(describe(12_u16), "12 over 1");
    assert_eq!(describe(RU64!(3)), "3 over 1");
}

#[test]
fn generic_code() {
    assert_eq!(mean(&[R32!(1, 2), R32!(1, 3), R32!(1, 6)]), Ok(R32!(1, 3)));
    assert_eq!(mean(&[RU8!(3), RU8!(4)]), Ok(RU8!(7, 2)));
    assert_eq!(mean::<i64>(&[]), Err(RationalError::DivisionByZero));
    assert_eq!(mean(&[R8!(100), R8!(100)]), Err(RationalError::Overflow));
}

#[test]
fn convergents() {
    let convergents = sqrt_two_convergents::<i64>(6).unwrap();
    let expected = [R64!(1), R64!(3, 2), R64!(7, 5), R64!(17, 12), R64!(41, 29), R64!(99, 70)];
    assert_eq!(convergents, expected);

    // Alternating around the square root of two.
    assert!(convergents[0] < convergents[2] && convergents[2] < convergents[4]);
    assert!(convergents[5] < convergents[3] && convergents[3] < convergents[1]);
    for convergent in convergents {
        let squared = convergent * convergent;
        assert!((squared - 2).abs() <= R64!(1));
    }

    // The numerators grow beyond what eight bits hold.
    assert_eq!(sqrt_two_convergents::<i8>(10), Err(RationalError::Overflow));
}

#[test]
fn exact_floats() -> Result<(), RationalError> {
    let tenth = Rational128::from_float(0.1)?;
    assert_ne!(tenth, R128!(1, 10));
    assert_eq!(tenth.denominator(), 1 << 55);
    assert_eq!(tenth.evaluate::<f64>(), Some(0.1));

    // The exact sum of the floats 0.1 and 0.2 is not the float 0.3, and neither is their
    // floating point sum.
    let sum = tenth + Rational128::from_float(0.2)?;
    assert_ne!(sum, Rational128::from_float(0.3)?);
    assert_eq!(sum.evaluate::<f64>(), Some(0.1 + 0.2));

    assert_eq!(Rational::<i32>::from_float(f64::NAN), Err(RationalError::NonFinite));

    Ok(())
}

#[test]
fn ordering() {
    let mut values = vec![RU16!(3, 4), RU16!(2, 3), RU16!(5, 7), RU16!(1), RU16!(0)];
    values.sort();
    assert_eq!(values, vec![RU16!(0), RU16!(2, 3), RU16!(5, 7), RU16!(3, 4), RU16!(1)]);

    assert_eq!(values.iter().max(), Some(&RU16!(1)));
    assert!(RU16!(5, 7) > 0);
}
