//! # Literals
//!
//! Shorthands for writing down rationals of a specific element type, either from a single integer
//! or from a numerator and denominator.
//!
//! The two argument form panics on a zero denominator.

/// Shorthand for creating a `Rational8`.
#[macro_export]
macro_rules! R8 {
    ($value:expr) => {
        $crate::Rational8::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::Rational8::new($numer, $denom).unwrap()
    };
}

/// Shorthand for creating a `Rational16`.
#[macro_export]
macro_rules! R16 {
    ($value:expr) => {
        $crate::Rational16::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::Rational16::new($numer, $denom).unwrap()
    };
}

/// Shorthand for creating a `Rational32`.
#[macro_export]
macro_rules! R32 {
    ($value:expr) => {
        $crate::Rational32::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::Rational32::new($numer, $denom).unwrap()
    };
}

/// Shorthand for creating a `Rational64`.
#[macro_export]
macro_rules! R64 {
    ($value:expr) => {
        $crate::Rational64::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::Rational64::new($numer, $denom).unwrap()
    };
}

/// Shorthand for creating a `Rational128`.
#[macro_export]
macro_rules! R128 {
    ($value:expr) => {
        $crate::Rational128::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::Rational128::new($numer, $denom).unwrap()
    };
}

/// Shorthand for creating a `RationalU8`.
#[macro_export]
macro_rules! RU8 {
    ($value:expr) => {
        $crate::RationalU8::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::RationalU8::new($numer, $denom).unwrap()
    };
}

/// Shorthand for creating a `RationalU16`.
#[macro_export]
macro_rules! RU16 {
    ($value:expr) => {
        $crate::RationalU16::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::RationalU16::new($numer, $denom).unwrap()
    };
}

/// Shorthand for creating a `RationalU32`.
#[macro_export]
macro_rules! RU32 {
    ($value:expr) => {
        $crate::RationalU32::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::RationalU32::new($numer, $denom).unwrap()
    };
}

/// Shorthand for creating a `RationalU64`.
#[macro_export]
macro_rules! RU64 {
    ($value:expr) => {
        $crate::RationalU64::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::RationalU64::new($numer, $denom).unwrap()
    };
}

/// Shorthand for creating a `RationalU128`.
#[macro_export]
macro_rules! RU128 {
    ($value:expr) => {
        $crate::RationalU128::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::RationalU128::new($numer, $denom).unwrap()
    };
}
