//! Composable validators.

use core::{
    error::Error,
    fmt::{Debug, Display},
    ops::RangeInclusive,
};

use regex::Regex;

macro_rules! impl_error {
    ($ident:ident,$message:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[doc = $message]
        pub struct $ident;

        impl core::fmt::Display for $ident {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, $message)
            }
        }

        impl core::error::Error for $ident {}
    };
}

/// Trait for validating values of type `T`.
///
/// Implementors of this trait provide a method to validate values
/// and return either success or a reason for validation failure.
pub trait Validator<T>: Clone {
    /// The error type returned when validation fails.
    type Err: Error;
    /// Validates the given value.
    ///
    /// # Errors
    ///
    /// Returns the reason `value` was rejected.
    fn validate(&self, value: T) -> Result<(), Self::Err>;

    /// Combines this validator with another using logical AND.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        Self: Sized,
        V: Validator<T>,
    {
        And(self, other)
    }

    /// Combines this validator with another using logical OR.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        Self: Sized,
        V: Validator<T>,
    {
        Or(self, other)
    }
}

/// An error indicating that a value is outside an inclusive range.
#[derive(Debug, Clone, PartialEq)]
pub struct OutOfRange<T>(pub RangeInclusive<T>);

impl<T: Display> Display for OutOfRange<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Value is out of range: {} - {}.",
            self.0.start(),
            self.0.end()
        )
    }
}

impl<T: Display + Debug> Error for OutOfRange<T> {}

impl Validator<f64> for RangeInclusive<f64> {
    type Err = OutOfRange<f64>;

    // NaN is never contained, so it is rejected too
    fn validate(&self, value: f64) -> Result<(), Self::Err> {
        self.contains(&value)
            .then_some(())
            .ok_or_else(|| OutOfRange(self.clone()))
    }
}

impl_error!(NotMatch, "Value does not match the required pattern.");

impl<T> Validator<T> for Regex
where
    T: AsRef<str>,
{
    type Err = NotMatch;
    fn validate(&self, value: T) -> Result<(), Self::Err> {
        self.is_match(value.as_ref()).then_some(()).ok_or(NotMatch)
    }
}

/// A validator that combines two validators with logical AND.
/// Short-circuits on the first failure.
#[derive(Debug, Clone)]
pub struct And<A, B>(A, B);

/// An error type for the `And` validator, representing which validator failed.
#[derive(Debug, Clone)]
pub enum AndError<A, B> {
    /// The first validator failed.
    A(A),
    /// The second validator failed.
    B(B),
}

impl<A, B> Display for AndError<A, B>
where
    A: Display,
    B: Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::A(a) => write!(f, "{a}"),
            Self::B(b) => write!(f, "{b}"),
        }
    }
}

impl<A, B> Error for AndError<A, B>
where
    A: Error,
    B: Error,
{
}

impl<T, A, B> Validator<T> for And<A, B>
where
    T: Clone,
    A: Validator<T>,
    B: Validator<T>,
{
    type Err = AndError<A::Err, B::Err>;
    fn validate(&self, value: T) -> Result<(), Self::Err> {
        self.0.validate(value.clone()).map_err(AndError::A)?;
        self.1.validate(value).map_err(AndError::B)
    }
}

/// A validator that combines two validators with logical OR.
/// Short-circuits on the first success.
#[derive(Debug, Clone)]
pub struct Or<A, B>(A, B);

/// An error type for the `Or` validator, carrying both failures.
#[derive(Debug, Clone)]
pub struct OrError<A, B>(pub A, pub B);

impl<A, B> Display for OrError<A, B>
where
    A: Display,
    B: Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "At least one of the following errors occurred:\n1. {}\n2. {}",
            self.0, self.1
        )
    }
}

impl<A, B> Error for OrError<A, B>
where
    A: Error,
    B: Error,
{
}

impl<T, A, B> Validator<T> for Or<A, B>
where
    T: Clone,
    A: Validator<T>,
    B: Validator<T>,
{
    type Err = OrError<A::Err, B::Err>;
    fn validate(&self, value: T) -> Result<(), Self::Err> {
        self.0
            .validate(value.clone())
            .or_else(|e1| self.1.validate(value).map_err(|e2| OrError(e1, e2)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn ranges_are_inclusive() {
        let range = 0.0_f64..=255.0;
        assert!(range.validate(0.0).is_ok());
        assert!(range.validate(255.0).is_ok());
        assert!(range.validate(255.5).is_err());
        assert!(range.validate(f64::NAN).is_err());
    }

    #[test]
    fn out_of_range_message() {
        let err = (0.0_f64..=1.0).validate(2.0).unwrap_err();
        assert_eq!(err.to_string(), "Value is out of range: 0 - 1.");
    }

    #[test]
    fn regex_validator() {
        let digits = Regex::new(r"^\d+$").unwrap();
        assert!(digits.validate("123").is_ok());
        assert_eq!(digits.validate("12a"), Err(NotMatch));
    }

    #[test]
    fn and_reports_first_failure() {
        let narrow = (0.0_f64..=100.0).and(10.0_f64..=20.0);
        assert!(narrow.validate(15.0).is_ok());
        assert!(matches!(narrow.validate(-1.0), Err(AndError::A(_))));
        assert!(matches!(narrow.validate(50.0), Err(AndError::B(_))));
    }

    #[test]
    fn or_succeeds_if_either_does() {
        let either = (0.0_f64..=1.0).or(10.0_f64..=11.0);
        assert!(either.validate(0.5).is_ok());
        assert!(either.validate(10.5).is_ok());
        let err = either.validate(5.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "At least one of the following errors occurred:\n\
             1. Value is out of range: 0 - 1.\n\
             2. Value is out of range: 10 - 11."
        );
    }
}
