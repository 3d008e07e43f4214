use crate::Rational;
use std::io;
use thiserror::Error;

/// Problems when attempting arithmetic with a [`Rational`], parsing one,
/// or storing them in a [`crate::RationalArray`]
#[derive(Clone, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum Problem {
    /// Tried to divide by zero, also arises when reducing, inverting or aligning
    /// a fraction whose denominator is zero
    #[error("attempted to divide by zero")]
    DivideByZero,
    /// The text was not a number, or a pair of numbers separated by a slash
    #[error("{0:?} is not a valid rational")]
    InvalidFormat(String),
    /// An argument was rejected, with the reason
    #[error("invalid argument {argument}: {reason}")]
    InvalidArgument { argument: String, reason: String },
    /// The index was outside of the elements in use
    #[error("index {0} is out of bounds")]
    IndexOutOfBounds(isize),
    /// The value does not fit in a 32-bit numerator or denominator
    #[error("value out of range for a 32-bit rational")]
    OutOfRange,
    /// Tried to convert a floating point NaN, which has no equivalent
    #[error("NaN has no rational equivalent")]
    NotANumber,
    /// Tried to convert a floating point Infinity which has no equivalent
    #[error("infinity has no rational equivalent")]
    Infinity,
    /// Reading a line of input failed
    #[error("unable to read input: {0}")]
    Io(io::ErrorKind),
    /// Upper and lower case letter counts did not add up to the letter count
    #[error("sum of uppercase and lowercase characters does not equal alphabetic total\nUpper = {upper}\nLower = {lower}\nTotal = {total}")]
    CountsNotEqual {
        lower: Rational,
        upper: Rational,
        total: Rational,
    },
    /// The character class ratios did not add up to one
    #[error("sum of alphabetic, decimal, punctuation and other ratios is not equal to 1\nAlpha = {alpha}\nDecimal = {decimal}\nPunctuation = {punctuation}\nOther = {other}\nSum = {sum}")]
    RatiosNotEqual {
        alpha: Rational,
        decimal: Rational,
        punctuation: Rational,
        other: Rational,
        sum: Rational,
    },
}

impl From<io::Error> for Problem {
    fn from(e: io::Error) -> Self {
        Problem::Io(e.kind())
    }
}
