use crate::{Fraction, Problem, Rational};
use log::trace;
use num::ToPrimitive;

// The exact decimal shown by `text`, e.g. "2.785" is 2785/1000
//
// Trailing places are dropped until both terms fit an i32, so 2/3 as a
// double becomes 666666667/1000000000
fn decimal_fraction(value: f64, text: &str) -> Result<Fraction, Problem> {
    let places = text.split_once('.').map_or(0, |(_, fract)| fract.len());
    for p in (0..=places).rev() {
        let Some(scale) = num::checked_pow(10_i32, p) else {
            continue;
        };
        let Some(numerator) = (value * f64::from(scale)).round().to_i32() else {
            continue;
        };
        if p < places {
            trace!("{text} kept to {p} decimal places");
        }
        return Fraction::new(numerator, scale);
    }
    Err(Problem::OutOfRange)
}

impl TryFrom<f32> for Rational {
    type Error = Problem;

    fn try_from(n: f32) -> Result<Rational, Self::Error> {
        if n.is_nan() {
            return Err(Problem::NotANumber);
        }
        if n.is_infinite() {
            return Err(Problem::Infinity);
        }
        // The shortest text for the f32, so 0.1_f32 is exactly 1/10
        let text = n.to_string();
        let value: f64 = text
            .parse()
            .map_err(|_| Problem::InvalidFormat(text.clone()))?;
        Rational::try_from(decimal_fraction(value, &text)?)
    }
}

impl TryFrom<f64> for Rational {
    type Error = Problem;

    fn try_from(n: f64) -> Result<Rational, Self::Error> {
        if n.is_nan() {
            return Err(Problem::NotANumber);
        }
        if n.is_infinite() {
            return Err(Problem::Infinity);
        }
        Rational::try_from(decimal_fraction(n, &n.to_string())?)
    }
}
