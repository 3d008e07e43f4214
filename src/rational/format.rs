use crate::{Problem, Rational};
use core::fmt;
use std::io;

/// How a [`Rational`] is written out
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Lowest terms, e.g. `-3/4`, or just `20` for a whole number
    #[default]
    Fraction,
    /// The [`f64`] value, e.g. `-0.75`
    Decimal,
}

/// A [`Rational`] paired with the [`Format`] to display it in
///
/// ```
/// use rationalist::{Format, Rational};
/// let half = Rational::fraction(1, 2).unwrap();
/// assert_eq!(format!("{}", half.decimal()), "0.5");
/// assert_eq!(format!("{}", half.with_format(Format::Fraction)), "1/2");
/// assert_eq!(format!("{half}"), "1/2");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Formatted {
    rational: Rational,
    format: Format,
}

impl Rational {
    pub fn with_format(self, format: Format) -> Formatted {
        Formatted {
            rational: self,
            format,
        }
    }

    /// Display as a decimal rather than a fraction
    pub fn decimal(self) -> Formatted {
        self.with_format(Format::Decimal)
    }

    fn fmt_fraction(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only a value broken by the raw setters can fail to reduce
        let fraction = self.as_fraction();
        match fraction.reduced() {
            Ok(reduced) => fmt::Display::fmt(&reduced, f),
            Err(_) => fmt::Display::fmt(fraction, f),
        }
    }

    fn fmt_decimal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_f64() {
            Ok(value) => fmt::Display::fmt(&value, f),
            Err(_) => fmt::Display::fmt(self.as_fraction(), f),
        }
    }

    /// Write this value in the chosen [`Format`]
    ///
    /// A value with a zero denominator is written as a diagnostic in the
    /// fraction format, but has no decimal value so fails with
    /// [`Problem::DivideByZero`]
    ///
    /// ```
    /// use rationalist::{Format, Rational};
    /// let mut out = Vec::new();
    /// let r = Rational::fraction(-3, 4).unwrap();
    /// r.write(&mut out, Format::Fraction).unwrap();
    /// out.push(b' ');
    /// r.write(&mut out, Format::Decimal).unwrap();
    /// assert_eq!(out, b"-3/4 -0.75");
    /// ```
    pub fn write<W: io::Write>(&self, out: &mut W, format: Format) -> Result<(), Problem> {
        match format {
            Format::Fraction => write!(out, "{}", self.with_format(format))?,
            Format::Decimal => {
                let value = self.to_f64()?;
                write!(out, "{value}")?;
            }
        }
        Ok(())
    }

    /// Read one line of input as a Rational
    ///
    /// The line is either a number or two numbers separated by a slash,
    /// each number is an optional minus sign then digits, optionally with a
    /// decimal point followed by more digits
    ///
    /// ```
    /// use rationalist::Rational;
    /// let mut input = "4/3\n0.75\n".as_bytes();
    /// let first = Rational::read(&mut input).unwrap();
    /// let second = Rational::read(&mut input).unwrap();
    /// assert_eq!(first, Rational::fraction(4, 3).unwrap());
    /// assert_eq!(second, Rational::fraction(3, 4).unwrap());
    /// ```
    pub fn read<R: io::BufRead>(input: &mut R) -> Result<Self, Problem> {
        let mut line = String::new();
        input.read_line(&mut line)?;
        line.trim_end_matches(&['\r', '\n'][..]).parse()
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.fmt_decimal(f)
        } else {
            self.fmt_fraction(f)
        }
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            Format::Fraction => self.rational.fmt_fraction(f),
            Format::Decimal => self.rational.fmt_decimal(f),
        }
    }
}
