use crate::Problem;

/// Ratio of two 32-bit integers
///
/// The sign always lives in the numerator: a negative denominator is
/// flipped, moving its sign to the numerator, whenever one is stored.
/// A zero denominator is permitted and marks the fraction as invalid,
/// anything which would divide by such a fraction is a
/// [`Problem::DivideByZero`].
///
/// Unlike [`crate::Rational`] a Fraction is never reduced unless asked.
///
/// # Examples
///
/// ```
/// use rationalist::Fraction;
/// let f = Fraction::new(2, -4).unwrap();
/// assert_eq!(f.numerator(), -2);
/// assert_eq!(f.denominator(), 4);
/// assert_eq!(f.reduced().unwrap(), Fraction::new(-1, 2).unwrap());
/// ```
///
/// Arithmetic may fail, so it produces a [`Result`]
/// ```
/// use rationalist::{Fraction, Problem};
/// let half = Fraction::new(1, 2).unwrap();
/// let zero = Fraction::default();
/// assert_eq!((half / zero).unwrap_err(), Problem::DivideByZero);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: i32,
    denominator: i32,
}

impl Default for Fraction {
    fn default() -> Self {
        Self {
            numerator: 0,
            denominator: 1,
        }
    }
}

impl From<i32> for Fraction {
    fn from(n: i32) -> Self {
        Self {
            numerator: n,
            denominator: 1,
        }
    }
}

impl Fraction {
    /// The fraction numerator / denominator, without reduction
    ///
    /// Only fails with [`Problem::OutOfRange`] if moving the sign of a
    /// negative denominator would overflow
    pub fn new(numerator: i32, denominator: i32) -> Result<Self, Problem> {
        let mut fraction = Self {
            numerator,
            denominator: 1,
        };
        fraction.set_denominator(denominator)?;
        Ok(fraction)
    }

    pub fn numerator(&self) -> i32 {
        self.numerator
    }

    pub fn denominator(&self) -> i32 {
        self.denominator
    }

    pub fn set_numerator(&mut self, numerator: i32) {
        self.numerator = numerator;
    }

    /// Store a new denominator, a negative value negates the numerator
    pub fn set_denominator(&mut self, denominator: i32) -> Result<(), Problem> {
        let numerator = if denominator < 0 {
            self.numerator.checked_neg().ok_or(Problem::OutOfRange)?
        } else {
            self.numerator
        };
        self.denominator = denominator.checked_abs().ok_or(Problem::OutOfRange)?;
        self.numerator = numerator;
        Ok(())
    }

    /// The value as a [`f64`]
    pub fn to_f64(&self) -> Result<f64, Problem> {
        if self.denominator == 0 {
            return Err(Problem::DivideByZero);
        }
        Ok(f64::from(self.numerator) / f64::from(self.denominator))
    }

    /// The inverse of this fraction
    ///
    /// Zero has no inverse, but inverting zero gives zero rather than failing
    ///
    /// ```
    /// use rationalist::Fraction;
    /// let f = Fraction::new(-2, 3).unwrap();
    /// assert_eq!(f.inv().unwrap(), Fraction::new(-3, 2).unwrap());
    /// assert_eq!(Fraction::default().inv().unwrap(), Fraction::default());
    /// ```
    pub fn inv(&self) -> Result<Self, Problem> {
        if self.numerator == 0 {
            return Ok(Self::default());
        }
        Self::new(self.denominator, self.numerator)
    }

    // Euclid on magnitudes, the caller passes the smaller value and larger % smaller
    fn gcd(divisor: u32, remainder: u32) -> u32 {
        if remainder == 0 {
            divisor
        } else {
            Self::gcd(remainder, divisor % remainder)
        }
    }

    fn lcm(a: i32, b: i32) -> Result<i32, Problem> {
        let divisor = a.unsigned_abs().min(b.unsigned_abs());
        let dividend = a.unsigned_abs().max(b.unsigned_abs());
        if divisor == 0 {
            return Err(Problem::DivideByZero);
        }
        let gcd = Self::gcd(divisor, dividend % divisor);
        (dividend / gcd)
            .checked_mul(divisor)
            .and_then(|lcm| i32::try_from(lcm).ok())
            .ok_or(Problem::OutOfRange)
    }

    /// Reduce this fraction in place so that numerator and denominator
    /// share no common divisor, zero becomes exactly 0/1
    ///
    /// ```
    /// use rationalist::Fraction;
    /// let mut f = Fraction::new(i32::MIN, 6).unwrap();
    /// f.to_lowest_terms().unwrap();
    /// assert_eq!((f.numerator(), f.denominator()), (-1_073_741_824, 3));
    /// ```
    pub fn to_lowest_terms(&mut self) -> Result<(), Problem> {
        if self.numerator == 0 {
            self.denominator = 1;
            return Ok(());
        }
        if self.denominator == 0 {
            return Err(Problem::DivideByZero);
        }
        let n = self.numerator.unsigned_abs();
        let d = self.denominator.unsigned_abs();
        let gcd = Self::gcd(n.min(d), n.max(d) % n.min(d));
        // The denominator is at most i32::MAX so the gcd is too
        let gcd = i32::try_from(gcd).map_err(|_| Problem::OutOfRange)?;
        let numerator = self.numerator.checked_div(gcd).ok_or(Problem::OutOfRange)?;
        let denominator = self.denominator.checked_div(gcd).ok_or(Problem::OutOfRange)?;
        *self = Self::new(numerator, denominator)?;
        Ok(())
    }

    /// A copy of this fraction in lowest terms
    pub fn reduced(&self) -> Result<Self, Problem> {
        let mut copy = *self;
        copy.to_lowest_terms()?;
        Ok(copy)
    }

    /// Scale both fractions so that they share the least common denominator
    ///
    /// ```
    /// use rationalist::Fraction;
    /// let mut a = Fraction::new(1, 4).unwrap();
    /// let mut b = Fraction::new(1, 6).unwrap();
    /// Fraction::to_common_denominator(&mut a, &mut b).unwrap();
    /// assert_eq!((a.numerator(), a.denominator()), (3, 12));
    /// assert_eq!((b.numerator(), b.denominator()), (2, 12));
    /// ```
    pub fn to_common_denominator(a: &mut Self, b: &mut Self) -> Result<(), Problem> {
        let lcm = Self::lcm(a.denominator, b.denominator)?;
        // lcm() rejected zero denominators
        let mult1 = lcm / a.denominator;
        let mult2 = lcm / b.denominator;
        *a = (*a * Self::new(mult1, mult1)?)?;
        *b = (*b * Self::new(mult2, mult2)?)?;
        Ok(())
    }
}

use core::fmt;

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.numerator == 0 {
            f.pad_integral(true, "", "0")
        } else if self.denominator == 1 {
            let int = self.numerator.unsigned_abs().to_string();
            f.pad_integral(self.numerator > 0, "", &int)
        } else if self.denominator == 0 {
            f.pad(&format!("Fraction {}/0 is invalid", self.numerator))
        } else {
            let ratio = format!("{}/{}", self.numerator.unsigned_abs(), self.denominator);
            f.pad_integral(self.numerator > 0, "", &ratio)
        }
    }
}

use core::ops::*;

impl Add for Fraction {
    type Output = Result<Self, Problem>;

    fn add(self, other: Self) -> Self::Output {
        let mut a = self;
        let mut b = other;
        Self::to_common_denominator(&mut a, &mut b)?;
        a.numerator = a
            .numerator
            .checked_add(b.numerator)
            .ok_or(Problem::OutOfRange)?;
        Ok(a)
    }
}

impl Sub for Fraction {
    type Output = Result<Self, Problem>;

    fn sub(self, other: Self) -> Self::Output {
        self + (other * Self::from(-1))?
    }
}

impl Mul for Fraction {
    type Output = Result<Self, Problem>;

    fn mul(self, other: Self) -> Self::Output {
        // Multiplying by an invalid fraction is reported as dividing by zero
        if self.denominator == 0 || other.denominator == 0 {
            return Err(Problem::DivideByZero);
        }
        let numerator = self
            .numerator
            .checked_mul(other.numerator)
            .ok_or(Problem::OutOfRange)?;
        let denominator = self
            .denominator
            .checked_mul(other.denominator)
            .ok_or(Problem::OutOfRange)?;
        Self::new(numerator, denominator)
    }
}

impl Div for Fraction {
    type Output = Result<Self, Problem>;

    fn div(self, other: Self) -> Self::Output {
        if other.numerator == 0 {
            return Err(Problem::DivideByZero);
        }
        self * other.inv()?
    }
}
