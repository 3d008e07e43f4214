use crate::{Fraction, Problem};
use log::debug;
use std::cmp::Ordering;

mod convert;
mod format;

pub use format::{Format, Formatted};

/// Ratio of two integers, always in lowest terms
///
/// This type is a [`Fraction`] which is reduced after every construction and
/// every arithmetic operation, so the numerator and denominator share no
/// common divisor and the denominator is positive.
///
/// Values are bounded by [`i32`], arithmetic which would overflow reports
/// [`Problem::OutOfRange`] rather than wrapping.
///
/// # Examples
///
/// Parsing a rational from a simple fraction
/// ```
/// use rationalist::Rational;
/// let half: Rational = "9/18".parse().unwrap();
/// assert_eq!(half, Rational::fraction(1, 2).unwrap());
/// ```
///
/// Parsing decimals, each side is converted before dividing
/// ```
/// use rationalist::Rational;
/// let five: Rational = "12.5/2.5".parse().unwrap();
/// assert_eq!(five, 5);
/// ```
///
/// Converting a 64-bit floating point number uses its shortest decimal form
/// ```
/// use rationalist::Rational;
/// let r: Rational = 0.3_f64.try_into().unwrap();
/// assert_eq!(r, Rational::fraction(3, 10).unwrap());
/// ```
///
/// Simple arithmetic
/// ```
/// use rationalist::Rational;
/// let quarter = Rational::fraction(1, 4).unwrap();
/// let eighteen = Rational::new(18);
/// let sixteen = (eighteen - 2).unwrap();
/// let four = (quarter * sixteen).unwrap();
/// assert_eq!(four, Rational::new(4));
/// ```
///
/// Both [`f32`] and [`f64`] operands are accepted, so a floating point
/// literal needs a suffix
/// ```
/// use rationalist::Rational;
/// let half = Rational::fraction(1, 2).unwrap();
/// assert_eq!((half + 0.25_f64).unwrap(), Rational::fraction(3, 4).unwrap());
/// assert_eq!((half * 0.5_f32).unwrap(), Rational::fraction(1, 4).unwrap());
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct Rational {
    fraction: Fraction,
}

impl Rational {
    /// Zero, the additive identity
    pub fn zero() -> Self {
        Self {
            fraction: Fraction::default(),
        }
    }

    /// One, the multiplicative identity
    pub fn one() -> Self {
        Self::new(1)
    }

    /// The Rational corresponding to the provided [`i32`]
    pub fn new(n: i32) -> Self {
        Self {
            fraction: Fraction::from(n),
        }
    }

    /// The Rational n / d, reduced to lowest terms
    ///
    /// A zero denominator is [`Problem::DivideByZero`], unless the numerator
    /// is also zero in which case the answer is zero
    pub fn fraction(n: i32, d: i32) -> Result<Self, Problem> {
        Self::from_fraction(Fraction::new(n, d)?)
    }

    fn from_fraction(mut fraction: Fraction) -> Result<Self, Problem> {
        fraction.to_lowest_terms()?;
        Ok(Self { fraction })
    }

    pub fn numerator(&self) -> i32 {
        self.fraction.numerator()
    }

    pub fn denominator(&self) -> i32 {
        self.fraction.denominator()
    }

    /// The underlying [`Fraction`]
    pub fn as_fraction(&self) -> &Fraction {
        &self.fraction
    }

    /// Checks if the value is an integer
    pub fn is_integer(&self) -> bool {
        self.denominator() == 1
    }

    /// Overwrite the numerator without reducing
    ///
    /// This deliberately breaks the lowest terms guarantee
    pub fn set_raw_numerator(&mut self, numerator: i32) {
        self.fraction.set_numerator(numerator);
    }

    /// Overwrite the denominator without reducing
    ///
    /// This deliberately breaks the lowest terms guarantee, and a zero
    /// denominator leaves a value on which most operations will report
    /// [`Problem::DivideByZero`]
    ///
    /// ```
    /// use rationalist::{Problem, Rational};
    /// let mut r = Rational::fraction(1, 4).unwrap();
    /// r.set_raw_denominator(0).unwrap();
    /// assert_eq!(r.to_f64(), Err(Problem::DivideByZero));
    /// ```
    pub fn set_raw_denominator(&mut self, denominator: i32) -> Result<(), Problem> {
        self.fraction.set_denominator(denominator)
    }

    /// The value as a [`f64`]
    pub fn to_f64(&self) -> Result<f64, Problem> {
        self.fraction.to_f64()
    }

    pub fn negate(&self) -> Result<Self, Problem> {
        let numerator = self.numerator().checked_neg().ok_or(Problem::OutOfRange)?;
        Self::fraction(numerator, self.denominator())
    }

    pub fn abs(&self) -> Result<Self, Problem> {
        let numerator = self.numerator().checked_abs().ok_or(Problem::OutOfRange)?;
        Self::fraction(numerator, self.denominator())
    }

    /// The inverse of this Rational, the inverse of zero is zero
    ///
    /// # Example
    ///
    /// ```
    /// use rationalist::Rational;
    /// let five = Rational::new(5);
    /// let a_fifth = Rational::fraction(1, 5).unwrap();
    /// assert_eq!(five.inv().unwrap(), a_fifth);
    /// assert_eq!(a_fifth.inv().unwrap(), five);
    /// assert_eq!(Rational::zero().inv().unwrap(), Rational::zero());
    /// ```
    pub fn inv(&self) -> Result<Self, Problem> {
        Self::from_fraction(self.fraction.inv()?)
    }

    pub fn square(&self) -> Result<Self, Problem> {
        self.pow(2)
    }

    /// Integer exponentiation
    ///
    /// ```
    /// use rationalist::Rational;
    /// let half = Rational::fraction(1, 2).unwrap();
    /// assert_eq!(half.pow(-2).unwrap(), 4);
    /// assert_eq!(half.pow(0).unwrap(), 1);
    /// ```
    pub fn pow(&self, exp: i32) -> Result<Self, Problem> {
        if exp < 0 {
            let exp = exp.checked_neg().ok_or(Problem::OutOfRange)?;
            return self.pow(exp)?.inv();
        }
        if exp == 0 {
            return Ok(Self::one());
        }
        let numerator = f64::from(self.numerator()).powi(exp);
        let denominator = f64::from(self.denominator()).powi(exp);
        Self::from_power(numerator)? / Self::from_power(denominator)?
    }

    fn from_power(value: f64) -> Result<Self, Problem> {
        if value.is_infinite() {
            return Err(Problem::OutOfRange);
        }
        Self::try_from(value)
    }

    // Both numerators once scaled to the least common denominator
    fn aligned(&self, other: &Self) -> Result<(i32, i32), Problem> {
        let mut a = self.fraction;
        let mut b = other.fraction;
        Fraction::to_common_denominator(&mut a, &mut b)?;
        Ok((a.numerator(), b.numerator()))
    }

    pub fn equal(&self, other: &Self) -> Result<bool, Problem> {
        let (a, b) = self.aligned(other)?;
        Ok(a == b)
    }

    pub fn not_equal(&self, other: &Self) -> Result<bool, Problem> {
        Ok(!self.equal(other)?)
    }

    pub fn less_than_equal(&self, other: &Self) -> Result<bool, Problem> {
        let (a, b) = self.aligned(other)?;
        Ok(a <= b)
    }

    pub fn less_than(&self, other: &Self) -> Result<bool, Problem> {
        Ok(self.less_than_equal(other)? && self.not_equal(other)?)
    }

    pub fn greater_than_equal(&self, other: &Self) -> Result<bool, Problem> {
        let (a, b) = self.aligned(other)?;
        Ok(a >= b)
    }

    pub fn greater_than(&self, other: &Self) -> Result<bool, Problem> {
        Ok(self.greater_than_equal(other)? && self.not_equal(other)?)
    }

    /// Overwrite with a whole number
    pub fn set(&mut self, n: i32) {
        *self = Self::new(n);
    }

    /// Add `rhs` to this value, which is left unchanged if that fails
    ///
    /// ```
    /// use rationalist::{Problem, Rational};
    /// let mut r = Rational::fraction(1, 2).unwrap();
    /// r.add_in_place(Rational::fraction(1, 3).unwrap()).unwrap();
    /// r.add_in_place(1).unwrap();
    /// assert_eq!(r, Rational::fraction(11, 6).unwrap());
    /// assert_eq!(r.div_in_place(0), Err(Problem::DivideByZero));
    /// assert_eq!(r, Rational::fraction(11, 6).unwrap());
    /// ```
    pub fn add_in_place<T>(&mut self, rhs: T) -> Result<(), Problem>
    where
        Self: Add<T, Output = Result<Self, Problem>>,
    {
        *self = (*self + rhs)?;
        Ok(())
    }

    pub fn sub_in_place<T>(&mut self, rhs: T) -> Result<(), Problem>
    where
        Self: Sub<T, Output = Result<Self, Problem>>,
    {
        *self = (*self - rhs)?;
        Ok(())
    }

    pub fn mul_in_place<T>(&mut self, rhs: T) -> Result<(), Problem>
    where
        Self: Mul<T, Output = Result<Self, Problem>>,
    {
        *self = (*self * rhs)?;
        Ok(())
    }

    pub fn div_in_place<T>(&mut self, rhs: T) -> Result<(), Problem>
    where
        Self: Div<T, Output = Result<Self, Problem>>,
    {
        *self = (*self / rhs)?;
        Ok(())
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::new(n)
    }
}

impl TryFrom<Fraction> for Rational {
    type Error = Problem;

    fn try_from(fraction: Fraction) -> Result<Self, Problem> {
        Self::from_fraction(fraction)
    }
}

impl From<Rational> for Fraction {
    fn from(rational: Rational) -> Fraction {
        rational.fraction
    }
}

// Optional minus sign, digits, and at most one decimal point with digits after it
fn decimal(s: &str) -> Option<f64> {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (whole, fract) = match unsigned.split_once('.') {
        Some((whole, fract)) => (whole, Some(fract)),
        None => (unsigned, None),
    };
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !digits(whole) || !fract.map_or(true, digits) {
        return None;
    }
    s.parse().ok()
}

impl std::str::FromStr for Rational {
    type Err = Problem;

    fn from_str(s: &str) -> Result<Self, Problem> {
        let text = s.trim_end();
        let (n, d) = match text.split_once('/') {
            Some((n, d)) => (n, Some(d)),
            None => (text, None),
        };
        let parts = match d {
            Some(d) => decimal(n).zip(decimal(d)),
            None => decimal(n).map(|n| (n, 1.0)),
        };
        let Some((numerator, denominator)) = parts else {
            debug!("rejecting {s:?} as a rational");
            return Err(Problem::InvalidFormat(s.to_string()));
        };
        Self::try_from(numerator)? / Self::try_from(denominator)?
    }
}

use core::ops::*;

impl Add for Rational {
    type Output = Result<Self, Problem>;

    fn add(self, other: Self) -> Self::Output {
        Self::from_fraction((self.fraction + other.fraction)?)
    }
}

impl Neg for Rational {
    type Output = Result<Self, Problem>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Sub for Rational {
    type Output = Result<Self, Problem>;

    fn sub(self, other: Self) -> Self::Output {
        self + other.negate()?
    }
}

impl Mul for Rational {
    type Output = Result<Self, Problem>;

    fn mul(self, other: Self) -> Self::Output {
        Self::from_fraction((self.fraction * other.fraction)?)
    }
}

impl Div for Rational {
    type Output = Result<Self, Problem>;

    fn div(self, other: Self) -> Self::Output {
        Self::from_fraction((self.fraction / other.fraction)?)
    }
}

fn whole(n: i32) -> Result<Rational, Problem> {
    Ok(Rational::new(n))
}

fn double(n: f64) -> Result<Rational, Problem> {
    Rational::try_from(n)
}

fn single(n: f32) -> Result<Rational, Problem> {
    Rational::try_from(n)
}

macro_rules! operand {
    ($t:ty, $convert:ident) => {
        impl Add<$t> for Rational {
            type Output = Result<Rational, Problem>;

            fn add(self, other: $t) -> Self::Output {
                self + $convert(other)?
            }
        }

        impl Sub<$t> for Rational {
            type Output = Result<Rational, Problem>;

            fn sub(self, other: $t) -> Self::Output {
                self - $convert(other)?
            }
        }

        impl Mul<$t> for Rational {
            type Output = Result<Rational, Problem>;

            fn mul(self, other: $t) -> Self::Output {
                self * $convert(other)?
            }
        }

        impl Div<$t> for Rational {
            type Output = Result<Rational, Problem>;

            fn div(self, other: $t) -> Self::Output {
                self / $convert(other)?
            }
        }
    };
}

operand!(i32, whole);
operand!(f64, double);
operand!(f32, single);

// A Rational with a zero denominator (see set_raw_denominator) is not equal
// to anything, not even itself, much like a floating point NaN
impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other).unwrap_or(false)
    }
}

impl PartialEq<i32> for Rational {
    fn eq(&self, other: &i32) -> bool {
        self.eq(&Rational::new(*other))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.aligned(other) {
            Ok((a, b)) => Some(a.cmp(&b)),
            // The common denominator did not fit, compare in a wider type
            Err(Problem::OutOfRange) => {
                let a = i64::from(self.numerator()) * i64::from(other.denominator());
                let b = i64::from(other.numerator()) * i64::from(self.denominator());
                Some(a.cmp(&b))
            }
            Err(_) => None,
        }
    }
}

impl PartialOrd<i32> for Rational {
    fn partial_cmp(&self, other: &i32) -> Option<Ordering> {
        self.partial_cmp(&Rational::new(*other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i32, d: i32) -> Rational {
        Rational::fraction(n, d).unwrap()
    }

    #[test]
    fn reduces_on_construction() {
        assert_eq!(r(4, 6), r(2, 3));
        assert_eq!(r(4, 4), Rational::one());
        let minus = r(4, -3);
        assert_eq!(minus.numerator(), -4);
        assert_eq!(minus.denominator(), 3);
        let zero = r(0, 7);
        assert_eq!((zero.numerator(), zero.denominator()), (0, 1));
    }

    #[test]
    fn divide_by_zero() {
        let err = Rational::fraction(1, 0).unwrap_err();
        assert_eq!(err, Problem::DivideByZero);
        assert_eq!(Rational::fraction(0, 0), Ok(Rational::zero()));
    }

    #[test]
    fn from_fraction() {
        let f = Fraction::new(-30, 60).unwrap();
        let half = Rational::try_from(f).unwrap();
        assert_eq!((half.numerator(), half.denominator()), (-1, 2));
        let bad = Fraction::new(1, 0).unwrap();
        assert_eq!(Rational::try_from(bad), Err(Problem::DivideByZero));
        assert_eq!(Fraction::from(half), Fraction::new(-1, 2).unwrap());
    }

    #[test]
    fn equal() {
        let half = r(1, 2);
        assert_eq!(Rational::try_from(0.5_f64).unwrap(), half);
        assert_ne!(Rational::try_from(0.6666_f64).unwrap(), r(2, 3));
        assert_ne!(Rational::one(), half);
        assert!(half.equal(&r(2, 4)).unwrap());
        assert!(half.not_equal(&r(1, 3)).unwrap());
    }

    #[test]
    fn less_than() {
        let one = Rational::one();
        let half = Rational::try_from(0.5_f64).unwrap();
        let negative = r(-4, 6);
        assert!(half < one);
        assert!(half.less_than(&one).unwrap());
        assert!(negative < 0);
        assert!(negative.less_than(&Rational::zero()).unwrap());
        assert!(!(r(4, 4) < one));
        assert!(!r(4, 4).less_than(&one).unwrap());
        assert!(r(4, 4) <= one);
        assert!(r(4, 4).less_than_equal(&one).unwrap());
    }

    #[test]
    fn greater_than() {
        let one = Rational::one();
        let half = r(1, 2);
        let negative = r(-4, 6);
        assert!(!(half > one));
        assert!(!half.greater_than(&one).unwrap());
        assert!(!(negative >= 0));
        assert!(!negative.greater_than_equal(&Rational::zero()).unwrap());
        assert!(one > half);
        assert!(one.greater_than(&half).unwrap());
        assert!(one >= one);
        assert!(one.greater_than_equal(&one).unwrap());
    }

    #[test]
    fn compare() {
        assert!(Rational::one() > Rational::zero());
        assert!(Rational::new(5) > Rational::new(4));
        assert!(Rational::new(-10) < Rational::new(5));
        assert!(r(1, 4) < r(1, 3));
    }

    #[test]
    fn compare_wide() {
        // The least common denominator of these does not fit in an i32
        let a = r(1, 46_337);
        let b = r(1, 46_349);
        assert_eq!(a.less_than(&b), Err(Problem::OutOfRange));
        assert!(a > b);
        assert_ne!(a, b);
    }

    #[test]
    fn invalid_is_unordered() {
        let mut bad = r(1, 4);
        bad.set_raw_denominator(0).unwrap();
        assert_eq!(bad.equal(&bad), Err(Problem::DivideByZero));
        assert_ne!(bad, bad);
        assert_eq!(bad.partial_cmp(&Rational::one()), None);
    }

    #[test]
    fn raw_setters_skip_reduction() {
        let mut x = r(1, 2);
        x.set_raw_numerator(4);
        assert_eq!((x.numerator(), x.denominator()), (4, 2));
        assert_eq!(x, 2);
        x.set_raw_denominator(-4).unwrap();
        assert_eq!((x.numerator(), x.denominator()), (-4, 4));
    }

    #[test]
    fn add() {
        let two = Rational::new(2);
        assert_eq!((two + two).unwrap(), 4);
        assert_ne!(two, 4);
        assert_eq!((r(1, 2) + r(1, 2)).unwrap(), 1);
        assert_eq!((r(1, 2) + r(1, 3)).unwrap(), r(5, 6));
        assert_eq!((r(-2, 3) + r(2, 3)).unwrap(), 0);
        assert_eq!((r(1, 2) + 1).unwrap(), r(3, 2));
        assert_eq!((r(1, 2) + 0.25_f64).unwrap(), r(3, 4));
        assert_eq!((r(1, 2) + 0.5_f32).unwrap(), 1);
    }

    #[test]
    fn subtract() {
        let two = Rational::new(2);
        assert_eq!((two - two).unwrap(), 0);
        assert_eq!((r(1, 2) - r(1, 2)).unwrap(), 0);
        assert_eq!((r(-2, 3) - r(2, 3)).unwrap(), r(-4, 3));
        assert_eq!((r(1, 2) - 1).unwrap(), r(-1, 2));
    }

    #[test]
    fn multiply() {
        let two = Rational::new(2);
        assert_eq!((two * two).unwrap(), 4);
        assert_eq!((r(1, 2) * r(1, 2)).unwrap(), r(1, 4));
        assert_eq!((r(-2, 3) * r(2, 3)).unwrap(), r(-4, 9));
        assert_eq!((r(2, 3) * 1.5_f64).unwrap(), 1);
    }

    #[test]
    fn divide() {
        let two = Rational::new(2);
        assert_eq!((two / two).unwrap(), 1);
        assert_eq!((r(1, 2) / r(1, 2)).unwrap(), 1);
        assert_eq!((r(-2, 3) / r(2, 3)).unwrap(), -1);
        assert_eq!((r(1, 2) / 0).unwrap_err(), Problem::DivideByZero);
        assert_eq!((r(1, 2) / 0.0_f64).unwrap_err(), Problem::DivideByZero);
    }

    #[test]
    fn invalid_operand() {
        let mut bad = r(1, 4);
        bad.set_raw_denominator(0).unwrap();
        assert_eq!((bad + Rational::one()).unwrap_err(), Problem::DivideByZero);
        assert_eq!((Rational::one() * bad).unwrap_err(), Problem::DivideByZero);
        assert_eq!(bad.inv(), Ok(Rational::zero()));
    }

    #[test]
    fn overflow() {
        let max = Rational::new(i32::MAX);
        assert_eq!((max + 1).unwrap_err(), Problem::OutOfRange);
        assert_eq!(Rational::new(i32::MIN).negate(), Err(Problem::OutOfRange));
        assert_eq!(Rational::new(i32::MIN).abs(), Err(Problem::OutOfRange));
        assert_eq!(Rational::new(2).pow(40), Err(Problem::OutOfRange));
        assert_eq!(Rational::new(10).pow(400), Err(Problem::OutOfRange));
    }

    #[test]
    fn in_place() {
        let mut x = r(1, 2);
        x.add_in_place(r(1, 3)).unwrap();
        assert_eq!(x, r(5, 6));
        x.sub_in_place(1).unwrap();
        assert_eq!(x, r(-1, 6));
        x.mul_in_place(0.5_f64).unwrap();
        assert_eq!(x, r(-1, 12));
        x.div_in_place(0.25_f32).unwrap();
        assert_eq!(x, r(-1, 3));
        assert_eq!(x.div_in_place(0), Err(Problem::DivideByZero));
        assert_eq!(x, r(-1, 3));
        let mut max = Rational::new(i32::MAX);
        assert_eq!(max.add_in_place(1), Err(Problem::OutOfRange));
        assert_eq!(max, i32::MAX);
        x.set(7);
        assert_eq!((x.numerator(), x.denominator()), (7, 1));
    }

    #[test]
    fn min_numerator() {
        let terms = |r: Rational| (r.numerator(), r.denominator());
        assert_eq!(
            Rational::fraction(i32::MIN, i32::MAX).map(terms),
            Ok((i32::MIN, i32::MAX))
        );
        for d in (1..60).step_by(2) {
            assert_eq!(Rational::fraction(i32::MIN, d).map(terms), Ok((i32::MIN, d)));
        }
        assert_eq!(Rational::fraction(i32::MIN, 4).unwrap(), -536_870_912);
        assert_eq!(
            "-2147483648/5".parse::<Rational>().map(terms),
            Ok((i32::MIN, 5))
        );
        assert_eq!((Rational::new(i32::MIN + 1) - 1).unwrap(), i32::MIN);
        assert_eq!(r(i32::MIN, 3).negate(), Err(Problem::OutOfRange));
    }

    #[test]
    fn power() {
        let half = r(1, 2);
        let two_thirds = r(2, 3);
        assert_eq!(half.pow(2).unwrap(), r(1, 4));
        assert_eq!(half, r(1, 2));
        assert_eq!(two_thirds.pow(3).unwrap(), r(8, 27));
        assert_eq!(half.pow(0).unwrap(), 1);
        assert_eq!(half.pow(1).unwrap(), half);
        assert_eq!(r(1, 4).pow(-2).unwrap(), 16);
        assert_eq!(half.pow(-2).unwrap(), 4);
        assert_eq!(two_thirds.pow(-2).unwrap(), r(9, 4));
        assert_eq!(r(-2, 3).pow(3).unwrap(), r(-8, 27));
        assert_eq!(Rational::new(3).pow(19).unwrap(), 1_162_261_467);
        assert_eq!(Rational::zero().pow(-3).unwrap(), 0);
    }

    #[test]
    fn power_of_invalid() {
        let mut bad = r(1, 4);
        bad.set_raw_denominator(0).unwrap();
        assert_eq!(bad.pow(2), Err(Problem::DivideByZero));
    }

    #[test]
    fn negate() {
        assert_eq!(r(-1, 2).negate().unwrap(), r(1, 2));
        assert_eq!(r(2, 3).negate().unwrap(), r(-2, 3));
        assert_eq!((-r(2, 3)).unwrap(), r(-2, 3));
    }

    #[test]
    fn abs() {
        assert_eq!(r(-1, 2).abs().unwrap(), r(1, 2));
        assert_eq!(r(2, 3).abs().unwrap(), r(2, 3));
    }

    #[test]
    fn square() {
        assert_eq!(r(-1, 2).square().unwrap(), r(1, 4));
        assert_eq!(r(2, 3).square().unwrap(), r(4, 9));
    }

    #[test]
    fn inverse() {
        assert_eq!(r(1, 2).inv().unwrap(), 2);
        assert_eq!(r(2, 3).inv().unwrap(), r(3, 2));
        assert_eq!(Rational::zero().inv().unwrap(), Rational::zero());
        assert_eq!(r(-1, 2).inv().unwrap(), -2);
    }

    #[test]
    fn accessors() {
        let half = r(1, 2);
        assert_eq!((half.numerator(), half.denominator()), (1, 2));
        let quarter = r(-1, 4);
        assert_eq!((quarter.numerator(), quarter.denominator()), (-1, 4));
        assert!(Rational::new(30).is_integer());
        assert!(!half.is_integer());
        assert_eq!(half.as_fraction(), &Fraction::new(1, 2).unwrap());
    }

    #[test]
    fn to_f64() {
        assert_eq!(r(1, 2).to_f64().unwrap(), 0.5);
        assert_eq!(Rational::new(30).to_f64().unwrap(), 30.0);
        let third = r(2, 3).to_f64().unwrap();
        assert!((third - 0.666666666).abs() < 0.0000001);
    }

    #[test]
    fn parse() {
        let expected = r(4, 3);
        assert_eq!("4/3".parse::<Rational>().unwrap(), expected);
        assert_eq!("30".parse::<Rational>().unwrap(), 30);
        assert_eq!("-30/60".parse::<Rational>().unwrap(), r(-1, 2));
        assert_eq!("0.75".parse::<Rational>().unwrap(), r(3, 4));
        assert_eq!("12.5/2.5".parse::<Rational>().unwrap(), 5);
        assert_eq!("3/-4 \t".parse::<Rational>().unwrap(), r(-3, 4));
        assert_eq!("-0.5/-0.25".parse::<Rational>().unwrap(), 2);
    }

    #[test]
    fn parse_rejects() {
        for bad in [
            "", "-", "1/", "/2", "1//2", "1/2/3", "1.2.3", ".5", "5.", "1e5", " 1", "1 /2", "+1",
            "one", "0x10",
        ] {
            assert_eq!(
                bad.parse::<Rational>(),
                Err(Problem::InvalidFormat(bad.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn parse_zero_denominator() {
        assert_eq!("1/0".parse::<Rational>(), Err(Problem::DivideByZero));
        assert_eq!("1/0.0".parse::<Rational>(), Err(Problem::DivideByZero));
    }
}
