use crate::{Problem, Rational, RationalArray};
use core::fmt;
use log::debug;

/// Kinds of character, each with a fixed slot in the count and ratio arrays
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Alphabetic = 0,
    Decimal = 1,
    Punctuation = 2,
    Lowercase = 3,
    Uppercase = 4,
    Other = 5,
    /// Only meaningful as a ratio
    UpperToLower = 6,
    /// Only meaningful as a ratio
    UpperToPunctuation = 7,
}

impl Category {
    /// Classify a character, letters are reported by case
    ///
    /// ```
    /// use rationalist::Category;
    /// assert_eq!(Category::of('Q'), Category::Uppercase);
    /// assert_eq!(Category::of('7'), Category::Decimal);
    /// assert_eq!(Category::of('!'), Category::Punctuation);
    /// assert_eq!(Category::of(' '), Category::Other);
    /// assert_eq!(Category::of('é'), Category::Other);
    /// ```
    pub fn of(c: char) -> Self {
        if c.is_ascii_uppercase() {
            Category::Uppercase
        } else if c.is_ascii_lowercase() {
            Category::Lowercase
        } else if c.is_ascii_digit() {
            Category::Decimal
        } else if c.is_ascii_punctuation() {
            Category::Punctuation
        } else {
            Category::Other
        }
    }

    pub(crate) fn slot(self) -> isize {
        self as isize
    }
}

/// Character counts for a document, kept as [`Rational`] values
///
/// ```
/// use rationalist::DocumentCount;
/// let count = DocumentCount::new(&["Hello,", "World 42"]).unwrap();
/// assert_eq!(count.total_chars(), 14);
/// assert_eq!(count.alpha(), 10);
/// assert_eq!(count.uppercase(), 2);
/// assert!(count.is_upper_lower_equal_to_alpha().unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct DocumentCount {
    counts: RationalArray,
    total: i32,
}

impl DocumentCount {
    const SLOTS: isize = 6;

    pub fn new(document: &[impl AsRef<str>]) -> Result<Self, Problem> {
        let mut counts = RationalArray::with_capacity(Self::SLOTS)?;
        for _ in 0..counts.capacity() {
            counts.add(Rational::zero());
        }
        let mut count = Self { counts, total: 0 };
        for word in document {
            for c in word.as_ref().chars() {
                count.tally(Category::of(c))?;
            }
        }
        debug!(
            "counted {} characters in {} words",
            count.total,
            document.len()
        );
        Ok(count)
    }

    fn bump(&mut self, category: Category) -> Result<(), Problem> {
        let slot = category.slot();
        let n = (self.counts.retrieve(slot)? + 1)?;
        self.counts.replace(slot, n)
    }

    fn tally(&mut self, category: Category) -> Result<(), Problem> {
        if matches!(category, Category::Uppercase | Category::Lowercase) {
            self.bump(Category::Alphabetic)?;
        }
        self.bump(category)?;
        self.total = self.total.checked_add(1).ok_or(Problem::OutOfRange)?;
        Ok(())
    }

    /// The count for a category, the ratio-only categories are always zero
    pub fn count(&self, category: Category) -> Rational {
        usize::try_from(category.slot())
            .ok()
            .and_then(|slot| self.counts.get(slot))
            .copied()
            .unwrap_or_default()
    }

    pub fn total_chars(&self) -> i32 {
        self.total
    }

    pub fn alpha(&self) -> Rational {
        self.count(Category::Alphabetic)
    }

    pub fn lowercase(&self) -> Rational {
        self.count(Category::Lowercase)
    }

    pub fn uppercase(&self) -> Rational {
        self.count(Category::Uppercase)
    }

    pub fn decimal(&self) -> Rational {
        self.count(Category::Decimal)
    }

    pub fn punctuation(&self) -> Rational {
        self.count(Category::Punctuation)
    }

    pub fn other(&self) -> Rational {
        self.count(Category::Other)
    }

    /// Whether the letters are all accounted for by the two cases
    ///
    /// Never false, a mismatch is a [`Problem::CountsNotEqual`] carrying the counts
    pub fn is_upper_lower_equal_to_alpha(&self) -> Result<bool, Problem> {
        let alpha = self.alpha();
        let lower = self.lowercase();
        let upper = self.uppercase();
        if (lower + upper)?.equal(&alpha)? {
            Ok(true)
        } else {
            Err(Problem::CountsNotEqual {
                lower,
                upper,
                total: alpha,
            })
        }
    }
}

impl fmt::Display for DocumentCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Alphabetic = {}", self.alpha())?;
        writeln!(f, "Uppercase = {}", self.uppercase())?;
        writeln!(f, "Lowercase = {}", self.lowercase())?;
        writeln!(f, "Decimal Digit = {}", self.decimal())?;
        writeln!(f, "Punctuation = {}", self.punctuation())?;
        writeln!(f, "Other = {}", self.other())
    }
}
