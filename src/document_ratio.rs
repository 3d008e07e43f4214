use crate::{Category, DocumentCount, Problem, Rational, RationalArray};
use core::fmt;
use log::debug;

/// Ratios between the character counts of a document
///
/// Each category is given as a fraction of all characters, and there are two
/// extra ratios: uppercase to lowercase, and uppercase to punctuation. Any
/// ratio whose divisor would be zero is left as zero.
///
/// ```
/// use rationalist::{DocumentCount, DocumentRatio, Rational};
/// let count = DocumentCount::new(&["Two", "words!"]).unwrap();
/// let ratio = DocumentRatio::new(&count).unwrap();
/// assert_eq!(ratio.alpha(), Rational::fraction(8, 9).unwrap());
/// assert_eq!(ratio.upper_to_punctuation(), 1);
/// assert!(ratio.is_one_to_one().unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct DocumentRatio {
    ratios: RationalArray,
}

impl DocumentRatio {
    const SLOTS: isize = 8;

    const OF_TOTAL: [Category; 6] = [
        Category::Alphabetic,
        Category::Uppercase,
        Category::Lowercase,
        Category::Decimal,
        Category::Punctuation,
        Category::Other,
    ];

    pub fn new(count: &DocumentCount) -> Result<Self, Problem> {
        let mut ratios = RationalArray::with_capacity(Self::SLOTS)?;
        for _ in 0..ratios.capacity() {
            ratios.add(Rational::zero());
        }
        let total = count.total_chars();
        if total > 0 {
            for category in Self::OF_TOTAL {
                let ratio = Rational::fraction(count.count(category).numerator(), total)?;
                ratios.replace(category.slot(), ratio)?;
            }
            let upper = count.uppercase();
            if count.lowercase() != 0 {
                ratios.replace(
                    Category::UpperToLower.slot(),
                    (upper / count.lowercase())?,
                )?;
            }
            if count.punctuation() != 0 {
                ratios.replace(
                    Category::UpperToPunctuation.slot(),
                    (upper / count.punctuation())?,
                )?;
            }
        } else {
            debug!("no characters, all ratios are zero");
        }
        Ok(Self { ratios })
    }

    /// The ratio for a category
    pub fn ratio(&self, category: Category) -> Rational {
        usize::try_from(category.slot())
            .ok()
            .and_then(|slot| self.ratios.get(slot))
            .copied()
            .unwrap_or_default()
    }

    /// All eight ratios, indexed by [`Category`]
    pub fn ratios(&self) -> &RationalArray {
        &self.ratios
    }

    pub fn alpha(&self) -> Rational {
        self.ratio(Category::Alphabetic)
    }

    pub fn lowercase(&self) -> Rational {
        self.ratio(Category::Lowercase)
    }

    pub fn uppercase(&self) -> Rational {
        self.ratio(Category::Uppercase)
    }

    pub fn decimal(&self) -> Rational {
        self.ratio(Category::Decimal)
    }

    pub fn punctuation(&self) -> Rational {
        self.ratio(Category::Punctuation)
    }

    pub fn other(&self) -> Rational {
        self.ratio(Category::Other)
    }

    pub fn upper_to_lower(&self) -> Rational {
        self.ratio(Category::UpperToLower)
    }

    pub fn upper_to_punctuation(&self) -> Rational {
        self.ratio(Category::UpperToPunctuation)
    }

    /// Whether every character falls in exactly one category
    ///
    /// The alphabetic, decimal, punctuation and other ratios must sum to
    /// one, otherwise this is a [`Problem::RatiosNotEqual`]
    pub fn is_one_to_one(&self) -> Result<bool, Problem> {
        let alpha = self.alpha();
        let decimal = self.decimal();
        let punctuation = self.punctuation();
        let other = self.other();
        let sum = (((alpha + decimal)? + punctuation)? + other)?;
        if sum.equal(&Rational::one())? {
            Ok(true)
        } else {
            Err(Problem::RatiosNotEqual {
                alpha,
                decimal,
                punctuation,
                other,
                sum,
            })
        }
    }
}

impl fmt::Display for DocumentRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Alphabetic to Total = {}", self.alpha())?;
        writeln!(f, "Uppercase to Total = {}", self.uppercase())?;
        writeln!(f, "Lowercase to Total = {}", self.lowercase())?;
        writeln!(f, "Decimal Digit to Total = {}", self.decimal())?;
        writeln!(f, "Punctuation to Total = {}", self.punctuation())?;
        writeln!(f, "Other to Total = {}", self.other())?;
        writeln!(f, "Upper to Lower = {}", self.upper_to_lower())?;
        writeln!(f, "Upper to Punctuation = {}", self.upper_to_punctuation())
    }
}
