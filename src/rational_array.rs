use crate::{Problem, Rational};
use core::fmt;
use log::{debug, error};

/// A growable container of [`Rational`] values
///
/// Elements are stored by value in one contiguous buffer. The capacity is
/// tracked explicitly and grows by half (at least one more slot) only when
/// an [`add`](RationalArray::add) finds the container full.
///
/// Indices are signed so that a negative index is reported back as
/// [`Problem::IndexOutOfBounds`] rather than being unrepresentable.
///
/// ```
/// use rationalist::{Problem, Rational, RationalArray};
/// let mut array = RationalArray::new();
/// array.add(Rational::fraction(1, 2).unwrap());
/// array.add(Rational::fraction(1, 3).unwrap());
/// assert_eq!(array.retrieve(1).unwrap(), Rational::fraction(1, 3).unwrap());
/// assert_eq!(array.retrieve(2), Err(Problem::IndexOutOfBounds(2)));
/// ```
#[derive(Clone, Debug)]
pub struct RationalArray {
    elements: Vec<Rational>,
    capacity: usize,
}

impl RationalArray {
    pub const DEFAULT_CAPACITY: usize = 20;

    pub fn new() -> Self {
        let mut array = Self {
            elements: Vec::new(),
            capacity: Self::DEFAULT_CAPACITY,
        };
        array.reserve();
        array
    }

    /// An empty container with room for `capacity` elements
    ///
    /// The capacity must be positive, otherwise this is a
    /// [`Problem::InvalidArgument`]
    pub fn with_capacity(capacity: isize) -> Result<Self, Problem> {
        let Some(capacity) = usize::try_from(capacity).ok().filter(|&c| c > 0) else {
            return Err(Problem::InvalidArgument {
                argument: capacity.to_string(),
                reason: "capacity must be positive".to_string(),
            });
        };
        let mut array = Self {
            elements: Vec::new(),
            capacity,
        };
        array.reserve();
        Ok(array)
    }

    // Running out of memory here is fatal
    fn reserve(&mut self) {
        let additional = self.capacity - self.elements.len();
        if let Err(e) = self.elements.try_reserve_exact(additional) {
            error!("unable to grow to {} rationals: {e}", self.capacity);
            std::process::abort();
        }
    }

    fn grow(&mut self) {
        let capacity = (self.capacity * 3 / 2).max(self.capacity + 1);
        debug!("growing from {} to {capacity} rationals", self.capacity);
        self.capacity = capacity;
        self.reserve();
    }

    fn position(&self, index: isize) -> Result<usize, Problem> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.elements.len())
            .ok_or(Problem::IndexOutOfBounds(index))
    }

    /// The element at `index`
    pub fn retrieve(&self, index: isize) -> Result<Rational, Problem> {
        let i = self.position(index)?;
        Ok(self.elements[i])
    }

    /// Overwrite the element at `index`
    pub fn replace(&mut self, index: isize, value: Rational) -> Result<(), Problem> {
        let i = self.position(index)?;
        self.elements[i] = value;
        Ok(())
    }

    /// Take out the element at `index`, later elements move down one place
    pub fn remove(&mut self, index: isize) -> Result<Rational, Problem> {
        let i = self.position(index)?;
        Ok(self.elements.remove(i))
    }

    /// Append a value, growing if the container is full
    pub fn add(&mut self, value: Rational) {
        if self.elements.len() == self.capacity {
            self.grow();
        }
        self.elements.push(value);
    }

    /// Remove everything and return to the default capacity
    pub fn clear(&mut self) {
        self.elements = Vec::new();
        self.capacity = Self::DEFAULT_CAPACITY;
        self.reserve();
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&Rational> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Rational> {
        self.elements.iter()
    }
}

impl Default for RationalArray {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a RationalArray {
    type Item = &'a Rational;
    type IntoIter = core::slice::Iter<'a, Rational>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

// Equal only with the same capacity, as well as equal elements
impl PartialEq for RationalArray {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity && self.elements == other.elements
    }
}

impl fmt::Display for RationalArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in self {
            writeln!(f, "{r}")?;
        }
        Ok(())
    }
}
