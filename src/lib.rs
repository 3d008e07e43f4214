mod problem;
pub use crate::problem::Problem;

mod fraction;
pub use crate::fraction::Fraction;

mod rational;
pub use crate::rational::{Format, Formatted, Rational};

mod rational_array;
pub use crate::rational_array::RationalArray;

mod document_count;
pub use crate::document_count::{Category, DocumentCount};

mod document_ratio;
pub use crate::document_ratio::DocumentRatio;
