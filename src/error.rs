use thiserror::Error;

/// Errors raised by the validating constructors.
///
/// The set algebra itself never fails; these only surface when callers ask
/// for their input to be checked.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Interval begin {begin} is greater than its end {end}")]
    InvertedInterval { begin: u64, end: u64 },

    #[error("Intervals at positions {index} and {} are unsorted, overlapping or adjacent", .index + 1)]
    NonCanonical { index: usize },
}
