//! Inclusive interval over a fixed-width unsigned domain.

use std::fmt::Display;

use crate::domain::Domain;
use crate::error::RangeError;

/// Inclusive range `[begin, end]` over the domain `T`.
///
/// Construction through [`Interval::new`] does not validate the bounds, so an
/// interval may be inverted (`begin > end`). Inverted intervals hold no values
/// and are dropped whenever a set is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T: Domain> {
    begin: T,
    end: T,
}

impl<T: Domain> Interval<T> {
    /// Creates interval `[begin, end]` without checking the bounds.
    pub const fn new(begin: T, end: T) -> Self {
        Self { begin, end }
    }

    /// Creates interval `[begin, end]`, rejecting inverted bounds.
    pub fn try_new(begin: T, end: T) -> Result<Self, RangeError> {
        if begin > end {
            return Err(RangeError::InvertedInterval {
                begin: begin.to_u64(),
                end: end.to_u64(),
            });
        }
        Ok(Self { begin, end })
    }

    /// The single-value interval `[value, value]`.
    pub const fn point(value: T) -> Self {
        Self::new(value, value)
    }

    /// The whole domain `[T::MIN, T::MAX]`.
    pub const fn universe() -> Self {
        Self::new(T::MIN, T::MAX)
    }

    pub const fn begin(&self) -> T {
        self.begin
    }

    pub const fn end(&self) -> T {
        self.end
    }

    pub fn is_inverted(&self) -> bool {
        self.begin > self.end
    }

    /// Number of values in the interval, zero when inverted.
    pub fn len(&self) -> u128 {
        if self.is_inverted() {
            0
        } else {
            u128::from(self.end.to_u64() - self.begin.to_u64()) + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.is_inverted()
    }

    /// Returns true if `value` ∈ `[begin, end]`.
    pub fn contains(&self, value: T) -> bool {
        self.begin <= value && value <= self.end
    }

    /// Checks if this interval shares at least one value with `other`.
    pub fn overlaps(&self, other: &Interval<T>) -> bool {
        self.begin <= other.end && other.begin <= self.end
    }

    /// Checks if the two intervals are disjoint but leave no gap between them.
    pub fn is_adjacent_to(&self, other: &Interval<T>) -> bool {
        self.end.checked_succ() == Some(other.begin) || other.end.checked_succ() == Some(self.begin)
    }

    pub fn intersection(&self, other: &Interval<T>) -> Option<Interval<T>> {
        if self.overlaps(other) {
            Some(Interval::new(
                self.begin.max(other.begin),
                self.end.min(other.end),
            ))
        } else {
            None
        }
    }
}

impl<T: Domain> Display for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.begin, self.end)
    }
}

impl<T: Domain> From<std::ops::RangeInclusive<T>> for Interval<T> {
    fn from(range: std::ops::RangeInclusive<T>) -> Self {
        let (begin, end) = range.into_inner();
        Self::new(begin, end)
    }
}
