//! A canonical container for disjoint, sorted intervals.
//!
//! [`IntervalSet`] wraps a `Vec<Interval<T>>` and keeps it in **canonical
//! form**: intervals are sorted by begin, pairwise disjoint, and no two are
//! adjacent (adjacent intervals are merged). The full domain
//! `[T::MIN, T::MAX]` is the universe used by [`IntervalSet::complement`].
//!
//! Read access is transparent via `Deref<Target = [Interval<T>]>`. The set
//! operators never mutate their operands; each returns a new set.

use std::fmt::Display;
use std::ops::{BitAnd, BitOr, BitXor, Deref, Index, Not, Sub};

use super::interval::Interval;
use crate::domain::Domain;
use crate::error::RangeError;
use crate::operations::{self, assertions};

/// A sorted, disjoint, non-adjacent set of inclusive intervals.
///
/// # Performance
///
/// - Construction from unsorted input: O(n log n) sort + O(n) merge.
/// - `union_with`: O((n+m) log(n+m)), operands are concatenated and re-sorted.
/// - `intersect_with`, `complement`: O(n+m) sweeps.
/// - `contains`: O(log n).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalSet<T: Domain>(Vec<Interval<T>>);

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl<T: Domain> IntervalSet<T> {
    /// Creates the empty set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates an empty set with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// The set holding every value of the domain.
    pub fn universe() -> Self {
        Self(vec![Interval::universe()])
    }

    /// Wraps a `Vec` that is **already in canonical form** without re-sorting.
    ///
    /// In debug builds this asserts the invariant; in release builds the check
    /// is elided.
    ///
    /// # Safety (logical)
    ///
    /// The caller **must** ensure the input is canonical. Violating this in
    /// release mode silently produces incorrect results from the operators.
    pub fn from_sorted_unchecked(vec: Vec<Interval<T>>) -> Self {
        debug_assert!(
            assertions::is_canonical(&vec),
            "IntervalSet::from_sorted_unchecked called with non-canonical input"
        );
        Self(vec)
    }

    /// Wraps a `Vec` after checking that it is canonical.
    pub fn try_from_canonical(vec: Vec<Interval<T>>) -> Result<Self, RangeError> {
        match assertions::first_violation(&vec) {
            None => Ok(Self(vec)),
            Some(index) if vec[index].is_inverted() => Err(RangeError::InvertedInterval {
                begin: vec[index].begin().to_u64(),
                end: vec[index].end().to_u64(),
            }),
            Some(index) => Err(RangeError::NonCanonical { index }),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Set operations
// ─────────────────────────────────────────────────────────────────────

impl<T: Domain> IntervalSet<T> {
    /// Returns `self ∪ other`.
    pub fn union_with(&self, other: &IntervalSet<T>) -> IntervalSet<T> {
        Self(operations::compute_union(&self.0, &other.0))
    }

    /// Returns `self ∩ other`.
    pub fn intersect_with(&self, other: &IntervalSet<T>) -> IntervalSet<T> {
        Self(operations::compute_intersection(&self.0, &other.0))
    }

    /// Returns the complement of `self` within the whole domain.
    pub fn complement(&self) -> IntervalSet<T> {
        self.complement_within(Interval::universe())
    }

    /// Returns the values of `bounds` not covered by `self`.
    pub fn complement_within(&self, bounds: Interval<T>) -> IntervalSet<T> {
        Self(operations::compute_complement(&self.0, bounds))
    }

    /// Returns `self − other`.
    pub fn difference(&self, other: &IntervalSet<T>) -> IntervalSet<T> {
        Self(operations::compute_difference(&self.0, &other.0))
    }

    /// Returns `(self − other) ∪ (other − self)`.
    pub fn symmetric_difference(&self, other: &IntervalSet<T>) -> IntervalSet<T> {
        Self(operations::compute_symmetric_difference(&self.0, &other.0))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────────────────

impl<T: Domain> IntervalSet<T> {
    pub fn is_canonical(&self) -> bool {
        assertions::is_canonical(&self.0)
    }

    /// Returns true if some interval of the set holds `value`.
    pub fn contains(&self, value: T) -> bool {
        // number of intervals starting at or before `value`
        let idx = self.0.partition_point(|iv| iv.begin() <= value);
        idx > 0 && self.0[idx - 1].contains(value)
    }

    /// Total number of values in the set.
    pub fn cardinality(&self) -> u128 {
        self.0.iter().map(Interval::len).sum()
    }

    /// Consumes the set and returns the underlying `Vec`.
    pub fn into_inner(self) -> Vec<Interval<T>> {
        self.0
    }

    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Operator sugar
// ─────────────────────────────────────────────────────────────────────

impl<T: Domain> BitOr for &IntervalSet<T> {
    type Output = IntervalSet<T>;

    fn bitor(self, rhs: Self) -> IntervalSet<T> {
        self.union_with(rhs)
    }
}

impl<T: Domain> BitAnd for &IntervalSet<T> {
    type Output = IntervalSet<T>;

    fn bitand(self, rhs: Self) -> IntervalSet<T> {
        self.intersect_with(rhs)
    }
}

impl<T: Domain> Sub for &IntervalSet<T> {
    type Output = IntervalSet<T>;

    fn sub(self, rhs: Self) -> IntervalSet<T> {
        self.difference(rhs)
    }
}

impl<T: Domain> BitXor for &IntervalSet<T> {
    type Output = IntervalSet<T>;

    fn bitxor(self, rhs: Self) -> IntervalSet<T> {
        self.symmetric_difference(rhs)
    }
}

impl<T: Domain> Not for &IntervalSet<T> {
    type Output = IntervalSet<T>;

    fn not(self) -> IntervalSet<T> {
        self.complement()
    }
}

// ─────────────────────────────────────────────────────────────────────
// Transparent read access
// ─────────────────────────────────────────────────────────────────────

impl<T: Domain> Deref for IntervalSet<T> {
    type Target = [Interval<T>];

    fn deref(&self) -> &[Interval<T>] {
        &self.0
    }
}

impl<T: Domain> AsRef<[Interval<T>]> for IntervalSet<T> {
    fn as_ref(&self) -> &[Interval<T>] {
        &self.0
    }
}

impl<T: Domain> Index<usize> for IntervalSet<T> {
    type Output = Interval<T>;

    fn index(&self, index: usize) -> &Interval<T> {
        &self.0[index]
    }
}

// ─────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────

impl<T: Domain> From<Vec<Interval<T>>> for IntervalSet<T> {
    /// Creates a set from an arbitrary `Vec`, normalizing on construction.
    fn from(vec: Vec<Interval<T>>) -> Self {
        Self(operations::normalize(vec))
    }
}

impl<T: Domain> From<Interval<T>> for IntervalSet<T> {
    /// Creates a single-interval set, or the empty set for an inverted interval.
    fn from(interval: Interval<T>) -> Self {
        if interval.is_inverted() {
            Self::new()
        } else {
            Self(vec![interval])
        }
    }
}

impl<T: Domain> FromIterator<Interval<T>> for IntervalSet<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        let vec: Vec<Interval<T>> = iter.into_iter().collect();
        Self::from(vec)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Iterators
// ─────────────────────────────────────────────────────────────────────

impl<T: Domain> IntoIterator for IntervalSet<T> {
    type Item = Interval<T>;
    type IntoIter = std::vec::IntoIter<Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Domain> IntoIterator for &'a IntervalSet<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ─────────────────────────────────────────────────────────────────────
// Trait impls
// ─────────────────────────────────────────────────────────────────────

impl<T: Domain> Default for IntervalSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Domain> Display for IntervalSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, interval) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "]")
    }
}

/// Enables `assert_eq!(interval_set, vec![...])` in tests.
impl<T: Domain> PartialEq<Vec<Interval<T>>> for IntervalSet<T> {
    fn eq(&self, other: &Vec<Interval<T>>) -> bool {
        self.0 == *other
    }
}

/// Enables `assert_eq!(vec![...], interval_set)` in tests.
impl<T: Domain> PartialEq<IntervalSet<T>> for Vec<Interval<T>> {
    fn eq(&self, other: &IntervalSet<T>) -> bool {
        *self == other.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<T: Domain + serde::Serialize> serde::Serialize for IntervalSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Domain + serde::Deserialize<'de>> serde::Deserialize<'de> for IntervalSet<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec = Vec::<Interval<T>>::deserialize(deserializer)?;
        Ok(Self::from(vec))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(begin: u16, end: u16) -> Interval<u16> {
        Interval::new(begin, end)
    }

    fn set(intervals: &[(u16, u16)]) -> IntervalSet<u16> {
        intervals.iter().map(|&(b, e)| iv(b, e)).collect()
    }

    // ── Construction ──────────────────────────────────────────────────

    #[test]
    fn new_is_empty() {
        let set = IntervalSet::<u16>::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.cardinality(), 0);
    }

    #[test]
    fn default_and_with_capacity_are_empty() {
        assert!(IntervalSet::<u16>::default().is_empty());
        assert!(IntervalSet::<u16>::with_capacity(10).is_empty());
    }

    #[test]
    fn universe_covers_domain() {
        let u = IntervalSet::<u16>::universe();
        assert_eq!(u, vec![iv(0, u16::MAX)]);
        assert_eq!(u.cardinality(), 65_536);
    }

    #[test]
    fn from_unsorted_normalizes() {
        let s = IntervalSet::from(vec![iv(20, 30), iv(0, 10)]);
        assert_eq!(s, vec![iv(0, 10), iv(20, 30)]);
    }

    #[test]
    fn from_overlapping_merges() {
        let s = IntervalSet::from(vec![iv(0, 60), iv(40, 100)]);
        assert_eq!(s, vec![iv(0, 100)]);
    }

    #[test]
    fn from_adjacent_merges() {
        let s = IntervalSet::from(vec![iv(0, 50), iv(51, 100)]);
        assert_eq!(s, vec![iv(0, 100)]);
    }

    #[test]
    fn from_gap_of_one_stays_split() {
        let s = IntervalSet::from(vec![iv(0, 50), iv(52, 100)]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn from_inverted_interval_is_empty() {
        assert!(IntervalSet::from(iv(5, 1)).is_empty());
        assert_eq!(IntervalSet::from(iv(1, 5)), vec![iv(1, 5)]);
    }

    #[test]
    fn from_sorted_unchecked_canonical() {
        let s = IntervalSet::from_sorted_unchecked(vec![iv(0, 10), iv(20, 30)]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn try_from_canonical_accepts_canonical() {
        let s = IntervalSet::try_from_canonical(vec![iv(0, 10), iv(20, 30)]);
        assert_eq!(s, Ok(set(&[(0, 10), (20, 30)])));
    }

    #[test]
    fn try_from_canonical_rejects_adjacent() {
        let s = IntervalSet::try_from_canonical(vec![iv(0, 10), iv(20, 30), iv(31, 40)]);
        assert_eq!(s, Err(RangeError::NonCanonical { index: 1 }));
    }

    #[test]
    fn try_from_canonical_rejects_inverted() {
        let s = IntervalSet::try_from_canonical(vec![iv(0, 10), iv(40, 30)]);
        assert_eq!(s, Err(RangeError::InvertedInterval { begin: 40, end: 30 }));
    }

    // ── Operators: reference port scenario ───────────────────────────

    #[test]
    fn port_scenario() {
        let a = set(&[(0, 1500)]);
        let b = set(&[(0, 1000)]);

        assert_eq!(a.union_with(&b), vec![iv(0, 1500)]);
        assert_eq!(a.intersect_with(&b), vec![iv(0, 1000)]);
        assert_eq!(a.difference(&b), vec![iv(1001, 1500)]);
        assert!(b.difference(&a).is_empty());
        assert_eq!(a.symmetric_difference(&b), vec![iv(1001, 1500)]);
    }

    #[test]
    fn operators_leave_operands_untouched() {
        let a = set(&[(0, 10), (20, 30)]);
        let b = set(&[(5, 25)]);
        let (a0, b0) = (a.clone(), b.clone());
        let _ = a.union_with(&b);
        let _ = a.intersect_with(&b);
        let _ = a.symmetric_difference(&b);
        let _ = b.complement();
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn complement_boundaries() {
        assert_eq!(
            IntervalSet::<u16>::new().complement(),
            IntervalSet::<u16>::universe()
        );
        assert!(IntervalSet::<u16>::universe().complement().is_empty());
    }

    #[test]
    fn complement_within_bounds() {
        let s = set(&[(20, 40), (60, 80)]);
        assert_eq!(
            s.complement_within(iv(0, 100)),
            vec![iv(0, 19), iv(41, 59), iv(81, 100)]
        );
    }

    #[test]
    fn operator_sugar_matches_named_methods() {
        let a = set(&[(0, 1000), (1500, 2000)]);
        let b = set(&[(0, 1000), (1100, 2000)]);

        assert_eq!(&a | &b, a.union_with(&b));
        assert_eq!(&a & &b, a.intersect_with(&b));
        assert_eq!(&b - &a, vec![iv(1100, 1499)]);
        assert_eq!(&a ^ &b, vec![iv(1100, 1499)]);
        assert_eq!(!&a, a.complement());
    }

    // ── Queries ───────────────────────────────────────────────────────

    #[test]
    fn contains_uses_inclusive_bounds() {
        let s = set(&[(10, 20), (30, 40)]);
        assert!(!s.contains(9));
        assert!(s.contains(10));
        assert!(s.contains(20));
        assert!(!s.contains(25));
        assert!(s.contains(40));
        assert!(!s.contains(41));
        assert!(!IntervalSet::<u16>::new().contains(0));
    }

    #[test]
    fn cardinality_sums_lengths() {
        assert_eq!(set(&[(10, 20), (30, 40)]).cardinality(), 22);
    }

    #[test]
    fn into_inner_returns_vec() {
        let vec = set(&[(0, 10), (20, 30)]).into_inner();
        assert_eq!(vec, vec![iv(0, 10), iv(20, 30)]);
    }

    #[test]
    fn deref_provides_slice_methods() {
        let s = set(&[(0, 10), (20, 30)]);
        assert_eq!(s.first(), Some(&iv(0, 10)));
        assert_eq!(s.last(), Some(&iv(20, 30)));
        assert_eq!(s.iter().count(), 2);
        assert_eq!(s[1], iv(20, 30));
        assert_eq!(s.as_slice().len(), 2);
    }

    #[test]
    fn into_iter_owned_and_borrowed() {
        let s = set(&[(0, 10), (20, 30)]);
        assert_eq!((&s).into_iter().count(), 2);
        let collected: Vec<_> = s.into_iter().collect();
        assert_eq!(collected.len(), 2);
    }

    #[test]
    fn display_format() {
        assert_eq!(set(&[(0, 10), (20, 30)]).to_string(), "[(0, 10), (20, 30)]");
        assert_eq!(IntervalSet::<u16>::new().to_string(), "[]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_deserialize_normalizes() {
        let json = r#"[{"begin":20,"end":30},{"begin":0,"end":21}]"#;
        let s: IntervalSet<u16> = serde_json::from_str(json).unwrap();
        assert_eq!(s, vec![iv(0, 30)]);
        let back = serde_json::to_string(&s).unwrap();
        assert_eq!(back, r#"[{"begin":0,"end":30}]"#);
    }
}
