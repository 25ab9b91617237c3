use crate::domain::Domain;
use crate::set::Interval;

use super::{compute_complement, compute_intersection, compute_union};

/// `a − b`, computed as `a ∩ ¬b` over the full domain.
pub fn compute_difference<T: Domain>(a: &[Interval<T>], b: &[Interval<T>]) -> Vec<Interval<T>> {
    if a.is_empty() {
        return Vec::new();
    }
    let not_b = compute_complement(b, Interval::universe());
    compute_intersection(a, &not_b)
}

/// `a ⊕ b`, computed as `(a − b) ∪ (b − a)`.
pub fn compute_symmetric_difference<T: Domain>(
    a: &[Interval<T>],
    b: &[Interval<T>],
) -> Vec<Interval<T>> {
    let a_only = compute_difference(a, b);
    let b_only = compute_difference(b, a);
    compute_union(&a_only, &b_only)
}
