use crate::domain::Domain;
use crate::set::Interval;

/// Computes the intersection of two canonical interval sets.
///
/// A two-pointer sweep: whenever the current intervals overlap their common
/// part is emitted, then whichever interval ends first is left behind.
///
/// # Arguments
///
/// * `a` - First set of sorted, disjoint intervals
/// * `b` - Second set of sorted, disjoint intervals
pub fn compute_intersection<T: Domain>(a: &[Interval<T>], b: &[Interval<T>]) -> Vec<Interval<T>> {
    debug_assert!(super::assertions::is_canonical(a));
    debug_assert!(super::assertions::is_canonical(b));

    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(a.len().max(b.len()));
    let mut i = 0usize;
    let mut j = 0usize;

    while i < a.len() && j < b.len() {
        let ia = &a[i];
        let ib = &b[j];

        if let Some(common) = ia.intersection(ib) {
            result.push(common);
        }

        if ia.end() > ib.end() {
            j += 1;
        } else {
            i += 1;
        }
    }

    result
}
