use crate::domain::Domain;
use crate::set::Interval;

/// Returns the complement of a canonical interval set within `bounds`.
///
/// Intervals partially outside `bounds` are clipped; an inverted `bounds`
/// yields the empty set. With `bounds == Interval::universe()` this is the
/// plain set complement.
pub fn compute_complement<T: Domain>(
    canonical: &[Interval<T>],
    bounds: Interval<T>,
) -> Vec<Interval<T>> {
    debug_assert!(super::assertions::is_canonical(canonical));

    if bounds.is_inverted() {
        return Vec::new();
    }
    if canonical.is_empty() {
        return vec![bounds];
    }

    let mut result = Vec::with_capacity(canonical.len() + 1);
    // First value not yet accounted for; `None` once an interval reached T::MAX.
    let mut cursor = Some(bounds.begin());
    for iv in canonical {
        let Some(start) = cursor else { break };
        if iv.begin() > bounds.end() {
            break;
        }
        if iv.end() < start {
            continue;
        }
        if iv.begin() > start {
            // iv.begin() > start >= T::MIN, so the predecessor exists
            if let Some(gap_end) = iv.begin().checked_pred() {
                result.push(Interval::new(start, gap_end));
            }
        }
        cursor = iv.end().checked_succ();
    }

    if let Some(start) = cursor {
        if start <= bounds.end() {
            result.push(Interval::new(start, bounds.end()));
        }
    }

    result
}
