use crate::domain::Domain;
use crate::set::Interval;

/// Returns the index of the first pair `(i, i + 1)` breaking canonical form,
/// or of the first inverted interval.
///
/// Canonical means: no interval is inverted, intervals are sorted by begin,
/// and consecutive intervals leave a gap of at least one value
/// (`prev.end + 1 < next.begin`).
pub fn first_violation<T: Domain>(intervals: &[Interval<T>]) -> Option<usize> {
    if let Some(index) = intervals.iter().position(Interval::is_inverted) {
        return Some(index);
    }
    intervals.windows(2).position(|w| {
        let (prev, next) = (&w[0], &w[1]);
        match prev.end().checked_succ() {
            Some(after) => after >= next.begin(),
            None => true,
        }
    })
}

/// Returns true if `intervals` is in canonical form.
pub fn is_canonical<T: Domain>(intervals: &[Interval<T>]) -> bool {
    first_violation(intervals).is_none()
}
