use tracing::trace;

use crate::domain::Domain;
use crate::set::Interval;

/// Appends `iv` to `result`, extending the last interval instead when the two
/// overlap or are adjacent.
///
/// `result` must be canonical and `iv.begin()` must not precede the begin of
/// its last interval.
fn merge_into<T: Domain>(result: &mut Vec<Interval<T>>, iv: Interval<T>) {
    if let Some(last) = result.last_mut() {
        let mergeable = match last.end().checked_succ() {
            Some(after) => iv.begin() <= after,
            // last already reaches T::MAX
            None => true,
        };
        if mergeable {
            if iv.end() > last.end() {
                *last = Interval::new(last.begin(), iv.end());
            }
            return;
        }
    }
    result.push(iv);
}

/// Brings an arbitrary sequence into canonical form.
///
/// Inverted intervals are dropped, the rest are sorted by begin and swept once,
/// merging every run of overlapping or adjacent intervals.
pub(crate) fn normalize<T: Domain>(mut intervals: Vec<Interval<T>>) -> Vec<Interval<T>> {
    intervals.retain(|iv| !iv.is_inverted());
    if intervals.len() <= 1 {
        return intervals;
    }
    intervals.sort_unstable_by_key(Interval::begin);

    let input_len = intervals.len();
    let mut merged: Vec<Interval<T>> = Vec::with_capacity(input_len);
    for iv in intervals {
        merge_into(&mut merged, iv);
    }
    trace!(input_len, merged_len = merged.len(), "normalized intervals");
    merged
}

/// Computes the union of two interval sets.
///
/// Both operands are concatenated, sorted and swept, so the result is
/// canonical even when an operand is not.
pub fn compute_union<T: Domain>(a: &[Interval<T>], b: &[Interval<T>]) -> Vec<Interval<T>> {
    let mut intervals = Vec::with_capacity(a.len() + b.len());
    intervals.extend_from_slice(a);
    intervals.extend_from_slice(b);
    normalize(intervals)
}
