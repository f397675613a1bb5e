//! Sorted-interval sweeps shared by every set operation.
//!
//! `merge_intervals` turns an arbitrary list into canonical form. The other
//! sweeps require canonical inputs (sorted, disjoint, non-adjacent, no empty
//! intervals) and return canonical outputs in `O(|a| + |b|)`.

use crate::interval::{Endpoint, Interval};

/// Sort by start and fuse intervals separated by at most `gap` seconds.
///
/// Empty intervals are dropped first. Intervals with equal starts always
/// fuse. A negative or NaN `gap` is treated as 0, which fuses only
/// overlapping or touching intervals.
pub(crate) fn merge_intervals(mut intervals: Vec<Interval>, gap: f64) -> Vec<Interval> {
    let gap = if gap > 0.0 { gap } else { 0.0 };

    intervals.retain(|iv| !iv.is_empty());
    if intervals.is_empty() {
        return intervals;
    }

    intervals.sort_unstable();

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for iv in intervals {
        if let Some(last) = merged.last_mut() {
            if iv.start() <= last.stop().offset(gap) {
                // Overlapping, touching, or within `gap`: extend the open interval.
                let stop = last.stop().max(iv.stop());
                *last = Interval::new_unchecked(last.start(), stop);
                continue;
            }
        }
        merged.push(iv);
    }

    merged
}

/// Intersection of two canonical lists.
pub(crate) fn intersect_sorted(a: &[Interval], b: &[Interval]) -> Vec<Interval> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if let Some(common) = a[i].intersection(&b[j]) {
            out.push(common);
        }
        // Advance whichever interval ends first.
        if a[i].stop() < b[j].stop() {
            i += 1;
        } else {
            j += 1;
        }
    }

    out
}

/// Everything in `a` that is not in `b`, both canonical.
///
/// Each `b` interval removes zero, one or two pieces' worth of time from an
/// overlapping `a` interval: full cover leaves nothing, a one-sided overlap
/// trims an end, and a strictly interior interval splits it in two.
pub(crate) fn subtract_sorted(a: &[Interval], b: &[Interval]) -> Vec<Interval> {
    let mut out = Vec::with_capacity(a.len());
    let mut first = 0;

    for iv in a {
        // `a` is sorted, so anything that ended before this interval also
        // ended before every later one.
        while first < b.len() && b[first].stop() <= iv.start() {
            first += 1;
        }

        let mut cursor = iv.start();
        for cut in b[first..].iter().take_while(|cut| cut.start() < iv.stop()) {
            if cursor < cut.start() {
                out.push(Interval::new_unchecked(cursor, cut.start()));
            }
            cursor = cursor.max(cut.stop());
            if cursor >= iv.stop() {
                break;
            }
        }

        if cursor < iv.stop() {
            out.push(Interval::new_unchecked(cursor, iv.stop()));
        }
    }

    out
}

/// Whether two canonical lists share any time, without allocating.
pub(crate) fn any_overlap(a: &[Interval], b: &[Interval]) -> bool {
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i].overlaps(&b[j]) {
            return true;
        }
        if a[i].stop() < b[j].stop() {
            i += 1;
        } else {
            j += 1;
        }
    }
    false
}

/// Apply `map` to both ends of every interval and drop any interval that
/// becomes empty or reversed. Returns the surviving intervals (unsorted,
/// possibly overlapping) and the number dropped.
pub(crate) fn remap_endpoints<F>(intervals: &[Interval], mut map: F) -> (Vec<Interval>, usize)
where
    F: FnMut(Endpoint, Endpoint) -> (Endpoint, Endpoint),
{
    let mut kept = Vec::with_capacity(intervals.len());
    for iv in intervals {
        let (start, stop) = map(iv.start(), iv.stop());
        if start < stop {
            kept.push(Interval::new_unchecked(start, stop));
        }
    }
    let dropped = intervals.len() - kept.len();
    (kept, dropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: f64, stop: f64) -> Interval {
        Interval::new(start, stop).unwrap()
    }

    #[test]
    fn merge_sorts_and_fuses_touching() {
        let merged = merge_intervals(vec![iv(7.0, 8.0), iv(2.0, 5.0), iv(0.0, 2.0)], 0.0);
        assert_eq!(merged, vec![iv(0.0, 5.0), iv(7.0, 8.0)]);
    }

    #[test]
    fn merge_drops_empty_intervals() {
        let merged = merge_intervals(vec![iv(1.0, 1.0), iv(3.0, 3.0)], 0.0);
        assert!(merged.is_empty());
    }

    #[test]
    fn merge_treats_negative_gap_as_zero() {
        let merged = merge_intervals(vec![iv(0.0, 1.0), iv(1.0, 2.0), iv(2.5, 3.0)], -4.0);
        assert_eq!(merged, vec![iv(0.0, 2.0), iv(2.5, 3.0)]);
    }

    #[test]
    fn subtract_splits_when_cut_is_interior() {
        let out = subtract_sorted(&[iv(0.0, 10.0)], &[iv(2.0, 3.0), iv(5.0, 6.0)]);
        assert_eq!(out, vec![iv(0.0, 2.0), iv(3.0, 5.0), iv(6.0, 10.0)]);
    }

    #[test]
    fn subtract_reuses_cut_spanning_two_intervals() {
        let out = subtract_sorted(&[iv(0.0, 2.0), iv(3.0, 6.0)], &[iv(1.0, 4.0)]);
        assert_eq!(out, vec![iv(0.0, 1.0), iv(4.0, 6.0)]);
    }

    #[test]
    fn intersect_walks_both_lists() {
        let out = intersect_sorted(&[iv(0.0, 4.0), iv(6.0, 9.0)], &[iv(3.0, 7.0), iv(8.0, 12.0)]);
        assert_eq!(out, vec![iv(3.0, 4.0), iv(6.0, 7.0), iv(8.0, 9.0)]);
    }

    #[test]
    fn any_overlap_ignores_adjacency() {
        assert!(!any_overlap(&[iv(0.0, 1.0)], &[iv(1.0, 2.0)]));
        assert!(any_overlap(&[iv(0.0, 1.5)], &[iv(1.0, 2.0)]));
    }
}
