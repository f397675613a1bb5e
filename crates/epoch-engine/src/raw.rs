//! Intervals as constructed, before canonicalization.

use crate::domain::Domain;
use crate::error::{EpochError, Result};
use crate::interval::Interval;
use crate::set::IntervalSet;
use crate::sweep;

/// An unsorted multiset of intervals that may overlap or touch.
///
/// `push` appends without merging. Convert with [`merge`](Self::merge) or
/// [`canonicalize`](Self::canonicalize) to get an [`IntervalSet`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawIntervals {
    intervals: Vec<Interval>,
}

impl RawIntervals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `(start, stop)` pairs in seconds, keeping their order and overlaps.
    ///
    /// # Errors
    /// Returns [`EpochError::InvalidInterval`] naming the first malformed pair.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        let intervals = pairs
            .iter()
            .enumerate()
            .map(|(i, &(start, stop))| Interval::new(start, stop).map_err(|e| e.at(i)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { intervals })
    }

    /// Append without merging.
    pub fn push(&mut self, interval: Interval) {
        self.intervals.push(interval);
    }

    /// Validate and append a pair without merging.
    pub fn push_pair(&mut self, start: f64, stop: f64) -> Result<()> {
        let interval = Interval::new(start, stop).map_err(|e| e.at(self.intervals.len()))?;
        self.intervals.push(interval);
        Ok(())
    }

    /// Intervals in insertion order.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Number of raw entries, counting overlapping and empty ones.
    pub fn count(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// `(min start, max stop)` over the raw entries.
    pub fn bounds(&self) -> Option<Interval> {
        let start = self.intervals.iter().map(Interval::start).min()?;
        let stop = self.intervals.iter().map(Interval::stop).max()?;
        Some(Interval::new_unchecked(start, stop))
    }

    /// Duration of the covered time; overlaps count once.
    pub fn total_duration(&self) -> f64 {
        self.canonicalize().total_duration()
    }

    /// Fuse entries separated by at most `gap` seconds, over the whole axis.
    pub fn merge(&self, gap: f64) -> IntervalSet {
        let merged = sweep::merge_intervals(self.intervals.clone(), gap);
        IntervalSet::from_canonical(merged, Domain::Unbounded)
    }

    /// `merge(0)`: sort, fuse overlapping and touching entries.
    pub fn canonicalize(&self) -> IntervalSet {
        self.merge(0.0)
    }

    /// Canonicalize and clip to `domain`.
    pub fn into_set(self, domain: Domain) -> IntervalSet {
        IntervalSet::from_parts(self.intervals, domain)
    }
}

impl From<Vec<Interval>> for RawIntervals {
    fn from(intervals: Vec<Interval>) -> Self {
        Self { intervals }
    }
}

impl Extend<Interval> for RawIntervals {
    fn extend<T: IntoIterator<Item = Interval>>(&mut self, iter: T) {
        self.intervals.extend(iter);
    }
}

impl FromIterator<Interval> for RawIntervals {
    fn from_iter<T: IntoIterator<Item = Interval>>(iter: T) -> Self {
        Self {
            intervals: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<&[(f64, f64)]> for RawIntervals {
    type Error = EpochError;

    fn try_from(pairs: &[(f64, f64)]) -> Result<Self> {
        Self::from_pairs(pairs)
    }
}
