//! The canonical interval set and its construction.
//!
//! An [`IntervalSet`] is always canonical: sorted by start, pairwise disjoint,
//! non-adjacent, free of empty intervals, and clipped to its [`Domain`]. Every
//! operation returns a new, independently owned set; none mutates its inputs.
//! For the as-constructed multiset (unsorted, possibly overlapping) see
//! [`RawIntervals`](crate::raw::RawIntervals).

use serde::{Deserialize, Serialize};

use crate::domain::Domain;
use crate::error::{EpochError, Result};
use crate::interval::{Endpoint, Interval};
use crate::raw::RawIntervals;
use crate::sweep;

/// Options for [`IntervalSet::from_intervals_with_options`].
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOptions {
    /// Samples per second. Input pairs are multiplied by `1 / sampling_rate`
    /// to turn sample counts into seconds. Must be finite and positive.
    pub sampling_rate: f64,
    /// Universal set for complement; the result is clipped to it. Given in
    /// seconds and never scaled.
    pub domain: Domain,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            sampling_rate: 1.0,
            domain: Domain::Unbounded,
        }
    }
}

/// A canonical collection of half-open time intervals with its domain.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "SetRepr", into = "SetRepr")]
pub struct IntervalSet {
    intervals: Vec<Interval>,
    domain: Domain,
}

impl IntervalSet {
    /// The empty set over the whole axis.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The empty set in a given domain.
    pub fn empty_in(domain: Domain) -> Self {
        Self {
            intervals: Vec::new(),
            domain: domain.normalize(),
        }
    }

    /// The whole time axis.
    pub fn unbounded() -> Self {
        Self {
            intervals: vec![Interval::unbounded()],
            domain: Domain::Unbounded,
        }
    }

    /// Build a set from `(start, stop)` pairs in seconds over the whole axis.
    ///
    /// # Errors
    /// Returns [`EpochError::InvalidInterval`] naming the first pair with a
    /// non-finite endpoint or `start > stop`.
    ///
    /// # Examples
    ///
    /// ```
    /// use epoch_engine::IntervalSet;
    ///
    /// let set = IntervalSet::from_intervals(&[(0.0, 3.0), (5.0, 6.0), (10.0, 15.0)]).unwrap();
    /// assert_eq!(set.count(), 3);
    /// assert_eq!(set.total_duration(), 9.0);
    /// ```
    pub fn from_intervals(pairs: &[(f64, f64)]) -> Result<Self> {
        Self::from_intervals_with_options(pairs, &BuildOptions::default())
    }

    /// Build a set from `(start, stop)` pairs with a sampling rate and domain.
    ///
    /// Pairs are scaled first, then validated, then clipped to the domain and
    /// merged. Construction is all-or-nothing: one malformed pair fails the
    /// whole call.
    ///
    /// # Errors
    /// Returns [`EpochError::InvalidSamplingRate`] for a zero, negative, or
    /// non-finite rate, and [`EpochError::InvalidInterval`] for a malformed pair.
    pub fn from_intervals_with_options(
        pairs: &[(f64, f64)],
        options: &BuildOptions,
    ) -> Result<Self> {
        let fs = options.sampling_rate;
        if !(fs.is_finite() && fs > 0.0) {
            return Err(EpochError::InvalidSamplingRate(fs));
        }
        let scale = 1.0 / fs;

        let intervals = pairs
            .iter()
            .enumerate()
            .map(|(i, &(start, stop))| {
                let (start, stop) = if fs == 1.0 {
                    (start, stop)
                } else {
                    (start * scale, stop * scale)
                };
                Interval::new(start, stop).map_err(|e| e.at(i))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_parts(intervals, options.domain.clone()))
    }

    /// Build a set from already-validated intervals. Never fails; the
    /// intervals are merged and clipped to `domain`.
    pub fn from_parts<I>(intervals: I, domain: Domain) -> Self
    where
        I: IntoIterator<Item = Interval>,
    {
        let domain = domain.normalize();
        let merged = sweep::merge_intervals(intervals.into_iter().collect(), 0.0);
        let intervals = domain.clip(merged);
        Self { intervals, domain }
    }

    /// Wrap intervals that are already canonical and inside `domain`.
    pub(crate) fn from_canonical(intervals: Vec<Interval>, domain: Domain) -> Self {
        debug_assert!(intervals.windows(2).all(|w| w[0].stop() < w[1].start()));
        Self { intervals, domain }
    }

    // ── Accessors ───────────────────────────────────────────────────────────

    /// The canonical intervals, sorted by start.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn into_intervals(self) -> Vec<Interval> {
        self.intervals
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Number of intervals.
    pub fn count(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Sum of interval lengths in seconds; `+∞` if any interval is unbounded.
    pub fn total_duration(&self) -> f64 {
        self.intervals.iter().map(Interval::duration).sum()
    }

    /// `(min start, max stop)`, or `None` for the empty set.
    pub fn bounds(&self) -> Option<Interval> {
        match (self.intervals.first(), self.intervals.last()) {
            (Some(first), Some(last)) => Some(Interval::new_unchecked(first.start(), last.stop())),
            _ => None,
        }
    }

    pub fn first(&self) -> Option<&Interval> {
        self.intervals.first()
    }

    pub fn last(&self) -> Option<&Interval> {
        self.intervals.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// Copy the intervals into a raw list for appending without merging.
    pub fn to_raw(&self) -> RawIntervals {
        RawIntervals::from(self.intervals.clone())
    }

    // ── Queries ─────────────────────────────────────────────────────────────

    /// Index of the interval containing time `t`, found by binary search.
    pub fn locate(&self, t: f64) -> Option<usize> {
        let point = Endpoint::finite(t).ok()?;
        let idx = self.intervals.partition_point(|iv| iv.stop() <= point);
        self.intervals
            .get(idx)
            .filter(|iv| iv.start() <= point)
            .map(|_| idx)
    }

    /// [`locate`](Self::locate) for every timestamp; input order need not be sorted.
    pub fn locate_all(&self, ts: &[f64]) -> Vec<Option<usize>> {
        ts.iter().map(|&t| self.locate(t)).collect()
    }

    pub fn contains(&self, t: f64) -> bool {
        self.locate(t).is_some()
    }

    // ── Filtering and merging ───────────────────────────────────────────────

    /// Keep only intervals lasting at least `threshold` seconds.
    pub fn drop_short_intervals(&self, threshold: f64) -> IntervalSet {
        self.retain(|iv| iv.duration() >= threshold)
    }

    /// Keep only intervals lasting at most `threshold` seconds.
    pub fn drop_long_intervals(&self, threshold: f64) -> IntervalSet {
        self.retain(|iv| iv.duration() <= threshold)
    }

    /// Fuse intervals separated by at most `gap` seconds.
    ///
    /// With `gap = 0` this returns an equal set. A gap that bridges a hole in
    /// the domain is clipped back out, so the result always stays inside
    /// the domain.
    pub fn merge(&self, gap: f64) -> IntervalSet {
        let merged = sweep::merge_intervals(self.intervals.clone(), gap);
        IntervalSet::from_canonical(self.domain.clip(merged), self.domain.clone())
    }

    fn retain<F>(&self, keep: F) -> IntervalSet
    where
        F: Fn(&Interval) -> bool,
    {
        let intervals = self.intervals.iter().copied().filter(|iv| keep(iv)).collect();
        IntervalSet::from_canonical(intervals, self.domain.clone())
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

/// Wire form: `{"intervals": [[s, e], ...], "domain": null | [[s, e], ...]}`.
#[derive(Serialize, Deserialize)]
struct SetRepr {
    intervals: Vec<Interval>,
    #[serde(default)]
    domain: Domain,
}

impl From<SetRepr> for IntervalSet {
    fn from(repr: SetRepr) -> Self {
        IntervalSet::from_parts(repr.intervals, repr.domain)
    }
}

impl From<IntervalSet> for SetRepr {
    fn from(set: IntervalSet) -> Self {
        SetRepr {
            intervals: set.intervals,
            domain: set.domain,
        }
    }
}
