//! The ambient universe an interval set lives in.
//!
//! A [`Domain`] is either the whole time axis or a canonical list of
//! intervals. It is the universal set for complement, and every interval set
//! is clipped to its domain when it is built.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EpochError, Result};
use crate::interval::Interval;
use crate::set::IntervalSet;
use crate::sweep;

/// Universal set used by complement and clipping.
///
/// Prefer the constructors over building `Within` by hand; any domain handed
/// to an [`IntervalSet`] is normalized first (sorted, merged, and folded to
/// `Unbounded` when it covers the whole axis).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<Vec<Interval>>", into = "Option<Vec<Interval>>")]
pub enum Domain {
    /// The whole time axis, `(-inf, +inf)`.
    #[default]
    Unbounded,
    /// A canonical list of intervals. May be empty.
    Within(Vec<Interval>),
}

impl Domain {
    /// Domain covering exactly the given intervals.
    pub fn within<I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = Interval>,
    {
        let merged = sweep::merge_intervals(intervals.into_iter().collect(), 0.0);
        if merged.len() == 1 && merged[0] == Interval::unbounded() {
            Domain::Unbounded
        } else {
            Domain::Within(merged)
        }
    }

    /// Single-interval domain `[start, stop)`.
    ///
    /// # Errors
    /// Returns [`EpochError::InvalidInterval`] if the pair is malformed.
    pub fn bounded(start: f64, stop: f64) -> Result<Self> {
        Ok(Self::within([Interval::new(start, stop)?]))
    }

    /// Domain built from `(start, stop)` pairs in seconds.
    ///
    /// # Errors
    /// Returns [`EpochError::InvalidInterval`] naming the first malformed pair.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        let intervals = pairs
            .iter()
            .enumerate()
            .map(|(i, &(start, stop))| Interval::new(start, stop).map_err(|e| e.at(i)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::within(intervals))
    }

    /// Use the intervals of an existing set as a domain.
    pub fn from_set(set: &IntervalSet) -> Self {
        Self::within(set.intervals().iter().copied())
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Domain::Unbounded)
    }

    /// The domain's intervals in canonical form; `Unbounded` yields the
    /// single interval `(-inf, +inf)`.
    pub fn to_intervals(&self) -> Vec<Interval> {
        match self {
            Domain::Unbounded => vec![Interval::unbounded()],
            Domain::Within(intervals) => sweep::merge_intervals(intervals.clone(), 0.0),
        }
    }

    /// The domain as an interval set over the whole axis.
    pub fn to_set(&self) -> IntervalSet {
        IntervalSet::from_parts(self.to_intervals(), Domain::Unbounded)
    }

    /// Covered time in seconds. Overlapping intervals of a hand-built
    /// `Within` count once.
    pub fn total_duration(&self) -> f64 {
        match self {
            Domain::Unbounded => f64::INFINITY,
            Domain::Within(_) => self.to_intervals().iter().map(Interval::duration).sum(),
        }
    }

    pub fn contains(&self, t: f64) -> bool {
        match self {
            Domain::Unbounded => t.is_finite(),
            Domain::Within(intervals) => intervals.iter().any(|iv| iv.contains(t)),
        }
    }

    pub(crate) fn normalize(self) -> Self {
        match self {
            Domain::Unbounded => Domain::Unbounded,
            Domain::Within(intervals) => Self::within(intervals),
        }
    }

    /// Restrict canonical `intervals` to this domain.
    pub(crate) fn clip(&self, intervals: Vec<Interval>) -> Vec<Interval> {
        match self {
            Domain::Unbounded => intervals,
            Domain::Within(bounds) => {
                let clipped = sweep::intersect_sorted(&intervals, bounds);
                if clipped != intervals {
                    tracing::trace!(
                        before = intervals.len(),
                        after = clipped.len(),
                        "clipped intervals to domain"
                    );
                }
                clipped
            }
        }
    }

    /// Whether every one of the canonical `intervals` lies inside this domain.
    pub(crate) fn covers(&self, intervals: &[Interval]) -> bool {
        match self {
            Domain::Unbounded => true,
            Domain::Within(bounds) => sweep::subtract_sorted(intervals, bounds).is_empty(),
        }
    }

    /// Domain of the union of `left` and `right`.
    ///
    /// Equal domains are kept. An unbounded operand is accepted next to a
    /// bounded one only when all of its intervals already lie inside the
    /// bounded domain, so the union never clips away an operand's time. Every
    /// other combination is an error.
    pub(crate) fn for_union(left: &IntervalSet, right: &IntervalSet) -> Result<Domain> {
        let shared = match (left.domain(), right.domain()) {
            (l, r) if l == r => Some(l.clone()),
            (Domain::Unbounded, bounded) if bounded.covers(left.intervals()) => {
                Some(bounded.clone())
            }
            (bounded, Domain::Unbounded) if bounded.covers(right.intervals()) => {
                Some(bounded.clone())
            }
            _ => None,
        };

        shared.ok_or_else(|| {
            let (left, right) = (left.domain(), right.domain());
            tracing::debug!(%left, %right, "union operands carry incompatible domains");
            EpochError::IncompatibleDomain {
                left: left.clone(),
                right: right.clone(),
            }
        })
    }
}

impl TryFrom<(f64, f64)> for Domain {
    type Error = EpochError;

    fn try_from((start, stop): (f64, f64)) -> Result<Self> {
        Domain::bounded(start, stop)
    }
}

impl From<&IntervalSet> for Domain {
    fn from(set: &IntervalSet) -> Self {
        Domain::from_set(set)
    }
}

impl From<Option<Vec<Interval>>> for Domain {
    fn from(intervals: Option<Vec<Interval>>) -> Self {
        match intervals {
            Some(intervals) => Domain::within(intervals),
            None => Domain::Unbounded,
        }
    }
}

impl From<Domain> for Option<Vec<Interval>> {
    fn from(domain: Domain) -> Self {
        match domain {
            Domain::Unbounded => None,
            Domain::Within(intervals) => Some(intervals),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Unbounded => f.write_str("unbounded"),
            Domain::Within(intervals) if intervals.is_empty() => f.write_str("{}"),
            Domain::Within(intervals) => {
                for (i, iv) in intervals.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ∪ ")?;
                    }
                    write!(f, "{}", iv)?;
                }
                Ok(())
            }
        }
    }
}
