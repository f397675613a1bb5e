//! Time endpoints and half-open intervals.
//!
//! An [`Interval`] is the half-open range `[start, stop)` in seconds. The two
//! ends of the time axis are explicit [`Endpoint`] variants rather than float
//! infinities, so every finite endpoint is a real number and comparisons are
//! total.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EpochError, Result};

/// One end of an interval on the time axis.
///
/// Ordering is `NegInfinity < Finite(_) < PosInfinity`. Build finite values
/// through [`Endpoint::finite`], which rejects NaN and float infinities.
#[derive(Debug, Clone, Copy)]
pub enum Endpoint {
    NegInfinity,
    Finite(f64),
    PosInfinity,
}

impl Endpoint {
    /// Wrap a real number of seconds.
    ///
    /// # Errors
    /// Returns [`EpochError::InvalidInterval`] for NaN or `±∞`.
    pub fn finite(seconds: f64) -> Result<Self> {
        if seconds.is_finite() {
            // Adding +0.0 folds -0.0 into 0.0.
            Ok(Endpoint::Finite(seconds + 0.0))
        } else {
            Err(EpochError::invalid(format!(
                "endpoint {} is not a finite number",
                seconds
            )))
        }
    }

    /// The finite value, or `None` for either unbounded marker.
    pub fn value(self) -> Option<f64> {
        match self {
            Endpoint::Finite(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Endpoint::Finite(_))
    }

    /// Float view of this endpoint, mapping the markers to `±∞`.
    ///
    /// Lossy by construction; meant for plotting and display collaborators,
    /// never for feeding values back into the engine.
    pub fn as_f64(self) -> f64 {
        match self {
            Endpoint::NegInfinity => f64::NEG_INFINITY,
            Endpoint::Finite(v) => v,
            Endpoint::PosInfinity => f64::INFINITY,
        }
    }

    /// Move this endpoint by `delta` seconds.
    ///
    /// Unbounded markers do not move. A finite value that overflows saturates
    /// to the matching marker. A NaN `delta` leaves the endpoint unchanged.
    pub(crate) fn offset(self, delta: f64) -> Self {
        match self {
            Endpoint::Finite(v) => {
                let moved = v + delta;
                if moved.is_nan() {
                    self
                } else if moved == f64::INFINITY {
                    Endpoint::PosInfinity
                } else if moved == f64::NEG_INFINITY {
                    Endpoint::NegInfinity
                } else {
                    Endpoint::Finite(moved + 0.0)
                }
            }
            marker => marker,
        }
    }

    fn rank(self) -> u8 {
        match self {
            Endpoint::NegInfinity => 0,
            Endpoint::Finite(_) => 1,
            Endpoint::PosInfinity => 2,
        }
    }
}

impl Ord for Endpoint {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Endpoint::Finite(a), Endpoint::Finite(b)) => {
                a.partial_cmp(b).unwrap_or_else(|| a.total_cmp(b))
            }
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Endpoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Endpoint {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Endpoint {}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::NegInfinity => f.write_str("-inf"),
            Endpoint::Finite(v) => write!(f, "{}", v),
            Endpoint::PosInfinity => f.write_str("inf"),
        }
    }
}

/// A half-open interval `[start, stop)` on the time axis.
///
/// # Invariants
/// `start <= stop`. An interval with `start == stop` is empty; canonical
/// interval sets never contain one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "IntervalRepr", try_from = "IntervalRepr")]
pub struct Interval {
    start: Endpoint,
    stop: Endpoint,
}

impl Interval {
    /// Create a finite interval from seconds.
    ///
    /// # Errors
    /// Returns [`EpochError::InvalidInterval`] if either value is not finite
    /// or if `start > stop`.
    pub fn new(start: f64, stop: f64) -> Result<Self> {
        Self::from_endpoints(Endpoint::finite(start)?, Endpoint::finite(stop)?)
    }

    /// Create an interval from endpoints, which may be unbounded.
    ///
    /// # Errors
    /// Returns [`EpochError::InvalidInterval`] if `start > stop`, or if a
    /// finite endpoint holds NaN or a float infinity.
    pub fn from_endpoints(start: Endpoint, stop: Endpoint) -> Result<Self> {
        let start = normalize_endpoint(start)?;
        let stop = normalize_endpoint(stop)?;
        if start > stop {
            return Err(EpochError::invalid(format!(
                "start {} is after stop {}",
                start, stop
            )));
        }
        Ok(Self { start, stop })
    }

    /// The whole time axis, `(-inf, +inf)`.
    pub fn unbounded() -> Self {
        Self {
            start: Endpoint::NegInfinity,
            stop: Endpoint::PosInfinity,
        }
    }

    #[inline]
    pub(crate) fn new_unchecked(start: Endpoint, stop: Endpoint) -> Self {
        debug_assert!(start <= stop, "interval start must not exceed stop");
        Self { start, stop }
    }

    #[inline]
    pub fn start(&self) -> Endpoint {
        self.start
    }

    #[inline]
    pub fn stop(&self) -> Endpoint {
        self.stop
    }

    /// Length in seconds; `+∞` when either end is unbounded.
    pub fn duration(&self) -> f64 {
        match (self.start, self.stop) {
            (Endpoint::Finite(a), Endpoint::Finite(b)) => b - a,
            _ if self.is_empty() => 0.0,
            _ => f64::INFINITY,
        }
    }

    /// True for a zero-length interval.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.stop
    }

    /// Whether the time `t` lies in `[start, stop)`. Non-finite `t` is never contained.
    pub fn contains(&self, t: f64) -> bool {
        match Endpoint::finite(t) {
            Ok(point) => self.start <= point && point < self.stop,
            Err(_) => false,
        }
    }

    /// Whether the two intervals share any time.
    ///
    /// Adjacent intervals, where one stops exactly when the other starts, do
    /// not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.stop && other.start < self.stop
    }

    /// The common part of two intervals, or `None` when it is empty.
    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        let start = self.start.max(other.start);
        let stop = self.stop.min(other.stop);
        (start < stop).then(|| Interval::new_unchecked(start, stop))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.stop)
    }
}

fn normalize_endpoint(endpoint: Endpoint) -> Result<Endpoint> {
    match endpoint {
        Endpoint::Finite(v) => Endpoint::finite(v),
        marker => Ok(marker),
    }
}

/// Wire form of an interval: `[start, stop]` with `null` for an unbounded side.
#[derive(Serialize, Deserialize)]
struct IntervalRepr(Option<f64>, Option<f64>);

impl From<Interval> for IntervalRepr {
    fn from(interval: Interval) -> Self {
        IntervalRepr(interval.start.value(), interval.stop.value())
    }
}

impl TryFrom<IntervalRepr> for Interval {
    type Error = EpochError;

    fn try_from(repr: IntervalRepr) -> Result<Self> {
        let start = repr.0.map_or(Ok(Endpoint::NegInfinity), Endpoint::finite)?;
        let stop = repr.1.map_or(Ok(Endpoint::PosInfinity), Endpoint::finite)?;
        Interval::from_endpoints(start, stop)
    }
}
