//! Arithmetic transforms: symmetric expansion and shifting.
//!
//! These move interval endpoints by a scalar number of seconds. They are
//! unrelated to set union even though some notations write both as `+`, so
//! each has its own name. Results are re-merged, since moved intervals may
//! newly overlap or touch, and clipped to the input's domain.

use std::ops::{Shl, Shr};

use crate::interval::Endpoint;
use crate::set::IntervalSet;
use crate::sweep;

/// Direction of a [`shift`](IntervalSet::shift) along the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Earlier: subtract the offset.
    Left,
    /// Later: add the offset.
    Right,
}

impl IntervalSet {
    /// Grow every interval by `delta` seconds on both ends.
    ///
    /// A negative `delta` shrinks intervals; one that would collapse to zero
    /// length or reverse is removed rather than reported as an error.
    pub fn expand(&self, delta: f64) -> IntervalSet {
        self.transform(|start, stop| (start.offset(-delta), stop.offset(delta)))
    }

    /// Move every interval by `delta` seconds in `direction`.
    pub fn shift(&self, delta: f64, direction: Direction) -> IntervalSet {
        let offset = match direction {
            Direction::Left => -delta,
            Direction::Right => delta,
        };
        self.transform(|start, stop| (start.offset(offset), stop.offset(offset)))
    }

    fn transform<F>(&self, map: F) -> IntervalSet
    where
        F: FnMut(Endpoint, Endpoint) -> (Endpoint, Endpoint),
    {
        let (moved, dropped) = sweep::remap_endpoints(self.intervals(), map);
        if dropped > 0 {
            tracing::debug!(dropped, "intervals collapsed to zero length and were removed");
        }
        let merged = sweep::merge_intervals(moved, 0.0);
        IntervalSet::from_canonical(self.domain().clip(merged), self.domain().clone())
    }
}

/// `&set >> delta` shifts later by `delta` seconds.
impl Shr<f64> for &IntervalSet {
    type Output = IntervalSet;

    fn shr(self, delta: f64) -> IntervalSet {
        self.shift(delta, Direction::Right)
    }
}

/// `&set << delta` shifts earlier by `delta` seconds.
impl Shl<f64> for &IntervalSet {
    type Output = IntervalSet;

    fn shl(self, delta: f64) -> IntervalSet {
        self.shift(delta, Direction::Left)
    }
}
