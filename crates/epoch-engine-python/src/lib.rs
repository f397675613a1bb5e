//! # epoch-engine-python
//!
//! Python bindings for the epoch-engine interval set algebra, built with PyO3.
//!
//! Exposes one class, `IntervalSet`, as the `_native` extension module. Times
//! are floats in seconds; an unbounded side of an interval comes back to
//! Python as `-inf` / `inf`.
//!
//! ```python
//! from epochs._native import IntervalSet
//!
//! a = IntervalSet([(1, 3), (4, 8), (1, 5)], domain=[(0, 50)])
//! b = IntervalSet([(0, 3), (5, 6)])
//! (a - b).intervals   # [(3.0, 5.0), (6.0, 8.0)]
//! ```

use epoch_engine::{BuildOptions, Direction, Domain, EpochError, Interval, IntervalSet};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_py_err(e: EpochError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn to_pair(interval: &Interval) -> (f64, f64) {
    (interval.start().as_f64(), interval.stop().as_f64())
}

/// A canonical set of half-open time intervals `[start, stop)`.
///
/// Args:
///     pairs: A list of `(start, stop)` tuples.
///     fs: Sampling rate; pairs are divided by it to get seconds.
///     domain: Optional list of `(start, stop)` tuples bounding the set.
///         Complement is taken within it. Defaults to the whole time axis.
///
/// Raises:
///     ValueError: If a pair has `start > stop`, or `fs` is not positive.
#[pyclass(name = "IntervalSet", frozen, eq)]
#[derive(PartialEq)]
struct PyIntervalSet {
    inner: IntervalSet,
}

impl From<IntervalSet> for PyIntervalSet {
    fn from(inner: IntervalSet) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PyIntervalSet {
    #[new]
    #[pyo3(signature = (pairs, fs=1.0, domain=None))]
    fn new(pairs: Vec<(f64, f64)>, fs: f64, domain: Option<Vec<(f64, f64)>>) -> PyResult<Self> {
        let domain = match domain {
            Some(bounds) => Domain::from_pairs(&bounds).map_err(to_py_err)?,
            None => Domain::Unbounded,
        };
        let options = BuildOptions {
            sampling_rate: fs,
            domain,
        };
        IntervalSet::from_intervals_with_options(&pairs, &options)
            .map(Self::from)
            .map_err(to_py_err)
    }

    /// The intervals as `(start, stop)` tuples, sorted by start.
    #[getter]
    fn intervals(&self) -> Vec<(f64, f64)> {
        self.inner.iter().map(to_pair).collect()
    }

    #[getter]
    fn count(&self) -> usize {
        self.inner.count()
    }

    #[getter]
    fn total_duration(&self) -> f64 {
        self.inner.total_duration()
    }

    /// `(min start, max stop)`, or `None` when empty.
    #[getter]
    fn bounds(&self) -> Option<(f64, f64)> {
        self.inner.bounds().as_ref().map(to_pair)
    }

    /// The domain as `(start, stop)` tuples, or `None` when unbounded.
    #[getter]
    fn domain(&self) -> Option<Vec<(f64, f64)>> {
        match self.inner.domain() {
            Domain::Unbounded => None,
            Domain::Within(intervals) => Some(intervals.iter().map(to_pair).collect()),
        }
    }

    /// Fuse intervals separated by at most `gap` seconds.
    #[pyo3(signature = (gap=0.0))]
    fn merge(&self, gap: f64) -> Self {
        self.inner.merge(gap).into()
    }

    /// Every time in either set.
    ///
    /// Raises:
    ///     ValueError: If the sets carry different bounded domains.
    fn union(&self, other: &Self) -> PyResult<Self> {
        self.inner
            .union(&other.inner)
            .map(Self::from)
            .map_err(to_py_err)
    }

    fn intersect(&self, other: &Self) -> Self {
        self.inner.intersect(&other.inner).into()
    }

    fn difference(&self, other: &Self) -> Self {
        self.inner.difference(&other.inner).into()
    }

    fn complement(&self) -> Self {
        self.inner.complement().into()
    }

    /// Grow every interval by `delta` seconds on both ends; negative shrinks.
    fn expand(&self, delta: f64) -> Self {
        self.inner.expand(delta).into()
    }

    /// Move every interval by `delta` seconds, earlier when `left` is true.
    #[pyo3(signature = (delta, left=false))]
    fn shift(&self, delta: f64, left: bool) -> Self {
        let direction = if left { Direction::Left } else { Direction::Right };
        self.inner.shift(delta, direction).into()
    }

    fn contains(&self, t: f64) -> bool {
        self.inner.contains(t)
    }

    fn drop_short_intervals(&self, threshold: f64) -> Self {
        self.inner.drop_short_intervals(threshold).into()
    }

    fn drop_long_intervals(&self, threshold: f64) -> Self {
        self.inner.drop_long_intervals(threshold).into()
    }

    fn __and__(&self, other: &Self) -> Self {
        self.intersect(other)
    }

    fn __or__(&self, other: &Self) -> PyResult<Self> {
        self.union(other)
    }

    fn __sub__(&self, other: &Self) -> Self {
        self.difference(other)
    }

    fn __invert__(&self) -> Self {
        self.complement()
    }

    fn __rshift__(&self, delta: f64) -> Self {
        self.shift(delta, false)
    }

    fn __lshift__(&self, delta: f64) -> Self {
        self.shift(delta, true)
    }

    fn __contains__(&self, t: f64) -> bool {
        self.contains(t)
    }

    fn __len__(&self) -> usize {
        self.inner.count()
    }

    fn __repr__(&self) -> String {
        format!("IntervalSet({:?})", self.intervals())
    }
}

/// The `_native` Python module, implemented in Rust via PyO3.
#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyIntervalSet>()?;
    Ok(())
}
