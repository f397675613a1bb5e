//! # epoch-engine
//!
//! Half-open interval set algebra for marking where time-series data is defined.
//!
//! An [`IntervalSet`] records the epochs during which spike trains, field
//! potentials, or behavioural measurements are valid. Sets are always kept in
//! canonical form (sorted, disjoint, non-adjacent) and carry a [`Domain`],
//! the universe used for complement. Every operation is a pure function that
//! returns a new set, so sets can be shared freely across threads.
//!
//! ## Quick start
//!
//! ```rust
//! use epoch_engine::{BuildOptions, Domain, IntervalSet};
//!
//! let options = BuildOptions {
//!     domain: Domain::bounded(0.0, 50.0).unwrap(),
//!     ..BuildOptions::default()
//! };
//! let pairs = [(1.0, 3.0), (4.0, 8.0), (1.0, 5.0)];
//! let a = IntervalSet::from_intervals_with_options(&pairs, &options).unwrap();
//! let b = IntervalSet::from_intervals(&[(0.0, 3.0), (5.0, 6.0)]).unwrap();
//!
//! let rest = a.difference(&b);
//! assert_eq!(rest.count(), 2); // [3, 5) and [6, 8)
//! assert_eq!(rest.total_duration(), 4.0);
//! ```
//!
//! ## Modules
//!
//! - [`interval`] — `Endpoint` (with explicit infinity markers) and `Interval`
//! - [`domain`] — the universe a set lives in
//! - [`set`] — the canonical `IntervalSet`, construction, accessors, queries
//! - [`raw`] — `RawIntervals`, the unmerged multiset as constructed
//! - [`algebra`] — union, intersection, difference, complement
//! - [`transform`] — expand and shift
//! - [`error`] — Error types

pub mod algebra;
pub mod domain;
pub mod error;
pub mod interval;
pub mod raw;
pub mod set;
mod sweep;
pub mod transform;

pub use domain::Domain;
pub use error::{EpochError, Result};
pub use interval::{Endpoint, Interval};
pub use raw::RawIntervals;
pub use set::{BuildOptions, IntervalSet};
pub use transform::Direction;
