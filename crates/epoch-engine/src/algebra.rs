//! Set algebra over interval sets: union, intersection, difference, complement.
//!
//! All operations take canonical inputs and return a new canonical set.
//! Domain propagation:
//!
//! - [`union`](IntervalSet::union) — the shared domain, or the bounded one
//!   when the other operand is unbounded and already inside it (otherwise
//!   [`EpochError::IncompatibleDomain`](crate::EpochError::IncompatibleDomain)).
//! - [`intersect`](IntervalSet::intersect), [`difference`](IntervalSet::difference)
//!   — the left operand's domain.
//! - [`complement`](IntervalSet::complement) — the operand's own domain.
//!
//! The infallible operations also have operator forms on references:
//! `&a & &b`, `&a - &b`, `!&a`.

use std::ops::{BitAnd, Not, Sub};

use crate::domain::Domain;
use crate::error::Result;
use crate::set::IntervalSet;
use crate::sweep;

impl IntervalSet {
    /// Every time in `self` or `other`.
    ///
    /// Both operands keep all of their time. When one operand is unbounded
    /// and every interval of it lies inside the other's bounded domain, the
    /// result takes the bounded domain.
    ///
    /// # Errors
    /// Returns [`EpochError::IncompatibleDomain`](crate::EpochError::IncompatibleDomain)
    /// when the operands carry different bounded domains, or when an
    /// unbounded operand reaches outside the other's bounded domain.
    pub fn union(&self, other: &IntervalSet) -> Result<IntervalSet> {
        let domain = Domain::for_union(self, other)?;
        let combined = self
            .intervals()
            .iter()
            .chain(other.intervals())
            .copied()
            .collect::<Vec<_>>();
        Ok(IntervalSet::from_parts(combined, domain))
    }

    /// Every time in both `self` and `other`, in `O(|self| + |other|)`.
    ///
    /// Restricting one time support to the epochs of another. Carries the
    /// left operand's domain.
    pub fn intersect(&self, other: &IntervalSet) -> IntervalSet {
        let intervals = sweep::intersect_sorted(self.intervals(), other.intervals());
        IntervalSet::from_canonical(intervals, self.domain().clone())
    }

    /// Every time in `self` that is not in `other`. Carries the left
    /// operand's domain and never reaches outside `self`.
    pub fn difference(&self, other: &IntervalSet) -> IntervalSet {
        let intervals = sweep::subtract_sorted(self.intervals(), other.intervals());
        IntervalSet::from_canonical(intervals, self.domain().clone())
    }

    /// Every time in the domain that is not in `self`.
    ///
    /// Over an unbounded domain the outer gaps are bounded by the explicit
    /// infinity markers. The complement of the empty set is the domain.
    pub fn complement(&self) -> IntervalSet {
        let universe = self.domain().to_intervals();
        let intervals = sweep::subtract_sorted(&universe, self.intervals());
        IntervalSet::from_canonical(intervals, self.domain().clone())
    }

    /// Whether the two sets share any time. Adjacent intervals do not count.
    pub fn overlaps(&self, other: &IntervalSet) -> bool {
        sweep::any_overlap(self.intervals(), other.intervals())
    }

    /// Whether every time in `self` is also in `other`.
    pub fn is_subset(&self, other: &IntervalSet) -> bool {
        sweep::subtract_sorted(self.intervals(), other.intervals()).is_empty()
    }
}

impl BitAnd for &IntervalSet {
    type Output = IntervalSet;

    fn bitand(self, rhs: &IntervalSet) -> IntervalSet {
        self.intersect(rhs)
    }
}

impl Sub for &IntervalSet {
    type Output = IntervalSet;

    fn sub(self, rhs: &IntervalSet) -> IntervalSet {
        self.difference(rhs)
    }
}

impl Not for &IntervalSet {
    type Output = IntervalSet;

    fn not(self) -> IntervalSet {
        self.complement()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EpochError;
    use crate::set::BuildOptions;

    fn set(pairs: &[(f64, f64)]) -> IntervalSet {
        IntervalSet::from_intervals(pairs).unwrap()
    }

    #[test]
    fn operators_match_named_methods() {
        let a = set(&[(0.0, 4.0), (6.0, 9.0)]);
        let b = set(&[(3.0, 7.0)]);
        assert_eq!(&a & &b, a.intersect(&b));
        assert_eq!(&a - &b, a.difference(&b));
        assert_eq!(!&a, a.complement());
    }

    #[test]
    fn union_takes_bounded_domain_of_contained_operand() {
        let options = BuildOptions {
            domain: Domain::bounded(0.0, 10.0).unwrap(),
            ..BuildOptions::default()
        };
        let a = IntervalSet::from_intervals_with_options(&[(1.0, 2.0)], &options).unwrap();
        let b = set(&[(8.0, 9.0)]);

        let ab = a.union(&b).unwrap();
        let ba = b.union(&a).unwrap();

        assert_eq!(ab, ba);
        let expected =
            IntervalSet::from_intervals_with_options(&[(1.0, 2.0), (8.0, 9.0)], &options).unwrap();
        assert_eq!(ab, expected);
    }

    #[test]
    fn union_never_clips_an_operand() {
        let options = BuildOptions {
            domain: Domain::bounded(0.0, 10.0).unwrap(),
            ..BuildOptions::default()
        };
        let a = set(&[(20.0, 30.0)]);
        let b = IntervalSet::from_intervals_with_options(&[(1.0, 2.0)], &options).unwrap();

        assert!(matches!(a.union(&b), Err(EpochError::IncompatibleDomain { .. })));
        assert!(matches!(b.union(&a), Err(EpochError::IncompatibleDomain { .. })));
        let empty_in = IntervalSet::empty_in(options.domain.clone());
        assert!(a.union(&empty_in).is_err());
    }

    #[test]
    fn subset_and_overlap() {
        let a = set(&[(1.0, 2.0)]);
        let b = set(&[(0.0, 5.0)]);
        assert!(a.is_subset(&b));
        assert!(!b.is_subset(&a));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&set(&[(2.0, 3.0)])));
        assert!(IntervalSet::empty().is_subset(&a));
    }

    #[test]
    fn incompatible_domains_surface_as_error() {
        let in_a = BuildOptions {
            domain: Domain::bounded(0.0, 10.0).unwrap(),
            ..BuildOptions::default()
        };
        let in_b = BuildOptions {
            domain: Domain::bounded(5.0, 20.0).unwrap(),
            ..BuildOptions::default()
        };
        let a = IntervalSet::from_intervals_with_options(&[(1.0, 2.0)], &in_a).unwrap();
        let b = IntervalSet::from_intervals_with_options(&[(6.0, 7.0)], &in_b).unwrap();
        assert!(matches!(a.union(&b), Err(EpochError::IncompatibleDomain { .. })));
    }
}
