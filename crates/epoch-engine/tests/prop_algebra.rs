//! Property-based tests for the interval set algebra using proptest.
//!
//! Endpoints are small integers stored as `f64`, so every sum and difference
//! is exact and durations can be compared with `==`.

use epoch_engine::{BuildOptions, Direction, Domain, IntervalSet, RawIntervals};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A pair with `start <= stop` on a grid of whole seconds.
fn arb_pair() -> impl Strategy<Value = (f64, f64)> {
    (-50i32..50, 0i32..20).prop_map(|(start, len)| (start as f64, (start + len) as f64))
}

fn arb_pairs() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec(arb_pair(), 0..12)
}

fn arb_set() -> impl Strategy<Value = IntervalSet> {
    arb_pairs().prop_map(|pairs| IntervalSet::from_intervals(&pairs).unwrap())
}

fn arb_domain() -> impl Strategy<Value = Domain> {
    prop_oneof![
        Just(Domain::Unbounded),
        (-40i32..0, 1i32..80).prop_map(|(start, len)| {
            Domain::bounded(start as f64, (start + len) as f64).unwrap()
        }),
        Just(Domain::from_pairs(&[(-30.0, -10.0), (0.0, 25.0)]).unwrap()),
    ]
}

fn build_in(pairs: &[(f64, f64)], domain: &Domain) -> IntervalSet {
    let options = BuildOptions {
        domain: domain.clone(),
        ..BuildOptions::default()
    };
    IntervalSet::from_intervals_with_options(pairs, &options).unwrap()
}

fn arb_set_in_domain() -> impl Strategy<Value = IntervalSet> {
    (arb_pairs(), arb_domain()).prop_map(|(pairs, domain)| build_in(&pairs, &domain))
}

/// Three sets drawn in one shared domain.
fn arb_sets_in_shared_domain() -> impl Strategy<Value = (IntervalSet, IntervalSet, IntervalSet)> {
    (arb_domain(), arb_pairs(), arb_pairs(), arb_pairs()).prop_map(|(domain, a, b, c)| {
        (build_in(&a, &domain), build_in(&b, &domain), build_in(&c, &domain))
    })
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

fn is_canonical(set: &IntervalSet) -> bool {
    set.intervals().iter().all(|iv| !iv.is_empty())
        && set
            .intervals()
            .windows(2)
            .all(|w| w[0].stop() < w[1].start())
}

// ---------------------------------------------------------------------------
// Merge
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn merge_is_idempotent(pairs in arb_pairs(), gap in 0i32..5) {
        let raw = RawIntervals::from_pairs(&pairs).unwrap();
        let once = raw.merge(gap as f64);
        prop_assert_eq!(once.merge(gap as f64), once.clone());
        prop_assert_eq!(once.merge(0.0), once);
    }

    #[test]
    fn construction_is_canonical(set in arb_set_in_domain()) {
        prop_assert!(is_canonical(&set));
    }

    #[test]
    fn raw_duration_counts_overlaps_once(pairs in arb_pairs()) {
        let raw = RawIntervals::from_pairs(&pairs).unwrap();
        let set = IntervalSet::from_intervals(&pairs).unwrap();
        prop_assert_eq!(raw.total_duration(), set.total_duration());
        prop_assert!(set.count() <= raw.count());
    }
}

// ---------------------------------------------------------------------------
// Union / intersection laws
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn union_is_commutative(a in arb_set(), b in arb_set()) {
        prop_assert_eq!(a.union(&b).unwrap(), b.union(&a).unwrap());
    }

    #[test]
    fn union_is_associative(a in arb_set(), b in arb_set(), c in arb_set()) {
        let left = a.union(&b).unwrap().union(&c).unwrap();
        let right = a.union(&b.union(&c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn empty_is_union_identity(a in arb_set_in_domain()) {
        prop_assert_eq!(a.union(&IntervalSet::empty()).unwrap(), a.merge(0.0));
    }

    #[test]
    fn intersection_with_self_and_empty(a in arb_set_in_domain()) {
        prop_assert_eq!(a.intersect(&a), a.merge(0.0));
        prop_assert!(a.intersect(&IntervalSet::empty()).is_empty());
    }

    #[test]
    fn intersection_is_commutative_on_intervals(a in arb_set(), b in arb_set()) {
        prop_assert_eq!(a.intersect(&b), b.intersect(&a));
    }

    #[test]
    fn results_are_canonical(a in arb_set(), b in arb_set()) {
        prop_assert!(is_canonical(&a.union(&b).unwrap()));
        prop_assert!(is_canonical(&a.intersect(&b)));
        prop_assert!(is_canonical(&a.difference(&b)));
        prop_assert!(is_canonical(&a.complement()));
    }
}

// ---------------------------------------------------------------------------
// Union across domains
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn union_laws_hold_in_a_shared_domain((a, b, c) in arb_sets_in_shared_domain()) {
        let ab = a.union(&b).unwrap();
        prop_assert_eq!(&ab, &b.union(&a).unwrap());

        let left = ab.union(&c).unwrap();
        let right = a.union(&b.union(&c).unwrap()).unwrap();
        prop_assert_eq!(left, right);

        prop_assert!(a.is_subset(&ab));
        prop_assert!(b.is_subset(&ab));
        prop_assert_eq!(ab.domain(), a.domain());
    }

    #[test]
    fn empty_in_same_domain_is_union_identity(a in arb_set_in_domain()) {
        let empty = IntervalSet::empty_in(a.domain().clone());
        prop_assert_eq!(a.union(&empty).unwrap(), a.clone());
        prop_assert_eq!(empty.union(&a).unwrap(), a);
    }

    #[test]
    fn mixed_domain_union_keeps_both_operands(a in arb_set_in_domain(), b in arb_set()) {
        match (a.union(&b), b.union(&a)) {
            (Ok(ab), Ok(ba)) => {
                prop_assert_eq!(&ab, &ba);
                prop_assert!(a.is_subset(&ab));
                prop_assert!(b.is_subset(&ab));
            }
            (Err(_), Err(_)) => {
                prop_assert!(!a.domain().is_unbounded());
                prop_assert!(!b.is_subset(&a.domain().to_set()));
            }
            (left, right) => {
                prop_assert!(false, "union is not symmetric: {:?} vs {:?}", left, right);
            }
        }
    }

    #[test]
    fn unbounded_set_with_bounded_empty(a in arb_set(), domain in arb_domain()) {
        let empty = IntervalSet::empty_in(domain);
        if let Ok(u) = a.union(&empty) {
            prop_assert_eq!(u.intervals(), a.intervals());
        }
    }
}

// ---------------------------------------------------------------------------
// Difference / complement laws
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn double_complement_round_trips(a in arb_set_in_domain()) {
        prop_assert_eq!(a.complement().complement(), a);
    }

    #[test]
    fn difference_and_intersection_partition(a in arb_set_in_domain(), b in arb_set()) {
        let outside = a.difference(&b).total_duration();
        let inside = a.intersect(&b).total_duration();
        prop_assert_eq!(outside + inside, a.merge(0.0).total_duration());
    }

    #[test]
    fn difference_equals_intersection_with_complement(a in arb_set(), b in arb_set()) {
        prop_assert_eq!(a.difference(&b), a.intersect(&b.complement()));
    }

    #[test]
    fn complement_partitions_domain(a in arb_set_in_domain()) {
        let domain = a.domain().clone();
        prop_assume!(!domain.is_unbounded());
        prop_assert_eq!(
            a.total_duration() + a.complement().total_duration(),
            domain.total_duration()
        );
        prop_assert!(!a.overlaps(&a.complement()));
    }

    #[test]
    fn locate_agrees_with_linear_scan(a in arb_set(), t in -60i32..80) {
        let t = t as f64 + 0.5;
        let expected = a.intervals().iter().position(|iv| iv.contains(t));
        prop_assert_eq!(a.locate(t), expected);
    }
}

// ---------------------------------------------------------------------------
// Transforms
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn shift_there_and_back(a in arb_set(), delta in 0i32..30) {
        let delta = delta as f64;
        let back = a.shift(delta, Direction::Right).shift(delta, Direction::Left);
        prop_assert_eq!(back, a);
    }

    #[test]
    fn expand_never_shrinks_support(a in arb_set(), delta in 0i32..10) {
        let grown = a.expand(delta as f64);
        prop_assert!(a.is_subset(&grown));
        prop_assert!(is_canonical(&grown));
    }

    #[test]
    fn transforms_stay_in_domain(a in arb_set_in_domain(), delta in -5i32..10) {
        let domain = a.domain().to_set();
        prop_assert!(a.expand(delta as f64).is_subset(&domain));
        prop_assert!(a.shift(delta as f64, Direction::Right).is_subset(&domain));
        let expanded = a.expand(delta as f64);
        prop_assert_eq!(expanded.domain(), a.domain());
    }
}
