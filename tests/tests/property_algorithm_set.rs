//! Property-based tests for the algorithm set

use fipsgate_api::types::{AlgorithmId, AlgorithmSet};
use proptest::prelude::*;

/// Generate one of the seven algorithm identifiers
fn algorithm() -> impl Strategy<Value = AlgorithmId> {
    (0usize..AlgorithmId::ALL.len()).prop_map(|i| AlgorithmId::ALL[i])
}

/// Generate an arbitrary subset of the algorithms
fn algorithm_set() -> impl Strategy<Value = AlgorithmSet> {
    prop::collection::vec(algorithm(), 0..8).prop_map(|ids| ids.into_iter().collect())
}

proptest! {
    #[test]
    fn insert_makes_contains_true(set in algorithm_set(), id in algorithm()) {
        let mut set = set;
        set.insert(id);
        prop_assert!(set.contains(id));
        prop_assert!(set.is_subset_of(AlgorithmSet::ALL));
    }

    #[test]
    fn remove_undoes_insert(id in algorithm()) {
        let mut set = AlgorithmSet::EMPTY;
        set.insert(id);
        set.remove(id);
        prop_assert!(set.is_empty());
    }

    #[test]
    fn insert_is_idempotent(set in algorithm_set(), id in algorithm()) {
        let mut once = set;
        once.insert(id);
        let mut twice = once;
        twice.insert(id);
        prop_assert_eq!(once, twice);
        prop_assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn union_contains_both_operands(a in algorithm_set(), b in algorithm_set()) {
        let joined = a.union(b);
        prop_assert!(a.is_subset_of(joined));
        prop_assert!(b.is_subset_of(joined));
        prop_assert_eq!(joined, b.union(a));
    }

    #[test]
    fn intersection_is_subset_of_each_operand(a in algorithm_set(), b in algorithm_set()) {
        let shared = a.intersection(b);
        prop_assert!(shared.is_subset_of(a));
        prop_assert!(shared.is_subset_of(b));
        prop_assert_eq!(shared, b.intersection(a));
    }

    #[test]
    fn iteration_round_trips_the_set(set in algorithm_set()) {
        let rebuilt: AlgorithmSet = set.into_iter().collect();
        prop_assert_eq!(rebuilt, set);
    }

    #[test]
    fn len_counts_distinct_members(set in algorithm_set()) {
        prop_assert_eq!(set.len(), set.into_iter().count());
    }
}
