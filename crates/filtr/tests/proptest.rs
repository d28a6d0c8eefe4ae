//! Property-based tests for filtr using proptest.

use std::collections::BTreeSet;
use std::sync::Arc;

use filtr::Filtration;
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

// A sequence plus two index collections that may overshoot it.
fn views_strategy() -> impl Strategy<Value = (Vec<i32>, Vec<isize>, Vec<isize>)> {
    prop::collection::vec(any::<i32>(), 0..40).prop_flat_map(|seq| {
        let bound = seq.len() as isize + 10;
        (
            Just(seq),
            prop::collection::vec(0..bound, 0..30),
            prop::collection::vec(0..bound, 0..30),
        )
    })
}

fn expected_indices(indices: &[isize], len: usize) -> Vec<isize> {
    indices
        .iter()
        .copied()
        .filter(|&i| i < len as isize)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// The view holds exactly the sorted, unique, in-range positions.
    #[test]
    fn construction_normalizes((seq, indices, _) in views_strategy()) {
        let expected = expected_indices(&indices, seq.len());
        let values: Vec<i32> = expected.iter().map(|&i| seq[i as usize]).collect();

        let view = Filtration::with_filter(Arc::new(seq), indices);
        prop_assert_eq!(view.indices(), expected.as_slice());
        prop_assert_eq!(view.to_vec(), values);
    }

    /// The full view reproduces the sequence.
    #[test]
    fn full_view_is_identity(seq in prop::collection::vec(any::<i32>(), 0..50)) {
        let seq = Arc::new(seq);
        let view = Filtration::new(Arc::clone(&seq));
        prop_assert_eq!(view.to_vec(), (*seq).clone());
        prop_assert_eq!(view.is_truthy(), !seq.is_empty());
    }

    /// Complementing twice gives back an equal view.
    #[test]
    fn double_complement((seq, indices, _) in views_strategy()) {
        let view = Filtration::with_filter(Arc::new(seq), indices);
        prop_assert_eq!(-(-&view), view.clone());
        prop_assert_eq!(!!&view, view);
    }

    /// A view and its complement partition the sequence.
    #[test]
    fn complement_partitions((seq, indices, _) in views_strategy()) {
        let seq = Arc::new(seq);
        let view = Filtration::with_filter(Arc::clone(&seq), indices);
        let rest = -&view;

        prop_assert_eq!(&view | &rest, Filtration::new(seq));
        prop_assert!(!(&view & &rest).is_truthy());
        prop_assert!(view.is_disjoint(&rest));
    }

    /// Intersection and union commute.
    #[test]
    fn and_or_commute((seq, a, b) in views_strategy()) {
        let seq = Arc::new(seq);
        let a = Filtration::with_filter(Arc::clone(&seq), a);
        let b = Filtration::with_filter(Arc::clone(&seq), b);

        prop_assert_eq!(&a & &b, &b & &a);
        prop_assert_eq!(&a | &b, &b | &a);
    }

    /// Both differences avoid the other operand and each other.
    #[test]
    fn differences_exclude_other((seq, a, b) in views_strategy()) {
        let seq = Arc::new(seq);
        let a = Filtration::with_filter(Arc::clone(&seq), a);
        let b = Filtration::with_filter(Arc::clone(&seq), b);
        let a_minus_b = &a - &b;
        let b_minus_a = &b - &a;

        prop_assert!(a_minus_b.is_disjoint(&b));
        prop_assert!(b_minus_a.is_disjoint(&a));
        prop_assert!(a_minus_b.is_disjoint(&b_minus_a));
        if a.indices() != b.indices() {
            prop_assert_ne!(a_minus_b, b_minus_a);
        }
    }

    /// Disjointness agrees with an empty intersection.
    #[test]
    fn disjoint_iff_empty_intersection((seq, a, b) in views_strategy()) {
        let seq = Arc::new(seq);
        let a = Filtration::with_filter(Arc::clone(&seq), a);
        let b = Filtration::with_filter(Arc::clone(&seq), b);

        prop_assert_eq!(a.is_disjoint(&b), (&a & &b).is_empty());
    }

    /// Set operators match BTreeSet semantics on the filters.
    #[test]
    fn operators_match_set_algebra((seq, a, b) in views_strategy()) {
        let len = seq.len();
        let set_a: BTreeSet<isize> = expected_indices(&a, len).into_iter().collect();
        let set_b: BTreeSet<isize> = expected_indices(&b, len).into_iter().collect();

        let seq = Arc::new(seq);
        let a = Filtration::with_filter(Arc::clone(&seq), a);
        let b = Filtration::with_filter(Arc::clone(&seq), b);

        let diff: Vec<isize> = set_a.difference(&set_b).copied().collect();
        let inter: Vec<isize> = set_a.intersection(&set_b).copied().collect();
        let union: Vec<isize> = set_a.union(&set_b).copied().collect();

        let a_minus_b = &a - &b;
        let a_and_b = &a & &b;
        let a_or_b = &a | &b;
        prop_assert_eq!(a_minus_b.indices(), diff.as_slice());
        prop_assert_eq!(a_and_b.indices(), inter.as_slice());
        prop_assert_eq!(a_or_b.indices(), union.as_slice());
    }

    /// Reversed iteration is forward iteration backwards.
    #[test]
    fn reverse_matches_forward((seq, indices, _) in views_strategy()) {
        let view = Filtration::with_filter(Arc::new(seq), indices);
        let mut forward: Vec<i32> = view.iter().copied().collect();
        forward.reverse();
        let backward: Vec<i32> = view.iter().rev().copied().collect();
        prop_assert_eq!(forward, backward);
    }

    /// Every position below len resolves; the first past it fails.
    #[test]
    fn get_agrees_with_iteration((seq, indices, _) in views_strategy()) {
        let view = Filtration::with_filter(Arc::new(seq), indices);
        for (position, value) in view.iter().enumerate() {
            prop_assert_eq!(view.get(position), Ok(value));
        }
        prop_assert!(view.get(view.len()).is_err());
    }

    /// Containment agrees with a scan of the visible values.
    #[test]
    fn contains_matches_scan((seq, indices, _) in views_strategy(), probe in any::<i32>()) {
        let view = Filtration::with_filter(Arc::new(seq), indices);
        let expected = view.to_vec().contains(&probe);
        prop_assert_eq!(view.contains(&probe), expected);
    }
}

proptest! {
    /// Negative indices within range read the element counted from the end.
    #[test]
    fn negative_indices_count_from_end(
        seq in prop::collection::vec(any::<i32>(), 1..40),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..20),
    ) {
        let len = seq.len();
        let negatives: Vec<isize> = picks.iter().map(|p| -(p.index(len) as isize) - 1).collect();
        let view = Filtration::with_filter(Arc::new(seq.clone()), negatives.clone());

        let expected = expected_indices(&negatives, len);
        let values: Vec<i32> = expected.iter().map(|&i| seq[(len as isize + i) as usize]).collect();
        prop_assert_eq!(view.len(), expected.len());
        prop_assert_eq!(view.to_vec(), values);
    }
}

// ============================================================================
// Additional edge case tests
// ============================================================================

#[test]
fn empty_filter_is_falsy() {
    let view = Filtration::with_filter(Arc::new(vec![1, 2, 3]), Vec::<isize>::new());
    assert!(!view.is_truthy());
    assert_eq!(view.len(), 0);
    assert_eq!(-&view, Filtration::new(Arc::clone(view.seq())));
}

#[test]
fn empty_sequence_full_view_is_falsy() {
    let view = Filtration::new(Arc::new(Vec::<i32>::new()));
    assert!(!view.is_truthy());
    assert_eq!(-&view, view);
}
