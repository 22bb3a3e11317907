use proptest::prelude::*;

use super::Sequence;
use crate::pair::Pair;
use crate::search::ValueComparer;

fn arb_sequence() -> impl Strategy<Value = Sequence<i32>> {
    prop::collection::vec(-50i32..50, 0..40).prop_map(Sequence::from)
}

fn arb_sorted() -> impl Strategy<Value = Sequence<i32>> {
    prop::collection::vec(-50i32..50, 0..40).prop_map(|mut items| {
        items.sort();
        Sequence::from(items)
    })
}

/// Keys drawn from a small range so there are plenty of ties; the second
/// element records the original position.
fn arb_keyed() -> impl Strategy<Value = Sequence<Pair<u8, usize>>> {
    prop::collection::vec(0u8..5, 0..40).prop_map(|keys| {
        keys.into_iter()
            .enumerate()
            .map(|(position, key)| Pair::new(key, position))
            .collect()
    })
}

fn lt(a: &i32, b: &i32) -> bool {
    a < b
}

proptest! {
    #[test]
    fn prop_split_then_concat(s in arb_sequence(), at in 0usize..50) {
        let at = at.min(s.len());
        let (left, right) = s.split(at).unwrap().into_tuple();
        prop_assert_eq!(left.len(), at);
        prop_assert_eq!(left.concat(&right), s);
    }

    #[test]
    fn prop_merge_keeps_every_item_sorted(a in arb_sorted(), b in arb_sorted()) {
        let merged = a.merge(&b, lt);
        prop_assert_eq!(merged.len(), a.len() + b.len());
        prop_assert!(merged.is_sorted(lt));
        let mut expected = a.concat(&b).as_slice().to_vec();
        expected.sort();
        prop_assert_eq!(merged, Sequence::from(expected));
    }

    #[test]
    fn prop_merge_sort_matches_std(s in arb_sequence()) {
        let mut expected = s.as_slice().to_vec();
        expected.sort();
        prop_assert_eq!(s.merge_sort(lt), Sequence::from(expected));
    }

    #[test]
    fn prop_merge_sort_is_idempotent(s in arb_sequence()) {
        let sorted = s.merge_sort(lt);
        prop_assert_eq!(sorted.merge_sort(lt), sorted);
    }

    #[test]
    fn prop_merge_sort_is_stable(s in arb_keyed()) {
        let mut expected = s.as_slice().to_vec();
        // std's sort is stable
        expected.sort_by_key(|pair| *pair.first());
        let sorted = s.merge_sort(|a, b| a.first() < b.first());
        prop_assert_eq!(sorted, Sequence::from(expected));
    }

    #[test]
    fn prop_unique(s in arb_sequence()) {
        let unique = s.unique();
        for (i, a) in unique.iter().enumerate() {
            prop_assert!(!unique.as_slice()[i + 1..].contains(a));
        }
        for item in s.iter() {
            prop_assert!(unique.contains(item));
        }
        prop_assert_eq!(unique.unique(), unique.clone());
    }

    #[test]
    fn prop_exact_finds_every_item(s in arb_sorted()) {
        let unique = s.unique();
        let search = unique.binary_search(ValueComparer);
        for (i, item) in unique.iter().enumerate() {
            let mut hit = None;
            prop_assert!(search.exact(item, |tag, _| hit = Some(tag.index)));
            prop_assert_eq!(hit, Some(i));
        }
    }

    #[test]
    fn prop_filter_partitions(s in arb_sequence()) {
        let (even, odd) = s.filter(|n| n % 2 == 0).into_tuple();
        prop_assert_eq!(even.len() + odd.len(), s.len());
        prop_assert!(even.iter().all(|n| n % 2 == 0));
        prop_assert!(odd.iter().all(|n| n % 2 != 0));
    }
}
