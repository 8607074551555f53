use std::collections::BTreeSet;

use proptest::prelude::*;
use splay_set::{AugmentedSplayTree, Rank};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

fn value_strategy() -> impl Strategy<Value = i64> {
    -2_000i64..2_000i64
}

#[derive(Debug, Clone)]
enum RankOp {
    Insert(i64),
    Remove(i64),
    LessThan(i64),
    LessOrEqual(i64),
    CountInRange(i64, i64),
    GetByRank(usize),
    RankOf(i64),
    Split(i64),
}

fn rank_op_strategy() -> impl Strategy<Value = RankOp> {
    prop_oneof![
        6 => value_strategy().prop_map(RankOp::Insert),
        3 => value_strategy().prop_map(RankOp::Remove),
        2 => value_strategy().prop_map(RankOp::LessThan),
        2 => value_strategy().prop_map(RankOp::LessOrEqual),
        1 => (value_strategy(), value_strategy()).prop_map(|(a, b)| RankOp::CountInRange(a, b)),
        2 => (0usize..3_000).prop_map(RankOp::GetByRank),
        1 => value_strategy().prop_map(RankOp::RankOf),
        1 => value_strategy().prop_map(RankOp::Split),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Interleaves mutations with rank queries and compares everything against BTreeSet.
    /// Splits are immediately undone by a join so that the tree keeps growing.
    #[test]
    fn rank_queries_match_btreeset(ops in proptest::collection::vec(rank_op_strategy(), TEST_SIZE)) {
        let mut tree: AugmentedSplayTree<i64> = AugmentedSplayTree::default();
        let mut model: BTreeSet<i64> = BTreeSet::new();

        for op in &ops {
            match *op {
                RankOp::Insert(v) => {
                    prop_assert_eq!(tree.insert(v).1, model.insert(v));
                }
                RankOp::Remove(v) => {
                    prop_assert_eq!(tree.remove(&v), model.remove(&v));
                }
                RankOp::LessThan(v) => {
                    prop_assert_eq!(tree.n_less_than(&v), model.range(..v).count(), "n_less_than({})", v);
                }
                RankOp::LessOrEqual(v) => {
                    prop_assert_eq!(tree.n_less_or_equal_to(&v), model.range(..=v).count(), "n_less_or_equal_to({})", v);
                }
                RankOp::CountInRange(a, b) => {
                    let expected = if a <= b { model.range(a..=b).count() } else { 0 };
                    prop_assert_eq!(tree.count_in_range(&a, &b), expected, "count_in_range({}, {})", a, b);
                }
                RankOp::GetByRank(rank) => {
                    prop_assert_eq!(tree.get_by_rank(rank), model.iter().nth(rank), "get_by_rank({})", rank);
                }
                RankOp::RankOf(v) => {
                    let expected = model.contains(&v).then(|| model.range(..v).count());
                    prop_assert_eq!(tree.rank_of(&v), expected, "rank_of({})", v);
                }
                RankOp::Split(v) => match tree.split(&v) {
                    Ok(mut high) => {
                        prop_assert!(model.contains(&v));
                        prop_assert_eq!(high.len(), model.range(v + 1..).count());
                        prop_assert_eq!(tree.last(), Some(&v));
                        tree.join(&mut high).unwrap();
                    }
                    Err(_) => prop_assert!(!model.contains(&v)),
                },
            }
            prop_assert_eq!(tree.len(), model.len(), "len mismatch after {:?}", op);
        }

        tree.assert_invariants();
    }

    /// Indexing by rank visits the keys in order.
    #[test]
    fn index_by_rank_matches_iteration(values in proptest::collection::vec(value_strategy(), 1..TEST_SIZE)) {
        let tree: AugmentedSplayTree<i64> = values.iter().copied().collect();
        for (rank, key) in tree.iter().enumerate() {
            prop_assert_eq!(&tree[Rank(rank)], key);
        }
    }
}

mod scenarios {
    use pretty_assertions::assert_eq;
    use splay_set::{AugmentedSplayTree, Rank};

    #[test]
    fn order_statistics_on_odd_keys() {
        let mut tree: AugmentedSplayTree<_> = AugmentedSplayTree::from([1, 3, 5, 7]);
        assert_eq!(tree.n_less_than(&5), 2);
        assert_eq!(tree.n_less_or_equal_to(&5), 3);
        assert_eq!(tree.n_less_than(&0), 0);
        assert_eq!(tree.n_less_than(&10), 4);
        tree.assert_invariants();
    }

    #[test]
    fn sizes_survive_join_and_split() {
        let mut low: AugmentedSplayTree<_> = (0..10).collect();
        let mut high: AugmentedSplayTree<_> = (10..25).collect();
        low.join(&mut high).unwrap();
        low.assert_invariants();
        assert_eq!(low.n_less_than(&12), 12);
        assert_eq!(low[Rank(24)], 24);

        let rest = low.split(&17).unwrap();
        low.assert_invariants();
        rest.assert_invariants();
        assert_eq!(low.len(), 18);
        assert_eq!(rest.get_by_rank(0), Some(&18));
        assert_eq!(rest.rank_of(&24), Some(6));
    }

    #[test]
    fn range_count_like_a_benchmark_query() {
        let mut tree: AugmentedSplayTree<_> = (0..1_000).map(|k| k * 3).collect();
        let queries = [(0, 10), (5, 5), (6, 6), (2_990, 5_000), (100, 50)];
        let answers: Vec<usize> = queries.iter().map(|(lo, hi)| tree.count_in_range(lo, hi)).collect();
        assert_eq!(answers, vec![4, 0, 1, 4, 0]);
    }
}
