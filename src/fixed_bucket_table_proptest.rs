#![cfg(test)]

// Property tests for FixedBucketHashTable kept inside the crate so they can
// inspect bucket contents and the stored count directly.

use crate::fixed_bucket_table::tests::init_logger;
use crate::fixed_bucket_table::{FixedBucketHashTable, BUCKET_COUNT};
use crate::outcome::{Outcome, TableError};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Keys come from a small pool (plus collision partners and negatives) so
// random sequences hit the same keys and buckets often.
#[derive(Clone, Debug)]
enum Op {
    Insert(i32, String),
    Remove(i32),
    Take(i32),
    Get(i32),
    Clear,
}

fn arb_key() -> impl Strategy<Value = i32> {
    prop_oneof![
        4 => -25i32..25,
        1 => any::<i32>(),
        1 => Just(i32::MIN),
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (arb_key(), "[a-z]{0,4}").prop_map(|(k, v)| Op::Insert(k, v)),
        3 => arb_key().prop_map(Op::Remove),
        2 => arb_key().prop_map(Op::Take),
        3 => arb_key().prop_map(Op::Get),
        1 => Just(Op::Clear),
    ]
}

fn check_structure(t: &FixedBucketHashTable) -> Result<(), TestCaseError> {
    let mut total = 0;
    for (i, bucket) in t.buckets() {
        let mut seen = BTreeSet::new();
        for e in bucket {
            prop_assert_eq!(FixedBucketHashTable::hash(e.key()), i);
            prop_assert!(seen.insert(e.key()), "duplicate key {} in bucket {}", e.key(), i);
        }
        total += bucket.len();
    }
    prop_assert_eq!(t.buckets().count(), BUCKET_COUNT);
    prop_assert_eq!(t.len(), total);
    prop_assert_eq!(t.is_empty(), total == 0);
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - insert reports Inserted iff the model lacked the key; count tracks the model.
// - remove/take report NotFound iff the model lacked the key and never
//   drive the count below zero.
// - every entry sits in bucket `hash(key)` with no duplicate keys per chain.
// - `len()` equals the sum of chain lengths after every step.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(ops in proptest::collection::vec(arb_op(), 1..80)) {
        init_logger();
        let mut sut = FixedBucketHashTable::new();
        let mut model: HashMap<i32, String> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    let expected = if model.insert(k, v.clone()).is_some() {
                        Outcome::Replaced
                    } else {
                        Outcome::Inserted
                    };
                    prop_assert_eq!(sut.insert(k, v), expected);
                }
                Op::Remove(k) => {
                    let expected = if model.remove(&k).is_some() {
                        Outcome::Removed
                    } else {
                        Outcome::NotFound
                    };
                    prop_assert_eq!(sut.remove(k), expected);
                }
                Op::Take(k) => {
                    let expected = model.remove(&k).ok_or(TableError::KeyNotFound(k));
                    prop_assert_eq!(sut.take(k), expected);
                }
                Op::Get(k) => {
                    prop_assert_eq!(sut.get(k), model.get(&k).map(String::as_str));
                    prop_assert_eq!(
                        sut.get_item_or_empty(k),
                        model.get(&k).cloned().unwrap_or_default()
                    );
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(sut.len(), model.len());
            check_structure(&sut)?;
        }

        // Iteration yields exactly the model's key set.
        let keys: BTreeSet<i32> = sut.iter().map(|(k, _)| k).collect();
        let expected: BTreeSet<i32> = model.keys().copied().collect();
        prop_assert_eq!(keys, expected);
    }
}

// Property: keys sharing a residue coexist; removing one leaves the others
// retrievable and in their original chain order.
proptest! {
    #[test]
    fn prop_collisions_are_independent(residue in 0i32..10, n in 2usize..12, victim in 0usize..12) {
        let mut t = FixedBucketHashTable::new();
        let keys: Vec<i32> = (0..n as i32).map(|i| residue + 10 * i).collect();
        for &k in &keys {
            prop_assert_eq!(t.insert(k, format!("v{}", k)), Outcome::Inserted);
        }
        prop_assert_eq!(t.bucket(residue as usize).map(|b| b.len()), Some(n));

        let victim = keys[victim % n];
        prop_assert_eq!(t.remove(victim), Outcome::Removed);

        let survivors: Vec<i32> = keys.iter().copied().filter(|&k| k != victim).collect();
        for &k in &survivors {
            let expected = format!("v{}", k);
            prop_assert_eq!(t.get(k), Some(expected.as_str()));
        }
        let chain: Vec<i32> = t
            .bucket(residue as usize)
            .map(|b| b.iter().map(|e| e.key()).collect())
            .unwrap_or_default();
        prop_assert_eq!(chain, survivors);
        prop_assert_eq!(t.len(), n - 1);
    }
}
