use std::collections::BTreeMap;

use connect_model::{DataRecord, HistoricalMetric, Queue, QueueStatus, Threshold};
use proptest::prelude::*;

fn queue_strategy() -> impl Strategy<Value = Queue> {
    (
        proptest::option::of("[A-Za-z ]{0,12}"),
        proptest::option::of(any::<i32>()),
        proptest::option::of(prop_oneof![
            Just(QueueStatus::Enabled),
            Just(QueueStatus::Disabled),
            "[A-Z]{1,8}".prop_map(QueueStatus::from),
        ]),
        proptest::option::of(proptest::collection::btree_map("[a-z]{1,6}", "[a-z]{0,6}", 0..4)),
    )
        .prop_map(|(name, max_contacts, status, tags)| {
            let mut queue = Queue::default();
            queue.set_name(name);
            queue.set_max_contacts(max_contacts);
            queue.set_status(status);
            queue.set_tags(tags);
            queue
        })
}

proptest! {
    #[test]
    fn clones_are_equal_and_hash_equally(queue in queue_strategy()) {
        let copy = queue.clone();
        prop_assert_eq!(&queue, &copy);
        prop_assert_eq!(queue.hash_code(), copy.hash_code());
        prop_assert_eq!(queue.to_string(), copy.to_string());
    }

    #[test]
    fn equal_pairs_hash_equally(a in queue_strategy(), b in queue_strategy()) {
        if a == b {
            prop_assert_eq!(a.hash_code(), b.hash_code());
        }
    }

    #[test]
    fn tag_insertion_order_does_not_matter(
        entries in proptest::collection::btree_map("[a-z]{1,6}", "[a-z]{0,6}", 1..6)
    ) {
        let mut forward = Queue::default();
        for (key, value) in &entries {
            forward.add_tags_entry(key.as_str(), value.as_str()).unwrap();
        }
        let mut backward = Queue::default();
        for (key, value) in entries.iter().rev() {
            backward.add_tags_entry(key.as_str(), value.as_str()).unwrap();
        }
        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(forward.hash_code(), backward.hash_code());
    }

    #[test]
    fn threshold_values_hash_consistently(value in any::<f64>()) {
        let a = Threshold::default().with_comparison("LT").with_threshold_value(value);
        let b = Threshold::default().with_comparison("LT").with_threshold_value(value);
        if a == b {
            prop_assert_eq!(a.hash_code(), b.hash_code());
        }
    }
}

#[test]
fn signed_zero_thresholds_are_equal_and_hash_equally() {
    let positive = Threshold::default().with_threshold_value(0.0);
    let negative = Threshold::default().with_threshold_value(-0.0);
    assert_eq!(positive, negative);
    assert_eq!(positive.hash_code(), negative.hash_code());
}

#[test]
fn nested_record_changes_the_hash() {
    let plain = HistoricalMetric::default().with_name("SERVICE_LEVEL");
    let with_threshold = plain
        .clone()
        .with_threshold(Threshold::default().with_threshold_value(60.0));
    assert_ne!(plain, with_threshold);
    assert_ne!(plain.hash_code(), with_threshold.hash_code());
}

#[test]
fn map_hash_is_sum_of_entry_hashes() {
    let tags = BTreeMap::from([
        ("a".to_string(), "b".to_string()),
        ("c".to_string(), "d".to_string()),
    ]);
    let queue = Queue::default().with_tags(tags);
    // 9 fields, only the last one present.
    let expected_tags = (97 ^ 98) + (99 ^ 100);
    let expected = 31i32.wrapping_pow(9).wrapping_add(expected_tags);
    assert_eq!(queue.hash_code(), expected);
}
