/// Integration tests for the observable behavior of closures, caches and
/// decorators
use enclosure::{
    call_counter, compose, make_cache_with_stats, make_counter, make_expiring_value,
    make_limited_cache, make_running_average, make_simple_cache, make_toggle, memoize,
    retry_on_none, Callable, StatsSnapshot,
};
use proptest::prelude::*;
use std::cell::Cell;

proptest! {
    #[test]
    fn prop_counter_yields_consecutive_values(start in -1_000_000i64..1_000_000, n in 0usize..200) {
        let mut counter = make_counter(start);
        for i in 1..=n {
            prop_assert_eq!(counter(), start + i as i64);
        }
    }

    #[test]
    fn prop_simple_cache_set_then_get(key in ".*", value in any::<i64>()) {
        let cache = make_simple_cache::<String, i64>();
        prop_assert_eq!(cache.set(key.clone(), value), value);
        prop_assert_eq!(cache.get(&key), Some(value));
    }

    #[test]
    fn prop_limited_cache_never_exceeds_max_size(
        max_size in 0usize..8,
        keys in proptest::collection::vec(0u8..16, 0..64),
    ) {
        let cache = make_limited_cache(max_size);
        for key in keys {
            cache.set(key, u32::from(key));
            prop_assert!(cache.size() <= max_size);
        }
    }
}

#[test]
fn test_toggle_alternates() {
    let mut toggle = make_toggle(false);
    let values: Vec<bool> = (0..4).map(|_| toggle()).collect();
    assert_eq!(values, vec![true, false, true, false]);
}

#[test]
fn test_running_average_sequence() {
    let mut average = make_running_average();
    assert_eq!(average(10.0), 10.0);
    assert_eq!(average(20.0), 15.0);
    assert_eq!(average(30.0), 20.0);
}

#[test]
fn test_stats_cache_counts_hits_and_misses() {
    let cache = make_cache_with_stats();
    cache.set("a", 1);
    assert_eq!(cache.get("a"), Some(1));
    assert_eq!(cache.get("b"), None);
    assert_eq!(cache.get("a"), Some(1));
    assert_eq!(cache.get_stats(), StatsSnapshot { hits: 2, misses: 1 });
}

#[test]
fn test_limited_cache_evicts_oldest() {
    let cache = make_limited_cache(2);
    cache.set("a", 1);
    cache.set("b", 2);
    cache.set("c", 3);
    assert_eq!(cache.get("a"), None);
    assert_eq!(cache.get("b"), Some(2));
    assert_eq!(cache.get("c"), Some(3));
}

#[test]
fn test_limited_cache_overwrite_keeps_other_entries() {
    let cache = make_limited_cache(2);
    cache.set("a", 1);
    cache.set("b", 2);
    cache.set("a", 10);
    assert_eq!(cache.size(), 2);
    assert_eq!(cache.get("a"), Some(10));
    assert_eq!(cache.get("b"), Some(2));
}

#[test]
fn test_expiring_value_runs_out() {
    let mut secret = make_expiring_value("secret", 2);
    assert_eq!(secret(), Some("secret"));
    assert_eq!(secret(), Some("secret"));
    assert_eq!(secret(), None);
    assert_eq!(secret(), None);
}

#[test]
fn test_memoize_invokes_target_once() {
    let target = call_counter(|(a, b): (i32, i32)| a * b);
    let product = memoize::<_, (i32, i32)>(target);

    let first = product.invoke((6, 7));
    let second = product.invoke((6, 7));
    assert_eq!(first, 42);
    assert_eq!(first, second);
    assert_eq!(product.inner().call_count(), 1);
}

fn add_one(x: i32) -> i32 {
    x + 1
}

fn double(x: i32) -> i32 {
    x * 2
}

#[test]
fn test_compose_applies_right_to_left() {
    let composed = compose::<i32>(vec![Box::new(add_one), Box::new(double)]);
    assert_eq!(composed(5), 11);
    assert_eq!(composed(5), add_one(double(5)));

    let composed_macro = enclosure::compose!(add_one, double);
    assert_eq!(composed_macro(5), 11);
}

#[test]
fn test_retry_on_none_stops_at_first_value() {
    let calls = Cell::new(0);
    let flaky = retry_on_none(3).decorate(|()| {
        calls.set(calls.get() + 1);
        if calls.get() == 1 {
            None
        } else {
            Some("real value")
        }
    });

    assert_eq!(flaky.invoke(()), Some("real value"));
    assert_eq!(calls.get(), 2);
}
