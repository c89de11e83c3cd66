/// Integration tests for the #[memoize] attribute
use enclosure::memoize;
use std::sync::atomic::{AtomicU32, Ordering};

static SQUARE_CALLS: AtomicU32 = AtomicU32::new(0);

#[memoize]
fn square(x: u32) -> u32 {
    SQUARE_CALLS.fetch_add(1, Ordering::SeqCst);
    x * x
}

#[test]
fn test_repeated_call_runs_body_once() {
    assert_eq!(square(7), 49);
    let after_first = SQUARE_CALLS.load(Ordering::SeqCst);
    assert_eq!(square(7), 49);
    assert_eq!(square(7), 49);
    assert_eq!(SQUARE_CALLS.load(Ordering::SeqCst), after_first);
}

#[memoize]
fn fibonacci(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    fibonacci(n - 1) + fibonacci(n - 2)
}

#[test]
fn test_recursive_function() {
    assert_eq!(fibonacci(0), 0);
    assert_eq!(fibonacci(1), 1);
    assert_eq!(fibonacci(80), 23416728348467685);
}

static ADD_CALLS: AtomicU32 = AtomicU32::new(0);

#[memoize]
fn add(a: i64, b: i64) -> i64 {
    ADD_CALLS.fetch_add(1, Ordering::SeqCst);
    a + b
}

#[test]
fn test_argument_order_is_part_of_the_key() {
    let before = ADD_CALLS.load(Ordering::SeqCst);
    assert_eq!(add(1000, 2), 1002);
    assert_eq!(add(2, 1000), 1002);
    assert_eq!(ADD_CALLS.load(Ordering::SeqCst), before + 2);
    assert_eq!(add(1000, 2), 1002);
    assert_eq!(ADD_CALLS.load(Ordering::SeqCst), before + 2);
}

static LIMITED_CALLS: AtomicU32 = AtomicU32::new(0);

#[memoize(limit = 2)]
fn limited_double(x: i32) -> i32 {
    LIMITED_CALLS.fetch_add(1, Ordering::SeqCst);
    x * 2
}

#[test]
fn test_limit_evicts_oldest_result() {
    assert_eq!(limited_double(1), 2);
    assert_eq!(limited_double(2), 4);
    assert_eq!(limited_double(3), 6);
    assert_eq!(LIMITED_CALLS.load(Ordering::SeqCst), 3);

    // 2 and 3 are still cached
    assert_eq!(limited_double(2), 4);
    assert_eq!(limited_double(3), 6);
    assert_eq!(LIMITED_CALLS.load(Ordering::SeqCst), 3);

    // 1 was evicted
    assert_eq!(limited_double(1), 2);
    assert_eq!(LIMITED_CALLS.load(Ordering::SeqCst), 4);
}

static LOOKUP_CALLS: AtomicU32 = AtomicU32::new(0);

#[memoize]
fn lookup(name: String) -> Option<String> {
    LOOKUP_CALLS.fetch_add(1, Ordering::SeqCst);
    if name.is_empty() {
        None
    } else {
        Some(name.to_uppercase())
    }
}

#[test]
fn test_none_results_are_cached() {
    let before = LOOKUP_CALLS.load(Ordering::SeqCst);
    assert_eq!(lookup(String::new()), None);
    assert_eq!(lookup(String::new()), None);
    assert_eq!(LOOKUP_CALLS.load(Ordering::SeqCst), before + 1);
    assert_eq!(lookup("abc".to_string()), Some("ABC".to_string()));
}

#[derive(Debug, Clone)]
struct Scaler {
    factor: i32,
}

static SCALE_CALLS: AtomicU32 = AtomicU32::new(0);

impl Scaler {
    #[memoize]
    fn scale(&self, x: i32) -> i32 {
        SCALE_CALLS.fetch_add(1, Ordering::SeqCst);
        self.factor * x
    }
}

#[test]
fn test_method_receiver_is_part_of_the_key() {
    let two = Scaler { factor: 2 };
    let three = Scaler { factor: 3 };

    assert_eq!(two.scale(5), 10);
    assert_eq!(three.scale(5), 15);
    assert_eq!(SCALE_CALLS.load(Ordering::SeqCst), 2);

    assert_eq!(two.scale(5), 10);
    assert_eq!(SCALE_CALLS.load(Ordering::SeqCst), 2);
}

#[memoize]
fn slow_identity(x: u32) -> u32 {
    x
}

#[test]
fn test_concurrent_callers_agree() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                for i in 0..50 {
                    assert_eq!(slow_identity(i), i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
