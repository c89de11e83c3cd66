//! Closure factories.
//!
//! Every factory returns one or more closures over state created at
//! construction time. Two calls to the same factory never share state.
//! Factories that hand out several closures share the state through
//! `Rc<Cell<_>>`, so those closures stay on the thread that created them.

use std::borrow::Borrow;
use std::cell::Cell;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::{Add, Mul};
use std::rc::Rc;

/// Returns a closure producing `"{greeting_word}, {name}!"`.
///
/// # Examples
///
/// ```
/// use enclosure_core::make_greeting;
///
/// let say_hello = make_greeting("Hello");
/// assert_eq!(say_hello("Alice"), "Hello, Alice!");
/// ```
pub fn make_greeting(greeting_word: impl Into<String>) -> impl Fn(&str) -> String {
    let greeting_word = greeting_word.into();
    move |name| format!("{}, {}!", greeting_word, name)
}

/// Returns a closure multiplying its argument by `factor`.
///
/// # Examples
///
/// ```
/// use enclosure_core::make_multiplier;
///
/// let triple = make_multiplier(3);
/// assert_eq!(triple(5), 15);
/// ```
pub fn make_multiplier<T>(factor: T) -> impl Fn(T) -> T
where
    T: Mul<Output = T> + Copy,
{
    move |value| value * factor
}

/// Returns a closure raising its argument to `exponent`.
///
/// The closure returns `None` when the power does not fit in an `i64`.
///
/// # Examples
///
/// ```
/// use enclosure_core::make_power_func;
///
/// let cube = make_power_func(3);
/// assert_eq!(cube(4), Some(64));
/// assert_eq!(make_power_func(64)(2), None);
/// ```
pub fn make_power_func(exponent: u32) -> impl Fn(i64) -> Option<i64> {
    move |base| base.checked_pow(exponent)
}

/// Returns a membership test over a borrowed map.
///
/// The closure sees the map as it is at call time, not a snapshot. `Q` is
/// the borrowed key form, as in [`HashMap::contains_key`].
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use enclosure_core::make_cache_checker;
///
/// let cache = HashMap::from([("a".to_string(), 1), ("b".to_string(), 2)]);
/// let is_cached = make_cache_checker::<_, _, str>(&cache);
/// assert!(is_cached("a"));
/// assert!(!is_cached("c"));
/// ```
pub fn make_cache_checker<'a, K, V, Q>(cache_dict: &'a HashMap<K, V>) -> impl Fn(&Q) -> bool + 'a
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized + 'a,
{
    move |key| cache_dict.contains_key(key)
}

/// Returns a counter. The first call yields `start + 1`.
///
/// The count saturates at `i64::MAX` instead of overflowing.
///
/// # Examples
///
/// ```
/// use enclosure_core::make_counter;
///
/// let mut counter = make_counter(0);
/// assert_eq!(counter(), 1);
/// assert_eq!(counter(), 2);
/// ```
pub fn make_counter(start: i64) -> impl FnMut() -> i64 {
    let mut count = start;
    move || {
        count = count.saturating_add(1);
        count
    }
}

/// Returns `(increment, reset)` sharing one count.
///
/// `reset` puts the count back to `start` and returns `start`. Like
/// [`make_counter`], the count saturates at `i64::MAX`.
///
/// # Examples
///
/// ```
/// use enclosure_core::make_counter_with_reset;
///
/// let (inc, reset) = make_counter_with_reset(0);
/// assert_eq!(inc(), 1);
/// assert_eq!(inc(), 2);
/// assert_eq!(reset(), 0);
/// assert_eq!(inc(), 1);
/// ```
pub fn make_counter_with_reset(start: i64) -> (impl Fn() -> i64, impl Fn() -> i64) {
    let count = Rc::new(Cell::new(start));

    let increment = {
        let count = Rc::clone(&count);
        move || {
            count.set(count.get().saturating_add(1));
            count.get()
        }
    };

    let reset = move || {
        count.set(start);
        start
    };

    (increment, reset)
}

/// Returns a closure that adds its argument to a running total and returns
/// the new total.
pub fn make_accumulator<T>(initial: T) -> impl FnMut(T) -> T
where
    T: Add<Output = T> + Copy,
{
    let mut total = initial;
    move |value| {
        total = total + value;
        total
    }
}

/// Returns a closure flipping a boolean. The first call yields `!initial`.
pub fn make_toggle(initial: bool) -> impl FnMut() -> bool {
    let mut state = initial;
    move || {
        state = !state;
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_captures_word() {
        let hi = make_greeting("Hi");
        let hello = make_greeting(String::from("Hello"));
        assert_eq!(hi("Bob"), "Hi, Bob!");
        assert_eq!(hello("Bob"), "Hello, Bob!");
    }

    #[test]
    fn test_multiplier_and_power() {
        let double = make_multiplier(2);
        let halve = make_multiplier(0.5);
        assert_eq!(double(5), 10);
        assert_eq!(halve(5.0), 2.5);

        let square = make_power_func(2);
        let cube = make_power_func(3);
        assert_eq!(square(4), Some(16));
        assert_eq!(cube(4), Some(64));
        assert_eq!(cube(-2), Some(-8));
    }

    #[test]
    fn test_power_overflow_is_none() {
        assert_eq!(make_power_func(62)(2), Some(1 << 62));
        assert_eq!(make_power_func(63)(2), None);
        assert_eq!(make_power_func(63)(-2), Some(i64::MIN));
        assert_eq!(make_power_func(64)(2), None);
        assert_eq!(make_power_func(2)(i64::MAX), None);
    }

    #[test]
    fn test_cache_checker_with_integer_keys() {
        let cache: HashMap<i32, &str> = HashMap::from([(1, "one")]);
        let is_cached = make_cache_checker::<_, _, i32>(&cache);
        assert!(is_cached(&1));
        assert!(!is_cached(&2));
    }

    #[test]
    fn test_counter_starts_after_start() {
        let mut counter = make_counter(10);
        assert_eq!(counter(), 11);
        assert_eq!(counter(), 12);
        assert_eq!(counter(), 13);
    }

    #[test]
    fn test_counter_saturates_at_max() {
        let mut counter = make_counter(i64::MAX - 1);
        assert_eq!(counter(), i64::MAX);
        assert_eq!(counter(), i64::MAX);

        let (inc, reset) = make_counter_with_reset(i64::MAX);
        assert_eq!(inc(), i64::MAX);
        assert_eq!(reset(), i64::MAX);
    }

    #[test]
    fn test_counters_do_not_share_state() {
        let mut a = make_counter(0);
        let mut b = make_counter(0);
        assert_eq!(a(), 1);
        assert_eq!(a(), 2);
        assert_eq!(b(), 1);
    }

    #[test]
    fn test_counter_with_reset_non_zero_start() {
        let (inc, reset) = make_counter_with_reset(5);
        assert_eq!(inc(), 6);
        assert_eq!(inc(), 7);
        assert_eq!(reset(), 5);
        assert_eq!(inc(), 6);
    }

    #[test]
    fn test_accumulator() {
        let mut acc = make_accumulator(0);
        assert_eq!(acc(10), 10);
        assert_eq!(acc(5), 15);
        assert_eq!(acc(3), 18);

        let mut acc = make_accumulator(1.5);
        assert_eq!(acc(1.0), 2.5);
    }

    #[test]
    fn test_toggle_alternates() {
        let mut toggle = make_toggle(false);
        assert!(toggle());
        assert!(!toggle());
        assert!(toggle());

        let mut toggle = make_toggle(true);
        assert!(!toggle());
    }
}
