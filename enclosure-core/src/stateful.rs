//! Stateful functions that remember what they have seen.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Returns a closure that records a value and returns the mean of every value
/// recorded so far.
///
/// # Examples
///
/// ```
/// use enclosure_core::make_running_average;
///
/// let mut avg = make_running_average();
/// assert_eq!(avg(10.0), 10.0);
/// assert_eq!(avg(20.0), 15.0);
/// assert_eq!(avg(30.0), 20.0);
/// ```
pub fn make_running_average() -> impl FnMut(f64) -> f64 {
    let mut sum = 0.0;
    let mut count = 0u64;
    move |value| {
        sum += value;
        count += 1;
        sum / count as f64
    }
}

/// Returns `(track, get_min, get_max)`.
///
/// Before the first `track`, both getters return `None`.
///
/// # Examples
///
/// ```
/// use enclosure_core::make_min_max_tracker;
///
/// let (track, get_min, get_max) = make_min_max_tracker::<i32>();
/// assert_eq!(get_min(), None);
/// track(5);
/// track(2);
/// track(8);
/// assert_eq!(get_min(), Some(2));
/// assert_eq!(get_max(), Some(8));
/// ```
pub fn make_min_max_tracker<T>() -> (
    impl Fn(T),
    impl Fn() -> Option<T>,
    impl Fn() -> Option<T>,
)
where
    T: PartialOrd + Copy,
{
    let min_seen: Rc<Cell<Option<T>>> = Rc::new(Cell::new(None));
    let max_seen: Rc<Cell<Option<T>>> = Rc::new(Cell::new(None));

    let track = {
        let min_seen = Rc::clone(&min_seen);
        let max_seen = Rc::clone(&max_seen);
        move |value: T| {
            match min_seen.get() {
                Some(current) if current <= value => {}
                _ => min_seen.set(Some(value)),
            }
            match max_seen.get() {
                Some(current) if current >= value => {}
                _ => max_seen.set(Some(value)),
            }
        }
    };

    let get_min = move || min_seen.get();
    let get_max = move || max_seen.get();

    (track, get_min, get_max)
}

/// Returns `(record, get_history, clear)`.
///
/// `record` stores its argument (use a tuple for several values). With
/// `max_history = Some(n)` only the `n` most recent records are kept.
///
/// # Examples
///
/// ```
/// use enclosure_core::make_call_history;
///
/// let (record, history, clear) = make_call_history::<(i32, i32)>(Some(3));
/// record((1, 2));
/// record((3, 4));
/// assert_eq!(history(), vec![(1, 2), (3, 4)]);
/// clear();
/// assert!(history().is_empty());
/// ```
pub fn make_call_history<A>(
    max_history: Option<usize>,
) -> (impl Fn(A), impl Fn() -> Vec<A>, impl Fn())
where
    A: Clone,
{
    let history: Rc<RefCell<VecDeque<A>>> = Rc::new(RefCell::new(VecDeque::new()));

    let record = {
        let history = Rc::clone(&history);
        move |args: A| {
            let mut history = history.borrow_mut();
            history.push_back(args);
            if let Some(max) = max_history {
                while history.len() > max {
                    history.pop_front();
                }
            }
        }
    };

    let get_history = {
        let history = Rc::clone(&history);
        move || history.borrow().iter().cloned().collect()
    };

    let clear = move || history.borrow_mut().clear();

    (record, get_history, clear)
}

/// Returns a generator of `"{prefix}_{n}"` ids with `n` starting at 1.
///
/// # Examples
///
/// ```
/// use enclosure_core::make_unique_id_generator;
///
/// let mut gen_id = make_unique_id_generator("user");
/// assert_eq!(gen_id(), "user_1");
/// assert_eq!(gen_id(), "user_2");
/// ```
pub fn make_unique_id_generator(prefix: impl Into<String>) -> impl FnMut() -> String {
    let prefix = prefix.into();
    let mut next_id = 0u64;
    move || {
        next_id += 1;
        format!("{}_{}", prefix, next_id)
    }
}
