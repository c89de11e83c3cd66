//! Patterns composed from closures and wrappers.

use std::cell::Cell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;
use std::time::Duration;

use crate::{memoize, Callable};

/// Returns `(memoized_func, get_cache, clear_cache)`.
///
/// Same caching contract as [`memoize`], with the cache reached through
/// accessor closures instead of methods.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use enclosure_core::make_memoized_function;
///
/// let (memo_add, get_cache, clear) = make_memoized_function(|(a, b): (i32, i32)| a + b);
/// assert_eq!(memo_add((1, 2)), 3);
/// assert_eq!(get_cache(), HashMap::from([((1, 2), 3)]));
/// clear();
/// assert!(get_cache().is_empty());
/// ```
pub fn make_memoized_function<F, A>(
    func: F,
) -> (
    impl Fn(A) -> F::Output,
    impl Fn() -> HashMap<A, F::Output>,
    impl Fn(),
)
where
    F: Callable<A>,
    A: Eq + Hash + Clone,
    F::Output: Clone,
{
    let memoized = Rc::new(memoize(func));

    let call = {
        let memoized = Rc::clone(&memoized);
        move |args: A| memoized.invoke(args)
    };

    let get_cache = {
        let memoized = Rc::clone(&memoized);
        move || memoized.cache()
    };

    let clear_cache = move || memoized.clear_cache();

    (call, get_cache, clear_cache)
}

/// Returns `(is_allowed, reset)`.
///
/// `is_allowed` answers `true` for the first `max_calls` calls after
/// construction or the last `reset`, then `false`. Only calls are counted;
/// `period` is reported when a call is refused but does not expire anything.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use enclosure_core::make_rate_limiter;
///
/// let (is_allowed, reset) = make_rate_limiter(2, Duration::from_secs(1));
/// assert!(is_allowed());
/// assert!(is_allowed());
/// assert!(!is_allowed());
/// reset();
/// assert!(is_allowed());
/// ```
pub fn make_rate_limiter(max_calls: usize, period: Duration) -> (impl Fn() -> bool, impl Fn()) {
    let calls = Rc::new(Cell::new(0usize));

    let is_allowed = {
        let calls = Rc::clone(&calls);
        move || {
            if calls.get() < max_calls {
                calls.set(calls.get() + 1);
                true
            } else {
                tracing::debug!(max_calls, ?period, "rate limit reached");
                false
            }
        }
    };

    let reset = move || calls.set(0);

    (is_allowed, reset)
}

/// Composes `functions` right to left: `compose(vec![f, g, h])(x) == f(g(h(x)))`.
///
/// An empty list composes to the identity. See [`compose!`](crate::compose!)
/// for a version without boxing that accepts differently typed stages.
///
/// # Examples
///
/// ```
/// use enclosure_core::compose;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
/// let composed = compose::<i32>(vec![Box::new(add_one), Box::new(double)]);
/// assert_eq!(composed(5), 11);
/// ```
pub fn compose<'a, T>(functions: Vec<Box<dyn Fn(T) -> T + 'a>>) -> impl Fn(T) -> T + 'a
where
    T: 'a,
{
    move |value| functions.iter().rev().fold(value, |acc, f| f(acc))
}

/// Composes functions right to left at compile time.
///
/// `compose!(f, g, h)` is a closure computing `f(g(h(x)))`. Each stage may
/// change the value's type.
///
/// # Examples
///
/// ```
/// use enclosure_core::compose;
///
/// let describe = compose!(|n: usize| format!("{} chars", n), |s: &str| s.len());
/// assert_eq!(describe("hello"), "5 chars");
/// ```
#[macro_export]
macro_rules! compose {
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {{
        let __outer = $f;
        let __inner = $crate::compose!($($rest),+);
        move |value| __outer(__inner(value))
    }};
}
