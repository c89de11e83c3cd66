//! Function wrappers that add bookkeeping around a [`Callable`].
//!
//! | Wrapper | Created by | Adds |
//! |---------|------------|------|
//! | [`CallCounter`] | [`call_counter`] | number of calls |
//! | [`LogCalls`] | [`log_calls`] | `(args, result)` record per call |
//! | [`Memoize`] | [`memoize`], [`create_cache_decorator`] | result cache keyed by the argument value |
//! | [`RetryOnNone`] | [`retry_on_none`] | immediate re-invocation while the result is `None` |
//! | [`WithDefault`] | [`with_default`] | fallback value for `None` results |
//!
//! Wrappers keep their state behind atomics or `parking_lot` locks and can be
//! shared between threads when the wrapped function can.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::{CacheStats, Callable, FifoStore};

/// Counts how many times the wrapped function has been called.
#[derive(Debug)]
pub struct CallCounter<F> {
    func: F,
    call_count: AtomicUsize,
}

impl<F> CallCounter<F> {
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn inner(&self) -> &F {
        &self.func
    }
}

impl<F, A> Callable<A> for CallCounter<F>
where
    F: Callable<A>,
{
    type Output = F::Output;

    fn invoke(&self, args: A) -> F::Output {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.func.invoke(args)
    }
}

/// Wraps `func` so that every call is counted.
///
/// # Examples
///
/// ```
/// use enclosure_core::{call_counter, Callable};
///
/// let greet = call_counter(|name: &str| format!("Hello, {}", name));
/// assert_eq!(greet.invoke("Alice"), "Hello, Alice");
/// assert_eq!(greet.invoke("Bob"), "Hello, Bob");
/// assert_eq!(greet.call_count(), 2);
/// ```
pub fn call_counter<F>(func: F) -> CallCounter<F> {
    CallCounter {
        func,
        call_count: AtomicUsize::new(0),
    }
}

/// One entry of a [`LogCalls`] log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallRecord<A, R> {
    pub args: A,
    pub result: R,
}

/// Records the arguments and result of every call, in call order.
#[derive(Debug)]
pub struct LogCalls<F, A, R> {
    func: F,
    call_log: Mutex<Vec<CallRecord<A, R>>>,
}

impl<F, A, R> LogCalls<F, A, R>
where
    A: Clone,
    R: Clone,
{
    /// Copy of the log, oldest call first.
    pub fn call_log(&self) -> Vec<CallRecord<A, R>> {
        self.call_log.lock().clone()
    }

    pub fn inner(&self) -> &F {
        &self.func
    }
}

impl<F, A, R> Callable<A> for LogCalls<F, A, R>
where
    F: Callable<A, Output = R>,
    A: Clone,
    R: Clone,
{
    type Output = R;

    fn invoke(&self, args: A) -> R {
        let result = self.func.invoke(args.clone());
        self.call_log.lock().push(CallRecord {
            args,
            result: result.clone(),
        });
        result
    }
}

/// Wraps `func` so that every call is appended to its call log.
///
/// # Examples
///
/// ```
/// use enclosure_core::{log_calls, CallRecord, Callable};
///
/// let add = log_calls(|(a, b): (i32, i32)| a + b);
/// assert_eq!(add.invoke((1, 2)), 3);
/// assert_eq!(add.invoke((3, 4)), 7);
/// assert_eq!(
///     add.call_log(),
///     vec![
///         CallRecord { args: (1, 2), result: 3 },
///         CallRecord { args: (3, 4), result: 7 },
///     ]
/// );
/// ```
pub fn log_calls<F, A>(func: F) -> LogCalls<F, A, F::Output>
where
    F: Callable<A>,
{
    LogCalls {
        func,
        call_log: Mutex::new(Vec::new()),
    }
}

/// Caches results keyed by the exact argument value.
///
/// A call whose argument equals an earlier one returns the stored result
/// without invoking the wrapped function. With a size limit the oldest
/// stored result is evicted first (see [`FifoStore`]).
///
/// The lock is released while the wrapped function runs, so a memoized
/// function may call itself recursively through the same `Memoize`.
pub struct Memoize<F, A, R> {
    func: F,
    store: Mutex<FifoStore<A, R>>,
    stats: CacheStats,
}

impl<F, A, R> Memoize<F, A, R>
where
    A: Eq + Hash + Clone,
    R: Clone,
{
    fn with_limit(func: F, limit: Option<usize>) -> Self {
        Self {
            func,
            store: Mutex::new(FifoStore::new(limit)),
            stats: CacheStats::new(),
        }
    }

    /// Copy of the cached `argument -> result` pairs.
    pub fn cache(&self) -> HashMap<A, R> {
        self.store.lock().to_map()
    }

    pub fn cache_len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn clear_cache(&self) {
        self.store.lock().clear();
    }

    pub fn limit(&self) -> Option<usize> {
        self.store.lock().limit()
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub fn inner(&self) -> &F {
        &self.func
    }
}

impl<F, A, R> Callable<A> for Memoize<F, A, R>
where
    F: Callable<A, Output = R>,
    A: Eq + Hash + Clone,
    R: Clone,
{
    type Output = R;

    fn invoke(&self, args: A) -> R {
        let cached = self.store.lock().get(&args).cloned();
        if let Some(result) = cached {
            self.stats.record_hit();
            tracing::trace!("memoize hit");
            return result;
        }

        self.stats.record_miss();
        tracing::trace!("memoize miss");

        let result = self.func.invoke(args.clone());
        self.store.lock().insert(args, result.clone());
        result
    }
}

impl<F, A, R> std::fmt::Debug for Memoize<F, A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memoize")
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

/// Wraps `func` with an unbounded result cache.
///
/// # Examples
///
/// ```
/// use enclosure_core::{memoize, Callable};
///
/// let slow_add = memoize(|(a, b): (i32, i32)| a + b);
/// assert_eq!(slow_add.invoke((1, 2)), 3);
/// assert_eq!(slow_add.invoke((1, 2)), 3);
/// assert_eq!(slow_add.cache().get(&(1, 2)), Some(&3));
/// assert_eq!(slow_add.stats().hits(), 1);
/// ```
pub fn memoize<F, A>(func: F) -> Memoize<F, A, F::Output>
where
    F: Callable<A>,
    A: Eq + Hash + Clone,
    F::Output: Clone,
{
    Memoize::with_limit(func, None)
}

/// Decorator produced by [`create_cache_decorator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheDecorator {
    max_size: Option<usize>,
}

impl CacheDecorator {
    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    /// Wraps `func` in a [`Memoize`] bounded by this decorator's size.
    pub fn decorate<F, A>(&self, func: F) -> Memoize<F, A, F::Output>
    where
        F: Callable<A>,
        A: Eq + Hash + Clone,
        F::Output: Clone,
    {
        Memoize::with_limit(func, self.max_size)
    }
}

/// Creates a memoizing decorator holding at most `max_size` results
/// (`None` for unbounded), evicting the oldest result first.
///
/// # Examples
///
/// ```
/// use enclosure_core::{create_cache_decorator, Callable};
///
/// let expensive = create_cache_decorator(Some(2)).decorate(|x: i32| x * 2);
/// assert_eq!(expensive.invoke(1), 2);
/// assert_eq!(expensive.invoke(2), 4);
/// assert_eq!(expensive.invoke(3), 6); // evicts the result for 1
/// assert_eq!(expensive.cache_len(), 2);
/// assert!(!expensive.cache().contains_key(&1));
/// ```
pub fn create_cache_decorator(max_size: Option<usize>) -> CacheDecorator {
    CacheDecorator { max_size }
}

/// Re-invokes the wrapped function while it returns `None`.
#[derive(Debug)]
pub struct RetryOnNone<F> {
    func: F,
    max_retries: usize,
}

impl<F> RetryOnNone<F> {
    /// Total number of attempts per call; always at least one.
    pub fn attempts(&self) -> usize {
        self.max_retries.max(1)
    }

    pub fn inner(&self) -> &F {
        &self.func
    }
}

impl<F, A, T> Callable<A> for RetryOnNone<F>
where
    F: Callable<A, Output = Option<T>>,
    A: Clone,
{
    type Output = Option<T>;

    fn invoke(&self, args: A) -> Option<T> {
        let attempts = self.attempts();
        for attempt in 1..=attempts {
            if let Some(value) = self.func.invoke(args.clone()) {
                return Some(value);
            }
            tracing::debug!(attempt, attempts, "wrapped function returned None");
        }
        None
    }
}

/// Decorator produced by [`retry_on_none`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryDecorator {
    max_retries: usize,
}

impl RetryDecorator {
    pub fn decorate<F>(&self, func: F) -> RetryOnNone<F> {
        RetryOnNone {
            func,
            max_retries: self.max_retries,
        }
    }
}

/// Creates a decorator that calls the wrapped function up to `max_retries`
/// times (at least once), returning the first `Some` result.
///
/// Retries are immediate; there is no delay between attempts.
/// `retry_on_none(0)` behaves like `retry_on_none(1)`: the function is still
/// called once.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use enclosure_core::{retry_on_none, Callable};
///
/// let attempt = Cell::new(0);
/// let flaky = retry_on_none(3).decorate(|()| {
///     attempt.set(attempt.get() + 1);
///     if attempt.get() >= 2 { Some("success") } else { None }
/// });
/// assert_eq!(flaky.invoke(()), Some("success"));
/// assert_eq!(attempt.get(), 2);
///
/// let never = retry_on_none(0).decorate(|()| None::<i32>);
/// assert_eq!(never.attempts(), 1);
/// assert_eq!(never.invoke(()), None);
/// ```
pub fn retry_on_none(max_retries: usize) -> RetryDecorator {
    RetryDecorator { max_retries }
}

/// Replaces a `None` result of the wrapped function with a default value.
#[derive(Debug)]
pub struct WithDefault<F, T> {
    func: F,
    default_value: T,
}

impl<F, A, T> Callable<A> for WithDefault<F, T>
where
    F: Callable<A, Output = Option<T>>,
    T: Clone,
{
    type Output = T;

    fn invoke(&self, args: A) -> T {
        self.func
            .invoke(args)
            .unwrap_or_else(|| self.default_value.clone())
    }
}

/// Decorator produced by [`with_default`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultDecorator<T> {
    default_value: T,
}

impl<T: Clone> DefaultDecorator<T> {
    pub fn decorate<F>(&self, func: F) -> WithDefault<F, T> {
        WithDefault {
            func,
            default_value: self.default_value.clone(),
        }
    }
}

/// Creates a decorator substituting `default_value` for `None` results.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use enclosure_core::{with_default, Callable};
///
/// let get_name = with_default("N/A")
///     .decorate(|data: &HashMap<&str, &'static str>| data.get("name").copied());
///
/// let alice = HashMap::from([("name", "Alice")]);
/// assert_eq!(get_name.invoke(&alice), "Alice");
/// assert_eq!(get_name.invoke(&HashMap::new()), "N/A");
/// ```
pub fn with_default<T: Clone>(default_value: T) -> DefaultDecorator<T> {
    DefaultDecorator { default_value }
}
