//! Scope demonstrations: a purely local computation and an explicitly owned
//! process-wide counter.

use std::sync::atomic::{AtomicU64, Ordering};

static GLOBAL_COUNTER: ScopeCounter = ScopeCounter::new();

/// Doubles `value` without touching any shared state.
///
/// Returns `None` when the doubled value does not fit in an `i64`.
///
/// # Examples
///
/// ```
/// use enclosure_core::demonstrate_local_scope;
///
/// assert_eq!(demonstrate_local_scope(5), Some(10));
/// assert_eq!(demonstrate_local_scope(i64::MAX), None);
/// ```
pub fn demonstrate_local_scope(value: i64) -> Option<i64> {
    value.checked_mul(2)
}

/// A shared call counter.
///
/// Instead of a hidden module-level variable, the counter is a value that is
/// handed to the functions that read or modify it. [`ScopeCounter::global`]
/// returns the single process-wide instance, starting at 0.
///
/// # Thread Safety
///
/// The count is an `AtomicU64` with `Relaxed` ordering, so a shared reference
/// can be used from several threads. Each operation is atomic on its own; a
/// `get` followed by an `increment` is not.
///
/// # Examples
///
/// ```
/// use enclosure_core::ScopeCounter;
///
/// let counter = ScopeCounter::new();
/// assert_eq!(counter.increment(), 1);
/// assert_eq!(counter.increment(), 2);
/// assert_eq!(counter.get(), 2);
/// assert_eq!(counter.reset(), 0);
/// ```
#[derive(Debug, Default)]
pub struct ScopeCounter {
    call_count: AtomicU64,
}

impl ScopeCounter {
    /// Creates a counter starting at 0.
    pub const fn new() -> Self {
        Self {
            call_count: AtomicU64::new(0),
        }
    }

    /// Returns the process-wide counter.
    pub fn global() -> &'static ScopeCounter {
        &GLOBAL_COUNTER
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Increments the counter and returns the new value.
    #[inline]
    pub fn increment(&self) -> u64 {
        self.call_count.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Sets the counter back to 0 and returns 0.
    pub fn reset(&self) -> u64 {
        let previous = self.call_count.swap(0, Ordering::Relaxed);
        tracing::debug!(previous, "scope counter reset");
        0
    }
}

/// Increments `counter` and returns its new value.
pub fn increment_global_counter(counter: &ScopeCounter) -> u64 {
    counter.increment()
}

/// Returns the current value of `counter`.
pub fn get_global_counter(counter: &ScopeCounter) -> u64 {
    counter.get()
}

/// Resets `counter` to 0 and returns 0.
pub fn reset_global_counter(counter: &ScopeCounter) -> u64 {
    counter.reset()
}
