//! # Enclosure Core
//!
//! Stateful closures, small key/value caches and memoizing function wrappers.
//!
//! ## Features
//!
//! - **Scope**: an explicitly passed process-wide counter ([`ScopeCounter`])
//! - **Closure factories**: counters, accumulators, toggles, running averages,
//!   min/max trackers, call histories and id generators, each with private
//!   state that no other instance can see
//! - **Caches**: unbounded, hit/miss counting, and FIFO-bounded caches
//! - **Decorators**: call counting, call logging, memoization (optionally
//!   bounded), retry-on-`None` and default substitution, all stackable through
//!   the [`Callable`] trait
//! - **Composition**: right-to-left function composition and accessor-style
//!   memoization
//!
//! Absence of a value is always `None`; the only error type,
//! [`EnclosureError`], belongs to the arithmetic helper in [`inner`].
//!
//! ## Module Organization
//!
//! - [`scope`] - local computation and the shared counter
//! - [`inner`] - functions built from inner helper functions
//! - [`closures`] - basic and mutating closure factories
//! - [`stateful`] - closures that remember what they have seen
//! - [`caches`] - `get`/`set` caches and the expiring value
//! - [`decorators`] - function wrappers
//! - [`advanced`] - composed patterns
//!
//! ## Thread Model
//!
//! Caches and decorator wrappers keep their state behind `parking_lot` locks
//! and atomics, so they are `Send + Sync` whenever their contents are.
//! Closure factories that hand out several closures share state through
//! `Rc`, which keeps those closures on the thread that created them.

mod callable;
mod error;
mod fifo_store;
mod keys;
mod stats;

pub mod advanced;
pub mod caches;
pub mod closures;
pub mod decorators;
pub mod inner;
pub mod scope;
pub mod stateful;

#[cfg(feature = "stats")]
pub mod stats_registry;

pub use advanced::{compose, make_memoized_function, make_rate_limiter};
pub use caches::{
    make_cache_with_stats, make_expiring_value, make_limited_cache, make_simple_cache,
    LimitedCache, SimpleCache, StatsCache,
};
pub use callable::Callable;
pub use closures::{
    make_accumulator, make_cache_checker, make_counter, make_counter_with_reset, make_greeting,
    make_multiplier, make_power_func, make_toggle,
};
pub use decorators::{
    call_counter, create_cache_decorator, log_calls, memoize, retry_on_none, with_default,
    CacheDecorator, CallCounter, CallRecord, DefaultDecorator, LogCalls, Memoize,
    RetryDecorator, RetryOnNone, WithDefault,
};
pub use error::EnclosureError;
pub use fifo_store::FifoStore;
pub use inner::{calculate_with_steps, format_cache_key, process_with_validator, Operation};
pub use keys::CacheableKey;
pub use scope::{
    demonstrate_local_scope, get_global_counter, increment_global_counter,
    reset_global_counter, ScopeCounter,
};
pub use stateful::{
    make_call_history, make_min_max_tracker, make_running_average, make_unique_id_generator,
};
pub use stats::{CacheStats, StatsSnapshot};
