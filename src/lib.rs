//! # Enclosure
//!
//! Closure-based state, small caches and memoizing function wrappers.
//!
//! ## Features
//!
//! - **Closure factories**: counters, accumulators, toggles, running averages
//!   and friends whose state is private to each returned closure
//! - **Caches**: unbounded, hit/miss counting and FIFO-bounded `get`/`set`
//!   caches
//! - **Decorators**: stackable wrappers that count, log, memoize, retry or
//!   substitute defaults
//! - **Attribute memoization**: `#[memoize]` caches a plain function or method
//!   in a process-wide store
//!
//! ## Quick Start
//!
//! ```rust
//! use enclosure::memoize;
//!
//! #[memoize]
//! fn fibonacci(n: u64) -> u64 {
//!     if n <= 1 {
//!         return n;
//!     }
//!     fibonacci(n - 1) + fibonacci(n - 2)
//! }
//!
//! assert_eq!(fibonacci(50), 12586269025);
//! ```
//!
//! ## Closure-Based Wrappers
//!
//! Wrappers implement [`Callable`], so they can be layered in any order:
//!
//! ```rust
//! use enclosure::{call_counter, memoize, Callable};
//!
//! let square = call_counter(|x: u64| x * x);
//! let cached = memoize::<_, u64>(square);
//!
//! assert_eq!(cached.invoke(5), 25);
//! assert_eq!(cached.invoke(5), 25);
//! assert_eq!(cached.inner().call_count(), 1);
//! ```
//!
//! ## Bounded Attribute Caches
//!
//! ```rust
//! use enclosure::memoize;
//!
//! #[memoize(limit = 2, name = "doubler")]
//! fn double(x: i32) -> i32 {
//!     x * 2
//! }
//!
//! assert_eq!(double(1), 2);
//! assert_eq!(double(2), 4);
//! assert_eq!(double(3), 6); // evicts the result for 1
//! ```
//!
//! ## Statistics
//!
//! With the `stats` feature (on by default), every `#[memoize]` cache registers
//! its hit/miss counters under its name:
//!
//! ```rust
//! # #[cfg(feature = "stats")]
//! # {
//! use enclosure::{memoize, stats_registry};
//!
//! #[memoize(name = "lookup")]
//! fn lookup(id: u32) -> String {
//!     format!("user-{}", id)
//! }
//!
//! lookup(1);
//! lookup(1);
//!
//! let stats = stats_registry::get("lookup").unwrap();
//! assert_eq!(stats.hits(), 1);
//! assert_eq!(stats.misses(), 1);
//! # }
//! ```

pub use enclosure_core::*;
pub use enclosure_macros::memoize;

/// Items referenced by the code `#[memoize]` expands to.
#[doc(hidden)]
pub mod __private {
    pub use enclosure_core::{CacheStats, CacheableKey, FifoStore};
    pub use once_cell::sync::Lazy;
    pub use parking_lot::Mutex;

    /// Makes a `#[memoize]` cache's statistics reachable by name.
    pub fn register_stats(name: &str, stats: &'static CacheStats) {
        #[cfg(feature = "stats")]
        enclosure_core::stats_registry::register(name, stats);

        #[cfg(not(feature = "stats"))]
        let _ = (name, stats);
    }
}
