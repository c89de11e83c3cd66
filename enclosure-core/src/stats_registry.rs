//! Named registry of cache statistics.
//!
//! Every function annotated with `#[memoize]` registers its [`CacheStats`]
//! here on first call, under the function name or the `name = "..."`
//! attribute. The registry is process-wide and safe to query from any
//! thread.
//!
//! # Examples
//!
//! ```
//! use enclosure_core::{stats_registry, CacheStats};
//!
//! static LOOKUP_STATS: CacheStats = CacheStats::new();
//!
//! stats_registry::register("lookup", &LOOKUP_STATS);
//! LOOKUP_STATS.record_miss();
//!
//! let stats = stats_registry::get("lookup").unwrap();
//! assert_eq!(stats.misses(), 1);
//! assert!(stats_registry::list().contains(&"lookup".to_string()));
//! ```

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::CacheStats;

static STATS_REGISTRY: Lazy<RwLock<HashMap<String, &'static CacheStats>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Registers `stats` under `name`, replacing an earlier registration.
pub fn register(name: &str, stats: &'static CacheStats) {
    STATS_REGISTRY.write().insert(name.to_string(), stats);
    tracing::debug!(name, "registered cache statistics");
}

/// Returns a snapshot copy of the statistics registered under `name`.
pub fn get(name: &str) -> Option<CacheStats> {
    get_ref(name).cloned()
}

/// Returns the live statistics registered under `name`.
pub fn get_ref(name: &str) -> Option<&'static CacheStats> {
    STATS_REGISTRY.read().get(name).copied()
}

/// Names of every registered cache, in no particular order.
pub fn list() -> Vec<String> {
    STATS_REGISTRY.read().keys().cloned().collect()
}

/// Zeroes the counters registered under `name`.
///
/// Returns `false` if nothing is registered under that name.
pub fn reset(name: &str) -> bool {
    match get_ref(name) {
        Some(stats) => {
            stats.reset();
            true
        }
        None => false,
    }
}

/// Forgets every registration. The counters themselves are left untouched.
pub fn clear() {
    STATS_REGISTRY.write().clear();
}
