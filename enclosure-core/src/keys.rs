use std::fmt::Debug;

/// Trait for types that can produce a cache key string.
///
/// Every `Debug` type gets an implementation that renders its `{:?}` form,
/// so integers, strings, tuples and derived structs work out of the box.
/// The `#[memoize]` attribute joins the keys of all arguments with `|`.
///
/// # Examples
///
/// ```
/// use enclosure_core::CacheableKey;
///
/// assert_eq!(42.to_cache_key(), "42");
/// assert_eq!("abc".to_cache_key(), "\"abc\"");
/// assert_eq!((1, 2).to_cache_key(), "(1, 2)");
/// ```
pub trait CacheableKey {
    fn to_cache_key(&self) -> String;
}

impl<T> CacheableKey for T
where
    T: Debug + ?Sized,
{
    fn to_cache_key(&self) -> String {
        format!("{:?}", self)
    }
}
