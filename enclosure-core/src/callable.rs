/// Something that can be invoked with an argument value.
///
/// Implemented for every `Fn(Args) -> R` and for each wrapper in
/// [`crate::decorators`], which lets wrappers stack:
/// `memoize(call_counter(f))`. Functions of several arguments take them as a
/// single tuple.
///
/// # Examples
///
/// ```
/// use enclosure_core::{call_counter, Callable};
///
/// let add = |(a, b): (i32, i32)| a + b;
/// assert_eq!(add.invoke((1, 2)), 3);
///
/// let counted = call_counter(add);
/// assert_eq!(counted.invoke((3, 4)), 7);
/// assert_eq!(counted.call_count(), 1);
/// ```
pub trait Callable<Args> {
    type Output;

    fn invoke(&self, args: Args) -> Self::Output;
}

impl<F, Args, R> Callable<Args> for F
where
    F: Fn(Args) -> R,
{
    type Output = R;

    #[inline]
    fn invoke(&self, args: Args) -> R {
        self(args)
    }
}
