/// Errors returned by the fallible helpers in [`crate::inner`].
///
/// Absence of a value (cache miss, exhausted reads, no data tracked) is never
/// an error in this crate; it is reported as `None`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EnclosureError {
    /// The operation name is not one of `add`, `subtract`, `multiply`, `divide`.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// A `divide` was requested with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
}
