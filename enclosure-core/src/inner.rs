//! Functions whose work is delegated to helpers defined inside them.

use std::str::FromStr;

use crate::{CacheableKey, EnclosureError};

/// Arithmetic operation accepted by [`calculate_with_steps`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl FromStr for Operation {
    type Err = EnclosureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            other => Err(EnclosureError::UnknownOperation(other.to_string())),
        }
    }
}

/// Applies the named operation to `a` and `b` through inner helper functions.
///
/// # Errors
///
/// * [`EnclosureError::UnknownOperation`] if `operation` is not one of
///   `add`, `subtract`, `multiply`, `divide`
/// * [`EnclosureError::DivisionByZero`] for `divide` with `b == 0.0`
///
/// # Examples
///
/// ```
/// use enclosure_core::calculate_with_steps;
///
/// assert_eq!(calculate_with_steps(10.0, 3.0, "add"), Ok(13.0));
/// assert_eq!(calculate_with_steps(10.0, 3.0, "multiply"), Ok(30.0));
/// assert!(calculate_with_steps(10.0, 3.0, "modulo").is_err());
/// ```
pub fn calculate_with_steps(a: f64, b: f64, operation: &str) -> Result<f64, EnclosureError> {
    fn add(a: f64, b: f64) -> f64 {
        a + b
    }

    fn subtract(a: f64, b: f64) -> f64 {
        a - b
    }

    fn multiply(a: f64, b: f64) -> f64 {
        a * b
    }

    fn divide(a: f64, b: f64) -> Result<f64, EnclosureError> {
        if b == 0.0 {
            return Err(EnclosureError::DivisionByZero);
        }
        Ok(a / b)
    }

    match operation.parse::<Operation>()? {
        Operation::Add => Ok(add(a, b)),
        Operation::Subtract => Ok(subtract(a, b)),
        Operation::Multiply => Ok(multiply(a, b)),
        Operation::Divide => divide(a, b),
    }
}

/// Returns the items of `data` that lie within `min_val..=max_val`, in order.
///
/// # Examples
///
/// ```
/// use enclosure_core::process_with_validator;
///
/// assert_eq!(process_with_validator(&[1, 5, 10, 15, 20], 5, 15), vec![5, 10, 15]);
/// ```
pub fn process_with_validator<T>(data: &[T], min_val: T, max_val: T) -> Vec<T>
where
    T: PartialOrd + Clone,
{
    let is_valid = |value: &T| *value >= min_val && *value <= max_val;
    data.iter().filter(|v| is_valid(v)).cloned().collect()
}

/// Builds a `"func_name:(arg1, arg2, ...)"` key.
///
/// Arguments are rendered with [`CacheableKey`]. A single argument keeps a
/// trailing comma (`"f:(1,)"`) so it cannot be confused with a parenthesised
/// value.
///
/// # Examples
///
/// ```
/// use enclosure_core::format_cache_key;
///
/// assert_eq!(format_cache_key("add", &[&1, &2]), "add:(1, 2)");
/// assert_eq!(format_cache_key("neg", &[&1]), "neg:(1,)");
/// assert_eq!(format_cache_key("now", &[]), "now:()");
/// ```
pub fn format_cache_key(func_name: &str, args: &[&dyn CacheableKey]) -> String {
    fn format_args(args: &[&dyn CacheableKey]) -> String {
        let parts: Vec<String> = args.iter().map(|arg| arg.to_cache_key()).collect();
        match parts.len() {
            1 => format!("({},)", parts[0]),
            _ => format!("({})", parts.join(", ")),
        }
    }

    format!("{}:{}", func_name, format_args(args))
}
