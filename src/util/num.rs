use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_I64_INT` in absolute
/// value.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Returns
/// - `Ok(f64)`: The converted value if it is safe.
/// - `Err(error)`: If the value is too large.
///
/// ## Example
/// ```
/// use arrex::util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked};
///
/// // Works for safe values
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// // Fails for values outside safe range
/// let big = MAX_SAFE_I64_INT + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(error);
    }
    Ok(value as f64)
}

/// Truncates an `f64` subscript toward zero, yielding a signed index.
///
/// Truncation mirrors the subscript semantics of the expression language:
/// `arr[5/2]` accesses slot 2. The sign is preserved so that the caller can
/// report a negative subscript in its out-of-bounds error instead of
/// silently wrapping.
///
/// ## Errors
/// Returns `RuntimeError::SubscriptNotFinite` if the value is NaN or an
/// infinity.
///
/// ## Parameters
/// - `value`: The evaluated subscript.
/// - `pos`: Byte offset of the subscript expression for error reporting.
///
/// ## Returns
/// - `Ok(i64)`: The truncated subscript.
/// - `Err(RuntimeError::SubscriptNotFinite { pos })`: If the value is not
///   finite.
///
/// ## Example
/// ```
/// use arrex::util::num::f64_to_subscript_checked;
///
/// assert_eq!(f64_to_subscript_checked(2.9, 0).unwrap(), 2);
/// assert_eq!(f64_to_subscript_checked(-0.5, 0).unwrap(), 0);
/// assert!(f64_to_subscript_checked(f64::NAN, 0).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_subscript_checked(value: f64, pos: usize) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::SubscriptNotFinite { pos });
    }
    // `as` truncates toward zero and saturates, which is exactly the
    // subscript semantics; the bounds check happens at the access site.
    Ok(value as i64)
}
