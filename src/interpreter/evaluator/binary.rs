use crate::ast::BinaryOperator;

/// Applies a binary operator to two evaluated operands.
///
/// All four operators follow IEEE-754 `f64` semantics; in particular,
/// division by zero yields an infinity (or NaN for `0/0`) rather than an
/// error, and the left operand of `-` and `/` is the earlier-parsed one, so
/// left-to-right associativity falls out of the tree shape.
///
/// # Parameters
/// - `op`: The operator to apply.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// The combined value.
///
/// # Example
/// ```
/// use arrex::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Div, 7.0, 2.0), 3.5);
/// assert!(eval_binary(BinaryOperator::Div, 1.0, 0.0).is_infinite());
/// ```
#[must_use]
pub const fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
    }
}
