//! # arrex
//!
//! arrex is an interpreter for arithmetic expressions over scalar and
//! subscripted array variables. It discovers the variables that appear in an
//! expression, loads their values from a line-oriented value source, and
//! evaluates the expression to a single `f64` honoring the usual precedence
//! rules: `*` and `/` bind tighter than `+` and `-`, operators of equal
//! precedence associate left to right, and parenthesized and bracketed
//! subexpressions are evaluated first.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::error::FormatError;

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an expression as a tree. The tree is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines node types for literals, scalar references, array subscripts,
///   and binary operations.
/// - Attaches source offsets to nodes for error reporting.
pub mod ast;
/// Provides unified error types for loading, parsing, and evaluation.
///
/// This module defines all errors that can be raised while loading symbol
/// values, lexing or parsing an expression, or evaluating the resulting tree.
/// It standardizes error reporting and carries detailed information about
/// failures, including source offsets and value-source line numbers.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (loader, parser, evaluator).
/// - Attaches offsets and line numbers for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation, symbol discovery,
/// value loading, and error handling to provide a complete pipeline from
/// expression text to a numeric result. It exposes the public API for
/// evaluating expressions against a set of variable values.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and symbol
///   table.
/// - Provides the [`interpreter::expression::Expression`] entry point.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable conversion routines used throughout the
/// parser and evaluator, such as exactness-checked promotion from `i64` to
/// `f64` and subscript truncation.
///
/// # Responsibilities
/// - Safely convert between `i64`, `usize`, and `f64` without silent data
///   loss.
pub mod util;

pub use interpreter::expression::Expression;

/// Evaluates an expression against a value source in one call.
///
/// This is the convenience entry point: it discovers the symbols appearing
/// in `expression`, loads their values from the lines of `values`, and
/// evaluates. Value-source lines naming unknown symbols are ignored;
/// malformed lines surface as [`FormatError`]. Malformed *expressions* do
/// not error: per the evaluate-or-default contract the result is `0.0`.
///
/// # Errors
/// Returns an error if a value-source line cannot be parsed into the
/// expected `name value` or `name length (idx,val)` shape.
///
/// # Examples
/// ```
/// use arrex::evaluate_with_values;
///
/// let result = evaluate_with_values("a+arr[2]*b", "a 1\nb 2\narr 5 (2,10)");
/// assert_eq!(result.unwrap(), 21.0);
///
/// // An unbalanced expression falls back to the default result.
/// let result = evaluate_with_values("(1+2", "");
/// assert_eq!(result.unwrap(), 0.0);
/// ```
pub fn evaluate_with_values(expression: &str, values: &str) -> Result<f64, FormatError> {
    let mut expr = Expression::new(expression);
    expr.discover_symbols();
    expr.load_values(values.lines())?;
    Ok(expr.evaluate())
}
