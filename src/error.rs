/// Evaluation errors.
///
/// Defines the umbrella error returned by fallible evaluation, wrapping
/// either a parse error or a runtime error.
pub mod eval_error;
/// Value-source format errors.
///
/// Defines all error types that can occur while loading symbol values from a
/// line-oriented value source. Format errors include non-numeric fields,
/// malformed `(idx,val)` pairs, and lines with the wrong shape.
pub mod format_error;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include unexpected tokens, unbalanced brackets,
/// and trailing input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// expression, such as unknown variables and out-of-bounds subscripts.
pub mod runtime_error;

pub use eval_error::EvalError;
pub use format_error::FormatError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
