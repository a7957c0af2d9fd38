use crate::error::{ParseError, RuntimeError};

#[derive(Debug)]
/// The umbrella error returned by fallible evaluation.
///
/// Wraps whichever phase failed: lexing/parsing the expression text, or
/// evaluating the resulting tree. The default-returning entry point swallows
/// this error and yields `0.0`; callers that need to distinguish failure
/// modes use the fallible entry point instead.
pub enum EvalError {
    /// The expression text could not be lexed or parsed.
    Parse(ParseError),
    /// The parsed expression could not be evaluated.
    Runtime(RuntimeError),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
