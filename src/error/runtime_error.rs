#[derive(Debug)]
/// Represents all errors that can occur while evaluating a parsed expression.
pub enum RuntimeError {
    /// Tried to use a scalar variable that was never discovered.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The byte offset where the error occurred.
        pos:  usize,
    },
    /// Tried to subscript an array that was never discovered.
    UnknownArray {
        /// The name of the array.
        name: String,
        /// The byte offset where the error occurred.
        pos:  usize,
    },
    /// An array subscript resolved outside the allocated bounds.
    IndexOutOfBounds {
        /// The number of elements the array holds.
        len:   usize,
        /// The subscript that was actually requested, after truncation.
        index: i64,
        /// The byte offset where the error occurred.
        pos:   usize,
    },
    /// An array subscript evaluated to NaN or an infinity and cannot be
    /// truncated to an index.
    SubscriptNotFinite {
        /// The byte offset where the error occurred.
        pos: usize,
    },
    /// A stored value was too large to be represented exactly as an `f64`.
    LiteralTooLarge {
        /// The byte offset where the error occurred.
        pos: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, pos } => {
                write!(f, "Error at offset {pos}: Unknown variable '{name}'.")
            },
            Self::UnknownArray { name, pos } => {
                write!(f, "Error at offset {pos}: Unknown array '{name}'.")
            },
            Self::IndexOutOfBounds { len, index, pos } => write!(f,
                                                                 "Error at offset {pos}: Subscript {index} is out of bounds for an array of {len} elements."),
            Self::SubscriptNotFinite { pos } => write!(f,
                                                       "Error at offset {pos}: Subscript is not a finite number."),
            Self::LiteralTooLarge { pos } => {
                write!(f, "Error at offset {pos}: Value is too large.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
