#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The byte offset where the error occurred.
        pos:   usize,
    },
    /// Reached the end of the expression unexpectedly.
    UnexpectedEndOfInput {
        /// The byte offset where the error occurred.
        pos: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The byte offset of the unmatched `(`.
        pos: usize,
    },
    /// A closing bracket `]` was expected but not found.
    ExpectedClosingBracket {
        /// The byte offset of the subscripted name.
        pos: usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The byte offset where the error occurred.
        pos:   usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, pos } => {
                write!(f, "Error at offset {pos}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { pos } => {
                write!(f, "Error at offset {pos}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { pos } => write!(f,
                                                         "Error at offset {pos}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedClosingBracket { pos } => write!(f,
                                                           "Error at offset {pos}: Expected closing bracket ']' but none found."),

            Self::UnexpectedTrailingTokens { token, pos } => write!(f,
                                                                    "Error at offset {pos}: Extra tokens after expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
