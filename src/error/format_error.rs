#[derive(Debug)]
/// Represents all errors that can occur while loading symbol values from a
/// value source.
///
/// Lines naming symbols that were never discovered are not errors; they are
/// silently ignored by the loader. A `FormatError` means a line naming a
/// known symbol could not be parsed into the expected `name value` or
/// `name length (idx,val) ...` shape.
pub enum FormatError {
    /// A field that must be numeric could not be parsed as a number.
    ExpectedNumber {
        /// The offending field.
        token: String,
        /// The 1-based value-source line where the error occurred.
        line:  usize,
    },
    /// A line named a known symbol but carried no value or length field.
    MissingField {
        /// The 1-based value-source line where the error occurred.
        line: usize,
    },
    /// An `(idx,val)` pair did not have exactly two comma-separated fields.
    MalformedPair {
        /// The offending field.
        token: String,
        /// The 1-based value-source line where the error occurred.
        line:  usize,
    },
    /// An `(idx,val)` pair addressed a slot outside the declared length.
    PairOutOfRange {
        /// The index the pair addressed.
        index:  usize,
        /// The declared array length.
        length: usize,
        /// The 1-based value-source line where the error occurred.
        line:   usize,
    },
    /// A line for a scalar symbol carried more than the two expected fields.
    TrailingTokens {
        /// The first extra field.
        token: String,
        /// The 1-based value-source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedNumber { token, line } => {
                write!(f, "Error on line {line}: Expected a number, found '{token}'.")
            },
            Self::MissingField { line } => {
                write!(f, "Error on line {line}: Missing value or length field.")
            },
            Self::MalformedPair { token, line } => write!(f,
                                                          "Error on line {line}: Malformed (index,value) pair '{token}'."),
            Self::PairOutOfRange { index, length, line } => write!(f,
                                                                   "Error on line {line}: Pair index {index} is outside the declared length {length}."),
            Self::TrailingTokens { token, line } => write!(f,
                                                           "Error on line {line}: Extra fields after scalar value. Check your input: {token}"),
        }
    }
}

impl std::error::Error for FormatError {}
