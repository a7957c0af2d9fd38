/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every construct the expression language supports: integer
/// literals, scalar variable references, array subscript accesses, and binary
/// arithmetic. Each variant carries the byte offset of the construct in the
/// expression text for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The constant value.
        value: i64,
        /// Byte offset in the expression text.
        pos:   usize,
    },
    /// Reference to a scalar variable by name.
    Scalar {
        /// Name of the variable.
        name: String,
        /// Byte offset in the expression text.
        pos:  usize,
    },
    /// An array subscript access (e.g. `arr[b+1]`).
    ///
    /// The subscript may be an arbitrary nested expression; it is evaluated
    /// and truncated to an integer before indexing.
    ArrayIndex {
        /// Name of the array being indexed.
        name:  String,
        /// The subscript expression.
        index: Box<Self>,
        /// Byte offset in the expression text.
        pos:   usize,
    },
    /// A binary operation (addition, subtraction, multiplication, division).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Byte offset of the operator in the expression text.
        pos:   usize,
    },
}

impl Expr {
    /// Gets the source offset from `self`.
    /// ## Example
    /// ```
    /// use arrex::ast::Expr;
    ///
    /// let expr = Expr::Scalar { name: "x".to_string(),
    ///                           pos:  5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { pos, .. }
            | Self::Scalar { pos, .. }
            | Self::ArrayIndex { pos, .. }
            | Self::BinaryOp { pos, .. } => *pos,
        }
    }
}

/// Represents a binary operator.
///
/// The expression language supports the four arithmetic operators; `Mul` and
/// `Div` bind tighter than `Add` and `Sub`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
