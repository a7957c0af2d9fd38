use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{evaluator::binary::eval_binary, symbols::table::SymbolTable},
    util::num::{f64_to_subscript_checked, i64_to_f64_checked},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks an expression tree and computes its value.
///
/// The evaluator borrows the symbol table for the duration of one
/// evaluation; it never mutates it, so repeated evaluations of the same
/// tree against the same table always produce the same result.
///
/// ## Example
/// ```
/// use arrex::interpreter::{
///     evaluator::core::Evaluator,
///     lexer::tokenize,
///     parser::core::parse_complete,
///     symbols::table::SymbolTable,
/// };
///
/// let symbols = SymbolTable::discover("2+3*4");
/// let tokens = tokenize("2+3*4").unwrap();
/// let tree = parse_complete(&tokens).unwrap();
///
/// assert_eq!(Evaluator::new(&symbols).eval(&tree).unwrap(), 14.0);
/// ```
pub struct Evaluator<'a> {
    symbols: &'a SymbolTable,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator over a discovered (and possibly loaded) symbol
    /// table.
    #[must_use]
    pub const fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }

    /// Evaluates an expression tree and returns the resulting value.
    ///
    /// This is the main entry point for tree evaluation. The evaluator
    /// dispatches based on node variant: literals promote to `f64`, scalar
    /// and array references resolve against the symbol table, and binary
    /// operations combine the recursively evaluated operands. All
    /// arithmetic is `f64` even though stored symbol values are integers.
    ///
    /// # Parameters
    /// - `expr`: Expression tree to evaluate.
    ///
    /// # Returns
    /// The numeric value of the tree.
    ///
    /// # Errors
    /// - `UnknownVariable` / `UnknownArray` if a name resolves to no
    ///   discovered symbol.
    /// - `IndexOutOfBounds` if a subscript falls outside `[0, len)`.
    /// - `SubscriptNotFinite` if a subscript evaluates to NaN or infinity.
    /// - `LiteralTooLarge` if a stored value is not exactly representable
    ///   as `f64`.
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Literal { value, pos } => {
                i64_to_f64_checked(*value, RuntimeError::LiteralTooLarge { pos: *pos })
            },
            Expr::Scalar { name, pos } => self.eval_scalar(name, *pos),
            Expr::ArrayIndex { name, index, pos } => self.eval_array_index(name, index, *pos),
            Expr::BinaryOp { left, op, right, .. } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(eval_binary(*op, left, right))
            },
        }
    }

    /// Resolves a scalar reference to its loaded value.
    fn eval_scalar(&self, name: &str, pos: usize) -> EvalResult<f64> {
        match self.symbols.scalar(name) {
            Some(symbol) => {
                i64_to_f64_checked(symbol.value, RuntimeError::LiteralTooLarge { pos })
            },
            None => Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                        pos }),
        }
    }

    /// Resolves one array subscript access.
    ///
    /// The subscript expression is evaluated first (it may itself contain
    /// subscripts), truncated toward zero, and bounds-checked against the
    /// array's allocated length. An array that was discovered but never
    /// loaded has length 0, so any access to it is out of bounds.
    fn eval_array_index(&self, name: &str, index: &Expr, pos: usize) -> EvalResult<f64> {
        let subscript = self.eval(index)?;
        let subscript = f64_to_subscript_checked(subscript, index.position())?;

        let Some(symbol) = self.symbols.array(name) else {
            return Err(RuntimeError::UnknownArray { name: name.to_string(),
                                                    pos });
        };

        let slot = usize::try_from(subscript).ok()
                                             .and_then(|i| symbol.values.get(i));
        match slot {
            Some(value) => i64_to_f64_checked(*value, RuntimeError::LiteralTooLarge { pos }),
            None => Err(RuntimeError::IndexOutOfBounds { len:   symbol.values.len(),
                                                         index: subscript,
                                                         pos }),
        }
    }
}
