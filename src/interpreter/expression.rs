use crate::{
    error::{EvalError, FormatError},
    interpreter::{
        evaluator::core::Evaluator,
        lexer::tokenize,
        parser::core::parse_complete,
        symbols::table::{ArraySymbol, ScalarSymbol, SymbolTable},
    },
};

/// An arithmetic expression together with the variables it mentions.
///
/// `Expression` owns the expression text and the symbol table discovered
/// from it, and drives the full lifecycle: discover the symbols, load their
/// values, evaluate. The text and the symbol values are never mutated by
/// evaluation, so an `Expression` can be evaluated any number of times with
/// identical results.
///
/// ## Usage
/// ```
/// use arrex::Expression;
///
/// let mut expression = Expression::new("a+arr[2]");
/// expression.discover_symbols();
/// expression.load_values(["a 3", "arr 5 (2,10)"]).unwrap();
///
/// assert_eq!(expression.evaluate(), 13.0);
/// ```
#[derive(Debug, Clone)]
pub struct Expression {
    text:    String,
    symbols: SymbolTable,
}

impl Expression {
    /// Wraps an expression text with an empty symbol table.
    ///
    /// No scanning happens here; call [`discover_symbols`] before loading
    /// values or evaluating anything that mentions variables.
    ///
    /// [`discover_symbols`]: Expression::discover_symbols
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text:    text.into(),
               symbols: SymbolTable::default(), }
    }

    /// Populates the symbol table from the expression text.
    ///
    /// Every distinct variable name yields exactly one symbol, even if it
    /// appears more than once: names immediately followed by `[` become
    /// array symbols, all others become scalars. Scalar values start at 0
    /// until [`load_values`] sets them.
    ///
    /// [`load_values`]: Expression::load_values
    pub fn discover_symbols(&mut self) {
        self.symbols = SymbolTable::discover(&self.text);
    }

    /// Loads values for the discovered symbols from value-source lines.
    ///
    /// Lines naming unknown symbols are ignored; see
    /// [`SymbolTable::load_values`] for the accepted line shapes.
    ///
    /// # Errors
    /// Returns a [`FormatError`] if a line naming a known symbol cannot be
    /// parsed into the expected shape. Unlike evaluation errors, loader
    /// errors are surfaced to the caller rather than swallowed.
    pub fn load_values<I, S>(&mut self, lines: I) -> Result<(), FormatError>
        where I: IntoIterator<Item = S>,
              S: AsRef<str>
    {
        self.symbols.load_values(lines)
    }

    /// Evaluates the expression, returning the default result on failure.
    ///
    /// This entry point never fails and never panics: any lexing, parsing,
    /// or evaluation error — unbalanced brackets, an out-of-bounds
    /// subscript, a name with no discovered symbol — collapses to `0.0`.
    /// Callers that need to see the failure use [`try_evaluate`].
    ///
    /// [`try_evaluate`]: Expression::try_evaluate
    ///
    /// # Example
    /// ```
    /// use arrex::Expression;
    ///
    /// let mut expression = Expression::new("(2+3)*4");
    /// expression.discover_symbols();
    /// assert_eq!(expression.evaluate(), 20.0);
    ///
    /// let mut broken = Expression::new("(2+3");
    /// broken.discover_symbols();
    /// assert_eq!(broken.evaluate(), 0.0);
    /// ```
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        self.try_evaluate().unwrap_or(0.0)
    }

    /// Evaluates the expression, surfacing any error.
    ///
    /// The pipeline is rebuilt on every call: tokenize the text, parse the
    /// tokens into a tree, and walk the tree against the symbol table.
    /// Nothing is cached across calls and the symbol table is only read, so
    /// evaluation is idempotent.
    ///
    /// # Errors
    /// - [`EvalError::Parse`] if the text cannot be tokenized or parsed.
    /// - [`EvalError::Runtime`] if a name resolves to no discovered symbol
    ///   or a subscript falls outside its array's bounds.
    pub fn try_evaluate(&self) -> Result<f64, EvalError> {
        let tokens = tokenize(&self.text)?;
        let tree = parse_complete(&tokens)?;
        Ok(Evaluator::new(&self.symbols).eval(&tree)?)
    }

    /// The discovered scalar symbols, in first-occurrence order.
    #[must_use]
    pub fn scalars(&self) -> &[ScalarSymbol] {
        self.symbols.scalars()
    }

    /// The discovered array symbols, in first-occurrence order.
    #[must_use]
    pub fn arrays(&self) -> &[ArraySymbol] {
        self.symbols.arrays()
    }

    /// The expression text this instance was built from.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
