/// The evaluator module walks the expression tree and computes the result.
///
/// The evaluator traverses the tree bottom-up, resolves scalar and array
/// references against the symbol table, and combines subresults with `f64`
/// arithmetic. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates tree nodes, performing all supported operations.
/// - Resolves variables and array subscripts from the symbol table.
/// - Reports runtime errors such as unknown names or out-of-bounds
///   subscripts.
pub mod evaluator;
/// The expression module exposes the public evaluation pipeline.
///
/// An [`expression::Expression`] owns the expression text and the symbol
/// table discovered from it, and drives the full lifecycle: symbol
/// discovery, value loading, and evaluation.
///
/// # Responsibilities
/// - Owns the expression text and its symbol table.
/// - Provides `evaluate` (default-on-error) and `try_evaluate` (fallible).
/// - Exposes read-only introspection of the discovered symbols.
pub mod expression;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer reads the raw expression and produces a stream of tokens, each
/// corresponding to a meaningful element: identifiers, integer literals,
/// operators, and brackets. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte offsets.
/// - Skips whitespace between tokens.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs a tree that encodes operator precedence and associativity,
/// with one descent level per precedence tier.
///
/// # Responsibilities
/// - Converts tokens into structured [`crate::ast::Expr`] nodes.
/// - Validates grammar, reporting errors with offset info.
/// - Rejects trailing tokens after a complete expression.
pub mod parser;
/// The symbols module holds the variable state for one expression.
///
/// This module declares the scalar and array symbol types, discovers symbols
/// from expression text, and loads their values from a line-oriented value
/// source.
///
/// # Responsibilities
/// - Defines `ScalarSymbol`, `ArraySymbol`, and the owning `SymbolTable`.
/// - Discovers each distinct variable name exactly once.
/// - Parses `name value` and `name length (idx,val)` assignment lines.
pub mod symbols;
