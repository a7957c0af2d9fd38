/// Value loading from a line-oriented value source.
///
/// Parses `name value` and `name length (idx,val) ...` assignment lines and
/// applies them to a discovered symbol table.
pub mod load;

/// Symbol types and discovery.
///
/// Defines `ScalarSymbol`, `ArraySymbol`, and the `SymbolTable` that owns
/// them, plus the scan that discovers every distinct variable name in an
/// expression.
pub mod table;
