/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss. Use these helpers
/// whenever a stored `i64` symbol value must enter `f64` arithmetic, or an
/// `f64` subscript must become an array index.
pub mod num;
