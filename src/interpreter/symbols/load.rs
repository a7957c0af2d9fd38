use crate::{error::FormatError, interpreter::symbols::table::SymbolTable};

impl SymbolTable {
    /// Loads symbol values from the lines of a value source.
    ///
    /// Each line is whitespace-tokenized into fields. A line whose first
    /// field names a discovered scalar and which has exactly two fields sets
    /// that scalar's value. Any other line naming a discovered array is an
    /// array assignment: the second field declares the length, and every
    /// remaining field is an `(idx,val)` pair filling one slot; unspecified
    /// slots stay 0. Blank lines and lines naming unknown symbols are
    /// ignored.
    ///
    /// Re-loading is permitted and overwrites previous values, so one table
    /// can be pointed at successive value sources.
    ///
    /// # Parameters
    /// - `lines`: The value-source lines, in order.
    ///
    /// # Errors
    /// Returns a [`FormatError`] carrying the 1-based line number if a line
    /// naming a known symbol cannot be parsed into the expected shape:
    /// non-numeric fields, a missing value or length, a malformed pair, a
    /// pair index outside the declared length, or extra fields after a
    /// scalar value.
    ///
    /// # Example
    /// ```
    /// use arrex::interpreter::symbols::table::SymbolTable;
    ///
    /// let mut table = SymbolTable::discover("a+arr[0]");
    /// table.load_values(["a 3", "arr 2 (0,7)", "ignored 99"]).unwrap();
    ///
    /// assert_eq!(table.scalar("a").unwrap().value, 3);
    /// assert_eq!(table.array("arr").unwrap().values, vec![7, 0]);
    /// ```
    pub fn load_values<I, S>(&mut self, lines: I) -> Result<(), FormatError>
        where I: IntoIterator<Item = S>,
              S: AsRef<str>
    {
        for (index, line) in lines.into_iter().enumerate() {
            self.load_line(line.as_ref(), index + 1)?;
        }
        Ok(())
    }

    /// Applies one value-source line to the table.
    ///
    /// Scalar assignment wins when the line has exactly two fields and the
    /// name is a known scalar; otherwise a known array name makes the line
    /// an array assignment. A known scalar with any other field count is a
    /// format error rather than a silent no-op.
    fn load_line(&mut self, line: &str, number: usize) -> Result<(), FormatError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let Some(&name) = fields.first() else {
            return Ok(());
        };

        let is_scalar = self.scalar(name).is_some();
        let is_array = self.array(name).is_some();
        if !is_scalar && !is_array {
            return Ok(());
        }

        if is_scalar && fields.len() == 2 {
            let value = parse_number(fields[1], number)?;
            if let Some(symbol) = self.scalar_mut(name) {
                symbol.value = value;
            }
            return Ok(());
        }

        if is_array {
            let Some(&length_field) = fields.get(1) else {
                return Err(FormatError::MissingField { line: number });
            };
            let length = parse_length(length_field, number)?;

            let mut values = vec![0i64; length];
            for &field in &fields[2..] {
                let (index, value) = parse_pair(field, number)?;
                if index >= length {
                    return Err(FormatError::PairOutOfRange { index,
                                                             length,
                                                             line: number, });
                }
                values[index] = value;
            }

            if let Some(symbol) = self.array_mut(name) {
                symbol.values = values;
            }
            return Ok(());
        }

        // A known scalar with the wrong field count.
        match fields.get(2) {
            Some(&extra) => Err(FormatError::TrailingTokens { token: extra.to_string(),
                                                              line:  number, }),
            None => Err(FormatError::MissingField { line: number }),
        }
    }
}

/// Parses a signed value field.
fn parse_number(field: &str, line: usize) -> Result<i64, FormatError> {
    field.parse()
         .map_err(|_| FormatError::ExpectedNumber { token: field.to_string(),
                                                    line })
}

/// Parses a length field; lengths are non-negative.
fn parse_length(field: &str, line: usize) -> Result<usize, FormatError> {
    field.parse()
         .map_err(|_| FormatError::ExpectedNumber { token: field.to_string(),
                                                    line })
}

/// Splits one `(idx,val)` field into its index and value.
///
/// The surrounding parentheses are optional noise as far as parsing is
/// concerned; `2,10` is accepted the same as `(2,10)`.
fn parse_pair(field: &str, line: usize) -> Result<(usize, i64), FormatError> {
    let inner = field.trim_start_matches('(').trim_end_matches(')');
    let mut parts = inner.split(',');

    let (Some(index), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(FormatError::MalformedPair { token: field.to_string(),
                                                line });
    };

    Ok((parse_length(index, line)?, parse_number(value, line)?))
}
