/// A named scalar variable and its value.
///
/// Scalars are created during symbol discovery with value 0 and set once
/// when values are loaded. Identity is the name alone: two `ScalarSymbol`s
/// compare equal whenever their names match, regardless of value.
#[derive(Debug, Clone, Eq)]
pub struct ScalarSymbol {
    /// The variable name (letters only).
    pub name:  String,
    /// The current value; 0 until loaded.
    pub value: i64,
}

impl PartialEq for ScalarSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl std::fmt::Display for ScalarSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// A named array variable and its values.
///
/// Arrays are created during symbol discovery with no storage; loading
/// allocates the declared length with every slot 0, then fills the slots
/// named by `(idx,val)` pairs. Identity is the name alone, as for
/// [`ScalarSymbol`].
#[derive(Debug, Clone, Eq)]
pub struct ArraySymbol {
    /// The array name (letters only).
    pub name:   String,
    /// The element values; empty until loaded.
    pub values: Vec<i64>,
}

impl PartialEq for ArraySymbol {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl std::fmt::Display for ArraySymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {:?}", self.name, self.values)
    }
}

/// Holds every variable discovered in one expression.
///
/// The table keeps scalars and arrays separately because the same spelling
/// is allowed to name both (`a + a[1]`): an occurrence immediately followed
/// by `[` is an array access, any other occurrence is a scalar.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    scalars: Vec<ScalarSymbol>,
    arrays:  Vec<ArraySymbol>,
}

impl SymbolTable {
    /// Discovers every variable name in an expression.
    ///
    /// Scans left to right; every maximal run of letters is a candidate
    /// name. A name immediately followed by `[` is an array variable,
    /// otherwise a scalar. Each distinct name yields exactly one symbol no
    /// matter how often it appears; the first occurrence decides the
    /// insertion order. Scalars start at 0, arrays start empty.
    ///
    /// # Parameters
    /// - `expr`: The raw expression text.
    ///
    /// # Returns
    /// A table holding one symbol per distinct name.
    ///
    /// # Example
    /// ```
    /// use arrex::interpreter::symbols::table::SymbolTable;
    ///
    /// let table = SymbolTable::discover("a+arr[b]+a");
    /// assert_eq!(table.scalars().len(), 2);
    /// assert_eq!(table.arrays().len(), 1);
    /// assert_eq!(table.arrays()[0].name, "arr");
    /// ```
    #[must_use]
    pub fn discover(expr: &str) -> Self {
        let mut table = Self::default();
        let mut chars = expr.chars().peekable();

        while let Some(c) = chars.next() {
            if !c.is_ascii_alphabetic() {
                continue;
            }

            let mut name = String::from(c);
            while let Some(&next) = chars.peek()
                  && next.is_ascii_alphabetic()
            {
                name.push(next);
                chars.next();
            }

            if chars.peek() == Some(&'[') {
                table.insert_array(name);
            } else {
                table.insert_scalar(name);
            }
        }

        table
    }

    /// The discovered scalar symbols, in first-occurrence order.
    #[must_use]
    pub fn scalars(&self) -> &[ScalarSymbol] {
        &self.scalars
    }

    /// The discovered array symbols, in first-occurrence order.
    #[must_use]
    pub fn arrays(&self) -> &[ArraySymbol] {
        &self.arrays
    }

    /// Looks up a scalar symbol by exact name match.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<&ScalarSymbol> {
        self.scalars.iter().find(|s| s.name == name)
    }

    /// Looks up an array symbol by exact name match.
    #[must_use]
    pub fn array(&self, name: &str) -> Option<&ArraySymbol> {
        self.arrays.iter().find(|a| a.name == name)
    }

    pub(in crate::interpreter::symbols) fn scalar_mut(&mut self,
                                                      name: &str)
                                                      -> Option<&mut ScalarSymbol> {
        self.scalars.iter_mut().find(|s| s.name == name)
    }

    pub(in crate::interpreter::symbols) fn array_mut(&mut self,
                                                     name: &str)
                                                     -> Option<&mut ArraySymbol> {
        self.arrays.iter_mut().find(|a| a.name == name)
    }

    fn insert_scalar(&mut self, name: String) {
        if self.scalar(&name).is_none() {
            self.scalars.push(ScalarSymbol { name, value: 0 });
        }
    }

    fn insert_array(&mut self, name: String) {
        if self.array(&name).is_none() {
            self.arrays.push(ArraySymbol { name, values: Vec::new() });
        }
    }
}
