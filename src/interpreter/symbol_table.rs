use std::collections::HashMap;

/// Stores the variable bindings available to the parser.
///
/// The table maps variable names to integer values. It is owned by the
/// active [`Interpreter`](crate::interpreter::parser::Interpreter) and lives
/// exactly as long as that parser does; re-running `format` on a session
/// replaces the parser and therefore discards every binding.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    bindings: HashMap<String, i64>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the value bound to `name`.
    ///
    /// An unbound name deterministically resolves to `0`; the parser never
    /// fails on an unknown variable.
    ///
    /// ## Example
    /// ```
    /// use extree::interpreter::symbol_table::SymbolTable;
    ///
    /// let mut table = SymbolTable::new();
    /// table.set("x", 10);
    ///
    /// assert_eq!(table.get("x"), 10);
    /// assert_eq!(table.get("never_bound"), 0);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> i64 {
        self.bindings.get(name).copied().unwrap_or(0)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: i64) {
        self.bindings.insert(name.to_string(), value);
    }
}
