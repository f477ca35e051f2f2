//! User-defined function storage.

use rustc_hash::FxHashMap;

/// A stored function: ordered parameter names plus raw body lines.
///
/// Body lines are kept unparsed; they are re-tokenized on every
/// invocation so each execution sees the live environment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FunctionDef {
    /// Positional parameter names, in declaration order.
    pub params: Vec<String>,
    /// Raw source lines of the body, terminator excluded.
    pub body: Vec<String>,
}

/// All defined functions for the session: name to definition.
///
/// Redefining a name overwrites the prior definition; definitions are
/// never deleted.
#[derive(Clone, Debug, Default)]
pub struct FunctionTable {
    funcs: FxHashMap<String, FunctionDef>,
}

impl FunctionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        FunctionTable {
            funcs: FxHashMap::default(),
        }
    }

    /// Store a definition, overwriting any prior one with the same name.
    pub fn define(&mut self, name: impl Into<String>, def: FunctionDef) {
        self.funcs.insert(name.into(), def);
    }

    /// Look up a definition by name.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&FunctionDef> {
        self.funcs.get(name)
    }

    /// Whether a function with this name is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.funcs.contains_key(name)
    }

    /// Number of defined functions.
    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    /// Whether no functions are defined.
    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }
}

#[cfg(test)]
mod tests;
