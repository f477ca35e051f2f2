//! Variable bindings for the interpreter.

use rustc_hash::FxHashMap;

/// The visible variable bindings: name to integer value.
///
/// One flat map. No shadowing stack and no block scope: a variable is
/// either absent or bound to exactly one value. Function calls take a
/// whole-map [`snapshot`](Env::snapshot) on entry and the dispatcher
/// [`restore`](Env::restore)s it on exit (dynamic value-copy scoping).
#[derive(Clone, Debug, Default)]
pub struct Env {
    vars: FxHashMap<String, i64>,
}

/// A saved copy of the environment, taken around a function call.
#[derive(Clone, Debug)]
pub struct EnvSnapshot(FxHashMap<String, i64>);

impl Env {
    /// Create an empty environment.
    pub fn new() -> Self {
        Env {
            vars: FxHashMap::default(),
        }
    }

    /// Bind or overwrite a variable.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: i64) {
        self.vars.insert(name.into(), value);
    }

    /// Look up a variable by name.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<i64> {
        self.vars.get(name).copied()
    }

    /// Whether a variable is currently bound.
    #[inline]
    pub fn is_defined(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no variables are bound.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Copy the current bindings for later [`restore`](Env::restore).
    #[must_use]
    pub fn snapshot(&self) -> EnvSnapshot {
        EnvSnapshot(self.vars.clone())
    }

    /// Replace all bindings with a previously taken snapshot.
    pub fn restore(&mut self, snapshot: EnvSnapshot) {
        self.vars = snapshot.0;
    }
}

#[cfg(test)]
mod tests;
