//! Environment for variable scoping in the evaluator.
//!
//! Uses a scope stack. Every binding is a shared `Variable` cell, so a
//! closure that captures a name holds the very cell the enclosing scope
//! writes to.

use rustc_hash::FxHashMap;

use rill_value::{undefined_variable, EvalError, Value, Variable};

/// A single scope: names bound to cells.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Variable>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    /// Bind `name` to a fresh cell holding `value`.
    #[inline]
    pub fn define(&mut self, name: &str, value: Value) -> Variable {
        let cell = Variable::new(value);
        self.bindings.insert(name.to_string(), cell.clone());
        cell
    }

    /// Bind `name` to an existing cell.
    #[inline]
    pub fn bind(&mut self, name: &str, cell: Variable) {
        self.bindings.insert(name.to_string(), cell);
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Variable> {
        self.bindings.get(name)
    }
}

/// Stack of scopes, innermost last. The bottom scope is global.
#[derive(Clone, Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Environment {
    /// Create a new environment with an empty global scope.
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::new()],
        }
    }

    /// Get the current scope depth.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    #[inline]
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Pop the innermost scope. The global scope is never popped.
    #[inline]
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    fn current_mut(&mut self) -> &mut Scope {
        if self.scopes.is_empty() {
            self.scopes.push(Scope::new());
        }
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }

    /// Define a variable in the innermost scope, shadowing outer ones.
    #[inline]
    pub fn define(&mut self, name: &str, value: Value) -> Variable {
        self.current_mut().define(name, value)
    }

    /// Bind an existing cell in the innermost scope.
    #[inline]
    pub fn bind(&mut self, name: &str, cell: Variable) {
        self.current_mut().bind(name, cell);
    }

    /// Resolve a name to its cell, innermost scope first.
    pub fn lookup(&self, name: &str) -> Option<Variable> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.lookup(name))
            .cloned()
    }

    /// Collect the cells of a closure's free variables.
    ///
    /// The result aliases the cells of this environment; nothing is copied.
    pub fn capture<S: AsRef<str>>(
        &self,
        free_names: &[S],
    ) -> Result<FxHashMap<String, Variable>, EvalError> {
        free_names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.lookup(name)
                    .map(|cell| (name.to_string(), cell))
                    .ok_or_else(|| undefined_variable(name))
            })
            .collect()
    }

    /// Environment for running a closure body.
    ///
    /// Shares the global scope's cells, then adds one scope with the
    /// captured cells; parameters go in a scope above that.
    #[must_use]
    pub fn closure_env(&self, captured: &FxHashMap<String, Variable>) -> Self {
        let global = self.scopes.first().cloned().unwrap_or_default();
        let mut captures = Scope::new();
        for (name, cell) in captured {
            captures.bind(name, cell.clone());
        }
        Environment {
            scopes: vec![global, captures, Scope::new()],
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
