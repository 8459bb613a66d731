//! Variable cells.

use std::fmt;

use super::heap::Shared;
use super::Value;

/// A shared, mutable variable cell.
///
/// Closures capture cells, not values: every clone of a `Variable` aliases
/// the same storage, so a write through any clone is seen by all of them.
#[derive(Clone)]
pub struct Variable(Shared<Value>);

impl Variable {
    /// Allocate a fresh cell holding `value`.
    pub fn new(value: Value) -> Self {
        Variable(Shared::new(value))
    }

    /// Current contents.
    #[inline]
    pub fn get(&self) -> Value {
        self.0.read().clone()
    }

    /// Replace the contents, returning the old value.
    #[inline]
    pub fn set(&self, value: Value) -> Value {
        std::mem::replace(&mut *self.0.write(), value)
    }

    /// Whether two handles alias the same cell.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Shared::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Variable({})", self.0.read().repr())
    }
}
