//! Runtime values of the shell language.
//!
//! # Allocation
//!
//! Every non-scalar variant holds a `Heap<T>` (shared, immutable) or a
//! `Shared<T>` (shared, mutable under a lock). Both constructors are private
//! to this module, so values are only ever built through the factory methods
//! on `Value`:
//!
//! ```text
//! let s = Value::string("hello");            // OK
//! let l = Value::list(vec![s.clone()]);      // OK
//! let l = Value::List(Shared::new(vec![]));  // ERROR: Shared::new is pub(super)
//! ```
//!
//! # Identity
//!
//! Lists and maps are referenced by identity: cloning a `Value::List` aliases
//! the same storage, and a mutation through one clone is visible through all.
//! Equality, on the other hand, is structural (see [`deep_equal`]).
//!
//! [`deep_equal`]: crate::deep_equal

mod callable;
mod error_value;
mod heap;
mod rat;
mod variable;

use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashMap, FxHasher};

use crate::convert::{deep_equal, to_string};
use crate::errors::EvalError;
use crate::quote::quote;

pub use callable::{
    BuiltinFn, BuiltinImpl, Closure, EvalContext, ExternalCmd, Op, OpHandle, FN_PREFIX,
};
pub use error_value::{allok, ErrorValue};
pub use heap::{Heap, Shared};
pub use rat::{Rat, MAX_EXPONENT};
pub use variable::Variable;

/// Storage of a list value.
pub type ListStorage = Shared<Vec<Value>>;

/// Storage of a map value.
pub type MapStorage = Shared<FxHashMap<Value, Value>>;

/// A value of the shell language.
#[derive(Clone)]
pub enum Value {
    // Scalars
    /// Immutable text.
    String(Heap<String>),
    Bool(bool),
    /// Success or an error, including flow signals and multi-errors.
    Error(ErrorValue),
    /// Arbitrary-precision rational.
    Rat(Heap<Rat>),

    // Containers (shared, mutable, referenced by identity)
    List(ListStorage),
    Map(MapStorage),

    // Callables
    Closure(Heap<Closure>),
    BuiltinFn(Heap<BuiltinFn>),
    ExternalCmd(Heap<ExternalCmd>),

    /// Ephemeral, lives only while one wildcard word is expanded.
    GlobPattern(Heap<rill_glob::Pattern>),
}

// Factory methods
impl Value {
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Heap::new(s.into()))
    }

    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    /// A new list. The storage is fresh; no other value aliases it.
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Shared::new(items))
    }

    /// A new empty map.
    pub fn map() -> Self {
        Value::Map(Shared::new(FxHashMap::default()))
    }

    /// A new map with the given entries. Later duplicates win.
    pub fn map_from(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Value::Map(Shared::new(entries.into_iter().collect()))
    }

    pub fn closure(closure: Closure) -> Self {
        Value::Closure(Heap::new(closure))
    }

    pub fn builtin(name: impl Into<String>, imp: BuiltinImpl) -> Self {
        Value::BuiltinFn(Heap::new(BuiltinFn::new(name, imp)))
    }

    pub fn external(name: impl Into<String>) -> Self {
        Value::ExternalCmd(Heap::new(ExternalCmd::new(name)))
    }

    pub fn rat(rat: Rat) -> Self {
        Value::Rat(Heap::new(rat))
    }

    #[inline]
    pub fn error(err: ErrorValue) -> Self {
        Value::Error(err)
    }

    /// The success error value, `$ok`.
    #[inline]
    pub fn ok() -> Self {
        Value::Error(ErrorValue::OK)
    }

    /// An error value wrapping `err`.
    pub fn from_eval_error(err: EvalError) -> Self {
        Value::Error(ErrorValue::from_error(err))
    }

    pub fn multi_error(errors: Vec<ErrorValue>) -> Self {
        Value::Error(ErrorValue::multi(errors))
    }

    pub fn glob_pattern(pattern: rill_glob::Pattern) -> Self {
        Value::GlobPattern(Heap::new(pattern))
    }
}

// Protocol
impl Value {
    /// Stable lowercase tag of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            // A rat is a kind of string in the language.
            Value::String(_) | Value::Rat(_) => "string",
            Value::Bool(_) => "bool",
            Value::Error(_) => "error",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Closure(_) | Value::BuiltinFn(_) | Value::ExternalCmd(_) => "fn",
            Value::GlobPattern(_) => "glob-pattern",
        }
    }

    /// Canonical, re-parseable text.
    pub fn repr(&self) -> String {
        match self {
            Value::String(s) => quote(s),
            Value::Bool(true) => "$true".to_string(),
            Value::Bool(false) => "$false".to_string(),
            Value::Error(e) => e.repr(),
            Value::Rat(r) => r.repr(),
            Value::List(items) => {
                let items = items.read();
                let parts: Vec<String> = items.iter().map(Value::repr).collect();
                format!("[{}]", parts.join(" "))
            }
            Value::Map(entries) => {
                let entries = entries.read();
                if entries.is_empty() {
                    return "[&]".to_string();
                }
                let mut parts: Vec<(String, String)> = entries
                    .iter()
                    .map(|(k, v)| (k.repr(), v.repr()))
                    .collect();
                parts.sort();
                let parts: Vec<String> = parts
                    .into_iter()
                    .map(|(k, v)| format!("&{k} {v}"))
                    .collect();
                format!("[{}]", parts.join(" "))
            }
            Value::Closure(c) => c.repr(),
            Value::BuiltinFn(b) => b.repr(),
            Value::ExternalCmd(e) => e.repr(),
            Value::GlobPattern(p) => format!("<glob-pattern {p}>"),
        }
    }

    /// The variant's own string form, if it has one.
    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(String::clone(s)),
            Value::Bool(b) => Some(b.to_string()),
            Value::Error(e) => Some(e.as_string()),
            Value::Rat(r) => Some(r.as_string()),
            _ => None,
        }
    }

    /// The variant's own truthiness, if it has one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Error(e) => Some(e.as_bool()),
            _ => None,
        }
    }
}

// Accessors
impl Value {
    /// The text of a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListStorage> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&MapStorage> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&ErrorValue> {
        match self {
            Value::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Code points of a string, elements of a list, entries of a map.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.chars().count()),
            Value::List(items) => Some(items.read().len()),
            Value::Map(entries) => Some(entries.read().len()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> Option<bool> {
        self.len().map(|n| n == 0)
    }

    /// Snapshot of a list's elements.
    pub fn to_vec(&self) -> Option<Vec<Value>> {
        self.as_list().map(|items| items.read().clone())
    }

    /// Append one element to a list in place.
    pub fn push(&self, value: Value) -> Result<(), EvalError> {
        let items = self.list_storage()?;
        items.write().push(value);
        Ok(())
    }

    /// Append strings to a list in place, as command substitution does.
    pub fn append_strings<I>(&self, strings: I) -> Result<(), EvalError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let items = self.list_storage()?;
        let new: Vec<Value> = strings.into_iter().map(Value::string).collect();
        items.write().extend(new);
        Ok(())
    }

    fn list_storage(&self) -> Result<&ListStorage, EvalError> {
        self.as_list()
            .ok_or_else(|| EvalError::new(format!("{} value is not a list", self.kind())))
    }

    /// Whether two values share storage.
    ///
    /// Scalars without storage (`Bool`, success errors) never alias.
    pub fn same_ref(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::List(a), Value::List(b)) => Shared::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Shared::ptr_eq(a, b),
            (Value::String(a), Value::String(b)) => Heap::ptr_eq(a, b),
            (Value::Closure(a), Value::Closure(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<ErrorValue> for Value {
    fn from(err: ErrorValue) -> Self {
        Value::Error(err)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        deep_equal(self, other)
    }
}

impl Eq for Value {}

/// Hash consistent with [`deep_equal`]: equal values hash equally.
///
/// Containers hash their contents, so a list or map used as a map key must
/// not be mutated while it is one.
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::String(s) => s.hash(state),
            Value::Bool(b) => b.hash(state),
            Value::Error(e) => e.repr().hash(state),
            Value::Rat(r) => r.hash(state),
            Value::List(items) => {
                let items = items.read();
                items.len().hash(state);
                for item in items.iter() {
                    item.hash(state);
                }
            }
            Value::Map(entries) => {
                let entries = entries.read();
                let mut entry_hashes: Vec<u64> = entries
                    .iter()
                    .map(|entry| {
                        let mut hasher = FxHasher::default();
                        entry.hash(&mut hasher);
                        hasher.finish()
                    })
                    .collect();
                entry_hashes.sort_unstable();
                entry_hashes.len().hash(state);
                entry_hashes.hash(state);
            }
            Value::Closure(c) => c.addr().hash(state),
            Value::BuiltinFn(b) => b.name.hash(state),
            Value::ExternalCmd(e) => e.hash(state),
            Value::GlobPattern(p) => p.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_string(self))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
