//! Callable values: closures, builtins and external commands.
//!
//! The core never looks inside an operation tree. It stores the `OpHandle`
//! a closure was built with and hands it back to the evaluator, which runs
//! it against an `EvalContext`.

use std::fmt;

use rustc_hash::FxHashMap;

use super::heap::Heap;
use super::{Value, Variable};
use crate::errors::EvalError;

/// Prefix of the builtin function namespace: `echo` is `$fn-echo`.
pub const FN_PREFIX: &str = "fn-";

/// What native code and operation trees see of the evaluator.
pub trait EvalContext {
    /// Send a value to the output port.
    fn output(&mut self, value: Value);

    /// Resolve a variable to its shared cell.
    fn lookup(&self, name: &str) -> Option<Variable>;

    /// Bind a fresh cell in the innermost scope.
    fn define(&mut self, name: &str, value: Value) -> Variable;

    /// Call any callable value.
    fn call(&mut self, callee: &Value, args: Vec<Value>) -> Result<(), EvalError>;
}

/// A pre-built operation tree.
pub trait Op: Send + Sync + fmt::Debug {
    fn exec(&self, ctx: &mut dyn EvalContext) -> Result<(), EvalError>;
}

/// Shared handle to an operation tree.
#[derive(Clone)]
pub struct OpHandle(Heap<dyn Op>);

impl OpHandle {
    #[expect(
        clippy::disallowed_types,
        reason = "unsized coercion to dyn Op needs the Arc directly"
    )]
    pub fn new(op: impl Op + 'static) -> Self {
        let op: std::sync::Arc<dyn Op> = std::sync::Arc::new(op);
        OpHandle(Heap(op))
    }

    /// Run the tree.
    #[inline]
    pub fn exec(&self, ctx: &mut dyn EvalContext) -> Result<(), EvalError> {
        self.0.exec(ctx)
    }

    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Heap::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Debug for OpHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpHandle({:?})", &*self.0)
    }
}

/// A user-defined function with its captured cells.
#[derive(Clone, Debug)]
pub struct Closure {
    /// Parameter names in order. With `variadic`, the last one absorbs the
    /// remaining arguments as a list.
    pub params: Vec<String>,
    pub variadic: bool,
    pub op: OpHandle,
    /// Free variables of the body, mapped to the enclosing scope's cells.
    pub captured: FxHashMap<String, Variable>,
}

impl Closure {
    pub fn new(
        params: Vec<String>,
        variadic: bool,
        op: OpHandle,
        captured: FxHashMap<String, Variable>,
    ) -> Self {
        Closure {
            params,
            variadic,
            op,
            captured,
        }
    }

    /// Number of arguments that must be passed.
    pub fn required_args(&self) -> usize {
        if self.variadic {
            self.params.len().saturating_sub(1)
        } else {
            self.params.len()
        }
    }

    /// `<closure (a b @rest)>`.
    pub fn repr(&self) -> String {
        let last = self.params.len().saturating_sub(1);
        let params: Vec<String> = self
            .params
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if self.variadic && i == last {
                    format!("@{name}")
                } else {
                    name.clone()
                }
            })
            .collect();
        format!("<closure ({})>", params.join(" "))
    }
}

/// Native implementation of a builtin.
pub type BuiltinImpl = fn(&mut dyn EvalContext, &[Value]) -> Result<(), EvalError>;

/// A builtin function.
#[derive(Clone)]
pub struct BuiltinFn {
    pub name: String,
    pub imp: BuiltinImpl,
}

impl BuiltinFn {
    pub fn new(name: impl Into<String>, imp: BuiltinImpl) -> Self {
        BuiltinFn {
            name: name.into(),
            imp,
        }
    }

    /// Invoke the native implementation.
    #[inline]
    pub fn invoke(&self, ctx: &mut dyn EvalContext, args: &[Value]) -> Result<(), EvalError> {
        (self.imp)(ctx, args)
    }

    /// `$fn-<name>`.
    pub fn repr(&self) -> String {
        format!("${FN_PREFIX}{}", self.name)
    }
}

impl fmt::Debug for BuiltinFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinFn")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An external command, resolved by name when called.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExternalCmd {
    pub name: String,
}

impl ExternalCmd {
    pub fn new(name: impl Into<String>) -> Self {
        ExternalCmd { name: name.into() }
    }

    pub fn repr(&self) -> String {
        format!("<external {} >", self.name)
    }
}
