//! Rill Value - the value model of the rill shell.
//!
//! This crate provides:
//! - Runtime values (`Value`) and the protocol every variant answers:
//!   `kind`, `repr`, and the optional string and boolean forms
//! - Shared containers with reference identity (`List`, `Map`) and shared
//!   variable cells (`Variable`) for closure capture
//! - The indexing protocol (`index`, `index_set`)
//! - Conversions (`to_string`, `to_bool`, `to_rat`, `deep_equal`) and JSON
//!   import
//! - Evaluation errors (`EvalError`) and the `return`/`break`/`continue`
//!   signals that travel on the same channel
//!
//! # Allocation
//!
//! All heap allocations go through `Value::` factory methods. The `Heap<T>`
//! and `Shared<T>` wrappers cannot be constructed outside the value module.

mod convert;
mod errors;
mod index;
mod json;
mod quote;
mod value;

pub use convert::{all_true, deep_equal, to_bool, to_rat, to_string};
pub use errors::{ControlFlow, EvalError, EvalErrorKind, EvalResult, Span};
pub use index::{index, index_set, int_index, normalize_index, parse_int_index};
pub use json::{from_json, from_json_text};
pub use quote::quote;
pub use value::{
    allok, BuiltinFn, BuiltinImpl, Closure, ErrorValue, EvalContext, ExternalCmd, Heap,
    ListStorage, MapStorage, Op, OpHandle, Rat, Shared, Value, Variable, FN_PREFIX, MAX_EXPONENT,
};

// Re-export error constructors for use by other crates
pub use errors::{
    // Call errors
    arity_mismatch,
    // Glob errors
    bad_wildcard,
    // Indexing errors
    cannot_be_indexed,
    external_failed,
    generic_failure,
    index_out_of_range,
    invalid_index,
    need_int_index,
    no_such_key,
    not_callable,
    // Conversion errors
    only_str_or_rat,
    parse_failure,
    undefined_variable,
    unexpected_json_type,
};
