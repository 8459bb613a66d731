//! Rill Eval - evaluator seams of the rill shell.
//!
//! This crate sits between the value core and a front end that owns the
//! operation trees. It provides:
//!
//! - `Environment`: a scope stack of shared variable cells
//! - `EvalCtx`: the `EvalContext` the trees and builtins run against
//! - `exec::call`: closure creation and calls of any callable
//! - `exec::control`: catch points for `break`/`continue` and `return`
//! - `exec::pipeline`: running stages and aggregating their errors
//! - `run_top_level`: the outermost catch point, reporting escaped signals
//!
//! # Re-exports
//!
//! The value types a front end needs are re-exported from `rill_value`:
//! `Value`, `Variable`, `EvalError`, `ErrorValue`, `Op`, `OpHandle`,
//! `EvalContext`, `Span`.

mod context;
mod environment;
mod eval_mode;
pub mod exec;
mod output_port;
mod top_level;

// Re-export value types from rill_value
pub use rill_value::{
    ControlFlow, ErrorValue, EvalContext, EvalError, EvalErrorKind, Op, OpHandle, Span, Value,
    Variable,
};

pub use context::{CommandResolver, EvalCtx, NoExternalCommands};
pub use environment::{Environment, Scope};
pub use eval_mode::PipelineMode;
pub use exec::{
    aggregate, call, catch_return, eval_for, eval_index, eval_loop, make_closure, run_pipeline,
    to_loop_action, LoopAction, Stage,
};
pub use output_port::OutputPort;
pub use top_level::{run_top_level, Report};
