//! Catch points for flow signals.
//!
//! `break` and `continue` are caught at loop boundaries, `return` at
//! closure boundaries. Everything else passes through unchanged.

use rill_value::{ControlFlow, EvalError, Value};

/// What a loop does after its body raised an error.
#[derive(Debug, PartialEq, Eq)]
pub enum LoopAction {
    Continue,
    Break,
    Error(EvalError),
}

/// Classify an error raised by a loop body.
///
/// `return` is not a loop signal; it propagates to the enclosing closure.
pub fn to_loop_action(error: EvalError) -> LoopAction {
    match error.control_flow() {
        Some(ControlFlow::Continue) => LoopAction::Continue,
        Some(ControlFlow::Break) => LoopAction::Break,
        Some(ControlFlow::Return) | None => LoopAction::Error(error),
    }
}

/// Swallow a `return` raised by a closure body.
pub fn catch_return(result: Result<(), EvalError>) -> Result<(), EvalError> {
    match result {
        Err(err) if err.control_flow() == Some(ControlFlow::Return) => Ok(()),
        other => other,
    }
}

/// Run `body` once per item.
pub fn eval_for<I, F>(items: I, mut body: F) -> Result<(), EvalError>
where
    I: IntoIterator<Item = Value>,
    F: FnMut(Value) -> Result<(), EvalError>,
{
    for item in items {
        if let Err(err) = body(item) {
            match to_loop_action(err) {
                LoopAction::Continue => {}
                LoopAction::Break => break,
                LoopAction::Error(err) => return Err(err),
            }
        }
    }
    Ok(())
}

/// Run `body` while `cond` holds.
///
/// Flow signals raised by `cond` itself are not caught.
pub fn eval_loop<C, F>(mut cond: C, mut body: F) -> Result<(), EvalError>
where
    C: FnMut() -> Result<bool, EvalError>,
    F: FnMut() -> Result<(), EvalError>,
{
    while cond()? {
        if let Err(err) = body() {
            match to_loop_action(err) {
                LoopAction::Continue => {}
                LoopAction::Break => break,
                LoopAction::Error(err) => return Err(err),
            }
        }
    }
    Ok(())
}
