//! Execution seams of the evaluator.
//!
//! - `call`: closure creation and invocation of any callable
//! - `control`: loop and closure catch points for flow signals
//! - `pipeline`: running stages and aggregating their errors
//! - `index`: position-tagged indexing

pub mod call;
pub mod control;
pub mod index;
pub mod pipeline;

pub use call::{call, make_closure};
pub use control::{catch_return, eval_for, eval_loop, to_loop_action, LoopAction};
pub use index::eval_index;
pub use pipeline::{aggregate, run_pipeline, Stage};
