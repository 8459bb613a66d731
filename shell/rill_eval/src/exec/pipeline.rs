//! Pipelines: run every stage, then aggregate their errors.
//!
//! A failing stage never aborts its siblings. Each stage completes with one
//! `ErrorValue`; results are gathered in declaration order no matter which
//! stage finishes first, and the stages' output is forwarded in that same
//! order.

use rayon::prelude::*;

use rill_value::{allok, EvalContext, ErrorValue, EvalError, Value};

use super::call::call;
use crate::context::EvalCtx;

/// One stage: a callable and its arguments.
#[derive(Clone, Debug)]
pub struct Stage {
    pub callee: Value,
    pub args: Vec<Value>,
}

impl Stage {
    pub fn new(callee: Value, args: Vec<Value>) -> Self {
        Stage { callee, args }
    }
}

/// Run all stages and aggregate their outcomes.
///
/// Stages run on the rayon pool in `PipelineMode::Parallel`, in order
/// otherwise. See [`aggregate`] for the result.
#[tracing::instrument(level = "debug", skip_all, fields(stages = stages.len(), mode = ctx.mode().name()))]
pub fn run_pipeline(ctx: &mut EvalCtx<'_>, stages: Vec<Stage>) -> Result<(), EvalError> {
    let outcomes: Vec<(ErrorValue, Vec<Value>)> = if ctx.mode().is_parallel() {
        let parent: &EvalCtx<'_> = ctx;
        stages
            .into_par_iter()
            .map(|stage| run_stage(parent.fork(), stage))
            .collect()
    } else {
        stages
            .into_iter()
            .map(|stage| run_stage(ctx.fork(), stage))
            .collect()
    };

    let mut errors = Vec::with_capacity(outcomes.len());
    for (error, output) in outcomes {
        for value in output {
            ctx.output(value);
        }
        errors.push(error);
    }
    aggregate(errors)
}

fn run_stage(mut ctx: EvalCtx<'_>, stage: Stage) -> (ErrorValue, Vec<Value>) {
    let result = call(&mut ctx, &stage.callee, stage.args);
    if let Err(err) = &result {
        tracing::debug!(error = %err, "pipeline stage failed");
    }
    (ErrorValue::from_result(result), ctx.take_output())
}

/// Fold per-stage results into the pipeline's result.
///
/// A lone stage's error is returned as is, so flow signals raised by a
/// single command still reach their catch point. With two or more stages,
/// any failure yields a multi-error holding every stage's result.
pub fn aggregate(errors: Vec<ErrorValue>) -> Result<(), EvalError> {
    if let [only] = errors.as_slice() {
        return only.to_result();
    }
    if allok(&errors) {
        Ok(())
    } else {
        Err(EvalError::multi(errors))
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
