//! `rat`: convert each argument to a rat, one pipeline stage per argument.

use rill_eval::{
    run_pipeline, run_top_level, EvalContext, EvalCtx, EvalError, NoExternalCommands, OutputPort,
    Stage, Value,
};
use rill_value::to_rat;

use super::pipeline_mode;

fn to_rat_builtin(ctx: &mut dyn EvalContext, args: &[Value]) -> Result<(), EvalError> {
    for arg in args {
        ctx.output(Value::rat(to_rat(arg)?));
    }
    Ok(())
}

/// Run `to-rat <text>` for every text as the stages of one pipeline.
///
/// Results are printed in argument order. A failing stage does not stop the
/// others; the pipeline's error is reported after all output.
pub fn rat_command(texts: &[String], out: &mut Vec<String>) -> Result<(), String> {
    let resolver = NoExternalCommands;
    let mut ctx = EvalCtx::new(&resolver, pipeline_mode(), OutputPort::buffer());
    let to_rat = Value::builtin("to-rat", to_rat_builtin);
    let stages = texts
        .iter()
        .map(|text| Stage::new(to_rat.clone(), vec![Value::string(text.as_str())]))
        .collect();

    let report = run_top_level(run_pipeline(&mut ctx, stages));
    out.extend(ctx.take_output().iter().map(Value::repr));
    match report.diagnostic {
        None => Ok(()),
        Some(diagnostic) => Err(diagnostic),
    }
}
