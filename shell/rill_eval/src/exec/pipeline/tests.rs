use super::*;
use pretty_assertions::assert_eq;
use std::time::Duration;

use rill_value::{generic_failure, to_string, EvalErrorKind};

use crate::context::NoExternalCommands;
use crate::eval_mode::PipelineMode;
use crate::output_port::OutputPort;

fn echo(ctx: &mut dyn EvalContext, args: &[Value]) -> Result<(), EvalError> {
    for arg in args {
        ctx.output(arg.clone());
    }
    Ok(())
}

fn fail(_ctx: &mut dyn EvalContext, args: &[Value]) -> Result<(), EvalError> {
    match args.first() {
        Some(msg) => Err(EvalError::new(to_string(msg))),
        None => Err(generic_failure()),
    }
}

/// Sleeps for the number of milliseconds in its first argument, then echoes.
fn slow_echo(ctx: &mut dyn EvalContext, args: &[Value]) -> Result<(), EvalError> {
    let millis: u64 = args
        .first()
        .map(to_string)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    std::thread::sleep(Duration::from_millis(millis));
    echo(ctx, &args[1..])
}

fn do_break(_ctx: &mut dyn EvalContext, _args: &[Value]) -> Result<(), EvalError> {
    Err(EvalError::break_signal())
}

fn stage(imp: rill_value::BuiltinImpl, args: &[&str]) -> Stage {
    Stage::new(
        Value::builtin("t", imp),
        args.iter().map(|a| Value::string(*a)).collect(),
    )
}

fn run(mode: PipelineMode, stages: Vec<Stage>) -> (Result<(), EvalError>, Vec<String>) {
    let resolver = NoExternalCommands;
    let mut ctx = EvalCtx::new(&resolver, mode, OutputPort::buffer());
    let result = run_pipeline(&mut ctx, stages);
    let out = ctx.take_output().iter().map(to_string).collect();
    (result, out)
}

#[test]
fn test_aggregate_rules() {
    assert_eq!(aggregate(vec![]), Ok(()));
    assert_eq!(aggregate(vec![ErrorValue::OK]), Ok(()));
    assert_eq!(
        aggregate(vec![ErrorValue::generic_failure()]),
        Err(generic_failure())
    );
    assert_eq!(aggregate(vec![ErrorValue::OK, ErrorValue::OK]), Ok(()));

    let err = aggregate(vec![ErrorValue::OK, ErrorValue::from_message("x")]).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::Multi { .. }));
    assert_eq!(err.sub_errors().len(), 2);
    assert!(err.sub_errors()[0].is_ok());
    assert_eq!(err.sub_errors()[1].as_string(), "x");
}

#[test]
fn test_single_stage_keeps_flow_signal() {
    for mode in [PipelineMode::Sequential, PipelineMode::Parallel] {
        let (result, _) = run(mode, vec![stage(do_break, &[])]);
        assert_eq!(result, Err(EvalError::break_signal()));
    }
}

#[test]
fn test_all_stages_run_despite_failure() {
    for mode in [PipelineMode::Sequential, PipelineMode::Parallel] {
        let (result, out) = run(
            mode,
            vec![
                stage(fail, &["first"]),
                stage(echo, &["a"]),
                stage(fail, &["third"]),
            ],
        );
        let err = result.unwrap_err();
        assert_eq!(err.message, "(first | third)");
        let subs: Vec<String> = err.sub_errors().iter().map(ErrorValue::repr).collect();
        assert_eq!(
            subs,
            vec!["?(error first)", "$ok", "?(error third)"]
        );
        assert_eq!(out, vec!["a"]);
    }
}

#[test]
fn test_all_ok_is_ok() {
    let (result, out) = run(
        PipelineMode::Parallel,
        vec![stage(echo, &["a", "b"]), stage(echo, &["c"])],
    );
    assert_eq!(result, Ok(()));
    assert_eq!(out, vec!["a", "b", "c"]);
}

#[test]
fn test_declaration_order_when_later_stage_finishes_first() {
    let (result, out) = run(
        PipelineMode::Parallel,
        vec![
            stage(slow_echo, &["80", "slow"]),
            stage(slow_echo, &["0", "fast"]),
        ],
    );
    assert_eq!(result, Ok(()));
    assert_eq!(out, vec!["slow", "fast"]);
}

#[test]
fn test_stage_errors_keep_declaration_order() {
    let (result, _) = run(
        PipelineMode::Parallel,
        vec![
            Stage::new(Value::builtin("slow", slow_fail), vec![]),
            stage(fail, &["fast"]),
        ],
    );
    let err = result.unwrap_err();
    assert_eq!(err.message, "(slow | fast)");
}

fn slow_fail(_ctx: &mut dyn EvalContext, _args: &[Value]) -> Result<(), EvalError> {
    std::thread::sleep(Duration::from_millis(50));
    Err(EvalError::new("slow"))
}

#[test]
fn test_stages_share_cells() {
    fn bump(ctx: &mut dyn EvalContext, _args: &[Value]) -> Result<(), EvalError> {
        let cell = ctx
            .lookup("log")
            .ok_or_else(|| EvalError::new("log not defined"))?;
        let list = cell.get();
        list.push(Value::string("x"))?;
        Ok(())
    }

    let resolver = NoExternalCommands;
    let mut ctx = EvalCtx::new(&resolver, PipelineMode::Parallel, OutputPort::buffer());
    let log = ctx.define("log", Value::list(vec![]));
    let stages = vec![
        Stage::new(Value::builtin("bump", bump), vec![]),
        Stage::new(Value::builtin("bump", bump), vec![]),
        Stage::new(Value::builtin("bump", bump), vec![]),
    ];
    run_pipeline(&mut ctx, stages).unwrap();
    assert_eq!(log.get().len(), Some(3));
}

#[test]
fn test_non_callable_stage() {
    let (result, _) = run(
        PipelineMode::Sequential,
        vec![Stage::new(Value::string("nope"), vec![])],
    );
    assert_eq!(result.unwrap_err().message, "string value is not callable");
}
