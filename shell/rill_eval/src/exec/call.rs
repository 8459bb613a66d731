//! Closure creation and calls.

use rill_value::{
    arity_mismatch, not_callable, to_string, Closure, EvalContext, EvalError, OpHandle, Value,
};

use super::control::catch_return;
use crate::context::EvalCtx;
use crate::environment::Environment;

/// Build a closure over the cells of `free_names` in `env`.
pub fn make_closure<S: AsRef<str>>(
    params: Vec<String>,
    variadic: bool,
    op: OpHandle,
    env: &Environment,
    free_names: &[S],
) -> Result<Value, EvalError> {
    let captured = env.capture(free_names)?;
    Ok(Value::closure(Closure::new(params, variadic, op, captured)))
}

/// Call any callable value.
///
/// Closures run their body with the captured cells and fresh parameter
/// cells, catching `return`. External commands go through the context's
/// resolver and their output lines become string values.
#[tracing::instrument(level = "debug", skip_all, fields(callee = %callee.repr(), args = args.len()))]
pub fn call(ctx: &mut EvalCtx<'_>, callee: &Value, args: Vec<Value>) -> Result<(), EvalError> {
    match callee {
        Value::Closure(closure) => call_closure(ctx, closure, args),
        Value::BuiltinFn(builtin) => builtin.invoke(ctx, &args),
        Value::ExternalCmd(cmd) => {
            let args: Vec<String> = args.iter().map(to_string).collect();
            let lines = ctx.resolver().run(&cmd.name, &args)?;
            for line in lines {
                ctx.output(Value::string(line));
            }
            Ok(())
        }
        _ => Err(not_callable(callee.kind())),
    }
}

fn call_closure(ctx: &mut EvalCtx<'_>, closure: &Closure, args: Vec<Value>) -> Result<(), EvalError> {
    let required = closure.required_args();
    let arity_ok = if closure.variadic {
        args.len() >= required
    } else {
        args.len() == required
    };
    if !arity_ok {
        return Err(arity_mismatch(required, args.len(), closure.variadic));
    }

    let mut env = ctx.env().closure_env(&closure.captured);
    let mut args = args.into_iter();
    for (name, arg) in closure.params.iter().take(required).zip(args.by_ref()) {
        env.define(name, arg);
    }
    if closure.variadic {
        if let Some(rest) = closure.params.last() {
            env.define(rest, Value::list(args.collect()));
        }
    }

    tracing::trace!(params = closure.params.len(), "entering closure body");
    let saved = ctx.swap_env(env);
    let result = catch_return(closure.op.exec(ctx));
    ctx.swap_env(saved);
    result
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
