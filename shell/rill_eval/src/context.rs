//! The evaluation context handed to operation trees and builtins.

use rill_value::{external_failed, EvalContext, EvalError, Value, Variable};

use crate::environment::Environment;
use crate::eval_mode::PipelineMode;
use crate::exec::call;
use crate::output_port::OutputPort;

/// Runs external commands.
///
/// Shared by every pipeline stage, so implementations must be thread-safe.
pub trait CommandResolver: Send + Sync {
    /// Run `name` with `args`, returning its output lines.
    fn run(&self, name: &str, args: &[String]) -> Result<Vec<String>, EvalError>;
}

/// Resolver for contexts where no external command may run.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoExternalCommands;

impl CommandResolver for NoExternalCommands {
    fn run(&self, name: &str, _args: &[String]) -> Result<Vec<String>, EvalError> {
        Err(external_failed(name, "external commands are disabled"))
    }
}

/// Evaluator state: scopes, output, command resolution and pipeline policy.
pub struct EvalCtx<'r> {
    env: Environment,
    output: OutputPort,
    resolver: &'r dyn CommandResolver,
    mode: PipelineMode,
}

impl<'r> EvalCtx<'r> {
    pub fn new(resolver: &'r dyn CommandResolver, mode: PipelineMode, output: OutputPort) -> Self {
        EvalCtx {
            env: Environment::new(),
            output,
            resolver,
            mode,
        }
    }

    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    #[inline]
    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// Install `env`, returning the one it replaces.
    pub fn swap_env(&mut self, env: Environment) -> Environment {
        std::mem::replace(&mut self.env, env)
    }

    #[inline]
    pub fn mode(&self) -> PipelineMode {
        self.mode
    }

    #[inline]
    pub fn resolver(&self) -> &'r dyn CommandResolver {
        self.resolver
    }

    pub fn output_port(&self) -> &OutputPort {
        &self.output
    }

    /// Take everything written to a buffer port so far.
    pub fn take_output(&mut self) -> Vec<Value> {
        self.output.take()
    }

    /// Context for one pipeline stage.
    ///
    /// The stage sees the same cells as this context and writes to its own
    /// buffer.
    pub fn fork(&self) -> EvalCtx<'r> {
        EvalCtx {
            env: self.env.clone(),
            output: OutputPort::buffer(),
            resolver: self.resolver,
            mode: self.mode,
        }
    }
}

impl EvalContext for EvalCtx<'_> {
    fn output(&mut self, value: Value) {
        self.output.emit(value);
    }

    fn lookup(&self, name: &str) -> Option<Variable> {
        self.env.lookup(name)
    }

    fn define(&mut self, name: &str, value: Value) -> Variable {
        self.env.define(name, value)
    }

    fn call(&mut self, callee: &Value, args: Vec<Value>) -> Result<(), EvalError> {
        call(self, callee, args)
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
