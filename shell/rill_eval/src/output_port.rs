//! Output port for values produced by builtins and commands.
//!
//! Output can be directed to different destinations:
//! - `Stdout`: printed one value per line (the driver)
//! - `Buffer`: kept for the caller (pipeline stages, tests)
//!
//! Uses enum dispatch instead of trait objects, like the rest of the
//! evaluator's policy types.

use rill_value::Value;

/// Where `EvalContext::output` sends values.
#[derive(Clone, Debug)]
pub enum OutputPort {
    /// Print each value's string form on its own line.
    Stdout,
    /// Collect values in order.
    Buffer(Vec<Value>),
}

impl OutputPort {
    /// An empty buffer port.
    pub fn buffer() -> Self {
        OutputPort::Buffer(Vec::new())
    }

    pub fn emit(&mut self, value: Value) {
        match self {
            OutputPort::Stdout => println!("{value}"),
            OutputPort::Buffer(values) => values.push(value),
        }
    }

    /// Values collected so far. Always empty for `Stdout`.
    pub fn values(&self) -> &[Value] {
        match self {
            OutputPort::Stdout => &[],
            OutputPort::Buffer(values) => values,
        }
    }

    /// Take the collected values, leaving the buffer empty.
    pub fn take(&mut self) -> Vec<Value> {
        match self {
            OutputPort::Stdout => Vec::new(),
            OutputPort::Buffer(values) => std::mem::take(values),
        }
    }
}

impl Default for OutputPort {
    fn default() -> Self {
        Self::buffer()
    }
}
