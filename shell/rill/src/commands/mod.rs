//! Command implementations for the rill driver.
//!
//! Every command appends the lines it prints to `out` and returns an error
//! message on failure; `main` does the printing and picks the exit code.

mod edit;
mod glob;
mod json;
mod rat;

pub use edit::{history_command, keys_command, nav_command};
pub use glob::glob_command;
pub use json::{index_command, json_command};
pub use rat::rat_command;

use std::io::Read;

use rill_eval::PipelineMode;

/// Environment variable selecting how pipeline stages run.
pub const PIPELINE_ENV: &str = "RILL_PIPELINE";

/// Read a file, or standard input for `-`.
pub fn read_input(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| format!("cannot read standard input: {e}"))?;
        return Ok(text);
    }
    std::fs::read_to_string(path).map_err(|e| format!("cannot read '{path}': {e}"))
}

/// The pipeline mode named by `RILL_PIPELINE`, parallel when unset.
pub fn pipeline_mode() -> PipelineMode {
    match std::env::var(PIPELINE_ENV) {
        Ok(name) => PipelineMode::from_name(&name).unwrap_or_else(|| {
            tracing::warn!(value = %name, "unknown {PIPELINE_ENV}, running stages in parallel");
            PipelineMode::default()
        }),
        Err(_) => PipelineMode::default(),
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
