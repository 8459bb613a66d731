//! Outermost catch point of an evaluation.

use rill_value::{ControlFlow, ErrorValue, EvalError};

/// Outcome of one top-level evaluation, as the driver shows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// The error value of the evaluation; success when nothing failed.
    pub error: ErrorValue,
    /// Text for the user, if anything went wrong.
    pub diagnostic: Option<String>,
}

impl Report {
    pub fn is_ok(&self) -> bool {
        self.error.is_ok()
    }
}

/// Turn the result of a whole evaluation into a report.
///
/// A flow signal that reaches this point escaped every loop and closure,
/// either directly or as one stage of a multi-error. It is reported as
/// `BAD FLOW` and replaced by the generic failure; it is never propagated
/// further.
pub fn run_top_level(result: Result<(), EvalError>) -> Report {
    let Err(err) = result else {
        return Report {
            error: ErrorValue::OK,
            diagnostic: None,
        };
    };

    if let Some(flow) = escaped_flow(&err) {
        tracing::error!(flow = flow.name(), "BAD FLOW: {flow}");
        return Report {
            error: ErrorValue::generic_failure(),
            diagnostic: Some(format!("BAD FLOW: {flow}")),
        };
    }

    let diagnostic = match err.span {
        Some(span) => format!("{span}: {}", err.message),
        None => err.message.clone(),
    };
    tracing::debug!(error = %err, "evaluation failed");
    Report {
        error: ErrorValue::from_error(err),
        diagnostic: Some(diagnostic),
    }
}

/// The first flow signal in `err`, searching multi-error stages depth first.
fn escaped_flow(err: &EvalError) -> Option<ControlFlow> {
    err.control_flow().or_else(|| {
        err.sub_errors()
            .iter()
            .filter_map(ErrorValue::inner)
            .find_map(escaped_flow)
    })
}
