//! Pipeline evaluation modes.
//!
//! Parameterizes how pipeline stages are scheduled. Enum dispatch, chosen
//! once per `EvalCtx`.

/// How the stages of a pipeline are run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PipelineMode {
    /// One stage after another, on the calling thread.
    Sequential,
    /// All stages at once on the rayon pool.
    #[default]
    Parallel,
}

impl PipelineMode {
    /// Whether stages run concurrently.
    #[inline]
    pub fn is_parallel(self) -> bool {
        matches!(self, Self::Parallel)
    }

    /// Parse a mode name, as given in `RILL_PIPELINE`.
    ///
    /// Case-insensitive; `None` for anything unrecognised.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Some(Self::Sequential),
            "parallel" | "par" => Some(Self::Parallel),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}
