//! Error types for value operations and evaluation.
//!
//! Every failure in the value core is an `EvalError` propagated with `?`.
//! The same channel carries the three flow signals (`return`, `break`,
//! `continue`): they are structurally errors, semantically control transfers,
//! and are caught at loop and closure boundaries by the evaluator.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` is the typed category. Factory functions (e.g.
//! `need_int_index()`) are the public API: they populate both `kind` and the
//! rendered `message`.

use std::fmt;

use crate::quote::quote;
use crate::value::{ErrorValue, Value};

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Structured non-local control transfers.
///
/// These are not failures. A loop body catches `Break` and `Continue`; a
/// closure body catches `Return`. One that escapes the top level is a defect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlFlow {
    Return,
    Break,
    Continue,
}

impl ControlFlow {
    /// The keyword that raises this signal.
    pub fn name(self) -> &'static str {
        match self {
            ControlFlow::Return => "return",
            ControlFlow::Break => "break",
            ControlFlow::Continue => "continue",
        }
    }
}

impl fmt::Display for ControlFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Indexing
    NeedIntIndex,
    IndexOutOfRange,
    CannotBeIndexed {
        kind: &'static str,
    },
    InvalidIndex {
        kind: &'static str,
    },
    NoSuchKey {
        key: String,
    },

    // Glob
    BadWildcard {
        token: String,
    },

    // Conversion
    UnexpectedJsonType {
        type_name: String,
    },
    ParseFailure {
        text: String,
    },
    OnlyStrOrRat,

    // Calls
    UndefinedVariable {
        name: String,
    },
    NotCallable {
        kind: &'static str,
    },
    ArityMismatch {
        expected: usize,
        got: usize,
        variadic: bool,
    },
    ExternalFailed {
        name: String,
        message: String,
    },

    /// Results of several pipeline stages packed into one error.
    Multi {
        errors: Vec<ErrorValue>,
    },

    /// `return`, `break` or `continue` in flight.
    Flow(ControlFlow),

    GenericFailure,

    /// Catch-all for messages from native code.
    Custom {
        message: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Indexing
            Self::NeedIntIndex => write!(f, "need integer index"),
            Self::IndexOutOfRange => write!(f, "index out of range"),
            Self::CannotBeIndexed { kind } => write!(f, "{kind} value cannot be indexed"),
            Self::InvalidIndex { kind } => write!(f, "{kind} value cannot be used as index"),
            Self::NoSuchKey { key } => write!(f, "no such key: {key}"),

            // Glob
            Self::BadWildcard { token } => write!(f, "bad wildcard: {token:?}"),

            // Conversion
            Self::UnexpectedJsonType { type_name } => {
                write!(f, "unexpected json type: {type_name}")
            }
            Self::ParseFailure { text } => write!(f, "{text} cannot be parsed as rat"),
            Self::OnlyStrOrRat => write!(f, "only str or rat may be converted to rat"),

            // Calls
            Self::UndefinedVariable { name } => write!(f, "variable ${name} not found"),
            Self::NotCallable { kind } => write!(f, "{kind} value is not callable"),
            Self::ArityMismatch {
                expected,
                got,
                variadic,
            } => {
                let at_least = if *variadic { "at least " } else { "" };
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "arity mismatch: need {at_least}{expected} {arg_word}, got {got}")
            }
            Self::ExternalFailed { name, message } => write!(f, "{name}: {message}"),

            Self::Multi { errors } => {
                write!(f, "(")?;
                let mut first = true;
                for err in errors.iter().filter_map(ErrorValue::inner) {
                    if !first {
                        write!(f, " | ")?;
                    }
                    first = false;
                    write!(f, "{}", err.message)?;
                }
                write!(f, ")")
            }

            Self::Flow(flow) => write!(f, "{flow}"),

            Self::GenericFailure => write!(f, "generic failure"),

            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Byte range in the source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()` for factory-built
    /// errors.
    pub message: String,
    /// Source location where the error occurred, when the evaluator knows it.
    pub span: Option<Span>,
}

impl EvalError {
    /// Create an error with just a message.
    ///
    /// Uses `Custom` kind. Prefer a factory function when a structured kind
    /// exists.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
            span: None,
        }
    }

    /// Create an error from a structured kind.
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            span: None,
        }
    }

    /// Attach a source location.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Pack the results of several pipeline stages into one error.
    pub fn multi(errors: Vec<ErrorValue>) -> Self {
        Self::from_kind(EvalErrorKind::Multi { errors })
    }

    /// Create a `return` signal.
    pub fn return_signal() -> Self {
        Self::from_kind(EvalErrorKind::Flow(ControlFlow::Return))
    }

    /// Create a `break` signal.
    pub fn break_signal() -> Self {
        Self::from_kind(EvalErrorKind::Flow(ControlFlow::Break))
    }

    /// Create a `continue` signal.
    pub fn continue_signal() -> Self {
        Self::from_kind(EvalErrorKind::Flow(ControlFlow::Continue))
    }

    /// The flow signal this error carries, if any.
    #[inline]
    pub fn control_flow(&self) -> Option<ControlFlow> {
        match self.kind {
            EvalErrorKind::Flow(flow) => Some(flow),
            _ => None,
        }
    }

    /// Check if this error is a flow signal rather than a failure.
    #[inline]
    pub fn is_control_flow(&self) -> bool {
        self.control_flow().is_some()
    }

    /// The stage errors of a multi-error; empty for any other kind.
    pub fn sub_errors(&self) -> &[ErrorValue] {
        match &self.kind {
            EvalErrorKind::Multi { errors } => errors,
            _ => &[],
        }
    }

    /// Canonical textual form, as printed inside an error value.
    pub fn repr(&self) -> String {
        match &self.kind {
            EvalErrorKind::Multi { errors } => {
                let mut out = String::from("?(multi-error");
                for err in errors {
                    out.push(' ');
                    out.push_str(&err.repr());
                }
                out.push(')');
                out
            }
            EvalErrorKind::Flow(flow) => format!("?({flow})"),
            _ => format!("?(error {})", quote(&self.message)),
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

impl From<rill_glob::GlobError> for EvalError {
    fn from(err: rill_glob::GlobError) -> Self {
        match err {
            rill_glob::GlobError::BadWildcard(token) => bad_wildcard(&token),
        }
    }
}

// Indexing Errors

/// Index text is not an integer.
#[cold]
pub fn need_int_index() -> EvalError {
    EvalError::from_kind(EvalErrorKind::NeedIntIndex)
}

/// Index is outside the container, or does not fit a machine integer.
#[cold]
pub fn index_out_of_range() -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfRange)
}

/// Receiver does not support indexing.
#[cold]
pub fn cannot_be_indexed(kind: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CannotBeIndexed { kind })
}

/// Index value has the wrong kind.
#[cold]
pub fn invalid_index(kind: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidIndex { kind })
}

/// Map has no entry for the key; carries the key's `repr()`.
#[cold]
pub fn no_such_key(key_repr: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoSuchKey {
        key: key_repr.to_string(),
    })
}

// Glob Errors

/// Token is not a wildcard.
#[cold]
pub fn bad_wildcard(token: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BadWildcard {
        token: token.to_string(),
    })
}

// Conversion Errors

/// JSON input is not a JSON tree.
#[cold]
pub fn unexpected_json_type(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnexpectedJsonType {
        type_name: type_name.to_string(),
    })
}

/// String is not a rational number; carries the string's `repr()`.
#[cold]
pub fn parse_failure(text_repr: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ParseFailure {
        text: text_repr.to_string(),
    })
}

/// Value of a kind that has no rational form.
#[cold]
pub fn only_str_or_rat() -> EvalError {
    EvalError::from_kind(EvalErrorKind::OnlyStrOrRat)
}

// Call Errors

/// Variable not found in any enclosing scope.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

/// Value cannot be called.
#[cold]
pub fn not_callable(kind: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { kind })
}

/// Wrong number of arguments for a closure.
#[cold]
pub fn arity_mismatch(expected: usize, got: usize, variadic: bool) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        expected,
        got,
        variadic,
    })
}

/// External command could not be run or failed.
#[cold]
pub fn external_failed(name: &str, message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ExternalFailed {
        name: name.to_string(),
        message: message.into(),
    })
}

/// The generic failure.
#[cold]
pub fn generic_failure() -> EvalError {
    EvalError::from_kind(EvalErrorKind::GenericFailure)
}
