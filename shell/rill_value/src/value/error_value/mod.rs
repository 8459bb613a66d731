//! The error value: an optional inner error.
//!
//! A null inner error is success. Pipelines produce one `ErrorValue` per
//! stage and aggregate them into a multi-error, so the aggregated form keeps
//! every stage's result, including the successful ones.

use std::fmt;

use super::heap::Heap;
use crate::errors::{generic_failure, EvalError};

/// An error value, as stored in `Value::Error`.
#[derive(Clone, PartialEq, Eq)]
pub struct ErrorValue {
    inner: Option<Heap<EvalError>>,
}

impl ErrorValue {
    /// The success value.
    pub const OK: ErrorValue = ErrorValue { inner: None };

    /// Wrap an optional error; `None` is success.
    pub fn new(inner: Option<EvalError>) -> Self {
        ErrorValue {
            inner: inner.map(Heap::new),
        }
    }

    /// The success value.
    #[inline]
    pub fn ok() -> Self {
        Self::OK
    }

    /// Wrap an error.
    pub fn from_error(err: EvalError) -> Self {
        Self::new(Some(err))
    }

    /// Wrap a plain message as a custom error.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self::from_error(EvalError::new(message))
    }

    /// The well-known generic failure.
    pub fn generic_failure() -> Self {
        Self::from_error(generic_failure())
    }

    /// Aggregate per-stage results into one non-null error.
    ///
    /// The result is an error even if every element is success; callers
    /// inspect the elements through [`ErrorValue::sub_errors`].
    pub fn multi(errors: Vec<ErrorValue>) -> Self {
        Self::from_error(EvalError::multi(errors))
    }

    /// Capture the outcome of a stage: `Ok` becomes success.
    pub fn from_result<T>(result: Result<T, EvalError>) -> Self {
        match result {
            Ok(_) => Self::OK,
            Err(err) => Self::from_error(err),
        }
    }

    /// The inner error, `None` for success.
    #[inline]
    pub fn inner(&self) -> Option<&EvalError> {
        self.inner.as_deref()
    }

    /// Whether this is success.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.inner.is_none()
    }

    /// Elements of a multi-error; empty for anything else.
    pub fn sub_errors(&self) -> &[ErrorValue] {
        self.inner().map_or(&[], EvalError::sub_errors)
    }

    /// Turn back into a `Result`, cloning the inner error.
    pub fn to_result(&self) -> Result<(), EvalError> {
        match self.inner() {
            None => Ok(()),
            Some(err) => Err(err.clone()),
        }
    }

    /// `$ok`, or the inner error's repr.
    pub fn repr(&self) -> String {
        match self.inner() {
            None => "$ok".to_string(),
            Some(err) => err.repr(),
        }
    }

    /// `ok`, or the inner error's message.
    pub fn as_string(&self) -> String {
        match self.inner() {
            None => "ok".to_string(),
            Some(err) => err.message.clone(),
        }
    }

    /// Success is true, any error is false.
    #[inline]
    pub fn as_bool(&self) -> bool {
        self.is_ok()
    }
}

impl Default for ErrorValue {
    fn default() -> Self {
        Self::OK
    }
}

impl From<EvalError> for ErrorValue {
    fn from(err: EvalError) -> Self {
        Self::from_error(err)
    }
}

impl fmt::Debug for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner() {
            None => f.write_str("ErrorValue(ok)"),
            Some(err) => write!(f, "ErrorValue({err:?})"),
        }
    }
}

/// Whether every error in the slice is success. Empty is true.
pub fn allok(errors: &[ErrorValue]) -> bool {
    errors.iter().all(ErrorValue::is_ok)
}
