//! The one error type of the crate. Every failure is fatal for the operation that raised it:
//! parsing never hands back a partial tree and never resumes after an error.

use std::fmt;

use crate::span::Span;
use crate::value::Kind;

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Expected punctuation was not found at the cursor. `found` is `None` at end-of-input.
    Expected { expected: char, found: Option<char> },
    /// A value was required but the next significant character cannot start one.
    UnexpectedValueStart { found: Option<char> },
    /// A digit run does not fit in an `i64`.
    IntegerOverflow,
    /// A map or array already holds `capacity` entries.
    CapacityExceeded { capacity: usize },
    /// Containers are nested deeper than the configured limit.
    DepthLimitExceeded { limit: usize },
    /// A value was asked to act as a variant it is not.
    TypeMismatch { expected: Kind, found: Kind },
    /// Array index past the end.
    IndexOutOfBounds { index: usize, len: usize },
}

/// An [`ErrorKind`] together with the region of the input it was detected at, if it came from
/// parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub span: Option<Span>,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Error { kind, span: None }
    }

    pub(crate) fn at(kind: ErrorKind, span: Span) -> Self {
        Error {
            kind,
            span: Some(span),
        }
    }

    /// Attach a span unless one is already recorded.
    pub(crate) fn or_at(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// Short label suitable for pointing at the span in a rendered diagnostic.
    pub fn label(&self) -> String {
        match self.kind {
            ErrorKind::Expected { expected, .. } => format!("expected `{expected}` here"),
            ErrorKind::UnexpectedValueStart { .. } => {
                "expected `{`, `[`, `\"` or a digit here".to_string()
            }
            ErrorKind::IntegerOverflow => "this integer is too large".to_string(),
            ErrorKind::CapacityExceeded { capacity } => {
                format!("this entry would exceed the capacity of {capacity}")
            }
            ErrorKind::DepthLimitExceeded { limit } => {
                format!("nesting deeper than {limit} starts here")
            }
            ErrorKind::TypeMismatch { expected, .. } => format!("expected {expected} here"),
            ErrorKind::IndexOutOfBounds { index, .. } => format!("index {index} is out of range"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::new(kind)
    }
}

struct Found(Option<char>);

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(c) => write!(f, "`{}`", c.escape_debug()),
            None => f.write_str("end of input"),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ErrorKind::Expected { expected, found } => write!(
                f,
                "expected `{}` but found {}",
                expected.escape_debug(),
                Found(found)
            ),
            ErrorKind::UnexpectedValueStart { found } => {
                write!(f, "expected a value but found {}", Found(found))
            }
            ErrorKind::IntegerOverflow => f.write_str("integer literal out of range"),
            ErrorKind::CapacityExceeded { capacity } => {
                write!(f, "container capacity of {capacity} entries exceeded")
            }
            ErrorKind::DepthLimitExceeded { limit } => {
                write!(f, "nesting depth limit of {limit} exceeded")
            }
            ErrorKind::TypeMismatch { expected, found } => {
                write!(f, "expected {expected} but the value is {found}")
            }
            ErrorKind::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of range for array of size {len}")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span {
            Some(span) => write!(f, "{} at {}", self.kind, span.lo),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for Error {}
