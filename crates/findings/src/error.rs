//! Error views over a diagnostics collection.
//!
//! [`FatalError`] and [`NonFatalError`] let a [`Diagnostics`] collection
//! travel through APIs that deal in [`std::error::Error`]. Callers that know
//! about diagnostics can tell the two apart, usually through
//! [`DiagnosticsError`], and treat the non-fatal kind as advisory.

use std::fmt;

use thiserror::Error;

use findings_core::error_group::SharedError;

use crate::diagnostics::Diagnostics;

/// A diagnostics collection presented as a fatal error.
///
/// Produced by [`Diagnostics::err`] when the collection holds at least one
/// error.
#[derive(Debug, Clone, PartialEq)]
pub struct FatalError {
    diagnostics: Diagnostics,
}

impl FatalError {
    pub(crate) fn new(diagnostics: Diagnostics) -> Self {
        Self { diagnostics }
    }

    /// Get the wrapped diagnostics.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Consume the error, returning the wrapped diagnostics.
    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    /// The foreign errors that were wrapped into this collection, in order.
    ///
    /// Diagnostics authored directly contribute nothing.
    pub fn wrapped_errors(&self) -> Vec<SharedError> {
        self.diagnostics
            .iter()
            .filter_map(|diag| diag.cause().cloned())
            .collect()
    }
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_message(f, &self.diagnostics, "problems", "no errors")
    }
}

/// The source is the first wrapped foreign error, if there is one.
impl std::error::Error for FatalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.diagnostics
            .iter()
            .find_map(|diag| diag.cause())
            .map(|err| &**err as &(dyn std::error::Error + 'static))
    }
}

/// A diagnostics collection presented as an error that should not halt
/// processing.
///
/// Produced by [`Diagnostics::err_with_warnings`] for warnings-only
/// collections and by [`Diagnostics::non_fatal_err`].
#[derive(Debug, Clone, PartialEq)]
pub struct NonFatalError {
    diagnostics: Diagnostics,
}

impl NonFatalError {
    pub(crate) fn new(diagnostics: Diagnostics) -> Self {
        Self { diagnostics }
    }

    /// Get the wrapped diagnostics.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Consume the error, returning the wrapped diagnostics.
    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

impl fmt::Display for NonFatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.diagnostics.has_errors() {
            "problems"
        } else {
            "warnings"
        };
        write_message(f, &self.diagnostics, noun, "no errors or warnings")
    }
}

impl std::error::Error for NonFatalError {}

/// Either view of a diagnostics collection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiagnosticsError {
    #[error(transparent)]
    Fatal(#[from] FatalError),

    #[error(transparent)]
    NonFatal(#[from] NonFatalError),
}

impl DiagnosticsError {
    /// Returns `true` if processing should halt.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DiagnosticsError::Fatal(_))
    }

    /// Get the wrapped diagnostics.
    pub fn diagnostics(&self) -> &Diagnostics {
        match self {
            DiagnosticsError::Fatal(err) => err.diagnostics(),
            DiagnosticsError::NonFatal(err) => err.diagnostics(),
        }
    }

    /// Consume the error, returning the wrapped diagnostics.
    pub fn into_diagnostics(self) -> Diagnostics {
        match self {
            DiagnosticsError::Fatal(err) => err.into_diagnostics(),
            DiagnosticsError::NonFatal(err) => err.into_diagnostics(),
        }
    }
}

/// A single diagnostic renders as its description. Several render as a
/// `"<n> <noun>:"` header followed by one bullet per diagnostic.
fn write_message(
    f: &mut fmt::Formatter<'_>,
    diagnostics: &Diagnostics,
    noun: &str,
    empty: &str,
) -> fmt::Result {
    match diagnostics.as_slice() {
        // Not reachable through the public constructors.
        [] => f.write_str(empty),
        [only] => write!(f, "{}", only.description()),
        all => {
            writeln!(f, "{} {noun}:", all.len())?;
            for diag in all {
                write!(f, "\n- {}", diag.description())?;
            }
            Ok(())
        }
    }
}
