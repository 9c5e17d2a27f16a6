//! The single diagnostic item.
//!
//! A [`Diagnostic`] is either authored by a producer, with a severity,
//! description and optional location, or wraps a foreign error value that
//! was raised by some other subsystem. Wrapped errors keep the original
//! value so it can be recovered later through
//! [`FatalError::wrapped_errors`](crate::FatalError::wrapped_errors).

use std::{error::Error, fmt, sync::Arc};

use findings_core::{error_group::SharedError, source::SourceRange};

use crate::{
    description::{Description, Source},
    severity::Severity,
};

/// A single error or warning about the input being processed.
///
/// # Example
///
/// ```
/// # use findings::{Diagnostic, Severity};
/// # use findings::source::{SourcePos, SourceRange};
///
/// let subject = SourceRange::new("main.tf", SourcePos::new(3, 1, 20), SourcePos::new(3, 9, 28));
/// let diag = Diagnostic::error("Missing required argument")
///     .with_detail("The argument \"name\" is required.")
///     .with_subject(subject);
///
/// assert_eq!(diag.severity(), Severity::Error);
/// assert!(diag.source().subject().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    description: Description,
    source: Source,
    cause: Option<SharedError>,
}

impl Diagnostic {
    /// Create an error diagnostic with the given summary.
    pub fn error(summary: impl Into<String>) -> Self {
        Self::new(Severity::Error, Description::new(summary))
    }

    /// Create a warning diagnostic with the given summary.
    pub fn warning(summary: impl Into<String>) -> Self {
        Self::new(Severity::Warning, Description::new(summary))
    }

    /// Create a diagnostic from its parts.
    pub fn new(severity: Severity, description: Description) -> Self {
        Self {
            severity,
            description,
            source: Source::none(),
            cause: None,
        }
    }

    /// Wrap a foreign error as an error diagnostic.
    ///
    /// The summary is the error's message and there is no location.
    pub fn from_error<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_shared(Arc::new(err))
    }

    /// Wrap an already shared foreign error as an error diagnostic.
    pub fn from_shared(err: SharedError) -> Self {
        Self {
            severity: Severity::Error,
            description: Description::new(err.to_string()),
            source: Source::none(),
            cause: Some(err),
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.description = self.description.with_detail(detail);
        self
    }

    /// Set the stable address of the object this diagnostic is about.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.description = self.description.with_address(address);
        self
    }

    /// Set the source range this diagnostic is about.
    pub fn with_subject(mut self, subject: SourceRange) -> Self {
        self.source = self.source.with_subject(subject);
        self
    }

    /// Set the framing context range.
    pub fn with_context(mut self, context: SourceRange) -> Self {
        self.source = self.source.with_context(context);
        self
    }

    /// Replace the whole source.
    pub fn with_source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Get the foreign error this diagnostic wraps, if any.
    pub fn cause(&self) -> Option<&SharedError> {
        self.cause.as_ref()
    }

    /// Returns `true` if this diagnostic wraps a foreign error.
    pub fn is_native(&self) -> bool {
        self.cause.is_some()
    }
}

/// Wrapped causes compare by identity, everything else by value.
impl PartialEq for Diagnostic {
    fn eq(&self, other: &Self) -> bool {
        self.severity == other.severity
            && self.description == other.description
            && self.source == other.source
            && match (&self.cause, &other.cause) {
                (None, None) => true,
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                _ => false,
            }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{severity}: {}", self.description)
    }
}
