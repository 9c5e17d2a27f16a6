//! The shapes of value accepted by [`Diagnostics::append`].
//!
//! Every producer hands its findings over as an [`Input`]. Conversions exist
//! for each supported shape, so most callers never name a variant directly.

use std::{any, error::Error, sync::Arc};

use findings_core::error_group::{ErrorGroup, SharedError};

use crate::{
    diagnostic::Diagnostic,
    diagnostics::Diagnostics,
    error::{DiagnosticsError, FatalError, NonFatalError},
};

/// A value that can be accumulated into a [`Diagnostics`] collection.
#[derive(Debug, Clone)]
pub enum Input {
    /// Nothing to add.
    Nothing,

    /// A single diagnostic, added as is.
    Diagnostic(Diagnostic),

    /// A collection whose elements are added one by one.
    Diagnostics(Diagnostics),

    /// A fatal view, unwrapped to its collection.
    Fatal(FatalError),

    /// A non-fatal view, unwrapped to its collection.
    NonFatal(NonFatalError),

    /// An error group; every member error is wrapped individually.
    Group(ErrorGroup),

    /// Any other error. If a collection is hidden in its source chain that
    /// collection is added instead, otherwise the error itself is wrapped.
    Error(SharedError),

    /// A value of a type that cannot become a diagnostic. Accumulating it
    /// panics.
    Unsupported(&'static str),
}

impl Input {
    /// Classify an arbitrary error value.
    pub fn error<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from(Box::new(err) as Box<dyn Error + Send + Sync>)
    }

    /// The input for a value of type `T` that has no diagnostic form.
    pub fn unsupported<T: ?Sized>() -> Self {
        Self::Unsupported(any::type_name::<T>())
    }
}

impl From<Diagnostic> for Input {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::Diagnostic(diagnostic)
    }
}

impl From<Diagnostics> for Input {
    fn from(diagnostics: Diagnostics) -> Self {
        Self::Diagnostics(diagnostics)
    }
}

impl From<Vec<Diagnostic>> for Input {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self::Diagnostics(diagnostics.into())
    }
}

impl From<FatalError> for Input {
    fn from(err: FatalError) -> Self {
        Self::Fatal(err)
    }
}

impl From<NonFatalError> for Input {
    fn from(err: NonFatalError) -> Self {
        Self::NonFatal(err)
    }
}

impl From<DiagnosticsError> for Input {
    fn from(err: DiagnosticsError) -> Self {
        match err {
            DiagnosticsError::Fatal(err) => Self::Fatal(err),
            DiagnosticsError::NonFatal(err) => Self::NonFatal(err),
        }
    }
}

impl From<ErrorGroup> for Input {
    fn from(group: ErrorGroup) -> Self {
        Self::Group(group)
    }
}

impl From<Box<dyn Error + Send + Sync>> for Input {
    fn from(err: Box<dyn Error + Send + Sync>) -> Self {
        let err = match err.downcast::<FatalError>() {
            Ok(err) => return Self::Fatal(*err),
            Err(err) => err,
        };
        let err = match err.downcast::<NonFatalError>() {
            Ok(err) => return Self::NonFatal(*err),
            Err(err) => err,
        };
        let err = match err.downcast::<DiagnosticsError>() {
            Ok(err) => return Self::from(*err),
            Err(err) => err,
        };
        match err.downcast::<ErrorGroup>() {
            Ok(group) => Self::Group(*group),
            Err(err) => Self::Error(Arc::from(err)),
        }
    }
}

impl From<SharedError> for Input {
    fn from(err: SharedError) -> Self {
        if let Some(view) = err.downcast_ref::<FatalError>() {
            Self::Fatal(view.clone())
        } else if let Some(view) = err.downcast_ref::<NonFatalError>() {
            Self::NonFatal(view.clone())
        } else if let Some(view) = err.downcast_ref::<DiagnosticsError>() {
            Self::from(view.clone())
        } else if let Some(group) = err.downcast_ref::<ErrorGroup>() {
            Self::Group(group.clone())
        } else {
            Self::Error(err)
        }
    }
}

impl<T> From<Option<T>> for Input
where
    T: Into<Input>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nothing, Into::into)
    }
}
