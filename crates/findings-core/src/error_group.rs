//! An ordered aggregate of causal errors.
//!
//! [`ErrorGroup`] lets a subsystem report several independent failures
//! through a single error value.

use std::{error::Error, fmt, sync::Arc};

/// A shared, thread-safe error value.
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// A group of errors, kept in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct ErrorGroup {
    errors: Vec<SharedError>,
}

impl ErrorGroup {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error to the end of the group.
    pub fn push<E>(&mut self, err: E)
    where
        E: Error + Send + Sync + 'static,
    {
        self.errors.push(Arc::new(err));
    }

    /// Add an already shared error to the end of the group.
    pub fn push_shared(&mut self, err: SharedError) {
        self.errors.push(err);
    }

    /// Get the errors in this group.
    pub fn errors(&self) -> &[SharedError] {
        &self.errors
    }

    /// Consume the group, returning its errors.
    pub fn into_errors(self) -> Vec<SharedError> {
        self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ErrorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.len() {
            1 => write!(f, "1 error occurred:")?,
            n => write!(f, "{n} errors occurred:")?,
        }
        for err in &self.errors {
            write!(f, "\n\t* {err}")?;
        }
        Ok(())
    }
}

impl Error for ErrorGroup {}

impl From<Vec<SharedError>> for ErrorGroup {
    fn from(errors: Vec<SharedError>) -> Self {
        Self { errors }
    }
}

impl FromIterator<SharedError> for ErrorGroup {
    fn from_iter<I: IntoIterator<Item = SharedError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}
