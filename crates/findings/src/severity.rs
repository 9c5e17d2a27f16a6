//! Diagnostic severities.
//!
//! A [`Severity`] is either an error or a warning. Its ordering is the one
//! used when presenting diagnostics, which lists warnings first.

use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

/// The severity level of a diagnostic.
///
/// Severities are ordered for presentation: [`Severity::Warning`] sorts
/// before [`Severity::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// A problem that must halt processing of the input.
    Error,

    /// An advisory finding that does not prevent processing from continuing.
    Warning,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }

    /// Returns the name of this severity, e.g. `"Error"`.
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Severity::Warning => 0,
            Severity::Error => 1,
        }
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
