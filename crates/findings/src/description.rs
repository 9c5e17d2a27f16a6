//! Human-readable descriptions and source locations of diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

use findings_core::source::SourceRange;

/// The text of a diagnostic.
///
/// `summary` is a single line. `detail` may span several lines and is empty
/// when there is nothing more to say. `address` is a stable identifier of the
/// object the diagnostic is about and may also be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Description {
    address: String,
    summary: String,
    detail: String,
}

impl Description {
    /// Create a description with only a summary.
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            ..Self::default()
        }
    }

    /// Set the stable address of the described object.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// Renders `summary`, or `summary: detail` when there is a detail.
impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.detail.is_empty() {
            f.write_str(&self.summary)
        } else {
            write!(f, "{}: {}", self.summary, self.detail)
        }
    }
}

/// Where in the input a diagnostic applies.
///
/// `subject` is the range the diagnostic is about. `context`, when present,
/// is a wider range enclosing the subject that renderers may show for
/// framing; it plays no part in ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Source {
    subject: Option<SourceRange>,
    context: Option<SourceRange>,
}

impl Source {
    /// A source with no location at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// A source pointing at `subject`.
    pub fn at(subject: SourceRange) -> Self {
        Self {
            subject: Some(subject),
            context: None,
        }
    }

    /// Set the subject range.
    pub fn with_subject(mut self, subject: SourceRange) -> Self {
        self.subject = Some(subject);
        debug_assert!(self.frames_subject(), "context range must enclose the subject");
        self
    }

    /// Set the framing context range.
    pub fn with_context(mut self, context: SourceRange) -> Self {
        self.context = Some(context);
        debug_assert!(self.frames_subject(), "context range must enclose the subject");
        self
    }

    /// Returns `true` unless both ranges are set and the context does not
    /// enclose the subject.
    pub fn frames_subject(&self) -> bool {
        match (&self.subject, &self.context) {
            (Some(subject), Some(context)) => context.contains(subject),
            _ => true,
        }
    }

    pub fn subject(&self) -> Option<&SourceRange> {
        self.subject.as_ref()
    }

    pub fn context(&self) -> Option<&SourceRange> {
        self.context.as_ref()
    }
}
