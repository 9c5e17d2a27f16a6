//! # Findings
//!
//! Accumulate errors and warnings while processing some input, instead of
//! failing on the first problem.
//!
//! The library is built around [`Diagnostics`], an ordered collection of
//! [`Diagnostic`] items. Each item has a [`Severity`], a [`Description`] and
//! an optional [`Source`] location. A collection can:
//!
//! - accumulate single diagnostics, other collections, error views, error
//!   groups and arbitrary errors, always flattening ([`Diagnostics::append`])
//! - report whether it holds any errors ([`Diagnostics::has_errors`])
//! - sort itself into a stable presentation order ([`Diagnostics::sort`])
//! - convert into an error for APIs that only know [`std::error::Error`]
//!   ([`Diagnostics::err`], [`Diagnostics::err_with_warnings`],
//!   [`Diagnostics::non_fatal_err`])
//!
//! ## Usage
//!
//! ```
//! # use findings::{Diagnostic, Diagnostics, FatalError};
//!
//! fn validate(names: &[&str]) -> Diagnostics {
//!     let mut diags = Diagnostics::new();
//!     for name in names {
//!         if name.is_empty() {
//!             diags.push(Diagnostic::error("Empty name"));
//!         } else if name.starts_with('_') {
//!             diags.push(Diagnostic::warning("Reserved name").with_detail(*name));
//!         }
//!     }
//!     diags
//! }
//!
//! fn run() -> Result<(), FatalError> {
//!     let warnings = validate(&["ok", "_hidden"]).into_result()?;
//!     assert_eq!(warnings.len(), 1);
//!     Ok(())
//! }
//!
//! run().unwrap();
//! assert!(validate(&[""]).err().is_some());
//! ```

mod description;
mod diagnostic;
mod diagnostics;
mod error;
mod input;
mod severity;
mod sort;

pub use findings_core::{error_group, source};

pub use description::{Description, Source};
pub use diagnostic::Diagnostic;
pub use diagnostics::Diagnostics;
pub use error::{DiagnosticsError, FatalError, NonFatalError};
pub use input::Input;
pub use severity::Severity;
