//! The diagnostics collection.
//!
//! [`Diagnostics`] lets a processing phase report every problem it finds
//! instead of failing on the first one. Producers accumulate findings into a
//! collection; once assembled, the collection is queried, optionally sorted,
//! and optionally converted into an error value for APIs that only know about
//! [`std::error::Error`].
//!
//! An empty collection is the only way to say "no diagnostics": there is no
//! separate absent state, so `Diagnostics::default()` and the result of
//! appending nothing are the same value.

use std::{error::Error, slice, vec};

use log::{debug, trace};

use crate::{
    diagnostic::Diagnostic,
    error::{DiagnosticsError, FatalError, NonFatalError},
    input::Input,
    sort,
};

/// An ordered list of diagnostics.
///
/// Order is insertion order until [`Diagnostics::sort`] is called. Equal
/// diagnostics are not deduplicated. A collection never contains another
/// collection: accumulation always flattens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }

    /// Accumulate any number of inputs, returning the extended collection.
    ///
    /// Inputs are handled according to their shape:
    ///
    /// - [`Input::Nothing`] is skipped.
    /// - A single diagnostic is appended.
    /// - A collection has each of its elements appended.
    /// - Fatal and non-fatal views are unwrapped and their collection appended.
    /// - Each member of an error group is wrapped as an error diagnostic.
    /// - Any other error is searched, along its source chain, for a wrapped
    ///   collection, which is appended if found. Otherwise the error itself is
    ///   wrapped as an error diagnostic that keeps the original value.
    ///
    /// Mixed inputs can be passed with the [`append!`](crate::append) macro.
    ///
    /// # Panics
    ///
    /// Panics on [`Input::Unsupported`]. Passing a value that has no
    /// diagnostic form is a programming error.
    pub fn append<I>(mut self, inputs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Input>,
    {
        for input in inputs {
            self.accumulate(input.into());
        }

        if self.0.is_empty() {
            return Self::default();
        }
        self
    }

    /// Accumulate a single input in place.
    ///
    /// See [`Diagnostics::append`] for how inputs are handled.
    pub fn push(&mut self, input: impl Into<Input>) {
        self.accumulate(input.into());
    }

    fn accumulate(&mut self, input: Input) {
        match input {
            Input::Nothing => {}
            Input::Diagnostic(diagnostic) => self.0.push(diagnostic),
            Input::Diagnostics(diagnostics) => self.0.extend(diagnostics.0),
            Input::Fatal(err) => self.accumulate(Input::Diagnostics(err.into_diagnostics())),
            Input::NonFatal(err) => self.accumulate(Input::Diagnostics(err.into_diagnostics())),
            Input::Group(group) => {
                trace!(count = group.len(); "Wrapping error group members as diagnostics");
                self.0
                    .extend(group.into_errors().into_iter().map(Diagnostic::from_shared));
            }
            Input::Error(err) => match wrapped_diagnostics(&*err) {
                Some(diagnostics) => {
                    trace!(error:% = err; "Recovered diagnostics from wrapped error");
                    self.accumulate(Input::Diagnostics(diagnostics));
                }
                None => {
                    trace!(error:% = err; "Wrapping foreign error as a diagnostic");
                    self.0.push(Diagnostic::from_shared(err));
                }
            },
            Input::Unsupported(type_name) => {
                panic!("can't construct diagnostic(s) from {type_name}")
            }
        }
    }

    /// Returns `true` if any diagnostic has error severity.
    pub fn has_errors(&self) -> bool {
        self.0.iter().any(|diag| diag.severity().is_error())
    }

    /// Returns `true` if any diagnostic has warning severity.
    pub fn has_warnings(&self) -> bool {
        self.0.iter().any(|diag| diag.severity().is_warning())
    }

    /// Iterate over the error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter().filter(|diag| diag.severity().is_error())
    }

    /// Iterate over the warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter().filter(|diag| diag.severity().is_warning())
    }

    /// Convert to a fatal error, or `None` if there are no errors.
    ///
    /// Warnings that are not accompanied by at least one error are lost:
    /// a collection holding only warnings yields `None`. Use
    /// [`Diagnostics::err_with_warnings`] or [`Diagnostics::into_result`]
    /// when warnings must survive.
    pub fn err(&self) -> Option<FatalError> {
        if !self.has_errors() {
            return None;
        }
        Some(FatalError::new(self.clone()))
    }

    /// Like [`Diagnostics::err`], but a warnings-only collection yields a
    /// [`DiagnosticsError::NonFatal`] instead of `None`.
    ///
    /// Only an empty collection yields `None`.
    pub fn err_with_warnings(&self) -> Option<DiagnosticsError> {
        if self.is_empty() {
            return None;
        }
        match self.err() {
            Some(err) => Some(DiagnosticsError::Fatal(err)),
            None => Some(DiagnosticsError::NonFatal(NonFatalError::new(self.clone()))),
        }
    }

    /// Convert to a non-fatal error regardless of the severities present,
    /// or `None` if the collection is empty.
    pub fn non_fatal_err(&self) -> Option<NonFatalError> {
        if self.is_empty() {
            return None;
        }
        Some(NonFatalError::new(self.clone()))
    }

    /// Split on error presence: `Err` with every diagnostic when there is at
    /// least one error, otherwise `Ok` with the (possibly empty) warnings.
    pub fn into_result(self) -> Result<Diagnostics, FatalError> {
        if self.has_errors() {
            Err(FatalError::new(self))
        } else {
            Ok(self)
        }
    }

    /// Sort in place: warnings before errors, sourceless before sourced,
    /// shallow file paths before deep ones, then by position within a file.
    ///
    /// Diagnostics that do not differ in any of these keep their relative
    /// order.
    pub fn sort(&mut self) {
        self.0.sort_by(sort::compare);
        debug!(count = self.0.len(); "Sorted diagnostics");
    }
}

/// Find a diagnostics view along the source chain of `err`, starting with
/// `err` itself.
fn wrapped_diagnostics(err: &(dyn Error + 'static)) -> Option<Diagnostics> {
    let mut current = Some(err);
    while let Some(err) = current {
        if let Some(view) = err.downcast_ref::<FatalError>() {
            return Some(view.diagnostics().clone());
        }
        if let Some(view) = err.downcast_ref::<NonFatalError>() {
            return Some(view.diagnostics().clone());
        }
        if let Some(view) = err.downcast_ref::<DiagnosticsError>() {
            return Some(view.diagnostics().clone());
        }
        current = err.source();
    }
    None
}

impl From<Vec<Diagnostic>> for Diagnostics {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self(diagnostics)
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Self(vec![diagnostic])
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Accumulate inputs of mixed shapes into a collection.
///
/// Each argument after the collection is converted with [`Input::from`].
///
/// # Example
///
/// ```
/// # use findings::{Diagnostic, Diagnostics, append};
///
/// let earlier = Diagnostics::from(Diagnostic::warning("unused variable"));
/// let missing: Option<Diagnostic> = None;
///
/// let diags = append!(
///     Diagnostics::new(),
///     earlier,
///     Diagnostic::error("undefined variable"),
///     missing,
/// );
///
/// assert_eq!(diags.len(), 2);
/// ```
#[macro_export]
macro_rules! append {
    ($diags:expr $(, $input:expr)* $(,)?) => {{
        let inputs: ::std::vec::Vec<$crate::Input> = ::std::vec![$($crate::Input::from($input)),*];
        $diags.append(inputs)
    }};
}

#[cfg(test)]
mod tests {
    use std::{fmt, io, sync::Arc};

    use findings_core::error_group::{ErrorGroup, SharedError};

    use super::*;

    /// An application error that carries a diagnostics view as its source.
    #[derive(Debug)]
    struct ConfigError {
        inner: FatalError,
    }

    impl fmt::Display for ConfigError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "invalid configuration")
        }
    }

    impl Error for ConfigError {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.inner)
        }
    }

    fn summaries(diags: &Diagnostics) -> Vec<&str> {
        diags.iter().map(|d| d.description().summary()).collect()
    }

    #[test]
    fn test_append_nothing_is_empty() {
        let diags = append!(Diagnostics::new(), None::<Diagnostic>, None::<Diagnostics>);

        assert!(diags.is_empty());
        assert_eq!(diags, Diagnostics::default());
    }

    #[test]
    fn test_append_diagnostic() {
        let diags = Diagnostics::new().append([Diagnostic::error("a"), Diagnostic::warning("b")]);

        assert_eq!(summaries(&diags), ["a", "b"]);
    }

    #[test]
    fn test_append_flattens_collections() {
        let first = Diagnostics::from(vec![Diagnostic::error("a"), Diagnostic::error("b")]);
        let second = Diagnostics::from(vec![Diagnostic::warning("c")]);

        let diags = Diagnostics::new().append([first, second]);

        assert_eq!(diags.len(), 3);
        assert_eq!(summaries(&diags), ["a", "b", "c"]);
    }

    #[test]
    fn test_append_keeps_duplicates() {
        let diags = Diagnostics::new().append([Diagnostic::error("same"), Diagnostic::error("same")]);

        assert_eq!(diags.len(), 2);
    }

    #[test]
    fn test_append_unwraps_views() {
        let inner = Diagnostics::from(vec![Diagnostic::error("a"), Diagnostic::warning("b")]);
        let fatal = inner.err().expect("has errors");
        let non_fatal = inner.non_fatal_err().expect("not empty");

        let diags = append!(Diagnostics::new(), fatal, non_fatal);

        assert_eq!(summaries(&diags), ["a", "b", "a", "b"]);
        assert!(diags.iter().all(|d| !d.is_native()));
    }

    #[test]
    fn test_append_wraps_group_members() {
        let mut group = ErrorGroup::new();
        group.push(io::Error::other("first"));
        group.push(io::Error::other("second"));

        let diags = Diagnostics::new().append([group]);

        assert_eq!(summaries(&diags), ["first", "second"]);
        assert!(diags.iter().all(|d| d.is_native() && d.severity().is_error()));
    }

    #[test]
    fn test_append_wraps_plain_error() {
        let diags = append!(Diagnostics::new(), Input::error(io::Error::other("boom")));

        assert_eq!(diags.len(), 1);
        let diag = &diags.as_slice()[0];
        assert!(diag.severity().is_error());
        assert!(diag.source().subject().is_none());
        assert_eq!(diag.description().summary(), "boom");
        assert!(diag.is_native());
    }

    #[test]
    fn test_append_unwraps_diagnostics_in_source_chain() {
        let inner = Diagnostics::from(vec![Diagnostic::error("a"), Diagnostic::error("b")]);
        let err = ConfigError {
            inner: inner.err().expect("has errors"),
        };

        let diags = append!(Diagnostics::new(), Input::error(err));

        assert_eq!(summaries(&diags), ["a", "b"]);
    }

    #[test]
    fn test_append_shared_error() {
        let shared: SharedError = Arc::new(io::Error::other("shared"));

        let diags = Diagnostics::new().append([shared.clone()]);

        let cause = diags.as_slice()[0].cause().expect("wrapped error");
        assert!(Arc::ptr_eq(cause, &shared));
    }

    #[test]
    #[should_panic(expected = "can't construct diagnostic(s) from")]
    fn test_append_unsupported_panics() {
        let _ = Diagnostics::new().append([Input::unsupported::<String>()]);
    }

    #[test]
    fn test_push() {
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic::warning("w"));
        diags.push(None::<Diagnostic>);
        diags.push(Diagnostics::from(Diagnostic::error("e")));

        assert_eq!(summaries(&diags), ["w", "e"]);
    }

    #[test]
    fn test_has_errors() {
        assert!(!Diagnostics::new().has_errors());
        assert!(!Diagnostics::from(Diagnostic::warning("w")).has_errors());
        assert!(Diagnostics::from(vec![Diagnostic::warning("w"), Diagnostic::error("e")]).has_errors());
    }

    #[test]
    fn test_errors_and_warnings_iterators() {
        let diags = Diagnostics::from(vec![
            Diagnostic::warning("w1"),
            Diagnostic::error("e1"),
            Diagnostic::warning("w2"),
        ]);

        assert_eq!(diags.errors().count(), 1);
        assert_eq!(diags.warnings().count(), 2);
        assert!(diags.has_warnings());
    }

    #[test]
    fn test_err() {
        assert!(Diagnostics::new().err().is_none());
        assert!(Diagnostics::from(Diagnostic::warning("w")).err().is_none());

        let err = Diagnostics::from(Diagnostic::error("e")).err().expect("has errors");
        assert_eq!(err.diagnostics().len(), 1);
    }

    #[test]
    fn test_err_with_warnings() {
        assert!(Diagnostics::new().err_with_warnings().is_none());

        let warnings = Diagnostics::from(Diagnostic::warning("w"));
        let err = warnings.err_with_warnings().expect("not empty");
        assert!(matches!(err, DiagnosticsError::NonFatal(_)));

        let mixed = Diagnostics::from(vec![Diagnostic::warning("w"), Diagnostic::error("e")]);
        let err = mixed.err_with_warnings().expect("not empty");
        assert!(matches!(err, DiagnosticsError::Fatal(_)));
        assert_eq!(err.diagnostics().len(), 2);
    }

    #[test]
    fn test_non_fatal_err() {
        assert!(Diagnostics::new().non_fatal_err().is_none());

        let errors = Diagnostics::from(Diagnostic::error("e"));
        let err = errors.non_fatal_err().expect("not empty");
        assert_eq!(err.diagnostics(), &errors);
    }

    #[test]
    fn test_into_result() {
        let warnings = Diagnostics::from(Diagnostic::warning("w"));
        assert_eq!(warnings.clone().into_result(), Ok(warnings));

        let errors = Diagnostics::from(Diagnostic::error("e"));
        let err = errors.clone().into_result().expect_err("has errors");
        assert_eq!(err.diagnostics(), &errors);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    /// Strategy for a short list of authored diagnostics of either severity.
    fn diagnostics_strategy() -> impl Strategy<Value = Vec<Diagnostic>> {
        let diagnostic = (any::<bool>(), "[a-z]{1,8}").prop_map(|(is_error, summary)| {
            if is_error {
                Diagnostic::error(summary)
            } else {
                Diagnostic::warning(summary)
            }
        });
        proptest::collection::vec(diagnostic, 0..8)
    }

    /// Strategy for the shape a list is handed over in.
    fn shape_strategy() -> impl Strategy<Value = u8> {
        0u8..4
    }

    /// Turn `items` into inputs of the chosen shape.
    fn as_inputs(items: Vec<Diagnostic>, shape: u8) -> Vec<Input> {
        match shape {
            0 => vec![Input::from(Diagnostics::from(items))],
            1 => vec![Input::from(FatalError::new(Diagnostics::from(items)))],
            2 => vec![Input::from(NonFatalError::new(Diagnostics::from(items)))],
            _ => items
                .into_iter()
                .flat_map(|diag| [Input::Nothing, Input::from(diag)])
                .chain([Input::from(None::<Diagnostics>)])
                .collect(),
        }
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Appending two lists in any shape yields exactly the first list's
    /// elements followed by the second's.
    fn check_append_concatenates(
        a: Vec<Diagnostic>,
        a_shape: u8,
        b: Vec<Diagnostic>,
        b_shape: u8,
    ) -> Result<(), TestCaseError> {
        let expected: Vec<Diagnostic> = a.iter().chain(b.iter()).cloned().collect();

        let inputs: Vec<Input> = as_inputs(a, a_shape)
            .into_iter()
            .chain(as_inputs(b, b_shape))
            .collect();
        let diags = Diagnostics::new().append(inputs);

        prop_assert_eq!(diags.len(), expected.len());
        prop_assert_eq!(diags.as_slice(), expected.as_slice());
        Ok(())
    }

    /// Appending only absent inputs yields the empty collection.
    fn check_append_nothing_is_default(count: usize) -> Result<(), TestCaseError> {
        let inputs = (0..count).map(|_| None::<Diagnostic>);
        let diags = Diagnostics::new().append(inputs);

        prop_assert_eq!(diags, Diagnostics::default());
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn append_concatenates(
            a in diagnostics_strategy(),
            a_shape in shape_strategy(),
            b in diagnostics_strategy(),
            b_shape in shape_strategy(),
        ) {
            check_append_concatenates(a, a_shape, b, b_shape)?;
        }

        #[test]
        fn append_nothing_is_default(count in 0usize..6) {
            check_append_nothing_is_default(count)?;
        }
    }
}
