//! Presentation order for diagnostics.

use std::{cmp::Ordering, path::MAIN_SEPARATOR_STR};

use findings_core::source::SourceRange;

use crate::diagnostic::Diagnostic;

/// Compare two diagnostics for [`Diagnostics::sort`](crate::Diagnostics::sort).
///
/// Returns `Equal` for anything the tiers below do not distinguish, so a
/// stable sort keeps those in their original order:
///
/// 1. warnings before errors
/// 2. no subject before a subject
/// 3. for unequal subjects, fewer path separators, then filename, then
///    start byte, then end byte
pub(crate) fn compare(a: &Diagnostic, b: &Diagnostic) -> Ordering {
    if a.severity() != b.severity() {
        return a.severity().cmp(&b.severity());
    }

    match (a.source().subject(), b.source().subject()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) if a == b => Ordering::Equal,
        (Some(a), Some(b)) => compare_subjects(a, b),
    }
}

fn compare_subjects(a: &SourceRange, b: &SourceRange) -> Ordering {
    if a.filename() != b.filename() {
        return path_depth(a.filename())
            .cmp(&path_depth(b.filename()))
            .then_with(|| a.filename().cmp(b.filename()));
    }

    a.start()
        .byte()
        .cmp(&b.start().byte())
        .then_with(|| a.end().byte().cmp(&b.end().byte()))
}

fn path_depth(filename: &str) -> usize {
    filename.matches(MAIN_SEPARATOR_STR).count()
}
