//! Miette diagnostic wrapper for incomplete tag strings.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![expect(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic pointing at the unscanned tail of a tag.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("incomplete tag pair: {dropped}")]
#[diagnostic(
    code(tagbind::tag),
    severity(Warning),
    help("tag values must be double-quoted, e.g. env:\"PORT\"; the rest of the tag was ignored")
)]
pub struct TagDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("scanning stopped here")]
    span: SourceSpan,

    dropped: String,
}

impl TagDiagnostic {
    /// Create a diagnostic for the `dropped` tail of `tag`.
    pub fn new(tag: &str, dropped: &str) -> Self {
        // The dropped text is a trimmed suffix of the tag.
        let offset = tag.rfind(dropped).unwrap_or(0);
        TagDiagnostic {
            src: NamedSource::new("tag", tag.to_string()),
            span: (offset, dropped.len()).into(),
            dropped: dropped.to_string(),
        }
    }
}
