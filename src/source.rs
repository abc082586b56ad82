//! The seam between the C boundary and whatever produces tokens.
//!
//! The boundary only knows about `(kind, text, line)` triples. Anything that can
//! turn a `&str` into an ordered list of them can sit behind the exported entry
//! points, including plain closures in tests.

use crate::error::TokenizeResult;

/// One token as emitted by a tokenizer, before it crosses the boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceToken {
    pub kind: i32,
    pub text: String,
    pub line: usize,
}

impl SourceToken {
    pub fn new(kind: i32, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }
}

/// Something that turns source text into an ordered token sequence.
///
/// Implementations must return tokens in source order; the boundary preserves
/// that order exactly.
pub trait TokenSource {
    fn tokenize(&self, source: &str) -> TokenizeResult<Vec<SourceToken>>;
}

impl<F> TokenSource for F
where
    F: Fn(&str) -> TokenizeResult<Vec<SourceToken>>,
{
    fn tokenize(&self, source: &str) -> TokenizeResult<Vec<SourceToken>> {
        self(source)
    }
}
