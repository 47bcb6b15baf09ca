//! Parse errors with source spans.

use crate::span::Span;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// A syntax error, pointing at the offending byte range.
#[derive(Debug, Clone, Error, Diagnostic)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    #[label("here")]
    pub span: Span,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}
