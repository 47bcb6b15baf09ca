//! Inference failures.
//!
//! Every failure is reported as a human-readable message; `Display` is the
//! wire format the REPL and the convenience wrappers print verbatim.

use miette::Diagnostic;
use ostinato_core::{NamedType, Term, Type};
use std::fmt;
use thiserror::Error;

/// Result type for inference operations.
pub type Result<T> = std::result::Result<T, TypeError>;

/// An inference failure.
#[derive(Debug, Clone, Error, Diagnostic)]
pub enum TypeError {
    /// The occurs check caught a type variable inside its own binding.
    #[error("can't construct infinite type: {lhs} = {rhs}{trace}")]
    InfiniteType {
        lhs: Type,
        rhs: Type,
        trace: Trace,
    },

    /// A constraint skeleton whose shape diverges from the term.
    #[error("constraint shape not match!")]
    ConstraintShape,

    /// Two annotations assign different types to the same type variable.
    #[error("{existing} can't be {new}")]
    ConstraintConflict {
        existing: NamedType,
        new: NamedType,
    },

    /// An arrow type annotated with a bare type name.
    #[error("type {ty} can't be constraint to {name}")]
    ConstraintArrow { ty: Type, name: NamedType },
}

impl TypeError {
    /// Records `term` as an enclosing context of an in-flight unification
    /// failure. Called at each level as the error propagates out of the
    /// walk, so the trace reads innermost-first.
    pub(crate) fn in_term(mut self, term: &Term<String>) -> Self {
        if let TypeError::InfiniteType { trace, .. } = &mut self {
            trace.0.push(term.clone());
        }
        self
    }
}

/// The enclosing subterms of a unification failure, innermost first.
#[derive(Debug, Clone, Default)]
pub struct Trace(Vec<Term<String>>);

impl Trace {
    /// The recorded subterms, innermost first.
    pub fn terms(&self) -> &[Term<String>] {
        &self.0
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for term in &self.0 {
            write!(f, "\n\tin {term}")?;
        }
        Ok(())
    }
}
