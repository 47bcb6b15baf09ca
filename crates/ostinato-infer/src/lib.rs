//! Type inference for Ostinato λ-terms.
//!
//! A term enters [`infer_type`] (or [`infer_type_with_constraint`]) and
//! comes out as a simple type together with a typed copy of the term. The
//! pipeline is:
//!
//! 1. Walk the term with an expected type, minting fresh type variables and
//!    unifying as it goes ([`InferEnv`])
//! 2. Apply the accumulated substitution and renumber the surviving type
//!    variables into a dense `t0, t1, …` range
//! 3. Reconcile a user-supplied constraint skeleton, if any, and rename
//!    type variables into user-facing names
//!
//! Failures are [`TypeError`]s whose `Display` output is the exact message
//! the REPL shows.

mod canon;
mod constrain;
mod env;
mod error;
mod infer;
mod render;
mod unify;

pub use env::InferEnv;
pub use error::{Result, Trace, TypeError};
pub use infer::{infer_type, infer_type_with_constraint};
pub use render::show_type_tree;

use ostinato_core::{ConstraintTerm, Term};

/// Infers the type of `term` and renders `"<tree> : <type>"`, or the
/// failure message verbatim.
pub fn infer_then_show(term: &Term<String>) -> String {
    match infer_type(term) {
        Ok((ty, tree)) => format!("{} : {}", show_type_tree(term, &tree), ty),
        Err(err) => err.to_string(),
    }
}

/// Like [`infer_then_show`], constrained by a user-supplied skeleton.
pub fn infer_constraint_show(term: &Term<String>, constraint: &ConstraintTerm) -> String {
    match infer_type_with_constraint(term, constraint) {
        Ok((ty, tree)) => format!("{} : {}", show_type_tree(term, &tree), ty),
        Err(err) => err.to_string(),
    }
}
