//! Core data model for the Ostinato λ-calculus toolchain.
//!
//! This crate defines the two tree shapes everything else is built on, plus
//! the pure algorithms that operate on them:
//!
//! - [`Term`]: λ-terms generic over their variable label, with free/bound
//!   variable analysis, α-equivalence, structural pattern matching, and
//!   capture-avoiding substitution
//! - [`Ty`]: simple types (variables and arrows), instantiated as [`Type`]
//!   over opaque [`TypeId`]s and as [`NamedType`] over user-facing names
//! - [`fresh_name`]: the deterministic fresh-variable supply used when
//!   substitution has to rename a binder
//!
//! Nothing here performs inference; see `ostinato-infer` for that.

mod names;
mod subst;
mod term;
mod ty;

pub use names::{fresh_name, names};
pub use term::Term;
pub use ty::{ConstraintTerm, NamedType, NamedTypedTerm, Ty, Type, TypeId, TypedTerm};
