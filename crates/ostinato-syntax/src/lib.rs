//! Surface syntax for Ostinato λ-terms and constraint skeletons.
//!
//! The grammar accepts both ASCII and Unicode spellings (`\`/`λ`,
//! `->`/`→`), juxtaposition for application, and `λx y. e` as sugar for
//! nested abstractions. Constraint skeletons mirror the shape of the term
//! they annotate: `_` marks an unannotated position, a type marks an
//! annotated one, and binder annotations are written `λx:A. …`.
//!
//! Entry points:
//!
//! - [`parse_term`]: a plain λ-term
//! - [`parse_constraint`]: a constraint skeleton
//! - [`parse_query`]: `term` or `term :: constraint`, the REPL input form

pub mod error;
pub mod lexer;
pub mod parse;
pub mod span;
pub mod token;

pub use error::{ParseError, Result};
pub use parse::{parse_constraint, parse_query, parse_term, Query};
