//! The inference walk and the public entry points.
//!
//! The walk carries the *expected* type of each subterm downwards,
//! unifying it against what the subterm turns out to be, and produces a
//! typed copy of the term alongside the inferred type.

use crate::{
    canon::{apply_names, canonicalize},
    constrain::merge_constraints,
    env::InferEnv,
    error::Result,
};
use ostinato_core::{ConstraintTerm, NamedType, NamedTypedTerm, Term, Ty, Type, TypeId, TypedTerm};
use std::collections::BTreeMap;

/// Infers the type of a closed or open term with no constraints.
///
/// Returns the canonical type and the typed copy of the term, with type
/// variables renumbered to a dense `t0, t1, …` range.
pub fn infer_type(term: &Term<String>) -> Result<(NamedType, NamedTypedTerm)> {
    infer_with(term, None)
}

/// Infers the type of a term and reconciles it with a user-supplied
/// constraint skeleton, renaming the constrained type variables to the
/// names the skeleton assigns.
pub fn infer_type_with_constraint(
    term: &Term<String>,
    constraint: &ConstraintTerm,
) -> Result<(NamedType, NamedTypedTerm)> {
    infer_with(term, Some(constraint))
}

fn infer_with(
    term: &Term<String>,
    constraint: Option<&ConstraintTerm>,
) -> Result<(NamedType, NamedTypedTerm)> {
    let mut env = InferEnv::new();
    let (ty, tree) = env.infer(term, Ty::Var(TypeId::new(0)))?;
    let (ty, tree) = canonicalize(&env, ty, tree);
    let names = match constraint {
        Some(constraint) => merge_constraints(constraint, &tree)?,
        None => BTreeMap::new(),
    };
    Ok(apply_names(ty, tree, &names))
}

impl InferEnv {
    /// Infers `term` against the expected type `required`.
    ///
    /// On a unification failure the enclosing term is recorded as the
    /// error propagates, so the final trace lists every enclosing subterm
    /// innermost-first.
    pub fn infer(&mut self, term: &Term<String>, required: Type) -> Result<(Type, TypedTerm)> {
        self.infer_node(term, required)
            .map_err(|err| err.in_term(term))
    }

    fn infer_node(&mut self, term: &Term<String>, required: Type) -> Result<(Type, TypedTerm)> {
        match term {
            Term::Var(name) => match self.lookup_term_var(name).cloned() {
                None => {
                    self.bind_term_var(name.clone(), required.clone());
                    Ok((required.clone(), Term::Var(required)))
                }
                Some(old) => {
                    let ty = self.unify(&old, &required)?;
                    Ok((ty.clone(), Term::Var(ty)))
                }
            },
            Term::App(fun, arg) => {
                let domain = self.fresh_tvar();
                let (arg_ty, arg_tree) = self.infer(arg, domain)?;
                let (fun_ty, fun_tree) = self.infer(fun, Ty::arrow(arg_ty, required))?;
                // unification kept the arrow shape; its codomain may have
                // been refined by the inner unifications
                match fun_ty {
                    Ty::Arrow(_, codomain) => Ok((*codomain, Term::app(fun_tree, arg_tree))),
                    Ty::Var(_) => {
                        unreachable!("a function position unified against an arrow stays an arrow")
                    }
                }
            }
            Term::Abs(var, body) => {
                let var_ty = self.fresh_tvar();
                let body_required = self.fresh_tvar();
                let saved = self.lookup_term_var(var).cloned();
                self.bind_term_var(var.clone(), var_ty.clone());
                let (body_ty, body_tree) = self.infer(body, body_required)?;
                let total = self.unify(&Ty::arrow(var_ty.clone(), body_ty), &required)?;
                match saved {
                    Some(old) => self.bind_term_var(var.clone(), old),
                    None => self.unbind_term_var(var),
                }
                Ok((total, Term::Abs(var_ty, Box::new(body_tree))))
            }
        }
    }
}
