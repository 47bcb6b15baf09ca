//! Reconciling a user-supplied constraint skeleton with an inferred tree.
//!
//! The skeleton mirrors the term's shape; walking both in lockstep yields
//! an assignment from canonical type-variable ids to the user's names.
//! The first inconsistency fails the whole merge.

use crate::error::{Result, TypeError};
use ostinato_core::{ConstraintTerm, NamedType, Term, Ty, Type, TypeId, TypedTerm};
use std::collections::BTreeMap;

pub(crate) type NameMap = BTreeMap<TypeId, NamedType>;

/// Walks the skeleton and the typed tree together, collecting the name
/// assignment every annotation implies.
pub(crate) fn merge_constraints(constraint: &ConstraintTerm, tree: &TypedTerm) -> Result<NameMap> {
    match (constraint, tree) {
        (Term::Var(None), Term::Var(_)) => Ok(NameMap::new()),
        (Term::Var(Some(named)), Term::Var(ty)) => constrain_type(ty, named),
        (Term::App(cfun, carg), Term::App(fun, arg)) => {
            let mut names = merge_constraints(cfun, fun)?;
            merge_into(&mut names, merge_constraints(carg, arg)?)?;
            Ok(names)
        }
        (Term::Abs(annotation, cbody), Term::Abs(binder_ty, body)) => {
            let mut names = match annotation {
                Some(named) => constrain_type(binder_ty, named)?,
                None => NameMap::new(),
            };
            merge_into(&mut names, merge_constraints(cbody, body)?)?;
            Ok(names)
        }
        _ => Err(TypeError::ConstraintShape),
    }
}

/// Matches an inferred type against an annotation. A type variable takes
/// the whole annotation; arrows decompose pointwise; an arrow annotated
/// with a bare name is an error.
fn constrain_type(ty: &Type, named: &NamedType) -> Result<NameMap> {
    match (ty, named) {
        (Ty::Var(id), named) => Ok(NameMap::from([(*id, named.clone())])),
        (Ty::Arrow(a, b), Ty::Arrow(c, d)) => {
            let mut names = constrain_type(a, c)?;
            merge_into(&mut names, constrain_type(b, d)?)?;
            Ok(names)
        }
        (Ty::Arrow(..), Ty::Var(_)) => Err(TypeError::ConstraintArrow {
            ty: ty.clone(),
            name: named.clone(),
        }),
    }
}

/// Unions two assignments; a key assigned two different types fails.
fn merge_into(into: &mut NameMap, from: NameMap) -> Result<()> {
    for (id, named) in from {
        match into.get(&id) {
            Some(existing) if *existing != named => {
                return Err(TypeError::ConstraintConflict {
                    existing: existing.clone(),
                    new: named,
                });
            }
            _ => {
                into.insert(id, named);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tv(id: u32) -> Type {
        Ty::Var(TypeId::new(id))
    }

    fn named(name: &str) -> NamedType {
        Ty::Var(name.to_string())
    }

    #[test]
    fn annotations_collect_into_a_name_map() {
        // λ_:A. λ_:B. _ against λ(t0). λ(t1). {x: t0}
        let constraint: ConstraintTerm = Term::abs(
            Some(named("A")),
            Term::abs(Some(named("B")), Term::Var(None)),
        );
        let tree: TypedTerm = Term::abs(tv(0), Term::abs(tv(1), Term::Var(tv(0))));
        let names = merge_constraints(&constraint, &tree).unwrap();
        assert_eq!(
            names,
            NameMap::from([
                (TypeId::new(0), named("A")),
                (TypeId::new(1), named("B")),
            ])
        );
    }

    #[test]
    fn arrow_annotations_decompose() {
        let annotation = Ty::arrow(named("A"), named("B"));
        let names = constrain_type(&Ty::arrow(tv(0), tv(1)), &annotation).unwrap();
        assert_eq!(
            names,
            NameMap::from([
                (TypeId::new(0), named("A")),
                (TypeId::new(1), named("B")),
            ])
        );
    }

    #[test]
    fn shape_mismatch_fails() {
        let constraint: ConstraintTerm = Term::app(Term::Var(None), Term::Var(None));
        let tree: TypedTerm = Term::Var(tv(0));
        let err = merge_constraints(&constraint, &tree).unwrap_err();
        assert_eq!(err.to_string(), "constraint shape not match!");
    }

    #[test]
    fn conflicting_assignments_fail() {
        // the same variable annotated A at the binder and B at the leaf
        let constraint: ConstraintTerm =
            Term::abs(Some(named("A")), Term::Var(Some(named("B"))));
        let tree: TypedTerm = Term::abs(tv(0), Term::Var(tv(0)));
        let err = merge_constraints(&constraint, &tree).unwrap_err();
        assert_eq!(err.to_string(), "A can't be B");
    }

    #[test]
    fn matching_duplicate_assignments_are_fine() {
        let constraint: ConstraintTerm =
            Term::abs(Some(named("A")), Term::Var(Some(named("A"))));
        let tree: TypedTerm = Term::abs(tv(0), Term::Var(tv(0)));
        let names = merge_constraints(&constraint, &tree).unwrap();
        assert_eq!(names, NameMap::from([(TypeId::new(0), named("A"))]));
    }

    #[test]
    fn arrow_against_bare_name_fails() {
        let err = constrain_type(&Ty::arrow(tv(0), tv(1)), &named("C")).unwrap_err();
        assert_eq!(err.to_string(), "type t0 → t1 can't be constraint to C");
    }
}
