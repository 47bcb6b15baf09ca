//! Canonicalization of inference results.
//!
//! After the walk succeeds, the raw outputs still mention intermediate
//! type variables. Canonicalization applies the accumulated substitution
//! everywhere, renumbers the surviving ids into a dense 0-based range, and
//! finally renames ids into user-facing types.

use crate::env::InferEnv;
use ostinato_core::{NamedType, NamedTypedTerm, Ty, Type, TypeId, TypedTerm};
use std::collections::BTreeMap;

/// Applies the substitution to the result type and typed tree, then
/// renumbers the type variables that survive, ascending, onto `0, 1, 2, …`.
pub(crate) fn canonicalize(env: &InferEnv, ty: Type, tree: TypedTerm) -> (Type, TypedTerm) {
    let ty = env.resolve(&ty);
    let tree = tree.map_labels(&mut |label| env.resolve(&label));

    let mut ids = ty.free_vars();
    for label in tree.labels() {
        ids.extend(label.free_vars());
    }
    ids.sort();
    ids.dedup();

    let renumbering: BTreeMap<TypeId, TypeId> = ids
        .into_iter()
        .enumerate()
        .map(|(next, id)| (id, TypeId::new(next as u32)))
        .collect();

    let mut renumber = |id: TypeId| renumbering.get(&id).copied().unwrap_or(id);
    let ty = ty.map(&mut renumber);
    let tree = tree.map_labels(&mut |label| label.map(&mut renumber));
    (ty, tree)
}

/// Renames every type variable into a user-facing type: the constraint
/// merger's assignment where present, the default `t<n>` rendering
/// otherwise.
pub(crate) fn apply_names(
    ty: Type,
    tree: TypedTerm,
    names: &BTreeMap<TypeId, NamedType>,
) -> (NamedType, NamedTypedTerm) {
    let mut rename = |id: TypeId| -> NamedType {
        names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| Ty::Var(id.to_string()))
    };
    let ty = ty.subst(&mut rename);
    let tree = tree.map_labels(&mut |label| label.subst(&mut rename));
    (ty, tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ostinato_core::Term;

    fn tv(id: u32) -> Type {
        Ty::Var(TypeId::new(id))
    }

    #[test]
    fn renumbering_is_dense_and_ascending() {
        let mut env = InferEnv::new();
        env.bind_type_var(TypeId::new(1), &tv(5));
        // result mentions t5 and t3; they renumber to t0 and t1 by
        // ascending id
        let ty = Ty::arrow(tv(5), tv(3));
        let tree = Term::Var(tv(1));
        let (ty, tree) = canonicalize(&env, ty, tree);
        assert_eq!(ty, Ty::arrow(tv(1), tv(0)));
        // the tree's t1 resolved to t5 before renumbering
        assert_eq!(tree, Term::Var(tv(1)));
    }

    #[test]
    fn apply_names_falls_back_to_default_rendering() {
        let names = BTreeMap::from([(TypeId::new(0), Ty::Var("A".to_string()))]);
        let (ty, tree) = apply_names(
            Ty::arrow(tv(0), tv(1)),
            Term::Var(tv(0)),
            &names,
        );
        assert_eq!(
            ty,
            Ty::arrow(Ty::Var("A".to_string()), Ty::Var("t1".to_string()))
        );
        assert_eq!(tree, Term::Var(Ty::Var("A".to_string())));
    }

    #[test]
    fn apply_names_splices_arrow_assignments() {
        let names = BTreeMap::from([(
            TypeId::new(0),
            Ty::arrow(Ty::Var("A".to_string()), Ty::Var("B".to_string())),
        )]);
        let (ty, _) = apply_names(tv(0), Term::Var(tv(0)), &names);
        assert_eq!(
            ty,
            Ty::arrow(Ty::Var("A".to_string()), Ty::Var("B".to_string()))
        );
    }
}
