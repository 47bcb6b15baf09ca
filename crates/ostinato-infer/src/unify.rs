//! Unification of simple types under the environment's substitution.

use crate::{
    env::InferEnv,
    error::{Result, Trace, TypeError},
};
use ostinato_core::{Ty, Type, TypeId};

impl InferEnv {
    /// Merges two types, recording new bindings in the substitution, and
    /// returns the merged type.
    ///
    /// When two distinct variables meet, the right-hand one is bound to
    /// the left-hand one. Inputs are unified as given; the walk is
    /// responsible for passing already-substituted types where required.
    pub fn unify(&mut self, t1: &Type, t2: &Type) -> Result<Type> {
        match (t1, t2) {
            (Ty::Var(i), Ty::Var(j)) if i == j => Ok(Ty::Var(*i)),
            (t, Ty::Var(j)) => self.bind_checked(*j, t),
            (Ty::Var(i), t) => self.bind_checked(*i, t),
            (Ty::Arrow(a, b), Ty::Arrow(c, d)) => {
                let domain = self.unify(a, c)?;
                let codomain = self.unify(b, d)?;
                Ok(Ty::arrow(domain, codomain))
            }
        }
    }

    /// Binds `id := ty` after the occurs check, returning `ty`.
    fn bind_checked(&mut self, id: TypeId, ty: &Type) -> Result<Type> {
        if ty.contains(&id) {
            return Err(TypeError::InfiniteType {
                lhs: Ty::Var(id),
                rhs: ty.clone(),
                trace: Trace::default(),
            });
        }
        self.bind_type_var(id, ty);
        Ok(ty.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tv(id: u32) -> Type {
        Ty::Var(TypeId::new(id))
    }

    #[test]
    fn identical_variables_unify_without_binding() {
        let mut env = InferEnv::new();
        assert_eq!(env.unify(&tv(1), &tv(1)).unwrap(), tv(1));
        assert_eq!(env.resolve(&tv(1)), tv(1));
    }

    #[test]
    fn distinct_variables_bind_the_right_hand_one() {
        let mut env = InferEnv::new();
        assert_eq!(env.unify(&tv(1), &tv(2)).unwrap(), tv(1));
        // t2 now resolves through t1, not the other way around
        assert_eq!(env.resolve(&tv(2)), tv(1));
        assert_eq!(env.resolve(&tv(1)), tv(1));
    }

    #[test]
    fn variable_against_arrow_binds_the_variable() {
        let mut env = InferEnv::new();
        let arrow = Ty::arrow(tv(2), tv(3));
        assert_eq!(env.unify(&tv(1), &arrow).unwrap(), arrow);
        assert_eq!(env.resolve(&tv(1)), arrow);

        let mut env = InferEnv::new();
        assert_eq!(env.unify(&arrow, &tv(1)).unwrap(), arrow);
        assert_eq!(env.resolve(&tv(1)), arrow);
    }

    #[test]
    fn arrows_unify_componentwise() {
        let mut env = InferEnv::new();
        let left = Ty::arrow(tv(1), tv(2));
        let right = Ty::arrow(tv(3), tv(4));
        let merged = env.unify(&left, &right).unwrap();
        assert_eq!(merged, Ty::arrow(tv(1), tv(2)));
        assert_eq!(env.resolve(&tv(3)), tv(1));
        assert_eq!(env.resolve(&tv(4)), tv(2));
    }

    #[test]
    fn occurs_check_rejects_infinite_types() {
        let mut env = InferEnv::new();
        let arrow = Ty::arrow(tv(1), tv(2));
        let err = env.unify(&tv(1), &arrow).unwrap_err();
        assert_eq!(
            err.to_string(),
            "can't construct infinite type: t1 = t1 → t2"
        );
    }

    #[test]
    fn binding_rewrites_term_variable_types() {
        let mut env = InferEnv::new();
        env.bind_term_var("x", tv(1));
        env.unify(&Ty::arrow(tv(2), tv(3)), &tv(1)).unwrap();
        assert_eq!(env.lookup_term_var("x"), Some(&Ty::arrow(tv(2), tv(3))));
    }
}
