//! Simple types: variables and right-associative arrows.

use crate::term::Term;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque identifier for a machine-generated type variable.
///
/// Displayed as `t<n>`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TypeId(u32);

impl TypeId {
    /// Creates a type-variable id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw id.
    pub const fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// A simple type over leaves of type `T`.
///
/// [`Type`] uses [`TypeId`] leaves during inference; [`NamedType`] uses
/// user-facing names. Arrows associate to the right.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ty<T> {
    /// A type variable.
    Var(T),
    /// A function type from the left type to the right one.
    Arrow(Box<Ty<T>>, Box<Ty<T>>),
}

/// The machine-facing instantiation used while inferring.
pub type Type = Ty<TypeId>;

/// The user-facing instantiation: leaves carry names.
pub type NamedType = Ty<String>;

/// A term decorated with its inferred types: occurrences carry their type,
/// binders the type of the bound variable.
pub type TypedTerm = Term<Type>;

/// A typed term after renaming into user-facing types.
pub type NamedTypedTerm = Term<NamedType>;

/// A user-supplied partial type skeleton, shaped like the term it
/// constrains: annotated positions carry a named type, the rest `None`.
pub type ConstraintTerm = Term<Option<NamedType>>;

impl<T> Ty<T> {
    /// Creates an arrow type.
    pub fn arrow(domain: Ty<T>, codomain: Ty<T>) -> Self {
        Ty::Arrow(Box::new(domain), Box::new(codomain))
    }

    /// Relabels every leaf, preserving the arrow structure.
    pub fn map<U>(self, f: &mut impl FnMut(T) -> U) -> Ty<U> {
        match self {
            Ty::Var(v) => Ty::Var(f(v)),
            Ty::Arrow(a, b) => Ty::arrow((*a).map(f), (*b).map(f)),
        }
    }

    /// Splices a type in place of every leaf.
    pub fn subst<U>(self, f: &mut impl FnMut(T) -> Ty<U>) -> Ty<U> {
        match self {
            Ty::Var(v) => f(v),
            Ty::Arrow(a, b) => Ty::arrow((*a).subst(f), (*b).subst(f)),
        }
    }

    /// Whether the leaf occurs anywhere in the type.
    pub fn contains(&self, var: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Ty::Var(v) => v == var,
            Ty::Arrow(a, b) => a.contains(var) || b.contains(var),
        }
    }

    /// The leaves of the type, sorted and deduplicated.
    pub fn free_vars(&self) -> Vec<T>
    where
        T: Copy + Ord,
    {
        let mut vars = Vec::new();
        self.collect_vars(&mut vars);
        vars.sort();
        vars.dedup();
        vars
    }

    fn collect_vars(&self, vars: &mut Vec<T>)
    where
        T: Copy,
    {
        match self {
            Ty::Var(v) => vars.push(*v),
            Ty::Arrow(a, b) => {
                a.collect_vars(vars);
                b.collect_vars(vars);
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for Ty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Var(v) => write!(f, "{v}"),
            Ty::Arrow(a, b) => {
                // only an arrow in domain position needs parentheses
                if matches!(**a, Ty::Arrow(..)) {
                    write!(f, "({a}) → {b}")
                } else {
                    write!(f, "{a} → {b}")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tv(id: u32) -> Type {
        Ty::Var(TypeId::new(id))
    }

    #[test]
    fn type_id_display() {
        assert_eq!(TypeId::new(0).to_string(), "t0");
        assert_eq!(TypeId::new(12).to_string(), "t12");
    }

    #[test]
    fn arrows_are_right_associative_in_display() {
        let ty = Ty::arrow(tv(0), Ty::arrow(tv(1), tv(2)));
        assert_eq!(ty.to_string(), "t0 → t1 → t2");
        let ty = Ty::arrow(Ty::arrow(tv(0), tv(1)), tv(2));
        assert_eq!(ty.to_string(), "(t0 → t1) → t2");
    }

    #[test]
    fn map_relabels_leaves() {
        let ty = Ty::arrow(tv(0), Ty::arrow(tv(1), tv(0)));
        let shifted = ty.map(&mut |id| TypeId::new(id.id() + 10));
        assert_eq!(
            shifted,
            Ty::arrow(tv(10), Ty::arrow(tv(11), tv(10)))
        );
    }

    #[test]
    fn subst_splices_whole_types() {
        let ty = Ty::arrow(tv(0), tv(1));
        let spliced = ty.subst(&mut |id| {
            if id == TypeId::new(0) {
                Ty::arrow(tv(2), tv(3))
            } else {
                Ty::Var(id)
            }
        });
        assert_eq!(spliced, Ty::arrow(Ty::arrow(tv(2), tv(3)), tv(1)));
    }

    #[test]
    fn contains_and_free_vars() {
        let ty = Ty::arrow(tv(0), Ty::arrow(tv(2), tv(0)));
        assert!(ty.contains(&TypeId::new(2)));
        assert!(!ty.contains(&TypeId::new(1)));
        assert_eq!(ty.free_vars(), vec![TypeId::new(0), TypeId::new(2)]);
    }

    #[test]
    fn named_type_display() {
        let ty: NamedType = Ty::arrow(
            Ty::Var("A".to_string()),
            Ty::arrow(Ty::Var("B".to_string()), Ty::Var("A".to_string())),
        );
        assert_eq!(ty.to_string(), "A → B → A");
    }
}
