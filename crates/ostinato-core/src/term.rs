//! λ-terms and the structural operations over them.
//!
//! [`Term`] is generic over its variable label `V`. Plain terms use
//! `Term<String>`; the inference engine decorates the same shape with types
//! (`Term<Type>`) and constraint skeletons use optional named types
//! (`Term<Option<NamedType>>`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A term of the untyped λ-calculus.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Term<V> {
    /// An occurrence of an identifier.
    Var(V),
    /// Application of the left term to the right one.
    App(Box<Term<V>>, Box<Term<V>>),
    /// Abstraction binding the label in the body.
    Abs(V, Box<Term<V>>),
}

impl<V> Term<V> {
    /// Creates a variable occurrence.
    pub fn var(v: impl Into<V>) -> Self {
        Term::Var(v.into())
    }

    /// Creates an application node.
    pub fn app(fun: Term<V>, arg: Term<V>) -> Self {
        Term::App(Box::new(fun), Box::new(arg))
    }

    /// Creates an abstraction node.
    pub fn abs(v: impl Into<V>, body: Term<V>) -> Self {
        Term::Abs(v.into(), Box::new(body))
    }

    /// The number of leaves and binders: 1 for a variable, 1 + the body for
    /// an abstraction, the sum of both sides for an application.
    pub fn len(&self) -> usize {
        match self {
            Term::Var(_) => 1,
            Term::App(fun, arg) => fun.len() + arg.len(),
            Term::Abs(_, body) => 1 + body.len(),
        }
    }

    /// Relabels every variable position (occurrences and binders alike),
    /// preserving the tree shape.
    pub fn map_labels<U>(self, f: &mut impl FnMut(V) -> U) -> Term<U> {
        match self {
            Term::Var(v) => Term::Var(f(v)),
            Term::App(fun, arg) => Term::app(fun.map_labels(f), arg.map_labels(f)),
            Term::Abs(v, body) => {
                let v = f(v);
                Term::Abs(v, Box::new(body.map_labels(f)))
            }
        }
    }

    /// All labels in the term, binders included, in traversal order.
    pub fn labels(&self) -> Vec<&V> {
        let mut out = Vec::new();
        self.collect_labels(&mut out);
        out
    }

    fn collect_labels<'a>(&'a self, out: &mut Vec<&'a V>) {
        match self {
            Term::Var(v) => out.push(v),
            Term::App(fun, arg) => {
                fun.collect_labels(out);
                arg.collect_labels(out);
            }
            Term::Abs(v, body) => {
                out.push(v);
                body.collect_labels(out);
            }
        }
    }
}

impl<V: Ord + Clone> Term<V> {
    /// The set of variables occurring free.
    pub fn free_vars(&self) -> BTreeSet<V> {
        match self {
            Term::Var(v) => BTreeSet::from([v.clone()]),
            Term::App(fun, arg) => {
                let mut vars = fun.free_vars();
                vars.extend(arg.free_vars());
                vars
            }
            Term::Abs(v, body) => {
                let mut vars = body.free_vars();
                vars.remove(v);
                vars
            }
        }
    }

    /// The set of variables bound by some abstraction in the term. A
    /// variable can be both free and bound in the same term.
    pub fn bound_vars(&self) -> BTreeSet<V> {
        match self {
            Term::Var(_) => BTreeSet::new(),
            Term::App(fun, arg) => {
                let mut vars = fun.bound_vars();
                vars.extend(arg.bound_vars());
                vars
            }
            Term::Abs(v, body) => {
                let mut vars = body.bound_vars();
                vars.insert(v.clone());
                vars
            }
        }
    }

    /// All subterms, the term itself included. Binders are not synthesized
    /// as variable occurrences.
    pub fn sub_terms(&self) -> Vec<&Term<V>> {
        let mut out = Vec::new();
        self.collect_sub_terms(&mut out);
        out.sort();
        out.dedup();
        out
    }

    fn collect_sub_terms<'a>(&'a self, out: &mut Vec<&'a Term<V>>) {
        out.push(self);
        match self {
            Term::Var(_) => {}
            Term::App(fun, arg) => {
                fun.collect_sub_terms(out);
                arg.collect_sub_terms(out);
            }
            Term::Abs(_, body) => body.collect_sub_terms(out),
        }
    }
}

impl<V: Clone> Term<V> {
    /// Tries `f` at the root, then descends: for an application the left
    /// child before the right; for an abstraction the binder *as if it were
    /// a variable occurrence* before the body. The first hit wins.
    ///
    /// The binder-as-variable step means a probe for `Var(x)` succeeds on
    /// `λx. y` even though `x` has no free occurrence there.
    pub fn pattern_match<R>(&self, f: &mut impl FnMut(&Term<V>) -> Option<R>) -> Option<R> {
        if let Some(found) = f(self) {
            return Some(found);
        }
        match self {
            Term::Var(_) => None,
            Term::App(fun, arg) => fun.pattern_match(f).or_else(|| arg.pattern_match(f)),
            Term::Abs(v, body) => {
                f(&Term::Var(v.clone())).or_else(|| body.pattern_match(f))
            }
        }
    }
}

impl<V: Clone + Eq> Term<V> {
    /// Whether some subterm is structurally equal to `pattern`, under the
    /// [`pattern_match`](Term::pattern_match) descent (binders included).
    pub fn contains_term(&self, pattern: &Term<V>) -> bool {
        self.pattern_match(&mut |sub| (sub == pattern).then_some(())).is_some()
    }
}

impl Term<String> {
    /// α-equivalence: structural equality up to consistent renaming of
    /// binders. Two abstractions `λv1. e1` and `λv2. e2` with distinct
    /// binders match when neither binder is free on the other side and
    /// `e1` is α-equal to `e2[v2 := v1]`; both freeness guards are needed
    /// to keep the relation symmetric.
    pub fn alpha_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Term::Var(a), Term::Var(b)) => a == b,
            (Term::App(f1, x1), Term::App(f2, x2)) => f1.alpha_eq(f2) && x1.alpha_eq(x2),
            (Term::Abs(v1, e1), Term::Abs(v2, e2)) => {
                if v1 == v2 {
                    return e1.alpha_eq(e2);
                }
                !self.free_vars().contains(v2)
                    && !e2.free_vars().contains(v1)
                    && e1.alpha_eq(&e2.substitute(v2, &Term::Var(v1.clone())))
            }
            _ => false,
        }
    }
}

impl<V: fmt::Display> fmt::Display for Term<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(v) => write!(f, "{v}"),
            Term::Abs(v, body) => write!(f, "λ{v}. {body}"),
            Term::App(fun, arg) => {
                if matches!(**fun, Term::Abs(..)) {
                    write!(f, "({fun})")?;
                } else {
                    write!(f, "{fun}")?;
                }
                if matches!(**arg, Term::Var(_)) {
                    write!(f, " {arg}")
                } else {
                    write!(f, " ({arg})")
                }
            }
        }
    }
}
