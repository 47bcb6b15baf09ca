//! Capture-avoiding substitution on named λ-terms.

use crate::names::fresh_name;
use crate::term::Term;

impl Term<String> {
    /// Replaces free occurrences of `x` with `n`, renaming binders where a
    /// free variable of `n` would otherwise be captured.
    ///
    /// The rename only has to avoid the free variables of `n`: the inner
    /// substitution of the binder by the fresh name cannot reintroduce
    /// capture once the fresh name is disjoint from them.
    pub fn substitute(&self, x: &str, n: &Term<String>) -> Term<String> {
        match self {
            Term::Var(y) => {
                if y == x {
                    n.clone()
                } else {
                    self.clone()
                }
            }
            Term::App(fun, arg) => Term::app(fun.substitute(x, n), arg.substitute(x, n)),
            Term::Abs(y, body) => {
                if y == x || !body.free_vars().contains(x) {
                    self.clone()
                } else if !n.free_vars().contains(y) {
                    Term::abs(y.clone(), body.substitute(x, n))
                } else {
                    let z = fresh_name(&n.free_vars());
                    let renamed = body.substitute(y, &Term::Var(z.clone()));
                    Term::abs(z, renamed.substitute(x, n))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn var(name: &str) -> Term<String> {
        Term::var(name)
    }

    #[test]
    fn replaces_free_occurrences() {
        let term = Term::app(var("x"), var("y"));
        let out = term.substitute("x", &var("z"));
        assert_eq!(out, Term::app(var("z"), var("y")));
    }

    #[test]
    fn leaves_other_variables_alone() {
        assert_eq!(var("y").substitute("x", &var("z")), var("y"));
    }

    #[test]
    fn shadowing_binder_blocks_substitution() {
        let term = Term::abs("x", var("x"));
        assert_eq!(term.substitute("x", &var("z")), term);
    }

    #[test]
    fn untouched_body_is_returned_unchanged() {
        let term = Term::abs("y", var("z"));
        assert_eq!(term.substitute("x", &var("w")), term);
    }

    #[test]
    fn renames_binder_to_avoid_capture() {
        // (λy. x)[x := y] must not capture: the binder is renamed to the
        // first supply name outside free(n) = {y}, which is u
        let term = Term::abs("y", var("x"));
        let out = term.substitute("x", &var("y"));
        assert_eq!(out, Term::abs("u", var("y")));
    }

    #[test]
    fn rename_keeps_bound_occurrences_consistent() {
        // (λy. x y)[x := y] -> λu. y u
        let term = Term::abs("y", Term::app(var("x"), var("y")));
        let out = term.substitute("x", &var("y"));
        assert_eq!(out, Term::abs("u", Term::app(var("y"), var("u"))));
    }

    #[test]
    fn free_vars_after_substitution_are_bounded() {
        // free(t[x := n]) ⊆ (free(t) \ {x}) ∪ free(n)
        let cases = [
            (Term::app(var("x"), var("y")), "x", var("z")),
            (Term::abs("y", var("x")), "x", Term::app(var("y"), var("z"))),
            (Term::abs("x", var("x")), "x", var("w")),
        ];
        for (term, x, n) in cases {
            let mut bound: BTreeSet<_> = term.free_vars();
            bound.remove(x);
            bound.extend(n.free_vars());
            let out = term.substitute(x, &n);
            assert!(out.free_vars().is_subset(&bound), "{term} [{x} := {n}] -> {out}");
        }
    }
}
