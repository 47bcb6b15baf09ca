//! Rendering of typed trees.

use ostinato_core::{NamedTypedTerm, Term};

/// Renders a typed tree against the original term, which supplies the
/// variable names: occurrences as `{name: type}`, abstractions as
/// `λv: type . body`, applications by juxtaposition. An abstraction in
/// function position and anything but an occurrence in argument position
/// are parenthesized.
pub fn show_type_tree(term: &Term<String>, tree: &NamedTypedTerm) -> String {
    match (term, tree) {
        (Term::Var(name), Term::Var(ty)) => format!("{{{name}: {ty}}}"),
        (Term::Abs(name, body), Term::Abs(ty, typed_body)) => {
            format!("λ{name}: {ty} . {}", show_type_tree(body, typed_body))
        }
        (Term::App(fun, arg), Term::App(typed_fun, typed_arg)) => {
            let fun_out = show_type_tree(fun, typed_fun);
            let fun_out = if matches!(**fun, Term::Abs(..)) {
                format!("({fun_out})")
            } else {
                fun_out
            };
            let arg_out = show_type_tree(arg, typed_arg);
            let arg_out = if matches!(**arg, Term::Var(_)) {
                arg_out
            } else {
                format!("({arg_out})")
            };
            format!("{fun_out} {arg_out}")
        }
        _ => {
            debug_assert!(false, "typed tree shape diverged from the term");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ostinato_core::{NamedType, Ty};

    fn named(name: &str) -> NamedType {
        Ty::Var(name.to_string())
    }

    #[test]
    fn renders_var_and_abs() {
        let term: Term<String> = Term::abs("x", Term::var("x"));
        let tree: NamedTypedTerm = Term::abs(named("t0"), Term::Var(named("t0")));
        assert_eq!(show_type_tree(&term, &tree), "λx: t0 . {x: t0}");
    }

    #[test]
    fn parenthesizes_abstractions_in_function_position() {
        let term: Term<String> = Term::app(
            Term::abs("x", Term::var("x")),
            Term::abs("y", Term::var("y")),
        );
        let tree: NamedTypedTerm = Term::app(
            Term::abs(named("t0"), Term::Var(named("t0"))),
            Term::abs(named("t0"), Term::Var(named("t0"))),
        );
        assert_eq!(
            show_type_tree(&term, &tree),
            "(λx: t0 . {x: t0}) (λy: t0 . {y: t0})"
        );
    }

    #[test]
    fn variable_arguments_stay_bare() {
        let term: Term<String> = Term::app(Term::var("f"), Term::var("x"));
        let tree: NamedTypedTerm = Term::app(
            Term::Var(Ty::arrow(named("t0"), named("t1"))),
            Term::Var(named("t0")),
        );
        assert_eq!(show_type_tree(&term, &tree), "{f: t0 → t1} {x: t0}");
    }

    #[test]
    fn application_arguments_are_parenthesized() {
        // f (g x)
        let term: Term<String> = Term::app(
            Term::var("f"),
            Term::app(Term::var("g"), Term::var("x")),
        );
        let tree: NamedTypedTerm = Term::app(
            Term::Var(Ty::arrow(named("t1"), named("t2"))),
            Term::app(
                Term::Var(Ty::arrow(named("t0"), named("t1"))),
                Term::Var(named("t0")),
            ),
        );
        assert_eq!(
            show_type_tree(&term, &tree),
            "{f: t1 → t2} ({g: t0 → t1} {x: t0})"
        );
    }
}
