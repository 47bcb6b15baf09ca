//! The mutable state threaded through one inference run.
//!
//! An [`InferEnv`] is created empty per call, mutated throughout the walk,
//! and discarded after canonicalization; it is never shared across calls.

use ostinato_core::{Ty, Type, TypeId};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// The inference environment: term-variable bindings, the accumulated
/// type-variable substitution, and the fresh-id counter.
#[derive(Debug, Clone, Default)]
pub struct InferEnv {
    /// Current type of each term variable in scope.
    term_vars: FxHashMap<String, Type>,
    /// What each type variable has been unified to. Ordered keys; the
    /// canonicalizer depends on deterministic iteration.
    type_vars: BTreeMap<TypeId, Type>,
    /// Last minted id. `t0` is reserved for the initial expected type.
    counter: u32,
}

impl InferEnv {
    /// Creates an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints a fresh type-variable id.
    pub fn mint_id(&mut self) -> TypeId {
        self.counter += 1;
        TypeId::new(self.counter)
    }

    /// Mints a fresh type variable.
    pub fn fresh_tvar(&mut self) -> Type {
        Ty::Var(self.mint_id())
    }

    /// Binds (or rebinds) a term variable to a type.
    pub fn bind_term_var(&mut self, name: impl Into<String>, ty: Type) {
        self.term_vars.insert(name.into(), ty);
    }

    /// Removes a term-variable binding.
    pub fn unbind_term_var(&mut self, name: &str) {
        self.term_vars.remove(name);
    }

    /// The current type of a term variable, if bound.
    pub fn lookup_term_var(&self, name: &str) -> Option<&Type> {
        self.term_vars.get(name)
    }

    /// Records `id := ty` in the substitution, first rewriting every
    /// term-variable binding so later lookups see the new binding.
    /// Binding a variable to itself is a no-op.
    pub fn bind_type_var(&mut self, id: TypeId, ty: &Type) {
        if matches!(ty, Ty::Var(other) if *other == id) {
            return;
        }
        for bound in self.term_vars.values_mut() {
            let rewritten = bound.clone().subst(&mut |var| {
                if var == id {
                    ty.clone()
                } else {
                    Ty::Var(var)
                }
            });
            *bound = rewritten;
        }
        self.type_vars.insert(id, ty.clone());
    }

    /// Fully applies the substitution to a type, chasing bindings
    /// transitively. A visiting stack guards the recursion so a cyclic
    /// binding cannot hang resolution.
    pub fn resolve(&self, ty: &Type) -> Type {
        self.resolve_guarded(ty, &mut Vec::new())
    }

    fn resolve_guarded(&self, ty: &Type, visiting: &mut Vec<TypeId>) -> Type {
        match ty {
            Ty::Var(id) => {
                if visiting.contains(id) {
                    return Ty::Var(*id);
                }
                match self.type_vars.get(id) {
                    Some(bound) => {
                        visiting.push(*id);
                        let resolved = self.resolve_guarded(bound, visiting);
                        visiting.pop();
                        resolved
                    }
                    None => Ty::Var(*id),
                }
            }
            Ty::Arrow(a, b) => Ty::arrow(
                self.resolve_guarded(a, visiting),
                self.resolve_guarded(b, visiting),
            ),
        }
    }
}
