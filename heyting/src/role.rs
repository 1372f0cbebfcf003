use crate::form::{Form, OpA};
use alloc::vec::Vec;

#[derive(PartialEq, Debug, Eq, Hash)]
pub enum Role {
    Axiom,
    Conjecture,
    NegatedConjecture,
}

#[derive(Debug, Default)]
pub struct RoleMap<F>(hashbrown::HashMap<Role, F>);

impl<F: Default> RoleMap<F> {
    pub fn get_mut(&mut self, role: Role) -> &mut F {
        self.0.entry(role).or_default()
    }

    pub(crate) fn remove(&mut self, role: &Role) -> F {
        self.0.remove(role).unwrap_or_default()
    }
}

impl<A> RoleMap<Vec<Form<A>>> {
    /// Return the conjunction of all conjectures, if there are any.
    pub fn conjecture(&mut self) -> Option<Form<A>> {
        let mut cj = self.remove(&Role::Conjecture);
        match cj.len() {
            0 => None,
            1 => cj.pop(),
            _ => Some(Form::BinA(OpA::Conj, cj)),
        }
    }
}
