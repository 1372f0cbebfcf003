use crate::form::{Form, Op, OpA};
use crate::role::{Role, RoleMap};
use crate::szs::NoSuccessKind;
use crate::{Algebra, Elem};
use alloc::vec::Vec;
use core::convert::TryFrom;
use core::fmt::Display;
use core::hash::Hash;
use hashbrown::HashMap;
use log::info;

/// Axioms together with a conjecture to be proven from them.
#[derive(Clone, Debug)]
pub struct Problem<A> {
    pub axioms: Vec<Form<A>>,
    pub conjecture: Form<A>,
}

impl<A> TryFrom<RoleMap<Vec<Form<A>>>> for Problem<A> {
    type Error = NoSuccessKind;

    /// Negated conjectures are rejected,
    /// because refuting the negation of a formula
    /// does not prove the formula intuitionistically.
    fn try_from(mut forms: RoleMap<Vec<Form<A>>>) -> Result<Self, Self::Error> {
        if !forms.remove(&Role::NegatedConjecture).is_empty() {
            return Err(NoSuccessKind::Inappropriate);
        }
        let conjecture = forms.conjecture().ok_or(NoSuccessKind::Inappropriate)?;
        let axioms = forms.remove(&Role::Axiom);
        Ok(Self { axioms, conjecture })
    }
}

impl<A: Clone + Display + Eq + Hash> Problem<A> {
    /// Add the axioms as arrows to the algebra and return the goal arrow.
    ///
    /// ~~~
    /// # use heyting::{Algebra, Elem, Form, Problem, Prover};
    /// let (p, q) = (Form::Atom("p"), Form::Atom("q"));
    /// let axioms = Vec::from([Form::imp(p.clone(), q.clone()), p.clone()]);
    /// let problem = Problem { axioms, conjecture: q & p };
    ///
    /// let mut alg = Algebra::new();
    /// let (x, y) = problem.load(&mut alg);
    /// assert_eq!(x, Elem::TRUE);
    /// assert!(Prover::new(&mut alg, Default::default()).implication(x, y));
    /// ~~~
    pub fn load(&self, alg: &mut Algebra) -> (Elem, Elem) {
        let mut atoms = HashMap::new();
        for ax in &self.axioms {
            info!("axiom: {}", ax);
            assert_axiom(ax, alg, &mut atoms)
        }
        info!("conjecture: {}", self.conjecture);
        match &self.conjecture {
            Form::Bin(l, Op::Impl, r) => (l.to_elem(alg, &mut atoms), r.to_elem(alg, &mut atoms)),
            fm => (Elem::TRUE, fm.to_elem(alg, &mut atoms)),
        }
    }
}

fn assert_axiom<A>(fm: &Form<A>, alg: &mut Algebra, atoms: &mut HashMap<A, Elem>)
where
    A: Clone + Display + Eq + Hash,
{
    match fm {
        Form::Bin(l, o, r) => {
            let (l, r) = (l.to_elem(alg, atoms), r.to_elem(alg, atoms));
            alg.put_arrow(l, r);
            if *o == Op::EqFm {
                alg.put_arrow(r, l)
            }
        }
        Form::BinA(OpA::Conj, fms) => fms.iter().for_each(|fm| assert_axiom(fm, alg, atoms)),
        _ => {
            let x = fm.to_elem(alg, atoms);
            alg.put_arrow(Elem::TRUE, x)
        }
    }
}
