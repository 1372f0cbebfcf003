use crate::{Algebra, Elem};
use alloc::string::ToString;
use alloc::{boxed::Box, vec::Vec};
use core::fmt::{self, Display};
use core::hash::Hash;
use hashbrown::HashMap;

/// Propositional formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Form<A> {
    Atom(A),
    True,
    False,
    Neg(Box<Form<A>>),
    /// binary operation
    Bin(Box<Form<A>>, Op, Box<Form<A>>),
    /// associative binary operation
    BinA(OpA, Vec<Form<A>>),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Impl,
    EqFm,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpA {
    Conj,
    Disj,
}

impl<A: Display> Display for Form<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Form::*;
        match self {
            Atom(a) => a.fmt(f),
            True => write!(f, "⊤"),
            False => write!(f, "⊥"),
            Neg(fm) => write!(f, "¬ {}", fm),
            Bin(l, o, r) => write!(f, "({} {} {})", l, o, r),
            BinA(o, fms) => {
                let mut fms = fms.iter();
                match (o, fms.next()) {
                    (OpA::Conj, None) => write!(f, "⊤"),
                    (OpA::Disj, None) => write!(f, "⊥"),
                    (o, Some(fm1)) => {
                        write!(f, "({}", fm1)?;
                        fms.try_for_each(|fm| write!(f, " {} {}", o, fm))?;
                        write!(f, ")")
                    }
                }
            }
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Impl => write!(f, "⇒"),
            Op::EqFm => write!(f, "⇔"),
        }
    }
}

impl Display for OpA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpA::Conj => write!(f, "∧"),
            OpA::Disj => write!(f, "∨"),
        }
    }
}

impl<A> core::ops::Neg for Form<A> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::Neg(Box::new(self))
    }
}

impl<A> core::ops::BitAnd for Form<A> {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self::bina(self, OpA::Conj, rhs)
    }
}

impl<A> core::ops::BitOr for Form<A> {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self::bina(self, OpA::Disj, rhs)
    }
}

impl<A> Form<A> {
    pub fn bin(l: Self, o: Op, r: Self) -> Self {
        Self::Bin(Box::new(l), o, Box::new(r))
    }

    pub fn bina(l: Self, o: OpA, r: Self) -> Self {
        match r {
            Self::BinA(op, mut fms) if o == op => {
                fms.insert(0, l);
                Self::BinA(o, fms)
            }
            _ => Self::BinA(o, Vec::from([l, r])),
        }
    }

    pub fn imp(l: Self, r: Self) -> Self {
        Self::bin(l, Op::Impl, r)
    }

    /// Return all atoms occurring in the formula.
    pub fn atoms(&self) -> Box<dyn Iterator<Item = &A> + '_> {
        use Form::*;
        match self {
            Atom(a) => Box::new(core::iter::once(a)),
            True | False => Box::new(core::iter::empty()),
            Neg(fm) => fm.atoms(),
            Bin(l, _, r) => Box::new(l.atoms().chain(r.atoms())),
            BinA(_, fms) => Box::new(fms.iter().flat_map(|fm| fm.atoms())),
        }
    }
}

impl<A: Clone + Display + Eq + Hash> Form<A> {
    /// Return the algebra element corresponding to the formula.
    ///
    /// Atoms are looked up in `atoms` and created in the algebra if missing.
    ///
    /// ~~~
    /// # use heyting::{Algebra, Form};
    /// # use hashbrown::HashMap;
    /// let mut alg = Algebra::new();
    /// let mut atoms = HashMap::new();
    /// let (p, q) = (Form::Atom("p"), Form::Atom("q"));
    /// let pq = (p.clone() & q.clone()).to_elem(&mut alg, &mut atoms);
    /// let qp = (q & p).to_elem(&mut alg, &mut atoms);
    /// assert_eq!(pq, qp);
    /// ~~~
    pub fn to_elem(&self, alg: &mut Algebra, atoms: &mut HashMap<A, Elem>) -> Elem {
        use Form::*;
        match self {
            Atom(a) => match atoms.get(a) {
                Some(x) => *x,
                None => {
                    let x = alg.atom(a.to_string());
                    atoms.insert(a.clone(), x);
                    x
                }
            },
            True => Elem::TRUE,
            False => Elem::FALSE,
            Neg(fm) => {
                let x = fm.to_elem(alg, atoms);
                alg.negate(x)
            }
            Bin(l, o, r) => {
                let (l, r) = (l.to_elem(alg, atoms), r.to_elem(alg, atoms));
                match o {
                    Op::Impl => alg.exponential(r, l),
                    Op::EqFm => {
                        let (lr, rl) = (alg.exponential(r, l), alg.exponential(l, r));
                        alg.product([lr, rl])
                    }
                }
            }
            BinA(o, fms) => {
                let xs: Vec<_> = fms.iter().map(|fm| fm.to_elem(alg, atoms)).collect();
                match o {
                    OpA::Conj => alg.product(xs),
                    OpA::Disj => alg.coproduct(xs),
                }
            }
        }
    }
}

#[test]
fn display_atoms() {
    let (p, q) = (Form::Atom("p"), Form::Atom("q"));
    let fm = Form::imp(p.clone() & q.clone() & Form::True, -(q | p));
    assert_eq!(fm.to_string(), "(((p ∧ q) ∧ ⊤) ⇒ ¬ (q ∨ p))");
    let atoms: Vec<_> = fm.atoms().copied().collect();
    assert_eq!(atoms, Vec::from(["p", "q", "q", "p"]));
}

#[test]
fn equivalence() {
    let mut alg = Algebra::new();
    let mut atoms = HashMap::new();
    let (p, q) = (Form::Atom("p"), Form::Atom("q"));
    let x = Form::bin(p.clone(), Op::EqFm, q.clone()).to_elem(&mut alg, &mut atoms);
    let (ep, eq) = (atoms["p"], atoms["q"]);
    let pq = alg.exponential(eq, ep);
    let qp = alg.exponential(ep, eq);
    assert_eq!(alg.product([qp, pq]), x);
    assert_eq!(Form::<&str>::False.to_elem(&mut alg, &mut atoms), Elem::FALSE);
}
