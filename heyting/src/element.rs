use alloc::collections::BTreeSet;
use alloc::string::String;

/// Handle of an element in an [`Algebra`](crate::Algebra).
///
/// Two handles are equal iff they denote the same element.
/// A handle is only meaningful for the algebra that created it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Elem(usize);

impl Elem {
    /// The top element, "True".
    pub const TRUE: Self = Self(0);
    /// The bottom element, "False".
    pub const FALSE: Self = Self(1);

    pub(crate) fn new(i: usize) -> Self {
        Self(i)
    }

    /// Position of the element in the algebra, which is also its creation order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Set of factors of a product or a coproduct.
pub type Factors = BTreeSet<Elem>;

/// Element of a Heyting algebra.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    /// propositional symbol
    Atom(String),
    /// conjunction of at least two factors, none of them a product or True
    Product(Factors),
    /// disjunction of at least two factors, none of them a coproduct or False
    Coproduct(Factors),
    /// "exponent implies base", where base is never an exponential
    Exponential { base: Elem, exponent: Elem },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    Atom,
    Product,
    Coproduct,
    Exponential,
}

impl Element {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Atom(_) => Kind::Atom,
            Self::Product(_) => Kind::Product,
            Self::Coproduct(_) => Kind::Coproduct,
            Self::Exponential { .. } => Kind::Exponential,
        }
    }

    /// Return the name of an atom.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Atom(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_product(&self) -> Option<&Factors> {
        match self {
            Self::Product(fs) => Some(fs),
            _ => None,
        }
    }

    pub fn as_coproduct(&self) -> Option<&Factors> {
        match self {
            Self::Coproduct(fs) => Some(fs),
            _ => None,
        }
    }

    /// Return base and exponent of an exponential.
    pub fn as_exponential(&self) -> Option<(Elem, Elem)> {
        match self {
            Self::Exponential { base, exponent } => Some((*base, *exponent)),
            _ => None,
        }
    }
}
