use crate::element::{Elem, Element, Factors};
use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::{format, vec::Vec};
use core::ops::Index;
use hashbrown::{HashMap, HashSet};
use log::trace;

/// Known implications of an element.
#[derive(Clone, Debug, Default)]
struct Arrows {
    /// elements implied by this one
    to: BTreeSet<Elem>,
    /// elements implying this one
    from: BTreeSet<Elem>,
}

/// A Heyting algebra together with the arrows known to hold in it.
///
/// The algebra owns all of its elements; they live as long as the algebra.
/// Composite elements are canonical:
/// constructing a structurally equal product, coproduct, or exponential
/// twice yields the same handle.
///
/// ~~~
/// use heyting::{Algebra, Elem};
/// let mut alg = Algebra::new();
/// let p = alg.atom("P");
/// let q = alg.atom("Q");
/// let pq = alg.product([p, q]);
/// assert_eq!(alg.product([q, p, Elem::TRUE]), pq);
/// assert!(alg.is_arrow(pq, p));
/// assert!(!alg.is_arrow(p, pq));
/// ~~~
#[derive(Clone, Debug)]
pub struct Algebra {
    elements: Vec<Element>,
    arrows: Vec<Arrows>,
    /// composite elements by their normalised payload
    index: HashMap<Element, Elem>,
    fresh: usize,
}

impl Default for Algebra {
    fn default() -> Self {
        Self::new()
    }
}

impl Algebra {
    /// Create an algebra containing only True and False.
    pub fn new() -> Self {
        let mut alg = Self {
            elements: Vec::new(),
            arrows: Vec::new(),
            index: HashMap::new(),
            fresh: 0,
        };
        let t = alg.atom("True");
        let f = alg.atom("False");
        debug_assert_eq!((t, f), (Elem::TRUE, Elem::FALSE));
        alg
    }

    fn push(&mut self, e: Element) -> Elem {
        let x = Elem::new(self.elements.len());
        self.elements.push(e);
        self.arrows.push(Arrows::default());
        x
    }

    /// Return the canonical element for a composite, creating it if necessary.
    ///
    /// The second component is true iff the element was created.
    fn intern(&mut self, e: Element) -> (Elem, bool) {
        if let Some(x) = self.index.get(&e) {
            return (*x, false);
        }
        let x = self.push(e.clone());
        self.index.insert(e, x);
        (x, true)
    }

    /// Create a new atom.
    ///
    /// Atoms are never shared: two atoms with the same name are different.
    pub fn atom(&mut self, name: impl Into<String>) -> Elem {
        self.push(Element::Atom(name.into()))
    }

    /// Create a new atom with a generated name.
    pub fn fresh(&mut self) -> Elem {
        let name = format!("x{}", self.fresh);
        self.fresh += 1;
        self.atom(name)
    }

    /// Return the conjunction of the given factors.
    pub fn product(&mut self, factors: impl IntoIterator<Item = Elem>) -> Elem {
        let mut factors: Factors = factors.into_iter().collect();
        if factors.contains(&Elem::FALSE) {
            return Elem::FALSE;
        }
        factors.remove(&Elem::TRUE);

        let mut iter = factors.iter();
        match (iter.next(), iter.next()) {
            (None, _) => return Elem::TRUE,
            (Some(f), None) => return *f,
            _ => (),
        }

        let flat: Factors = factors
            .iter()
            .flat_map(|f| match &self[*f] {
                Element::Product(fs) => fs.iter().copied().collect(),
                _ => Vec::from([*f]),
            })
            .collect();

        let (prod, created) = self.intern(Element::Product(flat.clone()));
        if created {
            // projections
            flat.into_iter().for_each(|f| self.put_arrow(prod, f));
        }
        prod
    }

    /// Return the disjunction of the given factors.
    pub fn coproduct(&mut self, factors: impl IntoIterator<Item = Elem>) -> Elem {
        let mut factors: Factors = factors.into_iter().collect();
        if factors.contains(&Elem::TRUE) {
            return Elem::TRUE;
        }
        factors.remove(&Elem::FALSE);

        let mut iter = factors.iter();
        match (iter.next(), iter.next()) {
            (None, _) => return Elem::FALSE,
            (Some(f), None) => return *f,
            _ => (),
        }

        let flat: Factors = factors
            .iter()
            .flat_map(|f| match &self[*f] {
                Element::Coproduct(fs) => fs.iter().copied().collect(),
                _ => Vec::from([*f]),
            })
            .collect();

        let (coprod, created) = self.intern(Element::Coproduct(flat.clone()));
        if created {
            // injections
            flat.into_iter().for_each(|f| self.put_arrow(f, coprod));
        }
        coprod
    }

    /// Return the element "`exponent` implies `base`".
    ///
    /// An exponential base is uncurried, i.e.
    /// `P ⇒ (Q ⇒ R)` becomes `(P ∧ Q) ⇒ R`:
    ///
    /// ~~~
    /// # use heyting::Algebra;
    /// let mut alg = Algebra::new();
    /// let [p, q, r] = [alg.atom("P"), alg.atom("Q"), alg.atom("R")];
    /// let qr = alg.exponential(r, q);
    /// let pq = alg.product([p, q]);
    /// assert_eq!(alg.exponential(qr, p), alg.exponential(r, pq));
    /// ~~~
    pub fn exponential(&mut self, base: Elem, exponent: Elem) -> Elem {
        if base == Elem::TRUE || exponent == Elem::FALSE {
            return Elem::TRUE;
        }
        if exponent == Elem::TRUE {
            return base;
        }

        let (base, exponent) = match self[base].as_exponential() {
            Some((b, e)) => (b, self.product([exponent, e])),
            None => (base, exponent),
        };
        self.intern(Element::Exponential { base, exponent }).0
    }

    /// Return the negation of `x`, namely "`x` implies False".
    pub fn negate(&mut self, x: Elem) -> Elem {
        self.exponential(Elem::FALSE, x)
    }

    /// Record that `x` implies `y`.
    ///
    /// No checks are performed; cycles may be introduced deliberately
    /// to state that elements are equivalent.
    pub fn put_arrow(&mut self, x: Elem, y: Elem) {
        trace!("arrow {} => {}", x.index(), y.index());
        self.arrows[x.index()].to.insert(y);
        self.arrows[y.index()].from.insert(x);
    }

    /// Return true if `x` is known to imply `y`.
    ///
    /// Besides identity and the definition of True and False,
    /// `x` implies `y` if `x` has an arrow to False,
    /// or if `x` or True reach `y` via arrows.
    pub fn is_arrow(&self, x: Elem, y: Elem) -> bool {
        if x == Elem::FALSE || self.arrows_to(x).contains(&Elem::FALSE) {
            return true;
        }

        let mut marked = HashSet::new();
        let mut todo = Vec::from([y]);
        while let Some(z) = todo.pop() {
            if z == x || z == Elem::TRUE {
                return true;
            }
            for w in self.arrows_from(z) {
                if marked.insert(*w) {
                    todo.push(*w)
                }
            }
        }
        false
    }

    /// Forget all arrows, including those of projections and injections.
    pub fn clear_arrows(&mut self) {
        for arrows in self.arrows.iter_mut() {
            arrows.to.clear();
            arrows.from.clear();
        }
    }

    /// Elements known to be implied by `x`.
    pub fn arrows_to(&self, x: Elem) -> &BTreeSet<Elem> {
        &self.arrows[x.index()].to
    }

    /// Elements known to imply `x`.
    pub fn arrows_from(&self, x: Elem) -> &BTreeSet<Elem> {
        &self.arrows[x.index()].from
    }

    pub fn get(&self, x: Elem) -> Option<&Element> {
        self.elements.get(x.index())
    }

    /// Number of elements, including True and False.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Return all elements in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (Elem, &Element)> {
        let elems = (0..self.elements.len()).map(Elem::new);
        elems.zip(self.elements.iter())
    }
}

impl Index<Elem> for Algebra {
    type Output = Element;

    fn index(&self, x: Elem) -> &Element {
        &self.elements[x.index()]
    }
}

#[test]
fn singletons_collapse() {
    let mut alg = Algebra::new();
    let p = alg.atom("P");
    assert_eq!(alg.product([p]), p);
    assert_eq!(alg.product([p, p, Elem::TRUE]), p);
    assert_eq!(alg.coproduct([p, Elem::FALSE]), p);
    assert_eq!(alg.product([]), Elem::TRUE);
    assert_eq!(alg.coproduct([]), Elem::FALSE);
    assert_eq!(alg.len(), 3);
}

#[test]
fn exponentials_carry_no_arrows() {
    let mut alg = Algebra::new();
    let p = alg.atom("P");
    let q = alg.atom("Q");
    let qp = alg.exponential(p, q);
    assert!(alg.arrows_to(qp).is_empty());
    assert!(alg.arrows_from(qp).is_empty());
    assert_eq!(alg.negate(p), alg.exponential(Elem::FALSE, p));
}

#[test]
fn arrows_are_paired() {
    let mut alg = Algebra::new();
    let p = alg.atom("P");
    let q = alg.atom("Q");
    let pq = alg.coproduct([p, q]);
    alg.put_arrow(q, p);
    for (x, _) in alg.iter() {
        for y in alg.arrows_to(x) {
            assert!(alg.arrows_from(*y).contains(&x));
        }
        for y in alg.arrows_from(x) {
            assert!(alg.arrows_to(*y).contains(&x));
        }
    }
    assert!(alg.arrows_from(pq).contains(&p));
}

#[test]
fn arrow_cycles_terminate() {
    let mut alg = Algebra::new();
    let [p, q, r] = [alg.atom("P"), alg.atom("Q"), alg.atom("R")];
    alg.put_arrow(p, q);
    alg.put_arrow(q, p);
    assert!(alg.is_arrow(q, p));
    assert!(!alg.is_arrow(r, p));
}

#[test]
fn true_reaching_target() {
    let mut alg = Algebra::new();
    let [p, q, r] = [alg.atom("P"), alg.atom("Q"), alg.atom("R")];
    alg.put_arrow(Elem::TRUE, p);
    alg.put_arrow(p, q);
    // any element implies q, because True does
    assert!(alg.is_arrow(r, q));
    // p implies False only one hop deep
    alg.put_arrow(r, Elem::FALSE);
    assert!(alg.is_arrow(r, p));
}
