use crate::{Algebra, Elem, Element};
use alloc::string::{String, ToString};
use core::fmt::{self, Display};

/// Infix rendering of an element, such as `Q => (P ^ R)`.
pub struct Disp<'a> {
    alg: &'a Algebra,
    elem: Elem,
}

impl Algebra {
    /// Return an object that displays `x`.
    ///
    /// ~~~
    /// # use heyting::Algebra;
    /// let mut alg = Algebra::new();
    /// let [p, q, r] = [alg.atom("P"), alg.atom("Q"), alg.atom("R")];
    /// let pr = alg.product([p, r]);
    /// let e = alg.exponential(pr, q);
    /// assert_eq!(alg.display(e).to_string(), "Q => (P ^ R)");
    /// ~~~
    pub fn display(&self, x: Elem) -> Disp<'_> {
        Disp {
            alg: self,
            elem: x,
        }
    }
}

impl<'a> Disp<'a> {
    /// Render a subexpression, parenthesised if it has an operator.
    fn operand(&self, x: Elem) -> String {
        let s = self.alg.display(x).to_string();
        if s.contains(' ') {
            ["(", &s, ")"].concat()
        } else {
            s
        }
    }

    fn join(&self, f: &mut fmt::Formatter<'_>, xs: impl Iterator<Item = Elem>, op: &str) -> fmt::Result {
        let mut xs = xs.map(|x| self.operand(x));
        if let Some(x) = xs.next() {
            write!(f, "{}", x)?;
            xs.try_for_each(|x| write!(f, " {} {}", op, x))?;
        }
        Ok(())
    }
}

impl<'a> Display for Disp<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elem = &self.alg[self.elem];
        if let Some(name) = elem.name() {
            return write!(f, "{}", name);
        }
        match elem {
            Element::Product(fs) => self.join(f, fs.iter().copied(), "^"),
            Element::Coproduct(fs) => self.join(f, fs.iter().copied(), "v"),
            Element::Exponential { base, exponent } => {
                let (b, e) = (self.operand(*base), self.operand(*exponent));
                write!(f, "{} => {}", e, b)
            }
            Element::Atom(_) => Ok(()),
        }
    }
}

#[test]
fn nested() {
    let mut alg = Algebra::new();
    let [p, q, r] = [alg.atom("P"), alg.atom("Q"), alg.atom("R")];
    let qr = alg.coproduct([q, r]);
    let x = alg.product([p, qr]);
    assert_eq!(alg.display(x).to_string(), "P ^ (Q v R)");
    let np = alg.negate(p);
    assert_eq!(alg.display(np).to_string(), "P => False");
    let y = alg.fresh();
    assert_eq!(alg.display(y).to_string(), "x0");
    assert_eq!(alg[y].name(), Some("x0"));
    assert_eq!(alg[x].name(), None);
}
