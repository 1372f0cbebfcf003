//! Bounded proof search for implications between elements.
//!
//! The search applies rules of two kinds:
//! rules that follow from the universal properties of
//! products, coproducts, and exponentials are free, whereas
//! substitution rules cost one unit of pay.
//! Iterative deepening increases the available pay until
//! a proof is found or the pay limit is reached.

use crate::{Algebra, Elem, Stats};
use alloc::vec::Vec;
use core::fmt::{self, Display};
use hashbrown::HashMap;
use log::{debug, info, trace};

/// Highest pay with which an implication was attempted without success.
type Memo = HashMap<(Elem, Elem), usize>;

/// Search options.
#[derive(Copy, Clone, Debug)]
pub struct Opt {
    /// number of pay levels to try, starting from zero pay
    pub lim: usize,
}

impl Default for Opt {
    fn default() -> Self {
        Self { lim: 3 }
    }
}

/// Inference rule that established an arrow.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rule {
    ProductIntro,
    CoproductElim,
    ExponentialIntro,
    ProductElim,
    Functoriality,
    Downstream,
    Upstream,
    Meet,
}

impl Rule {
    pub const COUNT: usize = 8;
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Rule::*;
        let s = match self {
            ProductIntro => "product introduction",
            CoproductElim => "coproduct elimination",
            ExponentialIntro => "exponential introduction",
            ProductElim => "product elimination",
            Functoriality => "functoriality",
            Downstream => "downstream substitution",
            Upstream => "upstream substitution",
            Meet => "meet of successors",
        };
        write!(f, "{}", s)
    }
}

/// Prover for implications in an algebra.
///
/// The prover borrows the algebra exclusively, because
/// every proven implication is added to the algebra as an arrow.
///
/// ~~~
/// use heyting::{Algebra, Prover};
/// let mut alg = Algebra::new();
/// let [p, q, r, s] = [alg.atom("P"), alg.atom("Q"), alg.atom("R"), alg.atom("S")];
/// alg.put_arrow(p, r);
/// alg.put_arrow(q, s);
/// let pq = alg.product([p, q]);
/// let rs = alg.product([r, s]);
///
/// assert!(Prover::new(&mut alg, Default::default()).implication(pq, rs));
/// assert!(alg.is_arrow(pq, rs));
/// ~~~
pub struct Prover<'a> {
    alg: &'a mut Algebra,
    opt: Opt,
    stats: Stats,
}

impl<'a> Prover<'a> {
    pub fn new(alg: &'a mut Algebra, opt: Opt) -> Self {
        let stats = Stats::default();
        Self { alg, opt, stats }
    }

    pub fn algebra(&self) -> &Algebra {
        self.alg
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Return true if `x` was shown to imply `y`.
    ///
    /// A negative result only means that no proof was found.
    pub fn implication(&mut self, x: Elem, y: Elem) -> bool {
        self.prove(x, y).is_some()
    }

    /// Try to show that `x` implies `y`, returning the pay used for the proof.
    pub fn prove(&mut self, x: Elem, y: Elem) -> Option<usize> {
        let mut memo = Memo::new();
        for pay in 0..self.opt.lim {
            debug!("search with pay {}", pay);
            if self.show(x, y, &mut memo, Some(pay)) {
                let (dx, dy) = (self.alg.display(x), self.alg.display(y));
                info!("showed ({}) => ({}) with pay {}", dx, dy, pay);
                return Some(pay);
            }
        }
        debug!("no proof after {} queries", self.stats.queries);
        None
    }

    /// Record a proven arrow.
    fn found(&mut self, x: Elem, y: Elem, rule: Rule) -> bool {
        debug!("{} => {} by {}", x.index(), y.index(), rule);
        self.alg.put_arrow(x, y);
        self.stats.derive(rule);
        true
    }

    /// Try to show that `x` implies `y`.
    ///
    /// If `pay` is `None`, the budget is exhausted.
    fn show(&mut self, x: Elem, y: Elem, memo: &mut Memo, pay: Option<usize>) -> bool {
        let pay = match pay {
            Some(pay) => pay,
            None => return false,
        };
        self.stats.queries += 1;

        if self.alg.is_arrow(x, y) {
            return true;
        }

        if memo.get(&(x, y)).map_or(false, |tried| *tried >= pay) {
            trace!("cut {} => {} with pay {}", x.index(), y.index(), pay);
            self.stats.cuts += 1;
            return false;
        }
        memo.insert((x, y), pay);
        trace!("show {} => {} with pay {}", x.index(), y.index(), pay);

        let free = Some(pay);
        let next = pay.checked_sub(1);

        // arrows to products
        if let Some(fs) = self.alg[y].as_product().cloned() {
            if fs.iter().all(|f| self.show(x, *f, memo, free)) {
                return self.found(x, y, Rule::ProductIntro);
            }
        }

        // arrows from coproducts
        if let Some(fs) = self.alg[x].as_coproduct().cloned() {
            if fs.iter().all(|f| self.show(*f, y, memo, free)) {
                return self.found(x, y, Rule::CoproductElim);
            }
        }

        // arrows to exponentials, by adjunction
        if let Some((base, exponent)) = self.alg[y].as_exponential() {
            let prod = self.alg.product([x, exponent]);
            if self.show(prod, base, memo, free) {
                return self.found(x, y, Rule::ExponentialIntro);
            }
        }

        // arrows from products, by adjunction
        if let Some(fs) = self.alg[x].as_product().cloned() {
            for f in fs.iter() {
                let rest = fs.iter().copied().filter(|g| g != f);
                let prod = self.alg.product(rest);
                let exp = self.alg.exponential(y, *f);
                if self.show(prod, exp, memo, free) {
                    return self.found(x, y, Rule::ProductElim);
                }
            }
        }

        let exps = (self.alg[x].as_exponential(), self.alg[y].as_exponential());
        if let (Some((bx, ex)), Some((by, ey))) = exps {
            if ex == ey && self.show(bx, by, memo, next) {
                return self.found(x, y, Rule::Functoriality);
            }
        }

        // if z => y, then it suffices to show x => z
        let from: Vec<_> = self.alg.arrows_from(y).iter().copied().collect();
        let mut zs = from.into_iter().chain(core::iter::once(Elem::FALSE));
        if zs.any(|z| self.show(x, z, memo, next)) {
            return self.found(x, y, Rule::Downstream);
        }

        // if x => z, then it suffices to show z => y
        let to: Vec<_> = self.alg.arrows_to(x).iter().copied().collect();
        let mut zs = to.into_iter().chain(core::iter::once(Elem::TRUE));
        if zs.any(|z| self.show(z, y, memo, next)) {
            return self.found(x, y, Rule::Upstream);
        }

        // if x => z_i, then it suffices to show that the product of all z_i implies y
        let to = self.alg.arrows_to(x).clone();
        let meet = self.alg.product(to);
        if self.show(meet, y, memo, next) {
            return self.found(x, y, Rule::Meet);
        }

        false
    }
}
