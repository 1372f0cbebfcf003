use heyting::prover::Rule;
use heyting::{Algebra, Elem, Kind, Opt, Prover};

fn atoms<const N: usize>(alg: &mut Algebra, names: [&str; N]) -> [Elem; N] {
    names.map(|name| alg.atom(name))
}

fn prove(alg: &mut Algebra, x: Elem, y: Elem) -> bool {
    Prover::new(alg, Opt::default()).implication(x, y)
}

#[test]
fn canonical() {
    let mut alg = Algebra::new();
    let [p, q, r] = atoms(&mut alg, ["P", "Q", "R"]);

    let pqr = alg.product([p, q, r]);
    assert_eq!(alg.product([r, p, q, p]), pqr);
    let pq = alg.product([p, q]);
    assert_eq!(alg.product([pq, r, Elem::TRUE]), pqr);
    assert_eq!(alg[pqr].kind(), Kind::Product);
    assert_eq!(alg[pqr].as_product().map(|fs| fs.len()), Some(3));

    let pqr = alg.coproduct([p, q, r]);
    let pq = alg.coproduct([q, p]);
    assert_eq!(alg.coproduct([pq, r, Elem::FALSE]), pqr);

    let e = alg.exponential(p, q);
    assert_eq!(alg.exponential(p, q), e);
    let len = alg.len();
    alg.negate(q);
    alg.negate(q);
    assert_eq!(alg.len(), len + 1);
}

#[test]
fn absorption() {
    let mut alg = Algebra::new();
    let [p, q] = atoms(&mut alg, ["P", "Q"]);
    let pq = alg.coproduct([p, q]);
    for x in [p, pq] {
        assert_eq!(alg.product([Elem::TRUE, x]), x);
        assert_eq!(alg.product([Elem::FALSE, x]), Elem::FALSE);
        assert_eq!(alg.coproduct([Elem::FALSE, x]), x);
        assert_eq!(alg.coproduct([Elem::TRUE, x]), Elem::TRUE);
    }
}

#[test]
fn exponential_identities() {
    let mut alg = Algebra::new();
    let [p, q] = atoms(&mut alg, ["P", "Q"]);
    assert_eq!(alg.exponential(Elem::TRUE, p), Elem::TRUE);
    assert_eq!(alg.exponential(p, Elem::FALSE), Elem::TRUE);
    assert_eq!(alg.exponential(p, Elem::TRUE), p);

    // P => (Q => False) is (P ^ Q) => False
    let nq = alg.negate(q);
    let x = alg.exponential(nq, p);
    let pq = alg.product([p, q]);
    assert_eq!(alg[x].as_exponential(), Some((Elem::FALSE, pq)));
}

#[test]
fn trivial_arrows() {
    let mut alg = Algebra::new();
    let [p, q] = atoms(&mut alg, ["P", "Q"]);
    alg.put_arrow(p, q);

    assert!(alg.is_arrow(p, q));
    assert!(alg.is_arrow(p, p));
    assert!(alg.is_arrow(Elem::FALSE, p));
    assert!(alg.is_arrow(p, Elem::TRUE));
    assert!(!alg.is_arrow(q, p));
    assert!(!alg.is_arrow(Elem::TRUE, p));
    assert!(!alg.is_arrow(p, Elem::FALSE));
}

#[test]
fn projections_injections() {
    let mut alg = Algebra::new();
    let [p, q] = atoms(&mut alg, ["P", "Q"]);
    let prod = alg.product([p, q]);
    let coprod = alg.coproduct([p, q]);

    assert!(alg.is_arrow(prod, p) && alg.is_arrow(prod, q));
    assert!(alg.is_arrow(p, coprod) && alg.is_arrow(q, coprod));
    assert!(!alg.is_arrow(p, prod) && !alg.is_arrow(q, prod));
    assert!(!alg.is_arrow(coprod, p) && !alg.is_arrow(coprod, q));
}

#[test]
fn clear() {
    let mut alg = Algebra::new();
    let [p, q] = atoms(&mut alg, ["P", "Q"]);
    let prod = alg.product([p, q]);
    alg.put_arrow(Elem::TRUE, q);
    alg.clear_arrows();

    assert!(alg.iter().all(|(x, _)| alg.arrows_to(x).is_empty()));
    assert!(alg.iter().all(|(x, _)| alg.arrows_from(x).is_empty()));
    assert!(!alg.is_arrow(prod, p));
    assert_eq!(alg.product([q, p]), prod);
}

#[test]
fn transitivity() {
    let mut alg = Algebra::new();
    let [p, q, r, s] = atoms(&mut alg, ["P", "Q", "R", "S"]);
    alg.put_arrow(p, r);
    alg.put_arrow(q, s);

    let (pq, rs) = (alg.product([p, q]), alg.product([r, s]));
    assert!(!alg.is_arrow(pq, rs));
    assert!(prove(&mut alg, pq, rs));
    assert!(alg.is_arrow(pq, rs));

    let (pq, rs) = (alg.coproduct([p, q]), alg.coproduct([r, s]));
    assert!(!alg.is_arrow(pq, rs));
    assert!(prove(&mut alg, pq, rs));
    assert!(alg.is_arrow(pq, rs));
}

#[test]
fn distributivity() {
    let mut alg = Algebra::new();
    let [p, q, r] = atoms(&mut alg, ["P", "Q", "R"]);
    let pq = alg.product([p, q]);
    let pr = alg.product([p, r]);
    let qr = alg.coproduct([q, r]);
    let lhs = alg.product([p, qr]);
    let rhs = alg.coproduct([pq, pr]);

    let mut prover = Prover::new(&mut alg, Opt::default());
    assert_eq!(prover.prove(lhs, rhs), Some(0));
    assert_eq!(prover.prove(rhs, lhs), Some(0));
    assert!(prover.stats().derived > 0);
}

#[test]
fn contradiction() {
    let mut alg = Algebra::new();
    let [p] = atoms(&mut alg, ["P"]);
    let np = alg.negate(p);
    let p_np = alg.product([p, np]);

    assert!(prove(&mut alg, p_np, Elem::FALSE));
    assert!(prove(&mut alg, Elem::FALSE, p_np));
    assert!(alg.is_arrow(p_np, Elem::FALSE));
}

#[test]
fn functoriality() {
    let mut alg = Algebra::new();
    let [p, q, r] = atoms(&mut alg, ["P", "Q", "R"]);
    alg.put_arrow(p, q);
    let (rp, rq) = (alg.exponential(p, r), alg.exponential(q, r));

    let mut prover = Prover::new(&mut alg, Opt::default());
    assert_eq!(prover.prove(rp, rq), Some(1));
    assert!(alg.is_arrow(rp, rq));
}

#[test]
fn exponentials_same_exponent() {
    let mut alg = Algebra::new();
    let [q, r, s, t] = atoms(&mut alg, ["Q", "R", "S", "T"]);
    // (R => Q ^ S) => (R => (Q v T) ^ (S v T))
    let qs = alg.product([q, s]);
    let (q_t, s_t) = (alg.coproduct([q, t]), alg.coproduct([s, t]));
    let goal = alg.product([q_t, s_t]);
    let (x, y) = (alg.exponential(qs, r), alg.exponential(goal, r));

    let mut prover = Prover::new(&mut alg, Opt::default());
    assert_eq!(prover.prove(x, y), Some(1));
    assert!(prover.stats().derived_by(Rule::Functoriality) > 0);
}

#[test]
fn downstream() {
    let mut alg = Algebra::new();
    let [p, q, r, s] = atoms(&mut alg, ["P", "Q", "R", "S"]);
    alg.put_arrow(p, q);
    alg.put_arrow(p, s);
    let qs = alg.product([q, s]);
    alg.put_arrow(qs, r);

    let mut prover = Prover::new(&mut alg, Opt::default());
    assert_eq!(prover.prove(p, r), Some(1));
    assert_eq!(prover.stats().derived_by(Rule::Downstream), 1);
    assert_eq!(prover.stats().derived_by(Rule::ProductIntro), 1);
    assert!(alg.is_arrow(p, qs));
}

#[test]
fn upstream() {
    let mut alg = Algebra::new();
    let [p, q, r, s] = atoms(&mut alg, ["P", "Q", "R", "S"]);
    let q_s = alg.coproduct([q, s]);
    alg.put_arrow(q, r);
    alg.put_arrow(s, r);
    alg.put_arrow(p, q_s);

    let mut prover = Prover::new(&mut alg, Opt::default());
    assert_eq!(prover.prove(p, r), Some(1));
    assert_eq!(prover.stats().derived_by(Rule::Upstream), 1);
    assert_eq!(prover.stats().derived_by(Rule::CoproductElim), 1);
    assert!(alg.is_arrow(q_s, r));
}

#[test]
fn meet() {
    let mut alg = Algebra::new();
    let [p, q, r, s] = atoms(&mut alg, ["P", "Q", "R", "S"]);
    // P => Q, P => S, S => (Q => R)
    let e = alg.exponential(r, q);
    alg.put_arrow(p, q);
    alg.put_arrow(p, s);
    alg.put_arrow(s, e);

    let mut prover = Prover::new(&mut alg, Opt::default());
    assert_eq!(prover.prove(p, r), Some(1));
    assert_eq!(prover.stats().derived_by(Rule::Meet), 1);
    assert_eq!(prover.stats().derived_by(Rule::Downstream), 0);
    assert_eq!(prover.stats().derived_by(Rule::Upstream), 0);
    let qs = alg.product([q, s]);
    assert!(alg.is_arrow(qs, r));
}

#[test]
fn unprovable() {
    let mut alg = Algebra::new();
    let [q] = atoms(&mut alg, ["Q"]);
    let len = alg.len();

    let mut prover = Prover::new(&mut alg, Opt::default());
    assert!(!prover.implication(Elem::TRUE, q));
    assert!(prover.stats().cuts > 0);
    assert_eq!(prover.stats().derived, 0);

    assert!(!alg.is_arrow(Elem::TRUE, q));
    assert!(alg.arrows_to(Elem::TRUE).is_empty());
    assert!(alg.arrows_from(q).is_empty());
    assert_eq!(alg.len(), len);
}

#[test]
fn no_pay() {
    let mut alg = Algebra::new();
    let [p, q] = atoms(&mut alg, ["P", "Q"]);
    alg.put_arrow(p, q);
    let pq = alg.product([p, q]);
    assert!(!Prover::new(&mut alg, Opt { lim: 0 }).implication(p, pq));
    assert!(Prover::new(&mut alg, Opt { lim: 1 }).implication(p, pq));
}
