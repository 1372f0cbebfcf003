//! Built-in scenarios exercising the algebra and the prover.

use heyting::{Algebra, Elem, Opt, Prover, Stats};

/// The atoms P, Q, R, S, T, U.
pub type Atoms = [Elem; 6];

fn atoms(alg: &mut Algebra) -> Atoms {
    ["P", "Q", "R", "S", "T", "U"].map(|name| alg.atom(name))
}

/// Algebra with prover settings, shared by the steps of a scenario.
pub struct Run<'a> {
    pub alg: &'a mut Algebra,
    opt: Opt,
    stats: Stats,
}

impl<'a> Run<'a> {
    pub fn new(alg: &'a mut Algebra, opt: Opt) -> Self {
        let stats = Stats::default();
        Self { alg, opt, stats }
    }

    pub fn put(&mut self, x: Elem, y: Elem) {
        self.alg.put_arrow(x, y)
    }

    pub fn prove(&mut self, x: Elem, y: Elem) -> bool {
        let mut prover = Prover::new(&mut *self.alg, self.opt);
        let proved = prover.implication(x, y);
        self.stats += prover.stats().clone();
        proved
    }
}

pub struct Scenario {
    pub name: &'static str,
    pub check: fn(&mut Run, Atoms) -> bool,
}

/// Scenarios that are each run in a fresh algebra.
pub fn basic() -> Vec<Scenario> {
    Vec::from([
        Scenario {
            name: "arrows",
            check: |run, [p, q, ..]| {
                run.put(p, q);
                let alg = &run.alg;
                alg.is_arrow(p, q)
                    && alg.is_arrow(Elem::FALSE, p)
                    && alg.is_arrow(p, Elem::TRUE)
                    && !alg.is_arrow(q, p)
                    && !alg.is_arrow(Elem::TRUE, p)
                    && !alg.is_arrow(p, Elem::FALSE)
                    && alg.is_arrow(p, p)
            },
        },
        Scenario {
            name: "projections",
            check: |run, [p, q, ..]| {
                let prod = run.alg.product([p, q]);
                let coprod = run.alg.coproduct([p, q]);
                let alg = &run.alg;
                alg.is_arrow(prod, p)
                    && alg.is_arrow(prod, q)
                    && alg.is_arrow(p, coprod)
                    && alg.is_arrow(q, coprod)
                    && !alg.is_arrow(p, prod)
                    && !alg.is_arrow(q, prod)
                    && !alg.is_arrow(coprod, p)
                    && !alg.is_arrow(coprod, q)
            },
        },
        Scenario {
            name: "canonical",
            check: |run, [p, q, r, ..]| {
                let alg = &mut run.alg;
                let pqr = alg.product([p, q, r]);
                let pq = alg.product([p, q]);
                let prod = alg.product([pq, r, Elem::TRUE]);
                let p_q_r = alg.coproduct([p, q, r]);
                let p_q = alg.coproduct([p, q]);
                let coprod = alg.coproduct([p_q, r, Elem::FALSE]);
                prod == pqr
                    && coprod == p_q_r
                    && alg.exponential(Elem::TRUE, p) == Elem::TRUE
                    && alg.exponential(p, Elem::FALSE) == Elem::TRUE
                    && alg.exponential(p, Elem::TRUE) == p
            },
        },
        Scenario {
            name: "transitivity",
            check: |run, [p, q, r, s, ..]| {
                run.put(p, r);
                run.put(q, s);
                let (pq, rs) = (run.alg.product([p, q]), run.alg.product([r, s]));
                let (p_q, r_s) = (run.alg.coproduct([p, q]), run.alg.coproduct([r, s]));
                run.prove(pq, rs)
                    && run.alg.is_arrow(pq, rs)
                    && run.prove(p_q, r_s)
                    && run.alg.is_arrow(p_q, r_s)
            },
        },
        Scenario {
            name: "distributivity",
            check: |run, [p, q, r, ..]| {
                let pq = run.alg.product([p, q]);
                let pr = run.alg.product([p, r]);
                let q_r = run.alg.coproduct([q, r]);
                let lhs = run.alg.product([p, q_r]);
                let rhs = run.alg.coproduct([pq, pr]);
                run.prove(lhs, rhs) && run.prove(rhs, lhs)
            },
        },
        Scenario {
            name: "contradiction",
            check: |run, [p, ..]| {
                let np = run.alg.negate(p);
                let p_np = run.alg.product([p, np]);
                run.prove(p_np, Elem::FALSE) && run.prove(Elem::FALSE, p_np)
            },
        },
        Scenario {
            name: "syllogism",
            check: |run, [p, q, ..]| {
                let np = run.alg.negate(p);
                let p_q = run.alg.coproduct([p, q]);
                run.put(Elem::TRUE, p_q);
                run.put(Elem::TRUE, np);
                run.prove(Elem::TRUE, q)
            },
        },
        Scenario {
            name: "functoriality",
            check: |run, [p, q, r, ..]| {
                run.put(p, q);
                let rp = run.alg.exponential(p, r);
                let rq = run.alg.exponential(q, r);
                run.prove(rp, rq)
            },
        },
        Scenario {
            name: "unprovable",
            check: |run, [_, q, ..]| !run.prove(Elem::TRUE, q) && !run.alg.is_arrow(Elem::TRUE, q),
        },
    ])
}

/// Exercise 1.4.2 of "Logic Primer" by Colin Allen and Michael Hand.
///
/// The exercises share one algebra, whose arrows are cleared before each exercise.
pub fn primer() -> Vec<Scenario> {
    Vec::from([
        Scenario {
            name: "S1",
            check: |run, [p, _, r, s, ..]| {
                let (np, nr) = (run.alg.negate(p), run.alg.negate(r));
                let p_nr = run.alg.coproduct([p, nr]);
                run.put(Elem::TRUE, p_nr);
                run.put(nr, s);
                run.put(Elem::TRUE, np);
                run.prove(Elem::TRUE, s)
            },
        },
        Scenario {
            name: "S2",
            check: |run, [p, _, r, s, ..]| {
                let (np, nr) = (run.alg.negate(p), run.alg.negate(r));
                let p_nr = run.alg.coproduct([p, nr]);
                run.put(Elem::TRUE, p_nr);
                run.put(nr, s);
                run.put(Elem::TRUE, np);
                let goal = run.alg.product([s, np]);
                run.prove(Elem::TRUE, goal)
            },
        },
        Scenario {
            name: "S3",
            check: |run, [p, q, r, s, t, _]| {
                let (nq, ns) = (run.alg.negate(q), run.alg.negate(s));
                let nq_r = run.alg.coproduct([nq, r]);
                let pt = run.alg.product([p, t]);
                run.put(p, nq);
                run.put(nq_r, ns);
                run.put(Elem::TRUE, pt);
                run.prove(Elem::TRUE, ns)
            },
        },
        Scenario {
            name: "S4",
            check: |run, [p, q, r, s, t, _]| {
                let ns = run.alg.negate(s);
                let qr = run.alg.product([q, r]);
                let p_qr = run.alg.product([p, qr]);
                let pr = run.alg.product([p, r]);
                let s_t = run.alg.coproduct([s, t]);
                run.put(Elem::TRUE, p_qr);
                run.put(pr, ns);
                run.put(Elem::TRUE, s_t);
                run.prove(Elem::TRUE, t)
            },
        },
        Scenario {
            name: "S5",
            check: |run, [p, q, r, ..]| {
                run.put(p, q);
                run.put(p, r);
                run.put(Elem::TRUE, p);
                let qr = run.alg.product([q, r]);
                run.prove(Elem::TRUE, qr)
            },
        },
        Scenario {
            name: "S6",
            check: |run, [p, q, r, s, ..]| {
                let (nq, nr) = (run.alg.negate(q), run.alg.negate(r));
                let q_r = run.alg.coproduct([q, r]);
                let nr_s = run.alg.coproduct([nr, s]);
                run.put(Elem::TRUE, p);
                run.put(Elem::TRUE, q_r);
                run.put(Elem::TRUE, nr_s);
                run.put(Elem::TRUE, nq);
                let ps = run.alg.product([p, s]);
                run.prove(Elem::TRUE, ps)
            },
        },
        Scenario {
            name: "S7",
            check: |run, [p, q, r, ..]| {
                let np = run.alg.negate(p);
                let r_np = run.alg.coproduct([r, np]);
                let p_q = run.alg.coproduct([p, q]);
                run.put(Elem::TRUE, np);
                run.put(r_np, p_q);
                run.put(p_q, r_np);
                run.prove(Elem::TRUE, q)
            },
        },
        Scenario {
            name: "S8",
            check: |run, [p, q, r, ..]| {
                let (qp, pq) = (run.alg.exponential(p, q), run.alg.exponential(q, p));
                let both = run.alg.product([qp, pq]);
                run.put(both, r);
                run.put(Elem::TRUE, qp);
                run.put(Elem::TRUE, pq);
                run.prove(Elem::TRUE, r)
            },
        },
        Scenario {
            name: "S9",
            check: |run, [p, q, r, s, t, u]| {
                let (np, nt) = (run.alg.negate(p), run.alg.negate(t));
                let qr = run.alg.product([q, r]);
                let np_s = run.alg.coproduct([np, s]);
                let u_np = run.alg.product([u, np]);
                run.put(np, qr);
                run.put(np_s, nt);
                run.put(Elem::TRUE, u_np);
                let ur = run.alg.product([u, r]);
                let goal = run.alg.product([ur, nt]);
                run.prove(Elem::TRUE, goal)
            },
        },
        Scenario {
            name: "S10",
            check: |run, [_, q, r, s, t, u]| {
                let (ns, nu) = (run.alg.negate(s), run.alg.negate(u));
                let q_r = run.alg.coproduct([q, r]);
                let premise = run.alg.product([q_r, ns]);
                let qu = run.alg.product([q, u]);
                let ns_nu = run.alg.coproduct([ns, nu]);
                run.put(premise, t);
                run.put(Elem::TRUE, qu);
                run.put(Elem::TRUE, ns_nu);
                let tu = run.alg.product([t, u]);
                run.prove(Elem::TRUE, tu)
            },
        },
    ])
}

/// Results of running scenarios.
#[derive(Default)]
pub struct Report {
    pub results: Vec<(&'static str, bool)>,
    pub stats: Stats,
}

impl Report {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|(_, ok)| *ok).count()
    }

    fn record(&mut self, name: &'static str, run: Run) {
        log::info!("scenario {} done after {} queries", name, run.stats.queries);
        self.stats += run.stats;
    }
}

/// Run all scenarios.
pub fn run(opt: Opt) -> Report {
    let mut report = Report::default();

    for scenario in basic() {
        let mut alg = Algebra::new();
        let atoms = atoms(&mut alg);
        let mut run = Run::new(&mut alg, opt);
        let ok = (scenario.check)(&mut run, atoms);
        report.record(scenario.name, run);
        report.results.push((scenario.name, ok));
    }

    let mut alg = Algebra::new();
    let atoms = atoms(&mut alg);
    for scenario in primer() {
        alg.clear_arrows();
        let mut run = Run::new(&mut alg, opt);
        let ok = (scenario.check)(&mut run, atoms);
        report.record(scenario.name, run);
        report.results.push((scenario.name, ok));
    }

    report
}

#[test]
fn outcomes() {
    let report = run(Opt::default());
    assert_eq!(report.results.len(), 19);
    for (name, ok) in &report.results {
        let expected = !["S7", "S10"].contains(name);
        assert_eq!(*ok, expected, "{} {}", name, if *ok { "succeeded" } else { "failed" });
    }
    assert_eq!(report.succeeded(), 17);
    assert!(report.stats.queries > 0);
}
