use crate::prover::Rule;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Proof search statistics.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Stats {
    /// How many implications were asked during search?
    pub queries: usize,
    /// How many queries were cut off because they failed before with at least the same pay?
    pub cuts: usize,
    /// How many arrows were derived by rule applications?
    pub derived: usize,
    /// How many arrows were derived by each rule?
    rules: [usize; Rule::COUNT],
}

impl Stats {
    /// Number of arrows derived by the given rule.
    pub fn derived_by(&self, rule: Rule) -> usize {
        self.rules[rule as usize]
    }

    pub(crate) fn derive(&mut self, rule: Rule) {
        self.derived += 1;
        self.rules[rule as usize] += 1;
    }
}

impl core::ops::AddAssign for Stats {
    fn add_assign(&mut self, other: Self) {
        self.queries += other.queries;
        self.cuts += other.cuts;
        self.derived += other.derived;
        let rules = self.rules.iter_mut().zip(other.rules);
        rules.for_each(|(n, m)| *n += m);
    }
}

impl core::iter::Sum for Stats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let mut stats = Stats::default();
        for i in iter {
            stats += i;
        }
        stats
    }
}
