//! Proof search for intuitionistic propositional logic in Heyting algebras.
//!
//! An [`Algebra`] contains canonical elements built from atoms by
//! products (conjunction), coproducts (disjunction), and exponentials (implication),
//! as well as arrows between elements that are known to imply each other.
//! A [`Prover`] derives new arrows by a bounded search.
#![no_std]
#![forbid(unsafe_code)]
//#![warn(missing_docs)]

extern crate alloc;

mod algebra;
mod display;
mod element;
pub mod form;
pub mod problem;
pub mod prover;
pub mod role;
mod stats;
pub mod szs;
#[cfg(feature = "tptp")]
pub mod tptp;

pub use algebra::Algebra;
pub use display::Disp;
pub use element::{Elem, Element, Factors, Kind};
pub use form::Form;
pub use problem::Problem;
pub use prover::{Opt, Prover};
pub use stats::Stats;
