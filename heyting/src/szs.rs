//! Status and output in the SZS ontology used by automated theorem provers.

use core::fmt::{self, Debug, Display};
pub use NoSuccessKind::*;
pub use SuccessKind::*;

pub struct Status<K>(pub K);

impl<K> Status<K> {
    /// Attach the name of the problem that the status refers to.
    pub fn of<N: Display>(self, name: N) -> StatusOf<K, N> {
        StatusOf(self.0, name)
    }
}

impl<K: Debug> Display for Status<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "% SZS status {:?}", self.0)
    }
}

pub struct StatusOf<K, N>(K, N);

impl<K: Debug, N: Display> Display for StatusOf<K, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "% SZS status {:?} for {}", self.0, self.1)
    }
}

pub struct Output<O>(pub O);

impl<O: Display> Display for Output<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "% SZS output start")?;
        writeln!(f, "{}", self.0)?;
        writeln!(f, "% SZS output end")
    }
}

#[derive(Debug)]
pub enum SuccessKind {
    Theorem,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoSuccessKind {
    OsError,
    InputError,
    SyntaxError,
    Inappropriate,
    /// no proof was found with the available pay
    GaveUp,
}

#[test]
fn status_line() {
    use alloc::string::ToString;
    assert_eq!(Status(Theorem).to_string(), "% SZS status Theorem\n");
    assert_eq!(Status(GaveUp).to_string(), "% SZS status GaveUp\n");
    let line = Status(Inappropriate).of("SYN001+1").to_string();
    assert_eq!(line, "% SZS status Inappropriate for SYN001+1\n");
}
