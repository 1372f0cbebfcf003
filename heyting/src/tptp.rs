//! Reading propositional problems in the TPTP format.

use crate::form::{Form, Op, OpA};
use crate::role::{Role, RoleMap};
use crate::szs::NoSuccessKind::{self, Inappropriate, SyntaxError};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::convert::TryFrom;
use tptp::{cnf, common, fof, top, TPTPIterator};

pub type SForm = Form<String>;

type Result<T> = core::result::Result<T, NoSuccessKind>;

/// Parse TPTP input, adding its formulas to `forms`.
///
/// Includes are handled by calling `f` with the name of the included file.
pub fn parse<F>(bytes: &[u8], forms: &mut RoleMap<Vec<SForm>>, f: F) -> Result<()>
where
    F: Fn(&str, &mut RoleMap<Vec<SForm>>) -> Result<()>,
{
    let mut parser = TPTPIterator::<()>::new(bytes);
    for input in &mut parser {
        let input = input.map_err(|_| SyntaxError)?;
        match input {
            top::TPTPInput::Include(include) => f(include.file_name.0 .0, forms)?,
            top::TPTPInput::Annotated(ann) => {
                let (role, formula) = get_role_formula(*ann)?;
                log::info!("formula: {}", formula);
                forms.get_mut(role).push(formula);
            }
        };
    }
    if parser.remaining.is_empty() {
        Ok(())
    } else {
        Err(SyntaxError)
    }
}

fn get_role_formula(annotated: top::AnnotatedFormula) -> Result<(Role, SForm)> {
    use top::AnnotatedFormula::*;
    match annotated {
        Fof(fof) => Ok((Role::from(fof.0.role), SForm::try_from(*fof.0.formula)?)),
        Cnf(cnf) => Ok((Role::from(cnf.0.role), SForm::try_from(*cnf.0.formula)?)),
        // typed formulas
        Tfx(_) => Err(Inappropriate),
    }
}

impl TryFrom<fof::LogicFormula<'_>> for SForm {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::LogicFormula) -> Result<Self> {
        use fof::LogicFormula::*;
        match frm {
            Binary(b) => Self::try_from(b),
            Unary(u) => Self::try_from(u),
            Unitary(u) => Self::try_from(u),
        }
    }
}

impl TryFrom<fof::UnitFormula<'_>> for SForm {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::UnitFormula) -> Result<Self> {
        use fof::UnitFormula::*;
        match frm {
            Unitary(u) => Self::try_from(u),
            Unary(u) => Self::try_from(u),
        }
    }
}

impl TryFrom<fof::UnaryFormula<'_>> for SForm {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::UnaryFormula) -> Result<Self> {
        use fof::UnaryFormula::*;
        match frm {
            Unary(_negation, fuf) => Ok(-Self::try_from(*fuf)?),
            // term inequality
            InfixUnary(_) => Err(Inappropriate),
        }
    }
}

impl TryFrom<fof::BinaryFormula<'_>> for SForm {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::BinaryFormula) -> Result<Self> {
        use fof::BinaryFormula::*;
        match frm {
            Nonassoc(fbn) => Self::try_from(fbn),
            Assoc(fba) => Self::try_from(fba),
        }
    }
}

impl TryFrom<fof::BinaryNonassoc<'_>> for SForm {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::BinaryNonassoc) -> Result<Self> {
        let left = Self::try_from(*frm.left)?;
        let right = Self::try_from(*frm.right)?;
        use common::NonassocConnective::*;
        Ok(match frm.op {
            LRImplies => Self::bin(left, Op::Impl, right),
            RLImplies => Self::bin(right, Op::Impl, left),
            Equivalent => Self::bin(left, Op::EqFm, right),
            NotEquivalent => -Self::bin(left, Op::EqFm, right),
            NotOr => -(left | right),
            NotAnd => -(left & right),
        })
    }
}

impl TryFrom<fof::BinaryAssoc<'_>> for SForm {
    type Error = NoSuccessKind;
    fn try_from(fm: fof::BinaryAssoc) -> Result<Self> {
        use fof::BinaryAssoc::*;
        let (op, fms) = match fm {
            Or(fms) => (OpA::Disj, fms.0),
            And(fms) => (OpA::Conj, fms.0),
        };
        let fms = fms.into_iter().map(Self::try_from);
        Ok(Self::BinA(op, fms.collect::<Result<_>>()?))
    }
}

impl TryFrom<fof::UnitaryFormula<'_>> for SForm {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::UnitaryFormula) -> Result<Self> {
        use fof::UnitaryFormula::*;
        match frm {
            Parenthesised(flf) => Self::try_from(*flf),
            Quantified(_) => Err(Inappropriate),
            Atomic(a) => Self::try_from(*a),
        }
    }
}

impl TryFrom<fof::PlainAtomicFormula<'_>> for SForm {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::PlainAtomicFormula) -> Result<Self> {
        use fof::PlainTerm::*;
        match frm.0 {
            Constant(c) => Ok(Self::Atom(c.to_string())),
            // predicates with arguments
            Function(_, _) => Err(Inappropriate),
        }
    }
}

impl TryFrom<fof::DefinedAtomicFormula<'_>> for SForm {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::DefinedAtomicFormula) -> Result<Self> {
        use fof::DefinedAtomicFormula::*;
        match frm {
            Plain(p) => Self::try_from(p),
            // term equality
            Infix(_) => Err(Inappropriate),
        }
    }
}

impl TryFrom<fof::DefinedPlainFormula<'_>> for SForm {
    type Error = NoSuccessKind;
    fn try_from(fm: fof::DefinedPlainFormula) -> Result<Self> {
        use fof::DefinedPlainTerm::Constant;
        match fm.0 {
            Constant(c) if c.0 .0 .0 .0 .0 == "true" => Ok(Self::True),
            Constant(c) if c.0 .0 .0 .0 .0 == "false" => Ok(Self::False),
            _ => Err(Inappropriate),
        }
    }
}

impl TryFrom<fof::AtomicFormula<'_>> for SForm {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::AtomicFormula) -> Result<Self> {
        use fof::AtomicFormula::*;
        match frm {
            Plain(p) => Self::try_from(p),
            Defined(d) => Self::try_from(d),
            System(_) => Err(Inappropriate),
        }
    }
}

impl TryFrom<fof::Formula<'_>> for SForm {
    type Error = NoSuccessKind;
    fn try_from(frm: fof::Formula) -> Result<Self> {
        Self::try_from(frm.0)
    }
}

impl TryFrom<cnf::Literal<'_>> for SForm {
    type Error = NoSuccessKind;
    fn try_from(lit: cnf::Literal) -> Result<Self> {
        use cnf::Literal::*;
        match lit {
            Atomic(a) => Self::try_from(a),
            NegatedAtomic(a) => Ok(-Self::try_from(a)?),
            Infix(_) => Err(Inappropriate),
        }
    }
}

impl TryFrom<cnf::Disjunction<'_>> for SForm {
    type Error = NoSuccessKind;
    fn try_from(frm: cnf::Disjunction) -> Result<Self> {
        let lits = frm.0.into_iter().map(Self::try_from);
        Ok(Self::BinA(OpA::Disj, lits.collect::<Result<_>>()?))
    }
}

impl TryFrom<cnf::Formula<'_>> for SForm {
    type Error = NoSuccessKind;
    fn try_from(frm: cnf::Formula) -> Result<Self> {
        use cnf::Formula::*;
        match frm {
            Disjunction(d) | Parenthesised(d) => Self::try_from(d),
        }
    }
}

impl From<top::FormulaRole<'_>> for Role {
    fn from(role: top::FormulaRole<'_>) -> Self {
        match role.0 .0 {
            "conjecture" => Self::Conjecture,
            "negated_conjecture" => Self::NegatedConjecture,
            _ => Self::Axiom,
        }
    }
}

#[test]
fn propositional() {
    let input = b"fof(a1, axiom, p => (q | ~ r)).\nfof(c, conjecture, $true & p).\n";
    let mut forms = RoleMap::default();
    assert_eq!(parse(input, &mut forms, |_, _| Err(Inappropriate)), Ok(()));
    let (p, q, r) = (Form::Atom("p".to_string()), Form::Atom("q".to_string()), Form::Atom("r".to_string()));
    let axiom = Form::imp(p.clone(), q | -r);
    assert_eq!(forms.get_mut(Role::Axiom), &Vec::from([axiom]));
    assert_eq!(forms.conjecture(), Some(Form::True & p));
}

#[test]
fn quantified() {
    let input = b"fof(a1, axiom, ![X]: p(X)).\n";
    let mut forms = RoleMap::default();
    let result = parse(input, &mut forms, |_, _| Ok(()));
    assert_eq!(result, Err(Inappropriate));
}

#[test]
fn typed() {
    let mut forms = RoleMap::default();
    let result = parse(b"tff(a, axiom, p).\n", &mut forms, |_, _| Ok(()));
    assert_eq!(result, Err(Inappropriate));
}

#[test]
fn garbage() {
    let mut forms = RoleMap::default();
    let result = parse(b"fof(a1, axiom, p", &mut forms, |_, _| Ok(()));
    assert_eq!(result, Err(SyntaxError));
}
