use crate::Error;
use heyting::role::RoleMap;
use heyting::tptp::{self, SForm};
use log::info;
use std::path::{Path, PathBuf};

fn read_file(filename: &Path) -> std::io::Result<Vec<u8>> {
    std::fs::read(filename).or_else(|e| {
        let tptp = std::env::var("TPTP").or(Err(e))?;
        let mut path = PathBuf::from(tptp);
        path.push(filename);
        std::fs::read(path)
    })
}

/// Parse a TPTP file and the files it includes.
pub fn parse_file(filename: &Path, forms: &mut RoleMap<Vec<SForm>>) -> Result<(), Error> {
    info!("loading {:?}", filename);
    let bytes = read_file(filename)?;
    let include = |name: &str, forms: &mut RoleMap<Vec<SForm>>| {
        info!("include {}", name);
        parse_file(&PathBuf::from(name), forms).map_err(|e| *e.get_kind())
    };
    tptp::parse(&bytes, forms, include).map_err(Error::from)
}

/// Parse a TPTP file into a problem.
pub fn parse(filename: &Path) -> Result<heyting::Problem<String>, Error> {
    use std::convert::TryFrom;
    let mut forms = RoleMap::default();
    parse_file(filename, &mut forms)?;
    heyting::Problem::try_from(forms).map_err(Error::from)
}

#[test]
fn problem_file() {
    let dir = std::env::temp_dir().join(format!("heyprove-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let file = dir.join("syllogism.p");
    let input = "fof(a1, axiom, p => q).\nfof(a2, hypothesis, q => r).\nfof(c, conjecture, p => r).\n";
    std::fs::write(&file, input).unwrap();

    let problem = parse(&file).unwrap();
    assert_eq!(problem.axioms.len(), 2);
    let mut alg = heyting::Algebra::new();
    let (x, y) = problem.load(&mut alg);
    assert_eq!(alg.display(x).to_string(), "p");
    assert_eq!(alg.display(y).to_string(), "r");
    assert!(heyting::Prover::new(&mut alg, Default::default()).implication(x, y));

    assert_eq!(parse(&dir.join("missing.p")).unwrap_err().get_kind(), &heyting::szs::OsError);
    std::fs::remove_dir_all(&dir).unwrap();
}
