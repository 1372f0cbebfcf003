use clap::Parser;
use heyting::Opt;
use std::path::PathBuf;

/// Automated theorem prover for intuitionistic propositional logic
///
/// This prover searches for arrows in a Heyting algebra,
/// using the universal properties of products, coproducts, and exponentials
/// as well as a bounded amount of substitution steps.
/// When no problem file is given, a battery of built-in scenarios is run.
///
/// Set the environment variable "LOG" to "info", "debug", or "trace"
/// to obtain an increasingly detailed log.
#[derive(Parser)]
#[command(version)]
pub struct Cli {
    /// Number of pay levels for iterative deepening
    ///
    /// Each level permits one more substitution step along any branch of the search.
    #[arg(long, default_value_t = 3)]
    pub lim: usize,

    /// Run the built-in scenarios
    #[arg(long, conflicts_with = "file")]
    pub battery: bool,

    /// Write SZS output (such as the proven arrow and error details) to given file
    #[arg(short)]
    pub output: Option<PathBuf>,

    /// Write proof search statistics in JSON format to given file
    #[arg(long)]
    pub stats: Option<PathBuf>,

    /// Path of the TPTP problem file
    pub file: Option<PathBuf>,
}

impl Cli {
    pub fn opt(&self) -> Opt {
        Opt { lim: self.lim }
    }

    pub fn output(&self, out: impl std::fmt::Display) -> Result<(), std::io::Error> {
        use std::io::Write;
        match &self.output {
            Some(o) => std::fs::write(o, out.to_string()),
            None => write!(std::io::stdout(), "{}", heyting::szs::Output(out)),
        }
    }
}

#[test]
fn defaults() {
    let cli = Cli::parse_from(["heyprove"]);
    assert_eq!(cli.opt().lim, 3);
    assert!(cli.file.is_none());

    let cli = Cli::parse_from(["heyprove", "--lim", "5", "problem.p"]);
    assert_eq!(cli.opt().lim, 5);
    assert_eq!(cli.file, Some(PathBuf::from("problem.p")));
    assert!(Cli::try_parse_from(["heyprove", "--battery", "problem.p"]).is_err());
}
