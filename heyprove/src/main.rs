use clap::Parser;
use heyprove::{battery, parse, Cli, Error};
use heyting::{szs, Algebra, Prover, Stats};
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn main() {
    use env_logger::Env;
    // log warnings and errors by default, do not print timestamps
    env_logger::Builder::from_env(Env::default().filter_or("LOG", "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let result = match &cli.file {
        Some(file) if !cli.battery => prove(&cli, file),
        _ => run_battery(&cli),
    };
    if let Err(e) = result {
        let status = szs::Status(e.get_kind());
        match &cli.file {
            Some(file) => print!("{}", status.of(problem_name(file))),
            None => print!("{}", status),
        }
        if let Some(e) = e.get_error() {
            if let Err(e) = cli.output(e) {
                log::error!("could not write output: {}", e)
            }
        };
        std::process::exit(1);
    }
}

/// Name of a problem, namely its file name without extension.
fn problem_name(file: &Path) -> String {
    let stem = file.file_stem().unwrap_or(file.as_os_str());
    stem.to_string_lossy().into_owned()
}

fn write_stats(cli: &Cli, stats: &Stats) -> Result<(), Error> {
    if let Some(file) = &cli.stats {
        let mut f = File::create(file)?;
        writeln!(f, "{}", serde_json::to_string(stats)?)?;
    }
    Ok(())
}

fn prove(cli: &Cli, file: &Path) -> Result<(), Error> {
    let problem = parse::parse(file)?;
    let mut alg = Algebra::new();
    let (x, y) = problem.load(&mut alg);
    info!("loaded {} elements", alg.len());

    let mut prover = Prover::new(&mut alg, cli.opt());
    let pay = prover.prove(x, y);
    let stats = prover.stats().clone();
    info!("search completed after {} queries", stats.queries);
    write_stats(cli, &stats)?;

    match pay {
        Some(pay) => {
            info!("proof found with pay {}", pay);
            print!("{}", szs::Status(szs::Theorem).of(problem_name(file)));
            let arrow = format!("{} => {}", alg.display(x), alg.display(y));
            cli.output(arrow)?;
            Ok(())
        }
        None => Err(Error::from(szs::GaveUp)),
    }
}

fn run_battery(cli: &Cli) -> Result<(), Error> {
    let report = battery::run(cli.opt());
    for (name, ok) in &report.results {
        let status = if *ok { "succeeded" } else { "failed" };
        println!("{}: {}", name, status);
    }
    let (n, m) = (report.succeeded(), report.results.len());
    println!("{} / {} scenarios succeeded", n, m);
    write_stats(cli, &report.stats)
}
