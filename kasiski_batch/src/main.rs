use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use kasiski::fixtures::{self, Fixture};
use kasiski::{AttackConfig, AttackOutcome, CorrelationMethod, NOT_FOUND_MESSAGE, PARTITION_LENGTH};
use log::warn;

/// Runs the key recovery on every fixture triple in a directory.
#[derive(Parser, Debug)]
#[command(name = "kasiski_batch")]
#[command(about = "Attacks every <stem>_input/_dictionary/_hash triple in a directory")]
struct Cli {
    /// Directory containing the fixture files
    #[arg(default_value = "test", help = "Directory containing fixture triples")]
    dir: PathBuf,

    /// Growth of the scan window and maximum key length per pass
    #[arg(short, long, default_value_t = PARTITION_LENGTH)]
    partition_length: usize,

    /// Correlate in the frequency domain instead of term by term
    #[arg(long)]
    spectral: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli: Cli = Cli::parse();

    let fixtures = match fixtures::discover(&cli.dir) {
        Ok(fixtures) => fixtures,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let correlation = if cli.spectral {
        CorrelationMethod::Spectral
    } else {
        CorrelationMethod::Direct
    };
    let config = AttackConfig::default()
        .with_partition_length(cli.partition_length)
        .with_correlation(correlation);

    let passed = fixtures
        .iter()
        .filter(|fixture| run_case(fixture, &config))
        .count();

    println!("{}/{} fixtures solved", passed, fixtures.len());
    if passed == fixtures.len() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

/// Attacks one fixture. Any error, and any run that ends without a key,
/// counts as a failed case.
fn run_case(fixture: &Fixture, config: &AttackConfig) -> bool {
    let started = Instant::now();
    let result = fixture
        .load()
        .and_then(|input| kasiski::break_cipher(&input, config));

    match result {
        Ok(AttackOutcome::Found(recovery)) => {
            println!(
                "{}: Key: {}. Time: {:.3?}",
                fixture.stem,
                recovery.key,
                started.elapsed()
            );
            true
        }
        Ok(_) => {
            println!("{}: {} Time: {:.3?}", fixture.stem, NOT_FOUND_MESSAGE, started.elapsed());
            false
        }
        Err(e) => {
            warn!("Fixture {} failed: {}", fixture.stem, e);
            println!("{}: {}", fixture.stem, e);
            false
        }
    }
}
