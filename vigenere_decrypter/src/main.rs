use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use kasiski::{
    AttackConfig, AttackInput, AttackOutcome, CorrelationMethod, NOT_FOUND_MESSAGE,
    PARTITION_LENGTH,
};
use log::info;

/// Command-line arguments for the Vigenère key recovery program.
#[derive(Parser, Debug)]
#[command(name = "vigenere_decrypter")]
#[command(about = "Recovers a Vigenère key using Kasiski examination and a SHA-256 digest")]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(help = "Path to the input file containing encrypted text")]
    input: PathBuf,

    /// Path to the dictionary file defining the alphabet and its order
    #[arg(help = "Path to the dictionary file (alphabet, one line)")]
    dictionary: PathBuf,

    /// Path to the file containing the SHA-256 digest of the plaintext
    #[arg(help = "Path to the hash file (hex SHA-256 of the plaintext)")]
    hash: PathBuf,

    /// Growth of the scan window and maximum key length per pass
    #[arg(short, long, default_value_t = PARTITION_LENGTH)]
    partition_length: usize,

    /// Repeated-sequence length of the first pass
    #[arg(short = 's', long, default_value_t = 1)]
    initial_sequence_length: usize,

    /// Correlate in the frequency domain instead of term by term
    #[arg(long)]
    spectral: bool,

    /// Give up after this many seconds
    #[arg(short, long)]
    timeout_secs: Option<u64>,
}

impl Cli {
    fn config(&self) -> AttackConfig {
        let correlation = if self.spectral {
            CorrelationMethod::Spectral
        } else {
            CorrelationMethod::Direct
        };

        let config = AttackConfig::default()
            .with_partition_length(self.partition_length)
            .with_initial_sequence_length(self.initial_sequence_length)
            .with_correlation(correlation);

        match self.timeout_secs {
            Some(secs) => config.with_time_limit(Duration::from_secs(secs)),
            None => config,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli: Cli = Cli::parse();

    match run(&cli) {
        Ok(AttackOutcome::Found(recovery)) => {
            info!(
                "Recovered key of length {} ({} frequencies, {} attempts)",
                recovery.key_length, recovery.language, recovery.attempts
            );
            println!("Key: {}.", recovery.key);
            ExitCode::SUCCESS
        }
        Ok(AttackOutcome::NotFound { .. }) => {
            println!("{}", NOT_FOUND_MESSAGE);
            ExitCode::from(1)
        }
        Ok(AttackOutcome::TimedOut { attempts }) => {
            println!("Time limit reached after {} attempts. {}", attempts, NOT_FOUND_MESSAGE);
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<AttackOutcome, Box<dyn Error>> {
    let input = AttackInput::load(&cli.input, &cli.dictionary, &cli.hash)?;
    let outcome = kasiski::break_cipher(&input, &cli.config())?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_config() {
        let cli = Cli::parse_from(["vigenere_decrypter", "in", "dict", "hash"]);
        assert_eq!(cli.config(), AttackConfig::default());
    }

    #[test]
    fn test_config_from_flags() {
        let cli = Cli::parse_from([
            "vigenere_decrypter",
            "in",
            "dict",
            "hash",
            "--partition-length",
            "5",
            "-s",
            "3",
            "--spectral",
            "--timeout-secs",
            "2",
        ]);
        let config = cli.config();

        assert_eq!(config.partition_length, 5);
        assert_eq!(config.initial_max_key_length, 5);
        assert_eq!(config.initial_sequence_length, 3);
        assert_eq!(config.correlation, CorrelationMethod::Spectral);
        assert_eq!(config.time_limit, Some(Duration::from_secs(2)));
    }
}
