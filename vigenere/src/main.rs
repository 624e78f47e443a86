use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use kasiski::alphabet::LATIN;
use kasiski::cipher;
use kasiski::fixtures::{self, Fixture, DEFAULT_PREFIX};
use kasiski::{sha256_hex, Alphabet};
use log::debug;

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: PathBuf,

    /// Key string for the Vigenère cipher
    #[arg(short, long, help = "Key string for the cipher")]
    key: String,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file (stdout if omitted)")]
    output: Option<PathBuf>,

    /// Mode of operation (encrypt, decrypt or fixture)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt/fixture)")]
    mode: OperationMode,

    /// Ordered alphabet the cipher works over
    #[arg(short, long, default_value = LATIN, help = "Ordered cipher alphabet")]
    alphabet: String,

    /// Directory that receives numbered fixture triples
    #[arg(long, default_value = "test", help = "Directory for fixture files")]
    fixture_dir: PathBuf,

    /// File name prefix of generated fixtures
    #[arg(long, default_value = DEFAULT_PREFIX, help = "Prefix of fixture file names")]
    prefix: String,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
    /// Encrypt and write an input/dictionary/hash fixture triple
    Fixture,
}

/// Main entry point for the Vigenère cipher program.
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    let alphabet = Alphabet::new(&cli.alphabet.to_uppercase())?;
    let key = cli.key.to_uppercase();

    // Read input file content
    let content: String = std::fs::read_to_string(&cli.file)?;
    let content = content.trim().to_uppercase();

    // Process based on selected mode
    let result = match cli.mode {
        OperationMode::Encrypt => {
            println!("Encrypting with key: {}", key);
            cipher::encrypt(&content, &key, &alphabet)?
        }
        OperationMode::Decrypt => {
            println!("Decrypting with key: {}", key);
            cipher::decrypt(&content, &key, &alphabet)?
        }
        OperationMode::Fixture => {
            let fixture = write_fixture(&cli, &content, &key, &alphabet)?;
            println!("Fixture written: {}", fixture.stem);
            return Ok(());
        }
    };

    match cli.output {
        Some(output) => {
            std::fs::write(&output, result)?;
            println!("Operation completed successfully! Output saved to: {}", output.display());
        }
        None => println!("{}", result),
    }

    Ok(())
}

/// Strips the plaintext to the alphabet, encrypts it and stores the
/// ciphertext, the alphabet and the plaintext digest as a numbered fixture.
fn write_fixture(
    cli: &Cli,
    content: &str,
    key: &str,
    alphabet: &Alphabet,
) -> Result<Fixture, Box<dyn Error>> {
    let plaintext = cipher::strip_to_alphabet(content, alphabet);
    let encrypted = cipher::encrypt(&plaintext, key, alphabet)?;
    let digest = sha256_hex(&plaintext);
    debug!("Fixture plaintext has {} symbols", plaintext.chars().count());

    let fixture = fixtures::write_fixture(
        &cli.fixture_dir,
        &cli.prefix,
        &encrypted,
        &alphabet.to_string(),
        &digest,
    )?;

    println!("Encrypted: {} \nDecrypted: {} \nHASH: {}", encrypted, plaintext, digest);
    Ok(fixture)
}
