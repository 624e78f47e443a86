//! Loading the three attack inputs: ciphertext, dictionary and target digest

use std::fs;
use std::path::Path;

use log::debug;

use crate::alphabet::Alphabet;
use crate::digest;
use crate::error::{AttackError, Result};

/// Reads the first line of a file, without its line terminator.
///
/// # Errors
///
/// [`AttackError::Io`] if the file cannot be read, [`AttackError::EmptyInput`]
/// if the first line is empty.
pub fn read_first_line(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|source| AttackError::io(path, source))?;
    let line = content.lines().next().unwrap_or_default();

    if line.is_empty() {
        return Err(AttackError::EmptyInput(path.display().to_string()));
    }
    Ok(line.to_string())
}

/// Everything the engine needs for one run, fully materialized.
#[derive(Debug, Clone)]
pub struct AttackInput {
    ciphertext: String,
    symbols: Vec<char>,
    alphabet: Alphabet,
    digest: String,
}

impl AttackInput {
    /// Uppercases `ciphertext` and `dictionary`, builds the alphabet from the
    /// dictionary and validates the digest.
    pub fn new(ciphertext: &str, dictionary: &str, digest: &str) -> Result<Self> {
        if ciphertext.is_empty() {
            return Err(AttackError::EmptyInput("ciphertext".to_string()));
        }

        let ciphertext = ciphertext.to_uppercase();
        let alphabet = Alphabet::new(&dictionary.to_uppercase())?;
        let digest = digest::parse_target(digest)?;

        Ok(Self {
            symbols: ciphertext.chars().collect(),
            ciphertext,
            alphabet,
            digest,
        })
    }

    /// Reads the first line of each file and builds the input from them.
    pub fn load(input: &Path, dictionary: &Path, hash: &Path) -> Result<Self> {
        let ciphertext = read_first_line(input)?;
        let dictionary = read_first_line(dictionary)?;
        let digest = read_first_line(hash)?;
        debug!(
            "Loaded {} ciphertext symbols and a {}-symbol alphabet from {}",
            ciphertext.chars().count(),
            dictionary.chars().count(),
            input.display()
        );

        Self::new(&ciphertext, &dictionary, &digest)
    }

    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    /// The ciphertext as symbols; positions here are the key-cycling positions.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }
}
