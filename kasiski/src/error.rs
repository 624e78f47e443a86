//! Error types for the attack engine

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AttackError {
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input '{0}' is empty")]
    EmptyInput(String),

    #[error("Alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("Alphabet contains duplicate symbol '{0}'")]
    DuplicateSymbol(char),

    #[error("Invalid target digest '{0}' (expected 64 hex digits)")]
    InvalidDigest(String),

    #[error("No reference profile matches an alphabet of {0} symbols")]
    NoCompatibleProfile(usize),

    #[error("Profile lengths differ (observed {observed}, reference {reference})")]
    IncompatibleProfile { observed: usize, reference: usize },

    #[error("Frequency profile has no alphabet symbols")]
    DegenerateProfile,

    #[error("Key cannot be empty")]
    EmptyKey,

    #[error("Key symbol '{0}' is not in the alphabet")]
    UnknownKeySymbol(char),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Fixture '{stem}' is missing its {part} file")]
    MissingFixture { stem: String, part: &'static str },

    #[error("Fixture counts differ: {inputs} inputs, {dictionaries} dictionaries, {hashes} hashes")]
    UnmatchedFixtures {
        inputs: usize,
        dictionaries: usize,
        hashes: usize,
    },
}

impl AttackError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AttackError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AttackError>;
