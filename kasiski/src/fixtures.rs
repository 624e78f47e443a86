//! Numbered fixture triples on disk
//!
//! A fixture is three single-line files sharing a stem:
//! `<stem>_input` (ciphertext), `<stem>_dictionary` (alphabet) and
//! `<stem>_hash` (SHA-256 of the plaintext). Stems look like `JdP_007`.

use std::collections::BTreeSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{AttackError, Result};
use crate::input::AttackInput;

pub const INPUT_SUFFIX: &str = "_input";
pub const DICTIONARY_SUFFIX: &str = "_dictionary";
pub const HASH_SUFFIX: &str = "_hash";
pub const DEFAULT_PREFIX: &str = "JdP";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub stem: String,
    pub input: PathBuf,
    pub dictionary: PathBuf,
    pub hash: PathBuf,
}

impl Fixture {
    pub fn new(dir: &Path, stem: &str) -> Self {
        Self {
            stem: stem.to_string(),
            input: dir.join(format!("{stem}{INPUT_SUFFIX}")),
            dictionary: dir.join(format!("{stem}{DICTIONARY_SUFFIX}")),
            hash: dir.join(format!("{stem}{HASH_SUFFIX}")),
        }
    }

    pub fn load(&self) -> Result<AttackInput> {
        AttackInput::load(&self.input, &self.dictionary, &self.hash)
    }
}

fn file_names(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|source| AttackError::io(dir, source))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| AttackError::io(dir, source))?;
        let is_file = entry
            .file_type()
            .map_err(|source| AttackError::io(entry.path(), source))?
            .is_file();
        if is_file {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}

fn stems(names: &[String], suffix: &str) -> BTreeSet<String> {
    names
        .iter()
        .filter_map(|name| name.strip_suffix(suffix))
        .map(str::to_string)
        .collect()
}

/// Next free fixture number for `prefix`: one more than the highest `NNN`
/// among the `<prefix>_NNN_input` files present. Gaps are not reused.
pub fn next_fixture_number(dir: &Path, prefix: &str) -> Result<usize> {
    let names = file_names(dir)?;
    let highest = stems(&names, INPUT_SUFFIX)
        .iter()
        .filter_map(|stem| stem.strip_prefix(prefix)?.strip_prefix('_'))
        .filter(|number| !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|number| number.parse::<usize>().ok())
        .max()
        .unwrap_or(0);
    Ok(highest + 1)
}

/// Creates `path` with `content`; an existing file is an error, never overwritten.
fn create_file(path: &Path, content: &str) -> Result<()> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .and_then(|mut file| file.write_all(content.as_bytes()))
        .map_err(|source| AttackError::io(path, source))
}

/// Writes a new numbered fixture triple into `dir`, creating it if needed.
pub fn write_fixture(
    dir: &Path,
    prefix: &str,
    ciphertext: &str,
    dictionary: &str,
    digest: &str,
) -> Result<Fixture> {
    fs::create_dir_all(dir).map_err(|source| AttackError::io(dir, source))?;

    let number = next_fixture_number(dir, prefix)?;
    let fixture = Fixture::new(dir, &format!("{prefix}_{number:03}"));

    for (path, content) in [
        (&fixture.input, ciphertext),
        (&fixture.dictionary, dictionary),
        (&fixture.hash, digest),
    ] {
        create_file(path, content)?;
    }

    info!("Wrote fixture {} to {}", fixture.stem, dir.display());
    Ok(fixture)
}

/// Finds every complete fixture triple in `dir`, sorted by stem.
///
/// # Errors
///
/// * [`AttackError::UnmatchedFixtures`] if the three kinds of file differ in number
/// * [`AttackError::MissingFixture`] if an input has no matching dictionary or hash
pub fn discover(dir: &Path) -> Result<Vec<Fixture>> {
    let names = file_names(dir)?;
    let inputs = stems(&names, INPUT_SUFFIX);
    let dictionaries = stems(&names, DICTIONARY_SUFFIX);
    let hashes = stems(&names, HASH_SUFFIX);

    if inputs.len() != dictionaries.len() || inputs.len() != hashes.len() {
        return Err(AttackError::UnmatchedFixtures {
            inputs: inputs.len(),
            dictionaries: dictionaries.len(),
            hashes: hashes.len(),
        });
    }

    let mut fixtures = Vec::with_capacity(inputs.len());
    for stem in &inputs {
        if !dictionaries.contains(stem) {
            return Err(AttackError::MissingFixture {
                stem: stem.clone(),
                part: "dictionary",
            });
        }
        if !hashes.contains(stem) {
            return Err(AttackError::MissingFixture {
                stem: stem.clone(),
                part: "hash",
            });
        }
        fixtures.push(Fixture::new(dir, stem));
    }

    debug!("Discovered {} fixtures in {}", fixtures.len(), dir.display());
    Ok(fixtures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::LATIN;
    use crate::digest::sha256_hex;
    use tempfile::TempDir;

    #[test]
    fn test_write_numbers_fixtures() {
        let dir = TempDir::new().unwrap();
        let digest = sha256_hex("HELLO");

        let first = write_fixture(dir.path(), DEFAULT_PREFIX, "RIJVS", LATIN, &digest).unwrap();
        let second = write_fixture(dir.path(), DEFAULT_PREFIX, "RIJVS", LATIN, &digest).unwrap();

        assert_eq!(first.stem, "JdP_001");
        assert_eq!(second.stem, "JdP_002");
        assert_eq!(fs::read_to_string(&first.dictionary).unwrap(), LATIN);
        assert_eq!(fs::read_to_string(&first.hash).unwrap(), digest);
    }

    #[test]
    fn test_numbering_skips_deleted_fixtures() {
        let dir = TempDir::new().unwrap();
        let digest = sha256_hex("HELLO");
        for text in ["ONE", "TWO", "THREE"] {
            write_fixture(dir.path(), DEFAULT_PREFIX, text, LATIN, &digest).unwrap();
        }
        let removed = Fixture::new(dir.path(), "JdP_002");
        for path in [&removed.input, &removed.dictionary, &removed.hash] {
            fs::remove_file(path).unwrap();
        }

        let fourth = write_fixture(dir.path(), DEFAULT_PREFIX, "FOUR", LATIN, &digest).unwrap();

        assert_eq!(fourth.stem, "JdP_004");
        let third = Fixture::new(dir.path(), "JdP_003");
        assert_eq!(fs::read_to_string(&third.input).unwrap(), "THREE");
        assert_eq!(fs::read_to_string(&fourth.input).unwrap(), "FOUR");
    }

    #[test]
    fn test_numbering_per_prefix() {
        let dir = TempDir::new().unwrap();
        let digest = sha256_hex("HELLO");
        write_fixture(dir.path(), "A", "X", LATIN, &digest).unwrap();
        write_fixture(dir.path(), "A", "X", LATIN, &digest).unwrap();
        fs::write(dir.path().join("A_notes_input"), "X").unwrap();

        assert_eq!(next_fixture_number(dir.path(), "A").unwrap(), 3);
        assert_eq!(next_fixture_number(dir.path(), "B").unwrap(), 1);
        let other = write_fixture(dir.path(), "B", "X", LATIN, &digest).unwrap();
        assert_eq!(other.stem, "B_001");
    }

    #[test]
    fn test_existing_file_is_not_overwritten() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("JdP_001_hash"), "KEEP").unwrap();

        let result = write_fixture(dir.path(), DEFAULT_PREFIX, "X", LATIN, &sha256_hex("X"));

        assert!(matches!(result, Err(AttackError::Io { .. })));
        assert_eq!(fs::read_to_string(dir.path().join("JdP_001_hash")).unwrap(), "KEEP");
    }

    #[test]
    fn test_discover_sorted_triples() {
        let dir = TempDir::new().unwrap();
        let digest = sha256_hex("HELLO");
        for _ in 0..3 {
            write_fixture(dir.path(), "T", "RIJVS", LATIN, &digest).unwrap();
        }
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let fixtures = discover(dir.path()).unwrap();
        let stems: Vec<&str> = fixtures.iter().map(|f| f.stem.as_str()).collect();
        assert_eq!(stems, vec!["T_001", "T_002", "T_003"]);

        let input = fixtures[0].load().unwrap();
        assert_eq!(input.ciphertext(), "RIJVS");
    }

    #[test]
    fn test_discover_counts_differ() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("A_001_input"), "X").unwrap();
        fs::write(dir.path().join("A_001_dictionary"), "X").unwrap();

        assert!(matches!(
            discover(dir.path()),
            Err(AttackError::UnmatchedFixtures {
                inputs: 1,
                dictionaries: 1,
                hashes: 0
            })
        ));
    }

    #[test]
    fn test_discover_mismatched_stems() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("A_001_input"), "X").unwrap();
        fs::write(dir.path().join("A_001_dictionary"), "X").unwrap();
        fs::write(dir.path().join("B_001_hash"), "X").unwrap();

        assert!(matches!(
            discover(dir.path()),
            Err(AttackError::MissingFixture { part: "hash", .. })
        ));
    }

    #[test]
    fn test_discover_missing_dir() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            discover(&dir.path().join("absent")),
            Err(AttackError::Io { .. })
        ));
    }
}
