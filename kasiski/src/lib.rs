//! # Kasiski Attack Library
//!
//! Recovers the key of an additive polyalphabetic (Vigenère-style) cipher from
//! ciphertext alone, and confirms it against the SHA-256 digest of the
//! plaintext.
//!
//! ## Pipeline
//!
//! - **Repeats** - repeated substrings and their offsets (Kasiski examination)
//! - **Factors** - divisors of the spacings, ranked into candidate key lengths
//! - **Frequency** - normalized symbol histograms over the alphabet
//! - **Correlation** - best cyclic shift against a reference language profile
//! - **Key** - one shift per interleaved segment
//! - **Attack** - widens the scan window until a key reproduces the digest
//!
//! ## Usage
//!
//! ```rust
//! use kasiski::{Alphabet, decrypt, encrypt, sha256_hex};
//!
//! let alphabet = Alphabet::new(kasiski::alphabet::LATIN)?;
//! let ciphertext = encrypt("ATTACK AT DAWN", "KEY", &alphabet)?;
//! assert_eq!(ciphertext, "KXRKGI ER HYGR");
//!
//! let plaintext = decrypt(&ciphertext, "KEY", &alphabet)?;
//! assert_eq!(sha256_hex(&plaintext), sha256_hex("ATTACK AT DAWN"));
//! # Ok::<(), kasiski::AttackError>(())
//! ```
//!
//! Breaking a ciphertext:
//!
//! ```rust,no_run
//! use std::path::Path;
//! use kasiski::{AttackConfig, AttackInput, break_cipher};
//!
//! let input = AttackInput::load(
//!     Path::new("test/JdP_001_input"),
//!     Path::new("test/JdP_001_dictionary"),
//!     Path::new("test/JdP_001_hash"),
//! )?;
//! if let Some(key) = break_cipher(&input, &AttackConfig::default())?.key() {
//!     println!("Key: {key}.");
//! }
//! # Ok::<(), kasiski::AttackError>(())
//! ```

// Public modules
pub mod alphabet;
pub mod attack;
pub mod cipher;
pub mod correlation;
pub mod digest;
pub mod error;
pub mod factors;
pub mod fixtures;
pub mod frequency;
pub mod input;
pub mod key;
pub mod language;
pub mod repeats;

// Re-exports for easy access
pub use alphabet::Alphabet;
pub use attack::{
    break_cipher, Attack, AttackConfig, AttackOutcome, Recovery, NOT_FOUND_MESSAGE,
    PARTITION_LENGTH,
};
pub use cipher::{decrypt, encrypt};
pub use correlation::CorrelationMethod;
pub use digest::sha256_hex;
pub use error::{AttackError, Result};
pub use input::AttackInput;
pub use language::LanguageProfile;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
