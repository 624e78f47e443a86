//! The decrypt/verify search loop
//!
//! The loop scans the ciphertext for repeated sequences, starting with short
//! windows, and widens the window and the largest admissible key length by
//! [`AttackConfig::partition_length`] after every pass. Each pass tries the
//! ranked key lengths in order: recover a key, decrypt, and compare the digest
//! of the plaintext against the target.
//!
//! A key that was already tried in an earlier pass ends the current pass
//! instead of only being skipped; the remaining lengths of that pass are
//! abandoned and the window widens.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::cipher;
use crate::correlation::CorrelationMethod;
use crate::digest;
use crate::error::{AttackError, Result};
use crate::factors;
use crate::input::AttackInput;
use crate::key;
use crate::language::{self, LanguageProfile};

/// Default window growth per pass.
pub const PARTITION_LENGTH: usize = 10;

/// Printed when the loop ends without a digest match.
pub const NOT_FOUND_MESSAGE: &str = "Key cannot be found or key is equal to text.";

/// Tuning for the search loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackConfig {
    /// Added to the sequence length and the maximum key length after every pass.
    pub partition_length: usize,
    /// Repeated-sequence length of the first pass. Defaults to 1, so the
    /// windows run 1, 1 + W, 1 + 2W, ...; set it to `partition_length` to
    /// start at W instead.
    pub initial_sequence_length: usize,
    /// Largest key length considered in the first pass.
    pub initial_max_key_length: usize,
    pub correlation: CorrelationMethod,
    /// Checked before each candidate; `None` runs until the text is exhausted.
    pub time_limit: Option<Duration>,
}

impl Default for AttackConfig {
    fn default() -> Self {
        Self {
            partition_length: PARTITION_LENGTH,
            initial_sequence_length: 1,
            initial_max_key_length: PARTITION_LENGTH,
            correlation: CorrelationMethod::Direct,
            time_limit: None,
        }
    }
}

impl AttackConfig {
    /// Sets the window growth and the first pass's maximum key length.
    pub fn with_partition_length(mut self, partition_length: usize) -> Self {
        self.partition_length = partition_length;
        self.initial_max_key_length = partition_length;
        self
    }

    pub fn with_initial_sequence_length(mut self, sequence_length: usize) -> Self {
        self.initial_sequence_length = sequence_length;
        self
    }

    pub fn with_correlation(mut self, correlation: CorrelationMethod) -> Self {
        self.correlation = correlation;
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.partition_length == 0 {
            return Err(AttackError::InvalidConfig(
                "partition length must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// A key whose decryption reproduced the target digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovery {
    pub key: String,
    pub key_length: usize,
    /// Name of the reference profile used for correlation.
    pub language: &'static str,
    /// Repeated-sequence length of the pass that produced the key.
    pub sequence_length: usize,
    /// Keys verified, including the accepted one.
    pub attempts: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackOutcome {
    Found(Recovery),
    NotFound { attempts: usize },
    TimedOut { attempts: usize },
}

impl AttackOutcome {
    pub fn key(&self) -> Option<&str> {
        match self {
            AttackOutcome::Found(recovery) => Some(&recovery.key),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, AttackOutcome::Found(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Pass {
    Accepted(Recovery),
    Exhausted,
    RepeatedKey,
    TimedOut,
}

/// State of one run: the chosen reference profile and the keys tried so far.
pub struct Attack<'a> {
    input: &'a AttackInput,
    config: &'a AttackConfig,
    profile: LanguageProfile,
    tried: HashSet<String>,
    attempts: usize,
    started: Instant,
}

impl<'a> Attack<'a> {
    /// Validates the configuration and selects the reference profile.
    pub fn new(input: &'a AttackInput, config: &'a AttackConfig) -> Result<Self> {
        config.validate()?;
        let profile = language::select_profile(input.symbols(), input.alphabet())?;
        info!(
            "Using {} frequencies for a {}-symbol alphabet",
            profile.name,
            input.alphabet().len()
        );

        Ok(Self {
            input,
            config,
            profile,
            tried: HashSet::new(),
            attempts: 0,
            started: Instant::now(),
        })
    }

    pub fn profile(&self) -> LanguageProfile {
        self.profile
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Runs passes until a key verifies, the window outgrows the text, or the
    /// time limit is reached.
    pub fn run(mut self) -> AttackOutcome {
        let input = self.input;
        let text = input.symbols();
        let mut sequence_length = self.config.initial_sequence_length;
        let mut max_key_length = self.config.initial_max_key_length;

        while sequence_length <= text.len() {
            if self.deadline_passed() {
                return AttackOutcome::TimedOut {
                    attempts: self.attempts,
                };
            }

            match factors::find_key_lengths(text, sequence_length, max_key_length) {
                None => debug!(
                    "No repeated sequences of length {}, widening the window",
                    sequence_length
                ),
                Some(key_lengths) => {
                    debug!(
                        "Sequence length {}: candidate key lengths {:?}",
                        sequence_length, key_lengths
                    );
                    match self.run_pass(sequence_length, &key_lengths) {
                        Pass::Accepted(recovery) => return AttackOutcome::Found(recovery),
                        Pass::TimedOut => {
                            return AttackOutcome::TimedOut {
                                attempts: self.attempts,
                            }
                        }
                        Pass::Exhausted | Pass::RepeatedKey => {}
                    }
                }
            }

            let widened = sequence_length
                .checked_add(self.config.partition_length)
                .zip(max_key_length.checked_add(self.config.partition_length));
            match widened {
                Some((next_sequence, next_max)) => {
                    sequence_length = next_sequence;
                    max_key_length = next_max;
                }
                None => {
                    debug!("Window cannot widen past {}, stopping", sequence_length);
                    break;
                }
            }
        }

        info!("No key found after {} attempts", self.attempts);
        AttackOutcome::NotFound {
            attempts: self.attempts,
        }
    }

    fn run_pass(&mut self, sequence_length: usize, key_lengths: &[usize]) -> Pass {
        for &key_length in key_lengths {
            if self.deadline_passed() {
                return Pass::TimedOut;
            }

            let key = match key::recover_key(
                self.input.symbols(),
                self.profile.frequencies,
                self.input.alphabet(),
                key_length,
                self.config.correlation,
            ) {
                Ok(key) => key,
                Err(e) => {
                    debug!("Skipping key length {}: {}", key_length, e);
                    continue;
                }
            };

            if self.tried.contains(&key) {
                debug!("Key {} already tried, ending this pass", key);
                return Pass::RepeatedKey;
            }

            self.attempts += 1;
            if self.verify(&key) {
                info!("Key {} verified after {} attempts", key, self.attempts);
                return Pass::Accepted(Recovery {
                    key,
                    key_length,
                    language: self.profile.name,
                    sequence_length,
                    attempts: self.attempts,
                });
            }

            debug!("Digest mismatch for key {} (length {})", key, key_length);
            self.tried.insert(key);
        }

        Pass::Exhausted
    }

    fn verify(&self, key: &str) -> bool {
        match cipher::decrypt(self.input.ciphertext(), key, self.input.alphabet()) {
            Ok(plaintext) => digest::matches(&plaintext, self.input.digest()),
            Err(e) => {
                warn!("Cannot decrypt with key {}: {}", key, e);
                false
            }
        }
    }

    fn deadline_passed(&self) -> bool {
        self.config
            .time_limit
            .is_some_and(|limit| self.started.elapsed() >= limit)
    }
}

/// Runs the whole attack on `input`.
///
/// # Errors
///
/// Only configuration problems are errors; not finding the key is
/// [`AttackOutcome::NotFound`].
pub fn break_cipher(input: &AttackInput, config: &AttackConfig) -> Result<AttackOutcome> {
    Ok(Attack::new(input, config)?.run())
}
