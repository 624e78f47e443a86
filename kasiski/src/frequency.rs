//! Normalized symbol frequencies over an alphabet

use crate::alphabet::Alphabet;
use crate::error::{AttackError, Result};

/// Relative frequency of each alphabet symbol in a text segment.
///
/// Entry `i` is the count of the symbol with index `i` divided by the number
/// of symbols that were actually in the alphabet.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyProfile {
    frequencies: Vec<f64>,
    observed: usize,
}

impl FrequencyProfile {
    /// Profiles `symbols`; anything outside `alphabet` is skipped.
    ///
    /// # Errors
    ///
    /// [`AttackError::DegenerateProfile`] when no symbol is in the alphabet.
    pub fn from_symbols<I>(symbols: I, alphabet: &Alphabet) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let mut counts = vec![0usize; alphabet.len()];
        let mut observed = 0usize;

        for symbol in symbols {
            if let Some(index) = alphabet.index_of(symbol) {
                counts[index] += 1;
                observed += 1;
            }
        }

        if observed == 0 {
            return Err(AttackError::DegenerateProfile);
        }

        let frequencies = counts
            .into_iter()
            .map(|count| count as f64 / observed as f64)
            .collect();

        Ok(Self {
            frequencies,
            observed,
        })
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Number of in-alphabet symbols the profile was built from.
    pub fn observed(&self) -> usize {
        self.observed
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Euclidean norm.
pub fn norm(values: &[f64]) -> f64 {
    dot(values, values).sqrt()
}
