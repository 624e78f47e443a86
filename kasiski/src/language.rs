//! Reference letter frequencies and language identification

use log::{debug, warn};

use crate::alphabet::Alphabet;
use crate::error::{AttackError, Result};
use crate::frequency::{self, FrequencyProfile};

/// Symbol whose presence in the alphabet or the ciphertext forces [`SPANISH`].
pub const MARKER_SYMBOL: char = 'Ñ';

/// A named vector of relative symbol frequencies, indexed by alphabet position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanguageProfile {
    pub name: &'static str,
    pub frequencies: &'static [f64],
}

impl LanguageProfile {
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// A profile only applies to alphabets of the same size.
    pub fn is_compatible(&self, alphabet: &Alphabet) -> bool {
        self.len() == alphabet.len()
    }
}

const ENGLISH_FREQUENCIES: [f64; 26] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094, 0.06966,
    0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, 0.00095, 0.05987,
    0.06327, 0.09056, 0.02758, 0.00978, 0.02361, 0.00150, 0.01974, 0.00074,
];

const FRENCH_FREQUENCIES: [f64; 26] = [
    0.07636, 0.00901, 0.03260, 0.03369, 0.14715, 0.01066, 0.00866, 0.00737, 0.07529,
    0.00613, 0.00074, 0.05456, 0.02968, 0.07095, 0.05796, 0.02521, 0.01362, 0.06693,
    0.07948, 0.07244, 0.06311, 0.01838, 0.00049, 0.00427, 0.00128, 0.00326,
];

/// A–N, Ñ, O–Z.
const SPANISH_FREQUENCIES: [f64; 27] = [
    0.11525, 0.02215, 0.04019, 0.05010, 0.12181, 0.00692, 0.01768, 0.00703, 0.06247,
    0.00493, 0.00011, 0.04967, 0.03157, 0.06712, 0.08683, 0.02510, 0.00877, 0.06871,
    0.07977, 0.04632, 0.02927, 0.01138, 0.00017, 0.00215, 0.01008, 0.00467, 0.00125,
];

pub const ENGLISH: LanguageProfile = LanguageProfile {
    name: "ENG",
    frequencies: &ENGLISH_FREQUENCIES,
};

pub const FRENCH: LanguageProfile = LanguageProfile {
    name: "FRN",
    frequencies: &FRENCH_FREQUENCIES,
};

pub const SPANISH: LanguageProfile = LanguageProfile {
    name: "SPN",
    frequencies: &SPANISH_FREQUENCIES,
};

/// Profiles compared by similarity. Spanish is only reached via [`MARKER_SYMBOL`].
pub const CANDIDATES: [LanguageProfile; 2] = [ENGLISH, FRENCH];

/// Cosine of the angle between two vectors; `None` if either has zero norm.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Option<f64> {
    let magnitude = frequency::norm(a) * frequency::norm(b);
    if magnitude == 0.0 {
        return None;
    }
    Some(frequency::dot(a, b) / magnitude)
}

/// Picks the compatible profile most similar to the frequencies of `sample`.
///
/// Only profiles whose length matches the alphabet are considered; the first
/// one wins ties. When the sample has no alphabet symbols, or nothing scores
/// above zero, the first compatible profile is returned.
///
/// # Errors
///
/// [`AttackError::NoCompatibleProfile`] if no profile matches the alphabet size.
pub fn identify(
    sample: &[char],
    alphabet: &Alphabet,
    profiles: &[LanguageProfile],
) -> Result<LanguageProfile> {
    let compatible: Vec<&LanguageProfile> = profiles
        .iter()
        .filter(|profile| profile.is_compatible(alphabet))
        .collect();

    let fallback = **compatible
        .first()
        .ok_or(AttackError::NoCompatibleProfile(alphabet.len()))?;

    let observed = match FrequencyProfile::from_symbols(sample.iter().copied(), alphabet) {
        Ok(observed) => observed,
        Err(_) => {
            warn!(
                "Sample has no alphabet symbols, defaulting to {}",
                fallback.name
            );
            return Ok(fallback);
        }
    };

    let mut best: Option<(LanguageProfile, f64)> = None;
    for profile in compatible {
        let Some(similarity) = cosine_similarity(observed.frequencies(), profile.frequencies)
        else {
            continue;
        };
        debug!("Similarity to {}: {:.5}", profile.name, similarity);

        let best_similarity = best.map_or(0.0, |(_, s)| s);
        if similarity > best_similarity {
            best = Some((*profile, similarity));
        }
    }

    Ok(best.map_or_else(
        || {
            warn!("No profile is similar to the sample, defaulting to {}", fallback.name);
            fallback
        },
        |(profile, _)| profile,
    ))
}

/// Chooses the reference profile for an attack.
///
/// If the alphabet or the ciphertext contains [`MARKER_SYMBOL`], [`SPANISH`]
/// is forced without comparing similarities. Otherwise the ciphertext is
/// matched against [`CANDIDATES`].
pub fn select_profile(ciphertext: &[char], alphabet: &Alphabet) -> Result<LanguageProfile> {
    if alphabet.contains(MARKER_SYMBOL) || ciphertext.contains(&MARKER_SYMBOL) {
        debug!("Marker symbol '{}' present, forcing {}", MARKER_SYMBOL, SPANISH.name);
        if !SPANISH.is_compatible(alphabet) {
            return Err(AttackError::NoCompatibleProfile(alphabet.len()));
        }
        return Ok(SPANISH);
    }

    identify(ciphertext, alphabet, &CANDIDATES)
}
