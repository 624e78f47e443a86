//! Key recovery for a candidate key length

use log::{debug, trace};

use crate::alphabet::Alphabet;
use crate::correlation::{self, CorrelationMethod};
use crate::error::{AttackError, Result};
use crate::frequency::FrequencyProfile;

/// Symbols at positions `position`, `position + key_length`, and so on. All of
/// them are enciphered with the same key symbol.
pub fn segment(
    text: &[char],
    key_length: usize,
    position: usize,
) -> impl Iterator<Item = char> + '_ {
    text.iter().skip(position).step_by(key_length).copied()
}

/// Recovers a key of `key_length` symbols.
///
/// The text is split into `key_length` interleaved segments by absolute
/// position. Each segment is profiled and correlated against `reference`; the
/// best shift, read as an alphabet index, is the key symbol for that position.
///
/// # Errors
///
/// * [`AttackError::DegenerateProfile`] if a segment has no alphabet symbols
/// * [`AttackError::IncompatibleProfile`] if `reference` does not match the alphabet
/// * [`AttackError::EmptyKey`] if `key_length` is zero
pub fn recover_key(
    text: &[char],
    reference: &[f64],
    alphabet: &Alphabet,
    key_length: usize,
    method: CorrelationMethod,
) -> Result<String> {
    if key_length == 0 {
        return Err(AttackError::EmptyKey);
    }

    let key = (0..key_length)
        .map(|position| {
            let profile = FrequencyProfile::from_symbols(
                segment(text, key_length, position),
                alphabet,
            )
            .inspect_err(|_| {
                debug!(
                    "Segment {} of {} has no alphabet symbols",
                    position, key_length
                )
            })?;

            let shift = correlation::best_shift(profile.frequencies(), reference, method)?;
            alphabet
                .symbol_at(shift)
                .ok_or(AttackError::IncompatibleProfile {
                    observed: alphabet.len(),
                    reference: reference.len(),
                })
        })
        .collect::<Result<String>>()?;

    trace!("Key for length {}: {}", key_length, key);
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::LATIN;
    use crate::cipher;
    use crate::factors;
    use crate::language::ENGLISH;

    const PLAINTEXT: &str = "MARKLIVESINASMALLTOWNSURROUNDEDBYFORESTSANDLAKESHEENJOYSHIKING\
        THROUGHTHEWOODSANDKAYAKINGONTHEWATEREVERYWEEKENDHISDOGBUDDYJOINSHIMONTHESEADVENTURES\
        THEYSPENDHOURSEXPLORINGTHENATURALTRAILSANDWATCHINGWILDLIFEITGIVESMARKASENSEOFPEACE\
        ANDCONNECTSHIMTONATUREBUDDYSEEMSTOLOVETHESETRIPSJUSTASMUCHASMARKDOESTOGETHERTHEY\
        HAVEMADECOUNTLESSMEMORIESINTHEGREATOUTDOORS";

    fn ciphertext(key: &str) -> Vec<char> {
        let alphabet = Alphabet::new(LATIN).unwrap();
        cipher::encrypt(PLAINTEXT, key, &alphabet)
            .unwrap()
            .chars()
            .collect()
    }

    #[test]
    fn test_segments_by_absolute_position() {
        let text: Vec<char> = "ABCDEFGH".chars().collect();
        assert_eq!(segment(&text, 3, 0).collect::<String>(), "ADG");
        assert_eq!(segment(&text, 3, 1).collect::<String>(), "BEH");
        assert_eq!(segment(&text, 3, 2).collect::<String>(), "CF");
    }

    #[test]
    fn test_recovers_key_at_true_length() {
        let alphabet = Alphabet::new(LATIN).unwrap();
        let text = ciphertext("SUNLIGHT");

        for method in [CorrelationMethod::Direct, CorrelationMethod::Spectral] {
            let key = recover_key(&text, ENGLISH.frequencies, &alphabet, 8, method).unwrap();
            assert_eq!(key, "SUNLIGHT");
        }
    }

    #[test]
    fn test_true_length_among_candidates() {
        let text = ciphertext("SUNLIGHT");
        let lengths = factors::find_key_lengths(&text, 1, 10).unwrap();
        assert!(lengths.contains(&8), "{:?}", lengths);
    }

    #[test]
    fn test_degenerate_segment() {
        let alphabet = Alphabet::new(LATIN).unwrap();
        let text: Vec<char> = "A A A ".chars().collect();

        assert!(matches!(
            recover_key(&text, ENGLISH.frequencies, &alphabet, 2, CorrelationMethod::Direct),
            Err(AttackError::DegenerateProfile)
        ));
    }

    #[test]
    fn test_reference_must_match_alphabet() {
        let alphabet = Alphabet::new("ABC").unwrap();
        let text: Vec<char> = "ABCABC".chars().collect();

        assert!(matches!(
            recover_key(&text, ENGLISH.frequencies, &alphabet, 1, CorrelationMethod::Direct),
            Err(AttackError::IncompatibleProfile { .. })
        ));
    }

    #[test]
    fn test_zero_length() {
        let alphabet = Alphabet::new(LATIN).unwrap();
        assert!(matches!(
            recover_key(&['A'], ENGLISH.frequencies, &alphabet, 0, CorrelationMethod::Direct),
            Err(AttackError::EmptyKey)
        ));
    }
}
