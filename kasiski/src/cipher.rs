//! Additive polyalphabetic substitution over an arbitrary alphabet

use crate::alphabet::Alphabet;
use crate::error::{AttackError, Result};

/// Encrypts `text` with `key`.
///
/// Each in-alphabet symbol at position `i` is shifted forward by the index of
/// `key[i mod k]`. Symbols outside the alphabet are copied unchanged but still
/// occupy a position, so the key cycles over absolute positions.
///
/// # Errors
///
/// * [`AttackError::EmptyKey`] if `key` is empty
/// * [`AttackError::UnknownKeySymbol`] if `key` has a symbol outside the alphabet
pub fn encrypt(text: &str, key: &str, alphabet: &Alphabet) -> Result<String> {
    apply(text, key, alphabet, Direction::Encrypt)
}

/// Reverses [`encrypt`]: shifts each in-alphabet symbol back by the key index.
pub fn decrypt(text: &str, key: &str, alphabet: &Alphabet) -> Result<String> {
    apply(text, key, alphabet, Direction::Decrypt)
}

/// Uppercases `text` and drops every symbol outside the alphabet.
pub fn strip_to_alphabet(text: &str, alphabet: &Alphabet) -> String {
    text.to_uppercase()
        .chars()
        .filter(|&symbol| alphabet.contains(symbol))
        .collect()
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn key_indices(key: &str, alphabet: &Alphabet) -> Result<Vec<usize>> {
    if key.is_empty() {
        return Err(AttackError::EmptyKey);
    }

    key.chars()
        .map(|symbol| {
            alphabet
                .index_of(symbol)
                .ok_or(AttackError::UnknownKeySymbol(symbol))
        })
        .collect()
}

fn apply(text: &str, key: &str, alphabet: &Alphabet, direction: Direction) -> Result<String> {
    let shifts = key_indices(key, alphabet)?;
    let d = alphabet.len();

    let result = text
        .chars()
        .enumerate()
        .map(|(position, symbol)| {
            let Some(index) = alphabet.index_of(symbol) else {
                return symbol;
            };
            let shift = shifts[position % shifts.len()];
            let shifted = match direction {
                Direction::Encrypt => (index + shift) % d,
                Direction::Decrypt => (index + d - shift) % d,
            };
            alphabet.symbol_at(shifted).unwrap_or(symbol)
        })
        .collect();

    Ok(result)
}
