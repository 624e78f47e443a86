//! Bidirectional symbol/index mapping for an ordered cipher alphabet

use std::collections::HashMap;
use std::fmt;

use crate::error::{AttackError, Result};

/// The 26-letter Latin alphabet.
pub const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The 27-letter Spanish alphabet, `Ñ` between `N` and `O`.
pub const SPANISH: &str = "ABCDEFGHIJKLMNÑOPQRSTUVWXYZ";

/// An ordered set of distinct symbols. The symbol at position `i` has index `i`.
///
/// Built once from the dictionary input and read-only afterwards; every
/// component that needs the mapping borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    indices: HashMap<char, usize>,
}

impl Alphabet {
    /// Builds the mapping from the symbols of `symbols`, in order.
    ///
    /// # Errors
    ///
    /// * [`AttackError::EmptyAlphabet`] if `symbols` is empty
    /// * [`AttackError::DuplicateSymbol`] if a symbol appears twice
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            return Err(AttackError::EmptyAlphabet);
        }

        let mut indices = HashMap::with_capacity(symbols.len());
        for (index, &symbol) in symbols.iter().enumerate() {
            if indices.insert(symbol, index).is_some() {
                return Err(AttackError::DuplicateSymbol(symbol));
            }
        }

        Ok(Self { symbols, indices })
    }

    /// Number of symbols (`d` in the shift arithmetic).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.indices.get(&symbol).copied()
    }

    pub fn symbol_at(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.indices.contains_key(&symbol)
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|symbol| write!(f, "{symbol}"))
    }
}
