//! Repeated-sequence scan (the Kasiski step)

use std::collections::HashMap;

/// A substring that occurs more than once, with its ascending start offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatedSequence {
    pub sequence: String,
    pub offsets: Vec<usize>,
}

/// Finds every substring of `length` symbols that occurs more than once.
///
/// Results are ordered by the first occurrence of each substring, which keeps
/// the factor ranking downstream deterministic. Returns an empty vector when
/// `length` is zero or longer than the text.
pub fn repeated_sequences(text: &[char], length: usize) -> Vec<RepeatedSequence> {
    if length == 0 || length > text.len() {
        return Vec::new();
    }

    let mut first_seen: Vec<&[char]> = Vec::new();
    let mut positions: HashMap<&[char], Vec<usize>> = HashMap::new();

    for (offset, window) in text.windows(length).enumerate() {
        positions
            .entry(window)
            .or_insert_with(|| {
                first_seen.push(window);
                Vec::new()
            })
            .push(offset);
    }

    first_seen
        .into_iter()
        .filter_map(|window| {
            let offsets = positions.remove(&window)?;
            (offsets.len() > 1).then(|| RepeatedSequence {
                sequence: window.iter().collect(),
                offsets,
            })
        })
        .collect()
}
