//! Spacing factorization and key-length ranking

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::{debug, trace};

use crate::repeats::{self, RepeatedSequence};

/// Differences between consecutive offsets.
pub fn spacings(offsets: &[usize]) -> Vec<usize> {
    offsets.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// All divisors of `number` in ascending order. Zero has none.
pub fn divisors(number: usize) -> Vec<usize> {
    let mut small = Vec::new();
    let mut large = Vec::new();

    let mut candidate = 1;
    while candidate * candidate <= number {
        if number % candidate == 0 {
            small.push(candidate);
            if candidate != number / candidate {
                large.push(number / candidate);
            }
        }
        candidate += 1;
    }

    small.extend(large.into_iter().rev());
    small
}

/// Ranks candidate key lengths by how often they divide a repeat spacing.
///
/// Divisors of every spacing of every repeated sequence are counted; those
/// above `max_key_length` are dropped. The result is sorted by descending
/// count. The sort is stable over first-seen order, so among equal counts the
/// divisor counted first wins.
///
/// Returns `None` when there are no repeated sequences at all.
pub fn candidate_key_lengths(
    repeats: &[RepeatedSequence],
    max_key_length: usize,
) -> Option<Vec<usize>> {
    if repeats.is_empty() {
        return None;
    }

    let mut counts: Vec<(usize, usize)> = Vec::new();
    let mut slots: HashMap<usize, usize> = HashMap::new();

    let all_divisors = repeats
        .iter()
        .flat_map(|repeat| spacings(&repeat.offsets))
        .flat_map(divisors)
        .filter(|&divisor| divisor <= max_key_length);

    for divisor in all_divisors {
        match slots.entry(divisor) {
            Entry::Occupied(slot) => counts[*slot.get()].1 += 1,
            Entry::Vacant(slot) => {
                slot.insert(counts.len());
                counts.push((divisor, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    trace!("Factor counts: {:?}", counts);

    Some(counts.into_iter().map(|(divisor, _)| divisor).collect())
}

/// Kasiski examination for one scan window: repeated sequences of
/// `sequence_length` symbols, then ranked key lengths up to `max_key_length`.
pub fn find_key_lengths(
    text: &[char],
    sequence_length: usize,
    max_key_length: usize,
) -> Option<Vec<usize>> {
    let repeats = repeats::repeated_sequences(text, sequence_length);
    debug!(
        "{} repeated sequences of length {}",
        repeats.len(),
        sequence_length
    );
    candidate_key_lengths(&repeats, max_key_length)
}
