use std::num::NonZeroUsize;

use crate::error::TableError;

/// How a key's string form is turned into an integer before reduction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyClass {
    // Every char alphabetic: sum of code points
    Alphabetic,
    // Every char an ASCII digit: the decimal value
    Numeric,
    // Anything else, including the empty key: sum of code points
    Mixed,
}

pub fn classify(key: &str) -> KeyClass {
    if key.is_empty() {
        KeyClass::Mixed
    } else if key.chars().all(char::is_alphabetic) {
        KeyClass::Alphabetic
    } else if key.bytes().all(|b| b.is_ascii_digit()) {
        KeyClass::Numeric
    } else {
        KeyClass::Mixed
    }
}

/// Maps `key` to a bucket slot in `[0, capacity)`.
pub fn index(key: &str, capacity: usize) -> Result<usize, TableError> {
    let capacity = NonZeroUsize::new(capacity).ok_or(TableError::InvalidCapacity)?;
    Ok(slot_for(key, capacity))
}

pub(crate) fn slot_for(key: &str, capacity: NonZeroUsize) -> usize {
    let n = capacity.get() as u128;
    let reduced = match classify(key) {
        // Reducing per digit keeps long numeric keys exact without overflow.
        KeyClass::Numeric => key
            .bytes()
            .fold(0u128, |acc, b| (acc * 10 + (b - b'0') as u128) % n),
        KeyClass::Alphabetic | KeyClass::Mixed => {
            key.chars().fold(0u128, |acc, c| (acc + c as u128) % n)
        }
    };
    reduced as usize
}
