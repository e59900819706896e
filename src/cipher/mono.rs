use crate::alphabet::{index_of, is_letter, letter_at, ALPHABET_LEN};
use crate::error::{CipherError, Result};
use crate::preserve::transform_per_letter;

/// A validated substitution alphabet: `table[i]` replaces letter `i`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoMapping {
    table: [char; 26],
}

impl MonoMapping {
    /// Parse a 26-letter permutation of A-Z (case-insensitive). Whitespace
    /// counts toward the length and is rejected.
    pub fn parse(mapping: &str) -> Result<Self> {
        let upper: Vec<char> = mapping.chars().map(|c| c.to_ascii_uppercase()).collect();
        if upper.len() != ALPHABET_LEN as usize {
            return Err(CipherError::InvalidKey(format!(
                "monoalphabetic map must have 26 letters, got {}",
                upper.len()
            )));
        }

        let mut table = ['A'; 26];
        let mut seen = [false; 26];
        for (i, &c) in upper.iter().enumerate() {
            if !is_letter(c) {
                return Err(CipherError::InvalidKey(format!(
                    "monoalphabetic map contains non-letter {:?}",
                    c
                )));
            }
            let idx = index_of(c) as usize;
            if seen[idx] {
                return Err(CipherError::InvalidKey(format!(
                    "monoalphabetic map repeats letter {}",
                    c
                )));
            }
            seen[idx] = true;
            table[i] = c;
        }
        Ok(Self { table })
    }

    /// Wrap a table already known to be a permutation of A-Z
    pub(crate) fn from_permutation(table: [char; 26]) -> Self {
        Self { table }
    }

    pub fn substitute(&self, upper: char) -> char {
        self.table[index_of(upper) as usize]
    }

    /// The mapping that undoes this one
    pub fn inverse(&self) -> Self {
        let mut table = ['A'; 26];
        for (i, &c) in self.table.iter().enumerate() {
            table[index_of(c) as usize] = letter_at(i as i64);
        }
        Self { table }
    }

    pub fn as_string(&self) -> String {
        self.table.iter().collect()
    }
}

/// Monoalphabetic substitution with a validated mapping
pub fn mono_encrypt(text: &str, mapping: &MonoMapping) -> String {
    transform_per_letter(text, |upper, _| mapping.substitute(upper))
}
