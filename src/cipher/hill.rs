use crate::alphabet::{index_of, letter_at, FILLER};
use crate::matrix::KeyMatrix;
use crate::preserve::SequenceCipher;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One block of the Hill computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HillStep {
    /// Plaintext letters of the block (after padding)
    pub block: String,
    /// Cipher letters of the block
    pub result: String,
    /// Raw product vector, already reduced mod 26
    pub numeric: Vec<i64>,
}

/// Letters-only Hill output
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HillOutput {
    pub cipher: String,
    pub steps: Vec<HillStep>,
}

impl SequenceCipher for HillOutput {
    fn cipher_letters(&self) -> &str {
        &self.cipher
    }
}

/// Right-pad `letters` with `X` to a multiple of `n`
pub fn pad_to_block(letters: &str, n: usize) -> String {
    let len = letters.chars().count();
    let pad = (n - len % n) % n;
    let mut padded = String::with_capacity(len + pad);
    padded.push_str(letters);
    padded.extend(std::iter::repeat(FILLER).take(pad));
    padded
}

/// Encrypt an uppercase letter stream with the Hill cipher
pub fn hill_encrypt_letters(letters: &str, key: &KeyMatrix) -> HillOutput {
    if letters.is_empty() {
        return HillOutput::default();
    }

    let n = key.size();
    let padded: Vec<i64> = pad_to_block(&letters.to_ascii_uppercase(), n)
        .chars()
        .map(index_of)
        .collect();

    let mut cipher = String::with_capacity(padded.len());
    let mut steps = Vec::with_capacity(padded.len() / n);
    for block in padded.chunks(n) {
        let numeric = key.multiply_vector(block);
        let result: String = numeric.iter().map(|v| letter_at(*v)).collect();
        cipher.push_str(&result);
        steps.push(HillStep {
            block: block.iter().map(|v| letter_at(*v)).collect(),
            result,
            numeric,
        });
    }

    debug!(blocks = steps.len(), block_size = n, "hill blocks encrypted");
    HillOutput { cipher, steps }
}
