//! Random key generation.
//!
//! Every generator takes the random source as a parameter. The CLI passes
//! `rand::thread_rng()`; tests pass a seeded `StdRng`.

use crate::alphabet::{letter_at, ALPHABET_LEN};
use crate::cipher::MonoMapping;
use crate::error::{CipherError, Result};
use crate::matrix::{KeyMatrix, MAX_MATRIX_SIZE};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

/// Attempts made by [`generate_invertible_matrix`] before giving up
pub const MAX_KEYGEN_ATTEMPTS: usize = 2000;

/// Uniformly random permutation of A-Z
pub fn random_monoalphabetic<R: Rng + ?Sized>(rng: &mut R) -> MonoMapping {
    let mut table: [char; 26] = std::array::from_fn(|i| letter_at(i as i64));
    table.shuffle(rng);
    MonoMapping::from_permutation(table)
}

/// Random N×N matrix whose determinant is invertible mod 26
pub fn generate_invertible_matrix<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<KeyMatrix> {
    generate_invertible_matrix_with_attempts(size, MAX_KEYGEN_ATTEMPTS, rng)
}

/// Same as [`generate_invertible_matrix`] with an explicit attempt budget
pub fn generate_invertible_matrix_with_attempts<R: Rng + ?Sized>(
    size: usize,
    attempts: usize,
    rng: &mut R,
) -> Result<KeyMatrix> {
    if size == 0 || size > MAX_MATRIX_SIZE {
        return Err(CipherError::UnsupportedMatrixSize(size));
    }

    for attempt in 1..=attempts {
        let rows: Vec<Vec<i64>> = (0..size)
            .map(|_| (0..size).map(|_| rng.gen_range(0..ALPHABET_LEN)).collect())
            .collect();
        let matrix = KeyMatrix::new(rows)?;
        if matrix.is_invertible() {
            debug!(size, attempt, "found invertible hill key");
            return Ok(matrix);
        }
    }

    warn!(size, attempts, "no invertible hill key found");
    Err(CipherError::KeyGenerationFailed { size, attempts })
}
