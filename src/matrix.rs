//! Square key matrices over Z/26 for the Hill cipher.
//!
//! Keys arrive as text (`[[3,3],[2,5]]`) and are parsed strictly as a JSON
//! array of integer rows. Nothing supplied by the caller is ever evaluated.

use crate::alphabet::ALPHABET_LEN;
use crate::error::{CipherError, Result};
use crate::modular::{mod_inverse, modulo};
use serde::{Deserialize, Serialize};

/// Largest supported Hill block size
pub const MAX_MATRIX_SIZE: usize = 10;

/// A validated N×N matrix with entries in `[0, 26)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<i64>>")]
pub struct KeyMatrix {
    rows: Vec<Vec<i64>>,
}

impl KeyMatrix {
    /// Validate shape and entry range
    pub fn new(rows: Vec<Vec<i64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 || n > MAX_MATRIX_SIZE {
            return Err(CipherError::UnsupportedMatrixSize(n));
        }
        for (r, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(CipherError::InvalidKey(format!(
                    "Hill matrix must be square: row {} has {} entries, expected {}",
                    r,
                    row.len(),
                    n
                )));
            }
            if let Some(v) = row.iter().find(|v| !(0..ALPHABET_LEN).contains(*v)) {
                return Err(CipherError::InvalidKey(format!(
                    "Hill matrix entry {} in row {} is outside 0..=25",
                    v, r
                )));
            }
        }
        Ok(Self { rows })
    }

    /// Parse a matrix literal such as `[[3,3],[2,5]]`
    pub fn parse(literal: &str) -> Result<Self> {
        let rows: Vec<Vec<i64>> = serde_json::from_str(literal.trim()).map_err(|e| {
            CipherError::InvalidKey(format!("Hill matrix is not a nested integer array: {}", e))
        })?;
        Self::new(rows)
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    /// Matrix-vector product, each entry reduced mod 26
    pub fn multiply_vector(&self, vector: &[i64]) -> Vec<i64> {
        debug_assert_eq!(vector.len(), self.size());
        self.rows
            .iter()
            .map(|row| {
                let sum: i64 = row.iter().zip(vector).map(|(a, b)| a * b).sum();
                modulo(sum, ALPHABET_LEN)
            })
            .collect()
    }

    /// Determinant mod 26
    pub fn determinant(&self) -> i64 {
        determinant_mod(&self.rows, ALPHABET_LEN)
    }

    /// True when the determinant is a unit mod 26
    pub fn is_invertible(&self) -> bool {
        mod_inverse(self.determinant(), ALPHABET_LEN).is_some()
    }
}

impl TryFrom<Vec<Vec<i64>>> for KeyMatrix {
    type Error = CipherError;
    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<KeyMatrix> for Vec<Vec<i64>> {
    fn from(m: KeyMatrix) -> Self {
        m.rows
    }
}

impl std::str::FromStr for KeyMatrix {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for KeyMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<String> = self
            .rows
            .iter()
            .map(|r| {
                let cells: Vec<String> = r.iter().map(|v| v.to_string()).collect();
                format!("[{}]", cells.join(","))
            })
            .collect();
        write!(f, "[{}]", rows.join(","))
    }
}

/// Determinant of a square matrix modulo `m`.
///
/// Works over Z/m without division: rows are reduced against each other
/// with the Euclidean algorithm, so pivots never need an inverse. Row swaps
/// flip the sign; subtracting a multiple of one row from another keeps the
/// determinant unchanged.
pub fn determinant_mod(rows: &[Vec<i64>], m: i64) -> i64 {
    let n = rows.len();
    let mut a: Vec<Vec<i64>> = rows
        .iter()
        .map(|r| r.iter().map(|v| modulo(*v, m)).collect())
        .collect();
    let mut det = 1i64;

    for col in 0..n {
        loop {
            // Smallest non-zero entry at or below the diagonal becomes the pivot
            let pivot = (col..n)
                .filter(|&r| a[r][col] != 0)
                .min_by_key(|&r| a[r][col]);
            let Some(p) = pivot else {
                return 0;
            };
            if p != col {
                a.swap(p, col);
                det = -det;
            }

            let mut cleared = true;
            for r in (col + 1)..n {
                if a[r][col] == 0 {
                    continue;
                }
                let q = a[r][col] / a[col][col];
                for c in col..n {
                    a[r][c] = modulo(a[r][c] - q * a[col][c], m);
                }
                if a[r][col] != 0 {
                    cleared = false;
                }
            }
            if cleared {
                break;
            }
        }
        det = modulo(det * a[col][col], m);
    }

    modulo(det, m)
}
