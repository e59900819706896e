use crate::alphabet::FILLER;
use serde::{Deserialize, Serialize};

/// Columnar transposition output
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TranspositionOutput {
    pub cipher: String,
    /// Row-major layout of the padded text
    pub grid: Vec<Vec<char>>,
    /// Original column indices in emission order
    pub order: Vec<usize>,
}

/// Column emission order: ascending by key character, ties by position
pub fn column_order(key: &str) -> Vec<usize> {
    let mut keyed: Vec<(char, usize)> = key.chars().enumerate().map(|(i, c)| (c, i)).collect();
    keyed.sort();
    keyed.into_iter().map(|(_, i)| i).collect()
}

/// Columnar transposition over every character of `text`, punctuation and
/// spaces included. The text is padded with `X` to fill the last row.
pub fn columnar_encrypt(text: &str, key: &str) -> TranspositionOutput {
    let cols = key.chars().count();
    if cols == 0 {
        return TranspositionOutput {
            cipher: text.to_string(),
            ..Default::default()
        };
    }

    let mut chars: Vec<char> = text.chars().collect();
    let rows = chars.len().div_ceil(cols);
    chars.resize(rows * cols, FILLER);

    let grid: Vec<Vec<char>> = chars.chunks(cols).map(|row| row.to_vec()).collect();
    let order = column_order(key);

    let mut cipher = String::with_capacity(chars.len());
    for &col in &order {
        for row in &grid {
            cipher.push(row[col]);
        }
    }

    TranspositionOutput {
        cipher,
        grid,
        order,
    }
}
