use crate::alphabet::{letter_at, only_letters_upper, FILLER};
use crate::preserve::SequenceCipher;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Side length of the Playfair square
pub const GRID_SIZE: usize = 5;

/// 5×5 Playfair square with I and J merged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayfairGrid {
    cells: [[char; GRID_SIZE]; GRID_SIZE],
}

impl PlayfairGrid {
    /// Keyword letters first (deduplicated, J as I), then the rest of the
    /// alphabet in order, J left out
    pub fn from_keyword(keyword: &str) -> Self {
        let mut used = [false; 26];
        let mut order = Vec::with_capacity(25);
        used[(b'J' - b'A') as usize] = true;

        let keyword = only_letters_upper(keyword).replace('J', "I");
        let rest = (0..26).map(letter_at);
        for ch in keyword.chars().chain(rest) {
            let idx = (ch as u8 - b'A') as usize;
            if !used[idx] {
                used[idx] = true;
                order.push(ch);
            }
        }

        let mut cells = [['A'; GRID_SIZE]; GRID_SIZE];
        for (i, ch) in order.into_iter().enumerate() {
            cells[i / GRID_SIZE][i % GRID_SIZE] = ch;
        }
        Self { cells }
    }

    pub fn rows(&self) -> &[[char; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    pub fn at(&self, row: usize, col: usize) -> char {
        self.cells[row % GRID_SIZE][col % GRID_SIZE]
    }

    /// Row and column of a letter; J is looked up as I
    pub fn locate(&self, ch: char) -> Option<(usize, usize)> {
        let ch = if ch == 'J' { 'I' } else { ch };
        self.cells.iter().enumerate().find_map(|(r, row)| {
            row.iter().position(|&c| c == ch).map(|c| (r, c))
        })
    }

    /// Substitute one digraph
    pub fn encrypt_pair(&self, a: char, b: char) -> Option<(char, char)> {
        let (ra, ca) = self.locate(a)?;
        let (rb, cb) = self.locate(b)?;
        Some(if ra == rb {
            (self.at(ra, ca + 1), self.at(rb, cb + 1))
        } else if ca == cb {
            (self.at(ra + 1, ca), self.at(rb + 1, cb))
        } else {
            (self.at(ra, cb), self.at(rb, ca))
        })
    }
}

/// Split a letter stream into digraphs.
///
/// A doubled letter is split with `X` and the second letter starts the
/// next pair; an odd tail is completed with `X`.
pub fn pair_letters(letters: &str) -> Vec<[char; 2]> {
    let chars: Vec<char> = letters.chars().collect();
    let mut pairs = Vec::with_capacity(chars.len() / 2 + 1);
    let mut i = 0;
    while i < chars.len() {
        let a = chars[i];
        match chars.get(i + 1) {
            None => {
                pairs.push([a, FILLER]);
                break;
            }
            Some(&b) if a == b => {
                pairs.push([a, FILLER]);
                i += 1;
            }
            Some(&b) => {
                pairs.push([a, b]);
                i += 2;
            }
        }
    }
    pairs
}

/// Letters-only Playfair output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayfairOutput {
    pub cipher: String,
    pub grid: PlayfairGrid,
    pub pairs: Vec<[char; 2]>,
}

impl SequenceCipher for PlayfairOutput {
    fn cipher_letters(&self) -> &str {
        &self.cipher
    }
}

/// Encrypt an uppercase letter stream with the Playfair cipher
pub fn playfair_encrypt_letters(letters: &str, keyword: &str) -> PlayfairOutput {
    let grid = PlayfairGrid::from_keyword(keyword);
    if letters.is_empty() {
        return PlayfairOutput {
            cipher: String::new(),
            grid,
            pairs: Vec::new(),
        };
    }

    let prepared = only_letters_upper(letters).replace('J', "I");
    let pairs = pair_letters(&prepared);

    let mut cipher = String::with_capacity(pairs.len() * 2);
    for &[a, b] in &pairs {
        // Every letter except J is in the grid, and J was folded into I
        if let Some((x, y)) = grid.encrypt_pair(a, b) {
            cipher.push(x);
            cipher.push(y);
        }
    }

    debug!(pairs = pairs.len(), "playfair digraphs encrypted");
    PlayfairOutput {
        cipher,
        grid,
        pairs,
    }
}
