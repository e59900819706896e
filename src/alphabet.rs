//! The fixed 26-letter Latin alphabet.

/// Number of symbols in the cipher alphabet
pub const ALPHABET_LEN: i64 = 26;

/// Filler letter used for padding blocks, digraphs and transposition grids
pub const FILLER: char = 'X';

/// True for ASCII letters `a-z` and `A-Z`
pub fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Uppercase the text and keep only `A-Z`
pub fn only_letters_upper(text: &str) -> String {
    text.chars()
        .filter(|c| is_letter(*c))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Alphabet position of an uppercase letter (A = 0)
pub fn index_of(upper: char) -> i64 {
    (upper as u8 - b'A') as i64
}

/// Uppercase letter at alphabet position `index`, which must be in `[0, 26)`
pub fn letter_at(index: i64) -> char {
    (b'A' + index as u8) as char
}

/// Re-apply the case of `original` to an uppercase cipher letter
pub fn match_case(original: char, upper: char) -> char {
    if original.is_ascii_lowercase() {
        upper.to_ascii_lowercase()
    } else {
        upper
    }
}
