//! Case and punctuation preserving reconstruction.
//!
//! Ciphers only ever see uppercase `A-Z`. These helpers strip the text down
//! to that form, run the cipher, and put the result back into the shape of
//! the original text:
//!
//! ```text
//! "Hi, you!" → letters "HIYOU" → cipher "QRSTU" → "Qr, stu!"
//! ```
//!
//! Per-letter ciphers map one letter at a time, so output length always
//! equals input length. Sequence ciphers (Playfair, Hill) may pad, in which
//! case the surplus letters are appended as a ` [PAD:...]` marker.

use crate::alphabet::{is_letter, match_case};
use crate::error::Result;

/// Output of a cipher that works on the whole letter stream at once
pub trait SequenceCipher {
    /// Uppercase cipher letters, possibly longer than the input stream
    fn cipher_letters(&self) -> &str;
}

impl SequenceCipher for String {
    fn cipher_letters(&self) -> &str {
        self
    }
}

/// Apply `transform(upper, letter_index)` to each letter, copying everything else
pub fn transform_per_letter<F>(text: &str, mut transform: F) -> String
where
    F: FnMut(char, usize) -> char,
{
    let mut out = String::with_capacity(text.len());
    let mut letter_index = 0;
    for ch in text.chars() {
        if !is_letter(ch) {
            out.push(ch);
            continue;
        }
        let upper = transform(ch.to_ascii_uppercase(), letter_index);
        letter_index += 1;
        out.push(match_case(ch, upper));
    }
    out
}

/// Run `transform` once over the uppercase letter stream and weave the
/// result back into `text`. Returns the merged text and the cipher output.
pub fn transform_letters_sequence<T, F>(text: &str, transform: F) -> Result<(String, T)>
where
    T: SequenceCipher,
    F: FnOnce(&str) -> Result<T>,
{
    let letters: String = text
        .chars()
        .filter(|c| is_letter(*c))
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let output = transform(&letters)?;
    let merged = reinterleave(text, output.cipher_letters());
    Ok((merged, output))
}

/// Put `cipher_letters` into the letter slots of `text`.
///
/// Surplus letters are appended as ` [PAD:...]`. If there are fewer cipher
/// letters than slots, the remaining slots keep their original character.
pub fn reinterleave(text: &str, cipher_letters: &str) -> String {
    let mut cipher = cipher_letters.chars();
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        if !is_letter(ch) {
            out.push(ch);
            continue;
        }
        match cipher.next() {
            Some(c) => out.push(match_case(ch, c)),
            None => out.push(ch),
        }
    }
    let leftover: String = cipher.collect();
    if !leftover.is_empty() {
        out.push_str(&format!(" [PAD:{}]", leftover));
    }
    out
}
