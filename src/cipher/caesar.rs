use crate::alphabet::{index_of, letter_at, ALPHABET_LEN};
use crate::modular::modulo;
use crate::preserve::transform_per_letter;

/// Shift a single uppercase letter by `shift` positions
pub fn shift_letter(upper: char, shift: i64) -> char {
    // reduce before adding so extreme shifts cannot overflow
    letter_at(modulo(index_of(upper) + modulo(shift, ALPHABET_LEN), ALPHABET_LEN))
}

/// Caesar cipher. Any integer shift is accepted; it is reduced mod 26.
pub fn caesar_encrypt(text: &str, shift: i64) -> String {
    transform_per_letter(text, |upper, _| shift_letter(upper, shift))
}
