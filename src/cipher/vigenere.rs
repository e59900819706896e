use crate::alphabet::{index_of, only_letters_upper};
use crate::cipher::caesar::shift_letter;
use crate::error::{CipherError, Result};
use crate::preserve::transform_per_letter;

/// Vigenère cipher. The key stream advances on letters only, so
/// punctuation and spaces never consume key letters.
pub fn vigenere_encrypt(text: &str, key: &str) -> Result<String> {
    let key: Vec<i64> = only_letters_upper(key).chars().map(index_of).collect();
    if key.is_empty() {
        return Err(CipherError::InvalidKey(
            "Vigenère key must contain at least one letter".into(),
        ));
    }

    let mut pos = 0;
    Ok(transform_per_letter(text, |upper, _| {
        let k = key[pos % key.len()];
        pos += 1;
        shift_letter(upper, k)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_vector() {
        assert_eq!(
            vigenere_encrypt("ATTACKATDAWN", "LEMON").unwrap(),
            "LXFOPVEFRNHR"
        );
    }

    #[test]
    fn test_punctuation_does_not_advance_key() {
        assert_eq!(
            vigenere_encrypt("Attack at dawn!", "LEMON").unwrap(),
            "Lxfopv ef rnhr!"
        );
    }

    #[test]
    fn test_key_is_filtered() {
        assert_eq!(
            vigenere_encrypt("attack", "le-mon 1").unwrap(),
            vigenere_encrypt("attack", "LEMON").unwrap()
        );
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            vigenere_encrypt("attack", "123"),
            Err(CipherError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_key_a_is_identity() {
        assert_eq!(vigenere_encrypt("Hello, World", "A").unwrap(), "Hello, World");
    }
}
