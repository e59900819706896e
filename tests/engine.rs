use cipherlab::cipher::{
    caesar_encrypt, mono_encrypt, pair_letters, playfair_encrypt_letters, vigenere_encrypt,
    MonoMapping,
};
use cipherlab::engine::{apply, CipherKey, Details};
use cipherlab::keygen::{generate_invertible_matrix, random_monoalphabetic};
use cipherlab::preserve::reinterleave;
use cipherlab::{encrypt, Algorithm, CipherError, EncryptRequest, KeyMatrix};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn same_shape(input: &str, output: &str) -> bool {
    input.chars().count() == output.chars().count()
        && input.chars().zip(output.chars()).all(|(a, b)| {
            if a.is_ascii_alphabetic() {
                b.is_ascii_alphabetic() && a.is_ascii_lowercase() == b.is_ascii_lowercase()
            } else {
                a == b
            }
        })
}

#[test]
fn every_algorithm_handles_empty_text() {
    let mut rng = StdRng::seed_from_u64(1);
    for algorithm in Algorithm::ALL {
        let result = encrypt(&EncryptRequest::new(algorithm, ""), &mut rng).unwrap();
        assert_eq!(result.cipher, "", "{}", algorithm);
        assert_eq!(result.details.algorithm(), algorithm);
    }
}

#[test]
fn generated_keys_drive_the_engine() {
    let mut rng = StdRng::seed_from_u64(77);
    let hill = generate_invertible_matrix(3, &mut rng).unwrap();
    let result = apply(&CipherKey::Hill { key: hill.clone() }, "Meet me at noon.", &mut rng).unwrap();
    match result.details {
        Details::Hill {
            key_matrix,
            invertible,
            ..
        } => {
            assert_eq!(key_matrix, hill);
            assert!(invertible);
        }
        other => panic!("unexpected details {:?}", other),
    }

    let mapping = random_monoalphabetic(&mut rng);
    let result = apply(&CipherKey::Mono { mapping: mapping.clone() }, "Meet me.", &mut rng).unwrap();
    assert_eq!(mono_encrypt(&result.cipher, &mapping.inverse()), "Meet me.");
}

#[test]
fn hill_key_larger_than_supported_is_rejected() {
    let rows = vec![vec![1; 12]; 12];
    assert!(matches!(
        KeyMatrix::new(rows),
        Err(CipherError::UnsupportedMatrixSize(12))
    ));
}

#[test]
fn sequence_merge_keeps_punctuation_positions() {
    let text = "In, St-Ru!";
    let letters = playfair_encrypt_letters("INSTRU", "MONARCHY");
    assert_eq!(reinterleave(text, &letters.cipher), "Ga, Tl-Mz!");
}

proptest! {
    #[test]
    fn per_letter_ciphers_keep_shape(text in "\\PC{0,80}", shift in any::<i64>()) {
        prop_assert!(same_shape(&text, &caesar_encrypt(&text, shift)));

        let mapping = MonoMapping::parse("ZYXWVUTSRQPONMLKJIHGFEDCBA").unwrap();
        prop_assert!(same_shape(&text, &mono_encrypt(&text, &mapping)));

        prop_assert!(same_shape(&text, &vigenere_encrypt(&text, "LEMON").unwrap()));
    }

    #[test]
    fn mono_inverse_restores(text in "[a-zA-Z .,!]{0,80}", seed in any::<u64>()) {
        let mapping = random_monoalphabetic(&mut StdRng::seed_from_u64(seed));
        let cipher = mono_encrypt(&text, &mapping);
        prop_assert_eq!(mono_encrypt(&cipher, &mapping.inverse()), text);
    }

    #[test]
    fn playfair_pairs_are_padded_once(letters in "[A-IK-WYZ]{0,60}") {
        let pairs = pair_letters(&letters);
        for [a, b] in &pairs {
            prop_assert_ne!(a, b);
            prop_assert!(*a != 'X');
        }
        // Dropping the fillers gives back the source stream
        let flat: String = pairs.iter().flatten().collect();
        prop_assert_eq!(flat.replace('X', ""), letters.clone());
        prop_assert_eq!(flat.len() - letters.len(), flat.matches('X').count());
    }

    #[test]
    fn playfair_merge_keeps_case(text in "[a-zA-Z ,]{1,60}") {
        let mut rng = StdRng::seed_from_u64(0);
        let result = encrypt(&EncryptRequest::new(Algorithm::Playfair, text.clone()), &mut rng).unwrap();
        let merged: String = result.cipher.split(" [PAD:").next().unwrap_or("").to_string();
        prop_assert!(same_shape(&text, &merged));
    }

    #[test]
    fn hill_output_is_block_aligned(letters in "[A-Z]{1,40}", size in 1usize..=4, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let key = generate_invertible_matrix(size, &mut rng).unwrap();
        let out = cipherlab::cipher::hill_encrypt_letters(&letters, &key);
        prop_assert_eq!(out.cipher.len() % size, 0);
        prop_assert!(out.cipher.len() >= letters.len());
        prop_assert!(out.cipher.len() < letters.len() + size);
    }
}
