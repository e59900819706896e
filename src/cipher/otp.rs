use rand::Rng;
use serde::{Deserialize, Serialize};

/// Hex-encoded one-time pad output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpOutput {
    pub cipher_hex: String,
    pub key_hex: String,
}

/// XOR the UTF-8 bytes of `text` with `key`, which must be the same length
pub fn xor_with_key(text: &[u8], key: &[u8]) -> Vec<u8> {
    text.iter().zip(key).map(|(p, k)| p ^ k).collect()
}

/// One-time pad over the UTF-8 bytes of `text` with a fresh random key
pub fn otp_encrypt<R: Rng + ?Sized>(text: &str, rng: &mut R) -> OtpOutput {
    let plain = text.as_bytes();
    let mut key = vec![0u8; plain.len()];
    rng.fill(key.as_mut_slice());
    let cipher = xor_with_key(plain, &key);
    OtpOutput {
        cipher_hex: hex::encode(cipher),
        key_hex: hex::encode(key),
    }
}
