//! Request/response boundary of the cipher engine.
//!
//! A front end (web handler, CLI, batch job) builds an [`EncryptRequest`],
//! calls [`encrypt`], and serializes the returned [`TransformResult`]. The
//! engine never performs I/O itself.

use crate::algorithm::Algorithm;
use crate::alphabet::only_letters_upper;
use crate::cipher::{
    caesar_encrypt, columnar_encrypt, hill_encrypt_letters, mono_encrypt, otp_encrypt,
    playfair_encrypt_letters, vigenere_encrypt, HillStep, MonoMapping, PlayfairGrid,
};
use crate::error::{CipherError, Result};
use crate::keygen::{generate_invertible_matrix, random_monoalphabetic};
use crate::matrix::KeyMatrix;
use crate::preserve::transform_letters_sequence;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

pub const DEFAULT_SHIFT: i64 = 3;
pub const DEFAULT_PLAYFAIR_KEY: &str = "KEY";
pub const DEFAULT_HILL_KEY: &str = "[[3,3],[2,5]]";
pub const DEFAULT_VIGENERE_KEY: &str = "LEMON";
pub const DEFAULT_TRANSPOSITION_KEY: &str = "ZEBRAS";
pub const DEFAULT_KEYGEN_SIZE: usize = 2;

/// Encryption request as sent by a front end.
///
/// `shift` may be a number or a numeric string, and `hillKey` may be a
/// nested array or a string holding one, because browser forms send text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptRequest {
    #[serde(default)]
    pub plaintext: String,
    pub algorithm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mono_map: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hill_key: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vigenere_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trans_key: Option<String>,
}

impl EncryptRequest {
    pub fn new(algorithm: Algorithm, plaintext: impl Into<String>) -> Self {
        Self {
            plaintext: plaintext.into(),
            algorithm: algorithm.tag().to_string(),
            ..Default::default()
        }
    }

    /// Validate the algorithm tag and its key, filling in defaults.
    /// Random defaults (the monoalphabetic map) are drawn from `rng`.
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<CipherKey> {
        let algorithm: Algorithm = self.algorithm.parse()?;
        let key = match algorithm {
            Algorithm::Caesar => CipherKey::Caesar {
                shift: match &self.shift {
                    Some(v) => parse_shift(v)?,
                    None => DEFAULT_SHIFT,
                },
            },
            Algorithm::Mono => CipherKey::Mono {
                mapping: match &self.mono_map {
                    Some(m) => MonoMapping::parse(m)?,
                    None => random_monoalphabetic(rng),
                },
            },
            Algorithm::Playfair => CipherKey::Playfair {
                keyword: self
                    .play_key
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PLAYFAIR_KEY.to_string()),
            },
            Algorithm::Hill => CipherKey::Hill {
                key: match &self.hill_key {
                    Some(v) => parse_hill_key(v)?,
                    None => KeyMatrix::parse(DEFAULT_HILL_KEY)?,
                },
            },
            Algorithm::Vigenere => {
                let key = self
                    .vigenere_key
                    .clone()
                    .unwrap_or_else(|| DEFAULT_VIGENERE_KEY.to_string());
                if only_letters_upper(&key).is_empty() {
                    return Err(CipherError::InvalidKey(
                        "Vigenère key must contain at least one letter".into(),
                    ));
                }
                CipherKey::Vigenere { key }
            }
            Algorithm::Transposition => CipherKey::Transposition {
                key: self
                    .trans_key
                    .clone()
                    .unwrap_or_else(|| DEFAULT_TRANSPOSITION_KEY.to_string()),
            },
            Algorithm::Otp => CipherKey::Otp,
        };
        Ok(key)
    }
}

/// A validated algorithm together with its key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherKey {
    Caesar { shift: i64 },
    Mono { mapping: MonoMapping },
    Playfair { keyword: String },
    Hill { key: KeyMatrix },
    Vigenere { key: String },
    Transposition { key: String },
    Otp,
}

impl CipherKey {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Caesar { .. } => Algorithm::Caesar,
            Self::Mono { .. } => Algorithm::Mono,
            Self::Playfair { .. } => Algorithm::Playfair,
            Self::Hill { .. } => Algorithm::Hill,
            Self::Vigenere { .. } => Algorithm::Vigenere,
            Self::Transposition { .. } => Algorithm::Transposition,
            Self::Otp => Algorithm::Otp,
        }
    }
}

/// Engine response: the cipher text plus algorithm-specific details
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformResult {
    pub cipher: String,
    pub details: Details,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Details {
    Caesar {
        shift: i64,
        plaintext: String,
    },
    Mono {
        mapping: String,
        plaintext: String,
    },
    Playfair {
        /// Letters-only cipher before merging back into the text
        cipher: String,
        grid: PlayfairGrid,
        pairs: Vec<[char; 2]>,
        keyword: String,
        plaintext: String,
        letters_only: String,
    },
    Hill {
        cipher: String,
        steps: Vec<HillStep>,
        key_matrix: KeyMatrix,
        determinant: i64,
        invertible: bool,
        plaintext: String,
        letters_only: String,
    },
    Vigenere {
        key: String,
        plaintext: String,
    },
    Transposition {
        cipher: String,
        grid: Vec<Vec<char>>,
        order: Vec<usize>,
        key: String,
    },
    Otp {
        key_hex: String,
        plaintext: String,
    },
}

impl Details {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Caesar { .. } => Algorithm::Caesar,
            Self::Mono { .. } => Algorithm::Mono,
            Self::Playfair { .. } => Algorithm::Playfair,
            Self::Hill { .. } => Algorithm::Hill,
            Self::Vigenere { .. } => Algorithm::Vigenere,
            Self::Transposition { .. } => Algorithm::Transposition,
            Self::Otp { .. } => Algorithm::Otp,
        }
    }
}

/// Resolve the request and run the selected cipher
pub fn encrypt<R: Rng + ?Sized>(request: &EncryptRequest, rng: &mut R) -> Result<TransformResult> {
    let key = request.resolve(rng)?;
    apply(&key, &request.plaintext, rng)
}

/// Run a validated cipher over `plaintext`.
///
/// `rng` is only consumed by the one-time pad.
pub fn apply<R: Rng + ?Sized>(key: &CipherKey, plaintext: &str, rng: &mut R) -> Result<TransformResult> {
    debug!(
        algorithm = %key.algorithm(),
        chars = plaintext.chars().count(),
        "encrypting"
    );

    let result = match key {
        CipherKey::Caesar { shift } => TransformResult {
            cipher: caesar_encrypt(plaintext, *shift),
            details: Details::Caesar {
                shift: *shift,
                plaintext: plaintext.to_string(),
            },
        },
        CipherKey::Mono { mapping } => TransformResult {
            cipher: mono_encrypt(plaintext, mapping),
            details: Details::Mono {
                mapping: mapping.as_string(),
                plaintext: plaintext.to_string(),
            },
        },
        CipherKey::Playfair { keyword } => {
            let (cipher, out) = transform_letters_sequence(plaintext, |letters| {
                Ok(playfair_encrypt_letters(letters, keyword))
            })?;
            TransformResult {
                cipher,
                details: Details::Playfair {
                    cipher: out.cipher,
                    grid: out.grid,
                    pairs: out.pairs,
                    keyword: keyword.clone(),
                    plaintext: plaintext.to_string(),
                    letters_only: only_letters_upper(plaintext).replace('J', "I"),
                },
            }
        }
        CipherKey::Hill { key } => {
            let determinant = key.determinant();
            let invertible = key.is_invertible();
            if !invertible {
                warn!(%key, determinant, "hill key is not invertible mod 26");
            }
            let (cipher, out) = transform_letters_sequence(plaintext, |letters| {
                Ok(hill_encrypt_letters(letters, key))
            })?;
            TransformResult {
                cipher,
                details: Details::Hill {
                    cipher: out.cipher,
                    steps: out.steps,
                    key_matrix: key.clone(),
                    determinant,
                    invertible,
                    plaintext: plaintext.to_string(),
                    letters_only: only_letters_upper(plaintext),
                },
            }
        }
        CipherKey::Vigenere { key } => TransformResult {
            cipher: vigenere_encrypt(plaintext, key)?,
            details: Details::Vigenere {
                key: key.clone(),
                plaintext: plaintext.to_string(),
            },
        },
        CipherKey::Transposition { key } => {
            let out = columnar_encrypt(plaintext, key);
            TransformResult {
                cipher: out.cipher.clone(),
                details: Details::Transposition {
                    cipher: out.cipher,
                    grid: out.grid,
                    order: out.order,
                    key: key.clone(),
                },
            }
        }
        CipherKey::Otp => {
            let out = otp_encrypt(plaintext, rng);
            TransformResult {
                cipher: out.cipher_hex,
                details: Details::Otp {
                    key_hex: out.key_hex,
                    plaintext: plaintext.to_string(),
                },
            }
        }
    };

    Ok(result)
}

/// Hill key generation request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeygenRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Value>,
}

/// Hill key generation response. `key` is `null` when the attempt budget
/// ran out; `error` then says why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeygenResponse {
    pub key: Option<KeyMatrix>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Generate an invertible Hill key of the requested size.
///
/// An unsupported size is an error; an exhausted search is a normal
/// response with no key.
pub fn generate_key<R: Rng + ?Sized>(request: &KeygenRequest, rng: &mut R) -> Result<KeygenResponse> {
    let size = match &request.size {
        Some(v) => parse_size(v)?,
        None => DEFAULT_KEYGEN_SIZE,
    };
    match generate_invertible_matrix(size, rng) {
        Ok(key) => Ok(KeygenResponse {
            key: Some(key),
            error: None,
        }),
        Err(e @ CipherError::KeyGenerationFailed { .. }) => Ok(KeygenResponse {
            key: None,
            error: Some(e.to_string()),
        }),
        Err(e) => Err(e),
    }
}

fn parse_shift(value: &Value) -> Result<i64> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| CipherError::InvalidKey(format!("shift must be an integer, got {}", value)))
}

fn parse_size(value: &Value) -> Result<usize> {
    let parsed = match value {
        Value::Number(n) => n.as_u64().and_then(|n| usize::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        CipherError::InvalidKey(format!("matrix size must be a positive integer, got {}", value))
    })
}

fn parse_hill_key(value: &Value) -> Result<KeyMatrix> {
    match value {
        Value::String(literal) => KeyMatrix::parse(literal),
        Value::Array(_) => {
            let rows: Vec<Vec<i64>> = serde_json::from_value(value.clone()).map_err(|e| {
                CipherError::InvalidKey(format!("Hill matrix is not a nested integer array: {}", e))
            })?;
            KeyMatrix::new(rows)
        }
        other => Err(CipherError::InvalidKey(format!(
            "Hill matrix must be an array or string, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(26)
    }

    fn request(value: Value) -> EncryptRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_caesar_default_shift() {
        let req = request(json!({"plaintext": "Attack at dawn!", "algorithm": "Caesar"}));
        let result = encrypt(&req, &mut rng()).unwrap();
        assert_eq!(result.cipher, "Dwwdfn dw gdzq!");
        assert_eq!(
            result.details,
            Details::Caesar {
                shift: 3,
                plaintext: "Attack at dawn!".into()
            }
        );
    }

    #[test]
    fn test_caesar_shift_as_string() {
        let req = request(json!({"plaintext": "abc", "algorithm": "Caesar", "shift": "-1"}));
        assert_eq!(encrypt(&req, &mut rng()).unwrap().cipher, "zab");
    }

    #[test]
    fn test_caesar_extreme_shift() {
        let req = request(json!({"plaintext": "z", "algorithm": "Caesar", "shift": i64::MAX}));
        let result = encrypt(&req, &mut rng()).unwrap();
        assert_eq!(result.cipher, "g");
        assert!(crate::report::walkthrough(&result).contains("(A becomes H)"));
    }

    #[test]
    fn test_caesar_bad_shift() {
        let req = request(json!({"plaintext": "abc", "algorithm": "Caesar", "shift": "three"}));
        assert!(matches!(
            encrypt(&req, &mut rng()),
            Err(CipherError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_mono_generated_mapping_reported() {
        let req = EncryptRequest::new(Algorithm::Mono, "Hello");
        let result = encrypt(&req, &mut rng()).unwrap();
        let Details::Mono { mapping, .. } = &result.details else {
            panic!("wrong details: {:?}", result.details);
        };
        let explicit = EncryptRequest {
            mono_map: Some(mapping.clone()),
            ..EncryptRequest::new(Algorithm::Mono, "Hello")
        };
        assert_eq!(encrypt(&explicit, &mut rng()).unwrap().cipher, result.cipher);
    }

    #[test]
    fn test_mono_malformed_map_rejected() {
        let req = request(json!({"plaintext": "abc", "algorithm": "Mono", "monoMap": "ABC"}));
        assert!(matches!(
            encrypt(&req, &mut rng()),
            Err(CipherError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_playfair_merges_and_pads() {
        let req = request(json!({
            "plaintext": "Instruments!",
            "algorithm": "Playfair",
            "playKey": "MONARCHY"
        }));
        let result = encrypt(&req, &mut rng()).unwrap();
        assert_eq!(result.cipher, "Gatlmzclrqt! [PAD:X]");
        match &result.details {
            Details::Playfair {
                cipher,
                letters_only,
                keyword,
                ..
            } => {
                assert_eq!(cipher, "GATLMZCLRQTX");
                assert_eq!(letters_only, "INSTRUMENTS");
                assert_eq!(keyword, "MONARCHY");
            }
            other => panic!("wrong details: {:?}", other),
        }
    }

    #[test]
    fn test_playfair_empty_text() {
        let req = EncryptRequest::new(Algorithm::Playfair, "1234");
        assert_eq!(encrypt(&req, &mut rng()).unwrap().cipher, "1234");
    }

    #[test]
    fn test_hill_default_key() {
        let req = EncryptRequest::new(Algorithm::Hill, "Help!");
        let result = encrypt(&req, &mut rng()).unwrap();
        assert_eq!(result.cipher, "Hiat!");
        match &result.details {
            Details::Hill {
                determinant,
                invertible,
                steps,
                ..
            } => {
                assert_eq!(*determinant, 9);
                assert!(invertible);
                assert_eq!(steps.len(), 2);
            }
            other => panic!("wrong details: {:?}", other),
        }
    }

    #[test]
    fn test_hill_key_forms() {
        let as_string = request(json!({
            "plaintext": "help", "algorithm": "Hill", "hillKey": "[[3,3],[2,5]]"
        }));
        let as_array = request(json!({
            "plaintext": "help", "algorithm": "Hill", "hillKey": [[3,3],[2,5]]
        }));
        assert_eq!(
            encrypt(&as_string, &mut rng()).unwrap(),
            encrypt(&as_array, &mut rng()).unwrap()
        );
    }

    #[test]
    fn test_hill_key_odd_length_pads() {
        // ABCX -> AB: DF, CX: XP
        let req = EncryptRequest::new(Algorithm::Hill, "abc");
        let result = encrypt(&req, &mut rng()).unwrap();
        assert_eq!(result.cipher, "dfx [PAD:P]");
    }

    #[test]
    fn test_hill_malformed_keys() {
        for bad in [
            json!("[[1,2],[3]]"),
            json!("print(1)"),
            json!([[1.5, 2], [3, 4]]),
            json!(42),
        ] {
            let req = request(json!({"plaintext": "abc", "algorithm": "Hill", "hillKey": bad}));
            assert!(
                matches!(encrypt(&req, &mut rng()), Err(CipherError::InvalidKey(_))),
                "accepted {}",
                bad
            );
        }
    }

    #[test]
    fn test_hill_non_invertible_key_still_encrypts() {
        let req = request(json!({"plaintext": "ab", "algorithm": "Hill", "hillKey": [[2,4],[1,2]]}));
        let result = encrypt(&req, &mut rng()).unwrap();
        assert!(matches!(
            result.details,
            Details::Hill {
                invertible: false,
                ..
            }
        ));
    }

    #[test]
    fn test_vigenere_default_key() {
        let req = EncryptRequest::new(Algorithm::Vigenere, "attack at dawn");
        assert_eq!(encrypt(&req, &mut rng()).unwrap().cipher, "lxfopv ef rnhr");
    }

    #[test]
    fn test_vigenere_empty_key_rejected() {
        let req = request(json!({"plaintext": "abc", "algorithm": "Vigenere", "vigenereKey": "42"}));
        assert!(matches!(
            req.resolve(&mut rng()),
            Err(CipherError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_transposition_default_key() {
        let req = EncryptRequest::new(Algorithm::Transposition, "WEAREDISCOVEREDFLEEATONCE");
        let result = encrypt(&req, &mut rng()).unwrap();
        assert_eq!(result.cipher, "EVLNXACDTXESEAXROFOXDEECXWIREE");
        match &result.details {
            Details::Transposition { order, key, .. } => {
                assert_eq!(order, &vec![4, 2, 1, 3, 5, 0]);
                assert_eq!(key, "ZEBRAS");
            }
            other => panic!("wrong details: {:?}", other),
        }
    }

    #[test]
    fn test_transposition_empty_key() {
        let req = request(json!({"plaintext": "hi there", "algorithm": "Transposition", "transKey": ""}));
        assert_eq!(encrypt(&req, &mut rng()).unwrap().cipher, "hi there");
    }

    #[test]
    fn test_otp_hex_output() {
        let req = EncryptRequest::new(Algorithm::Otp, "hi");
        let result = encrypt(&req, &mut rng()).unwrap();
        assert_eq!(result.cipher.len(), 4);
        assert!(matches!(result.details, Details::Otp { ref key_hex, .. } if key_hex.len() == 4));
        assert!(result.cipher.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[test]
    fn test_invalid_algorithm() {
        let req = request(json!({"plaintext": "abc", "algorithm": "Enigma"}));
        assert!(matches!(
            encrypt(&req, &mut rng()),
            Err(CipherError::InvalidAlgorithm(_))
        ));
    }

    #[test]
    fn test_missing_plaintext_is_empty() {
        let req = request(json!({"algorithm": "Caesar"}));
        assert_eq!(encrypt(&req, &mut rng()).unwrap().cipher, "");
    }

    #[test]
    fn test_result_json_shape() {
        let req = EncryptRequest::new(Algorithm::Hill, "HELP");
        let result = encrypt(&req, &mut rng()).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["cipher"], "HIAT");
        assert_eq!(value["details"]["key_matrix"], json!([[3, 3], [2, 5]]));
        assert_eq!(value["details"]["steps"][0]["block"], "HE");
        assert_eq!(value["details"]["letters_only"], "HELP");
    }

    #[test]
    fn test_generate_key_default_size() {
        let response = generate_key(&KeygenRequest::default(), &mut rng()).unwrap();
        let key = response.key.unwrap();
        assert_eq!(key.size(), 2);
        assert!(key.is_invertible());
        assert!(response.error.is_none());
    }

    #[test]
    fn test_generate_key_size_as_string() {
        let req: KeygenRequest = serde_json::from_value(json!({"size": "3"})).unwrap();
        let response = generate_key(&req, &mut rng()).unwrap();
        assert_eq!(response.key.unwrap().size(), 3);
    }

    #[test]
    fn test_generate_key_bad_size() {
        let req: KeygenRequest = serde_json::from_value(json!({"size": 0})).unwrap();
        assert!(matches!(
            generate_key(&req, &mut rng()),
            Err(CipherError::UnsupportedMatrixSize(0))
        ));
    }
}
