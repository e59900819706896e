use crate::algorithm::Algorithm;
use crate::engine::{encrypt, EncryptRequest};
use crate::error::Result;
use crate::report::walkthrough;
use rand::Rng;
use serde_json::Value;

/// Options for the encrypt command
#[derive(Debug, Clone)]
pub struct EncryptOptions {
    pub algorithm: Algorithm,
    pub shift: Option<i64>,
    pub mono_map: Option<String>,
    pub play_key: Option<String>,
    pub hill_key: Option<String>,
    pub vigenere_key: Option<String>,
    pub trans_key: Option<String>,
    /// Print the full result record as JSON
    pub json: bool,
    /// Append a walkthrough of the transform
    pub explain: bool,
}

impl Default for EncryptOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Caesar,
            shift: None,
            mono_map: None,
            play_key: None,
            hill_key: None,
            vigenere_key: None,
            trans_key: None,
            json: false,
            explain: false,
        }
    }
}

impl EncryptOptions {
    /// Build the engine request. Unset keys fall back to engine defaults.
    pub fn to_request(&self, plaintext: &str) -> EncryptRequest {
        EncryptRequest {
            shift: self.shift.map(Value::from),
            mono_map: self.mono_map.clone(),
            play_key: self.play_key.clone(),
            hill_key: self.hill_key.clone().map(Value::String),
            vigenere_key: self.vigenere_key.clone(),
            trans_key: self.trans_key.clone(),
            ..EncryptRequest::new(self.algorithm, plaintext)
        }
    }
}

/// Encrypt `plaintext` and format the output for the terminal
pub fn encrypt_text<R: Rng + ?Sized>(
    plaintext: &str,
    options: &EncryptOptions,
    rng: &mut R,
) -> Result<String> {
    let result = encrypt(&options.to_request(plaintext), rng)?;

    if options.json {
        let mut output = serde_json::to_string_pretty(&result)?;
        output.push('\n');
        return Ok(output);
    }

    if options.explain {
        return Ok(walkthrough(&result));
    }

    Ok(format!("{}\n", result.cipher))
}
