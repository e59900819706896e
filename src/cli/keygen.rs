use crate::engine::{generate_key, KeygenRequest, DEFAULT_KEYGEN_SIZE};
use crate::error::Result;
use crate::keygen::random_monoalphabetic;
use rand::Rng;

/// Options for the keygen command
#[derive(Debug, Clone)]
pub struct KeygenOptions {
    /// Hill matrix dimension
    pub size: usize,
    /// Generate a monoalphabetic map instead of a Hill matrix
    pub mono: bool,
}

impl Default for KeygenOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_KEYGEN_SIZE,
            mono: false,
        }
    }
}

/// Generate a key and format it for the terminal.
///
/// Hill keys are printed as the `{"key": ...}` response record, so the
/// output can be passed straight back as `--hill-key` after extraction.
pub fn generate_key_text<R: Rng + ?Sized>(options: &KeygenOptions, rng: &mut R) -> Result<String> {
    if options.mono {
        return Ok(format!("{}\n", random_monoalphabetic(rng).as_string()));
    }

    let request = KeygenRequest {
        size: Some(options.size.into()),
    };
    let response = generate_key(&request, rng)?;
    Ok(format!("{}\n", serde_json::to_string(&response)?))
}
