use crate::engine::{encrypt, generate_key, EncryptRequest, KeygenRequest};
use crate::error::Result;
use rand::Rng;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Read a request document from a file, or from stdin when the path is `-`
pub fn read_request(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        return Ok(input);
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Answer a JSON request document.
///
/// Documents with an `algorithm` field are encryption requests; anything
/// else is treated as a Hill key generation request (`{"size": 3}`).
pub fn process_request<R: Rng + ?Sized>(document: &str, rng: &mut R) -> Result<String> {
    let value: Value = serde_json::from_str(document)?;
    let response = if value.get("algorithm").is_some() {
        let request: EncryptRequest = serde_json::from_value(value)?;
        serde_json::to_string_pretty(&encrypt(&request, rng)?)?
    } else {
        let request: KeygenRequest = serde_json::from_value(value)?;
        serde_json::to_string_pretty(&generate_key(&request, rng)?)?
    };
    Ok(response + "\n")
}
