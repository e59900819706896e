use crate::error::{CipherError, Result};
use serde::{Deserialize, Serialize};

/// Supported cipher algorithms. The serialized names are the request tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    Caesar,
    Mono,
    Playfair,
    Hill,
    Vigenere,
    Transposition,
    #[serde(rename = "OTP")]
    Otp,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Self::Caesar,
        Self::Mono,
        Self::Playfair,
        Self::Hill,
        Self::Vigenere,
        Self::Transposition,
        Self::Otp,
    ];

    /// Request tag, e.g. `"Vigenere"`
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Caesar => "Caesar",
            Self::Mono => "Mono",
            Self::Playfair => "Playfair",
            Self::Hill => "Hill",
            Self::Vigenere => "Vigenere",
            Self::Transposition => "Transposition",
            Self::Otp => "OTP",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Caesar => "shift every letter by a fixed amount",
            Self::Mono => "substitute letters through a 26-letter permutation",
            Self::Playfair => "digraph substitution on a 5x5 keyword square",
            Self::Hill => "block substitution by matrix multiplication mod 26",
            Self::Vigenere => "shift letters by a repeating keyword",
            Self::Transposition => "write rows under a key, read columns in key order",
            Self::Otp => "XOR the UTF-8 bytes with a random pad of equal length",
        }
    }

    /// Request parameter and its default, if the algorithm takes one
    pub fn parameter(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Caesar => Some(("shift", "3")),
            Self::Mono => Some(("monoMap", "random permutation")),
            Self::Playfair => Some(("playKey", crate::engine::DEFAULT_PLAYFAIR_KEY)),
            Self::Hill => Some(("hillKey", crate::engine::DEFAULT_HILL_KEY)),
            Self::Vigenere => Some(("vigenereKey", crate::engine::DEFAULT_VIGENERE_KEY)),
            Self::Transposition => Some(("transKey", crate::engine::DEFAULT_TRANSPOSITION_KEY)),
            Self::Otp => None,
        }
    }

    /// True if letters keep their positions, case and surrounding punctuation
    pub fn preserves_shape(&self) -> bool {
        !matches!(self, Self::Transposition | Self::Otp)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "caesar" | "shift" => Ok(Self::Caesar),
            "mono" | "monoalphabetic" | "substitution" => Ok(Self::Mono),
            "playfair" => Ok(Self::Playfair),
            "hill" => Ok(Self::Hill),
            "vigenere" | "vigenère" => Ok(Self::Vigenere),
            "transposition" | "columnar" => Ok(Self::Transposition),
            "otp" | "one-time-pad" => Ok(Self::Otp),
            _ => Err(CipherError::InvalidAlgorithm(s.to_string())),
        }
    }
}
