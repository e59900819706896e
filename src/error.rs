use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid algorithm: {0}")]
    InvalidAlgorithm(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Unsupported matrix size: {0}. Must be between 1 and {max}", max = crate::matrix::MAX_MATRIX_SIZE)]
    UnsupportedMatrixSize(usize),

    #[error("Key generation failed: no invertible {size}x{size} matrix found in {attempts} attempts")]
    KeyGenerationFailed { size: usize, attempts: usize },
}

pub type Result<T> = std::result::Result<T, CipherError>;
