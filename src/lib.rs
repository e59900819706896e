//! Cipherlab - classical cipher engine
//!
//! Encrypts text with six classical ciphers (plus a one-time pad) while
//! keeping the shape of the input: every non-letter stays where it was and
//! every letter keeps its case.
//!
//! ## Algorithms
//!
//! - **Caesar**: fixed shift
//! - **Mono**: 26-letter substitution alphabet
//! - **Vigenere**: repeating keyword shift, advancing on letters only
//! - **Playfair**: digraphs on a 5x5 keyword square (I/J merged)
//! - **Hill**: N×N matrix multiplication mod 26 over letter blocks
//! - **Transposition**: columnar transposition of the whole text
//! - **OTP**: XOR one-time pad over UTF-8 bytes, hex encoded
//!
//! Playfair and Hill work on the whole letter stream and may pad it with
//! `X`; surplus letters are appended to the output as ` [PAD:...]`.
//!
//! ## Example
//!
//! ```
//! use cipherlab::engine::{encrypt, EncryptRequest};
//! use cipherlab::Algorithm;
//!
//! let request = EncryptRequest {
//!     shift: Some(3.into()),
//!     ..EncryptRequest::new(Algorithm::Caesar, "Attack at dawn!")
//! };
//! let result = encrypt(&request, &mut rand::thread_rng()).unwrap();
//! assert_eq!(result.cipher, "Dwwdfn dw gdzq!");
//! ```

pub mod algorithm;
pub mod alphabet;
pub mod cipher;
pub mod cli;
pub mod engine;
pub mod error;
pub mod keygen;
pub mod matrix;
pub mod modular;
pub mod preserve;
pub mod report;

pub use algorithm::Algorithm;
pub use engine::{encrypt, generate_key, EncryptRequest, TransformResult};
pub use error::{CipherError, Result};
pub use matrix::KeyMatrix;
