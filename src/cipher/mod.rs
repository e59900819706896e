pub mod caesar;
pub mod hill;
pub mod mono;
pub mod otp;
pub mod playfair;
pub mod transposition;
pub mod vigenere;

pub use caesar::*;
pub use hill::*;
pub use mono::*;
pub use otp::*;
pub use playfair::*;
pub use transposition::*;
pub use vigenere::*;
