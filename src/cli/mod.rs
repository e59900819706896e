pub mod algorithms;
pub mod encrypt;
pub mod keygen;
pub mod request;

pub use algorithms::*;
pub use encrypt::*;
pub use keygen::*;
pub use request::*;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Random source for a command: seeded when reproducible output is wanted
pub fn command_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    }
}
