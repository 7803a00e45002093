#![deny(missing_docs)]
#![doc = "Braid words, Markov moves, bounds, errors and the deterministic RNG shared by braidgen crates."]

pub mod bounds;
pub mod errors;
pub mod rng;
pub mod word;

pub use bounds::{Bounds, DEFAULT_MAX_GEN, DEFAULT_MAX_LEN, MAX_GENERATOR};
pub use errors::{BraidError, ErrorInfo};
pub use rng::RngHandle;
pub use word::{BraidWord, Sign};
