//! Complexity bounds applied to every braid word the sampler produces.

use serde::{Deserialize, Serialize};

use crate::errors::{BraidError, ErrorInfo};

/// Default maximum generator magnitude.
pub const DEFAULT_MAX_GEN: u32 = 9;
/// Default maximum word length.
pub const DEFAULT_MAX_LEN: usize = 10;
/// Largest generator magnitude a letter can carry.
pub const MAX_GENERATOR: u32 = i32::MAX as u32;

/// Upper limits on generator magnitude and word length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    /// Largest generator magnitude a word may contain.
    #[serde(default = "default_max_gen")]
    pub max_gen: u32,
    /// Largest number of letters a word may contain.
    #[serde(default = "default_max_len")]
    pub max_len: usize,
}

fn default_max_gen() -> u32 {
    DEFAULT_MAX_GEN
}

fn default_max_len() -> usize {
    DEFAULT_MAX_LEN
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            max_gen: DEFAULT_MAX_GEN,
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

impl Bounds {
    /// Creates validated bounds. Both limits must be strictly positive and
    /// `max_gen` must not exceed [`MAX_GENERATOR`].
    pub fn new(max_gen: u32, max_len: usize) -> Result<Self, BraidError> {
        let bounds = Self { max_gen, max_len };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Checks that both limits are strictly positive and representable.
    pub fn validate(&self) -> Result<(), BraidError> {
        if self.max_gen == 0 || self.max_gen > MAX_GENERATOR {
            return Err(BraidError::InvalidArgument(
                ErrorInfo::new("bounds-maxgen", "maxgen must be in 1..=i32::MAX")
                    .with_context("maxgen", self.max_gen.to_string()),
            ));
        }
        if self.max_len == 0 {
            return Err(BraidError::InvalidArgument(
                ErrorInfo::new("bounds-maxlen", "maxlen must be positive")
                    .with_context("maxlen", self.max_len.to_string()),
            ));
        }
        Ok(())
    }
}
