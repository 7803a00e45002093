//! Braid words and the seven elementary Markov moves.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::errors::{BraidError, ErrorInfo};

/// Orientation of a crossing appended by [`BraidWord::stabilize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    /// Overcrossing, encoded as a positive letter.
    Positive,
    /// Undercrossing, encoded as a negative letter.
    Negative,
}

impl Sign {
    /// Applies the sign to a generator magnitude.
    pub fn apply(self, magnitude: i32) -> i32 {
        match self {
            Sign::Positive => magnitude,
            Sign::Negative => -magnitude,
        }
    }
}

/// A word in the Artin generators of a braid group.
///
/// Each letter is a nonzero integer: its magnitude names the generator
/// (the crossing between strands `k` and `k + 1`) and its sign names the
/// orientation of the crossing.
///
/// Every move below is atomic. It either rewrites the word and returns
/// `true`, or returns `false` and leaves the letters untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct BraidWord {
    elements: Vec<i32>,
}

impl BraidWord {
    /// Creates a braid word, rejecting zero letters and `i32::MIN`, whose
    /// inverse is not representable.
    pub fn new(elements: Vec<i32>) -> Result<Self, BraidError> {
        if let Some(position) = elements.iter().position(|&letter| letter == 0) {
            return Err(BraidError::InvalidArgument(
                ErrorInfo::new("word-zero-letter", "braid word letters must be nonzero")
                    .with_context("index", position.to_string()),
            ));
        }
        if let Some(position) = elements.iter().position(|&letter| letter == i32::MIN) {
            return Err(BraidError::InvalidArgument(
                ErrorInfo::new("word-letter-range", "braid word letter has no inverse")
                    .with_context("index", position.to_string()),
            ));
        }
        Ok(Self { elements })
    }

    /// Returns the letters of the word.
    pub fn elements(&self) -> &[i32] {
        &self.elements
    }

    /// Consumes the word and returns its letters.
    pub fn into_elements(self) -> Vec<i32> {
        self.elements
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the word has no letters.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Largest generator magnitude present, 0 for the empty word.
    pub fn largest_generator(&self) -> u32 {
        self.elements
            .iter()
            .map(|letter| letter.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Sum of crossing signs.
    pub fn writhe(&self) -> i64 {
        self.elements.iter().map(|letter| letter.signum() as i64).sum()
    }

    /// Number of strands needed to draw the word.
    pub fn strand_count(&self) -> u32 {
        self.largest_generator() + 1
    }

    /// Checks the word is non-empty and fits inside `bounds`.
    pub fn check_bounds(&self, bounds: &Bounds) -> Result<(), BraidError> {
        if self.is_empty() {
            return Err(BraidError::InvalidArgument(ErrorInfo::new(
                "word-empty",
                "braid word must contain at least one letter",
            )));
        }
        if self.len() > bounds.max_len {
            return Err(BraidError::InvalidArgument(
                ErrorInfo::new("word-too-long", "braid word exceeds maxlen")
                    .with_context("length", self.len().to_string())
                    .with_context("maxlen", bounds.max_len.to_string()),
            ));
        }
        let largest = self.largest_generator();
        if largest > bounds.max_gen {
            return Err(BraidError::InvalidArgument(
                ErrorInfo::new("word-generator-too-large", "braid word exceeds maxgen")
                    .with_context("largest_generator", largest.to_string())
                    .with_context("maxgen", bounds.max_gen.to_string()),
            ));
        }
        Ok(())
    }

    /// Rotates the word cyclically so the letter at `index` comes first.
    pub fn conjugate(&mut self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        self.elements.rotate_left(index);
        true
    }

    /// Returns true if the letters at `index` and `index + 1` are inverses.
    pub fn can_cancel(&self, index: usize) -> bool {
        match (self.elements.get(index), self.elements.get(index + 1)) {
            (Some(&left), Some(&right)) => left.checked_neg() == Some(right),
            _ => false,
        }
    }

    /// Removes the inverse pair starting at `index`.
    ///
    /// Fails when no pair is present or when removal would leave an empty word.
    pub fn cancel(&mut self, index: usize) -> bool {
        if self.len() <= 2 || !self.can_cancel(index) {
            return false;
        }
        self.elements.drain(index..index + 2);
        true
    }

    /// Inserts `generator, -generator` before position `index`.
    ///
    /// `index` may equal the length, which appends the pair.
    pub fn insert(&mut self, index: usize, generator: i32, bounds: &Bounds) -> bool {
        let Some(inverse) = generator.checked_neg() else {
            return false;
        };
        if generator == 0 || generator.unsigned_abs() > bounds.max_gen {
            return false;
        }
        if index > self.len() || self.len() + 2 > bounds.max_len {
            return false;
        }
        self.elements.insert(index, inverse);
        self.elements.insert(index, generator);
        true
    }

    /// Swaps the letters at `index` and `index + 1` when they commute.
    pub fn transpose(&mut self, index: usize) -> bool {
        let (left, right) = match (self.elements.get(index), self.elements.get(index + 1)) {
            (Some(&left), Some(&right)) => (left, right),
            _ => return false,
        };
        if left.unsigned_abs().abs_diff(right.unsigned_abs()) < 2 {
            return false;
        }
        self.elements.swap(index, index + 1);
        true
    }

    /// Applies the braid relation `x y x = y x y` to the triple centred on `index`.
    pub fn flip(&mut self, index: usize) -> bool {
        if index == 0 || index + 1 >= self.len() {
            return false;
        }
        let (outer, middle) = (self.elements[index - 1], self.elements[index]);
        if self.elements[index + 1] != outer || outer.signum() != middle.signum() {
            return false;
        }
        if outer.unsigned_abs().abs_diff(middle.unsigned_abs()) != 1 {
            return false;
        }
        self.elements[index - 1] = middle;
        self.elements[index] = outer;
        self.elements[index + 1] = middle;
        true
    }

    /// Appends a new strand crossing `largest_generator + 1` with the given sign.
    pub fn stabilize(&mut self, sign: Sign, bounds: &Bounds) -> bool {
        let magnitude = self.largest_generator() + 1;
        if magnitude > bounds.max_gen || self.len() + 1 > bounds.max_len {
            return false;
        }
        let Ok(magnitude) = i32::try_from(magnitude) else {
            return false;
        };
        self.elements.push(sign.apply(magnitude));
        true
    }

    /// Returns true if the last letter's generator appears nowhere else.
    pub fn can_destabilize(&self) -> bool {
        match self.elements.split_last() {
            Some((last, rest)) => {
                let magnitude = last.unsigned_abs();
                rest.iter().all(|letter| letter.unsigned_abs() != magnitude)
            }
            None => false,
        }
    }

    /// Removes the last letter when its generator is used only once.
    pub fn destabilize(&mut self) -> bool {
        if self.len() <= 1 || !self.can_destabilize() {
            return false;
        }
        self.elements.pop();
        true
    }
}

impl TryFrom<Vec<i32>> for BraidWord {
    type Error = BraidError;

    fn try_from(elements: Vec<i32>) -> Result<Self, Self::Error> {
        BraidWord::new(elements)
    }
}

impl From<BraidWord> for Vec<i32> {
    fn from(word: BraidWord) -> Self {
        word.elements
    }
}

impl fmt::Display for BraidWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, letter) in self.elements.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
