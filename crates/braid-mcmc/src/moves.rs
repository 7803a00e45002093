use braid_core::{BraidWord, Bounds, RngHandle, Sign};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The seven Markov move families, in move-code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    /// Cyclic rotation of the word.
    Conjugate,
    /// Removal of an adjacent inverse pair.
    Cancel,
    /// Insertion of a generator/inverse pair.
    Insert,
    /// Swap of two commuting neighbours.
    Transpose,
    /// Braid relation rewrite of a triple.
    Flip,
    /// Appending a crossing with a new strand.
    Stabilize,
    /// Removing the crossing with the last strand.
    Destabilize,
}

impl MoveKind {
    /// Every move kind, indexed by move code.
    pub const ALL: [MoveKind; 7] = [
        MoveKind::Conjugate,
        MoveKind::Cancel,
        MoveKind::Insert,
        MoveKind::Transpose,
        MoveKind::Flip,
        MoveKind::Stabilize,
        MoveKind::Destabilize,
    ];

    /// Numeric move code written to trial logs.
    pub fn code(self) -> usize {
        match self {
            MoveKind::Conjugate => 0,
            MoveKind::Cancel => 1,
            MoveKind::Insert => 2,
            MoveKind::Transpose => 3,
            MoveKind::Flip => 4,
            MoveKind::Stabilize => 5,
            MoveKind::Destabilize => 6,
        }
    }

    /// Looks up a move kind by its code.
    pub fn from_code(code: usize) -> Option<Self> {
        Self::ALL.get(code).copied()
    }

    /// Lowercase name written to trial logs.
    pub fn as_str(self) -> &'static str {
        match self {
            MoveKind::Conjugate => "conjugate",
            MoveKind::Cancel => "cancel",
            MoveKind::Insert => "insert",
            MoveKind::Transpose => "transpose",
            MoveKind::Flip => "flip",
            MoveKind::Stabilize => "stabilize",
            MoveKind::Destabilize => "destabilize",
        }
    }
}

/// A fully parameterised move, ready to apply to a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// Rotate `index` to the front.
    Conjugate {
        /// Letter brought to the front.
        index: usize,
    },
    /// Cancel the pair at `index`, `index + 1`.
    Cancel {
        /// First letter of the pair.
        index: usize,
    },
    /// Insert `generator, -generator` before `index`.
    Insert {
        /// Insertion position.
        index: usize,
        /// Generator of the inserted pair.
        generator: i32,
    },
    /// Swap the letters at `index`, `index + 1`.
    Transpose {
        /// Left letter of the pair.
        index: usize,
    },
    /// Rewrite the triple centred on `index`.
    Flip {
        /// Centre of the triple.
        index: usize,
    },
    /// Append a crossing with a new strand.
    Stabilize {
        /// Orientation of the new crossing.
        sign: Sign,
    },
    /// Drop the last letter.
    Destabilize,
}

impl Move {
    /// Completes `kind` into a move, drawing its extra parameter from `rng`.
    ///
    /// Insert draws its generator uniformly from `1..=largest_generator + 1`
    /// and Stabilize draws one sign. Other kinds consume no randomness.
    pub fn draw(kind: MoveKind, index: usize, word: &BraidWord, rng: &mut RngHandle) -> Self {
        match kind {
            MoveKind::Conjugate => Move::Conjugate { index },
            MoveKind::Cancel => Move::Cancel { index },
            MoveKind::Insert => {
                let largest = word
                    .elements()
                    .iter()
                    .map(|letter| letter.abs())
                    .max()
                    .unwrap_or(0);
                let generator = rng.gen_range(1..=largest.saturating_add(1));
                Move::Insert { index, generator }
            }
            MoveKind::Transpose => Move::Transpose { index },
            MoveKind::Flip => Move::Flip { index },
            MoveKind::Stabilize => {
                let sign = if rng.gen::<bool>() {
                    Sign::Positive
                } else {
                    Sign::Negative
                };
                Move::Stabilize { sign }
            }
            MoveKind::Destabilize => Move::Destabilize,
        }
    }

    /// Family this move belongs to.
    pub fn kind(&self) -> MoveKind {
        match self {
            Move::Conjugate { .. } => MoveKind::Conjugate,
            Move::Cancel { .. } => MoveKind::Cancel,
            Move::Insert { .. } => MoveKind::Insert,
            Move::Transpose { .. } => MoveKind::Transpose,
            Move::Flip { .. } => MoveKind::Flip,
            Move::Stabilize { .. } => MoveKind::Stabilize,
            Move::Destabilize => MoveKind::Destabilize,
        }
    }

    /// True when applying the move would reduce the word to the trivial braid.
    pub fn collapses_to_unknot(&self, word: &BraidWord) -> bool {
        match *self {
            Move::Cancel { index } => word.len() == 2 && word.can_cancel(index),
            Move::Destabilize => word.len() == 1 && word.can_destabilize(),
            _ => false,
        }
    }

    /// Applies the move in place. On failure the word is left unchanged.
    pub fn apply(&self, word: &mut BraidWord, bounds: &Bounds) -> bool {
        match *self {
            Move::Conjugate { index } => word.conjugate(index),
            Move::Cancel { index } => word.cancel(index),
            Move::Insert { index, generator } => word.insert(index, generator, bounds),
            Move::Transpose { index } => word.transpose(index),
            Move::Flip { index } => word.flip(index),
            Move::Stabilize { sign } => word.stabilize(sign, bounds),
            Move::Destabilize => word.destabilize(),
        }
    }
}
