use sha2::{Digest, Sha256};

use crate::aggregate::Aggregate;

/// Computes the canonical SHA-256 hash of an aggregate.
///
/// Two runs with the same seed, word, bounds and trial sizes hash equally.
pub fn canonical_hash(aggregate: &Aggregate) -> String {
    let mut hasher = Sha256::new();
    hasher.update((aggregate.braidreps.len() as u64).to_le_bytes());
    for word in &aggregate.braidreps {
        hasher.update((word.len() as u64).to_le_bytes());
        for letter in word.elements() {
            hasher.update(letter.to_le_bytes());
        }
    }
    hasher.update((aggregate.logs.len() as u64).to_le_bytes());
    for log in &aggregate.logs {
        hasher.update((log.len() as u64).to_le_bytes());
        for (step, message) in log.iter() {
            hasher.update((step as u64).to_le_bytes());
            hasher.update((message.len() as u64).to_le_bytes());
            hasher.update(message.as_bytes());
        }
    }
    format!("{:x}", hasher.finalize())
}
