#![deny(missing_docs)]

//! Markov chain sampler generating braidreps from a starting braid word.

/// Braidreps and trial logs collected by the chain.
pub mod aggregate;
/// YAML configuration schema and defaults.
pub mod config;
/// CSV, TXT and JSON exporters.
pub mod export;
/// Canonical hashing of aggregates.
pub mod hash;
/// Markov chain engine and the configured `run` entry point.
pub mod kernel;
/// Trial logs and step outcomes.
pub mod log;
/// Run manifest serialization helpers.
pub mod manifest;
/// Per-move acceptance statistics.
pub mod metrics;
/// Move kinds and parameterised moves.
pub mod moves;

pub use aggregate::Aggregate;
pub use config::{ExportFormat, OutputConfig, RunConfig, SeedPolicy};
pub use hash::canonical_hash;
pub use kernel::{run, MarkovChain, RunSummary, WordSource};
pub use log::{log_message, StepOutcome, TrialLog, UNKNOT_MARKER};
pub use manifest::RunManifest;
pub use metrics::{MoveCounter, MoveStats};
pub use moves::{Move, MoveKind};
