//! Word-level Markov model and sentence generation.
//!
//! - Words and their weighted successor tables (`Word`)
//! - Single-pass model construction from a token stream (`Dictionary`)
//! - Generation settings (`GenerationInput`)
//! - Weighted random walk producing sentences (`SentenceGenerator`)
//! - Serializable view of a built model (`DictionarySnapshot`)

/// A distinct corpus word with its successor weights.
pub mod word;

/// Insertion-ordered set of words and its builder.
///
/// Handles token ingestion, read limits and transition counting.
pub mod dictionary;

/// Sentence length settings.
pub mod generation_input;

/// Sentence generation over a finished dictionary.
pub mod generator;

/// Read-only serializable view of a dictionary, for inspection.
pub mod snapshot;
