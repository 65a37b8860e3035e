//! Word-level Markov chain text generation.
//!
//! This crate builds a first-order model of word transitions from a corpus
//! and walks it to produce short pseudo-random sentences:
//! - A dictionary of distinct words with weighted successor tables
//! - A seeded, reproducible sentence generator
//! - Corpus reading and whitespace tokenization
//!
//! The two calls below cover the common case; `model` exposes the building blocks.

use rand::Rng;

/// Model construction and sentence generation.
pub mod model;

/// Corpus loading and tokenization.
pub mod io;

/// Error types.
pub mod error;

pub use error::{ConfigError, GenerateError};
pub use model::dictionary::{Dictionary, DictionaryBuilder, ReadLimit};
pub use model::generation_input::{GenerationInput, MAX_WORDS_IN_SENTENCE};
pub use model::generator::{Sentence, SentenceGenerator};
pub use model::word::{Word, WordId};

/// Builds a dictionary from a token stream, reading at most `limit` tokens.
pub fn build_dictionary<I, S>(tokens: I, limit: ReadLimit) -> Dictionary
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	Dictionary::build(tokens, limit)
}

/// Generates one sentence with the default settings.
///
/// Returns the sentence text and its word count.
pub fn generate_sentence<R: Rng + ?Sized>(
	dictionary: &Dictionary,
	rng: &mut R,
) -> Result<(String, usize), GenerateError> {
	let sentence = SentenceGenerator::new(dictionary).generate(rng)?;
	Ok((sentence.text(), sentence.len()))
}
