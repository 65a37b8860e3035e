use std::fmt;

use log::trace;
use rand::Rng;

use crate::error::GenerateError;
use crate::model::dictionary::Dictionary;
use crate::model::generation_input::GenerationInput;
use crate::model::word::Word;

/// A generated sentence, borrowing its words from the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
	words: Vec<&'a str>,
}

impl<'a> Sentence<'a> {
	/// Number of words in the sentence.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	pub fn words(&self) -> &[&'a str] {
		&self.words
	}

	/// Words joined by single spaces.
	pub fn text(&self) -> String {
		self.words.join(" ")
	}
}

impl fmt::Display for Sentence<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut words = self.words.iter();
		if let Some(first) = words.next() {
			f.write_str(first)?;
			for word in words {
				write!(f, " {word}")?;
			}
		}
		Ok(())
	}
}

/// Random walk over a finished `Dictionary`.
///
/// # Responsibilities
/// - Pick a uniformly random start word that is not a terminator
/// - Follow successors proportionally to their observed weights
/// - Stop on a terminator or once `max_words` words were emitted
///
/// The dictionary is only borrowed immutably, so several generators can share
/// it. All randomness comes from the caller's `rng`.
#[derive(Debug, Clone, Copy)]
pub struct SentenceGenerator<'a> {
	dictionary: &'a Dictionary,
	input: GenerationInput,
}

impl<'a> SentenceGenerator<'a> {
	/// Creates a generator with the default settings (20 words max).
	pub fn new(dictionary: &'a Dictionary) -> Self {
		Self::with_input(dictionary, GenerationInput::default())
	}

	pub fn with_input(dictionary: &'a Dictionary, input: GenerationInput) -> Self {
		Self { dictionary, input }
	}

	pub fn input(&self) -> &GenerationInput {
		&self.input
	}

	/// Generates one sentence.
	///
	/// # Errors
	/// Returns `GenerateError::EmptyDictionary` if there is no word to start from.
	///
	/// # Notes
	/// - The sentence has at least 2 words unless the dictionary holds no
	///   word with a successor, in which case a single random word is returned.
	/// - The last word is emitted even when it still has successors.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Sentence<'a>, GenerateError> {
		let max_words = self.input.max_words();
		let mut current = self.pick_start(rng)?;
		let mut words = Vec::with_capacity(max_words);

		loop {
			words.push(current.text());
			if current.is_terminator() || words.len() >= max_words {
				break;
			}
			match self.pick_next(current, rng) {
				Some(next) => current = next,
				None => break,
			}
		}

		Ok(Sentence { words })
	}

	/// Draws uniformly random words until one with successors comes up.
	///
	/// If no such word exists, the first draw is returned as is rather than
	/// retrying forever.
	fn pick_start<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&'a Word, GenerateError> {
		let dictionary = self.dictionary;
		let size = dictionary.len();
		if size == 0 {
			return Err(GenerateError::EmptyDictionary);
		}

		if dictionary.starter_count() == 0 {
			trace!("no word with successors, starting on a terminator");
			return dictionary
				.word_at(rng.random_range(0..size))
				.ok_or(GenerateError::EmptyDictionary);
		}

		let mut redraws = 0usize;
		loop {
			if let Some(word) = dictionary.word_at(rng.random_range(0..size)) {
				if !word.is_terminator() {
					trace!("start word {:?} after {} redraws", word.text(), redraws);
					return Ok(word);
				}
			}
			redraws += 1;
		}
	}

	/// Weighted choice among the successors of `word`.
	fn pick_next<R: Rng + ?Sized>(&self, word: &Word, rng: &mut R) -> Option<&'a Word> {
		let total = word.total_weight();
		if total == 0 {
			return None;
		}
		let draw = rng.random_range(0..total);
		word.pick_successor(draw).and_then(|id| self.dictionary.get(id))
	}
}
