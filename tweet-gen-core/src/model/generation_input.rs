use crate::error::ConfigError;

/// Longest sentence the generator produces by default.
pub const MAX_WORDS_IN_SENTENCE: usize = 20;

/// Smallest accepted cap: a sentence must be able to continue past its first word.
pub const MIN_WORDS_IN_SENTENCE: usize = 2;

/// Settings for sentence generation.
///
/// # Invariants
/// - `max_words >= MIN_WORDS_IN_SENTENCE`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationInput {
	/// Maximum number of words in a sentence, the last one included.
	max_words: usize,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self { max_words: MAX_WORDS_IN_SENTENCE }
	}
}

impl GenerationInput {
	pub fn max_words(&self) -> usize {
		self.max_words
	}

	/// Sets the sentence length cap.
	///
	/// # Errors
	/// Returns an error if `max_words` is below `MIN_WORDS_IN_SENTENCE`.
	pub fn set_max_words(&mut self, max_words: usize) -> Result<(), ConfigError> {
		if max_words < MIN_WORDS_IN_SENTENCE {
			return Err(ConfigError::MaxWords { min: MIN_WORDS_IN_SENTENCE, got: max_words });
		}
		self.max_words = max_words;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_cap_is_twenty() {
		assert_eq!(GenerationInput::default().max_words(), 20);
	}

	#[test]
	fn set_max_words_validates() {
		let mut input = GenerationInput::default();
		assert!(input.set_max_words(5).is_ok());
		assert_eq!(input.max_words(), 5);

		assert_eq!(input.set_max_words(1), Err(ConfigError::MaxWords { min: 2, got: 1 }));
		assert_eq!(input.set_max_words(0), Err(ConfigError::MaxWords { min: 2, got: 0 }));
		assert_eq!(input.max_words(), 5);
	}

	#[test]
	fn config_error_message() {
		let err = ConfigError::MaxWords { min: 2, got: 1 };
		assert_eq!(err.to_string(), "max words must be at least 2, got 1");
	}
}
