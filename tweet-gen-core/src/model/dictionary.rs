use std::collections::HashMap;

use log::debug;

use super::word::{ends_sentence, Word, WordId};

/// How many tokens the builder may consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadLimit {
	/// Read until the token source is exhausted.
	#[default]
	Unbounded,
	/// Stop after this many tokens. `Words(0)` reads nothing.
	Words(usize),
}

impl ReadLimit {
	/// `None` means unbounded.
	pub fn from_count(count: Option<usize>) -> Self {
		match count {
			Some(n) => ReadLimit::Words(n),
			None => ReadLimit::Unbounded,
		}
	}

	fn allows(self, read: usize) -> bool {
		match self {
			ReadLimit::Unbounded => true,
			ReadLimit::Words(limit) => read < limit,
		}
	}
}

/// The set of all distinct words of a corpus with their successor tables.
///
/// # Invariants
/// - No two words share the same text
/// - Words keep their insertion order, so `word_at(i)` is reproducible
/// - Every `WordId` stored in a successor table points into `words`
/// - Read-only once built: only `DictionaryBuilder` mutates it
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
	words: Vec<Word>,
	index: HashMap<String, WordId>,
	tokens_read: usize,
	starters: usize,
}

impl Dictionary {
	/// Builds a dictionary from a token stream in a single pass.
	///
	/// Consumes at most `limit` tokens; tokens beyond the limit are left
	/// in the iterator untouched.
	pub fn build<I, S>(tokens: I, limit: ReadLimit) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut builder = DictionaryBuilder::new(limit);
		let mut tokens = tokens.into_iter();
		while !builder.is_full() {
			match tokens.next() {
				Some(token) => builder.push(token.as_ref()),
				None => break,
			};
		}
		builder.finish()
	}

	/// Number of distinct words.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Number of tokens consumed while building.
	pub fn tokens_read(&self) -> usize {
		self.tokens_read
	}

	/// Number of words that have at least one successor, i.e. valid sentence starts.
	pub fn starter_count(&self) -> usize {
		self.starters
	}

	pub fn get(&self, id: WordId) -> Option<&Word> {
		self.words.get(id.0)
	}

	/// Word at a position in insertion order.
	pub fn word_at(&self, index: usize) -> Option<&Word> {
		self.words.get(index)
	}

	pub fn id_of(&self, text: &str) -> Option<WordId> {
		self.index.get(text).copied()
	}

	/// Looks a word up by exact text.
	pub fn find(&self, text: &str) -> Option<&Word> {
		self.id_of(text).and_then(|id| self.get(id))
	}

	/// Iterates over all words in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (WordId, &Word)> {
		self.words.iter().enumerate().map(|(i, word)| (WordId(i), word))
	}
}

/// Incremental, single-pass construction of a `Dictionary`.
///
/// # Behavior
/// For each token:
/// - The word is looked up by exact text; created on first sight, otherwise
///   its occurrence count is increased.
/// - If a previous token exists and does not end with a full stop, a
///   transition previous -> current is recorded.
/// - The current word becomes the previous one.
///
/// `finish` consumes the builder, so the dictionary cannot change once
/// generation starts.
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
	dictionary: Dictionary,
	limit: ReadLimit,
	previous: Option<WordId>,
}

impl DictionaryBuilder {
	pub fn new(limit: ReadLimit) -> Self {
		Self {
			dictionary: Dictionary::default(),
			limit,
			previous: None,
		}
	}

	/// `true` once the read limit has been reached.
	pub fn is_full(&self) -> bool {
		!self.limit.allows(self.dictionary.tokens_read)
	}

	/// Adds one token to the model.
	///
	/// Returns `false`, without consuming the token, if the read limit was
	/// already reached.
	pub fn push(&mut self, token: &str) -> bool {
		if self.is_full() {
			return false;
		}

		let dictionary = &mut self.dictionary;
		let current = match dictionary.index.get(token).copied() {
			Some(id) => {
				dictionary.words[id.0].record_occurrence();
				id
			}
			None => {
				let id = WordId(dictionary.words.len());
				dictionary.words.push(Word::new(token));
				dictionary.index.insert(token.to_owned(), id);
				id
			}
		};

		if let Some(previous) = self.previous {
			let word = &mut dictionary.words[previous.0];
			if !ends_sentence(word.text()) {
				if word.is_terminator() {
					dictionary.starters += 1;
				}
				word.add_transition(current);
			}
		}

		self.previous = Some(current);
		dictionary.tokens_read += 1;
		true
	}

	pub fn finish(self) -> Dictionary {
		let dictionary = self.dictionary;
		debug!(
			"dictionary built: {} tokens read, {} distinct words, {} sentence starters",
			dictionary.tokens_read,
			dictionary.len(),
			dictionary.starters
		);
		dictionary
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tokens(text: &str) -> Vec<&str> {
		text.split_whitespace().collect()
	}

	#[test]
	fn words_are_deduplicated_in_insertion_order() {
		let dictionary = Dictionary::build(tokens("b a b c a b"), ReadLimit::Unbounded);

		let texts: Vec<_> = dictionary.iter().map(|(_, w)| w.text()).collect();
		assert_eq!(texts, ["b", "a", "c"]);
		assert_eq!(dictionary.find("b").map(Word::occurrences), Some(3));
		assert_eq!(dictionary.find("a").map(Word::occurrences), Some(2));
		assert_eq!(dictionary.find("c").map(Word::occurrences), Some(1));
		assert_eq!(dictionary.tokens_read(), 6);
	}

	#[test]
	fn full_stop_suppresses_outgoing_transitions_only() {
		let dictionary = Dictionary::build(tokens("go home. go away."), ReadLimit::Unbounded);

		let home = dictionary.find("home.").unwrap();
		assert!(home.is_terminator());

		// "home." -> "go" is not recorded, but "go" still receives its own edges.
		let go = dictionary.find("go").unwrap();
		assert_eq!(go.occurrences(), 2);
		assert_eq!(go.total_weight(), 2);
		assert_eq!(dictionary.starter_count(), 1);
	}

	#[test]
	fn last_token_has_no_successor() {
		let dictionary = Dictionary::build(tokens("one two three"), ReadLimit::Unbounded);
		assert!(dictionary.find("three").unwrap().is_terminator());
		assert_eq!(dictionary.starter_count(), 2);
	}

	#[test]
	fn self_transitions_are_counted() {
		let dictionary = Dictionary::build(tokens("la la la"), ReadLimit::Unbounded);
		let la = dictionary.find("la").unwrap();
		let id = dictionary.id_of("la").unwrap();
		assert_eq!(la.occurrences(), 3);
		assert_eq!(la.successors().len(), 1);
		assert_eq!(la.successors()[0].word, id);
		assert_eq!(la.successors()[0].weight, 2);
	}

	#[test]
	fn read_limit_stops_the_pass() {
		let source = tokens("a b c d e");
		let mut iter = source.iter();
		let dictionary = Dictionary::build(&mut iter, ReadLimit::Words(2));

		assert_eq!(dictionary.tokens_read(), 2);
		assert_eq!(dictionary.len(), 2);
		assert!(dictionary.find("b").unwrap().is_terminator());
		assert_eq!(iter.next(), Some(&"c"));
	}

	#[test]
	fn read_limit_larger_than_source() {
		let dictionary = Dictionary::build(tokens("a b"), ReadLimit::Words(100));
		assert_eq!(dictionary.tokens_read(), 2);
	}

	#[test]
	fn zero_limit_reads_nothing() {
		let dictionary = Dictionary::build(tokens("a b"), ReadLimit::Words(0));
		assert!(dictionary.is_empty());
		assert_eq!(dictionary.tokens_read(), 0);
	}

	#[test]
	fn builder_rejects_tokens_past_the_limit() {
		let mut builder = DictionaryBuilder::new(ReadLimit::Words(1));
		assert!(builder.push("first"));
		assert!(builder.is_full());
		assert!(!builder.push("second"));

		let dictionary = builder.finish();
		assert_eq!(dictionary.len(), 1);
		assert!(dictionary.find("second").is_none());
	}

	#[test]
	fn read_limit_from_count() {
		assert_eq!(ReadLimit::from_count(None), ReadLimit::Unbounded);
		assert_eq!(ReadLimit::from_count(Some(4)), ReadLimit::Words(4));
	}
}
