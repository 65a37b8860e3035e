/// Character marking the end of a sentence in the corpus.
pub const FULL_STOP: char = '.';

/// Returns `true` when a token closes a sentence (ends with a full stop).
///
/// Such a word never records outgoing transitions, which makes it a
/// terminator for generation.
pub fn ends_sentence(text: &str) -> bool {
	text.ends_with(FULL_STOP)
}

/// Index of a `Word` inside the `Dictionary` that owns it.
///
/// Successor tables hold ids, never words, so every word is owned exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(pub(crate) usize);

impl WordId {
	/// Position of the word in dictionary insertion order.
	pub fn index(self) -> usize {
		self.0
	}
}

/// One outgoing edge of a word: the following word and how often it was seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Successor {
	pub word: WordId,
	pub weight: usize,
}

/// A distinct token of the corpus.
///
/// Conceptually a node of a first-order Markov chain over words, where
/// outgoing edges are weighted by their number of observations.
///
/// ## Invariants
/// - `text` never changes after creation
/// - every successor weight is strictly positive
/// - `total_weight` is the sum of all successor weights
/// - successors keep the order in which they were first observed
#[derive(Debug, Clone)]
pub struct Word {
	text: String,
	occurrences: usize,
	successors: Vec<Successor>,
	total_weight: usize,
}

impl Word {
	/// Creates a word seen once, with no successors yet.
	pub(crate) fn new(text: &str) -> Self {
		Self {
			text: text.to_owned(),
			occurrences: 1,
			successors: Vec::new(),
			total_weight: 0,
		}
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	/// How many times this word was read from the corpus.
	pub fn occurrences(&self) -> usize {
		self.occurrences
	}

	/// Outgoing transitions in first-seen order.
	pub fn successors(&self) -> &[Successor] {
		&self.successors
	}

	/// Number of times this word was immediately followed by another word.
	pub fn total_weight(&self) -> usize {
		self.total_weight
	}

	/// A terminator ends any sentence that reaches it.
	pub fn is_terminator(&self) -> bool {
		self.successors.is_empty()
	}

	pub(crate) fn record_occurrence(&mut self) {
		self.occurrences += 1;
	}

	/// Records a transition toward `next`.
	///
	/// - If `next` is already a successor, its weight is increased.
	/// - Otherwise it is appended with a weight of 1.
	pub(crate) fn add_transition(&mut self, next: WordId) {
		match self.successors.iter_mut().find(|s| s.word == next) {
			Some(successor) => successor.weight += 1,
			None => self.successors.push(Successor { word: next, weight: 1 }),
		}
		self.total_weight += 1;
	}

	/// Selects the successor matching a draw in `[0, total_weight)`.
	///
	/// Walks the table accumulating weights and returns the first successor
	/// whose running sum exceeds `draw`. Integer arithmetic only, so the same
	/// draw always yields the same word.
	///
	/// Returns `None` if the word is a terminator or `draw` is out of range.
	pub fn pick_successor(&self, draw: usize) -> Option<WordId> {
		let mut accumulated = 0;
		for successor in &self.successors {
			accumulated += successor.weight;
			if accumulated > draw {
				return Some(successor.word);
			}
		}
		None
	}
}
