use serde::Serialize;

use super::dictionary::Dictionary;

/// Serializable, read-only view of a `Dictionary`.
///
/// Successor ids are resolved to their text so the output is readable on its
/// own. Words and successors keep insertion order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DictionarySnapshot<'a> {
	pub tokens_read: usize,
	pub words: Vec<WordSnapshot<'a>>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WordSnapshot<'a> {
	pub text: &'a str,
	pub occurrences: usize,
	pub successors: Vec<SuccessorSnapshot<'a>>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SuccessorSnapshot<'a> {
	pub text: &'a str,
	pub weight: usize,
}

impl Dictionary {
	pub fn snapshot(&self) -> DictionarySnapshot<'_> {
		let words = self
			.iter()
			.map(|(_, word)| WordSnapshot {
				text: word.text(),
				occurrences: word.occurrences(),
				successors: word
					.successors()
					.iter()
					.filter_map(|s| {
						self.get(s.word).map(|next| SuccessorSnapshot { text: next.text(), weight: s.weight })
					})
					.collect(),
			})
			.collect();

		DictionarySnapshot { tokens_read: self.tokens_read(), words }
	}
}

#[cfg(test)]
mod tests {
	use crate::model::dictionary::{Dictionary, ReadLimit};

	#[test]
	fn snapshot_serializes_in_insertion_order() {
		let dictionary = Dictionary::build("hi there. hi you".split_whitespace(), ReadLimit::Unbounded);
		let json = serde_json::to_value(dictionary.snapshot()).unwrap();

		assert_eq!(
			json,
			serde_json::json!({
				"tokens_read": 4,
				"words": [
					{ "text": "hi", "occurrences": 2, "successors": [
						{ "text": "there.", "weight": 1 },
						{ "text": "you", "weight": 1 }
					] },
					{ "text": "there.", "occurrences": 1, "successors": [] },
					{ "text": "you", "occurrences": 1, "successors": [] }
				]
			})
		);
	}
}
