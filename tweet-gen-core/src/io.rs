use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads a whole text corpus into memory.
///
/// # Errors
/// Fails if the file cannot be opened or is not valid UTF-8.
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Splits a corpus into whitespace-separated tokens.
///
/// Empty tokens never appear, whatever the mix of spaces, tabs and newlines.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
	text.split_whitespace()
}
