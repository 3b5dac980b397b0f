use std::fs::File;
use std::io::Read;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Result;

lazy_static! {
	// runs of Unicode punctuation or symbols, underscores excluded
	static ref PUNCTUATION: Regex = Regex::new(r"[\p{P}\p{S}--_]+").unwrap();
}

/// Reads a text file and returns its cleaned words, in order.
///
/// - Reads the entire file into memory
/// - Splits on whitespace
/// - Cleans each word with [`clean_word`], dropping the ones that clean
///   away to nothing
pub fn load_words<P: AsRef<Path>>(filename: P) -> Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents
		.split_whitespace()
		.filter_map(clean_word)
		.collect())
}

/// Lowercases a raw word and keeps only what comes before the first run
/// of punctuation or symbol characters (underscores are kept).
///
/// A word that starts with punctuation cleans away entirely and yields
/// `None`, as does an empty input.
///
/// Examples:
/// - `"Hello,"` → `Some("hello")`
/// - `"don't"` → `Some("don")`
/// - `"snake_case"` → `Some("snake_case")`
/// - `"!!word"` → `None`
pub fn clean_word(raw: &str) -> Option<String> {
	let lowered = raw.to_lowercase();
	let cleaned = PUNCTUATION.split(&lowered).next().unwrap_or("");
	if cleaned.is_empty() {
		None
	} else {
		Some(cleaned.to_owned())
	}
}
