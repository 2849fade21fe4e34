use std::{collections::HashMap, fs, path::Path};

use unicode_normalization::UnicodeNormalization;

use crate::error::Error;

/// Every BIP39 wordlist has exactly 2^11 entries
pub(crate) const WORDLIST_SIZE: usize = 2048;

/// Bidirectional mapping between the words of one wordlist and their 11-bit index.
///
/// Words are stored NFKD-normalized, the same form `bip39` keeps its built-in lists in,
/// so lookups match regardless of how accented words were typed.
#[derive(Debug, Clone)]
pub(crate) struct WordlistIndex {
	origin: String,
	words: Vec<String>,
	indices: HashMap<String, u16>,
}

impl WordlistIndex {
	/// Reads a plain text wordlist, one word per line. Line order defines the index, starting at 0.
	pub(crate) fn load<P: AsRef<Path>>(path: P) -> Result<WordlistIndex, Error> {
		let path = path.as_ref();
		let contents = fs::read_to_string(path).map_err(|source| Error::io(path, source))?;

		WordlistIndex::from_words(path.display().to_string(), contents.lines().map(str::trim))
	}

	pub(crate) fn from_language(language: bip39::Language) -> Result<WordlistIndex, Error> {
		WordlistIndex::from_words(format!("bip39::{}", language), language.word_list().iter().copied())
	}

	pub(crate) fn from_words<'a, I: Iterator<Item = &'a str>>(origin: String, source: I) -> Result<WordlistIndex, Error> {
		let corrupted = |reason: String| Error::Integrity {
			origin: origin.clone(),
			reason,
		};

		let mut words = Vec::with_capacity(WORDLIST_SIZE);
		let mut indices = HashMap::with_capacity(WORDLIST_SIZE);

		for (line, word) in source.enumerate() {
			if word.is_empty() {
				return Err(corrupted(format!("empty word at line {}", line + 1)));
			}

			if words.len() == WORDLIST_SIZE {
				return Err(corrupted(format!("more than {} words", WORDLIST_SIZE)));
			}

			let word = normalize(word);
			if indices.insert(word.clone(), words.len() as u16).is_some() {
				return Err(corrupted(format!("duplicate word {:?} at line {}", word, line + 1)));
			}

			words.push(word);
		}

		if words.len() != WORDLIST_SIZE {
			return Err(corrupted(format!("expected {} words, found {}", WORDLIST_SIZE, words.len())));
		}

		log::debug!("Loaded {} words from {}", words.len(), origin);
		Ok(WordlistIndex { origin, words, indices })
	}

	pub(crate) fn origin(&self) -> &str {
		&self.origin
	}

	pub(crate) fn len(&self) -> usize {
		self.words.len()
	}

	pub(crate) fn words(&self) -> &[String] {
		&self.words
	}

	pub(crate) fn index_of(&self, word: &str) -> Option<u16> {
		self.indices.get(&normalize(word)).copied()
	}

	pub(crate) fn word(&self, index: u16) -> Option<&str> {
		self.words.get(index as usize).map(String::as_str)
	}

	/// Positional translation: the word at position `i` of this list stands for index `i` of `target`.
	pub(crate) fn translate(&self, word: &str, target: &WordlistIndex) -> Option<u16> {
		self.index_of(word).filter(|&index| (index as usize) < target.len())
	}

	/// Translation table of every position of this list into `target`, in list order.
	pub(crate) fn sweep_into(&self, target: &WordlistIndex) -> Vec<u16> {
		(0..self.len().min(target.len()) as u16).collect()
	}
}

pub(crate) fn normalize(word: &str) -> String {
	word.nfkd().collect()
}
