use crate::{error::Error, verifier::VerifierGate, wordlist::WordlistIndex};

/// Which wordlist a slot's guesses are written in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Source {
	/// Puzzle language, translated positionally into the canonical list
	Working,
	/// Checksum language, used as is
	Canonical,
}

/// Known guesses for one mnemonic position, in order of preference.
#[derive(Debug, Copy, Clone)]
pub(crate) struct SlotGuess {
	pub(crate) source: Source,
	pub(crate) words: &'static [&'static str],
}

impl SlotGuess {
	pub(crate) const fn working(words: &'static [&'static str]) -> SlotGuess {
		SlotGuess { source: Source::Working, words }
	}

	pub(crate) const fn canonical(words: &'static [&'static str]) -> SlotGuess {
		SlotGuess { source: Source::Canonical, words }
	}
}

/// Sweep-eligible slots, each resolved to the canonical indices of its guesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Stencil {
	pub(crate) slots: Vec<Vec<u16>>,
}

impl Stencil {
	pub(crate) fn resolve(guesses: &[SlotGuess], working: &WordlistIndex, canonical: &WordlistIndex) -> Result<Stencil, Error> {
		let mut slots = Vec::with_capacity(guesses.len());

		for (slot, guess) in guesses.iter().enumerate() {
			let mut indices = Vec::with_capacity(guess.words.len());

			for &word in guess.words {
				let index = match guess.source {
					Source::Working => working.translate(word, canonical),
					Source::Canonical => canonical.index_of(word),
				};

				match index {
					Some(index) if !indices.contains(&index) => indices.push(index),
					Some(_) => {}
					None => {
						return Err(Error::UnknownWord {
							slot,
							word: word.to_string(),
						})
					}
				}
			}

			if indices.is_empty() {
				return Err(Error::InvalidConfig(format!("slot {} has no guesses", slot)));
			}

			slots.push(indices);
		}

		Ok(Stencil { slots })
	}

	pub(crate) fn len(&self) -> usize {
		self.slots.len()
	}
}

/// Everything a search needs, built once and shared read-only by all workers.
#[derive(Debug)]
pub(crate) struct Problem<'a> {
	pub(crate) canonical: &'a WordlistIndex,
	pub(crate) stencil: Stencil,
	/// Canonical indices each wildcard slot ranges over
	pub(crate) sweep: Vec<u16>,
	pub(crate) gate: VerifierGate,
	pub(crate) final_word: String,
	pub(crate) target: String,
}

impl<'a> Problem<'a> {
	pub(crate) fn new(canonical: &'a WordlistIndex, stencil: Stencil, sweep: Vec<u16>, gate: VerifierGate, final_word: &str, target: String) -> Result<Problem<'a>, Error> {
		if stencil.len() + 1 != gate.engine().words() {
			return Err(Error::MnemonicLength(stencil.len() + 1));
		}

		if sweep.is_empty() || sweep.iter().any(|&index| index as usize >= canonical.len()) {
			return Err(Error::InvalidConfig("sweep must be a non-empty set of canonical indices".into()));
		}

		if let Some(wildcard) = super::enumerator::Enumerator::new(&stencil.slots, &sweep, super::WILDCARDS).oversized() {
			return Err(Error::InvalidConfig(format!("too many guesses, sweeping slots {:?} exceeds 2^64 candidates", wildcard)));
		}

		let final_word = canonical
			.index_of(final_word)
			.and_then(|index| canonical.word(index))
			.ok_or_else(|| Error::UnknownWord {
				slot: stencil.len(),
				word: final_word.to_string(),
			})?
			.to_string();

		Ok(Problem {
			canonical,
			stencil,
			sweep,
			gate,
			final_word,
			target,
		})
	}

	/// Space separated mnemonic made of `prefix` and the fixed final word.
	pub(crate) fn phrase(&self, prefix: &[u16]) -> String {
		let words = self.canonical.words();

		prefix
			.iter()
			.map(|&index| words[index as usize].as_str())
			.chain(std::iter::once(self.final_word.as_str()))
			.collect::<Vec<_>>()
			.join(" ")
	}
}
