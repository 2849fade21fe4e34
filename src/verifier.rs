use crate::{checksum::ChecksumEngine, error::Error, wordlist::WordlistIndex};

/// Per-worker buffers for the gate, reused across candidates.
#[derive(Debug, Clone)]
pub(crate) struct Scratch {
	phrase: Vec<u16>,
	entropy: Vec<u8>,
}

/// Accepts a prefix only if every known-good final word completes it into a checksum-valid mnemonic.
///
/// A random prefix validates against one specific final word with probability `2^-checksum_bits`,
/// so requiring all verifiers to agree filters almost everything before key derivation.
#[derive(Debug, Clone)]
pub(crate) struct VerifierGate {
	engine: ChecksumEngine,
	verifiers: Vec<u16>,
}

impl VerifierGate {
	pub(crate) fn new(engine: ChecksumEngine, verifiers: Vec<u16>) -> Result<VerifierGate, Error> {
		if verifiers.is_empty() {
			return Err(Error::InvalidConfig("at least one verifier word is required".into()));
		}

		Ok(VerifierGate { engine, verifiers })
	}

	/// Resolves verifier words against the canonical list. Words missing from it can never be valid completions, so they are skipped.
	pub(crate) fn from_words<S: AsRef<str>>(engine: ChecksumEngine, words: &[S], canonical: &WordlistIndex) -> Result<VerifierGate, Error> {
		let mut verifiers = Vec::with_capacity(words.len());

		for word in words.iter().map(AsRef::as_ref) {
			match canonical.index_of(word) {
				Some(index) if !verifiers.contains(&index) => verifiers.push(index),
				Some(_) => log::warn!("Duplicate verifier word {:?}, ignoring", word),
				None => log::warn!("Verifier word {:?} is not in {}, ignoring", word, canonical.origin()),
			}
		}

		VerifierGate::new(engine, verifiers)
	}

	pub(crate) fn engine(&self) -> &ChecksumEngine {
		&self.engine
	}

	pub(crate) fn verifiers(&self) -> &[u16] {
		&self.verifiers
	}

	pub(crate) fn scratch(&self) -> Scratch {
		Scratch {
			phrase: vec![0; self.engine.words()],
			entropy: vec![0; self.engine.entropy_bytes()],
		}
	}

	/// Short-circuits on the first verifier word that fails.
	#[inline]
	pub(crate) fn all_verifiers_agree(&self, prefix: &[u16], scratch: &mut Scratch) -> bool {
		debug_assert_eq!(prefix.len() + 1, self.engine.words(), "Prefix must leave exactly one slot for the verifier word");

		let last = prefix.len();
		scratch.phrase[..last].copy_from_slice(prefix);

		self.verifiers.iter().all(|&word| {
			scratch.phrase[last] = word;
			self.engine.write_entropy(&scratch.phrase, &mut scratch.entropy);
			self.engine.checksum_matches(&scratch.entropy, word)
		})
	}

	/// Same check through the big-integer path, for the rare prefixes that get past [`VerifierGate::all_verifiers_agree`].
	pub(crate) fn confirm(&self, prefix: &[u16]) -> bool {
		let mut phrase = prefix.to_vec();
		phrase.push(0);

		self.verifiers.iter().all(|&word| {
			phrase[prefix.len()] = word;
			self.engine.is_checksum_valid(&self.engine.pack_entropy_and_checksum(&phrase), word)
		})
	}
}
