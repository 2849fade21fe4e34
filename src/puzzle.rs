//! The treasure hunt this tool was written for: 21 French words read from a book's images and
//! chapters, two English words, and a final word whose checksum-compatible alternatives are known.

use crate::{
	checksum::ChecksumEngine,
	error::Error,
	solver::{Problem, SlotGuess, Stencil},
	verifier::VerifierGate,
	wordlist::WordlistIndex,
};

pub(crate) const TARGET_ADDRESS: &str = "bc1q8zfy6wvvtskzkg4s343x42pyf363nmejspgc02";

pub(crate) const FINAL_WORD: &str = "win";

/// Final words known to complete the true prefix with a valid checksum. `pleasant` is not a BIP39 word and gets dropped.
pub(crate) const VERIFIER_WORDS: [&str; 8] = ["alien", "detect", "flip", "gas", "organ", "pleasant", "staff", "trigger"];

pub(crate) const SKELETON: [SlotGuess; 23] = [
	// picture clues
	SlotGuess::working(&["échelle"]),
	SlotGuess::working(&["libre"]),
	SlotGuess::working(&["fossile"]),
	SlotGuess::working(&["travail", "physique", "manuel"]),
	SlotGuess::working(&["manuel", "bilan", "physique"]),
	SlotGuess::working(&["bilan", "indice"]),
	SlotGuess::working(&["indice", "baguette"]),
	SlotGuess::working(&["baguette", "acheter"]),
	SlotGuess::working(&["pluie", "acheter"]),
	SlotGuess::working(&["soleil", "pluie"]),
	SlotGuess::working(&["joindre", "soleil"]),
	SlotGuess::working(&["métier", "joindre"]),
	// front cover
	SlotGuess::working(&["énergie"]),
	SlotGuess::working(&["monnaie"]),
	// olympic chapter
	SlotGuess::working(&["canal"]),
	SlotGuess::working(&["orange"]),
	// author's name
	SlotGuess::working(&["pierre"]),
	// back cover blurb
	SlotGuess::working(&["progrès", "bonheur"]),
	SlotGuess::working(&["amour", "science"]),
	// chapter headings
	SlotGuess::working(&["physique", "relatif"]),
	SlotGuess::working(&["émotion", "sortir"]),
	// phone advert, printed in English
	SlotGuess::canonical(&["open"]),
	SlotGuess::canonical(&["always"]),
];

/// Resolves the puzzle against both wordlists. Wildcards sweep the whole working list.
pub(crate) fn problem<'a>(working: &WordlistIndex, canonical: &'a WordlistIndex, target: &str) -> Result<Problem<'a>, Error> {
	let engine = ChecksumEngine::new(SKELETON.len() + 1)?;
	let stencil = Stencil::resolve(&SKELETON, working, canonical)?;
	let gate = VerifierGate::from_words(engine, &VERIFIER_WORDS, canonical)?;

	Problem::new(canonical, stencil, working.sweep_into(canonical), gate, FINAL_WORD, target.to_string())
}
