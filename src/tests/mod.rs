use super::*;
use rand::{rngs::StdRng, RngCore, SeedableRng};

mod enumeration;

/// Official BIP39 vectors: (entropy, mnemonic)
const VECTORS_24: [(&str, &str); 4] = [
	(
		"0000000000000000000000000000000000000000000000000000000000000000",
		"abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art",
	),
	(
		"7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
		"legal winner thank year wave sausage worth useful legal winner thank year wave sausage worth useful legal winner thank year wave sausage worth title",
	),
	(
		"8080808080808080808080808080808080808080808080808080808080808080",
		"letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd amount doctor acoustic bless",
	),
	(
		"ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
		"zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo vote",
	),
];

fn english() -> wordlist::WordlistIndex {
	wordlist::WordlistIndex::from_language(bip39::Language::English).unwrap()
}

fn french() -> wordlist::WordlistIndex {
	wordlist::WordlistIndex::from_language(bip39::Language::French).unwrap()
}

fn indices_of(phrase: &str) -> Vec<u16> {
	let english = english();
	phrase.split_whitespace().map(|word| english.index_of(word).unwrap()).collect()
}

fn indices(mnemonic: &bip39::Mnemonic) -> Vec<u16> {
	mnemonic.word_indices().map(|idx| idx as u16).collect()
}

fn random_mnemonic(rng: &mut StdRng, words: usize) -> bip39::Mnemonic {
	let mut entropy = vec![0u8; words * 4 / 3];
	rng.fill_bytes(&mut entropy);

	bip39::Mnemonic::from_entropy(&entropy).unwrap()
}

fn phrase_of(indices: &[u16]) -> String {
	let words = bip39::Language::English.word_list();
	indices.iter().map(|&idx| words[idx as usize]).collect::<Vec<_>>().join(" ")
}

/// Every final word that completes `prefix` into a valid mnemonic, according to `bip39`
fn valid_completions(prefix: &[u16]) -> Vec<u16> {
	let prefix = phrase_of(prefix);

	(0..wordlist::WORDLIST_SIZE as u16)
		.filter(|&last| {
			let phrase = format!("{} {}", prefix, phrase_of(&[last]));
			bip39::Mnemonic::parse_in_normalized(bip39::Language::English, &phrase).is_ok()
		})
		.collect()
}
