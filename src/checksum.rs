use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use crate::error::Error;

pub(crate) const BITS_PER_WORD: usize = 11;
pub(crate) const WORD_MASK: u16 = (1 << BITS_PER_WORD) - 1;

/// BIP39 entropy and checksum arithmetic for mnemonics of a fixed word count.
///
/// A mnemonic of `N` words packs into `11 * N` bits: the high bits are entropy, the low
/// `N / 3` bits are the first bits of `SHA256(entropy)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ChecksumEngine {
	words: usize,
	checksum_bits: usize,
}

impl ChecksumEngine {
	pub(crate) fn new(words: usize) -> Result<ChecksumEngine, Error> {
		if !(12..=24).contains(&words) || words % 3 != 0 {
			return Err(Error::MnemonicLength(words));
		}

		Ok(ChecksumEngine {
			words,
			checksum_bits: words * BITS_PER_WORD / 33,
		})
	}

	pub(crate) fn words(&self) -> usize {
		self.words
	}

	pub(crate) fn checksum_bits(&self) -> usize {
		self.checksum_bits
	}

	pub(crate) fn entropy_bits(&self) -> usize {
		self.words * BITS_PER_WORD - self.checksum_bits
	}

	pub(crate) fn entropy_bytes(&self) -> usize {
		self.entropy_bits() / 8
	}

	/// Big-endian concatenation of the 11-bit indices, the first word being the most significant.
	pub(crate) fn pack_entropy_and_checksum(&self, indices: &[u16]) -> BigUint {
		debug_assert_eq!(indices.len(), self.words, "Packing mnemonic of unexpected length");

		indices
			.iter()
			.fold(BigUint::default(), |acc, &index| (acc << BITS_PER_WORD) | BigUint::from(index & WORD_MASK))
	}

	/// Drops the checksum bits of `packed` and compares the hash of what remains to the checksum embedded in `trailing`.
	pub(crate) fn is_checksum_valid(&self, packed: &BigUint, trailing: u16) -> bool {
		let entropy = (packed >> self.checksum_bits).to_bytes_be();
		let width = self.entropy_bytes();

		if entropy.len() > width {
			return false;
		}

		// hash at full width, leading zero bytes included
		let mut buffer = vec![0u8; width];
		buffer[width - entropy.len()..].copy_from_slice(&entropy);

		self.checksum_matches(&buffer, trailing)
	}

	/// Writes the entropy bits of `indices` into `out`, discarding the trailing checksum bits. Does not allocate.
	#[inline]
	pub(crate) fn write_entropy(&self, indices: &[u16], out: &mut [u8]) {
		debug_assert_eq!(indices.len(), self.words, "Packing mnemonic of unexpected length");
		debug_assert_eq!(out.len(), self.entropy_bytes(), "Entropy buffer of unexpected size");

		let (mut acc, mut pending, mut cursor) = (0u32, 0usize, 0usize);

		for &index in indices {
			acc = (acc << BITS_PER_WORD) | (index & WORD_MASK) as u32;
			pending += BITS_PER_WORD;

			while pending >= 8 && cursor < out.len() {
				pending -= 8;
				out[cursor] = (acc >> pending) as u8;
				cursor += 1;
			}

			acc &= (1 << pending) - 1;
		}
	}

	#[inline]
	pub(crate) fn checksum_matches(&self, entropy: &[u8], trailing: u16) -> bool {
		let digest = Sha256::digest(entropy);
		let mask = (1u16 << self.checksum_bits) - 1;

		(digest[0] >> (8 - self.checksum_bits)) as u16 == trailing & mask
	}
}
