use std::str::FromStr;

use bitcoin::{
	bip32::{DerivationPath, Xpriv, Xpub},
	secp256k1::{All, Secp256k1},
	Address, Network,
};

use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;

use crate::error::Error;

/// First external receiving address of the first BIP84 account
pub(crate) const BIP84_RECEIVE_PATH: &str = "m/84'/0'/0'/0/0";

const SEED_SALT: &[u8] = b"mnemonic";
const SEED_ROUNDS: u32 = 2048;

/// Expensive mapping from a full mnemonic phrase to a wallet address.
pub(crate) trait AddressOracle {
	fn derive_address(&self, phrase: &str) -> Result<String, Error>;
}

/// Native SegWit (P2WPKH, bech32) address derivation.
pub(crate) struct Bip84Oracle {
	secp: Secp256k1<All>,
	path: DerivationPath,
	network: Network,
}

impl Bip84Oracle {
	pub(crate) fn new() -> Result<Bip84Oracle, Error> {
		let path = DerivationPath::from_str(BIP84_RECEIVE_PATH).map_err(|err| Error::Derivation(err.to_string()))?;

		Ok(Bip84Oracle {
			secp: Secp256k1::new(),
			path,
			network: Network::Bitcoin,
		})
	}

	/// BIP39 seed of `phrase` with an empty passphrase: PBKDF2-HMAC-SHA512 over the NFKD phrase, salt `mnemonic`.
	///
	/// Works for phrases in any wordlist. Neither the words nor the checksum are checked here.
	pub(crate) fn seed(phrase: &str) -> [u8; 64] {
		let phrase = phrase.nfkd().collect::<String>();
		pbkdf2::pbkdf2_hmac_array::<Sha512, 64>(phrase.as_bytes(), SEED_SALT, SEED_ROUNDS)
	}
}

impl AddressOracle for Bip84Oracle {
	fn derive_address(&self, phrase: &str) -> Result<String, Error> {
		let seed = Bip84Oracle::seed(phrase);

		let master = Xpriv::new_master(self.network, &seed).map_err(|err| Error::Derivation(err.to_string()))?;
		let child = master.derive_priv(&self.secp, &self.path).map_err(|err| Error::Derivation(err.to_string()))?;
		let public_key = Xpub::from_priv(&self.secp, &child).to_pub();

		Ok(Address::p2wpkh(&public_key, self.network).to_string())
	}
}
