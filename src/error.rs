use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error("Unable to access {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("Corrupted Wordlist {origin}: {reason}")]
	Integrity { origin: String, reason: String },
	#[error("Invalid Stencil: slot {slot} contains unknown word {word:?}")]
	UnknownWord { slot: usize, word: String },
	#[error("Unsupported Mnemonic Length: {0} words")]
	MnemonicLength(usize),
	#[error("Address Derivation Failed: {0}")]
	Derivation(String),
	#[error("Invalid Checkpoint {}: {reason}", .path.display())]
	Checkpoint { path: PathBuf, reason: String },
	#[error("Invalid Config: {0}")]
	InvalidConfig(String),
}

impl Error {
	pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Error {
		Error::Io { path: path.into(), source }
	}
}
