use std::{
	collections::BTreeSet,
	fs,
	path::{Path, PathBuf},
};

use crate::error::Error;

/// Persisted search progress: the problem shape and every fully searched wildcard choice.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub(crate) struct CheckpointState {
	pub(crate) slots: usize,
	pub(crate) wildcards: usize,
	pub(crate) completed: BTreeSet<Vec<usize>>,
}

/// JSON checkpoint file, rewritten through a temporary file on every record so a crash never leaves it half written.
#[derive(Debug)]
pub(crate) struct Checkpoint {
	path: PathBuf,
	state: CheckpointState,
}

impl Checkpoint {
	pub(crate) fn open<P: AsRef<Path>>(path: P, slots: usize, wildcards: usize) -> Result<Checkpoint, Error> {
		let path = path.as_ref().to_path_buf();
		let invalid = |reason: String| Error::Checkpoint { path: path.clone(), reason };

		if !path.exists() {
			let checkpoint = Checkpoint {
				state: CheckpointState {
					slots,
					wildcards,
					completed: BTreeSet::new(),
				},
				path,
			};

			checkpoint.save()?;
			log::info!("Created checkpoint {}", checkpoint.path.display());
			return Ok(checkpoint);
		}

		let contents = fs::read_to_string(&path).map_err(|source| Error::io(&path, source))?;
		let state: CheckpointState = serde_json::from_str(&contents).map_err(|err| invalid(err.to_string()))?;

		if (state.slots, state.wildcards) != (slots, wildcards) {
			return Err(invalid(format!(
				"recorded for {} slots and {} wildcards, expected {} and {}",
				state.slots, state.wildcards, slots, wildcards
			)));
		}

		let malformed = state
			.completed
			.iter()
			.find(|wildcard| wildcard.len() != wildcards || wildcard.windows(2).any(|w| w[0] >= w[1]) || wildcard.iter().any(|&slot| slot >= slots));

		if let Some(wildcard) = malformed {
			return Err(invalid(format!("unexpected entry {:?}", wildcard)));
		}

		log::info!("Checkpoint {}: {} wildcard choices already searched", path.display(), state.completed.len());
		Ok(Checkpoint { path, state })
	}

	pub(crate) fn is_complete(&self, wildcard: &[usize]) -> bool {
		self.state.completed.contains(wildcard)
	}

	pub(crate) fn completed(&self) -> usize {
		self.state.completed.len()
	}

	pub(crate) fn record(&mut self, wildcard: &[usize]) -> Result<(), Error> {
		if self.state.completed.insert(wildcard.to_vec()) {
			self.save()?;
		}

		Ok(())
	}

	fn temporary(&self) -> PathBuf {
		let mut name = self.path.file_name().unwrap_or_default().to_os_string();
		name.push(".tmp");
		self.path.with_file_name(name)
	}

	/// Writes the whole state next to the checkpoint, then renames it over the old file.
	fn save(&self) -> Result<(), Error> {
		let temporary = self.temporary();
		let json = serde_json::to_string_pretty(&self.state).map_err(|err| Error::Checkpoint {
			path: self.path.clone(),
			reason: err.to_string(),
		})?;

		fs::write(&temporary, json).map_err(|source| Error::io(&temporary, source))?;
		fs::rename(&temporary, &self.path).map_err(|source| Error::io(&self.path, source))
	}
}
