use std::str::FromStr;

use bitcoin::{address::NetworkUnchecked, Address, Network};

use super::*;

pub(super) fn verify_config(config: &Config) -> Result<(), error::Error> {
	if config.threads == 0 {
		return Err(error::Error::InvalidConfig("at least one worker thread is required".into()));
	}

	if config.interval == 0 {
		return Err(error::Error::InvalidConfig("report interval must be at least one second".into()));
	}

	if let Some(path) = config.checkpoint.as_ref().filter(|p| p.is_dir()) {
		return Err(error::Error::InvalidConfig(format!("checkpoint {} is a directory", path.display())));
	}

	// target must be a mainnet address, otherwise no derived address can ever match
	Address::<NetworkUnchecked>::from_str(&config.address)
		.map_err(|err| error::Error::InvalidConfig(format!("target address {}: {}", config.address, err)))?
		.require_network(Network::Bitcoin)
		.map_err(|err| error::Error::InvalidConfig(format!("target address {}: {}", config.address, err)))?;

	log::info!("Verified Config and Target Address {}", config.address);
	Ok(())
}

pub(super) fn default_threads() -> usize {
	std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}
