mod checksum;
mod error;
mod oracle;
mod puzzle;
mod solver;
mod utils;
mod verifier;
mod wordlist;

#[cfg(test)]
mod tests;

use std::{path::PathBuf, process::ExitCode, time::Duration};

#[derive(Debug, argh::FromArgs)]
/// Recovers a partially known BIP39 mnemonic by sweeping two word positions at a time over the whole wordlist
pub(crate) struct Config {
	/// wordlist used for checksum arithmetic and address derivation, defaults to the built-in BIP39 English list
	#[argh(option, short = 'c')]
	canonical: Option<PathBuf>,
	/// wordlist the puzzle words are written in, defaults to the built-in BIP39 French list
	#[argh(option, short = 'w')]
	working: Option<PathBuf>,
	/// address the recovered mnemonic must derive at m/84'/0'/0'/0/0
	#[argh(option, short = 'a', default = "String::from(puzzle::TARGET_ADDRESS)")]
	address: String,
	/// number of worker threads, defaults to the available parallelism
	#[argh(option, short = 't', default = "utils::default_threads()")]
	threads: usize,
	/// seconds between throughput reports
	#[argh(option, short = 'i', default = "10")]
	interval: u64,
	/// file recording searched wildcard positions, allows resuming an interrupted search
	#[argh(option, short = 'k')]
	checkpoint: Option<PathBuf>,
}

fn main() -> ExitCode {
	if let Err(err) = simple_logger::SimpleLogger::new().with_level(log::LevelFilter::Info).env().init() {
		eprintln!("Unable to initialize logger: {}", err);
	}

	let config: Config = argh::from_env();

	match run(&config) {
		Ok(report) => {
			match &report.outcome {
				solver::Outcome::Cancelled => log::warn!("{}", report.outcome),
				outcome => log::info!("{}", outcome),
			}

			log::info!(
				"Total mnemonic tested: {} in {:.1?} ({} passed the verifier gate, {} derivation failures)",
				report.tested,
				report.elapsed,
				report.passed,
				report.derivation_failures
			);

			ExitCode::SUCCESS
		}
		Err(err) => {
			log::error!("{}", err);
			ExitCode::FAILURE
		}
	}
}

fn run(config: &Config) -> Result<solver::Report, error::Error> {
	utils::verify_config(config)?;

	let canonical = match &config.canonical {
		Some(path) => wordlist::WordlistIndex::load(path)?,
		None => wordlist::WordlistIndex::from_language(bip39::Language::English)?,
	};

	let working = match &config.working {
		Some(path) => wordlist::WordlistIndex::load(path)?,
		None => wordlist::WordlistIndex::from_language(bip39::Language::French)?,
	};

	log::info!("Canonical wordlist: {}, working wordlist: {}", canonical.origin(), working.origin());

	let problem = puzzle::problem(&working, &canonical, &config.address)?;
	let oracle = oracle::Bip84Oracle::new()?;

	let checkpoint = match &config.checkpoint {
		Some(path) => Some(solver::checkpoint::Checkpoint::open(path, problem.stencil.len(), solver::WILDCARDS)?),
		None => None,
	};

	let options = solver::Options {
		threads: config.threads,
		interval: Duration::from_secs(config.interval),
		checkpoint,
		cancel: solver::CancelToken::default(),
	};

	solver::solve(&problem, &oracle, options)
}
