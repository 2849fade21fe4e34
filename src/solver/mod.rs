use std::{
	sync::{
		atomic::{AtomicBool, AtomicU64, Ordering},
		Arc,
	},
	thread,
	time::{Duration, Instant},
};

use crate::{error::Error, oracle::AddressOracle};

pub(crate) mod checkpoint;
pub(crate) mod enumerator;
pub(crate) mod monitor;
pub(crate) mod types;

pub(crate) use types::{Problem, SlotGuess, Stencil};

/// Number of slots swept over the full wordlist at once
pub(crate) const WILDCARDS: usize = 2;

/// Candidates per job. A full pair (2048²) splits into 4 jobs.
pub(crate) const JOB_SIZE: u64 = 1 << 20; // 2 ^ 20

/// Local counts are published to the shared counter this often
const COUNTER_FLUSH: u64 = 1 << 12; // 2 ^ 12

/// Shared stop flag. Set by the search itself on a match, or by whoever holds a clone.
#[derive(Debug, Clone, Default)]
pub(crate) struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
	pub(crate) fn cancel(&self) {
		self.0.store(true, Ordering::Relaxed);
	}

	#[inline]
	pub(crate) fn is_cancelled(&self) -> bool {
		self.0.load(Ordering::Relaxed)
	}
}

#[derive(Debug)]
pub(crate) struct Options {
	pub(crate) threads: usize,
	pub(crate) interval: Duration,
	pub(crate) checkpoint: Option<checkpoint::Checkpoint>,
	pub(crate) cancel: CancelToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
	Found { mnemonic: String },
	/// Every candidate was tested without a match
	Exhausted,
	Cancelled,
}

impl std::fmt::Display for Outcome {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Outcome::Found { mnemonic } => write!(f, "Found the exact mnemonic! {}", mnemonic),
			Outcome::Exhausted => write!(f, "Not found in this search space"),
			Outcome::Cancelled => write!(f, "Search cancelled before completion"),
		}
	}
}

#[derive(Debug, Clone)]
pub(crate) struct Report {
	pub(crate) outcome: Outcome,
	pub(crate) tested: u64,
	/// Candidates that passed the verifier gate
	pub(crate) passed: u64,
	pub(crate) derivation_failures: u64,
	pub(crate) elapsed: Duration,
}

/// Slice of one wildcard choice's space. `pair` indexes the pending wildcard choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Job {
	pub(crate) pair: usize,
	pub(crate) start: u64,
	pub(crate) end: u64,
}

/// Lazily splits every pending wildcard choice into jobs of at most [`JOB_SIZE`] candidates. Empty spaces still get one empty job.
#[derive(Debug, Clone)]
pub(crate) struct Jobs<'a> {
	lens: &'a [u64],
	pair: usize,
	start: u64,
}

impl<'a> Jobs<'a> {
	pub(crate) fn new(lens: &'a [u64]) -> Jobs<'a> {
		Jobs { lens, pair: 0, start: 0 }
	}

	pub(crate) fn chunks(len: u64) -> u64 {
		len.div_ceil(JOB_SIZE).max(1)
	}
}

impl Iterator for Jobs<'_> {
	type Item = Job;

	fn next(&mut self) -> Option<Job> {
		let &len = self.lens.get(self.pair)?;
		let end = self.start.saturating_add(JOB_SIZE).min(len);

		let job = Job {
			pair: self.pair,
			start: self.start,
			end,
		};

		if end >= len {
			self.pair += 1;
			self.start = 0;
		} else {
			self.start = end;
		}

		Some(job)
	}
}

/// Queue between the job producer and the workers. Holds at most two jobs per worker.
pub(crate) fn job_queue(threads: usize) -> (flume::Sender<Job>, flume::Receiver<Job>) {
	flume::bounded(threads.max(1) * 2)
}

#[derive(Debug)]
enum Event {
	Passed,
	DerivationFailed,
	Found(String),
	JobDone(usize),
}

/// Searches every wildcard choice of `problem`, stopping at the first mnemonic whose address matches the target.
pub(crate) fn solve<O: AddressOracle + Sync>(problem: &Problem, oracle: &O, options: Options) -> Result<Report, Error> {
	let Options {
		threads,
		interval,
		mut checkpoint,
		cancel,
	} = options;

	let started = Instant::now();
	let enumerator = enumerator::Enumerator::new(&problem.stencil.slots, &problem.sweep, WILDCARDS);

	// pending wildcard choices, jobs are produced lazily once the workers run
	let wildcards = enumerator
		.pairs()
		.filter(|wildcard| !checkpoint.as_ref().is_some_and(|c| c.is_complete(wildcard)))
		.collect::<Vec<_>>();

	let lens = wildcards.iter().map(|wildcard| enumerator.space(wildcard).len()).collect::<Vec<_>>();
	let mut pending = lens.iter().map(|&len| Jobs::chunks(len)).collect::<Vec<_>>();

	if let Some(checkpoint) = &checkpoint {
		log::info!("Skipping {} wildcard choices recorded in the checkpoint", checkpoint.completed());
	}

	log::info!(
		"Searching {} of {} wildcard choices ({} slots, {} wildcards, {} verifier words, {} candidates in total) on {} threads",
		wildcards.len(),
		enumerator::binomial(enumerator.slots(), enumerator.wildcards()),
		enumerator.slots(),
		enumerator.wildcards(),
		problem.gate.verifiers().len(),
		enumerator.total(),
		threads
	);

	let tested = AtomicU64::new(0);
	let (event_sender, event_receiver) = flume::unbounded();
	let (shutdown_sender, shutdown_receiver) = flume::bounded::<()>(1);
	let monitor = monitor::ThroughputMonitor::new(interval);

	let mut found = None;
	let mut passed = 0;
	let mut derivation_failures = 0;
	let mut failure = None;

	thread::scope(|scope| {
		scope.spawn(|| monitor.run(&tested, shutdown_receiver));

		let (job_sender, job_receiver) = job_queue(threads);
		let (lens, cancel_producer) = (&lens, &cancel);

		// blocks while the queue is full, stops once cancelled or once every worker is gone
		scope.spawn(move || {
			for job in Jobs::new(lens) {
				if cancel_producer.is_cancelled() || job_sender.send(job).is_err() {
					return;
				}
			}
		});

		for _ in 0..threads.max(1) {
			let (jobs, events) = (job_receiver.clone(), event_sender.clone());
			let (enumerator, wildcards, tested, cancel) = (&enumerator, &wildcards, &tested, &cancel);

			scope.spawn(move || search(problem, enumerator, wildcards, oracle, jobs, events, tested, cancel));
		}

		// workers hold the remaining senders and receivers, iteration ends once they all exit
		drop((job_receiver, event_sender));

		for event in event_receiver.iter() {
			match event {
				Event::Passed => passed += 1,
				Event::DerivationFailed => derivation_failures += 1,
				Event::Found(mnemonic) => {
					cancel.cancel();
					found.get_or_insert(mnemonic);
				}
				Event::JobDone(pair) => {
					pending[pair] -= 1;

					if pending[pair] == 0 {
						log::debug!("Searched wildcard slots {:?}", wildcards[pair]);

						if let Some(Err(err)) = checkpoint.as_mut().map(|c| c.record(&wildcards[pair])) {
							log::error!("{}", err);
							cancel.cancel();
							failure.get_or_insert(err);
						}
					}
				}
			}
		}

		let _ = shutdown_sender.send(());
	});

	if let Some(err) = failure {
		return Err(err);
	}

	let outcome = match found {
		Some(mnemonic) => Outcome::Found { mnemonic },
		None if cancel.is_cancelled() => Outcome::Cancelled,
		None => Outcome::Exhausted,
	};

	Ok(Report {
		outcome,
		tested: tested.load(Ordering::Relaxed),
		passed,
		derivation_failures,
		elapsed: started.elapsed(),
	})
}

/// Worker loop: pulls jobs until the queue drains or the search is cancelled. Owns its scratch buffers.
#[allow(clippy::too_many_arguments)]
fn search<O: AddressOracle>(
	problem: &Problem,
	enumerator: &enumerator::Enumerator,
	wildcards: &[Vec<usize>],
	oracle: &O,
	jobs: flume::Receiver<Job>,
	events: flume::Sender<Event>,
	tested: &AtomicU64,
	cancel: &CancelToken,
) {
	let mut scratch = problem.gate.scratch();
	let mut prefix = vec![0u16; enumerator.slots()];

	for job in jobs.iter() {
		if cancel.is_cancelled() {
			return;
		}

		let space = enumerator.space(&wildcards[job.pair]);
		let mut odometer = space.odometer_at(job.start);
		let mut remaining = job.end - job.start;
		let mut unflushed = 0;

		while remaining > 0 && !odometer.is_exhausted() {
			if cancel.is_cancelled() {
				tested.fetch_add(unflushed, Ordering::Relaxed);
				return;
			}

			space.fill(&odometer, &mut prefix);

			if problem.gate.all_verifiers_agree(&prefix, &mut scratch) {
				verify(problem, oracle, &prefix, &events, cancel);
			}

			unflushed += 1;
			if unflushed == COUNTER_FLUSH {
				tested.fetch_add(unflushed, Ordering::Relaxed);
				unflushed = 0;
			}

			remaining -= 1;
			space.advance(&mut odometer);
		}

		tested.fetch_add(unflushed, Ordering::Relaxed);
		let _ = events.send(Event::JobDone(job.pair));
	}
}

/// Slow path for prefixes that passed the gate: derive the address and compare it to the target.
fn verify<O: AddressOracle>(problem: &Problem, oracle: &O, prefix: &[u16], events: &flume::Sender<Event>, cancel: &CancelToken) {
	let mnemonic = problem.phrase(prefix);

	if !problem.gate.confirm(prefix) {
		log::error!("Checksum paths disagree on {}, skipping candidate", mnemonic);
		return;
	}

	log::info!("Mnemonic is valid with {} verifier words: {}", problem.gate.verifiers().len(), mnemonic);
	let _ = events.send(Event::Passed);

	match oracle.derive_address(&mnemonic) {
		Ok(address) if address == problem.target => {
			log::debug!("Derived target address {} from {}", address, mnemonic);
			cancel.cancel();
			let _ = events.send(Event::Found(mnemonic));
		}
		Ok(address) => log::debug!("Derived {}, not the target", address),
		Err(err) => {
			log::warn!("{}, skipping candidate", err);
			let _ = events.send(Event::DerivationFailed);
		}
	}
}
