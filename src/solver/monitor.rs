use std::{
	sync::atomic::{AtomicU64, Ordering},
	time::{Duration, Instant},
};

/// Periodically logs how many candidates per second the workers get through.
///
/// Only reads the shared counter, so a stale value just skews one report.
#[derive(Debug, Clone)]
pub(crate) struct ThroughputMonitor {
	interval: Duration,
	started: Instant,
}

impl ThroughputMonitor {
	pub(crate) fn new(interval: Duration) -> ThroughputMonitor {
		ThroughputMonitor {
			interval,
			started: Instant::now(),
		}
	}

	pub(crate) fn rate(tested: u64, elapsed: Duration) -> f64 {
		match elapsed.as_secs_f64() {
			secs if secs > 0.0 => tested as f64 / secs,
			_ => 0.0,
		}
	}

	/// Blocks until `shutdown` receives a message or all its senders are dropped. Returns the number of reports logged.
	pub(crate) fn run(&self, tested: &AtomicU64, shutdown: flume::Receiver<()>) -> usize {
		let mut reports = 0;

		while let Err(flume::RecvTimeoutError::Timeout) = shutdown.recv_timeout(self.interval) {
			let tested = tested.load(Ordering::Relaxed);
			log::info!("Mnemonic/s: {:.0} ({} tested)", ThroughputMonitor::rate(tested, self.started.elapsed()), tested);
			reports += 1;
		}

		reports
	}
}
