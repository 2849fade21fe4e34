/// Lexicographic `k`-combinations of `0..n`.
#[derive(Debug, Clone)]
pub(crate) struct Combinations {
	n: usize,
	current: Vec<usize>,
	done: bool,
}

impl Combinations {
	pub(crate) fn new(n: usize, k: usize) -> Combinations {
		Combinations {
			n,
			current: (0..k).collect(),
			done: k > n,
		}
	}
}

impl Iterator for Combinations {
	type Item = Vec<usize>;

	fn next(&mut self) -> Option<Vec<usize>> {
		if self.done {
			return None;
		}

		let item = self.current.clone();
		let k = self.current.len();

		// bump the rightmost position that still has room, reset everything after it
		match (0..k).rev().find(|&i| self.current[i] < self.n - k + i) {
			Some(i) => {
				self.current[i] += 1;
				for j in i + 1..k {
					self.current[j] = self.current[j - 1] + 1;
				}
			}
			None => self.done = true,
		}

		Some(item)
	}
}

pub(crate) fn binomial(n: usize, k: usize) -> u64 {
	if k > n {
		return 0;
	}

	(0..k.min(n - k)).fold(1u64, |acc, i| acc * (n - i) as u64 / (i + 1) as u64)
}

/// Walks every choice of wildcard slots, sweeping them over the full wordlist while the other slots keep their guesses.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Enumerator<'a> {
	slots: &'a [Vec<u16>],
	sweep: &'a [u16],
	wildcards: usize,
}

impl<'a> Enumerator<'a> {
	pub(crate) fn new(slots: &'a [Vec<u16>], sweep: &'a [u16], wildcards: usize) -> Enumerator<'a> {
		Enumerator { slots, sweep, wildcards }
	}

	pub(crate) fn slots(&self) -> usize {
		self.slots.len()
	}

	pub(crate) fn wildcards(&self) -> usize {
		self.wildcards
	}

	pub(crate) fn pairs(&self) -> Combinations {
		Combinations::new(self.slots.len(), self.wildcards)
	}

	/// Candidate space for one choice of wildcard slots. Known words in those slots are overwritten, never skipped.
	pub(crate) fn space(&self, wildcard: &[usize]) -> Space<'a> {
		let domains = self
			.slots
			.iter()
			.enumerate()
			.map(|(idx, slot)| if wildcard.contains(&idx) { self.sweep } else { slot.as_slice() })
			.collect();

		Space { domains }
	}

	pub(crate) fn total(&self) -> u128 {
		self.pairs().map(|wildcard| self.space(&wildcard).len() as u128).sum()
	}

	/// First wildcard choice whose space is too large to count in a `u64`.
	pub(crate) fn oversized(&self) -> Option<Vec<usize>> {
		self.pairs().find(|wildcard| self.space(wildcard).checked_len().is_none())
	}
}

/// Cartesian product of per-slot domains. The last slot varies fastest.
#[derive(Debug, Clone)]
pub(crate) struct Space<'a> {
	domains: Vec<&'a [u16]>,
}

/// Position inside a [`Space`], one digit per slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Odometer {
	digits: Vec<usize>,
	exhausted: bool,
}

impl Odometer {
	pub(crate) fn is_exhausted(&self) -> bool {
		self.exhausted
	}
}

impl<'a> Space<'a> {
	/// Number of candidates, `None` when it does not fit a `u64`.
	pub(crate) fn checked_len(&self) -> Option<u64> {
		self.domains.iter().try_fold(1u64, |acc, domain| acc.checked_mul(domain.len() as u64))
	}

	/// Saturates at `u64::MAX`. [`Problem::new`](super::Problem::new) rejects stencils where that happens.
	pub(crate) fn len(&self) -> u64 {
		self.checked_len().unwrap_or(u64::MAX)
	}

	/// Number of slots in every candidate
	pub(crate) fn width(&self) -> usize {
		self.domains.len()
	}

	pub(crate) fn is_empty(&self) -> bool {
		self.domains.iter().any(|domain| domain.is_empty())
	}

	pub(crate) fn odometer(&self) -> Odometer {
		Odometer {
			digits: vec![0; self.domains.len()],
			exhausted: self.is_empty(),
		}
	}

	/// Odometer positioned `ordinal` steps from the start, as if `advance` had been called that many times.
	pub(crate) fn odometer_at(&self, ordinal: u64) -> Odometer {
		if ordinal >= self.len() {
			return Odometer {
				digits: vec![0; self.domains.len()],
				exhausted: true,
			};
		}

		let mut digits = vec![0; self.domains.len()];
		let mut rest = ordinal;

		for (digit, domain) in digits.iter_mut().zip(&self.domains).rev() {
			let radix = domain.len() as u64;
			*digit = (rest % radix) as usize;
			rest /= radix;
		}

		Odometer { digits, exhausted: false }
	}

	#[inline]
	pub(crate) fn fill(&self, odometer: &Odometer, out: &mut [u16]) {
		debug_assert_eq!(out.len(), self.width(), "Output buffer of unexpected size");

		for ((slot, &digit), domain) in out.iter_mut().zip(&odometer.digits).zip(&self.domains) {
			*slot = domain[digit];
		}
	}

	/// Steps to the next candidate, returns `false` once the space is exhausted.
	#[inline]
	pub(crate) fn advance(&self, odometer: &mut Odometer) -> bool {
		if odometer.exhausted {
			return false;
		}

		for (digit, domain) in odometer.digits.iter_mut().zip(&self.domains).rev() {
			*digit += 1;

			if *digit < domain.len() {
				return true;
			}

			*digit = 0;
		}

		odometer.exhausted = true;
		false
	}
}
