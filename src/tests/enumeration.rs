use super::*;
use solver::enumerator::{binomial, Combinations, Enumerator, Space};
use std::collections::HashSet;

fn walk(space: &Space) -> Vec<Vec<u16>> {
	let mut odometer = space.odometer();
	let mut out = vec![0u16; space.width()];
	let mut candidates = Vec::new();

	while !odometer.is_exhausted() {
		space.fill(&odometer, &mut out);
		candidates.push(out.clone());
		space.advance(&mut odometer);
	}

	candidates
}

#[test]
fn enumerates_pairs_lexicographically() {
	let pairs = Combinations::new(23, 2).collect::<Vec<_>>();

	assert_eq!(pairs.len(), 253);
	assert_eq!(pairs.len() as u64, binomial(23, 2));
	assert_eq!(pairs.first(), Some(&vec![0, 1]));
	assert_eq!(pairs.last(), Some(&vec![21, 22]));
	assert!(pairs.iter().all(|p| p[0] < p[1]));
	assert!(pairs.windows(2).all(|w| w[0] < w[1]), "Pairs not in lexicographic order");
	assert_eq!(pairs.iter().collect::<HashSet<_>>().len(), pairs.len());

	assert_eq!(Combinations::new(4, 3).collect::<Vec<_>>(), vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 2, 3], vec![1, 2, 3]]);
	assert_eq!(Combinations::new(2, 3).count(), 0);
	assert_eq!(binomial(24, 12), 2_704_156);
}

#[test]
fn sweeps_exactly_l_squared_per_pair() {
	const SLOTS: usize = 6;
	const L: u16 = 7;

	// singleton known words well outside the sweep
	let slots = (0..SLOTS).map(|idx| vec![1000 + idx as u16]).collect::<Vec<_>>();
	let sweep = (0..L).collect::<Vec<_>>();
	let enumerator = Enumerator::new(&slots, &sweep, 2);

	let mut total = 0u64;

	for pair in enumerator.pairs() {
		let space = enumerator.space(&pair);
		let candidates = walk(&space);

		assert_eq!(space.len(), (L as u64).pow(2));
		assert_eq!(candidates.len() as u64, space.len(), "Wrong Candidate Count for {:?}", pair);
		assert_eq!(candidates.iter().collect::<HashSet<_>>().len(), candidates.len(), "Duplicate Candidate for {:?}", pair);

		for candidate in &candidates {
			for (idx, &word) in candidate.iter().enumerate() {
				if pair.contains(&idx) {
					assert!(word < L);
				} else {
					assert_eq!(word, slots[idx][0], "Fixed Slot {} Changed", idx);
				}
			}
		}

		total += candidates.len() as u64;
	}

	assert_eq!(total, binomial(SLOTS, 2) * (L as u64).pow(2));
	assert_eq!(enumerator.total(), total as u128);
}

#[test]
fn overwrites_known_words_including_themselves() {
	let slots = vec![vec![3], vec![1], vec![2]];
	let sweep = vec![0, 1, 2, 3];
	let enumerator = Enumerator::new(&slots, &sweep, 2);

	let candidates = walk(&enumerator.space(&[0, 1]));

	// the known words themselves are part of the sweep
	assert!(candidates.contains(&vec![3, 1, 2]));
	assert_eq!(candidates.len(), 16);
}

#[test]
fn multiplies_guess_sets() {
	let slots = vec![vec![10, 11, 12], vec![20], vec![30, 31], vec![40]];
	let sweep = (0..5).collect::<Vec<u16>>();
	let enumerator = Enumerator::new(&slots, &sweep, 2);

	assert_eq!(enumerator.space(&[1, 3]).len(), 3 * 5 * 2 * 5);
	assert_eq!(enumerator.space(&[0, 2]).len(), 5 * 5);
	assert_eq!(walk(&enumerator.space(&[1, 3])).len(), 150);

	let expected: u128 = [[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]].iter().map(|p| enumerator.space(p).len() as u128).sum();
	assert_eq!(enumerator.total(), expected);
}

#[test]
fn last_slot_varies_fastest() {
	let slots = vec![vec![1, 2], vec![3, 4]];
	let sweep = vec![0];
	let enumerator = Enumerator::new(&slots, &sweep, 0);

	assert_eq!(walk(&enumerator.space(&[])), vec![vec![1, 3], vec![1, 4], vec![2, 3], vec![2, 4]]);
}

#[test]
fn restarts_at_any_ordinal() {
	let slots = vec![vec![10, 11, 12], vec![20], vec![30, 31], vec![40]];
	let sweep = (0..5).collect::<Vec<u16>>();
	let enumerator = Enumerator::new(&slots, &sweep, 2);
	let space = enumerator.space(&[1, 3]);

	let mut odometer = space.odometer();
	for ordinal in 0..space.len() {
		assert_eq!(space.odometer_at(ordinal), odometer, "Odometer Mismatch at {}", ordinal);
		space.advance(&mut odometer);
	}

	assert!(odometer.is_exhausted());
	assert!(space.odometer_at(space.len()).is_exhausted());
	assert!(!space.advance(&mut odometer));
}

#[test]
fn walks_are_deterministic() {
	let slots = vec![vec![10, 11], vec![20], vec![30, 31, 32]];
	let sweep = (0..9).collect::<Vec<u16>>();
	let enumerator = Enumerator::new(&slots, &sweep, 2);

	let first = enumerator.pairs().flat_map(|p| walk(&enumerator.space(&p))).collect::<Vec<_>>();
	let second = enumerator.pairs().flat_map(|p| walk(&enumerator.space(&p))).collect::<Vec<_>>();

	assert_eq!(first, second);
	assert_eq!(first.len() as u128, enumerator.total());
}

#[test]
fn empty_domains_yield_nothing() {
	let slots = vec![vec![1], vec![]];
	let sweep = vec![0, 1];
	let enumerator = Enumerator::new(&slots, &sweep, 1);

	assert!(enumerator.space(&[0]).is_empty());
	assert!(walk(&enumerator.space(&[0])).is_empty());
	assert_eq!(walk(&enumerator.space(&[1])).len(), 2);
}

#[test]
fn detects_oversized_spaces() {
	let slots = (0..23).map(|_| (0..8).collect()).collect::<Vec<Vec<u16>>>();
	let sweep = (0..2048).collect::<Vec<u16>>();
	let enumerator = Enumerator::new(&slots, &sweep, 2);
	let space = enumerator.space(&[0, 1]);

	assert_eq!(space.checked_len(), None);
	assert_eq!(space.len(), u64::MAX);
	assert_eq!(enumerator.oversized(), Some(vec![0, 1]));

	let small = vec![vec![1, 2], vec![3]];
	let enumerator = Enumerator::new(&small, &sweep, 1);
	assert_eq!(enumerator.space(&[0]).checked_len(), Some(2048));
	assert_eq!(enumerator.oversized(), None);
}
