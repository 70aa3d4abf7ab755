// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const GOAL: u32 = 2020;


fn input_entries_from_str(s: &str) -> Vec<u32> {
	// Entries at or above the goal can never be part of a sum.
	parsing::entries_from_str(s)
		.map(|r| r.unwrap())
		.filter(|&entry| entry < GOAL)
		.collect()
}


fn part1and2_impl<const N: usize>(input_entries: &[u32]) -> Option<u64> {
	use itertools::Itertools as _;
	input_entries.iter()
		.copied()
		.combinations(N)
		.find(|entries| entries.iter().sum::<u32>() == GOAL)
		.map(|entries| entries.into_iter().map(u64::from).product())
}

pub(crate) fn part1(input: &str) -> impl std::fmt::Display {
	crate::util::OrNone(part1and2_impl::<2>(&input_entries_from_str(input)))
}

pub(crate) fn part2(input: &str) -> impl std::fmt::Display {
	crate::util::OrNone(part1and2_impl::<3>(&input_entries_from_str(input)))
}


mod parsing {
	use std::num::ParseIntError;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum EntriesError {
		Empty,
		Invalid { line: usize, source: ParseIntError },
	}

	pub(super) fn entries_from_str(s: &str) -> impl Iterator<Item = Result<u32, EntriesError>> + '_ {
		use {std::iter::once, either::Either::*};
		if s.trim().is_empty() { return Left(once(Err(EntriesError::Empty))) }
		Right(s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.trim().parse()
				.map_err(|e| EntriesError::Invalid { line: l + 1, source: e })))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		1721
		979
		366
		299
		675
		1456
	" };

	#[test]
	fn part1() {
		assert_eq!(part1and2_impl::<2>(&input_entries_from_str(INPUT)), Some(514_579));
		assert_eq!(super::part1(INPUT).to_string(), "514579");
	}

	#[test]
	fn part2() {
		assert_eq!(part1and2_impl::<3>(&input_entries_from_str(INPUT)), Some(241_861_950));
		assert_eq!(super::part2(INPUT).to_string(), "241861950");
	}

	#[test]
	fn no_solution() {
		assert_eq!(part1and2_impl::<2>(&[1, 2, 3]), None);
		// 2020 + 0 only adds up before entries at the goal are dropped.
		assert_eq!(part1and2_impl::<2>(&input_entries_from_str("2020\n0\n")), None);
		assert_eq!(super::part2("1\n2\n").to_string(), "none");
	}

	#[test]
	#[should_panic(expected = "Invalid")]
	fn invalid_entry() {
		input_entries_from_str("1721\nabc\n");
	}
}
