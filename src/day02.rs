// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Policy {
	/// Minimum count for part 1, first 1-based position for part 2.
	lo: usize,
	/// Maximum count for part 1, second 1-based position for part 2.
	hi: usize,
	letter: u8,
}

struct Entry<'s> {
	policy: Policy,
	password: &'s str,
}

impl Entry<'_> {
	fn is_valid_by_count(&self) -> bool {
		let Policy { lo, hi, letter } = self.policy;
		let count = self.password.bytes().filter(|&b| b == letter).count();
		(lo..=hi).contains(&count)
	}

	fn is_valid_by_positions(&self) -> bool {
		let Policy { lo, hi, letter } = self.policy;
		let holds_letter = |pos: usize| self.password.as_bytes().get(pos - 1) == Some(&letter);
		holds_letter(lo) != holds_letter(hi)
	}
}


fn input_entries_from_str(s: &str) -> impl Iterator<Item = Entry<'_>> + '_ {
	parsing::entries_from_str(s).map(|r| r.unwrap())
}


fn part1_impl<'s>(input_entries: impl Iterator<Item = Entry<'s>>) -> usize {
	input_entries.filter(Entry::is_valid_by_count).count()
}

pub(crate) fn part1(input: &str) -> usize {
	part1_impl(input_entries_from_str(input))
}


fn part2_impl<'s>(input_entries: impl Iterator<Item = Entry<'s>>) -> usize {
	input_entries.filter(Entry::is_valid_by_positions).count()
}

pub(crate) fn part2(input: &str) -> usize {
	part2_impl(input_entries_from_str(input))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Entry, Policy};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum PolicyError {
		NoHyphen,
		NoSpace,
		Lo(ParseIntError),
		Hi(ParseIntError),
		ZeroPosition,
		InvalidLetter(String),
	}

	impl FromStr for Policy {
		type Err = PolicyError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use PolicyError::*;
			let (range, letter) = s.split_once(' ').ok_or(NoSpace)?;
			let (lo, hi) = range.split_once('-').ok_or(NoHyphen)?;
			let lo = lo.parse().map_err(Lo)?;
			let hi = hi.parse().map_err(Hi)?;
			if lo == 0 || hi == 0 { return Err(ZeroPosition) }
			let letter = match letter.as_bytes() {
				&[b] if b.is_ascii_graphic() => b,
				_ => return Err(InvalidLetter(letter.to_owned())),
			};
			Ok(Policy { lo, hi, letter })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum EntryError {
		NoColon,
		Policy(PolicyError),
	}

	impl<'s> TryFrom<&'s str> for Entry<'s> {
		type Error = EntryError;
		fn try_from(s: &'s str) -> Result<Self, Self::Error> {
			let (policy, password) = s.split_once(": ").ok_or(EntryError::NoColon)?;
			let policy = policy.parse().map_err(EntryError::Policy)?;
			Ok(Entry { policy, password })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum EntriesError {
		Empty,
		Entry { line: usize, source: EntryError },
	}

	pub(super) fn entries_from_str(s: &str) -> impl Iterator<Item = Result<Entry<'_>, EntriesError>> + '_ {
		use {std::iter::once, either::Either::*};
		if s.trim().is_empty() { return Left(once(Err(EntriesError::Empty))) }
		Right(s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.trim_end().try_into()
				.map_err(|e| EntriesError::Entry { line: l + 1, source: e })))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		1-3 a: abcde
		1-3 b: cdefg
		2-9 c: ccccccccc
	" };
	assert_eq!(part1_impl(input_entries_from_str(INPUT)), 2);
	assert_eq!(part1(INPUT), 2);
	assert_eq!(part2_impl(input_entries_from_str(INPUT)), 1);
	assert_eq!(part2(INPUT), 1);

	// A position past the end of the password never holds the letter.
	assert_eq!(part2("1-20 a: abc"), 1);
	assert_eq!(part2("4-20 a: abc"), 0);
	assert!(matches!(parsing::entries_from_str("0-3 a: abc").next(),
		Some(Err(parsing::EntriesError::Entry { line: 1,
			source: parsing::EntryError::Policy(parsing::PolicyError::ZeroPosition) }))));
	assert!(matches!(parsing::entries_from_str("1-3 ab: abc").next(),
		Some(Err(parsing::EntriesError::Entry { line: 1,
			source: parsing::EntryError::Policy(parsing::PolicyError::InvalidLetter(_)) }))));
}
