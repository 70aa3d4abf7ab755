// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Questions `a` through `z` answered “yes”, indexed by letter offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Answers([bool; 26]);

impl Answers {
	const NONE: Answers = Answers([false; 26]);
	const ALL: Answers = Answers([true; 26]);

	fn union(self, other: Self) -> Self {
		Answers(std::array::from_fn(|i| self.0[i] || other.0[i]))
	}

	fn intersection(self, other: Self) -> Self {
		Answers(std::array::from_fn(|i| self.0[i] && other.0[i]))
	}

	fn count(self) -> usize {
		self.0.into_iter().filter(|&yes| yes).count()
	}
}

type Group = Vec<Answers>;


fn input_groups_from_str(s: &str) -> impl Iterator<Item = Group> + '_ {
	parsing::groups_from_str(s).map(|r| r.unwrap())
}


fn part1_impl(input_groups: impl Iterator<Item = Group>) -> usize {
	input_groups
		.map(|group| group.into_iter().fold(Answers::NONE, Answers::union).count())
		.sum()
}

pub(crate) fn part1(input: &str) -> usize {
	part1_impl(input_groups_from_str(input))
}


fn part2_impl(input_groups: impl Iterator<Item = Group>) -> usize {
	input_groups
		.map(|group| group.into_iter().fold(Answers::ALL, Answers::intersection).count())
		.sum()
}

pub(crate) fn part2(input: &str) -> usize {
	part2_impl(input_groups_from_str(input))
}


mod parsing {
	use super::{Answers, Group};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum GroupsError {
		Empty,
		InvalidQuestion { line: usize, column: usize, found: char },
	}

	pub(super) fn groups_from_str(s: &str) -> impl Iterator<Item = Result<Group, GroupsError>> + '_ {
		use {std::iter::once, itertools::Either::*};
		if s.trim().is_empty() { return Left(once(Err(GroupsError::Empty))) }
		Right(crate::util::paragraphs(s).map(|lines| lines.into_iter()
			.map(|(line, answers)| {
				let mut questions = Answers::NONE;
				for (c, found) in answers.chars().enumerate() {
					if !found.is_ascii_lowercase() {
						return Err(GroupsError::InvalidQuestion { line, column: c + 1, found })
					}
					questions.0[(found as u8 - b'a') as usize] = true
				}
				Ok(questions)
			})
			.collect()))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		abc

		a
		b
		c

		ab
		ac

		a
		a
		a
		a

		b
	" };
	assert_eq!(part1_impl(input_groups_from_str(INPUT)), 11);
	assert_eq!(part1(INPUT), 11);
	assert_eq!(part2_impl(input_groups_from_str(INPUT)), 6);
	assert_eq!(part2(INPUT), 6);

	// Repeated letters count once.
	assert_eq!(part1("abcx\nabcy\nabcz\n"), 6);
	assert_eq!(part2("aab\n"), 2);
	assert!(matches!(parsing::groups_from_str("ab\n\naB\n").nth(1),
		Some(Err(parsing::GroupsError::InvalidQuestion { line: 3, column: 2, found: 'B' }))));
}
