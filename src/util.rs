// Copyright (c) 2022 Bastiaan Marinus van de Weerd


pub(crate) type PartFn = fn(&str) -> String;

/// Declares the `dayNN` modules and a `DAYS` table of `(day, part1, part2)`,
/// each part rendering its answer to a `String`.
macro_rules! mod_days { ( $( $day:literal ),* $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )*

	const DAYS: &[(u8, $crate::util::PartFn, $crate::util::PartFn)] = &[ $(
		($day,
			|s| [<day $day>]::part1(s).to_string(),
			|s| [<day $day>]::part2(s).to_string()),
	)* ];
} } }

pub(crate) use mod_days;


/// Answer that may not exist for the given input.
pub(crate) struct OrNone<T>(pub(crate) Option<T>);

impl<T: std::fmt::Display> std::fmt::Display for OrNone<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match &self.0 {
			Some(answer) => answer.fmt(f),
			None => f.write_str("none"),
		}
	}
}


/// Groups of non-blank lines separated by one or more blank lines, each line
/// paired with its 1-based line number.
pub(crate) fn paragraphs(s: &str) -> impl Iterator<Item = Vec<(usize, &str)>> + '_ {
	use itertools::Itertools as _;
	s.lines()
		.enumerate()
		.map(|(l, line)| (l + 1, line.trim_end()))
		.batching(|lines| {
			let paragraph = lines
				.skip_while(|(_, line)| line.is_empty())
				.take_while(|(_, line)| !line.is_empty())
				.collect::<Vec<_>>();
			(!paragraph.is_empty()).then_some(paragraph)
		})
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "

		a b
		c

		
		d
	" };
	assert_eq!(paragraphs(INPUT).collect::<Vec<_>>(),
		[vec![(2, "a b"), (3, "c")], vec![(6, "d")]]);
	assert_eq!(paragraphs("").count(), 0);
	assert_eq!(OrNone(Some(42)).to_string(), "42");
	assert_eq!(OrNone::<u8>(None).to_string(), "none");
}
