// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
	BirthYear,
	IssueYear,
	ExpirationYear,
	Height,
	HairColor,
	EyeColor,
	PassportId,
	CountryId,
}

/// Constraint on a field’s value.
enum Rule {
	Year(std::ops::RangeInclusive<u16>),
	Height,
	HexColor,
	OneOf(&'static [&'static str]),
	Digits(usize),
	Any,
}

impl Field {
	const ALL: [Field; 8] = {
		use Field::*;
		[BirthYear, IssueYear, ExpirationYear, Height, HairColor, EyeColor, PassportId, CountryId]
	};

	fn key(self) -> &'static str {
		match self {
			Field::BirthYear => "byr",
			Field::IssueYear => "iyr",
			Field::ExpirationYear => "eyr",
			Field::Height => "hgt",
			Field::HairColor => "hcl",
			Field::EyeColor => "ecl",
			Field::PassportId => "pid",
			Field::CountryId => "cid",
		}
	}

	fn rule(self) -> Rule {
		match self {
			Field::BirthYear => Rule::Year(1920..=2002),
			Field::IssueYear => Rule::Year(2010..=2020),
			Field::ExpirationYear => Rule::Year(2020..=2030),
			Field::Height => Rule::Height,
			Field::HairColor => Rule::HexColor,
			Field::EyeColor => Rule::OneOf(&["amb", "blu", "brn", "gry", "grn", "hzl", "oth"]),
			Field::PassportId => Rule::Digits(9),
			Field::CountryId => Rule::Any,
		}
	}

	fn is_required(self) -> bool {
		self != Field::CountryId
	}
}

impl Rule {
	fn validate(&self, value: &str) -> bool {
		fn is_digits(s: &str) -> bool {
			!s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
		}

		fn is_number_in(s: &str, range: std::ops::RangeInclusive<u16>) -> bool {
			is_digits(s) && s.parse::<u16>().map_or(false, |n| range.contains(&n))
		}

		match self {
			Rule::Year(range) => value.len() == 4 && is_number_in(value, range.clone()),
			Rule::Height => if let Some(cm) = value.strip_suffix("cm") {
				is_number_in(cm, 150..=193)
			} else if let Some(inches) = value.strip_suffix("in") {
				is_number_in(inches, 59..=76)
			} else {
				false
			},
			Rule::HexColor => value.strip_prefix('#').map_or(false, |hex| hex.len() == 6
				&& hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))),
			Rule::OneOf(options) => options.contains(&value),
			&Rule::Digits(len) => value.len() == len && is_digits(value),
			Rule::Any => true,
		}
	}
}

/// Values indexed by `Field as usize`.
struct Passport<'s>([Option<&'s str>; Field::ALL.len()]);

impl<'s> Passport<'s> {
	fn value(&self, field: Field) -> Option<&'s str> {
		self.0[field as usize]
	}

	fn has_required_fields(&self) -> bool {
		Field::ALL.into_iter()
			.filter(|field| field.is_required())
			.all(|field| self.value(field).is_some())
	}

	fn has_valid_required_fields(&self) -> bool {
		Field::ALL.into_iter()
			.filter(|field| field.is_required())
			.all(|field| self.value(field).map_or(false, |value| field.rule().validate(value)))
	}
}


fn input_passports_from_str(s: &str) -> impl Iterator<Item = Passport<'_>> + '_ {
	parsing::passports_from_str(s).map(|r| r.unwrap())
}


fn part1_impl<'s>(input_passports: impl Iterator<Item = Passport<'s>>) -> usize {
	input_passports.filter(Passport::has_required_fields).count()
}

pub(crate) fn part1(input: &str) -> usize {
	part1_impl(input_passports_from_str(input))
}


fn part2_impl<'s>(input_passports: impl Iterator<Item = Passport<'s>>) -> usize {
	input_passports.filter(Passport::has_valid_required_fields).count()
}

pub(crate) fn part2(input: &str) -> usize {
	part2_impl(input_passports_from_str(input))
}


mod parsing {
	use std::str::FromStr;
	use super::{Field, Passport};

	impl FromStr for Field {
		type Err = ();
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			Field::ALL.into_iter().find(|field| field.key() == s).ok_or(())
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum PassportsError {
		Empty,
		NoColon { line: usize, found: String },
	}

	pub(super) fn passports_from_str(s: &str) -> impl Iterator<Item = Result<Passport<'_>, PassportsError>> + '_ {
		use {std::iter::once, itertools::Either::*};
		if s.trim().is_empty() { return Left(once(Err(PassportsError::Empty))) }
		Right(crate::util::paragraphs(s).map(|lines| -> Result<_, PassportsError> {
			let mut passport = Passport([None; Field::ALL.len()]);
			for (line, pair) in lines.into_iter()
				.flat_map(|(l, line)| line.split_whitespace().map(move |pair| (l, pair))) {
				let (key, value) = pair.split_once(':')
					.ok_or_else(|| PassportsError::NoColon { line, found: pair.to_owned() })?;
				// Unknown keys are ignored; repeated keys keep the last value.
				if let Ok(field) = key.parse::<Field>() {
					passport.0[field as usize] = Some(value)
				}
			}
			Ok(passport)
		}))
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use test_case::test_case;

	#[test]
	fn part1() {
		const INPUT: &str = indoc::indoc! { "
			ecl:gry pid:860033327 eyr:2020 hcl:#fffffd
			byr:1937 iyr:2017 cid:147 hgt:183cm

			iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884
			hcl:#cfa07d byr:1929

			hcl:#ae17e1 iyr:2013
			eyr:2024
			ecl:brn pid:760753108 byr:1931
			hgt:179cm

			hcl:#cfa07d eyr:2025 pid:166559648
			iyr:2011 ecl:brn hgt:59in
		" };
		assert_eq!(part1_impl(input_passports_from_str(INPUT)), 2);
		assert_eq!(super::part1(INPUT), 2);
	}

	#[test]
	fn part2() {
		const INVALID: &str = indoc::indoc! { "
			eyr:1972 cid:100
			hcl:#18171d ecl:amb hgt:170 pid:186cm iyr:2018 byr:1926

			iyr:2019
			hcl:#602927 eyr:1967 hgt:170cm
			ecl:grn pid:012533040 byr:1946

			hcl:dab227 iyr:2012
			ecl:brn hgt:182cm pid:021572410 eyr:2020 byr:1992 cid:277

			hgt:59cm ecl:zzz
			eyr:2038 hcl:74454a iyr:2023
			pid:3556412378 byr:2007
		" };
		const VALID: &str = indoc::indoc! { "
			pid:087499704 hgt:74in ecl:grn iyr:2012 eyr:2030 byr:1980
			hcl:#623a2f

			eyr:2029 ecl:blu cid:129 byr:1989
			iyr:2014 pid:896056539 hcl:#a97842 hgt:165cm

			hcl:#888785
			hgt:164cm byr:2001 iyr:2015 cid:88
			pid:545766238 ecl:hzl
			eyr:2022

			iyr:2010 hgt:158cm hcl:#b6652a ecl:blu byr:1944 eyr:2021 pid:093154719
		" };
		assert_eq!(part1_impl(input_passports_from_str(INVALID)), 4);
		assert_eq!(part2_impl(input_passports_from_str(INVALID)), 0);
		assert_eq!(part2_impl(input_passports_from_str(VALID)), 4);
		assert_eq!(super::part2(VALID), 4);
	}

	#[test_case(Field::BirthYear, "2002" => true)]
	#[test_case(Field::BirthYear, "2003" => false)]
	#[test_case(Field::BirthYear, "02002" => false)]
	#[test_case(Field::Height, "60in" => true)]
	#[test_case(Field::Height, "190cm" => true)]
	#[test_case(Field::Height, "190in" => false)]
	#[test_case(Field::Height, "190" => false)]
	#[test_case(Field::Height, "cm" => false)]
	#[test_case(Field::HairColor, "#123abc" => true)]
	#[test_case(Field::HairColor, "#123abz" => false)]
	#[test_case(Field::HairColor, "123abc" => false)]
	#[test_case(Field::EyeColor, "brn" => true)]
	#[test_case(Field::EyeColor, "wat" => false)]
	#[test_case(Field::PassportId, "000000001" => true)]
	#[test_case(Field::PassportId, "0123456789" => false)]
	#[test_case(Field::CountryId, "" => true)]
	fn rule(field: Field, value: &str) -> bool {
		field.rule().validate(value)
	}

	#[test]
	fn keys() {
		for field in Field::ALL {
			assert_eq!(field.key().parse::<Field>(), Ok(field));
		}
		assert_eq!("xyz".parse::<Field>(), Err(()));
	}

	#[test]
	fn unknown_and_malformed_pairs() {
		let passport = input_passports_from_str("xyz:1 byr:1937\n").next().unwrap();
		assert_eq!(passport.value(Field::BirthYear), Some("1937"));
		assert!(matches!(parsing::passports_from_str("byr:1937\n\nbyr1937").nth(1),
			Some(Err(parsing::PassportsError::NoColon { line: 3, .. }))));
	}
}
