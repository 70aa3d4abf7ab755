// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Row in the upper 7 bits, column in the lower 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct SeatId(u16);

impl SeatId {
	const COUNT: usize = 1 << PASS_LEN;

	#[allow(dead_code)]
	fn row(self) -> u16 {
		self.0 >> COLUMN_BITS
	}

	#[allow(dead_code)]
	fn column(self) -> u16 {
		self.0 & ((1 << COLUMN_BITS) - 1)
	}

	/// The canonical boarding pass decoding to this seat.
	fn boarding_pass(self) -> String {
		(0..PASS_LEN)
			.map(|i| {
				let [lower, upper] = PARTITIONS[i];
				if self.0 >> (PASS_LEN - 1 - i) & 1 == 1 { upper } else { lower }
			})
			.collect()
	}
}

impl std::fmt::Display for SeatId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

const PASS_LEN: usize = 10;
const COLUMN_BITS: usize = 3;

/// Symbols keeping the lower (`0`) and upper (`1`) half, per pass position.
const PARTITIONS: [[char; 2]; PASS_LEN] = {
	const ROW: [char; 2] = ['F', 'B'];
	const COLUMN: [char; 2] = ['L', 'R'];
	[ROW, ROW, ROW, ROW, ROW, ROW, ROW, COLUMN, COLUMN, COLUMN]
};


/// Presence of every possible seat, indexed by ID.
struct SeatMap([bool; SeatId::COUNT]);

impl FromIterator<SeatId> for SeatMap {
	fn from_iter<I: IntoIterator<Item = SeatId>>(iter: I) -> Self {
		let mut seats = [false; SeatId::COUNT];
		for SeatId(id) in iter { seats[id as usize] = true }
		SeatMap(seats)
	}
}

impl SeatMap {
	/// First absent seat, excluding the very front and back, whose
	/// neighbors are both present.
	fn find_missing_interior(&self) -> Option<SeatId> {
		self.0.windows(3)
			.position(|w| w == [true, false, true])
			.map(|i| SeatId(i as u16 + 1))
	}
}


fn input_seat_ids_from_str(s: &str) -> impl Iterator<Item = SeatId> + '_ {
	parsing::seat_ids_from_str(s).map(|r| r.unwrap())
}


fn part1_impl(input_seat_ids: impl Iterator<Item = SeatId>) -> Option<SeatId> {
	input_seat_ids.max()
}

pub(crate) fn part1(input: &str) -> impl std::fmt::Display {
	crate::util::OrNone(part1_impl(input_seat_ids_from_str(input)))
}


fn part2_impl(input_seat_ids: impl Iterator<Item = SeatId>) -> Option<SeatId> {
	input_seat_ids.collect::<SeatMap>().find_missing_interior()
}

pub(crate) fn part2(input: &str) -> impl std::fmt::Display {
	crate::util::OrNone(part2_impl(input_seat_ids_from_str(input)))
}


mod parsing {
	use super::{SeatId, PASS_LEN, PARTITIONS};

	#[allow(dead_code)]
	#[derive(Debug, PartialEq, Eq)]
	pub(super) enum SeatIdError {
		Len(usize),
		InvalidSymbol { column: usize, found: char },
	}

	impl TryFrom<&str> for SeatId {
		type Error = SeatIdError;
		fn try_from(s: &str) -> Result<Self, Self::Error> {
			let len = s.chars().count();
			if len != PASS_LEN { return Err(SeatIdError::Len(len)) }
			let id = s.chars().zip(PARTITIONS).enumerate()
				.try_fold(0, |id, (i, (c, [lower, upper]))| match c {
					_ if c == lower => Ok(id << 1),
					_ if c == upper => Ok(id << 1 | 1),
					found => Err(SeatIdError::InvalidSymbol { column: i + 1, found }),
				})?;
			#[cfg(LOGGING)]
			println!("{s}: row {}, column {}, seat ID {id}", id >> 3, id & 7);
			Ok(SeatId(id))
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum SeatIdsError {
		Empty,
		SeatId { line: usize, source: SeatIdError },
	}

	pub(super) fn seat_ids_from_str(s: &str) -> impl Iterator<Item = Result<SeatId, SeatIdsError>> + '_ {
		use {std::iter::once, either::Either::*};
		if s.trim().is_empty() { return Left(once(Err(SeatIdsError::Empty))) }
		Right(s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.trim_end().try_into()
				.map_err(|e| SeatIdsError::SeatId { line: l + 1, source: e })))
	}
}
