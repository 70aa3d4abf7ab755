// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Map of open squares and trees, repeating infinitely to the right.
struct Grid {
	trees: Vec<bool>,
	width: usize,
}

#[derive(Clone, Copy, Debug)]
struct Slope {
	right: usize,
	down: usize,
}

impl Slope {
	const fn new(right: usize, down: usize) -> Self {
		assert!(right > 0 && down > 0, "slope must move right and down by at least 1");
		Slope { right, down }
	}
}

impl Grid {
	fn height(&self) -> usize {
		self.trees.len() / self.width
	}

	fn is_tree_xy(&self, x: usize, y: usize) -> bool {
		self.trees[y * self.width + x]
	}

	/// Positions visited after leaving the top-left corner. The last step is
	/// clamped onto the bottom row, so that row is always visited exactly once.
	fn walk(&self, slope: Slope) -> impl Iterator<Item = (usize, usize)> + '_ {
		let last_y = self.height() - 1;
		itertools::unfold((0, 0), move |(x, y)| (*y < last_y).then(|| {
			*x = (*x + slope.right) % self.width;
			*y = (*y + slope.down).min(last_y);
			(*x, *y)
		}))
	}

	fn count_trees(&self, slope: Slope) -> usize {
		let trees = self.walk(slope)
			.filter(|&(x, y)| self.is_tree_xy(x, y))
			.count();
		#[cfg(LOGGING)]
		println!("Right {}, down {}: {trees} tree(s)", slope.right, slope.down);
		trees
	}
}


fn input_grid_from_str(s: &str) -> Grid {
	s.parse().unwrap()
}


fn part1_impl(input_grid: &Grid) -> usize {
	#[cfg(LOGGING)]
	println!("{input_grid}");
	input_grid.count_trees(Slope::new(3, 1))
}

pub(crate) fn part1(input: &str) -> usize {
	part1_impl(&input_grid_from_str(input))
}


const SLOPES: [Slope; 5] = [
	Slope::new(1, 1),
	Slope::new(3, 1),
	Slope::new(5, 1),
	Slope::new(7, 1),
	Slope::new(1, 2),
];

fn part2_impl(input_grid: &Grid) -> u64 {
	use rayon::prelude::{IntoParallelRefIterator as _, ParallelIterator as _};
	SLOPES.par_iter()
		.map(|&slope| input_grid.count_trees(slope) as u64)
		.product()
}

pub(crate) fn part2(input: &str) -> u64 {
	part2_impl(&input_grid_from_str(input))
}


mod parsing {
	use std::str::FromStr;
	use super::Grid;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum GridError {
		Empty,
		LineLen { line: usize, len: Option<usize>, found: usize },
		InvalidByte { line: usize, column: usize, found: char },
	}

	impl FromStr for Grid {
		type Err = GridError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			if s.trim().is_empty() { return Err(GridError::Empty) }

			let mut trees = vec![];
			let mut width = None;

			for (l, line) in s.trim_end().lines().enumerate() {
				let line = line.trim_end();
				match width {
					Some(len) if line.len() != len => return Err(GridError::LineLen {
						line: l + 1, len: width, found: line.len() }),
					Some(_) => (),
					None if line.is_empty() => return Err(GridError::LineLen {
						line: l + 1, len: None, found: 0 }),
					None => width = Some(line.len()),
				}

				for (c, b) in line.bytes().enumerate() {
					trees.push(match b {
						b'#' => true,
						b'.' => false,
						found => return Err(GridError::InvalidByte {
							line: l + 1, column: c + 1, found: found as char }),
					})
				}
			}

			Ok(Grid { trees, width: width.unwrap_or_default() })
		}
	}
}


#[cfg(LOGGING)]
impl std::fmt::Display for Grid {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::fmt::Write;
		let height = self.height();
		for y in 0..height {
			for x in 0..self.width {
				f.write_char(if self.is_tree_xy(x, y) { '#' } else { '.' })?;
			}
			if y < height - 1 { f.write_char('\n')? }
		}
		Ok(())
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use test_case::test_case;

	const INPUT: &str = indoc::indoc! { "
		..##.......
		#...#...#..
		.#....#..#.
		..#.#...#.#
		.#...##..#.
		..#.##.....
		.#.#.#....#
		.#........#
		#.##...#...
		#...##....#
		.#..#...#.#
	" };

	/// Trees at `(i * right % width, min(i * down, height - 1))` for
	/// `i` in `1..=ceil((height - 1) / down)`.
	fn count_trees_closed_form(grid: &Grid, Slope { right, down }: Slope) -> usize {
		let (width, last_y) = (grid.width, grid.height() - 1);
		(1..=(last_y + down - 1) / down)
			.filter(|i| grid.is_tree_xy(i * right % width, (i * down).min(last_y)))
			.count()
	}

	#[test]
	fn part1() {
		assert_eq!(part1_impl(&input_grid_from_str(INPUT)), 7);
		assert_eq!(super::part1(INPUT), 7);
	}

	#[test]
	fn part2() {
		let grid = input_grid_from_str(INPUT);
		let counts = SLOPES.map(|slope| grid.count_trees(slope));
		assert_eq!(counts, [2, 7, 3, 4, 2]);
		assert_eq!(part2_impl(&grid), 336);
		assert_eq!(super::part2(INPUT), 336);
	}

	#[test_case(1, 1)]
	#[test_case(3, 1)]
	#[test_case(1, 2)]
	#[test_case(2, 3)]
	#[test_case(4, 4)]
	#[test_case(13, 7)]
	#[test_case(1, 10)]
	#[test_case(1, 20)]
	fn count_trees(right: usize, down: usize) {
		let grid = input_grid_from_str(INPUT);
		let slope = Slope::new(right, down);
		assert_eq!(grid.count_trees(slope), count_trees_closed_form(&grid, slope));
		assert_eq!(grid.walk(slope).count(), (10 + down - 1) / down);
		assert_eq!(grid.walk(slope).last(), Some((grid.walk(slope).count() * right % 11, 10)));
		// No state carries over between walks.
		assert_eq!(grid.count_trees(slope), grid.count_trees(slope));
	}

	#[test]
	fn single_row() {
		let grid = input_grid_from_str("#.#\n");
		assert_eq!(grid.walk(Slope::new(1, 1)).count(), 0);
		assert_eq!(grid.count_trees(Slope::new(1, 1)), 0);
	}

	#[test]
	#[should_panic(expected = "slope must move")]
	fn zero_slope() {
		Slope::new(3, 0);
	}

	#[test]
	fn invalid_grids() {
		use parsing::GridError;
		assert!(matches!("".parse::<Grid>(), Err(GridError::Empty)));
		assert!(matches!("..#\n.#\n".parse::<Grid>(),
			Err(GridError::LineLen { line: 2, len: Some(3), found: 2 })));
		assert!(matches!("..#\n.#O\n".parse::<Grid>(),
			Err(GridError::InvalidByte { line: 2, column: 3, found: 'O' })));
	}
}
