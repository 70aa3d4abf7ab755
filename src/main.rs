// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod util;
util::mod_days![01, 02, 03, 04, 05, 06];


/// Solves the puzzles of Advent of Code 2020.
#[derive(clap::Parser)]
#[command(author, about, version)]
struct Cli {
	/// Days to solve (all when omitted)
	days: Vec<u8>,

	/// Directory holding the `dayNN.txt` puzzle inputs
	#[arg(short, long, default_value = "inputs")]
	inputs: std::path::PathBuf,
}

fn main() -> anyhow::Result<()> {
	use {anyhow::Context as _, clap::Parser as _};

	let cli = Cli::parse();
	let days = if cli.days.is_empty() { DAYS.iter().map(|&(day, ..)| day).collect() }
		else { cli.days };

	for day in days {
		let &(_, part1, part2) = DAYS.iter()
			.find(|&&(d, ..)| d == day)
			.with_context(|| format!("Day {day} is not implemented"))?;
		let path = cli.inputs.join(format!("day{day:02}.txt"));
		let input = std::fs::read_to_string(&path)
			.with_context(|| format!("Failed to read input for day {day} from {}", path.display()))?;
		println!("Day {day}; part 1: {}, part 2: {}", part1(&input), part2(&input));
	}

	Ok(())
}
