use std::path::PathBuf;

use clap::Parser;
use miette::*;

use aoc2025_day_9::part2;

#[derive(Parser, Debug)]
#[command(about = "Largest rectangle between two red tiles that stays inside the loop")]
struct Args {
    /// Puzzle input, one `x,y` tile per line, in loop order
    #[arg(default_value = "input2.txt")]
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let input = std::fs::read_to_string(&args.input)
        .into_diagnostic()
        .wrap_err_with(|| format!("reading {}", args.input.display()))?;
    let result = part2::process(&input)?;
    println!("Result: {}", result);
    Ok(())
}
