use anyhow::Result;

use advent2023::puzzle_input;
use advent2023::solutions::day7;

fn main() -> Result<()> {
    println!("Total Winnings for part one: {}", day7(&puzzle_input()?)?);
    Ok(())
}
