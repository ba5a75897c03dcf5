use anyhow::Result;

use advent2023::puzzle_input;
use advent2023::solutions::day3;

fn main() -> Result<()> {
    println!("The ratio of the gears is {}", day3(&puzzle_input()?)?);
    Ok(())
}
