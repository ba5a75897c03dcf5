use anyhow::Result;

use advent2023::puzzle_input;
use advent2023::solutions::day6;

fn main() -> Result<()> {
    let (ways, fixed) = day6(&puzzle_input()?)?;
    println!("Race Win Possibilities {}", ways);
    println!("Fixed Win Possibilities {}", fixed);
    Ok(())
}
