use anyhow::Result;

use advent2023::puzzle_input;
use advent2023::solutions::day4;

fn main() -> Result<()> {
    let (points, cards) = day4(&puzzle_input()?)?;
    println!("Total Card Value : {}", points);
    println!("Total Card Count : {}", cards);
    Ok(())
}
