use anyhow::Result;

use advent2023::puzzle_input;
use advent2023::solutions::day5;

fn main() -> Result<()> {
    let (closest, closest_ranged) = day5(&puzzle_input()?)?;
    println!("Closest Location corresponding to a seed is {}", closest);
    println!("Closes Location with seed ranges {}", closest_ranged);
    Ok(())
}
