use anyhow::Result;

use advent2023::puzzle_input;
use advent2023::solutions::day2;

fn main() -> Result<()> {
    let (_, power_sum) = day2(&puzzle_input()?)?;
    println!("Sum of each games power is : {}", power_sum);
    Ok(())
}
