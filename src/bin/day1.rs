use anyhow::Result;

use advent2023::puzzle_input;
use advent2023::solutions::day1;

fn main() -> Result<()> {
    let (_, calibration) = day1(&puzzle_input()?)?;
    println!("Calibration Value is {}", calibration);
    Ok(())
}
