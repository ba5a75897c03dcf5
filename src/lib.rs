pub mod solutions;

use std::fs;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Reads `input.txt` from the process working directory.
pub fn puzzle_input() -> Result<String> {
    fs::read_to_string("input.txt").context("unable to read input.txt")
}

/// Reads the stored input for a day from the `inputs/` directory.
pub fn default_input(day: usize) -> Result<String> {
    let path = format!("inputs/{}.txt", day);
    fs::read_to_string(&path).with_context(|| format!("unable to read {}", path))
}

/// Collects every whitespace-separated number in `s`, skipping tokens that
/// don't parse.
pub fn parse_numbers<T: FromStr>(s: &str) -> Vec<T> {
    s.split_ascii_whitespace()
        .filter_map(|token| token.parse().ok())
        .collect()
}

/// Result is only correct if `bytes` consists entirely of ASCII digits!
pub fn parse_digits(bytes: &[u8]) -> u32 {
    bytes.iter().fold(0, |n, b| n * 10 + u32::from(b - b'0'))
}
