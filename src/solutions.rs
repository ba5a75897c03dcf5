use std::ops::Range;

use aho_corasick::AhoCorasick;
use anyhow::{ensure, Context, Result};
use memchr::memchr_iter;
use num::integer::Roots;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::{parse_digits, parse_numbers};

const DIGIT_PATTERNS: [&str; 19] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "one", "two", "three", "four", "five", "six",
    "seven", "eight", "nine",
];

pub fn day1(input: &str) -> Result<(u32, u32)> {
    // NOTE: regex doesn't work since it doesn't support overlapping matches
    // ("oneight" hides both a one and an eight)
    let ac = AhoCorasick::new(DIGIT_PATTERNS)?;
    Ok(input
        .par_lines()
        .map(|line| calibration_values(&ac, line))
        .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1)))
}

/// Calibration values of a line counting bare digits only, and counting
/// spelled-out digits as well. A line without an occurrence scores 0.
fn calibration_values(ac: &AhoCorasick, line: &str) -> (u32, u32) {
    let mut first_bare = None;
    let mut last_bare = 0;
    let mut first = None;
    let mut last = 0;

    for mat in ac.find_overlapping_iter(line) {
        let pattern = mat.pattern().as_usize() as u32;
        let (digit, bare) = if pattern < 10 {
            (pattern, true)
        } else {
            (pattern - 9, false)
        };

        if bare {
            first_bare.get_or_insert(digit);
            last_bare = digit;
        }

        first.get_or_insert(digit);
        last = digit;
    }

    (
        first_bare.map_or(0, |first| first * 10 + last_bare),
        first.map_or(0, |first| first * 10 + last),
    )
}

const BAG: Cubes = Cubes {
    red: 12,
    green: 13,
    blue: 14,
};

#[derive(Debug, Default, Clone, Copy)]
struct Cubes {
    red: u32,
    green: u32,
    blue: u32,
}

impl Cubes {
    fn max(self, other: Cubes) -> Cubes {
        Cubes {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn power(self) -> u32 {
        self.red * self.green * self.blue
    }

    fn limit_for(self, color: &str) -> u32 {
        match color {
            "red" => self.red,
            "green" => self.green,
            "blue" => self.blue,
            _ => 0,
        }
    }
}

pub fn day2(input: &str) -> Result<(u32, u32)> {
    Ok(input
        .par_lines()
        .map(|line| (possible_game_id(line), game_power(line)))
        .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1)))
}

/// Product of the fewest cubes per color that make the game possible. A color
/// never drawn keeps its minimum at 0, zeroing the product.
fn game_power(line: &str) -> u32 {
    let Some((_, body)) = line.split_once(':') else {
        return 0;
    };
    body.split(';')
        .map(parse_draw)
        .fold(Cubes::default(), Cubes::max)
        .power()
}

fn parse_draw(round: &str) -> Cubes {
    let mut draw = Cubes::default();
    for item in round.split(',') {
        let Some((count, color)) = item.trim().split_once(' ') else {
            continue;
        };
        let Ok(count) = count.parse() else {
            continue;
        };
        match color {
            "red" => draw.red = draw.red.max(count),
            "green" => draw.green = draw.green.max(count),
            "blue" => draw.blue = draw.blue.max(count),
            _ => {}
        }
    }
    draw
}

/// The game id when every draw fits in [`BAG`], 0 otherwise. Unknown colors
/// have no cubes in the bag, so any positive count of one invalidates the
/// game.
fn possible_game_id(line: &str) -> u32 {
    let Some((header, body)) = line.split_once(':') else {
        return 0;
    };
    let Some(id) = header
        .trim()
        .strip_prefix("Game ")
        .and_then(|id| id.parse().ok())
    else {
        return 0;
    };
    for item in body.split([';', ',']) {
        let Some((count, color)) = item.trim().split_once(' ') else {
            continue;
        };
        let Ok(count) = count.parse::<u32>() else {
            continue;
        };
        if count > BAG.limit_for(color) {
            return 0;
        }
    }
    id
}

pub fn day3(input: &str) -> Result<u32> {
    let grid: Vec<&[u8]> = input
        .lines()
        .map(|line| line.trim_end().as_bytes())
        .collect();

    let mut sum = 0;
    for (y, row) in grid.iter().enumerate() {
        for x in memchr_iter(b'*', row) {
            sum += gear_ratio(&grid, x, y);
        }
    }
    Ok(sum)
}

/// Product of the part numbers adjacent to the `*` at `(x, y)`, or 0 unless
/// exactly two distinct numbers touch it.
fn gear_ratio(grid: &[&[u8]], x: usize, y: usize) -> u32 {
    let mut parts = FxHashSet::default();
    for ny in y.saturating_sub(1)..=y + 1 {
        let Some(row) = grid.get(ny) else {
            continue;
        };
        for nx in x.saturating_sub(1)..=x + 1 {
            if row.get(nx).is_some_and(|b| b.is_ascii_digit()) {
                let (start, value) = number_at(row, nx);
                parts.insert((ny, start, value));
            }
        }
    }

    if parts.len() == 2 {
        parts.iter().map(|&(_, _, value)| value).product()
    } else {
        0
    }
}

/// Expands from the digit at `i` to the full number around it.
fn number_at(row: &[u8], i: usize) -> (usize, u32) {
    let mut start = i;
    while start > 0 && row[start - 1].is_ascii_digit() {
        start -= 1;
    }
    let mut end = i;
    while end + 1 < row.len() && row[end + 1].is_ascii_digit() {
        end += 1;
    }
    (start, parse_digits(&row[start..=end]))
}

pub fn day4(input: &str) -> Result<(u32, u64)> {
    let matches: Vec<usize> = input.par_lines().map(card_matches).collect();

    let points = matches
        .iter()
        .map(|&m| if m > 0 { 1u32 << (m - 1) } else { 0 })
        .sum();

    // Each card adds its own multiplicity to the next `m` cards.
    let mut copies = vec![1u64; matches.len()];
    let mut total = 0;
    for (i, &m) in matches.iter().enumerate() {
        total += copies[i];
        for j in i + 1..(i + 1 + m).min(matches.len()) {
            copies[j] += copies[i];
        }
    }

    Ok((points, total))
}

fn card_matches(line: &str) -> usize {
    let Some((_, body)) = line.split_once(':') else {
        return 0;
    };
    let Some((winning, have)) = body.split_once('|') else {
        return 0;
    };
    let winning: Vec<u32> = parse_numbers(winning);
    parse_numbers::<u32>(have)
        .into_iter()
        .filter(|n| winning.contains(n))
        .count()
}

struct SpanMap {
    src: Range<i64>,
    delta: i64,
}

pub fn day5(input: &str) -> Result<(i64, i64)> {
    let (seeds, layers) = parse_almanac(input)?;

    let closest = seeds
        .iter()
        .map(|&seed| layers.iter().fold(seed, |value, layer| remap(value, layer)))
        .min()
        .context("no seeds listed")?;

    let ranges: Vec<Range<i64>> = seeds
        .chunks_exact(2)
        .map(|pair| pair[0]..pair[0] + pair[1])
        .collect();
    let mapped = layers
        .iter()
        .fold(ranges, |ranges, layer| remap_ranges(ranges, layer));
    let closest_ranged = mapped
        .iter()
        .map(|range| range.start)
        .min()
        .context("no seed ranges listed")?;

    Ok((closest, closest_ranged))
}

fn parse_almanac(input: &str) -> Result<(Vec<i64>, Vec<Vec<SpanMap>>)> {
    let mut lines = input.lines().map(str::trim);
    let seeds = lines.next().context("empty almanac")?;
    let (_, seeds) = seeds.split_once(':').context("malformed seeds line")?;
    let seeds = parse_numbers(seeds);

    let mut layers: Vec<Vec<SpanMap>> = Vec::new();
    for line in lines {
        if line.ends_with("map:") {
            layers.push(Vec::new());
        } else if let ([dst, src, len], Some(layer)) =
            (parse_numbers::<i64>(line).as_slice(), layers.last_mut())
        {
            layer.push(SpanMap {
                src: *src..*src + *len,
                delta: *dst - *src,
            });
        }
    }
    Ok((seeds, layers))
}

fn remap(value: i64, layer: &[SpanMap]) -> i64 {
    layer
        .iter()
        .find(|mapping| mapping.src.contains(&value))
        .map_or(value, |mapping| value + mapping.delta)
}

/// Maps whole ranges through a layer, splitting them wherever they straddle a
/// mapping boundary; pieces no mapping covers pass through unchanged.
fn remap_ranges(ranges: Vec<Range<i64>>, layer: &[SpanMap]) -> Vec<Range<i64>> {
    let mut out = Vec::new();
    let mut pending = ranges;
    while let Some(range) = pending.pop() {
        if range.is_empty() {
            continue;
        }
        match layer
            .iter()
            .find_map(|m| intersect(&range, &m.src).map(|overlap| (m, overlap)))
        {
            Some((mapping, overlap)) => {
                out.push(overlap.start + mapping.delta..overlap.end + mapping.delta);
                pending.push(range.start..overlap.start);
                pending.push(overlap.end..range.end);
            }
            None => out.push(range),
        }
    }
    out
}

fn intersect(a: &Range<i64>, b: &Range<i64>) -> Option<Range<i64>> {
    let start = a.start.max(b.start);
    let end = a.end.min(b.end);
    (start < end).then_some(start..end)
}

struct Race {
    time: u64,
    distance: u64,
}

pub fn day6(input: &str) -> Result<(u64, u64)> {
    let mut lines = input.lines();
    let times = lines.next().context("missing time line")?;
    let distances = lines.next().context("missing distance line")?;
    let (_, times) = times.split_once(':').context("malformed time line")?;
    let (_, distances) = distances
        .split_once(':')
        .context("malformed distance line")?;

    let races: Vec<Race> = parse_numbers(times)
        .into_iter()
        .zip(parse_numbers(distances))
        .map(|(time, distance)| Race { time, distance })
        .collect();
    let ways: u64 = races.iter().map(ways_to_beat).product();

    let joined = Race {
        time: join_digits(times)?,
        distance: join_digits(distances)?,
    };
    Ok((ways, ways_to_beat(&joined)))
}

fn join_digits(line: &str) -> Result<u64> {
    let digits: String = line.chars().filter(char::is_ascii_digit).collect();
    digits.parse().context("no digits to join")
}

/// Counts the hold times that strictly beat the record: the integers strictly
/// between the roots of `hold^2 - time*hold + distance`.
fn ways_to_beat(race: &Race) -> u64 {
    let Race { time, distance } = *race;
    let Some(disc) = (time * time).checked_sub(4 * distance) else {
        return 0;
    };
    let root = disc.sqrt();
    let mut lo = (time - root) / 2;
    let mut hi = (time + root) / 2;
    // Integer sqrt truncation can leave either bound one step outside the
    // strict-win region.
    while lo <= time && lo * (time - lo) <= distance {
        lo += 1;
    }
    while hi > 0 && hi * (time - hi) <= distance {
        hi -= 1;
    }
    (hi + 1).saturating_sub(lo)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

pub fn day7(input: &str) -> Result<u64> {
    let mut hands = Vec::new();
    for line in input.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let (cards, bid) = line.split_once(' ').context("malformed hand line")?;
        ensure!(cards.len() == 5, "hand needs exactly five cards: {cards:?}");
        let mut strengths = [0u8; 5];
        for (slot, card) in strengths.iter_mut().zip(cards.bytes()) {
            *slot = card_strength(card);
        }
        let bid: u64 = bid.trim().parse().context("malformed bid")?;
        hands.push((hand_type(strengths), strengths, bid));
    }

    // Weakest hand first, so rank == index + 1.
    hands.sort_unstable_by_key(|&(kind, strengths, _)| (kind, strengths));
    Ok(hands
        .iter()
        .zip(1..)
        .map(|(&(_, _, bid), rank)| bid * rank)
        .sum())
}

fn card_strength(card: u8) -> u8 {
    match card {
        b'A' => 14,
        b'K' => 13,
        b'Q' => 12,
        b'J' => 11,
        b'T' => 10,
        digit @ b'2'..=b'9' => digit - b'0',
        _ => 0,
    }
}

fn hand_type(strengths: [u8; 5]) -> HandType {
    let mut counts = [0u8; 15];
    for strength in strengths {
        counts[strength as usize] += 1;
    }
    let mut counts: Vec<u8> = counts.into_iter().filter(|&count| count > 0).collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));

    match counts.as_slice() {
        [5] => HandType::FiveOfAKind,
        [4, 1] => HandType::FourOfAKind,
        [3, 2] => HandType::FullHouse,
        [3, ..] => HandType::ThreeOfAKind,
        [2, 2, 1] => HandType::TwoPair,
        [2, ..] => HandType::OnePair,
        _ => HandType::HighCard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_day1() -> Result<()> {
        let example_part1 = indoc! {"
            1abc2
            pqr3stu8vwx
            a1b2c3d4e5f
            treb7uchet
        "};
        assert_eq!(day1(example_part1)?.0, 142);

        let example_part2 = indoc! {"
            two1nine
            eightwothree
            abcone2threexyz
            xtwone3four
            4nineeightseven2
            zoneight234
            7pqrstsixteen
        "};
        assert_eq!(day1(example_part2)?.1, 281);

        // Overlapping words count on both sides.
        assert_eq!(day1("twone\n")?.1, 21);
        assert_eq!(day1("zoneight234")?.1, 14);
        // A single digit is both first and last.
        assert_eq!(day1("treb7uchet")?, (77, 77));
        // A leading zero is a digit occurrence, not a missing one.
        assert_eq!(day1("0abc5")?, (5, 5));
        // A line without any occurrence contributes 0.
        assert_eq!(day1("pqrst")?, (0, 0));
        Ok(())
    }

    #[test]
    fn test_day2() -> Result<()> {
        let example = indoc! {"
            Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
            Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
            Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
            Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
            Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
        "};
        assert_eq!(day2(example)?, (8, 2286));

        // Unparsable counts are skipped and zero-count items change nothing;
        // a color never drawn keeps its minimum at 0, zeroing the power.
        assert_eq!(day2("Game 6: 0 rainbow, 3 blue; x red, 2 blue")?, (6, 0));
        // A positive count of a color that isn't in the bag invalidates the
        // game.
        assert_eq!(day2("Game 9: 1 rainbow")?, (0, 0));
        // Round order and duplicated rounds don't change the power.
        let swapped = "Game 1: 1 red, 2 green, 6 blue; 2 green; 3 blue, 4 red; 2 green";
        assert_eq!(day2(swapped)?.1, 48);
        Ok(())
    }

    #[test]
    fn test_day3() -> Result<()> {
        let example = indoc! {"
            467..114..
            ...*......
            ..35..633.
            ......#...
            617*......
            .....+.58.
            ..592.....
            ......755.
            ...$.*....
            .664.598..
        "};
        assert_eq!(day3(example)?, 467835);

        // Two identical part numbers around one gear still count as two.
        assert_eq!(day3("5.5\n.*.")?, 25);
        Ok(())
    }

    #[test]
    fn test_day4() -> Result<()> {
        let example = indoc! {"
            Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
            Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
            Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
            Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
            Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
            Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
        "};
        assert_eq!(day4(example)?, (13, 30));
        assert_eq!(
            card_matches("Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53"),
            4
        );
        Ok(())
    }

    #[test]
    fn test_day5() -> Result<()> {
        let example = indoc! {"
            seeds: 79 14 55 13

            seed-to-soil map:
            50 98 2
            52 50 48

            soil-to-fertilizer map:
            0 15 37
            37 52 2
            39 0 15

            fertilizer-to-water map:
            49 53 8
            0 11 42
            42 0 7
            57 7 4

            water-to-light map:
            88 18 7
            18 25 70

            light-to-temperature map:
            45 77 23
            81 45 19
            68 64 13

            temperature-to-humidity map:
            0 69 1
            1 0 69

            humidity-to-location map:
            60 56 37
            56 93 4
        "};
        assert_eq!(day5(example)?, (35, 46));
        Ok(())
    }

    #[test]
    fn test_day5_remapping() {
        let layer = [
            SpanMap {
                src: 98..100,
                delta: -48,
            },
            SpanMap {
                src: 50..98,
                delta: 2,
            },
        ];
        assert_eq!(remap(98, &layer), 50);
        assert_eq!(remap(99, &layer), 51);
        assert_eq!(remap(10, &layer), 10);

        let mut covered = remap_ranges(vec![79..93], &layer);
        covered.sort_by_key(|range| range.start);
        assert_eq!(covered, [81..95]);

        let mut split = remap_ranges(vec![95..100], &layer);
        split.sort_by_key(|range| range.start);
        assert_eq!(split, [50..52, 97..100]);
    }

    #[test]
    fn test_day6() -> Result<()> {
        let example = indoc! {"
            Time:      7  15   30
            Distance:  9  40  200
        "};
        assert_eq!(day6(example)?, (288, 71503));

        assert_eq!(ways_to_beat(&Race { time: 7, distance: 9 }), 4);
        assert_eq!(ways_to_beat(&Race { time: 15, distance: 40 }), 8);
        assert_eq!(ways_to_beat(&Race { time: 30, distance: 200 }), 9);
        // A record that can't be beaten leaves no options.
        assert_eq!(ways_to_beat(&Race { time: 4, distance: 4 }), 0);
        Ok(())
    }

    #[test]
    fn test_day7() -> Result<()> {
        let example = indoc! {"
            32T3K 765
            T55J5 684
            KK677 28
            KTJJT 220
            QQQJA 483
        "};
        assert_eq!(day7(example)?, 6440);
        Ok(())
    }

    #[test]
    fn test_hand_types() {
        for (hand, expected) in [
            ("AAAAA", HandType::FiveOfAKind),
            ("AA8AA", HandType::FourOfAKind),
            ("23332", HandType::FullHouse),
            ("TTT98", HandType::ThreeOfAKind),
            ("23432", HandType::TwoPair),
            ("A23A4", HandType::OnePair),
            ("23456", HandType::HighCard),
        ] {
            let mut strengths = [0u8; 5];
            for (slot, card) in strengths.iter_mut().zip(hand.bytes()) {
                *slot = card_strength(card);
            }
            assert_eq!(hand_type(strengths), expected, "{hand}");
        }
    }
}
