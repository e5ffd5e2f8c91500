//! Heuristic detectors for trivially guessable runs of characters.
//!
//! Both detectors walk Unicode code points, never bytes.

use crate::constants::PATTERN_RUN_LENGTH;

/// True if any window of four consecutive code points is a unit-step ascending
/// or descending run of digits (`0`-`9`) or of letters (`a`-`z`, case folded).
///
/// All four characters must be from the same alphabet; `"9:;<"` or `"c1d2"`
/// never match. Longer runs and non-unit steps are intentionally not examined
/// beyond their four-character windows.
pub fn has_sequential_run(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < PATTERN_RUN_LENGTH {
        return false;
    }

    chars
        .windows(PATTERN_RUN_LENGTH)
        .any(is_unit_step_run)
}

/// True if any code point repeats four or more times in a row.
///
/// Comparison is exact, so `"aAaA"` is not a run.
pub fn has_repeating_run(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(mut previous) = chars.next() else {
        return false;
    };

    let mut run = 1;
    for current in chars {
        if current == previous {
            run += 1;
            if run >= PATTERN_RUN_LENGTH {
                return true;
            }
        } else {
            run = 1;
            previous = current;
        }
    }

    false
}

/// Position of a character within its alphabet, tagged by alphabet.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Ordinal {
    Digit(u32),
    Letter(u32),
}

impl Ordinal {
    fn of(c: char) -> Option<Self> {
        if c.is_ascii_digit() {
            Some(Self::Digit(c as u32 - '0' as u32))
        } else if c.is_ascii_alphabetic() {
            Some(Self::Letter(c.to_ascii_lowercase() as u32 - 'a' as u32))
        } else {
            None
        }
    }

    /// Signed distance to `next`, if both belong to the same alphabet.
    fn step_to(self, next: Self) -> Option<i64> {
        match (self, next) {
            (Self::Digit(a), Self::Digit(b)) | (Self::Letter(a), Self::Letter(b)) => {
                Some(i64::from(b) - i64::from(a))
            }
            _ => None,
        }
    }
}

fn is_unit_step_run(window: &[char]) -> bool {
    let mut ordinals = Vec::with_capacity(window.len());
    for &c in window {
        match Ordinal::of(c) {
            Some(ordinal) => ordinals.push(ordinal),
            None => return false,
        }
    }

    let mut steps = ordinals.windows(2).map(|pair| pair[0].step_to(pair[1]));
    match steps.next().flatten() {
        Some(first @ (1 | -1)) => steps.all(|step| step == Some(first)),
        _ => false,
    }
}
