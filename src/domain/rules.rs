use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Cell;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("rule must look like B3/S23, got {0:?}")]
    Malformed(String),
    #[error("neighbor count {0} is out of range 0..=8")]
    CountOutOfRange(u32),
}

/// Outer-totalistic rule in B/S notation.
///
/// Bit `n` of `birth` is set when a dead cell with `n` live neighbors is
/// born; bit `n` of `survival` when a live cell with `n` neighbors stays
/// alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rule {
    birth: u16,
    survival: u16,
}

impl Rule {
    /// Conway's Game of Life (B3/S23)
    pub const CONWAY: Rule = Rule::from_counts(&[3], &[2, 3]);
    /// HighLife (B36/S23), known for its replicator
    pub const HIGHLIFE: Rule = Rule::from_counts(&[3, 6], &[2, 3]);
    /// Seeds (B2/S), every live cell dies each generation
    pub const SEEDS: Rule = Rule::from_counts(&[2], &[]);
    /// Day & Night (B3678/S34678), symmetric under inversion
    pub const DAY_AND_NIGHT: Rule = Rule::from_counts(&[3, 6, 7, 8], &[3, 4, 6, 7, 8]);

    const fn from_counts(birth: &[u8], survival: &[u8]) -> Self {
        Self {
            birth: mask(birth),
            survival: mask(survival),
        }
    }

    /// Next state of a cell given its live neighbor count
    #[inline]
    pub const fn evolve(self, current: Cell, neighbors: u8) -> Cell {
        let mask = match current {
            Cell::Alive => self.survival,
            Cell::Dead => self.birth,
        };
        if neighbors <= 8 && mask & (1 << neighbors) != 0 {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }

    /// Named presets, Conway first
    pub fn presets() -> [(&'static str, Rule); 4] {
        [
            ("Conway", Rule::CONWAY),
            ("HighLife", Rule::HIGHLIFE),
            ("Seeds", Rule::SEEDS),
            ("Day&Night", Rule::DAY_AND_NIGHT),
        ]
    }
}

const fn mask(counts: &[u8]) -> u16 {
    let mut bits = 0u16;
    let mut i = 0;
    while i < counts.len() {
        bits |= 1 << counts[i];
        i += 1;
    }
    bits
}

impl Default for Rule {
    fn default() -> Self {
        Rule::CONWAY
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |bits: u16| -> String {
            (0..=8u8)
                .filter(|n| bits & (1 << n) != 0)
                .map(|n| char::from(b'0' + n))
                .collect()
        };
        write!(f, "B{}/S{}", digits(self.birth), digits(self.survival))
    }
}

impl FromStr for Rule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || RuleError::Malformed(s.to_owned());
        let (born, survive) = s.trim().split_once('/').ok_or_else(malformed)?;
        let born = born
            .strip_prefix('B')
            .or_else(|| born.strip_prefix('b'))
            .ok_or_else(malformed)?;
        let survive = survive
            .strip_prefix('S')
            .or_else(|| survive.strip_prefix('s'))
            .ok_or_else(malformed)?;

        let parse = |digits: &str| -> Result<u16, RuleError> {
            digits.chars().try_fold(0u16, |bits, c| {
                let n = c.to_digit(10).ok_or_else(malformed)?;
                if n > 8 {
                    return Err(RuleError::CountOutOfRange(n));
                }
                Ok(bits | 1 << n)
            })
        };

        Ok(Self {
            birth: parse(born)?,
            survival: parse(survive)?,
        })
    }
}

impl TryFrom<String> for Rule {
    type Error = RuleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rule> for String {
    fn from(rule: Rule) -> Self {
        rule.to_string()
    }
}
