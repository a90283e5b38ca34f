//! Dataset generation and validation.
//!
//! Produces the sequences a run sorts: four generated patterns plus
//! caller-supplied custom lists. Validation failures leave the engine's
//! sequence store untouched; callers only get a sequence back once it has
//! passed the bounds checks.

use crate::error::{InvalidInput, Result};
use crate::rng::SeedRng;

/// Smallest accepted value.
pub const MIN_VALUE: u32 = 1;
/// Largest accepted value.
pub const MAX_VALUE: u32 = 500;
/// Minimum entries in a custom list.
pub const MIN_CUSTOM_LEN: usize = 2;
/// Maximum sequence length.
pub const MAX_LEN: usize = 100;

/// What to load into the sequence store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatasetSpec {
    /// Uniform random values.
    Random { size: usize },
    /// Strictly decreasing values.
    Reversed { size: usize },
    /// Ascending values with a handful of random pair swaps.
    NearlySorted { size: usize },
    /// Random picks from a small fixed palette.
    FewUnique { size: usize },
    /// Caller-supplied list, validated against the engine bounds.
    Custom(Vec<u32>),
}

impl DatasetSpec {
    /// Materialize the spec into a value sequence.
    ///
    /// Generated patterns draw from `rng`; `Custom` is validated and
    /// returned as-is.
    pub fn materialize(&self, rng: &SeedRng) -> Result<Vec<u32>> {
        match self {
            Self::Random { size } => {
                check_size(*size)?;
                Ok((0..*size).map(|_| rng.next_range(10, 309)).collect())
            }
            Self::Reversed { size } => {
                check_size(*size)?;
                Ok((1..=*size as u32).rev().map(|i| i * 3 + 10).collect())
            }
            Self::NearlySorted { size } => {
                check_size(*size)?;
                let mut values: Vec<u32> = (1..=*size as u32).map(|i| i * 3 + 10).collect();
                for _ in 0..*size / 10 {
                    let a = rng.next_usize(*size);
                    let b = rng.next_usize(*size);
                    values.swap(a, b);
                }
                Ok(values)
            }
            Self::FewUnique { size } => {
                check_size(*size)?;
                const PALETTE: [u32; 5] = [50, 100, 150, 200, 250];
                Ok((0..*size)
                    .map(|_| PALETTE[rng.next_usize(PALETTE.len())])
                    .collect())
            }
            Self::Custom(values) => {
                validate_custom(values)?;
                Ok(values.clone())
            }
        }
    }
}

fn check_size(size: usize) -> Result<()> {
    if size > MAX_LEN {
        return Err(InvalidInput::TooMany {
            got: size,
            max: MAX_LEN,
        }
        .into());
    }
    Ok(())
}

/// Validate a caller-supplied list against the engine bounds.
pub fn validate_custom(values: &[u32]) -> Result<()> {
    if values.len() < MIN_CUSTOM_LEN {
        return Err(InvalidInput::TooFew {
            got: values.len(),
            min: MIN_CUSTOM_LEN,
        }
        .into());
    }
    if values.len() > MAX_LEN {
        return Err(InvalidInput::TooMany {
            got: values.len(),
            max: MAX_LEN,
        }
        .into());
    }
    for &value in values {
        if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
            return Err(InvalidInput::ValueOutOfBounds {
                value: i64::from(value),
                min: MIN_VALUE,
                max: MAX_VALUE,
            }
            .into());
        }
    }
    Ok(())
}

/// Parse a comma-separated list of numbers into a validated custom dataset.
pub fn parse_custom(input: &str) -> Result<Vec<u32>> {
    let mut values = Vec::new();
    for entry in input.split(',') {
        let entry = entry.trim();
        let parsed: i64 = entry
            .parse()
            .map_err(|_| InvalidInput::NotANumber(entry.to_string()))?;
        if parsed < i64::from(MIN_VALUE) || parsed > i64::from(MAX_VALUE) {
            return Err(InvalidInput::ValueOutOfBounds {
                value: parsed,
                min: MIN_VALUE,
                max: MAX_VALUE,
            }
            .into());
        }
        values.push(parsed as u32);
    }
    validate_custom(&values)?;
    Ok(values)
}
