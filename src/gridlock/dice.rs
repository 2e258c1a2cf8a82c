use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const MIN_DIE: u8 = 1;
pub const MAX_DIE: u8 = 6;

#[derive(Error, Debug)]
pub enum DiceError {
    #[error("Dimension {0} is not a die face in {MIN_DIE}..={MAX_DIE}", MIN_DIE = MIN_DIE, MAX_DIE = MAX_DIE)]
    OutOfRange(u8),
}

// Width and height come from two six-sided dice, so both stay in 1..=6.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct RectSize {
    width: u8,
    height: u8,
}

impl RectSize {
    pub fn new(width: u8, height: u8) -> Result<Self, DiceError> {
        for dim in [width, height] {
            if !(MIN_DIE..=MAX_DIE).contains(&dim) {
                return Err(DiceError::OutOfRange(dim));
            }
        }
        Ok(RectSize { width, height })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn area(&self) -> u32 {
        u32::from(self.width) * u32::from(self.height)
    }
}

impl fmt::Display for RectSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

pub trait DiceRng {
    fn roll(&mut self) -> RectSize;
}

#[derive(Debug)]
pub struct SixSided {
    rng: StdRng,
}

impl Default for SixSided {
    fn default() -> Self {
        let rng = StdRng::from_rng(rand::thread_rng()).unwrap();
        SixSided { rng }
    }
}

impl DiceRng for SixSided {
    fn roll(&mut self) -> RectSize {
        RectSize {
            width: self.rng.gen_range(MIN_DIE..=MAX_DIE),
            height: self.rng.gen_range(MIN_DIE..=MAX_DIE),
        }
    }
}
