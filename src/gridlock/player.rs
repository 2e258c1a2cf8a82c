use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayerNum {
    P1,
    P2,
}

impl PlayerNum {
    pub fn other(&self) -> PlayerNum {
        match self {
            PlayerNum::P1 => PlayerNum::P2,
            PlayerNum::P2 => PlayerNum::P1,
        }
    }
}

impl fmt::Display for PlayerNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerNum::P1 => write!(f, "P1"),
            PlayerNum::P2 => write!(f, "P2"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Player {
    score: u32,
}

impl Player {
    pub fn score(&self) -> u32 {
        self.score
    }

    // Scores only ever grow; there is no penalty or decay.
    pub(crate) fn add_score(&mut self, points: u32) {
        self.score += points;
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Players([Player; 2]);

impl Index<PlayerNum> for Players {
    type Output = Player;
    fn index(&self, index: PlayerNum) -> &Self::Output {
        match index {
            PlayerNum::P1 => &self.0[0],
            PlayerNum::P2 => &self.0[1],
        }
    }
}

impl IndexMut<PlayerNum> for Players {
    fn index_mut(&mut self, index: PlayerNum) -> &mut Self::Output {
        match index {
            PlayerNum::P1 => &mut self.0[0],
            PlayerNum::P2 => &mut self.0[1],
        }
    }
}

impl Players {
    pub fn new(players: [Player; 2]) -> Self {
        Players(players)
    }

    pub fn scores(&self) -> [u32; 2] {
        [self.0[0].score(), self.0[1].score()]
    }
}
