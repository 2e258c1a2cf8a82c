use crate::gridlock::{PlayerNum, RectSize};
use serde::{Deserialize, Serialize};

// What a roll request produced: a rectangle awaiting placement, a forced
// skip, or the skip that closed out the match.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum RollResult {
    Rolled {
        player: PlayerNum,
        rect: RectSize,
    },
    Skipped {
        player: PlayerNum,
        rect: RectSize,
    },
    Ended {
        player: PlayerNum,
        rect: RectSize,
        scores: [u32; 2],
    },
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placed {
    pub board: PlayerNum,
    pub row: usize,
    pub col: usize,
    pub rect: RectSize,
    // Set when the rectangle landed on the placer's own board and scored;
    // blocker placements leave it empty.
    pub scorer: Option<PlayerNum>,
}
