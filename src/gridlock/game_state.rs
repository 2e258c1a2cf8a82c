use crate::gridlock::board::{has_valid_move, Board, BoardError, Boards};
use crate::gridlock::dice::{DiceRng, RectSize};
use crate::gridlock::input::{Placement, PlacementError};
use crate::gridlock::player::{PlayerNum, Players};
use crate::messages::{Placed, RollResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Debug;
use thiserror::Error;
use tracing::{debug, info};

// Two consecutive skips with no placement in between end the match; this is
// what keeps a pair of nearly-full boards from deadlocking forever.
pub const SKIP_LIMIT: u8 = 2;

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("No roll is pending; the dice must be rolled first")]
    NoPendingRoll,
    #[error("A {rect} roll is already awaiting placement")]
    RollPending { rect: RectSize },
    #[error("The match is over")]
    MatchOver,
    #[error("It is {current}'s turn, not {player}'s")]
    NotYourTurn {
        player: PlayerNum,
        current: PlayerNum,
    },
    #[error("Invalid placement: {0}")]
    Placement(#[from] PlacementError),
    #[error("Board invariant broken: {0}")]
    Board(#[from] BoardError),
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingRoll,
    // The target board is resolved from blocker mode when the dice land and
    // stays fixed for the life of the pending rectangle.
    AwaitingPlacement { rect: RectSize, target: PlayerNum },
    GameOver,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    P1Win,
    P2Win,
    Draw,
}

#[derive(Debug)]
pub struct GameState<R: Debug> {
    boards: Boards,
    players: Players,
    current: PlayerNum,
    skip_streak: u8,
    blocker_mode: bool,
    phase: Phase,
    rng: R,
}

impl<R: DiceRng + Debug> GameState<R> {
    pub fn new(blocker_mode: bool, rng: R) -> Self {
        GameState {
            boards: Boards::default(),
            players: Players::default(),
            current: PlayerNum::P1,
            skip_streak: 0,
            blocker_mode,
            phase: Phase::AwaitingRoll,
            rng,
        }
    }

    pub fn board(&self, num: PlayerNum) -> &Board {
        &self.boards[num]
    }

    pub fn current_player(&self) -> PlayerNum {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn blocker_mode(&self) -> bool {
        self.blocker_mode
    }

    pub fn skip_streak(&self) -> u8 {
        self.skip_streak
    }

    pub fn scores(&self) -> [u32; 2] {
        self.players.scores()
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver)
    }

    // The toggle is live for the whole match but locked once it ends. A
    // pending rectangle keeps the target it was validated against.
    pub fn set_blocker_mode(&mut self, enabled: bool) -> Result<(), ActionError> {
        if self.is_over() {
            return Err(ActionError::MatchOver);
        }
        self.blocker_mode = enabled;
        Ok(())
    }

    fn target_board(&self) -> PlayerNum {
        if self.blocker_mode {
            self.current.other()
        } else {
            self.current
        }
    }

    pub fn roll(&mut self) -> Result<RollResult, ActionError> {
        match self.phase {
            Phase::GameOver => Err(ActionError::MatchOver),
            Phase::AwaitingPlacement { rect, .. } => Err(ActionError::RollPending { rect }),
            Phase::AwaitingRoll => {
                let player = self.current;
                let rect = self.rng.roll();
                let target = self.target_board();
                if has_valid_move(&self.boards[target], rect) {
                    info!("{} rolled {} targeting {}'s board", player, rect, target);
                    self.phase = Phase::AwaitingPlacement { rect, target };
                    Ok(RollResult::Rolled { player, rect })
                } else {
                    info!("{} rolled {} with no valid move; skipping", player, rect);
                    Ok(self.skip(player, rect))
                }
            }
        }
    }

    fn skip(&mut self, player: PlayerNum, rect: RectSize) -> RollResult {
        self.skip_streak += 1;
        if self.skip_streak >= SKIP_LIMIT {
            self.phase = Phase::GameOver;
            let scores = self.scores();
            info!(
                "match over after {} consecutive skips, final scores {:?}",
                self.skip_streak, scores
            );
            RollResult::Ended {
                player,
                rect,
                scores,
            }
        } else {
            self.current = player.other();
            self.phase = Phase::AwaitingRoll;
            RollResult::Skipped { player, rect }
        }
    }

    pub fn place(&mut self, row: usize, col: usize) -> Result<Placed, ActionError> {
        match self.phase {
            Phase::GameOver => Err(ActionError::MatchOver),
            Phase::AwaitingRoll => Err(ActionError::NoPendingRoll),
            Phase::AwaitingPlacement { rect, target } => {
                // A rejection here must leave boards, scores and the turn
                // untouched; nothing is mutated until the placement is proven.
                let placement = Placement::new(row, col, rect, &self.boards[target])?;
                self.boards[target].place(placement.row(), placement.col(), rect)?;
                let player = self.current;
                let scorer = if target == player {
                    self.players[player].add_score(rect.area());
                    Some(player)
                } else {
                    None
                };
                self.skip_streak = 0;
                self.current = player.other();
                self.phase = Phase::AwaitingRoll;
                debug!(
                    "{} placed {} at ({}, {}) on {}'s board",
                    player, rect, row, col, target
                );
                Ok(Placed {
                    board: target,
                    row,
                    col,
                    rect,
                    scorer,
                })
            }
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_over() {
            return None;
        }
        let [s1, s2] = self.scores();
        Some(match s1.cmp(&s2) {
            Ordering::Greater => Outcome::P1Win,
            Ordering::Less => Outcome::P2Win,
            Ordering::Equal => Outcome::Draw,
        })
    }
}
