use crate::gridlock::board::Board;
use crate::gridlock::dice::{DiceRng, SixSided};
use crate::gridlock::game_state::{ActionError, GameState, Outcome, Phase};
use crate::gridlock::input::RawPlacement;
use crate::gridlock::player::PlayerNum;
use crate::messages::{Placed, RollResult};
use std::fmt::Debug;
use tracing::{info, warn};

// Composition root for one match. Owns the state machine and applies the
// boundary rules the board UI applied: placement requests from the wrong
// player or aimed at the wrong board are dropped, not errors.
#[derive(Debug)]
pub struct GameSession<R: Debug = SixSided> {
    state: GameState<R>,
}

impl GameSession<SixSided> {
    pub fn new(blocker_mode: bool) -> Self {
        GameSession {
            state: GameState::new(blocker_mode, SixSided::default()),
        }
    }
}

impl<R: DiceRng + Default + Debug> GameSession<R> {
    // Fresh boards, zero scores, P1 to move. The blocker toggle is session
    // configuration and survives the reset.
    pub fn new_game(&mut self) {
        let blocker_mode = self.state.blocker_mode();
        self.state = GameState::new(blocker_mode, R::default());
        info!("fresh match started");
    }
}

impl<R: DiceRng + Debug> GameSession<R> {
    pub fn with_rng(blocker_mode: bool, rng: R) -> Self {
        GameSession {
            state: GameState::new(blocker_mode, rng),
        }
    }

    pub fn request_roll(&mut self, player: PlayerNum) -> Result<RollResult, ActionError> {
        if self.state.is_over() {
            return Err(ActionError::MatchOver);
        }
        let current = self.state.current_player();
        if player != current {
            return Err(ActionError::NotYourTurn { player, current });
        }
        self.state.roll()
    }

    // Ok(None) means the request was silently dropped: it came from the
    // non-current player, or it targeted a board other than the one the
    // pending rectangle resolves to.
    pub fn request_placement(
        &mut self,
        player: PlayerNum,
        raw: RawPlacement,
    ) -> Result<Option<Placed>, ActionError> {
        if self.state.is_over() {
            return Err(ActionError::MatchOver);
        }
        if player != self.state.current_player() {
            warn!("dropping placement request from {} out of turn", player);
            return Ok(None);
        }
        if let Phase::AwaitingPlacement { target, .. } = self.state.phase() {
            if raw.board != target {
                warn!(
                    "dropping placement request aimed at {}'s board; target is {}'s",
                    raw.board, target
                );
                return Ok(None);
            }
        }
        self.state.place(raw.row, raw.col).map(Some)
    }

    pub fn set_blocker_mode(&mut self, enabled: bool) -> Result<(), ActionError> {
        self.state.set_blocker_mode(enabled)
    }

    pub fn blocker_mode(&self) -> bool {
        self.state.blocker_mode()
    }

    pub fn board(&self, num: PlayerNum) -> &Board {
        self.state.board(num)
    }

    pub fn current_player(&self) -> PlayerNum {
        self.state.current_player()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn final_scores(&self) -> [u32; 2] {
        self.state.scores()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }
}
