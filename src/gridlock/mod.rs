mod board;
mod dice;
mod game_state;
mod input;
mod player;
mod session;

pub use board::{has_valid_move, Board, BoardError, Boards, BOARD_SIZE};
pub use dice::{DiceError, DiceRng, RectSize, SixSided, MAX_DIE, MIN_DIE};
pub use game_state::{ActionError, GameState, Outcome, Phase, SKIP_LIMIT};
pub use input::{Placement, PlacementError, RawPlacement};
pub use player::{Player, PlayerNum, Players};
pub use session::GameSession;
