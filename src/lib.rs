mod gridlock;
pub mod messages;

pub use gridlock::{
    has_valid_move, ActionError, Board, BoardError, Boards, DiceError, DiceRng, GameSession,
    GameState, Outcome, Phase, Placement, PlacementError, Player, PlayerNum, Players, RawPlacement,
    RectSize, SixSided, BOARD_SIZE, MAX_DIE, MIN_DIE, SKIP_LIMIT,
};
