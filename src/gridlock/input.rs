use crate::gridlock::board::{Board, BOARD_SIZE};
use crate::gridlock::dice::RectSize;
use crate::gridlock::player::PlayerNum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlacementError {
    #[error("A {rect} rectangle at ({row}, {col}) extends past the board edge")]
    OutOfBounds {
        row: usize,
        col: usize,
        rect: RectSize,
    },
    #[error("A {rect} rectangle at ({row}, {col}) overlaps an occupied cell")]
    CellOccupied {
        row: usize,
        col: usize,
        rect: RectSize,
    },
}

// A placement request as it arrives from the presentation layer: which board
// was clicked and the cell under the click.
#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct RawPlacement {
    pub board: PlayerNum,
    pub row: usize,
    pub col: usize,
}

// Proof that the rectangle fit the board it was validated against.
#[derive(Copy, Clone, Debug)]
pub struct Placement {
    row: usize,
    col: usize,
    rect: RectSize,
}

impl Placement {
    // Bounds are checked before occupancy so a rectangle hanging off the
    // edge reports OutOfBounds even when the cells it does cover are taken.
    pub fn new(
        row: usize,
        col: usize,
        rect: RectSize,
        board: &Board,
    ) -> Result<Self, PlacementError> {
        let w = rect.width() as usize;
        let h = rect.height() as usize;
        if row + h > BOARD_SIZE || col + w > BOARD_SIZE {
            return Err(PlacementError::OutOfBounds { row, col, rect });
        }
        if !(row..row + h).all(|r| (col..col + w).all(|c| board.is_free(r, c))) {
            return Err(PlacementError::CellOccupied { row, col, rect });
        }
        Ok(Placement { row, col, rect })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn rect(&self) -> RectSize {
        self.rect
    }
}
