use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a presentation layer needs after an operation, with hidden cells masked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub state: RoundState,
    pub stake: Credits,
    pub mines: CellCount,
    pub revealed_safe_count: CellCount,
    pub current_payout: Credits,
    pub balance: Credits,
    pub cells: Vec<CellView>,
}

impl RoundSnapshot {
    pub fn from_engine<W: Wallet>(engine: &GameEngine<W>) -> Self {
        let config = engine.config();
        Self {
            state: engine.state(),
            stake: config.stake,
            mines: config.mines,
            revealed_safe_count: engine.revealed_safe_count(),
            current_payout: engine.current_payout(),
            balance: engine.balance(),
            cells: engine.grid().views().collect(),
        }
    }

    /// Cell at `coords`, `None` outside the board.
    pub fn view_at(&self, coords: Coord2) -> Option<CellView> {
        let index = coords_to_index(coords)?;
        self.cells.get(usize::from(index)).copied()
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(usize::from(GRID_SIDE))
    }
}
