use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The 5×5 board of a round. Iterates in row-major index order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<CellState>,
}

impl Grid {
    pub fn from_layout(layout: &MineLayout) -> Self {
        let cells = Array2::from_shape_fn([usize::from(GRID_SIDE); 2], |(row, col)| {
            // row and col are below GRID_SIDE
            let index = row as CellIndex * GRID_SIDE + col as CellIndex;
            CellState::from_mine(layout.contains_mine(index))
        });
        Self { cells }
    }

    pub fn cell(&self, index: CellIndex) -> CellState {
        self.cells[index.to_nd_index()]
    }

    pub fn cell_at(&self, coords: Coord2) -> CellState {
        self.cells[coords.to_nd_index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = CellState> + '_ {
        self.cells.iter().copied()
    }

    pub fn views(&self) -> impl Iterator<Item = CellView> + '_ {
        self.iter().map(CellState::view)
    }

    pub fn count(&self, state: CellState) -> CellCount {
        self.iter().filter(|&cell| cell == state).count() as CellCount
    }

    pub fn has_hidden_mines(&self) -> bool {
        self.iter().any(|cell| cell == CellState::HiddenMine)
    }

    pub(crate) fn set(&mut self, index: CellIndex, state: CellState) {
        self.cells[index.to_nd_index()] = state;
    }

    /// Turns every hidden mine into a revealed one, returns how many changed.
    pub(crate) fn reveal_mines(&mut self) -> CellCount {
        let mut revealed = 0;
        for cell in self.cells.iter_mut() {
            if *cell == CellState::HiddenMine {
                *cell = CellState::RevealedMine;
                revealed += 1;
            }
        }
        revealed
    }

    pub(crate) fn reveal_all(&mut self) {
        self.reveal_mines();
        for cell in self.cells.iter_mut() {
            if *cell == CellState::HiddenSafe {
                *cell = CellState::RevealedSafe;
            }
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cells: Array2::default([usize::from(GRID_SIDE); 2]),
        }
    }
}
