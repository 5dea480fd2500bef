use serde::{Deserialize, Serialize};

/// Full state of a cell, including whether a hidden cell holds a mine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    HiddenSafe,
    HiddenMine,
    RevealedSafe,
    RevealedMine,
}

impl CellState {
    pub const fn from_mine(is_mine: bool) -> Self {
        if is_mine {
            Self::HiddenMine
        } else {
            Self::HiddenSafe
        }
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::HiddenSafe | Self::HiddenMine)
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::HiddenMine | Self::RevealedMine)
    }

    /// What a player is allowed to see.
    pub const fn view(self) -> CellView {
        match self {
            Self::HiddenSafe | Self::HiddenMine => CellView::Hidden,
            Self::RevealedSafe => CellView::Safe,
            Self::RevealedMine => CellView::Mine,
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::HiddenSafe
    }
}

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Safe,
    Mine,
}

impl CellView {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
