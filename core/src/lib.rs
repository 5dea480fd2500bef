#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use payout::*;
pub use snapshot::*;
pub use types::*;
pub use wallet::*;

mod cell;
mod engine;
mod error;
mod generator;
mod grid;
mod payout;
mod snapshot;
mod types;
mod wallet;

/// Mine counts offered to players.
pub const MINE_PRESETS: [CellCount; 6] = [1, 3, 5, 10, 15, 20];

/// 30.00
pub const DEFAULT_STAKE: Credits = 3_000;

pub const DEFAULT_MINES: CellCount = 3;

/// Stake and mine count for a single round. Fixed once the round starts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub stake: Credits,
    pub mines: CellCount,
}

impl RoundConfig {
    pub const fn new(stake: Credits, mines: CellCount) -> Self {
        Self { stake, mines }
    }

    pub const fn safe_cells(&self) -> CellCount {
        GRID_SIZE.saturating_sub(self.mines)
    }

    /// Payout after every safe cell is revealed.
    pub fn max_payout(&self) -> Option<Credits> {
        payout(self.stake, self.safe_cells())
    }

    /// Mine count must leave at least one mine and one safe cell, and the largest possible payout must be
    /// representable.
    pub fn validate(&self) -> Result<()> {
        if self.mines == 0 || self.mines >= GRID_SIZE {
            return Err(GameError::InvalidMineCount(self.mines));
        }
        self.max_payout().ok_or(GameError::PayoutOverflow)?;
        Ok(())
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STAKE, DEFAULT_MINES)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub(crate) fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        debug_assert_eq!(mine_mask.len(), usize::from(GRID_SIZE));
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Builds a layout from explicit mine positions, duplicates are merged.
    pub fn from_mine_indices(mine_indices: &[CellIndex]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default([usize::from(GRID_SIDE); 2]);

        for &index in mine_indices {
            if index >= GRID_SIZE {
                return Err(GameError::InvalidIndex(index));
            }
            mine_mask[index.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        GRID_SIZE - self.mine_count
    }

    pub fn contains_mine(&self, index: CellIndex) -> bool {
        self[index]
    }

    /// Mine positions in ascending order.
    pub fn mine_indices(&self) -> impl Iterator<Item = CellIndex> + '_ {
        (0..GRID_SIZE).filter(|&index| self[index])
    }
}

impl Index<CellIndex> for MineLayout {
    type Output = bool;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.mine_mask[index.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Cell was already revealed.
    NoChange,
    Safe { payout: Credits },
    HitMine,
    /// Last safe cell revealed, payout already credited.
    Won { payout: Credits },
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Safe { .. } => true,
            HitMine => true,
            Won { .. } => true,
        }
    }

    pub const fn ends_round(self) -> bool {
        matches!(self, Self::HitMine | Self::Won { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_mine_counts_outside_board() {
        assert_eq!(
            RoundConfig::new(100, 0).validate(),
            Err(GameError::InvalidMineCount(0))
        );
        assert_eq!(
            RoundConfig::new(100, GRID_SIZE).validate(),
            Err(GameError::InvalidMineCount(GRID_SIZE))
        );
        assert_eq!(RoundConfig::new(100, GRID_SIZE - 1).validate(), Ok(()));
        for mines in MINE_PRESETS {
            assert_eq!(RoundConfig::new(DEFAULT_STAKE, mines).validate(), Ok(()));
        }
    }

    #[test]
    fn config_rejects_overflowing_stake() {
        assert_eq!(
            RoundConfig::new(Credits::MAX, 1).validate(),
            Err(GameError::PayoutOverflow)
        );
    }

    #[test]
    fn layout_from_indices_counts_mines() {
        let layout = MineLayout::from_mine_indices(&[0, 4, 4, 24]).unwrap();

        assert_eq!(layout.mine_count(), 3);
        assert_eq!(layout.safe_cell_count(), 22);
        assert!(layout.contains_mine(24));
        assert!(!layout.contains_mine(1));
        assert!(layout.mine_indices().eq([0, 4, 24]));
    }

    #[test]
    fn reveal_outcome_flags() {
        use RevealOutcome::*;

        assert!(!NoChange.has_update());
        assert!(!NoChange.ends_round());
        assert!(Safe { payout: 3_300 }.has_update());
        assert!(!Safe { payout: 3_300 }.ends_round());
        assert!(HitMine.has_update());
        assert!(HitMine.ends_round());
        assert!(Won { payout: 1_100 }.has_update());
        assert!(Won { payout: 1_100 }.ends_round());
    }

    #[test]
    fn layout_rejects_out_of_range_index() {
        assert_eq!(
            MineLayout::from_mine_indices(&[25]),
            Err(GameError::InvalidIndex(25))
        );
    }
}
