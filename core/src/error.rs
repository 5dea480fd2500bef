use thiserror::Error;

use crate::{CellCount, CellIndex, Credits};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Insufficient funds: stake {needed} exceeds balance {available}")]
    InsufficientFunds { needed: Credits, available: Credits },
    #[error("Invalid mine count {0}")]
    InvalidMineCount(CellCount),
    #[error("Invalid cell index {0}")]
    InvalidIndex(CellIndex),
    #[error("No round in progress")]
    RoundNotActive,
    #[error("Stake too large, payout would overflow")]
    PayoutOverflow,
    #[error("Generated layout has {actual} mines, expected {expected}")]
    LayoutMismatch {
        expected: CellCount,
        actual: CellCount,
    },
}

pub type Result<T> = core::result::Result<T, GameError>;
