use core::fmt;

use crate::{CellCount, Credits};

/// Denominator for basis-point rates.
pub const BPS_SCALE: u64 = 10_000;

/// Payout growth per revealed safe cell, 0.1 of the stake.
pub const EARNINGS_RATE_BPS: u64 = 1_000;

/// Amount paid out after `revealed` safe cells: `stake × (1 + revealed × 0.1)`, rounded down.
///
/// Nothing has been earned before the first reveal, so `revealed == 0` pays `0` rather than the stake. Returns `None`
/// when the result does not fit [`Credits`].
///
/// Each reveal adds a tenth of the stake, so for stakes below 10 minor units the rounded payout is only
/// non-decreasing: it can stay flat across several reveals.
pub fn payout(stake: Credits, revealed: CellCount) -> Option<Credits> {
    if revealed == 0 {
        return Some(0);
    }
    let multiplier_bps = u128::from(BPS_SCALE) + u128::from(revealed) * u128::from(EARNINGS_RATE_BPS);
    let amount = u128::from(stake).checked_mul(multiplier_bps)? / u128::from(BPS_SCALE);
    Credits::try_from(amount).ok()
}

/// Formats minor units with two decimals, `3600` as `36.00`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DisplayCredits(pub Credits);

impl fmt::Display for DisplayCredits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
