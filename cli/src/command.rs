use anyhow::{Context, anyhow, bail};
use mines_core::{CellCount, CellIndex, Credits, coords_to_index};
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Stake(Credits),
    Half,
    Double,
    Max,
    Mines(CellCount),
    Start,
    Reveal(CellIndex),
    CashOut,
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  stake <amount>     set the stake for the next round
  half | double      halve or double the stake
  max                stake the whole balance
  mines <n>          set the mine count (1, 3, 5, 10, 15, 20)
  start              start a round
  reveal <index>     reveal cell 0..24
  r <row> <col>      reveal cell by row and column
  cashout            bank the current payout
  show               print the board
  help | quit";

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or_else(|| anyhow!("empty command"))?;
        let args: Vec<&str> = words.collect();

        let command = match (name.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("stake", [amount]) => Self::Stake(parse_credits(amount)?),
            ("half", []) => Self::Half,
            ("double", []) => Self::Double,
            ("max", []) => Self::Max,
            ("mines", [count]) => {
                Self::Mines(count.parse().with_context(|| format!("bad mine count {count:?}"))?)
            }
            ("start", []) => Self::Start,
            ("reveal", [index]) => {
                Self::Reveal(index.parse().with_context(|| format!("bad cell index {index:?}"))?)
            }
            ("r", [row, col]) => {
                let row = row.parse().with_context(|| format!("bad row {row:?}"))?;
                let col = col.parse().with_context(|| format!("bad column {col:?}"))?;
                Self::Reveal(
                    coords_to_index((row, col)).ok_or_else(|| anyhow!("no cell at {row},{col}"))?,
                )
            }
            ("cashout" | "cash", []) => Self::CashOut,
            ("show", []) => Self::Show,
            ("help" | "?", []) => Self::Help,
            ("quit" | "exit", []) => Self::Quit,
            _ => bail!("unknown command {line:?}, try help"),
        };
        Ok(command)
    }
}

/// Parses an amount with up to two decimals into minor units.
pub fn parse_credits(text: &str) -> anyhow::Result<Credits> {
    let (whole, fraction) = text.trim().split_once('.').unwrap_or((text.trim(), ""));
    if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        bail!("bad amount {text:?}, at most two decimals");
    }
    let whole: Credits = whole
        .parse()
        .with_context(|| format!("bad amount {text:?}"))?;
    let cents: Credits = format!("{fraction:0<2}").parse()?;
    whole
        .checked_mul(100)
        .and_then(|amount| amount.checked_add(cents))
        .ok_or_else(|| anyhow!("amount {text:?} too large"))
}
