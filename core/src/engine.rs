use rand::{Rng, SeedableRng, rngs::SmallRng};
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Idle -> InProgress
/// - InProgress -> Won | Lost | CashedOut
/// - any -> InProgress, by starting the next round
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// No round played yet
    Idle,
    InProgress,
    /// Every safe cell revealed, payout credited
    Won,
    /// Hit a mine, stake forfeited
    Lost,
    /// Player stopped early, payout credited
    CashedOut,
}

impl RoundState {
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::CashedOut)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    /// On loss also uncover the safe cells the player never reached, not only the mines.
    pub reveal_all_on_loss: bool,
}

/// Summary of a successfully started round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoundStart {
    pub stake: Credits,
    pub mines: CellCount,
    /// Balance right after the stake was taken.
    pub balance: Credits,
}

/// Runs rounds one after another against a wallet.
///
/// Configuration goes to a pending slot and is only picked up by the next [`start`](Self::start), so changing it never
/// affects a round in progress.
#[derive(Clone, Debug)]
pub struct GameEngine<W> {
    wallet: W,
    rules: GameRules,
    pending: RoundConfig,
    config: RoundConfig,
    grid: Grid,
    state: RoundState,
    revealed_safe_count: CellCount,
    current_payout: Credits,
    triggered_mine: Option<CellIndex>,
    rng: SmallRng,
}

impl<W: Wallet> GameEngine<W> {
    pub fn new(wallet: W, seed: u64) -> Self {
        Self {
            wallet,
            rules: GameRules::default(),
            pending: RoundConfig::default(),
            config: RoundConfig::default(),
            grid: Grid::default(),
            state: RoundState::default(),
            revealed_safe_count: 0,
            current_payout: 0,
            triggered_mine: None,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn with_rules(mut self, rules: GameRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Config of the current (or last) round.
    pub fn config(&self) -> RoundConfig {
        self.config
    }

    /// Config the next round will start with.
    pub fn pending_config(&self) -> RoundConfig {
        self.pending
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe_count
    }

    pub fn current_payout(&self) -> Credits {
        self.current_payout
    }

    /// What the payout would become after one more safe reveal.
    pub fn next_payout(&self) -> Option<Credits> {
        if !self.state.is_in_progress() || self.revealed_safe_count >= self.config.safe_cells() {
            return None;
        }
        payout(self.config.stake, self.revealed_safe_count + 1)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell_view(&self, index: CellIndex) -> Result<CellView> {
        let index = validate_index(index)?;
        Ok(self.grid.cell(index).view())
    }

    pub fn triggered_mine(&self) -> Option<CellIndex> {
        self.triggered_mine
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    pub fn into_wallet(self) -> W {
        self.wallet
    }

    pub fn balance(&self) -> Credits {
        self.wallet.balance()
    }

    pub fn can_reveal(&self, index: CellIndex) -> bool {
        self.state.is_in_progress() && index < GRID_SIZE && self.grid.cell(index).is_hidden()
    }

    /// Cash-out only pays something once a safe cell has been revealed.
    pub fn can_cash_out(&self) -> bool {
        self.state.is_in_progress() && self.revealed_safe_count > 0
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot::from_engine(self)
    }

    /// Stores the config for the next round, validation happens on [`start`](Self::start).
    pub fn configure(&mut self, stake: Credits, mines: CellCount) {
        self.pending = RoundConfig::new(stake, mines);
    }

    pub fn set_stake(&mut self, stake: Credits) {
        self.pending.stake = stake;
    }

    pub fn set_mines(&mut self, mines: CellCount) {
        self.pending.mines = mines;
    }

    pub fn halve_stake(&mut self) {
        self.pending.stake /= 2;
    }

    pub fn double_stake(&mut self) {
        self.pending.stake = self.pending.stake.saturating_mul(2);
    }

    /// Stakes the whole current balance.
    pub fn max_stake(&mut self) {
        self.pending.stake = self.wallet.balance();
    }

    /// Starts a round with a randomly placed minefield.
    pub fn start(&mut self) -> Result<RoundStart> {
        let seed = self.rng.random();
        self.start_with(RandomMinefieldGenerator::new(seed))
    }

    /// Starts a round with the minefield `generator` produces. Callable from any state, the previous round is
    /// discarded.
    pub fn start_with<G: MinefieldGenerator>(&mut self, generator: G) -> Result<RoundStart> {
        let config = self.pending;
        config.validate()?;
        self.wallet.debit(config.stake)?;

        let layout = generator.generate(config);
        if layout.mine_count() != config.mines {
            log::error!(
                "Generated {} mines instead of {}, refunding stake",
                layout.mine_count(),
                config.mines
            );
            self.wallet.credit(config.stake);
            return Err(GameError::LayoutMismatch {
                expected: config.mines,
                actual: layout.mine_count(),
            });
        }

        self.config = config;
        self.grid = Grid::from_layout(&layout);
        self.revealed_safe_count = 0;
        self.current_payout = 0;
        self.triggered_mine = None;
        self.state = RoundState::InProgress;

        let balance = self.wallet.balance();
        log::debug!(
            "round started, stake {}, mines {}, balance {}",
            config.stake,
            config.mines,
            balance
        );
        Ok(RoundStart {
            stake: config.stake,
            mines: config.mines,
            balance,
        })
    }

    pub fn reveal(&mut self, index: CellIndex) -> Result<RevealOutcome> {
        use CellState::*;

        let index = validate_index(index)?;
        self.check_in_progress()?;

        Ok(match self.grid.cell(index) {
            HiddenSafe => {
                self.grid.set(index, RevealedSafe);
                self.revealed_safe_count += 1;
                // the config was validated so every payout up to the last safe cell fits
                self.current_payout =
                    payout(self.config.stake, self.revealed_safe_count).unwrap_or(Credits::MAX);
                log::trace!(
                    "safe cell {}, revealed {}, payout {}",
                    index,
                    self.revealed_safe_count,
                    self.current_payout
                );

                if self.revealed_safe_count == self.config.safe_cells() {
                    let payout = self.settle(RoundState::Won);
                    RevealOutcome::Won { payout }
                } else {
                    RevealOutcome::Safe {
                        payout: self.current_payout,
                    }
                }
            }
            HiddenMine => {
                self.grid.set(index, RevealedMine);
                self.triggered_mine = Some(index);
                self.grid.reveal_mines();
                if self.rules.reveal_all_on_loss {
                    self.grid.reveal_all();
                }
                self.current_payout = 0;
                self.state = RoundState::Lost;
                log::debug!(
                    "hit mine at {}, lost stake {}",
                    index,
                    self.config.stake
                );
                RevealOutcome::HitMine
            }
            RevealedSafe | RevealedMine => RevealOutcome::NoChange,
        })
    }

    /// Ends the round and credits the current payout, which is `0` if nothing was revealed yet.
    pub fn cash_out(&mut self) -> Result<Credits> {
        self.check_in_progress()?;
        if self.revealed_safe_count == 0 {
            log::warn!("cashing out before any reveal pays nothing");
        }
        Ok(self.settle(RoundState::CashedOut))
    }

    /// Credits the payout before entering the terminal state, so a finished round is never observed uncredited.
    fn settle(&mut self, terminal: RoundState) -> Credits {
        let payout = self.current_payout;
        self.wallet.credit(payout);
        self.grid.reveal_mines();
        self.state = terminal;
        log::debug!(
            "round ended {:?}, credited {}, balance {}",
            terminal,
            payout,
            self.wallet.balance()
        );
        payout
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.state.is_in_progress() {
            Ok(())
        } else {
            Err(GameError::RoundNotActive)
        }
    }
}

fn validate_index(index: CellIndex) -> Result<CellIndex> {
    if index < GRID_SIZE {
        Ok(index)
    } else {
        Err(GameError::InvalidIndex(index))
    }
}
