use anyhow::Context;
use mines_core::{
    CellView, DisplayCredits, GameEngine, GameError, RevealOutcome, RoundSnapshot, RoundState,
    Wallet,
};
use std::io::{BufRead, Write};

use crate::command::{Command, HELP};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Line-oriented host for one engine: reads commands, prints the outcome and the board.
pub struct Session<W> {
    engine: GameEngine<W>,
    json: bool,
}

impl<W: Wallet> Session<W> {
    pub fn new(engine: GameEngine<W>, json: bool) -> Self {
        Self { engine, json }
    }

    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
        self.print_status(&mut output)?;
        for line in input.lines() {
            let line = line.context("reading input")?;
            if line.trim().is_empty() {
                continue;
            }
            let flow = match line.parse::<Command>() {
                Ok(command) => self.execute(command, &mut output)?,
                Err(err) => {
                    writeln!(output, "{err:#}")?;
                    Flow::Continue
                }
            };
            output.flush()?;
            if flow == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    fn execute(&mut self, command: Command, output: &mut impl Write) -> anyhow::Result<Flow> {
        log::trace!("command {:?}", command);
        let result = match command {
            Command::Stake(stake) => {
                self.engine.set_stake(stake);
                self.print_status(output)
            }
            Command::Half => {
                self.engine.halve_stake();
                self.print_status(output)
            }
            Command::Double => {
                self.engine.double_stake();
                self.print_status(output)
            }
            Command::Max => {
                self.engine.max_stake();
                self.print_status(output)
            }
            Command::Mines(mines) => {
                self.engine.set_mines(mines);
                self.print_status(output)
            }
            Command::Start => match self.engine.start() {
                Ok(start) => {
                    writeln!(
                        output,
                        "round started: stake {}, {} mines",
                        DisplayCredits(start.stake),
                        start.mines
                    )?;
                    self.print_board(output)
                }
                Err(err) => report(output, err),
            },
            Command::Reveal(index) => match self.engine.reveal(index) {
                Ok(outcome) => {
                    match outcome {
                        RevealOutcome::NoChange => writeln!(output, "already revealed")?,
                        RevealOutcome::Safe { payout } => {
                            writeln!(output, "safe! payout {}", DisplayCredits(payout))?
                        }
                        RevealOutcome::HitMine => writeln!(output, "boom, stake lost")?,
                        RevealOutcome::Won { payout } => {
                            writeln!(output, "board cleared! won {}", DisplayCredits(payout))?
                        }
                    }
                    if outcome.ends_round() {
                        writeln!(output, "type start for another round")?;
                    }
                    if outcome.has_update() {
                        self.print_board(output)
                    } else {
                        Ok(())
                    }
                }
                Err(err) => report(output, err),
            },
            Command::CashOut => {
                if !self.engine.can_cash_out() && self.engine.state().is_in_progress() {
                    writeln!(output, "reveal a cell before cashing out")?;
                    return Ok(Flow::Continue);
                }
                match self.engine.cash_out() {
                    Ok(payout) => {
                        writeln!(output, "cashed out {}", DisplayCredits(payout))?;
                        self.print_board(output)
                    }
                    Err(err) => report(output, err),
                }
            }
            Command::Show => self.print_board(output),
            Command::Help => writeln!(output, "{HELP}").map_err(Into::into),
            Command::Quit => return Ok(Flow::Quit),
        };
        result.map(|()| Flow::Continue)
    }

    fn print_board(&self, output: &mut impl Write) -> anyhow::Result<()> {
        let snapshot = self.engine.snapshot();
        if self.json {
            serde_json::to_writer(&mut *output, &snapshot)?;
            writeln!(output)?;
            return Ok(());
        }
        for row in snapshot.rows() {
            let line: Vec<&str> = row.iter().map(|&cell| cell_glyph(cell)).collect();
            writeln!(output, "  {}", line.join(" "))?;
        }
        self.print_summary(&snapshot, output)
    }

    fn print_status(&self, output: &mut impl Write) -> anyhow::Result<()> {
        if self.json {
            return self.print_board(output);
        }
        self.print_summary(&self.engine.snapshot(), output)
    }

    fn print_summary(&self, snapshot: &RoundSnapshot, output: &mut impl Write) -> anyhow::Result<()> {
        let pending = self.engine.pending_config();
        writeln!(
            output,
            "balance {} | next stake {}, {} mines | {} | earnings {}",
            DisplayCredits(snapshot.balance),
            DisplayCredits(pending.stake),
            pending.mines,
            state_label(snapshot.state),
            DisplayCredits(snapshot.current_payout),
        )?;
        Ok(())
    }
}

fn report(output: &mut impl Write, err: GameError) -> anyhow::Result<()> {
    log::debug!("rejected: {:?}", err);
    writeln!(output, "{err}")?;
    Ok(())
}

fn cell_glyph(cell: CellView) -> &'static str {
    match cell {
        CellView::Hidden => ".",
        CellView::Safe => "o",
        CellView::Mine => "*",
    }
}

fn state_label(state: RoundState) -> &'static str {
    match state {
        RoundState::Idle => "idle",
        RoundState::InProgress => "in progress",
        RoundState::Won => "won",
        RoundState::Lost => "lost",
        RoundState::CashedOut => "cashed out",
    }
}
