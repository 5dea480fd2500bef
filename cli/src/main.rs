use clap::Parser;
use mines_core::{CellCount, Credits, DEFAULT_MINES, GameEngine, GameRules, MemoryWallet};
use std::io;

mod command;
mod session;

use command::parse_credits;
use session::Session;

#[derive(Parser, Debug)]
#[command(version, about = "Play Mines in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Starting balance
    #[arg(long, default_value = "1000.00", value_parser = parse_credits)]
    balance: Credits,

    /// Stake for the first round
    #[arg(long, default_value = "30.00", value_parser = parse_credits)]
    stake: Credits,

    /// Mines for the first round
    #[arg(short, long, default_value_t = DEFAULT_MINES)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Uncover the whole board when a mine is hit
    #[arg(long)]
    reveal_all_on_loss: bool,

    /// Print round snapshots as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut engine = GameEngine::new(MemoryWallet::new(args.balance), seed).with_rules(GameRules {
        reveal_all_on_loss: args.reveal_all_on_loss,
    });
    engine.configure(args.stake, args.mines);

    let mut session = Session::new(engine, args.json);
    session.run(io::stdin().lock(), io::stdout().lock())
}
