use mines_core::*;

fn engine(balance: Credits, stake: Credits, mines: CellCount) -> GameEngine<MemoryWallet> {
    let mut engine = GameEngine::new(MemoryWallet::new(balance), 1234);
    engine.configure(stake, mines);
    engine
}

fn safe_cells<W: Wallet>(engine: &GameEngine<W>) -> Vec<CellIndex> {
    (0..GRID_SIZE)
        .filter(|&index| engine.grid().cell(index) == CellState::HiddenSafe)
        .collect()
}

fn first_mine<W: Wallet>(engine: &GameEngine<W>) -> CellIndex {
    (0..GRID_SIZE)
        .find(|&index| engine.grid().cell(index) == CellState::HiddenMine)
        .unwrap()
}

#[test]
fn two_safe_reveals_pay_one_point_two() {
    let mut engine = engine(100_000, 3_000, 3);
    engine.start().unwrap();

    let safe = safe_cells(&engine);
    engine.reveal(safe[0]).unwrap();
    engine.reveal(safe[1]).unwrap();

    assert_eq!(engine.revealed_safe_count(), 2);
    assert_eq!(engine.current_payout(), 3_600);
}

#[test]
fn stake_above_balance_is_rejected() {
    let mut engine = engine(5_000, 10_000, 3);

    assert_eq!(
        engine.start(),
        Err(GameError::InsufficientFunds {
            needed: 10_000,
            available: 5_000
        })
    );
    assert_eq!(engine.balance(), 5_000);
    assert_eq!(engine.state(), RoundState::Idle);
}

#[test]
fn clearing_the_board_wins_automatically() {
    let mut engine = engine(10_000, 1_000, 20);
    engine.start().unwrap();
    let safe = safe_cells(&engine);
    assert_eq!(safe.len(), 5);

    let mut outcomes = safe.iter().map(|&index| engine.reveal(index).unwrap());
    for _ in 0..4 {
        assert!(matches!(outcomes.next(), Some(RevealOutcome::Safe { .. })));
    }
    assert_eq!(outcomes.next(), Some(RevealOutcome::Won { payout: 1_500 }));
    drop(outcomes);

    assert_eq!(engine.state(), RoundState::Won);
    assert_eq!(engine.balance(), 10_000 - 1_000 + 1_500);
    assert!(!engine.grid().has_hidden_mines());
}

#[test]
fn mine_on_first_click_forfeits_stake() {
    let mut engine = engine(10_000, 2_000, 5);
    engine.start().unwrap();
    let mine = first_mine(&engine);

    assert_eq!(engine.reveal(mine).unwrap(), RevealOutcome::HitMine);

    assert_eq!(engine.state(), RoundState::Lost);
    assert_eq!(engine.balance(), 8_000);
    assert_eq!(engine.grid().count(CellState::RevealedMine), 5);
    assert!(!engine.grid().has_hidden_mines());
    let shown_mines = engine
        .snapshot()
        .cells
        .iter()
        .filter(|&&cell| cell == CellView::Mine)
        .count();
    assert_eq!(shown_mines, 5);
}

#[test]
fn finished_round_ignores_further_reveals() {
    let mut engine = engine(10_000, 2_000, 5);
    engine.start().unwrap();
    let mine = first_mine(&engine);
    engine.reveal(mine).unwrap();
    let before = engine.snapshot();

    for index in 0..GRID_SIZE {
        assert_eq!(engine.reveal(index), Err(GameError::RoundNotActive));
    }

    assert_eq!(engine.snapshot(), before);
}

#[test]
fn cash_out_conserves_money() {
    let mut engine = engine(50_000, 4_000, 10);
    engine.start().unwrap();
    for &index in safe_cells(&engine).iter().take(7) {
        engine.reveal(index).unwrap();
    }

    let credited = engine.cash_out().unwrap();

    assert_eq!(credited, 4_000 * 17 / 10);
    assert_eq!(engine.balance(), 50_000 - 4_000 + credited);
    assert_eq!(engine.state(), RoundState::CashedOut);
    assert!(!engine.grid().has_hidden_mines());
}

#[test]
fn rounds_chain_on_the_same_wallet() {
    let mut engine = engine(10_000, 1_000, 1);

    for _ in 0..5 {
        engine.start().unwrap();
        let safe = safe_cells(&engine);
        engine.reveal(safe[0]).unwrap();
        engine.cash_out().unwrap();
    }

    assert_eq!(engine.balance(), 10_000 + 5 * 100);
}

#[test]
fn borrowed_wallet_sees_settlement() {
    let mut wallet = MemoryWallet::new(10_000);
    {
        let mut engine = GameEngine::new(&mut wallet, 9);
        engine.configure(2_500, 3);
        engine.start().unwrap();
        let mine = first_mine(&engine);
        engine.reveal(mine).unwrap();
    }
    assert_eq!(wallet.balance(), 7_500);
}

#[test]
fn snapshot_serializes_for_presentation() {
    let mut engine = engine(10_000, 3_000, 3);
    engine.start().unwrap();
    let safe = safe_cells(&engine);
    engine.reveal(safe[0]).unwrap();

    let json = serde_json::to_value(engine.snapshot()).unwrap();

    assert_eq!(json["state"], "InProgress");
    assert_eq!(json["current_payout"], 3_300);
    assert_eq!(json["cells"].as_array().unwrap().len(), 25);
    assert_eq!(
        json["cells"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|cell| *cell == "Safe")
            .count(),
        1
    );
}
