//! Gameplay tests through the public API

use rand::rngs::StdRng;
use rand::SeedableRng;
use tetrs_engine::{
    Board, Cell, Command, Game, GameState, KeyMap, Outcome, TetrominoType,
};

/// First seed whose opening piece is `kind`
fn seed_opening_with(kind: TetrominoType) -> u64 {
    (0..10_000)
        .find(|&seed| Game::with_seed(10, 20, seed).current_piece().piece_type == kind)
        .expect("no seed opens with the requested piece")
}

fn drop_until_defeat<R: rand::Rng>(game: &mut Game<R>) -> usize {
    let mut drops = 0;
    loop {
        drops += 1;
        match game.handle_input(Command::HardDrop) {
            Outcome::Defeat => return drops,
            Outcome::Locked { .. } => continue,
            other => panic!("hard drop returned {other:?}"),
        }
    }
}

#[test]
fn test_i_piece_falls_to_bottom_row() {
    let mut game = Game::with_seed(10, 20, seed_opening_with(TetrominoType::I));
    let spawn = game.snapshot().active_cells();
    assert!(spawn.iter().all(|cell| cell.row == 0));

    let outcomes: Vec<Outcome> = (0..20).map(|_| game.tick()).collect();
    assert!(outcomes[..19].iter().all(|o| *o == Outcome::Moved));
    assert!(matches!(outcomes[19], Outcome::Locked { lines_cleared: 0, .. }));

    let snapshot = game.snapshot();
    for cell in spawn {
        assert!(snapshot.occupied(Cell::new(cell.col, 19)));
    }
    let filled: usize = snapshot.grid.iter().flatten().filter(|c| c.is_some()).count();
    assert_eq!(filled, 4);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.state, GameState::Falling);
}

#[test]
fn test_injected_rng_drives_the_game() {
    let rng = StdRng::seed_from_u64(11);
    let mut game = Game::new(Board::new(10, 20), rng);
    assert_eq!(game.state(), GameState::Falling);

    drop_until_defeat(&mut game);
    assert!(game.is_game_over());
    assert_eq!(game.tick(), Outcome::Ignored);
    assert_eq!(game.handle_input(Command::MoveLeft), Outcome::Ignored);

    game.start();
    assert_eq!(game.state(), GameState::Falling);
    assert_eq!(game.score().pieces, 0);
}

#[test]
fn test_defeat_is_reported_once_per_game() {
    let mut game = Game::with_seed(10, 20, 2024);
    for _ in 0..3 {
        drop_until_defeat(&mut game);
        let frozen = game.snapshot();
        for command in Command::all() {
            assert_eq!(game.handle_input(command), Outcome::Ignored);
        }
        assert_eq!(game.tick(), Outcome::Ignored);
        assert_eq!(game.snapshot(), frozen);
        game.start();
    }
}

#[test]
fn test_seeded_games_replay_identically() {
    let commands = [
        Command::MoveLeft,
        Command::Rotate,
        Command::SoftDrop,
        Command::MoveRight,
        Command::MoveRight,
        Command::HardDrop,
    ];
    let play = |seed| {
        let mut game = Game::with_seed(12, 24, seed);
        for command in commands.iter().cycle().take(300) {
            game.handle_input(*command);
            game.tick();
        }
        serde_json::to_string(&game.snapshot()).unwrap()
    };
    assert_eq!(play(5), play(5));
}

#[test]
fn test_key_script_moves_piece() {
    let mut game = Game::with_seed(10, 20, seed_opening_with(TetrominoType::O));
    let keys = KeyMap::default();
    let before = game.snapshot().active_cells();

    for command in keys.parse_script("left left down").unwrap() {
        assert_eq!(game.handle_input(command), Outcome::Moved);
    }

    let after = game.snapshot().active_cells();
    for (a, b) in before.iter().zip(after.iter()) {
        assert_eq!(b.col, a.col - 2);
        assert_eq!(b.row, a.row + 1);
    }
}

#[test]
fn test_landing_cells_match_hard_drop() {
    let mut game = Game::with_seed(10, 20, 77);
    let ghost = game.landing_cells();
    let kind = game.current_piece().piece_type;
    assert!(matches!(
        game.handle_input(Command::HardDrop),
        Outcome::Locked { .. }
    ));
    for cell in ghost {
        assert_eq!(
            game.board().get(cell),
            Some(tetrs_engine::Block::Filled(kind))
        );
    }
}
