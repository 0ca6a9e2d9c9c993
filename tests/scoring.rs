use quizboard::{
    Event, GameState, NoMx, SquareX, Variant,
    nomx::{self, ConfigEdit},
    roster::PlayerEdit,
    squarex,
};

fn play<V: Variant>(state: &GameState<V>, events: Vec<Event<V>>) -> GameState<V> {
    events
        .into_iter()
        .try_fold(state.clone(), |state, event| state.apply(event))
        .unwrap()
}

fn answers<V: Variant>(pattern: &[(bool, usize)]) -> Vec<Event<V>> {
    pattern
        .iter()
        .map(|&(correct, player)| {
            if correct {
                Event::Correct(player)
            } else {
                Event::Incorrect(player)
            }
        })
        .collect()
}

fn undos<V: Variant>(count: usize) -> Vec<Event<V>> {
    (0..count).map(|_| Event::Undo).collect()
}

const PATTERNS: &[&[(bool, usize)]] = &[
    &[(true, 0)],
    &[(false, 4), (false, 4)],
    &[(true, 0), (false, 1), (true, 2), (true, 0), (false, 3)],
    &[(true, 1), (true, 1), (true, 1), (false, 1), (true, 4), (false, 0), (true, 2)],
];

#[test]
fn test_nomx_record_then_undo_restores_state() {
    let start = play(
        &GameState::<NoMx>::initial(),
        vec![Event::Player(2, PlayerEdit::Correct(3))],
    );
    for pattern in PATTERNS {
        let recorded = play(&start, answers(pattern));
        assert_eq!(recorded.logs.len(), pattern.len());

        let undone = play(&recorded, undos(pattern.len()));
        assert_eq!(undone.players, start.players);
        assert_eq!(undone.logs, start.logs);
    }
}

#[test]
fn test_squarex_record_then_undo_restores_state() {
    let start = play(
        &GameState::<SquareX>::initial(),
        vec![
            Event::Config(squarex::ConfigEdit::Odd(3)),
            Event::Config(squarex::ConfigEdit::Even(7)),
        ],
    );
    for pattern in PATTERNS {
        let recorded = play(&start, answers(pattern));
        let undone = play(&recorded, undos(pattern.len()));
        assert_eq!(undone.players, start.players);
        assert_eq!(undone.logs, start.logs);
    }
}

#[test]
fn test_squarex_round_trip_survives_step_changes() {
    let start = GameState::<SquareX>::initial();
    for pattern in PATTERNS {
        let mut recorded = play(&start, answers(pattern));
        recorded = play(
            &recorded,
            vec![
                Event::Config(squarex::ConfigEdit::Odd(5)),
                Event::Config(squarex::ConfigEdit::Even(9)),
            ],
        );
        let undone = play(&recorded, undos(pattern.len()));
        assert_eq!(undone.players, start.players);
        assert!(undone.logs.is_empty());
    }
}

#[test]
fn test_resize_with_matching_count_changes_nothing() {
    let nomx = play(
        &GameState::<NoMx>::initial(),
        vec![
            Event::Player(0, PlayerEdit::Name("Ann".to_string())),
            Event::Correct(0),
            Event::Incorrect(4),
        ],
    );
    assert_eq!(play(&nomx, vec![Event::ResizeRoster]).players, nomx.players);

    let squarex = play(&GameState::<SquareX>::initial(), answers(&[(true, 1), (true, 1)]));
    assert_eq!(
        play(&squarex, vec![Event::ResizeRoster]).players,
        squarex.players
    );
}

#[test]
fn test_nomx_one_more_answer_crosses_threshold() {
    let start = play(
        &GameState::<NoMx>::initial(),
        vec![
            Event::Config(ConfigEdit::Win(4)),
            Event::Config(ConfigEdit::Lose(2)),
            Event::Player(0, PlayerEdit::Correct(3)),
            Event::Player(1, PlayerEdit::Incorrect(1)),
        ],
    );
    assert_eq!(start.status(0), Some(nomx::Status::Playing));
    assert_eq!(start.status(1), Some(nomx::Status::Playing));

    let after = play(&start, vec![Event::Correct(0), Event::Incorrect(1)]);
    assert_eq!(after.status(0), Some(nomx::Status::Win));
    assert_eq!(after.status(1), Some(nomx::Status::Lose));
}

#[test]
fn test_squarex_first_answers_follow_parity() {
    let start = play(
        &GameState::<SquareX>::initial(),
        vec![
            Event::Config(squarex::ConfigEdit::Odd(4)),
            Event::Config(squarex::ConfigEdit::Even(9)),
        ],
    );

    let first = play(&start, vec![Event::Correct(2)]);
    assert_eq!(first.players[2].odd, 4);
    assert_eq!(first.players[2].even, 0);

    let second = play(&first, vec![Event::Correct(2)]);
    assert_eq!(second.players[2].even, 9);
    assert_eq!(second.score(2), Some(36));
}

#[test]
fn test_nomx_lose_before_win() {
    let state = play(
        &GameState::<NoMx>::initial(),
        vec![
            Event::Config(ConfigEdit::Count(1)),
            Event::Config(ConfigEdit::Win(3)),
            Event::Config(ConfigEdit::Lose(2)),
            Event::Correct(0),
            Event::Correct(0),
            Event::Incorrect(0),
            Event::Incorrect(0),
        ],
    );
    assert_eq!(state.status(0), Some(nomx::Status::Lose));
}
