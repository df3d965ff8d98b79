//! Integration tests for reward shaping.

use proptest::prelude::*;
use ttt_rewards::core::{Board, GameState, Move, Player};
use ttt_rewards::nn::{BoardEncoder, CellEncoding, FEATURE_WIDTH};
use ttt_rewards::rules::Outcome;
use ttt_rewards::training::{compute_rewards, PlayRecord, RewardConfig, RewardShaper};
use ttt_rewards::Error;

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-9, "{:?} != {:?}", actual, expected);
    }
}

/// X wins along the top row; O plays the middle row.
fn x_wins_top_row() -> (GameState, PlayRecord) {
    let mut game = GameState::with_seed(0);
    let mut record = PlayRecord::new(Player::X);

    record.play(&mut game, Move::new(0, 0).unwrap()).unwrap();
    game.play_o(1, 0).unwrap();
    record.play(&mut game, Move::new(0, 1).unwrap()).unwrap();
    game.play_o(1, 1).unwrap();
    record.play(&mut game, Move::new(0, 2).unwrap()).unwrap();

    (game, record)
}

// =============================================================================
// Reward Tests
// =============================================================================

#[test]
fn test_three_play_win() {
    let (game, record) = x_wins_top_row();
    let outcome = Outcome::from_winner(game.winner());

    let batch = compute_rewards(outcome, &record, &RewardConfig::default()).unwrap();
    assert_close(&batch.rewards, &[64.0, 80.0, 100.0]);
}

#[test]
fn test_loss_is_negative() {
    let mut record = PlayRecord::new(Player::X);
    record.push(Move::new(0, 0).unwrap(), Board::new());
    record.push(Move::new(2, 2).unwrap(), Board::new());

    let batch =
        compute_rewards(Outcome::Winner(Player::O), &record, &RewardConfig::default()).unwrap();
    assert_close(&batch.rewards, &[-80.0, -100.0]);
}

#[test]
fn test_draw_is_all_zero() {
    for n in 1..=5 {
        let mut record = PlayRecord::new(Player::X);
        for i in 0..n {
            record.push(Move::from_index(i).unwrap(), Board::new());
        }
        let batch = compute_rewards(Outcome::Draw, &record, &RewardConfig::default()).unwrap();
        assert_eq!(batch.len(), n);
        assert!(batch.rewards.iter().all(|&r| r == 0.0));
    }
}

#[test]
fn test_custom_config() {
    let (_, record) = x_wins_top_row();
    let config = RewardConfig::default()
        .with_win_reward(1.0)
        .with_discount_factor(0.5);

    let batch = compute_rewards(Outcome::Winner(Player::X), &record, &config).unwrap();
    assert_close(&batch.rewards, &[0.25, 0.5, 1.0]);
}

#[test]
fn test_o_perspective() {
    let mut record = PlayRecord::new(Player::O);
    record.push(Move::new(1, 1).unwrap(), Board::new());

    let shaper = RewardShaper::default();
    let win = shaper.compute(Outcome::Winner(Player::O), &record).unwrap();
    let loss = shaper.compute(Outcome::Winner(Player::X), &record).unwrap();
    assert_close(&win.rewards, &[100.0]);
    assert_close(&loss.rewards, &[-100.0]);

    // One-hot carries O's mark value
    assert_eq!(win.row(0).unwrap()[9 + 4], 1.0);
}

#[test]
fn test_empty_record_is_invalid_input() {
    let record = PlayRecord::new(Player::X);
    let result = compute_rewards(Outcome::Winner(Player::X), &record, &RewardConfig::default());
    assert!(matches!(result, Err(Error::InvalidInput { .. })));
}

#[test]
fn test_record_with_out_of_bounds_move_fails_to_decode() {
    let (_, record) = x_wins_top_row();
    let json = serde_json::to_string(&record).unwrap();
    let corrupted = json.replacen(r#""col":0"#, r#""col":7"#, 1);
    assert_ne!(json, corrupted);

    assert!(serde_json::from_str::<PlayRecord>(&json).is_ok());
    assert!(serde_json::from_str::<PlayRecord>(&corrupted).is_err());
}

#[test]
fn test_invalid_config_rejected() {
    let (_, record) = x_wins_top_row();
    let config = RewardConfig::default().with_discount_factor(0.0);
    assert!(matches!(
        compute_rewards(Outcome::Draw, &record, &config),
        Err(Error::InvalidConfiguration { .. })
    ));
}

// =============================================================================
// Feature Tests
// =============================================================================

#[test]
fn test_feature_rows_match_recorded_boards() {
    let (_, record) = x_wins_top_row();
    let batch = RewardShaper::default()
        .compute(Outcome::Winner(Player::X), &record)
        .unwrap();
    let encoder = BoardEncoder::default();

    assert_eq!(batch.shape(), (3, FEATURE_WIDTH));
    for (row, play) in batch.rows().zip(record.iter()) {
        assert_eq!(&row[..9], &encoder.encode_board(&play.board_before));
        assert_eq!(encoder.decode_board(&row[..9]), Some(play.board_before));
    }

    // Second play: board has x at (0,0), o at (1,0); move is (0,1)
    let row = batch.row(1).unwrap();
    assert_eq!(
        &row[..9],
        &[0.0, -1.0, -1.0, 1.0, -1.0, -1.0, -1.0, -1.0, -1.0]
    );
    assert_eq!(
        &row[9..],
        &[-1.0, 0.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0]
    );
}

#[test]
fn test_custom_encoding() {
    let (_, record) = x_wins_top_row();
    let encoding = CellEncoding {
        empty: 0.0,
        x: 1.0,
        o: 2.0,
    };
    let config = RewardConfig::default().with_encoding(encoding);
    let batch = compute_rewards(Outcome::Draw, &record, &config).unwrap();

    // First play: empty board, move (0,0)
    let row = batch.row(0).unwrap();
    assert!(row[..9].iter().all(|&v| v == 0.0));
    assert_eq!(row[9], 1.0);
    assert!(row[10..].iter().all(|&v| v == 0.0));
}

#[test]
fn test_batch_bytes_round_trip() {
    let (_, record) = x_wins_top_row();
    let batch = compute_rewards(Outcome::Winner(Player::X), &record, &RewardConfig::default())
        .unwrap();

    let bytes = batch.to_bytes().unwrap();
    let decoded = ttt_rewards::TrainingBatch::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, batch);
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_rewards_discount_geometrically(
        n in 1usize..=5,
        gamma in 0.05f64..=1.0,
        x_wins in any::<bool>(),
    ) {
        let mut record = PlayRecord::new(Player::X);
        for i in 0..n {
            record.push(Move::from_index(i).unwrap(), Board::new());
        }
        let outcome = if x_wins { Outcome::Winner(Player::X) } else { Outcome::Winner(Player::O) };
        let config = RewardConfig::default().with_discount_factor(gamma);
        let batch = compute_rewards(outcome, &record, &config).unwrap();

        let base = if x_wins { 100.0 } else { -100.0 };
        prop_assert_eq!(batch.len(), n);
        prop_assert_eq!(batch.features.len(), n * FEATURE_WIDTH);
        prop_assert!((batch.rewards[n - 1] - base).abs() < 1e-9);
        for i in 1..n {
            prop_assert!((batch.rewards[i - 1] - gamma * batch.rewards[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_compute_is_deterministic(seed in any::<u64>()) {
        let mut game = GameState::with_seed(seed);
        let mut record = PlayRecord::new(Player::X);
        let mut to_move = Player::X;
        while !game.is_terminal() {
            if to_move == Player::X {
                record.play_random(&mut game).unwrap();
            } else {
                game.random_legal_move(Player::O).unwrap();
            }
            to_move = to_move.opponent();
        }
        let outcome = Outcome::from_winner(game.winner());

        let a = compute_rewards(outcome, &record, &RewardConfig::default()).unwrap();
        let b = compute_rewards(outcome, &record, &RewardConfig::default()).unwrap();
        prop_assert_eq!(a, b);
    }
}
