//! Game lifecycle tests.
//!
//! These tests drive full games through the `Referee` with scripted bot
//! moves and check the announced results against the recorded state.

use rps_referee::core::{GameError, Move, Outcome, RefereeConfig, ScriptedRandom, Winner};
use rps_referee::game::{GameSnapshot, Referee, RoundRecord};
use rps_referee::rules::InvalidMove;

fn referee_with_bot(bot_moves: &[Move]) -> Referee<ScriptedRandom> {
    Referee::with_rng(
        RefereeConfig::default(),
        ScriptedRandom::from_bot_moves(bot_moves),
    )
    .unwrap()
}

/// rock beats scissors, bomb beats paper: the user clinches in two rounds
/// and the third round is never played.
#[test]
fn test_user_clinches_early() {
    let mut referee = referee_with_bot(&[Move::Scissors, Move::Paper, Move::Rock]);

    let first = referee.play_round("rock").unwrap();
    assert_eq!(first.outcome, Outcome::UserWins);
    assert!(!first.game_over);

    let second = referee.play_round("bomb").unwrap();
    assert_eq!(second.outcome, Outcome::UserWins);
    assert_eq!((second.user_score, second.bot_score), (2, 0));
    assert!(second.game_over);
    assert_eq!(second.winner, Some(Winner::User));

    let third = referee.play_round("scissors");
    assert_eq!(third, Err(GameError::GameOver { rounds_played: 2 }));

    let state = referee.get_state();
    assert_eq!(state.round_number, 2);
    assert_eq!(state.rounds_history.len(), 2);
    assert_eq!(state.winner(), Some(Winner::User));
}

/// The same moves with early finish disabled play all three rounds: 2-1.
#[test]
fn test_full_three_rounds_without_early_finish() {
    let config = RefereeConfig::default().with_wins_to_clinch(3);
    let bot = ScriptedRandom::from_bot_moves(&[Move::Scissors, Move::Paper, Move::Rock]);
    let mut referee = Referee::with_rng(config, bot).unwrap();

    let outcomes: Vec<_> = ["rock", "bomb", "scissors"]
        .iter()
        .map(|input| referee.play_round(input).unwrap().outcome)
        .collect();

    assert_eq!(
        outcomes,
        vec![Outcome::UserWins, Outcome::UserWins, Outcome::BotWins]
    );

    let state = referee.get_state();
    assert_eq!((state.user_score, state.bot_score), (2, 1));
    assert!(state.game_over);
    assert_eq!(state.winner(), Some(Winner::User));
}

#[test]
fn test_invalid_first_round() {
    let mut referee = referee_with_bot(&[Move::Paper]);

    let result = referee.play_round("banana").unwrap();
    assert_eq!(result.round_number, 1);
    assert_eq!(result.user_move, Move::Invalid);
    assert_eq!(result.outcome, Outcome::BotWins);
    assert_eq!(result.bot_score, 1);

    let state = referee.get_state();
    assert_eq!(
        state.rounds_history,
        vec![RoundRecord {
            round: 1,
            user_move: Move::Invalid,
            bot_move: Move::Paper,
            outcome: Outcome::BotWins,
            user_score: 0,
            bot_score: 1,
        }]
    );
}

#[test]
fn test_bot_clinches_on_two_wasted_rounds() {
    let mut referee = referee_with_bot(&[Move::Rock, Move::Rock]);

    referee.play_round("").unwrap();
    let second = referee.play_round("   ").unwrap();

    assert!(second.game_over);
    assert_eq!(second.winner, Some(Winner::Bot));
    assert_eq!(second.bot_score, 2);
}

#[test]
fn test_three_draws_end_in_draw() {
    let mut referee = referee_with_bot(&[Move::Rock, Move::Paper, Move::Scissors]);

    for input in ["rock", "paper", "scissors"] {
        assert_eq!(referee.play_round(input).unwrap().outcome, Outcome::Draw);
    }

    let state = referee.get_state();
    assert!(state.game_over);
    assert_eq!(state.round_number, 3);
    assert_eq!(state.winner(), Some(Winner::Draw));
}

#[test]
fn test_double_bomb_draws_then_bombs_are_spent() {
    let mut referee = referee_with_bot(&[Move::Bomb, Move::Rock]);

    let first = referee.play_round("BOMB").unwrap();
    assert_eq!(first.bot_move, Move::Bomb);
    assert_eq!(first.outcome, Outcome::Draw);
    assert!(first.user_bomb_used);
    assert!(first.bot_bomb_used);

    let second = referee.play_round("bomb").unwrap();
    assert_eq!(second.user_move, Move::Invalid);
    assert_eq!(second.invalid_reason, Some(InvalidMove::BombAlreadyUsed));
    assert_eq!(second.outcome, Outcome::BotWins);
}

#[test]
fn test_bomb_survives_wasted_rounds() {
    // A rejected bomb never spends the bomb.
    let mut referee = referee_with_bot(&[Move::Rock, Move::Rock]);

    referee.play_round("b0mb").unwrap();
    assert!(!referee.get_state().user_bomb_used);
    assert!(referee.validate_move_for_user("bomb").is_valid());

    let result = referee.play_round("bomb").unwrap();
    assert_eq!(result.outcome, Outcome::UserWins);
}

#[test]
fn test_reset_after_game_over_allows_new_game() {
    let mut referee = referee_with_bot(&[
        Move::Scissors,
        Move::Scissors,
        Move::Paper,
    ]);

    referee.play_round("bomb").unwrap();
    referee.play_round("rock").unwrap();
    assert!(referee.play_round("rock").is_err());

    assert_eq!(referee.reset_game(), GameSnapshot::default());

    let result = referee.play_round("scissors").unwrap();
    assert_eq!(result.round_number, 1);
    assert_eq!(result.outcome, Outcome::UserWins);
    assert!(!result.user_bomb_used);
}

#[test]
fn test_reset_mid_game() {
    let mut referee = referee_with_bot(&[Move::Rock]);
    referee.play_round("paper").unwrap();

    let snapshot = referee.reset_game();
    assert_eq!(snapshot.round_number, 0);
    assert_eq!(snapshot.user_score, 0);
    assert_eq!(snapshot.bot_score, 0);
    assert!(!snapshot.user_bomb_used);
    assert!(!snapshot.bot_bomb_used);
    assert!(snapshot.rounds_history.is_empty());
    assert!(!snapshot.game_over);
}

#[test]
fn test_longer_configured_game() {
    let config = RefereeConfig::default()
        .with_max_rounds(5)
        .with_wins_to_clinch(3);
    let bot = ScriptedRandom::from_bot_moves(&[Move::Rock; 5]);
    let mut referee = Referee::with_rng(config, bot).unwrap();

    for _ in 0..2 {
        referee.play_round("paper").unwrap();
    }
    assert!(!referee.get_state().game_over);

    let third = referee.play_round("paper").unwrap();
    assert!(third.game_over);
    assert_eq!(third.winner, Some(Winner::User));
}

#[test]
fn test_round_result_json_for_conversation_layer() {
    let mut referee = referee_with_bot(&[Move::Scissors]);
    let result = referee.play_round("rock").unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "round_number": 1,
            "user_move": "rock",
            "bot_move": "scissors",
            "outcome": "user_wins",
            "user_score": 1,
            "bot_score": 0,
            "game_over": false,
            "winner": null,
            "user_bomb_used": false,
            "bot_bomb_used": false
        })
    );
}
