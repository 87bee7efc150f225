//! Capture integration tests: who is sent home, who is safe.
//!
//! Relative offsets for the cells used below (entry cells Green 0, Red 13,
//! Blue 26, Yellow 39):
//!
//! | global | Green | Red | Blue | Yellow |
//! |--------|-------|-----|------|--------|
//! | 0      | 0     | 39  | 26   | 13     |
//! | 5      | 5     | 44  | 31   | 18     |
//! | 8      | 8     | 47  | 34   | 21     |
//! | 9      | 9     | 48  | 35   | 22     |
//! | 13     | 13    | 0   | 39   | 26     |

use ludo_engine::board::global_cell;
use ludo_engine::core::{Action, TokenId, TokenRef};
use ludo_engine::rules::{LudoEngine, MoveKind, TurnOutcome};
use ludo_engine::{Color, GameState, LudoConfig, Position, SafeCellPolicy};

fn engine(policy: SafeCellPolicy) -> LudoEngine {
    LudoEngine::new(LudoConfig::default().with_seed(7).with_safe_cells(policy))
}

fn tref(color: Color, id: u8) -> TokenRef {
    TokenRef::new(color, TokenId::new(id).unwrap())
}

/// Green rolls `roll` and moves token 0.
fn green_moves(
    engine: &LudoEngine,
    state: &GameState,
    roll: u8,
) -> (GameState, ludo_engine::MoveOutcome) {
    let (state, _) = engine.roll_with(state, roll).unwrap();
    engine.move_token(&state, TokenId::new(0).unwrap()).unwrap()
}

// =============================================================================
// Captures
// =============================================================================

#[test]
fn test_capture_on_plain_cell() {
    let engine = engine(SafeCellPolicy::default());
    let state = engine
        .new_game()
        .with_position(tref(Color::Green, 0), Position::Track(2))
        .unwrap()
        .with_position(tref(Color::Red, 0), Position::Track(44))
        .unwrap();

    let (state, outcome) = green_moves(&engine, &state, 3);

    assert_eq!(outcome.kind, MoveKind::Capture);
    assert_eq!(outcome.captured.as_slice(), &[tref(Color::Red, 0)]);
    assert_eq!(state.token(tref(Color::Red, 0)).position, Position::Base);
    assert_eq!(state.token(tref(Color::Green, 0)).position, Position::Track(5));

    // No bonus roll for a capture.
    assert_eq!(outcome.turn, TurnOutcome::Passed { next: Color::Red });
    assert!(state
        .history()
        .iter()
        .any(|r| r.action == Action::Capture { victim: tref(Color::Red, 0) }));
}

#[test]
fn test_capture_with_six_retains_turn() {
    let engine = engine(SafeCellPolicy::default());
    let state = engine
        .new_game()
        .with_position(tref(Color::Green, 0), Position::Track(3))
        .unwrap()
        .with_position(tref(Color::Red, 2), Position::Track(48))
        .unwrap();

    let (state, outcome) = green_moves(&engine, &state, 6);

    assert_eq!(outcome.kind, MoveKind::Capture);
    assert_eq!(outcome.turn, TurnOutcome::Retained);
    assert!(state.token(tref(Color::Red, 2)).position.is_base());
    assert_eq!(state.turn(), Color::Green);
}

/// Every opposing token on the cell goes home, whatever its color.
#[test]
fn test_whole_stack_captured() {
    let engine = engine(SafeCellPolicy::default());
    let state = engine
        .new_game()
        .with_position(tref(Color::Green, 0), Position::Track(2))
        .unwrap()
        .with_position(tref(Color::Red, 0), Position::Track(44))
        .unwrap()
        .with_position(tref(Color::Red, 1), Position::Track(44))
        .unwrap()
        .with_position(tref(Color::Blue, 3), Position::Track(31))
        .unwrap();

    let (state, outcome) = green_moves(&engine, &state, 3);

    assert_eq!(outcome.captured.len(), 3);
    for victim in [tref(Color::Red, 0), tref(Color::Red, 1), tref(Color::Blue, 3)] {
        assert!(outcome.captured.contains(&victim));
        assert!(state.token(victim).position.is_base());
    }
}

/// A captured token must roll a 6 again to come back.
#[test]
fn test_captured_token_needs_six_to_return() {
    let engine = engine(SafeCellPolicy::default());
    let state = engine
        .new_game()
        .with_position(tref(Color::Green, 0), Position::Track(2))
        .unwrap()
        .with_position(tref(Color::Red, 0), Position::Track(44))
        .unwrap();

    let (state, _) = green_moves(&engine, &state, 3);
    assert_eq!(state.turn(), Color::Red);

    let (state, roll) = engine.roll_with(&state, 4).unwrap();
    assert!(roll.is_stuck());
    assert_eq!(state.turn(), Color::Blue);
}

// =============================================================================
// Safety
// =============================================================================

/// Same-color tokens share a cell.
#[test]
fn test_own_tokens_stack() {
    let engine = engine(SafeCellPolicy::default());
    let state = engine
        .new_game()
        .with_position(tref(Color::Green, 0), Position::Track(2))
        .unwrap()
        .with_position(tref(Color::Green, 1), Position::Track(5))
        .unwrap();

    let (state, outcome) = green_moves(&engine, &state, 3);

    assert_eq!(outcome.kind, MoveKind::Advance);
    assert!(outcome.captured.is_empty());
    assert_eq!(state.token(tref(Color::Green, 1)).position, Position::Track(5));
}

/// Entry cells are safe under every policy.
#[test]
fn test_entry_cell_is_safe() {
    for policy in [SafeCellPolicy::EntryCells, SafeCellPolicy::EntryAndStarCells] {
        let engine = engine(policy);
        let state = engine
            .new_game()
            .with_position(tref(Color::Green, 0), Position::Track(10))
            .unwrap()
            .with_position(tref(Color::Red, 0), Position::Track(0))
            .unwrap();

        let (state, outcome) = green_moves(&engine, &state, 3);

        assert_eq!(outcome.kind, MoveKind::Advance, "{:?}", policy);
        assert_eq!(state.token(tref(Color::Red, 0)).position, Position::Track(0));
        assert_eq!(
            global_cell(Color::Green, state.token(tref(Color::Green, 0)).position),
            global_cell(Color::Red, Position::Track(0))
        );
    }
}

/// Entering play never captures: the entry cell is safe.
#[test]
fn test_entering_shares_entry_cell() {
    let engine = engine(SafeCellPolicy::EntryCells);
    let state = engine
        .new_game()
        .with_position(tref(Color::Yellow, 1), Position::Track(13))
        .unwrap();

    let (state, outcome) = green_moves(&engine, &state, 6);

    assert_eq!(outcome.kind, MoveKind::EnterPlay);
    assert_eq!(state.token(tref(Color::Yellow, 1)).position, Position::Track(13));
}

/// Star cells protect only under the default policy.
#[test]
fn test_star_cell_depends_on_policy() {
    let setup = |engine: &LudoEngine| {
        engine
            .new_game()
            .with_position(tref(Color::Green, 0), Position::Track(4))
            .unwrap()
            .with_position(tref(Color::Red, 0), Position::Track(47))
            .unwrap()
    };

    let guarded = engine(SafeCellPolicy::EntryAndStarCells);
    let (state, outcome) = green_moves(&guarded, &setup(&guarded), 4);
    assert!(outcome.captured.is_empty());
    assert_eq!(state.token(tref(Color::Red, 0)).position, Position::Track(47));

    let open = engine(SafeCellPolicy::EntryCells);
    let (state, outcome) = green_moves(&open, &setup(&open), 4);
    assert_eq!(outcome.kind, MoveKind::Capture);
    assert!(state.token(tref(Color::Red, 0)).position.is_base());
}

/// Tokens in a home lane are off the shared loop and cannot be hit.
#[test]
fn test_home_lane_tokens_immune() {
    let engine = engine(SafeCellPolicy::default());
    let state = engine
        .new_game()
        .with_position(tref(Color::Green, 0), Position::Track(2))
        .unwrap()
        .with_position(tref(Color::Red, 0), Position::HomeStretch(2))
        .unwrap()
        .with_position(tref(Color::Blue, 0), Position::Finished)
        .unwrap();

    let (state, outcome) = green_moves(&engine, &state, 3);

    assert!(outcome.captured.is_empty());
    assert_eq!(state.token(tref(Color::Red, 0)).position, Position::HomeStretch(2));
    assert_eq!(state.token(tref(Color::Blue, 0)).position, Position::Finished);
}

/// Moving into one's own home lane captures nothing, even when an
/// opponent sits on the last loop cell before it.
#[test]
fn test_entering_home_lane_captures_nothing() {
    let engine = engine(SafeCellPolicy::default());
    let state = engine
        .new_game()
        .with_position(tref(Color::Green, 0), Position::Track(48))
        .unwrap()
        // Red offset 37 is global cell 50, the cell Green passes over.
        .with_position(tref(Color::Red, 0), Position::Track(37))
        .unwrap();

    let (state, outcome) = green_moves(&engine, &state, 4);

    assert_eq!(outcome.to, Position::HomeStretch(2));
    assert!(outcome.captured.is_empty());
    assert_eq!(state.token(tref(Color::Red, 0)).position, Position::Track(37));
}
