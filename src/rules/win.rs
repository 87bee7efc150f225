//! Win detector.

use tracing::info;

use crate::core::{Color, GameState, Phase};

/// Conclude the game if `color` has finished all four tokens.
///
/// Returns true when the game was concluded. Only the first finisher is
/// ever recorded: once concluded no further move can reach this check.
pub(crate) fn check_winner(state: &mut GameState, color: Color) -> bool {
    if !state.player(color).has_won() {
        return false;
    }

    info!(winner = %color, turn = state.turn_number, "game concluded");
    state.phase = Phase::Concluded;
    state.winner = Some(color);
    state.disarm();
    true
}

/// The winner, if the game has one.
#[must_use]
pub fn winner(state: &GameState) -> Option<Color> {
    state.winner()
}
