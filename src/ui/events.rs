use crate::game::{GameState, GameStatus, Player};

/// What the app learns about each applied move. Sent from the engine's
/// observer callback to the app over a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvent {
    pub player: Player,
    pub row: usize,
    pub column: usize,
    pub moves_made: usize,
    pub status: GameStatus,
}

impl MoveEvent {
    /// Build the event for the move that produced `state`. The mover is the
    /// owner of the last disc, which is not always the current player.
    pub fn from_state(state: &GameState) -> Option<Self> {
        let (row, column) = state.last_move()?;
        let player = state.status().winner().unwrap_or(match state.status() {
            GameStatus::InProgress => state.current_player().other(),
            _ => state.current_player(),
        });
        Some(MoveEvent {
            player,
            row,
            column,
            moves_made: state.moves_made(),
            status: state.status(),
        })
    }

    /// Message line text for this move
    pub fn describe(&self) -> String {
        match self.status {
            GameStatus::OneWins | GameStatus::TwoWins => format!("{} wins!", self.player.name()),
            GameStatus::Tie => "It's a draw!".to_string(),
            GameStatus::InProgress => format!(
                "{} dropped into column {}",
                self.player.name(),
                self.column
            ),
        }
    }
}
