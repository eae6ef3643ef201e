use std::fmt;

use super::board::{Board, Cell, COLS, ROWS};
use super::Player;

/// Where a game stands. Every variant except `InProgress` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    OneWins,
    TwoWins,
    Tie,
}

impl GameStatus {
    /// Winning status for `player`
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::One => GameStatus::OneWins,
            Player::Two => GameStatus::TwoWins,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::OneWins => Some(Player::One),
            GameStatus::TwoWins => Some(Player::Two),
            GameStatus::InProgress | GameStatus::Tie => None,
        }
    }
}

/// Status label as printed by the console front-end.
impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameStatus::InProgress => "NOT_OVER",
            GameStatus::OneWins => "P1_WINS",
            GameStatus::TwoWins => "P2_WINS",
            GameStatus::Tie => "TIE",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column is out of range")]
    InvalidColumn,
    #[error("game is over")]
    GameOver,
}

/// Board contents plus turn bookkeeping. This is what observers see after
/// every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    moves_made: usize,
    status: GameStatus,
    last_move: Option<(usize, usize)>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::One, // One starts
            moves_made: 0,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    /// Player whose turn it is. After a win this stays on the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// (row, column) of the most recent disc
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Occupant of a cell. Panics if the coordinates are off the board.
    pub fn contents(&self, row: usize, col: usize) -> Cell {
        self.board.get(row, col)
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// True iff `col` is on the board and not full. Ignores the game status.
    pub fn is_valid_move(&self, col: usize) -> bool {
        !self.board.is_column_full(col)
    }

    /// Get list of legal columns (not full)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS).filter(|&col| self.is_valid_move(col)).collect()
    }

    /// Apply a move in place, returning the (row, column) the disc landed in.
    /// A rejected move leaves the state untouched.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(usize, usize), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self
            .board
            .drop_piece(column, self.current_player.to_cell())?;
        self.last_move = Some((row, column));
        self.moves_made += 1;
        debug_assert_eq!(self.board.disc_count(), self.moves_made);

        if self.board.check_win(row, column) {
            self.status = GameStatus::win_for(self.current_player);
        } else if self.moves_made == ROWS * COLS {
            self.status = GameStatus::Tie;
        } else {
            self.current_player = self.current_player.other();
        }

        Ok((row, column))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Column order that fills the board without ever making four in a row.
    const TIE_SEQUENCE: [usize; 42] = [
        0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, // columns 0 and 1
        2, 3, 2, 3, 2, 3, 3, 2, 3, 2, 3, 2, // columns 2 and 3
        4, 5, 4, 5, 4, 5, 5, 4, 5, 4, 5, 4, // columns 4 and 5
        6, 6, 6, 6, 6, 6,
    ];

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.moves_made(), 0);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.last_move(), None);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_moves().len(), 7);
    }

    #[test]
    fn test_apply_move() {
        let mut state = GameState::initial();
        let landed = state.apply_move_mut(3).unwrap();

        assert_eq!(landed, (5, 3));
        assert_eq!(state.current_player(), Player::Two);
        assert_eq!(state.contents(5, 3), Cell::One);
        assert_eq!(state.moves_made(), 1);
        assert_eq!(state.last_move(), Some((5, 3)));
    }

    #[test]
    fn test_valid_move_queries() {
        let mut state = GameState::initial();
        assert!(!state.is_valid_move(7));
        assert!(state.is_valid_move(0));
        for _ in 0..ROWS {
            state.apply_move_mut(0).unwrap();
        }
        assert!(!state.is_valid_move(0));
        assert!(!state.legal_moves().contains(&0));
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut state = GameState::initial();
        assert_eq!(state.apply_move_mut(9), Err(MoveError::InvalidColumn));
        for _ in 0..ROWS {
            state.apply_move_mut(2).unwrap();
        }
        let before = state;
        assert_eq!(state.apply_move_mut(2), Err(MoveError::ColumnFull));
        assert_eq!(state, before);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // One wins with horizontal line
        for col in 0..4 {
            state.apply_move_mut(col).unwrap(); // One
            if col < 3 {
                state.apply_move_mut(col).unwrap(); // Two (different row)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.status(), GameStatus::OneWins);
        assert_eq!(state.status().winner(), Some(Player::One));
        // The winner stays current
        assert_eq!(state.current_player(), Player::One);
    }

    #[test]
    fn test_vertical_win_in_column_three() {
        let mut state = GameState::initial();
        for other in [0, 1, 0] {
            state.apply_move_mut(3).unwrap();
            state.apply_move_mut(other).unwrap();
        }
        let landed = state.apply_move_mut(3).unwrap();

        assert_eq!(landed, (2, 3));
        assert_eq!(state.status(), GameStatus::OneWins);
        assert_eq!(state.moves_made(), 7);
    }

    #[test]
    fn test_player_two_win() {
        let mut state = GameState::initial();
        for col in [0, 6, 1, 6, 0, 6, 1] {
            state.apply_move_mut(col).unwrap();
        }
        state.apply_move_mut(6).unwrap();
        assert_eq!(state.status(), GameStatus::TwoWins);
        assert_eq!(state.current_player(), Player::Two);
    }

    #[test]
    fn test_tie() {
        let mut state = GameState::initial();
        for (i, &col) in TIE_SEQUENCE.iter().enumerate() {
            assert_eq!(state.status(), GameStatus::InProgress, "ended early at move {i}");
            state.apply_move_mut(col).unwrap();
        }

        assert_eq!(state.status(), GameStatus::Tie);
        assert_eq!(state.moves_made(), ROWS * COLS);
        assert_eq!(state.board().disc_count(), ROWS * COLS);
        assert!((0..COLS).all(|col| !state.is_valid_move(col)));
        assert!(state.legal_moves().is_empty());
    }

    #[test]
    fn test_terminal_state_rejects_moves() {
        let mut state = GameState::initial();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            state.apply_move_mut(col).unwrap();
        }
        assert_eq!(state.status(), GameStatus::OneWins);

        let before = state;
        assert_eq!(state.apply_move_mut(4), Err(MoveError::GameOver));
        assert_eq!(state, before);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(GameStatus::InProgress.to_string(), "NOT_OVER");
        assert_eq!(GameStatus::OneWins.to_string(), "P1_WINS");
        assert_eq!(GameStatus::TwoWins.to_string(), "P2_WINS");
        assert_eq!(GameStatus::Tie.to_string(), "TIE");
    }
}
