//! Plain text front-end: prints the board after every move and reads column
//! numbers from any line-oriented input.

use std::cell::{Ref, RefCell};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use crate::error::{ConsoleError, ObserverError};
use crate::game::{Game, GameState};

/// Typed at the prompt to leave the game early.
pub const EXIT_COLUMN: i64 = -1;

/// Write the board followed by the move counter, current player and status.
pub fn write_status<W: Write>(out: &mut W, state: &GameState) -> io::Result<()> {
    write!(out, "{}", state.board())?;
    writeln!(out, "Moves made: {}", state.moves_made())?;
    writeln!(out, "Current player: {}", state.current_player())?;
    writeln!(out, "Status: {}", state.status())?;
    out.flush()
}

pub struct Console<R, W> {
    game: Game,
    input: R,
    output: Rc<RefCell<W>>,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write + 'static> Console<R, W> {
    /// Create a console over a fresh game. The console registers itself as
    /// the game's observer so every applied move is echoed to `output`.
    pub fn new(input: R, output: W) -> Self {
        let output = Rc::new(RefCell::new(output));
        let mut game = Game::new();

        let sink = Rc::clone(&output);
        game.add_observer(move |state: &GameState| -> Result<(), ObserverError> {
            write_status(&mut *sink.borrow_mut(), state)?;
            Ok(())
        });

        Console {
            game,
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Everything written so far
    pub fn output(&self) -> Ref<'_, W> {
        self.output.borrow()
    }

    /// Prompt for columns until the game ends, the player types
    /// [`EXIT_COLUMN`], or input runs out.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        {
            let mut out = self.output.borrow_mut();
            writeln!(out, "Connect Four PTUI\n")?;
            write_status(&mut *out, self.game.state())?;
            write!(out, "\ncolumn (-1 to exit): ")?;
            out.flush()?;
        }

        while !self.game.is_terminal() {
            let Some(token) = self.next_token()? else {
                log::info!("input closed, leaving game");
                return Ok(());
            };

            match self.parse_column(&token) {
                Some(Column::Exit) => {
                    log::info!("player exited after {} moves", self.game.moves_made());
                    return Ok(());
                }
                Some(Column::Drop(col)) => self.game.make_move(col)?,
                None => {
                    log::debug!("rejected console input '{token}'");
                    writeln!(self.output.borrow_mut(), "Invalid column.")?;
                }
            }

            let mut out = self.output.borrow_mut();
            write!(out, "\nEnter column (-1 to exit): ")?;
            out.flush()?;
        }
        Ok(())
    }

    fn parse_column(&self, token: &str) -> Option<Column> {
        let value: i64 = token.parse().ok()?;
        if value == EXIT_COLUMN {
            return Some(Column::Exit);
        }
        let col = usize::try_from(value).ok()?;
        self.game.is_valid_move(col).then_some(Column::Drop(col))
    }

    /// Next whitespace-separated token, reading more lines as needed.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

enum Column {
    Exit,
    Drop(usize),
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::error::GameError;
    use crate::game::{GameStatus, Player};

    fn play(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        console.run().unwrap();
        console
    }

    fn text(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn test_banner_and_initial_board() {
        let console = play("-1\n");
        let out = text(&console);
        assert!(out.starts_with("Connect Four PTUI\n\n  0  1  2  3  4  5  6 \n0[.]"));
        assert!(out.contains("Moves made: 0\nCurrent player: P1\nStatus: NOT_OVER\n"));
        assert!(out.ends_with("\ncolumn (-1 to exit): "));
        assert_eq!(console.game().moves_made(), 0);
    }

    #[test]
    fn test_move_is_echoed_by_observer() {
        let console = play("3\n-1\n");
        let out = text(&console);
        assert!(out.contains("5[.][.][.][O][.][.][.]\nMoves made: 1\nCurrent player: P2\n"));
        assert!(out.ends_with("\nEnter column (-1 to exit): "));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let console = play("7\nabc\n-5\n-1\n");
        let out = text(&console);
        assert_eq!(out.matches("Invalid column.\n").count(), 3);
        assert_eq!(console.game().moves_made(), 0);
    }

    #[test]
    fn test_full_column_is_invalid() {
        let console = play("0 0 0 0 0 0\n0\n-1\n");
        assert_eq!(console.game().moves_made(), 6);
        assert_eq!(text(&console).matches("Invalid column.").count(), 1);
    }

    #[test]
    fn test_game_ends_on_win() {
        // Tokens after the winning move are never read
        let console = play("3 0 3 1 3 0 3\n5\n");
        assert_eq!(console.game().status(), GameStatus::OneWins);
        assert_eq!(console.game().current_player(), Player::One);
        assert_eq!(console.game().moves_made(), 7);
        assert!(text(&console).contains("Status: P1_WINS\n"));
    }

    #[test]
    fn test_end_of_input_exits_quietly() {
        let console = play("2\n");
        assert_eq!(console.game().moves_made(), 1);
        assert_eq!(console.game().status(), GameStatus::InProgress);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut console = Console::new(Cursor::new(b"3\n".to_vec()), FailingWriter);
        assert!(matches!(console.run(), Err(ConsoleError::Io(_))));
    }

    /// Accepts a fixed number of bytes, then fails every write.
    struct ShortWriter {
        remaining: usize,
    }

    impl Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if buf.len() > self.remaining {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "out of space"));
            }
            self.remaining -= buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_echo_failure_after_move_is_an_observer_error() {
        // Room for the banner and first prompt only
        let remaining = text(&play("-1\n")).len();
        let mut console = Console::new(Cursor::new(b"3\n".to_vec()), ShortWriter { remaining });

        assert!(matches!(
            console.run(),
            Err(ConsoleError::Game(GameError::Observer(_)))
        ));
        // The move was applied before the observer failed
        assert_eq!(console.game().moves_made(), 1);
        assert_eq!(console.game().current_player(), Player::Two);
    }
}
