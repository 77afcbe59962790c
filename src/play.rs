//! Line-oriented game session: show the board, prompt for a pocket, apply it,
//! and repeat until the game ends.

use std::io::{self, BufRead, Write};

use crate::game::{Game, GameOutcome, Player};
use crate::render::render;

/// Drives a [`Game`] from any line reader, writing prompts and boards to `output`.
pub struct TextSession<R, W> {
    game: Game,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextSession<R, W> {
    pub fn new(game: Game, input: R, output: W) -> Self {
        TextSession {
            game,
            input,
            output,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Play until the game is over or the input runs dry.
    ///
    /// Returns `None` if input ended first. Bad input and rejected moves are
    /// reported and re-prompted, never returned as errors.
    pub fn run(&mut self) -> io::Result<Option<GameOutcome>> {
        while let Some(player) = self.game.whose_turn() {
            writeln!(self.output, "{}", render(&self.game.view(player)))?;
            write!(self.output, "Player {}, make a move: ", player.number())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                tracing::info!("input closed before the game ended");
                return Ok(None);
            }

            let text = line.trim();
            let pocket = match text.parse::<usize>() {
                Ok(pocket) => pocket,
                Err(_) => {
                    writeln!(self.output, "'{text}' is not a pocket number.")?;
                    continue;
                }
            };

            if let Err(err) = self.game.make_move(pocket) {
                writeln!(self.output, "{err}")?;
            }
        }

        self.finish()
    }

    fn finish(&mut self) -> io::Result<Option<GameOutcome>> {
        let outcome = self.game.winner();
        let (one, two) = self.game.score();

        writeln!(self.output, "Game Over!")?;
        writeln!(self.output, "{}", render(self.game.board()))?;
        match outcome {
            Some(GameOutcome::Winner(player)) => writeln!(self.output, "Winner: {}", player.name())?,
            Some(GameOutcome::Tie) => writeln!(self.output, "Result: Tie")?,
            None => {}
        }
        writeln!(
            self.output,
            "Score: [{}: {one}] [{}: {two}]",
            Player::One.name(),
            Player::Two.name()
        )?;

        Ok(outcome)
    }

    pub fn into_inner(self) -> (Game, W) {
        (self.game, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(game: Game, input: &str) -> TextSession<Cursor<Vec<u8>>, Vec<u8>> {
        TextSession::new(game, Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_plays_to_completion() {
        let game = Game::from_board(vec![0, 1, 0, 1, 0, 0], Player::One).unwrap();
        let mut session = session(game, "2\n");

        let outcome = session.run().unwrap();
        assert_eq!(outcome, Some(GameOutcome::Tie));

        let (game, output) = session.into_inner();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(game.board().cells(), &[0, 0, 1, 0, 0, 1]);
        assert!(text.contains("Player 1, make a move: "));
        assert!(text.contains("Game Over!"));
        assert!(text.contains("Result: Tie"));
        assert!(text.contains("Score: [Player 1: 1] [Player 2: 1]"));
    }

    #[test]
    fn test_recovers_from_bad_input() {
        let mut session = session(Game::default(), "abc\n9\n3\n");

        assert_eq!(session.run().unwrap(), None);

        let (game, output) = session.into_inner();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("'abc' is not a pocket number."));
        assert!(text.contains("9 is an invalid move. Must be between 1 and 6."));
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.whose_turn(), Some(Player::One));
    }

    #[test]
    fn test_reports_empty_pocket() {
        let mut session = session(Game::default(), "3\n3\n");
        session.run().unwrap();

        let (game, output) = session.into_inner();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(game.history().len(), 2);
        assert!(text.contains("Invalid move. Chosen pocket 3 is empty."));
    }

    #[test]
    fn test_board_shown_from_movers_side() {
        let mut session = session(Game::default(), "4\n");
        session.run().unwrap();

        let (_, output) = session.into_inner();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Player 2, make a move: "));
        // Player Two's pockets are on the bottom row once it is their turn
        assert!(text.contains("   05 04 04 04 04 04   "));
    }
}
