use tracing::{debug, info};

use super::board::absolute_index;
use super::{Board, Player};
use crate::error::{ConfigError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Tie,
}

impl GameOutcome {
    /// 1 or 2 for a winner, 3 for a tie
    pub fn code(self) -> u8 {
        match self {
            GameOutcome::Winner(player) => player.number(),
            GameOutcome::Tie => 3,
        }
    }
}

/// What happened during a single accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub player: Player,
    /// Board index the stones were picked up from
    pub start: usize,
    /// Board index that received the last stone
    pub landing: usize,
    /// Stones moved into the mover's goal by a capture, zero if none
    pub captured: u32,
    /// True if a side ran out and the remaining stones were swept into the goals
    pub swept: bool,
    pub extra_turn: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Player,
    pockets_per_side: usize,
    stones_per_pocket: u32,
    /// Score that ends the game once exceeded
    winning_score: u32,
    history: Vec<Board>,
}

impl Game {
    /// Create a game on a fresh board, Player One to move
    pub fn new(stones_per_pocket: u32, pockets_per_side: usize) -> Result<Self, ConfigError> {
        Self::with_first_player(stones_per_pocket, pockets_per_side, Player::One)
    }

    pub fn with_first_player(
        stones_per_pocket: u32,
        pockets_per_side: usize,
        first: Player,
    ) -> Result<Self, ConfigError> {
        if pockets_per_side < 1 {
            return Err(ConfigError::NoPockets);
        }

        // Every stone on the board must fit in a single goal.
        let winning_score = u64::from(stones_per_pocket)
            .checked_mul(pockets_per_side as u64)
            .filter(|&half| half.checked_mul(2).is_some_and(|total| total <= u64::from(u32::MAX)))
            .ok_or(ConfigError::TooManyStones)?;

        Ok(Self::start(
            Board::new(stones_per_pocket, pockets_per_side),
            first,
            pockets_per_side,
            stones_per_pocket,
            winning_score as u32,
        ))
    }

    /// Start from a pre-built board laid out as described on [`Board`].
    ///
    /// The per-pocket stone count used for the winning threshold is the board
    /// total divided by the number of pockets, rounded down.
    pub fn from_board(cells: Vec<i64>, first: Player) -> Result<Self, ConfigError> {
        if cells.len() < 4 {
            return Err(ConfigError::BoardTooShort(cells.len()));
        }
        if cells.len() % 2 != 0 {
            return Err(ConfigError::OddBoardLength(cells.len()));
        }

        let cells = cells
            .into_iter()
            .enumerate()
            .map(|(index, stones)| {
                if stones < 0 {
                    return Err(ConfigError::NegativeStones { index, stones });
                }
                u32::try_from(stones).map_err(|_| ConfigError::PocketOverflow { index, stones })
            })
            .collect::<Result<Vec<u32>, ConfigError>>()?;

        let total = cells
            .iter()
            .try_fold(0u32, |acc, &stones| acc.checked_add(stones))
            .ok_or(ConfigError::TooManyStones)?;

        let board = Board::from_cells(cells);
        let pockets_per_side = board.pockets_per_side();
        let pockets = (board.len() - 2) as u64;
        let stones_per_pocket = u64::from(total) / pockets;
        // at most half the total, so both fit in u32
        let winning_score = stones_per_pocket * pockets_per_side as u64;

        Ok(Self::start(
            board,
            first,
            pockets_per_side,
            stones_per_pocket as u32,
            winning_score as u32,
        ))
    }

    fn start(
        board: Board,
        first: Player,
        pockets_per_side: usize,
        stones_per_pocket: u32,
        winning_score: u32,
    ) -> Self {
        let history = vec![board.clone()];
        Game {
            board,
            current_player: first,
            pockets_per_side,
            stones_per_pocket,
            winning_score,
            history,
        }
    }

    /// Live board, Player One's side first
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Copy of the board rotated so `perspective`'s pockets come first
    pub fn view(&self, perspective: Player) -> Board {
        self.board.rotated(perspective)
    }

    /// (Player One, Player Two) goal counts
    pub fn score(&self) -> (u32, u32) {
        self.board.score(Player::One)
    }

    pub fn pockets_per_side(&self) -> usize {
        self.pockets_per_side
    }

    pub fn stones_per_pocket(&self) -> u32 {
        self.stones_per_pocket
    }

    /// Player due to move next, `None` once the game is over
    pub fn whose_turn(&self) -> Option<Player> {
        if self.is_game_over() {
            None
        } else {
            Some(self.current_player)
        }
    }

    /// Every board position so far, starting with the initial one
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Over once a player holds more than half the starting stones or either
    /// side has no stones left in its pockets.
    pub fn is_game_over(&self) -> bool {
        let (one, two) = self.score();
        one.max(two) > self.winning_score || self.board.has_empty_side()
    }

    pub fn winner(&self) -> Option<GameOutcome> {
        if !self.is_game_over() {
            return None;
        }

        let (one, two) = self.score();
        Some(if one == two {
            GameOutcome::Tie
        } else if one > two {
            GameOutcome::Winner(Player::One)
        } else {
            GameOutcome::Winner(Player::Two)
        })
    }

    /// 1-based pockets the current player may choose from
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_game_over() {
            return Vec::new();
        }

        (1..=self.pockets_per_side)
            .filter(|&pocket| {
                self.board[absolute_index(self.current_player, pocket, self.pockets_per_side)] > 0
            })
            .collect()
    }

    /// Sow from `pocket` (1-based, on the current player's side).
    ///
    /// A rejected move leaves the board, turn and history exactly as they were.
    pub fn make_move(&mut self, pocket: usize) -> Result<MoveReport, MoveError> {
        let max = self.pockets_per_side;
        if !(1..=max).contains(&pocket) {
            debug!(pocket, max, "rejected move out of range");
            return Err(MoveError::OutOfRange { pocket, max });
        }

        if self.is_game_over() {
            debug!(pocket, "rejected move after game over");
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let start = absolute_index(player, pocket, max);
        if self.board[start] == 0 {
            debug!(pocket, player = player.number(), "rejected move from empty pocket");
            return Err(MoveError::EmptyPocket { pocket });
        }

        let landing = self.board.sow(start, player);
        let captured = self.board.capture(landing, player);

        let swept = self.board.has_empty_side();
        if swept {
            self.board.collect_remaining();
        }

        self.history.push(self.board.clone());

        let extra_turn = landing == self.board.goal(player);
        if !extra_turn {
            self.current_player = player.other();
        }

        let report = MoveReport {
            player,
            start,
            landing,
            captured,
            swept,
            extra_turn,
        };
        debug!(?report, "move applied");

        if let Some(outcome) = self.winner() {
            let (one, two) = self.score();
            info!(code = outcome.code(), one, two, "game over");
        }

        Ok(report)
    }

    /// Board that `pocket` would produce, without touching this game
    pub fn preview_move(&self, pocket: usize) -> Result<Board, MoveError> {
        let mut scratch = self.clone();
        scratch.make_move(pocket)?;
        Ok(scratch.board)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::start(
            Board::default(),
            Player::One,
            super::board::DEFAULT_POCKETS,
            super::board::DEFAULT_STONES,
            super::board::DEFAULT_STONES * super::board::DEFAULT_POCKETS as u32,
        )
    }
}
