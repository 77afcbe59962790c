use std::ops::{Index, Range};

use super::Player;

/// Stones per pocket on a standard Kalah board.
pub const DEFAULT_STONES: u32 = 4;
/// Pockets on each side of a standard Kalah board, excluding the goal.
pub const DEFAULT_POCKETS: usize = 6;

/// Board laid out counter-clockwise from Player One's first pocket:
///
/// ```text
///    12 11 10 09 08 07
/// 13                   06
///    00 01 02 03 04 05
/// ```
///
/// Indices `0..n` are Player One's pockets and `n` is their goal; indices
/// `n+1..2n+1` are Player Two's pockets and the last index is their goal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Vec<u32>,
}

/// Translate a 1-based pocket choice on `player`'s side to a board index.
pub fn absolute_index(player: Player, pocket: usize, pockets_per_side: usize) -> usize {
    match player {
        Player::One => pocket - 1,
        Player::Two => pocket + pockets_per_side,
    }
}

impl Board {
    /// Create a board with `pockets_per_side` pockets of `stones` each on both
    /// sides and empty goals
    pub fn new(stones: u32, pockets_per_side: usize) -> Self {
        let mut half = vec![stones; pockets_per_side];
        half.push(0);
        let mut cells = half.clone();
        cells.extend(half);
        Board { cells }
    }

    /// Wrap already-validated cells.
    pub(crate) fn from_cells(cells: Vec<u32>) -> Self {
        Board { cells }
    }

    /// Every cell in board order, goals included
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Number of cells, both goals included
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True only for a board with no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Pockets on each side, goal excluded
    pub fn pockets_per_side(&self) -> usize {
        self.cells.len() / 2 - 1
    }

    /// Index of the player's scoring pocket
    pub fn goal(&self, player: Player) -> usize {
        match player {
            Player::One => self.pockets_per_side(),
            Player::Two => self.cells.len() - 1,
        }
    }

    /// Indices of the player's pockets, goal excluded
    pub fn side(&self, player: Player) -> Range<usize> {
        let n = self.pockets_per_side();
        match player {
            Player::One => 0..n,
            Player::Two => n + 1..2 * n + 1,
        }
    }

    /// Index of the pocket across the board from `index`. Meaningless for goals.
    pub fn opposite(&self, index: usize) -> usize {
        self.cells.len() - 2 - index
    }

    /// Copy of the board rotated so `perspective`'s side comes first.
    pub fn rotated(&self, perspective: Player) -> Board {
        match perspective {
            Player::One => self.clone(),
            Player::Two => {
                let mut cells = self.cells.clone();
                cells.rotate_left(self.cells.len() / 2);
                Board { cells }
            }
        }
    }

    /// Goal contents of the first and second half of the board, flipped when
    /// the perspective is Player Two.
    pub fn score(&self, perspective: Player) -> (u32, u32) {
        let first = self.cells[self.cells.len() / 2 - 1];
        let second = self.cells[self.cells.len() - 1];
        match perspective {
            Player::One => (first, second),
            Player::Two => (second, first),
        }
    }

    /// Stones on the whole board. Games check at construction that this fits.
    pub fn total_stones(&self) -> u32 {
        self.cells.iter().sum()
    }

    /// Stones left in the player's pockets, goal excluded
    pub fn side_stones(&self, player: Player) -> u32 {
        self.cells[self.side(player)].iter().sum()
    }

    pub fn side_is_empty(&self, player: Player) -> bool {
        self.side_stones(player) == 0
    }

    /// Check if either player's pockets are all empty
    pub fn has_empty_side(&self) -> bool {
        self.side_is_empty(Player::One) || self.side_is_empty(Player::Two)
    }

    /// Pick up every stone at `start` and sow them for `player`, skipping the
    /// opponent's goal. Returns the index that received the last stone, or
    /// `start` if the pocket was empty.
    pub fn sow(&mut self, start: usize, player: Player) -> usize {
        let stones = std::mem::take(&mut self.cells[start]);
        let skip = self.goal(player.other());

        let mut landing = start;
        for index in Sowing::new(start, stones, self.cells.len(), skip) {
            self.cells[index] += 1;
            landing = index;
        }
        landing
    }

    /// Capture for `player` if the last stone landed in a previously empty
    /// pocket on their own side with stones across from it. Returns the
    /// number of stones moved into the goal.
    pub fn capture(&mut self, landing: usize, player: Player) -> u32 {
        if landing == self.goal(player) || !self.side(player).contains(&landing) {
            return 0;
        }

        let across = self.opposite(landing);
        if self.cells[landing] != 1 || self.cells[across] == 0 {
            return 0;
        }

        let captured = std::mem::take(&mut self.cells[landing]) + std::mem::take(&mut self.cells[across]);
        let goal = self.goal(player);
        self.cells[goal] += captured;
        captured
    }

    /// Move the stones left on each side into that side's own goal.
    pub fn collect_remaining(&mut self) {
        for player in [Player::One, Player::Two] {
            let goal = self.goal(player);
            let swept: u32 = self.side(player).map(|i| std::mem::take(&mut self.cells[i])).sum();
            self.cells[goal] += swept;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_STONES, DEFAULT_POCKETS)
    }
}

impl Index<usize> for Board {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.cells[index]
    }
}

/// Board indices that receive one stone each while sowing, in order.
///
/// The cursor advances modulo the board length; `skip` is stepped over
/// without using up a stone.
#[derive(Debug, Clone)]
pub struct Sowing {
    cursor: usize,
    remaining: u32,
    len: usize,
    skip: usize,
}

impl Sowing {
    pub fn new(start: usize, stones: u32, len: usize, skip: usize) -> Self {
        Sowing {
            cursor: start,
            remaining: stones,
            len,
            skip,
        }
    }
}

impl Iterator for Sowing {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }

        loop {
            self.cursor = (self.cursor + 1) % self.len;
            if self.cursor != self.skip {
                break;
            }
        }
        self.remaining -= 1;
        Some(self.cursor)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Sowing {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_layout() {
        let board = Board::default();
        assert_eq!(board.cells(), &[4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0]);
        assert_eq!(board.pockets_per_side(), 6);
        assert_eq!(board.goal(Player::One), 6);
        assert_eq!(board.goal(Player::Two), 13);
        assert_eq!(board.side(Player::One), 0..6);
        assert_eq!(board.side(Player::Two), 7..13);
    }

    #[test]
    fn test_small_board() {
        let board = Board::new(3, 1);
        assert_eq!(board.cells(), &[3, 0, 3, 0]);
        assert_eq!(board.total_stones(), 6);
    }

    #[test]
    fn test_absolute_index() {
        assert_eq!(absolute_index(Player::One, 1, 6), 0);
        assert_eq!(absolute_index(Player::One, 6, 6), 5);
        assert_eq!(absolute_index(Player::Two, 1, 6), 7);
        assert_eq!(absolute_index(Player::Two, 6, 6), 12);
        assert_eq!(absolute_index(Player::Two, 1, 1), 2);
    }

    #[test]
    fn test_opposite_pockets() {
        let board = Board::default();
        assert_eq!(board.opposite(0), 12);
        assert_eq!(board.opposite(5), 7);
        assert_eq!(board.opposite(12), 0);
        assert_eq!(board.opposite(9), 3);
    }

    #[test]
    fn test_rotation() {
        let board = Board::from_cells(vec![1, 2, 3, 10, 4, 5, 6, 20]);
        assert_eq!(board.rotated(Player::One), board);
        assert_eq!(board.rotated(Player::Two).cells(), &[4, 5, 6, 20, 1, 2, 3, 10]);
    }

    #[test]
    fn test_score_perspective() {
        let board = Board::from_cells(vec![1, 2, 3, 10, 4, 5, 6, 20]);
        assert_eq!(board.score(Player::One), (10, 20));
        assert_eq!(board.score(Player::Two), (20, 10));
    }

    #[test]
    fn test_sowing_skips_index() {
        let order: Vec<usize> = Sowing::new(10, 5, 14, 13).collect();
        assert_eq!(order, vec![11, 12, 0, 1, 2]);
    }

    #[test]
    fn test_sowing_wraps_multiple_times() {
        let sowing = Sowing::new(0, 30, 14, 13);
        assert_eq!(sowing.len(), 30);
        let order: Vec<usize> = sowing.collect();
        assert!(!order.contains(&13));
        assert_eq!(order.iter().filter(|&&i| i == 0).count(), 2);
    }

    #[test]
    fn test_sow_returns_landing() {
        let mut board = Board::default();
        let landing = board.sow(3, Player::One);
        assert_eq!(landing, 7);
        assert_eq!(board.cells(), &[4, 4, 4, 0, 5, 5, 1, 5, 4, 4, 4, 4, 4, 0]);
    }

    #[test]
    fn test_sow_never_feeds_opponent_goal() {
        let mut board = Board::from_cells(vec![0, 0, 20, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let landing = board.sow(2, Player::One);
        assert_eq!(board[13], 0);
        assert_eq!(board.total_stones(), 20);
        assert_eq!(landing, 9);
    }

    #[test]
    fn test_capture() {
        let mut board = Board::from_cells(vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        board.cells[11] = 5;
        let landing = board.sow(0, Player::One);
        assert_eq!(landing, 1);
        assert_eq!(board.capture(landing, Player::One), 6);
        assert_eq!(board[1], 0);
        assert_eq!(board[11], 0);
        assert_eq!(board[6], 6);
    }

    #[test]
    fn test_no_capture_against_empty_pocket() {
        let mut board = Board::from_cells(vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let landing = board.sow(0, Player::One);
        assert_eq!(board.capture(landing, Player::One), 0);
        assert_eq!(board[1], 1);
    }

    #[test]
    fn test_no_capture_on_opponent_side() {
        let mut board = Board::from_cells(vec![0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 3, 0, 0]);
        let landing = board.sow(5, Player::One);
        assert_eq!(landing, 7);
        assert_eq!(board.capture(landing, Player::One), 0);
        assert_eq!(board[7], 1);
    }

    #[test]
    fn test_collect_remaining_goes_to_owner() {
        let mut board = Board::from_cells(vec![0, 0, 0, 0, 0, 0, 10, 1, 2, 3, 0, 0, 0, 5]);
        assert!(board.has_empty_side());
        board.collect_remaining();
        assert_eq!(board.cells(), &[0, 0, 0, 0, 0, 0, 10, 0, 0, 0, 0, 0, 0, 11]);
    }
}
