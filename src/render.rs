//! Plain-text board layout used by the line-oriented session.

use crate::game::Board;

/// Lay the board out in three rows: the second half's pockets reversed on
/// top, both goals in the middle, the first half's pockets along the bottom.
///
/// Counts are zero-padded to two digits, so columns drift once a pocket
/// holds more than 99 stones.
///
/// ```text
///    04 04 04 04 04 04
/// 00                   00
///    04 04 04 04 04 04
/// ```
pub fn render(board: &Board) -> String {
    let cells: Vec<String> = board.cells().iter().map(|c| format!("{c:02}")).collect();
    let half = cells.len() / 2;

    let bottom = &cells[..half - 1];
    let right_goal = &cells[half - 1];
    let top: Vec<&str> = cells[half..cells.len() - 1].iter().rev().map(String::as_str).collect();
    let left_goal = &cells[cells.len() - 1];
    let spacer = vec!["  "; top.len()].join(" ");

    let top_row = format!("   {}   ", top.join(" "));
    let mid_row = format!("{left_goal} {spacer} {right_goal}");
    let bot_row = format!("   {}   ", bottom.join(" "));

    [top_row, mid_row, bot_row].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_render_default_board() {
        let expected = [
            "   04 04 04 04 04 04   ",
            "00                   00",
            "   04 04 04 04 04 04   ",
        ]
        .join("\n");
        assert_eq!(render(&Board::default()), expected);
    }

    #[test]
    fn test_render_orientation() {
        let mut game = crate::game::Game::from_board(vec![1, 2, 3, 10, 4, 5, 6, 20], Player::One).unwrap();

        let expected = ["   06 05 04   ", "20          10", "   01 02 03   "].join("\n");
        assert_eq!(render(game.board()), expected);

        game.make_move(3).unwrap();
        let flipped = render(&game.view(Player::Two));
        assert_eq!(flipped.lines().last(), Some("   05 06 06   "));
    }

    #[test]
    fn test_rows_share_width() {
        let board = Board::new(12, 4);
        let text = render(&board);
        let widths: Vec<usize> = text.lines().map(str::len).collect();
        assert!(widths.iter().all(|&w| w == widths[0]));
    }
}
