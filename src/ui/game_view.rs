use crate::game::{Game, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, game: &Game, selected_pocket: usize, message: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(7),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    render_board(frame, game, selected_pocket, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Cyan,
        Player::Two => Color::Magenta,
    }
}

fn render_header(frame: &mut Frame, game: &Game, area: Rect) {
    let (one, two) = game.score();
    let (status, color) = match game.whose_turn() {
        Some(player) => (format!("{} to move", player.name()), player_color(player)),
        None => ("Game Over".to_string(), Color::White),
    };

    let header = Paragraph::new(format!("{status}  |  Score {one} : {two}"))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Kalah"));

    frame.render_widget(header, area);
}

/// Mover's pockets along the bottom, opponent's reversed along the top, goals
/// at either end. Player One's view once the game has ended.
fn render_board(frame: &mut Frame, game: &Game, selected_pocket: usize, area: Rect) {
    let mover = game.whose_turn();
    let me = mover.unwrap_or(Player::One);
    let view = game.view(me);
    let cells = view.cells();
    let n = game.pockets_per_side();

    let pocket = |stones: u32| format!(" {stones:02} ");
    let dim = Style::default().fg(Color::DarkGray);

    let mut top = vec![Span::raw("      ")];
    for &stones in cells[n + 1..2 * n + 1].iter().rev() {
        top.push(Span::styled(pocket(stones), Style::default().fg(player_color(me.other()))));
    }

    let mut middle = vec![Span::styled(
        format!("  {:02}  ", cells[2 * n + 1]),
        Style::default().fg(player_color(me.other())).add_modifier(Modifier::BOLD),
    )];
    middle.push(Span::styled("    ".repeat(n), dim));
    middle.push(Span::styled(
        format!("  {:02}  ", cells[n]),
        Style::default().fg(player_color(me)).add_modifier(Modifier::BOLD),
    ));

    let mut bottom = vec![Span::raw("      ")];
    let mut indicator = vec![Span::raw("      ")];
    for (i, &stones) in cells[..n].iter().enumerate() {
        let chosen = mover.is_some() && i + 1 == selected_pocket;
        let style = if chosen {
            Style::default()
                .fg(player_color(me))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(player_color(me))
        };
        bottom.push(Span::styled(pocket(stones), style));
        indicator.push(if chosen {
            Span::styled("  ▲ ", Style::default().fg(Color::Yellow))
        } else {
            Span::raw(format!("  {} ", i + 1))
        });
    }

    let lines = vec![
        Line::from(top),
        Line::from(middle),
        Line::from(bottom),
        Line::from(indicator),
    ];
    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(board, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→ or 1-9: Select  |  Enter: Sow  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(game: &Game, selected: usize) -> String {
        let backend = TestBackend::new(60, 18);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render(f, game, selected, Some("hello")))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draws_header_and_message() {
        let text = draw(&Game::default(), 1);
        assert!(text.contains("Player 1 to move"));
        assert!(text.contains("hello"));
        assert!(text.contains("04"));
    }

    #[test]
    fn test_draws_finished_game() {
        let game = Game::from_board(vec![0, 0, 3, 0, 0, 1], Player::One).unwrap();
        let text = draw(&game, 1);
        assert!(text.contains("Game Over"));
        assert!(text.contains("Score 3 : 1"));
    }
}
