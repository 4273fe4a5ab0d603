use crate::game::{Board, GameSession, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn piece_color(player: &Player) -> Color {
    let c = player.color();
    Color::Rgb(c.r, c.g, c.b)
}

pub fn render(
    frame: &mut Frame,
    session: &GameSession,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    render_board(frame, session, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, session, chunks[3]);
}

fn render_header(frame: &mut Frame, session: &GameSession, area: ratatui::layout::Rect) {
    let current = session.player(session.current_player());

    let status = if session.is_terminal() {
        "Game Over".to_string()
    } else {
        format!("Current Player: {}", current.name())
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(piece_color(current))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Drop Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    session: &GameSession,
    selected_column: usize,
    area: ratatui::layout::Rect,
) {
    let board: &Board = session.board();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..board.width() {
        let text = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                text,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(text));
        }
    }
    lines.push(Line::from(col_line));

    // Top border
    lines.push(Line::from(format!(
        "  ╔{}╗",
        "═".repeat(board.width() * 3 + 1)
    )));

    // Board rows
    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..board.width() {
            match board.get(row, col) {
                None => row_spans.push(Span::styled(" . ", Style::default().fg(Color::DarkGray))),
                Some(id) => row_spans.push(Span::styled(
                    " ● ",
                    Style::default().fg(piece_color(session.player(id))),
                )),
            }
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from(format!(
        "  ╚{}╝",
        "═".repeat(board.width() * 3 + 1)
    )));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")]; // Align with board
    for col in 0..board.width() {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, session: &GameSession, area: ratatui::layout::Rect) {
    let line1 = Line::from("←/→: Move  |  Enter: Drop  |  R: New Game  |  Q: Quit");

    let mut legend = vec![Span::raw("Players: ")];
    for (i, player) in session.players().iter().enumerate() {
        if i > 0 {
            legend.push(Span::raw("  "));
        }
        legend.push(Span::styled(
            player.name(),
            Style::default()
                .fg(piece_color(player))
                .add_modifier(Modifier::BOLD),
        ));
    }
    let line2 = Line::from(legend);

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
