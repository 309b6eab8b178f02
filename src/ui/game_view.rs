use crate::game::{Board, Controller, Piece, Seat, State};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    controller: &Controller,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(12),   // Board
            Constraint::Length(6), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, controller, chunks[0]);
    render_board(frame, controller.board(), selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, controller.board().columns(), chunks[3]);
}

fn piece_color(piece: Piece) -> Color {
    match piece {
        Piece::X => Color::Red,
        Piece::O => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, controller: &Controller, area: Rect) {
    let (status, color) = match controller.state() {
        State::AwaitingMove(seat) => (
            format!(
                "Round {}  |  {} ({})  |  {}",
                controller.round(),
                controller.player_name(seat),
                seat.piece(),
                controller.mode()
            ),
            piece_color(seat.piece()),
        ),
        State::RoundOver(_) => (
            format!("Round {} over  |  {}", controller.round(), controller.mode()),
            Color::White,
        ),
        State::GameOver => ("Game Over".to_string(), Color::White),
    };

    let scores = controller.scores();
    let score_line = format!(
        "{}: {}   {}: {}   Ties: {}",
        scores.name(Seat::One),
        scores.wins(Seat::One),
        scores.name(Seat::Two),
        scores.wins(Seat::Two),
        scores.ties()
    );

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            status,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(score_line),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Four in a Row"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, board: &Board, selected_column: usize, area: Rect) {
    let columns = board.columns();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding to match "  ║"
    for col in 0..columns {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(columns * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..columns {
            let span = match board.get(row, col) {
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Some(piece) => Span::styled(
                    format!(" {piece} "),
                    Style::default()
                        .fg(piece_color(piece))
                        .add_modifier(Modifier::BOLD),
                ),
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..columns {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let lines: Vec<Line> = text.lines().map(Line::from).collect();
    let msg_widget = Paragraph::new(lines)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, columns: usize, area: Rect) {
    let line1 = Line::from(format!(
        "←/→: Move  |  Enter: Drop  |  1-{columns}: Drop in column  |  S: Surrender  |  Q: Quit"
    ));
    let line2 = Line::from("After a round:  Y  play again   N  stop");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
