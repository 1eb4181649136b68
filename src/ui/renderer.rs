use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{BOARD_WIDTH, BOARD_HEIGHT};
use crate::game::{Cell, Game, Phase};

pub fn ui(f: &mut Frame, game: &Game) {
    let size = f.size();

    // 20 rows + 2 borders tall, 10 cols at 2 chars per block + 2 borders wide
    let board_height = BOARD_HEIGHT as u16 + 2;
    let board_width = BOARD_WIDTH as u16 * 2 + 2;

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_height),
            Constraint::Min(1),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_width),
            Constraint::Length(18),
            Constraint::Min(1),
        ])
        .split(vertical_chunks[1]);

    let board_area = horizontal_chunks[1];
    let info_area = horizontal_chunks[2];

    render_board(f, game, board_area);
    render_info(f, game, info_area);

    if game.phase == Phase::GameOver {
        render_game_over_overlay(f, game, board_area);
    }
}

fn render_board(f: &mut Frame, game: &Game, area: Rect) {
    // Composite the active piece into a copy of the board so the widget
    // renders a single consistent snapshot.
    let mut cells = game.board.cells;

    if game.phase == Phase::Falling {
        for (row, shape_row) in game.piece.cells.iter().enumerate() {
            for (col, &filled) in shape_row.iter().enumerate() {
                if filled {
                    let x = game.piece.x + col as i32;
                    let y = game.piece.y + row as i32;
                    if x >= 0 && x < BOARD_WIDTH as i32 && y >= 0 && y < BOARD_HEIGHT as i32 {
                        cells[y as usize][x as usize] = Cell::Filled(game.piece.kind);
                    }
                }
            }
        }
    }

    let mut board_lines = Vec::new();

    for y in 0..BOARD_HEIGHT {
        let mut line_spans = Vec::new();
        for x in 0..BOARD_WIDTH {
            match cells[y][x] {
                Cell::Empty => {
                    if (x + y) % 2 == 0 {
                        line_spans.push(Span::styled("░░", Style::default().fg(Color::DarkGray)));
                    } else {
                        line_spans.push(Span::raw("  "));
                    }
                }
                Cell::Filled(kind) => {
                    line_spans.push(Span::styled("██", Style::default().fg(kind.color())));
                }
            }
        }
        board_lines.push(Line::from(line_spans));
    }

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default().borders(Borders::ALL).title("gridfall"));

    f.render_widget(board_widget, area);
}

fn render_info(f: &mut Frame, game: &Game, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Min(1),
        ])
        .split(area);

    let score_text = vec![
        Line::from(vec![Span::styled("Score", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw(format!("{}", game.score))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw(format!("Lines: {}", game.lines))]),
    ];

    let score_widget = Paragraph::new(score_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(score_widget, chunks[0]);

    let help_text = vec![
        Line::from(vec![Span::raw("←/→  move")]),
        Line::from(vec![Span::raw("↓    soft drop")]),
        Line::from(vec![Span::raw("↑    rotate")]),
        Line::from(vec![Span::raw("r    restart")]),
        Line::from(vec![Span::raw("q    quit")]),
    ];

    let help_widget = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL).title("Keys"));

    f.render_widget(help_widget, chunks[1]);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_game_over_overlay(f: &mut Frame, game: &Game, area: Rect) {
    let popup_area = centered_rect(70, 40, area);
    f.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("GAME OVER", Style::default().fg(Color::Red))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw(format!("Final Score: {}", game.score))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Press R to restart")]),
        Line::from(vec![Span::raw("Press Q to quit")]),
    ];

    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(widget, popup_area);
}
