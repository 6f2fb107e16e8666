//! TUI rendering with ratatui
//!
//! Board, keyboard hints, and result panels for the play screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LENGTH, MAX_ATTEMPTS, Mark, Variant};
use crate::game::Status;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(15),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!("🎯 {} {}", LENGTH, app.variant().title().to_uppercase());
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for row in 0..MAX_ATTEMPTS {
        let line = if let Some(turn) = history.get(row) {
            let spans: Vec<Span> = turn
                .guess
                .text()
                .chars()
                .zip(turn.verdict.marks().iter())
                .flat_map(|(symbol, &mark)| {
                    [
                        Span::styled(
                            format!(" {} ", symbol.to_ascii_uppercase()),
                            mark_style(mark),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        } else if row == history.len() && app.input_mode == InputMode::Typing {
            // The row being typed
            let mut spans = Vec::with_capacity(LENGTH * 2);
            for i in 0..LENGTH {
                let span = match app.input_buffer.chars().nth(i) {
                    Some(symbol) => Span::styled(
                        format!(" {} ", symbol.to_ascii_uppercase()),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    None => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                };
                spans.push(span);
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        } else {
            let spans: Vec<Span> = (0..LENGTH)
                .flat_map(|_| {
                    [
                        Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        };

        lines.push(line);
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(7),    // Keyboard hints or share card
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_attempts_gauge(f, app, chunks[0]);

    if app.input_mode == InputMode::GameOver {
        render_share_card(f, app, chunks[1]);
    } else {
        render_keyboard(f, app, chunks[1]);
    }

    render_messages(f, app, chunks[2]);
}

fn render_attempts_gauge(f: &mut Frame, app: &App, area: Rect) {
    let attempts = app.session.attempts();
    let color = match app.session.status() {
        Status::Won => Color::Green,
        Status::Lost => Color::Red,
        Status::InProgress => Color::Cyan,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent((attempts * 100 / MAX_ATTEMPTS) as u16)
        .label(format!("{attempts}/{MAX_ATTEMPTS}"));

    f.render_widget(gauge, area);
}

/// Rows of the hint keyboard for each game's alphabet
fn keyboard_rows(variant: Variant) -> &'static [&'static str] {
    match variant {
        Variant::Wordle => &["qwertyuiop", "asdfghjkl", "zxcvbnm"],
        Variant::Primel => &["0123456789"],
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.key_hints();

    let mut lines = vec![Line::default()];
    for row in keyboard_rows(app.variant()) {
        let spans: Vec<Span> = row
            .bytes()
            .map(|symbol| {
                let style = match hints.get(&symbol) {
                    Some(&mark) => mark_style(mark),
                    None => Style::default().fg(Color::White),
                };
                Span::styled(format!(" {} ", (symbol as char).to_ascii_uppercase()), style)
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
}

fn render_share_card(f: &mut Frame, app: &App, area: Rect) {
    let (color, summary) = match app.session.summary() {
        Some(text) => {
            let color = if app.session.status() == Status::Won {
                Color::Green
            } else {
                Color::Red
            };
            (color, text)
        }
        None => (Color::White, String::new()),
    };

    let lines: Vec<Line> = summary.lines().map(Line::from).collect();

    let card = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Share ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color)),
    );

    f.render_widget(card, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(5)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let game_text = format!("Game: {}", app.variant());
    let game = Paragraph::new(game_text).alignment(Alignment::Center);
    f.render_widget(game, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let attempts_text = format!("Attempt: {}/{}", app.session.attempts(), MAX_ATTEMPTS);
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Typing => "Esc: Quit | Enter: Submit | Backspace: Delete",
        InputMode::GameOver => "q: Quit | n: New Game",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::Exact => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Mark::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Mark::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}
