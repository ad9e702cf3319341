use crate::cards::{Card, Suit};
use crate::evaluator::{Outcome, Seat};
use crate::hand::{Street, FIRST_BOARD_SLOT};
use crate::round::BOARD_SIZE;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{card_columns, centered_rect, inner};

const CARD_WIDTH: u16 = 8;

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(7), // second player
            Constraint::Length(5), // board
            Constraint::Length(7), // first player
            Constraint::Length(4), // status bar
            Constraint::Min(0),
        ])
        .split(f.area());

    let (index, total) = app.deal_position();
    let header = Paragraph::new(Line::from(format!(
        "Deal {index}/{total}   Street: {}   {}",
        app.street(),
        app.round().deal()
    )))
    .block(Block::default().title("holdem-showdown").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    render_seat(f, chunks[1], app, Seat::Second);
    render_board(f, chunks[2], app);
    render_seat(f, chunks[3], app, Seat::First);
    render_status(f, chunks[4], app);

    if app.help_open() {
        draw_help(f);
    }
}

/// Border color for a slot: each player's color, magenta when both use it.
fn slot_color(app: &AppState, slot: usize) -> Option<Color> {
    let first = app.player(Seat::First).evaluation.defining_slots().contains(slot);
    let second = app.player(Seat::Second).evaluation.defining_slots().contains(slot);
    match (first, second) {
        (true, true) => Some(Color::Magenta),
        (true, false) => Some(seat_color(Seat::First)),
        (false, true) => Some(seat_color(Seat::Second)),
        (false, false) => None,
    }
}

fn seat_color(seat: Seat) -> Color {
    match seat {
        Seat::First => Color::Yellow,
        Seat::Second => Color::Blue,
    }
}

fn render_board(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().title(format!("Board - {}", app.street())).borders(Borders::ALL);
    let board_inner = inner(area);
    f.render_widget(block, area);
    let columns = card_columns(board_inner, BOARD_SIZE as u16, CARD_WIDTH + 2);
    let board = app.round().board();
    let revealed = board.street().reveal_count();
    for (i, card) in board.dealt().iter().enumerate() {
        let visible = (i < revealed).then_some(*card);
        let slot = FIRST_BOARD_SLOT + i;
        let border = if visible.is_some() { slot_color(app, slot) } else { None };
        render_card_widget(f, columns[i], visible, border);
    }
}

fn render_seat(f: &mut Frame, area: Rect, app: &AppState, seat: Seat) {
    let player = app.player(seat);
    let locale = app.locale;
    let block = Block::default()
        .title(locale.player_name(seat))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(seat_color(seat)));
    f.render_widget(block, area);

    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(3)])
        .split(inner(area));

    let mut lines = vec![Line::from(Span::styled(
        player.evaluation.category.label(locale),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(outcome) = app.outcome() {
        lines.push(banner_line(app, outcome, seat));
    }
    f.render_widget(Paragraph::new(lines), split[0]);

    let columns = card_columns(split[1], 2, CARD_WIDTH);
    for (slot, card) in player.hole.as_array().into_iter().enumerate() {
        let defining = player.evaluation.defining_slots().contains(slot);
        render_card_widget(f, columns[slot], Some(card), defining.then_some(seat_color(seat)));
    }
}

fn banner_line(app: &AppState, outcome: Outcome, seat: Seat) -> Line<'static> {
    let color = match outcome.winner() {
        None => Color::Cyan,
        Some(winner) if winner == seat => Color::Green,
        Some(_) => Color::Red,
    };
    Line::from(Span::styled(
        app.locale.banner(outcome, seat),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

fn render_status(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(area));

    let mut left = vec![Line::from(if app.street() == Street::River {
        "Showdown - press Space for the next deal."
    } else {
        "Press Space to reveal the next street."
    })];
    if let Some(err) = app.error() {
        left.push(Line::from(Span::styled(format!("Error: {err}"), Style::default().fg(Color::Red))));
    }
    let right = vec![Line::from(""), Line::from("Space next • N deal • ? help • Q quit")];
    f.render_widget(Paragraph::new(left).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Keys:", bold)),
        Line::from("- Space / Enter: reveal next street (next deal after the river)"),
        Line::from("- N: skip to the next deal"),
        Line::from("- ?: toggle help"),
        Line::from("- Q / Esc: quit"),
        Line::from(""),
        Line::from(Span::styled("Highlights:", bold)),
        Line::from(Span::styled("- Player 1 hand", Style::default().fg(seat_color(Seat::First)))),
        Line::from(Span::styled("- Player 2 hand", Style::default().fg(seat_color(Seat::Second)))),
        Line::from(Span::styled("- Both hands", Style::default().fg(Color::Magenta))),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn suit_style(s: Suit) -> Style {
    match s {
        Suit::Hearts | Suit::Diamonds => Style::default().fg(Color::Red),
        Suit::Spades | Suit::Clubs => Style::default().fg(Color::White),
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => Line::from(Span::styled(
            format!("{}{}", c.rank().face(), c.suit().glyph()),
            suit_style(c.suit()),
        )),
        None => Line::from(Span::styled("[  ]", Style::default().add_modifier(Modifier::DIM))),
    };
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), inner);
}
