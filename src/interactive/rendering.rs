//! TUI rendering with ratatui
//!
//! Grid, keyboard and countdown visualizations for the playable game.

use super::app::{App, MessageStyle};
use crate::core::LetterOutcome;
use crate::game::{MAX_ATTEMPTS, SessionStatus, WordSource};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: WordSource>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Main content
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - grid on the left, info panel on the right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MOTTRIX - Jeu de lettres")
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

fn outcome_style(outcome: LetterOutcome) -> Style {
    match outcome {
        LetterOutcome::Correct | LetterOutcome::Victory => {
            Style::default().fg(Color::Black).bg(Color::Green)
        }
        LetterOutcome::Misplaced => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterOutcome::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterOutcome::Solution => Style::default().fg(Color::White).bg(Color::Red),
        LetterOutcome::Unknown => Style::default().fg(Color::White),
    }
}

fn render_grid<S: WordSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let session = &app.session;
    let mut lines = vec![Line::default()];

    for (index, row) in session.attempts().iter().enumerate() {
        let mut spans: Vec<Span> = Vec::with_capacity(session.word_length() * 2);

        if row.is_complete() {
            for cell in row.letters() {
                spans.push(Span::styled(
                    format!(" {} ", cell.character),
                    outcome_style(cell.outcome),
                ));
                spans.push(Span::raw(" "));
            }
        } else if index == session.current_attempt() && !session.is_over() {
            // The row being typed: hint cell, typed letters, blanks
            if let Some(hint) = session.hint_letter() {
                spans.push(Span::styled(
                    format!(" {hint} "),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                ));
                spans.push(Span::raw(" "));
            }
            for ch in session.pending_input().chars() {
                spans.push(Span::styled(
                    format!(" {ch} "),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
            let filled = session.pending_input().len()
                + usize::from(session.hint_letter().is_some());
            for _ in filled..session.word_length() {
                spans.push(Span::styled(
                    " · ",
                    Style::default().fg(Color::DarkGray),
                ));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..session.word_length() {
                spans.push(Span::styled(
                    " · ",
                    Style::default().fg(Color::DarkGray),
                ));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::default());
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(" Grille ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_info_panel<S: WordSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Countdown
            Constraint::Length(5), // Keyboard
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_countdown(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
    render_message(f, app, chunks[2]);
}

fn render_countdown<S: WordSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    if !app.timer_enabled {
        let paragraph = Paragraph::new("sans chrono")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .title(" Chrono ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        f.render_widget(paragraph, area);
        return;
    }

    let color = if app.timer.is_critical_time() {
        Color::Red
    } else if app.timer.is_low_time() {
        Color::Yellow
    } else {
        Color::Green
    };

    let ratio = if app.timer.duration() == 0 {
        0.0
    } else {
        f64::from(app.timer.remaining()) / f64::from(app.timer.duration())
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Chrono ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(app.timer.formatted());

    f.render_widget(gauge, area);
}

fn render_keyboard<S: WordSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let keyboard = app.session.keyboard();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = vec![Span::raw(" ".repeat(i * 2))];
            for ch in row.chars() {
                spans.push(Span::styled(
                    format!("{ch} "),
                    outcome_style(keyboard.state_of(ch)),
                ));
            }
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Clavier ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_message<S: WordSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let (text, style) = app.message.as_ref().map_or_else(
        || (String::new(), Style::default()),
        |message| {
            let style = match message.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            (message.text.clone(), style)
        },
    );

    let widget = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_status<S: WordSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let attempt_text = match app.session.status() {
        SessionStatus::Playing => format!(
            "Essai {}/{}",
            app.session.current_attempt() + 1,
            MAX_ATTEMPTS
        ),
        SessionStatus::Won => format!("Gagné en {}", app.session.attempts_used()),
        SessionStatus::LostAttempts => "Perdu".to_string(),
        SessionStatus::LostTimeout => "Temps écoulé".to_string(),
    };
    let attempt = Paragraph::new(attempt_text).alignment(Alignment::Center);
    f.render_widget(attempt, chunks[0]);

    let stats_text = format!(
        "Parties : {} | Gagnées : {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.session.is_over() {
        "n : nouvelle partie | q : quitter"
    } else {
        "lettres : saisir | Retour : effacer (indice) | Entrée : valider | Échap : quitter"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
