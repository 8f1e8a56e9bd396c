//! TUI application state and logic

use crate::game::{GameError, GameSession, MAX_ATTEMPTS, SessionStatus, TimerCoordinator, WordSource};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Seconds a rejection message stays on screen before it auto-clears
const MESSAGE_TTL_SECS: u8 = 3;

/// A status message shown in the side panel
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Per-run play statistics
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by attempt count; index 1..=6
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

/// Application state
pub struct App<'a, S: WordSource> {
    pub session: GameSession<'a, S>,
    pub timer: TimerCoordinator,
    pub timer_enabled: bool,
    pub word_length: usize,
    pub message: Option<Message>,
    message_ttl: u8,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl<'a, S: WordSource> App<'a, S> {
    /// Create the app with a fresh session
    ///
    /// A `timer_duration` of 0 disables the countdown.
    ///
    /// # Errors
    /// Returns [`GameError::NoWordsAvailable`] when the source holds no
    /// words of the requested length.
    pub fn new(source: &'a S, word_length: usize, timer_duration: u32) -> Result<Self, GameError> {
        let session = GameSession::new(source, word_length)?;
        let timer_enabled = timer_duration > 0;
        let mut timer = TimerCoordinator::new(timer_duration);
        if timer_enabled {
            timer.start();
        }

        Ok(Self {
            session,
            timer,
            timer_enabled,
            word_length,
            message: Some(Message {
                text: "Devinez le mot ! La première lettre est donnée.".to_string(),
                style: MessageStyle::Info,
            }),
            message_ttl: 0,
            stats: Statistics::default(),
            should_quit: false,
        })
    }

    /// Advance one second: message expiry, countdown, forced timeout
    pub fn on_tick(&mut self) {
        if self.message_ttl > 0 {
            self.message_ttl -= 1;
            if self.message_ttl == 0 {
                self.message = None;
            }
        }

        if self.timer_enabled && self.timer.tick() {
            self.session.force_timeout();
            self.stats.total_games += 1;
            self.announce(
                format!("Temps écoulé ! Le mot était {}", self.session.target()),
                MessageStyle::Error,
            );
        }
    }

    /// Submit the pending input buffer
    pub fn submit_current(&mut self) {
        match self.session.submit_pending() {
            Ok(_) => match self.session.status() {
                SessionStatus::Won => {
                    let attempts = self.session.attempts_used();
                    self.stats.total_games += 1;
                    self.stats.games_won += 1;
                    if attempts <= MAX_ATTEMPTS {
                        self.stats.guess_distribution[attempts] += 1;
                    }
                    self.timer.stop();

                    let celebration = match attempts {
                        1 => "Incroyable ! Trouvé du premier coup !",
                        2 => "Magnifique ! Deux essais !",
                        3 => "Superbe ! Trois essais !",
                        _ => "Bravo, mot trouvé !",
                    };
                    self.announce(celebration.to_string(), MessageStyle::Success);
                }
                SessionStatus::LostAttempts => {
                    self.stats.total_games += 1;
                    self.timer.stop();
                    self.announce(
                        format!("Perdu ! Le mot était {}", self.session.target()),
                        MessageStyle::Error,
                    );
                }
                SessionStatus::Playing | SessionStatus::LostTimeout => {}
            },
            Err(reason) => {
                self.flash(reason.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Start a new round, restarting the timer if enabled
    pub fn new_game(&mut self) {
        match self.session.new_round(self.word_length) {
            Ok(()) => {
                if self.timer_enabled {
                    self.timer.start();
                }
                self.announce(
                    "Nouvelle partie ! Devinez le mot.".to_string(),
                    MessageStyle::Info,
                );
            }
            Err(e) => {
                self.flash(e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Show a message that auto-clears after a few seconds
    fn flash(&mut self, text: String, style: MessageStyle) {
        self.message = Some(Message { text, style });
        self.message_ttl = MESSAGE_TTL_SECS;
    }

    /// Show a message that stays until replaced
    fn announce(&mut self, text: String, style: MessageStyle) {
        self.message = Some(Message { text, style });
        self.message_ttl = 0;
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui<S: WordSource>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    // Poll fast enough to feel responsive, tick the game once per second
    const POLL_INTERVAL: Duration = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key);
                }
            }
        }

        if last_tick.elapsed() >= Duration::from_secs(1) {
            app.on_tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key<S: WordSource>(app: &mut App<'_, S>, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.session.is_over() {
        match key.code {
            KeyCode::Char('n') => app.new_game(),
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Char(c) => app.session.push_letter(c),
        KeyCode::Backspace => app.session.pop_letter(),
        KeyCode::Enter => app.submit_current(),
        _ => {}
    }
}
