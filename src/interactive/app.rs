//! TUI application state and logic

use crate::core::{LENGTH, MAX_ATTEMPTS, Mark, Variant};
use crate::game::{GameError, Session, Status, Submission};
use crate::pools::Pool;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub rng: StdRng,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl<'a> App<'a> {
    /// Create the app with a freshly drawn secret
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptySecretPool` if the pool holds no secrets.
    pub fn new(pool: &'a Pool, mut rng: StdRng) -> Result<Self, GameError> {
        let session = Session::new(pool, &mut rng)?;
        let variant = session.variant();

        Ok(Self {
            session,
            rng,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!(
                        "Guess the {LENGTH}-{} secret in {MAX_ATTEMPTS} tries.",
                        variant.symbol_name()
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a guess and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Typing,
        })
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.session.variant()
    }

    /// Append a symbol to the input buffer if it fits the game's alphabet
    pub fn push_symbol(&mut self, c: char) {
        if !c.is_ascii() {
            return;
        }
        let c = c.to_ascii_lowercase();
        if self.input_buffer.len() < LENGTH && self.variant().accepts(c as u8) {
            self.input_buffer.push(c);
        }
    }

    pub fn pop_symbol(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the typed guess to the session
    pub fn submit_input(&mut self) {
        let raw = self.input_buffer.clone();

        match self.session.submit_guess(&raw) {
            Submission::Rejected { reason, .. } => {
                // Keep the buffer so the player can fix the guess in place
                self.add_message(&format!("✗ {reason}"), MessageStyle::Error);
            }
            Submission::Accepted { status, .. } => {
                self.input_buffer.clear();

                match status {
                    Status::Won => {
                        self.stats.total_games += 1;
                        self.stats.games_won += 1;
                        let guess_count = self.session.attempts();
                        if guess_count <= MAX_ATTEMPTS {
                            self.stats.guess_distribution[guess_count] += 1;
                        }

                        self.input_mode = InputMode::GameOver;

                        let celebration = match guess_count {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            _ => "😅 PHEW! Got it in six! 😅",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message(
                            "Press 'n' for a new game or 'q' to quit.",
                            MessageStyle::Info,
                        );
                    }
                    Status::Lost => {
                        self.stats.total_games += 1;
                        self.input_mode = InputMode::GameOver;

                        self.add_message("❌ Out of guesses!", MessageStyle::Error);
                        self.add_message(
                            "Press 'n' for a new game or 'q' to quit.",
                            MessageStyle::Info,
                        );
                    }
                    Status::InProgress => {
                        let left = MAX_ATTEMPTS - self.session.attempts();
                        self.add_message(
                            &format!("{left} {} remaining", if left == 1 { "try" } else { "tries" }),
                            MessageStyle::Info,
                        );
                    }
                }
            }
        }
    }

    pub fn new_game(&mut self) {
        self.session.restart(&mut self.rng);
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Typing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Strongest mark seen so far for each symbol, for keyboard hints
    #[must_use]
    pub fn key_hints(&self) -> FxHashMap<u8, Mark> {
        let mut hints: FxHashMap<u8, Mark> = FxHashMap::default();

        for turn in self.session.history() {
            for (i, &mark) in turn.verdict.marks().iter().enumerate() {
                let symbol = turn.guess.symbol_at(i);
                let entry = hints.entry(symbol).or_insert(mark);
                if mark > *entry {
                    *entry = mark;
                }
            }
        }

        hints
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // Ignore other keys until the player chooses
                    }
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    // 'q' stays a typeable letter, so quitting mid-game is Esc only
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.push_symbol(c);
                    }
                    KeyCode::Backspace => {
                        app.pop_symbol();
                    }
                    KeyCode::Enter => {
                        app.submit_input();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
