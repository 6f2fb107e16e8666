//! Turn state machine for one play-through
//!
//! A session owns the secret, vets and scores guesses, tracks the guess
//! history, and renders the shareable summary once the game ends.

use crate::core::{LENGTH, MAX_ATTEMPTS, Quint, QuintError, Variant, Verdict};
use crate::pools::Pool;
use rand::Rng;
use std::fmt;
use tracing::{debug, trace};

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Guesses are still being accepted
    InProgress,
    /// The last guess matched the secret
    Won,
    /// All attempts used without matching the secret
    Lost,
}

impl Status {
    /// Whether the game has ended
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Why a guess was refused, or why a session cannot start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Guess length differs from the game's five symbols
    InvalidLength(usize),
    /// Guess is outside the game's vocabulary or alphabet
    NotInVocabulary,
    /// Guess submitted after the game already ended
    GameAlreadyOver,
    /// The pool supplied no secrets, so no session can start
    EmptySecretPool,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Guess must be exactly {LENGTH} symbols, got {len}")
            }
            Self::NotInVocabulary => write!(f, "Not in the accepted guess list"),
            Self::GameAlreadyOver => write!(f, "The game is already over"),
            Self::EmptySecretPool => write!(f, "Secret pool is empty"),
        }
    }
}

impl std::error::Error for GameError {}

/// One accepted guess and its feedback
#[derive(Debug, Clone)]
pub struct Turn {
    pub guess: Quint,
    pub verdict: Verdict,
}

/// Outcome of [`Session::submit_guess`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Guess was scored and recorded
    Accepted { verdict: Verdict, status: Status },
    /// Guess was refused; session state is unchanged
    Rejected { reason: GameError, status: Status },
}

impl Submission {
    /// Whether the guess was recorded
    #[inline]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Session status after this submission
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::Accepted { status, .. } | Self::Rejected { status, .. } => *status,
        }
    }
}

/// Stateful controller for one game
///
/// Borrows its pool, so the pool outlives the session and can be shared by
/// consecutive games.
#[derive(Debug)]
pub struct Session<'a> {
    pool: &'a Pool,
    secret: Quint,
    secret_index: usize,
    history: Vec<Turn>,
    status: Status,
}

impl<'a> Session<'a> {
    /// Start a session with a uniformly drawn secret
    ///
    /// # Errors
    /// Returns `GameError::EmptySecretPool` if the pool holds no secrets.
    pub fn new(pool: &'a Pool, rng: &mut impl Rng) -> Result<Self, GameError> {
        let (secret, secret_index) = draw_secret(pool, rng)?;
        debug!(
            game = %pool.variant(),
            secret = %secret,
            index = secret_index,
            "session started"
        );

        Ok(Self {
            pool,
            secret,
            secret_index,
            history: Vec::new(),
            status: Status::InProgress,
        })
    }

    /// Abandon the current game and draw a fresh secret
    ///
    /// Works at any point, including mid-game and after a win or loss.
    pub fn restart(&mut self, rng: &mut impl Rng) {
        // The pool cannot have emptied since `new` checked it
        if let Ok((secret, secret_index)) = draw_secret(self.pool, rng) {
            self.secret = secret;
            self.secret_index = secret_index;
            self.history.clear();
            self.status = Status::InProgress;
            debug!(
                game = %self.variant(),
                secret = %self.secret,
                index = secret_index,
                "session restarted"
            );
        }
    }

    /// Which game this session plays
    #[inline]
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.pool.variant()
    }

    /// Current lifecycle state
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Accepted guesses in submission order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Number of accepted guesses so far
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// The secret being guessed
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Quint {
        &self.secret
    }

    /// Index of the secret in the pool's stable order
    #[inline]
    #[must_use]
    pub const fn secret_index(&self) -> usize {
        self.secret_index
    }

    /// Submit a raw guess string
    ///
    /// Rejections never change session state: the attempt is not consumed
    /// and the history is untouched. An accepted guess is scored, recorded
    /// (winning guesses included), and may end the game.
    pub fn submit_guess(&mut self, raw: &str) -> Submission {
        if self.status.is_over() {
            trace!(game = %self.variant(), "guess submitted after game over");
            return Submission::Rejected {
                reason: GameError::GameAlreadyOver,
                status: self.status,
            };
        }

        let guess = match Quint::parse(self.variant(), raw) {
            Ok(quint) => quint,
            Err(err) => {
                let reason = match err {
                    QuintError::InvalidLength(len) => GameError::InvalidLength(len),
                    QuintError::InvalidSymbol(_) => GameError::NotInVocabulary,
                };
                trace!(game = %self.variant(), raw, %reason, "guess rejected");
                return Submission::Rejected {
                    reason,
                    status: self.status,
                };
            }
        };

        if !self.pool.permits(&guess) {
            trace!(game = %self.variant(), guess = %guess, "guess not in vocabulary");
            return Submission::Rejected {
                reason: GameError::NotInVocabulary,
                status: self.status,
            };
        }

        let verdict = Verdict::evaluate(&self.secret, &guess);
        trace!(game = %self.variant(), guess = %guess, verdict = %verdict, "guess scored");
        self.history.push(Turn { guess, verdict });

        self.status = if verdict.is_win() {
            Status::Won
        } else if self.history.len() == MAX_ATTEMPTS {
            Status::Lost
        } else {
            Status::InProgress
        };

        if self.status.is_over() {
            debug!(
                game = %self.variant(),
                status = ?self.status,
                attempts = self.history.len(),
                "session finished"
            );
        }

        Submission::Accepted {
            verdict,
            status: self.status,
        }
    }

    /// Shareable result block, or `None` while the game is in progress
    ///
    /// The text is byte-stable for identical play sequences:
    /// - Won: `"5 <Title> <index> <attempts>/6\n"` then one glyph row per
    ///   guess, each ending in a newline
    /// - Lost: `"5 <Title> Lost <index>\n"` then the glyph rows; for the
    ///   word game the secret is appended as a final line with no trailing
    ///   newline, the number game never reveals its secret
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        let mut text = match self.status {
            Status::InProgress => return None,
            Status::Won => format!(
                "{} {} {} {}/{}\n",
                LENGTH,
                self.variant().title(),
                self.secret_index,
                self.history.len(),
                MAX_ATTEMPTS
            ),
            Status::Lost => format!(
                "{} {} Lost {}\n",
                LENGTH,
                self.variant().title(),
                self.secret_index
            ),
        };

        for turn in &self.history {
            text.push_str(&turn.verdict.glyphs());
            text.push('\n');
        }

        if self.status == Status::Lost && self.variant() == Variant::Wordle {
            text.push_str(self.secret.text());
        }

        Some(text)
    }
}

fn draw_secret(pool: &Pool, rng: &mut impl Rng) -> Result<(Quint, usize), GameError> {
    if pool.is_empty() {
        return Err(GameError::EmptySecretPool);
    }

    let index = rng.random_range(0..pool.len());
    Ok((pool.secrets()[index].clone(), index))
}
