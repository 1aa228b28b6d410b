//! Number guessing game
//!
//! The computer picks a number in [`GUESS_MIN`, `GUESS_MAX`] and the player
//! guesses until they hit it or type the exit sentinel.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::console::{Console, Reply};
use crate::consts::*;
use crate::error::Result;

/// Classification of one line typed at the guess prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessInput {
    Valid(u32),
    NotANumber,
    OutOfRange,
}

impl GuessInput {
    pub fn parse(text: &str) -> Self {
        match text.parse::<i64>() {
            // Integers too large for i64 are still integers, just out of range
            Err(_) if is_integer_literal(text) => GuessInput::OutOfRange,
            Err(_) => GuessInput::NotANumber,
            Ok(n) if (GUESS_MIN as i64..=GUESS_MAX as i64).contains(&n) => {
                GuessInput::Valid(n as u32)
            }
            Ok(_) => GuessInput::OutOfRange,
        }
    }
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// How a valid guess compares to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    TooLow,
    TooHigh,
    Correct,
}

/// Performance rating shown after a win
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Master,
    Great,
    NotBad,
    Persistent,
}

impl Tier {
    pub fn for_attempts(attempts: u32) -> Self {
        if attempts <= TIER_MASTER_MAX {
            Tier::Master
        } else if attempts <= TIER_GREAT_MAX {
            Tier::Great
        } else if attempts <= TIER_NOT_BAD_MAX {
            Tier::NotBad
        } else {
            Tier::Persistent
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Tier::Master => "Excellent! You're a guessing master! 🏆",
            Tier::Great => "Great job! That's pretty good! 👍",
            Tier::NotBad => "Not bad! You got there in the end! 😊",
            Tier::Persistent => "You made it! Practice makes perfect! 💪",
        }
    }
}

/// One guessing session
#[derive(Debug, Clone)]
pub struct GuessingGame {
    target: u32,
    attempts: u32,
}

impl GuessingGame {
    /// Start a session with a uniformly random target
    pub fn new<G: Rng + ?Sized>(rng: &mut G) -> Self {
        Self::with_target(rng.random_range(GUESS_MIN..=GUESS_MAX))
    }

    pub fn with_target(target: u32) -> Self {
        debug_assert!((GUESS_MIN..=GUESS_MAX).contains(&target));
        Self { target, attempts: 0 }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Valid guesses made so far
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Count a valid guess and compare it to the target
    pub fn guess(&mut self, value: u32) -> Verdict {
        self.attempts += 1;
        match value.cmp(&self.target) {
            std::cmp::Ordering::Less => Verdict::TooLow,
            std::cmp::Ordering::Greater => Verdict::TooHigh,
            std::cmp::Ordering::Equal => Verdict::Correct,
        }
    }

    /// Run the session. Returns the attempt count, or `None` if abandoned.
    pub fn play<R: BufRead, W: Write>(mut self, console: &mut Console<R, W>) -> Result<Option<u32>> {
        console.banner("           NUMBER GUESSING GAME", 50)?;
        console.say(format!(
            "I'm thinking of a number between {GUESS_MIN} and {GUESS_MAX}!"
        ))?;
        console.say("Try to guess it. I'll give you hints after each guess.")?;
        console.say("Type 'exit' anytime to return to main menu.\n")?;

        log::info!("guessing session started");
        log::debug!("target is {}", self.target);

        let prompt = format!("Enter your guess ({GUESS_MIN}-{GUESS_MAX}): ");
        loop {
            let text = match console.read_input(&prompt, None)? {
                Reply::Exit => {
                    log::info!("guessing session abandoned after {} attempts", self.attempts);
                    console.say("Returning to main menu...")?;
                    return Ok(None);
                }
                Reply::Line(text) => text,
            };

            let value = match GuessInput::parse(&text) {
                GuessInput::Valid(value) => value,
                GuessInput::NotANumber => {
                    console.say("Please enter a valid number!")?;
                    continue;
                }
                GuessInput::OutOfRange => {
                    console.say(format!(
                        "Please enter a number between {GUESS_MIN} and {GUESS_MAX}!"
                    ))?;
                    continue;
                }
            };

            let verdict = self.guess(value);
            log::debug!("guess {} of {value}: {verdict:?}", self.attempts);
            match verdict {
                Verdict::Correct => {
                    console.say("\n🎉 Congratulations! You guessed it!")?;
                    console.say(format!("The number was {}", self.target))?;
                    console.say(format!("It took you {} attempts.", self.attempts))?;
                    console.say(Tier::for_attempts(self.attempts).message())?;
                    log::info!("guessing session won in {} attempts", self.attempts);
                    return Ok(Some(self.attempts));
                }
                Verdict::TooLow => console.say(format!(
                    "Too low! Try a higher number. (Attempt {})",
                    self.attempts
                ))?,
                Verdict::TooHigh => console.say(format!(
                    "Too high! Try a lower number. (Attempt {})",
                    self.attempts
                ))?,
            }
        }
    }
}

/// Play one guessing session with a fresh random target
pub fn play_guessing_game<R, W, G>(console: &mut Console<R, W>, rng: &mut G) -> Result<Option<u32>>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    GuessingGame::new(rng).play(console)
}
