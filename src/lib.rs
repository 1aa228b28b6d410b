//! Game Collection - classic console mini-games
//!
//! Core modules:
//! - `console`: Prompting, input normalization and validation
//! - `games`: Number guessing and rock-paper-scissors sessions
//! - `stats`: Running statistics for the current process
//! - `menu`: Top-level menu state machine
//! - `settings`: RNG seeding

pub mod console;
pub mod error;
pub mod games;
pub mod menu;
pub mod settings;
pub mod stats;

pub use console::{Console, Reply, StdConsole};
pub use error::GameError;
pub use menu::{App, Screen};
pub use settings::Settings;
pub use stats::Statistics;

/// Fixed values of the console protocol
pub mod consts {
    /// Typed at any prompt to leave the current game or quit
    pub const EXIT_SENTINEL: &str = "exit";

    /// Guessing range (inclusive)
    pub const GUESS_MIN: u32 = 1;
    pub const GUESS_MAX: u32 = 100;

    /// Upper attempt bound of each success tier
    pub const TIER_MASTER_MAX: u32 = 5;
    pub const TIER_GREAT_MAX: u32 = 10;
    pub const TIER_NOT_BAD_MAX: u32 = 15;

    pub const MENU_OPTIONS: &[&str] = &["1", "2", "3", "4"];
    pub const MOVE_OPTIONS: &[&str] = &["rock", "paper", "scissors"];
    pub const YES_NO_OPTIONS: &[&str] = &["yes", "y", "no", "n"];
}
