//! The two mini-games
//!
//! Each game runs one interactive session against the console and hands back
//! a result for the statistics tracker. Sessions hold no state beyond their
//! own invocation.

pub mod guessing;
pub mod rps;

pub use guessing::{GuessInput, GuessingGame, Tier, Verdict, play_guessing_game};
pub use rps::{Move, Opponent, Outcome, RandomOpponent, RpsGame, RpsResult, play_rps_game, resolve};
