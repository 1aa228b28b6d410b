//! Error types for the game collection

use thiserror::Error;

/// Faults that end the program.
///
/// Bad input is never an error here: the console re-prompts for it, and the
/// games treat the exit sentinel as an ordinary abandoned session.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// Standard input reached end-of-file while a prompt was waiting
    #[error("input stream closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, GameError>;
