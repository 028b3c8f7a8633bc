//! Errors used throughout the board engine.
//!
//! `BoardErrors` is the single error type returned by grid access, FEN
//! parsing, state-string restore and configuration loading. Variants carry
//! the offending coordinate, character or value so callers can log precise
//! diagnostics.
//!
//! Usage guidelines:
//! - Queries that the framework polls every frame (`owner_at`, `piece_at`)
//!   report absence with `Option` instead of an error.
//! - Mutating operations return `BoardResult<()>` and leave the board
//!   untouched when they fail.

use thiserror::Error;

/// Unified error type for the board engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardErrors {
    /// A coordinate outside the board was used for an access that requires a
    /// real square.
    ///
    /// Payload: the coordinate as supplied by the caller.
    #[error("square ({x}, {y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },

    /// The board was configured with a zero width or height.
    #[error("invalid board dimensions {width}x{height}")]
    InvalidBoardDimensions { width: usize, height: usize },

    /// Unexpected character in a FEN placement field (strict mode only).
    #[error("invalid FEN token '{0}'")]
    InvalidFENtoken(char),

    /// A run-length digit outside `1..=width` (strict mode only).
    #[error("invalid empty-square count '{0}' in FEN")]
    InvalidFENemptyRun(char),

    /// The placement field did not have one segment per board row.
    #[error("FEN placement has {found} ranks, expected {expected}")]
    InvalidFENrankCount { expected: usize, found: usize },

    /// A rank segment did not cover exactly the board width.
    ///
    /// `rank` is the zero-based segment index in the FEN string.
    #[error("FEN rank {rank} covers {files} files, expected {expected}")]
    InvalidFENrankWidth {
        rank: usize,
        files: usize,
        expected: usize,
    },

    /// A state string was shorter than the number of squares on the board.
    #[error("state string has {found} characters, expected at least {expected}")]
    StateStringTooShort { expected: usize, found: usize },

    /// A state string contained a character outside its format's alphabet.
    #[error("invalid state character '{ch}' at index {index}")]
    InvalidStateChar { index: usize, ch: char },

    /// A configuration value could not be interpreted.
    #[error("invalid value '{value}' for {key}")]
    InvalidConfigValue { key: String, value: String },
}

/// Result alias used by board operations.
pub type BoardResult<T> = Result<T, BoardErrors>;
