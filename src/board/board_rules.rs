//! Canonical board constants.
//!
//! Dimensions, the standard starting placement, and the sentinel used for
//! empty squares in notation strings.

/// Files per rank on a chess board.
pub const BOARD_WIDTH: usize = 8;

/// Ranks on a chess board.
pub const BOARD_HEIGHT: usize = 8;

/// Players seated at a chess board.
pub const PLAYER_COUNT: usize = 2;

/// Standard chess starting placement (the first FEN field only).
pub const STARTING_PLACEMENT_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Notation character for a square without a piece.
pub const EMPTY_NOTATION: char = '0';
