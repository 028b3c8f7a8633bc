//! Crate root module declarations for the Plum board engine.
//!
//! Exposes the board model (grid, pieces, the `ChessBoard` facade), the
//! move-authorization hooks, configuration, and the notation utilities
//! (FEN placement parsing and generation, state strings, rendering) so the
//! game framework, tests, and benches can import stable module paths.

pub mod config;
pub mod errors;

pub mod board {
    pub mod board_rules;
    pub mod board_types;
    pub mod chess_board;
    pub mod grid;
}

pub mod rules {
    pub mod rules_engine;
}

pub mod utils {
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod piece_codec;
    pub mod render_board;
    pub mod sprites;
    pub mod state_string;
}
