//! The board engine the game framework talks to.
//!
//! `ChessBoard` owns the grid for the whole session. Games are started by
//! `setup` (or `new_game`), saved and restored through state strings, and
//! ended by `stop_game`, which empties the board without recreating it.
//! Move gating is delegated to a boxed `RulesEngine`.

use std::fmt;

use log::debug;

use crate::board::board_rules::{PLAYER_COUNT, STARTING_PLACEMENT_FEN};
use crate::board::board_types::{Color, Piece};
use crate::board::grid::Grid;
use crate::config::BoardConfig;
use crate::errors::{BoardErrors, BoardResult};
use crate::rules::rules_engine::{PermissiveRules, RulesEngine, TurnContext};
use crate::utils::fen_generator::generate_placement;
use crate::utils::fen_parser::apply_placement;
use crate::utils::piece_codec::notation_for;
use crate::utils::state_string::{deserialize, serialize, StateFormat};

pub struct ChessBoard {
    config: BoardConfig,
    grid: Grid<Piece>,
    rules: Box<dyn RulesEngine>,
}

impl ChessBoard {
    /// Empty board with permissive rules.
    pub fn new(config: BoardConfig) -> BoardResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            grid: Grid::new(config.width, config.height)?,
            rules: Box::new(PermissiveRules),
        })
    }

    /// Default chess board set up in the starting position.
    pub fn new_game() -> BoardResult<Self> {
        let mut board = Self::new(BoardConfig::default())?;
        board.setup(STARTING_PLACEMENT_FEN)?;
        Ok(board)
    }

    pub fn with_rules<R>(mut self, rules: R) -> Self
    where
        R: RulesEngine + 'static,
    {
        self.rules = Box::new(rules);
        self
    }

    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &Grid<Piece> {
        &self.grid
    }

    #[inline]
    pub fn player_count(&self) -> usize {
        PLAYER_COUNT
    }

    /// Replaces the board contents with the FEN placement `fen`.
    ///
    /// In strict mode a malformed placement is rejected and the current
    /// position is kept.
    pub fn setup(&mut self, fen: &str) -> BoardResult<()> {
        let mut staged = Grid::new(self.config.width, self.config.height)?;
        apply_placement(&mut staged, fen, self.config.fen_mode)?;
        self.grid = staged;
        debug!("board set up from placement '{fen}'");
        Ok(())
    }

    /// Destroys every piece. The board itself stays for the next game.
    pub fn stop_game(&mut self) {
        self.grid.for_each_square_mut(|square, _, _| {
            square.clear();
        });
        debug!("game stopped, board cleared");
    }

    pub fn piece_at(&self, x: i32, y: i32) -> Option<Piece> {
        self.grid.square(x, y).and_then(|square| square.piece())
    }

    /// Places `piece`, returning the occupant it replaced.
    pub fn set_piece(&mut self, x: i32, y: i32, piece: Piece) -> BoardResult<Option<Piece>> {
        Ok(self.grid.checked_square_mut(x, y)?.set_occupant(piece))
    }

    pub fn clear_square(&mut self, x: i32, y: i32) -> BoardResult<Option<Piece>> {
        Ok(self.grid.checked_square_mut(x, y)?.clear())
    }

    /// Owner of the piece at `(x, y)`; `None` off the board or on an empty
    /// square.
    pub fn owner_at(&self, x: i32, y: i32) -> Option<Color> {
        self.piece_at(x, y).map(Piece::owner)
    }

    pub fn notation_at(&self, x: i32, y: i32) -> BoardResult<char> {
        self.grid
            .square(x, y)
            .map(|square| notation_for(square.piece()))
            .ok_or(BoardErrors::OutOfBounds { x, y })
    }

    pub fn state_string(&self) -> String {
        serialize(&self.grid, self.config.state_format)
    }

    pub fn initial_state_string(&self) -> String {
        self.state_string()
    }

    pub fn set_state_string(&mut self, state: &str) -> BoardResult<()> {
        deserialize(&mut self.grid, state, self.config.state_format)
    }

    /// One notation character per square, regardless of the configured
    /// state format.
    pub fn notation_string(&self) -> String {
        serialize(&self.grid, StateFormat::Notation)
    }

    pub fn placement_fen(&self) -> String {
        generate_placement(&self.grid)
    }

    /// Whether the piece on `(x, y)` may be picked up. Empty and off-board
    /// squares never can.
    pub fn can_lift(&self, x: i32, y: i32, ctx: &TurnContext) -> bool {
        match self.grid.square(x, y) {
            Some(source) => source
                .piece()
                .is_some_and(|piece| self.rules.can_lift(piece, source, ctx)),
            None => false,
        }
    }

    /// Whether `piece`, lifted from `from`, may be dropped on `to`.
    pub fn can_move(&self, piece: Piece, from: (i32, i32), to: (i32, i32), ctx: &TurnContext) -> bool {
        match (self.grid.square(from.0, from.1), self.grid.square(to.0, to.1)) {
            (Some(source), Some(destination)) => {
                self.rules.can_move(piece, source, destination, ctx)
            }
            _ => false,
        }
    }

    pub fn action_for_empty_square(&self, x: i32, y: i32) -> bool {
        self.grid
            .square(x, y)
            .is_some_and(|square| square.is_empty() && self.rules.action_for_empty_square(square))
    }

    pub fn check_for_winner(&self) -> Option<Color> {
        self.rules.check_for_winner(self)
    }

    pub fn check_for_draw(&self) -> bool {
        self.rules.check_for_draw(self)
    }
}

impl fmt::Debug for ChessBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChessBoard")
            .field("config", &self.config)
            .field("placement", &self.placement_fen())
            .finish_non_exhaustive()
    }
}
