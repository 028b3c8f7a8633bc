//! Move authorization hooks.
//!
//! The board asks a `RulesEngine` whether a piece may be lifted, whether a
//! move may complete, and whether the game has ended. Every hook has a
//! default, so a full rules engine overrides only what it enforces.
//! `PermissiveRules` keeps all the defaults: lifting is limited to the side
//! to move, every move is allowed, and nobody ever wins or draws.

use crate::board::board_types::{Color, Piece, DARK_TAG_BIT};
use crate::board::chess_board::ChessBoard;
use crate::board::grid::Square;

/// Whose turn it is, passed into every authorization call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnContext {
    pub current_player: Color,
}

impl TurnContext {
    #[inline]
    pub const fn new(current_player: Color) -> Self {
        Self { current_player }
    }
}

/// True iff the piece's color bits match the active player's.
#[inline]
pub fn piece_belongs_to_current_player(piece: Piece, ctx: &TurnContext) -> bool {
    let current_player = ctx.current_player.index() as u8 * DARK_TAG_BIT;
    piece.game_tag() & DARK_TAG_BIT == current_player
}

pub trait RulesEngine: Send {
    fn can_lift(&self, piece: Piece, _source: &Square<Piece>, ctx: &TurnContext) -> bool {
        piece_belongs_to_current_player(piece, ctx)
    }

    fn can_move(
        &self,
        _piece: Piece,
        _source: &Square<Piece>,
        _destination: &Square<Piece>,
        _ctx: &TurnContext,
    ) -> bool {
        true
    }

    /// Called when the player clicks a square with no piece on it.
    fn action_for_empty_square(&self, _square: &Square<Piece>) -> bool {
        false
    }

    fn check_for_winner(&self, _board: &ChessBoard) -> Option<Color> {
        None
    }

    fn check_for_draw(&self, _board: &ChessBoard) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveRules;

impl RulesEngine for PermissiveRules {}

#[cfg(test)]
mod tests {
    use super::{PermissiveRules, RulesEngine, TurnContext};
    use crate::board::board_types::{Color, Piece, PieceKind};
    use crate::board::chess_board::ChessBoard;
    use crate::board::grid::{Grid, Square};

    fn two_squares() -> Grid<Piece> {
        Grid::new(2, 1).expect("grid should build")
    }

    fn pair(grid: &Grid<Piece>) -> (&Square<Piece>, &Square<Piece>) {
        (
            grid.square(0, 0).expect("source exists"),
            grid.square(1, 0).expect("destination exists"),
        )
    }

    #[test]
    fn lift_is_limited_to_current_player() {
        let grid = two_squares();
        let (source, _) = pair(&grid);
        let dark_pawn = Piece::new(Color::Dark, PieceKind::Pawn);
        let light_queen = Piece::new(Color::Light, PieceKind::Queen);
        let rules = PermissiveRules;

        let light_turn = TurnContext::new(Color::Light);
        let dark_turn = TurnContext::new(Color::Dark);

        assert!(!rules.can_lift(dark_pawn, source, &light_turn));
        assert!(rules.can_lift(dark_pawn, source, &dark_turn));
        assert!(rules.can_lift(light_queen, source, &light_turn));
        assert!(!rules.can_lift(light_queen, source, &dark_turn));
    }

    #[test]
    fn permissive_rules_allow_any_move_and_never_end_the_game() {
        let grid = two_squares();
        let (source, destination) = pair(&grid);
        let rules = PermissiveRules;
        let board = ChessBoard::new_game().expect("start position should set up");
        let piece = Piece::new(Color::Light, PieceKind::King);

        for player in [Color::Light, Color::Dark] {
            assert!(rules.can_move(piece, source, destination, &TurnContext::new(player)));
        }
        assert!(!rules.action_for_empty_square(source));
        assert_eq!(rules.check_for_winner(&board), None);
        assert!(!rules.check_for_draw(&board));
    }

    struct RooksOnly;

    impl RulesEngine for RooksOnly {
        fn can_move(
            &self,
            piece: Piece,
            source: &Square<Piece>,
            destination: &Square<Piece>,
            _ctx: &TurnContext,
        ) -> bool {
            let (sx, sy) = source.position();
            let (dx, dy) = destination.position();
            piece.kind() == PieceKind::Rook && (sx == dx || sy == dy)
        }
    }

    #[test]
    fn overriding_one_hook_keeps_the_other_defaults() {
        let grid = two_squares();
        let (source, destination) = pair(&grid);
        let rules = RooksOnly;
        let ctx = TurnContext::new(Color::Light);

        assert!(rules.can_move(Piece::new(Color::Light, PieceKind::Rook), source, destination, &ctx));
        assert!(!rules.can_move(Piece::new(Color::Light, PieceKind::Pawn), source, destination, &ctx));
        assert!(!rules.can_lift(Piece::new(Color::Dark, PieceKind::Rook), source, &ctx));
    }
}
