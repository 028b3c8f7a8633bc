//! Single-character piece notation.
//!
//! Uppercase letters belong to player 0, lowercase to player 1, and
//! `EMPTY_NOTATION` marks a square without a piece. Decoding never fails:
//! letters that are not chess pieces map to "no piece".

use crate::board::board_rules::EMPTY_NOTATION;
use crate::board::board_types::{Color, Piece, PieceKind};

/// Notation for a square's occupant, or the empty sentinel.
#[inline]
pub fn notation_for(occupant: Option<Piece>) -> char {
    occupant.map_or(EMPTY_NOTATION, piece_to_notation)
}

pub fn piece_to_notation(piece: Piece) -> char {
    let base = match piece.kind() {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.owner() {
        Color::Light => base.to_ascii_uppercase(),
        Color::Dark => base,
    }
}

/// Case-insensitive FEN letter to piece kind.
pub fn piece_kind_for(letter: char) -> Option<PieceKind> {
    match letter.to_ascii_uppercase() {
        'P' => Some(PieceKind::Pawn),
        'N' => Some(PieceKind::Knight),
        'B' => Some(PieceKind::Bishop),
        'R' => Some(PieceKind::Rook),
        'Q' => Some(PieceKind::Queen),
        'K' => Some(PieceKind::King),
        _ => None,
    }
}

/// Owner implied by a letter's case. Non-letters have no owner.
#[inline]
pub fn owner_for(letter: char) -> Option<Color> {
    if letter.is_ascii_uppercase() {
        Some(Color::Light)
    } else if letter.is_ascii_lowercase() {
        Some(Color::Dark)
    } else {
        None
    }
}

pub fn piece_from_notation(letter: char) -> Option<Piece> {
    let owner = owner_for(letter)?;
    let kind = piece_kind_for(letter)?;
    Some(Piece::new(owner, kind))
}
