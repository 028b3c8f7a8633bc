//! Fixed-length save/restore strings.
//!
//! One character per square, row-major with `x` fastest. The `Ownership`
//! format only records who owns each square (`'0'` empty, `'1'` player 0,
//! `'2'` player 1) and restores every piece as a pawn. The `Notation` format
//! stores the full piece notation and restores kinds as well.

use log::debug;

use crate::board::board_rules::EMPTY_NOTATION;
use crate::board::board_types::{Color, Piece, PieceKind};
use crate::board::grid::Grid;
use crate::errors::{BoardErrors, BoardResult};
use crate::utils::piece_codec::{notation_for, piece_from_notation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateFormat {
    /// Player digit per square; kinds are not recorded.
    #[default]
    Ownership,
    /// Piece notation per square.
    Notation,
}

pub fn serialize(grid: &Grid<Piece>, format: StateFormat) -> String {
    let mut out = String::with_capacity(grid.square_count());
    grid.for_each_square(|square, _, _| {
        out.push(encode_square(square.piece(), format));
    });
    out
}

/// Replaces every square's occupant from `state`. The whole string is
/// validated first; on error the grid is unchanged.
pub fn deserialize(grid: &mut Grid<Piece>, state: &str, format: StateFormat) -> BoardResult<()> {
    let square_count = grid.square_count();
    let chars: Vec<char> = state.chars().take(square_count).collect();
    if chars.len() < square_count {
        return Err(BoardErrors::StateStringTooShort {
            expected: square_count,
            found: chars.len(),
        });
    }

    let decoded = chars
        .iter()
        .enumerate()
        .map(|(index, &ch)| {
            decode_square(ch, format).ok_or(BoardErrors::InvalidStateChar { index, ch })
        })
        .collect::<BoardResult<Vec<Option<Piece>>>>()?;

    let width = grid.width();
    grid.for_each_square_mut(|square, x, y| match decoded[y * width + x] {
        Some(piece) => {
            square.set_occupant(piece);
        }
        None => {
            square.clear();
        }
    });

    debug!("restored board from {format:?} state string");
    Ok(())
}

fn encode_square(occupant: Option<Piece>, format: StateFormat) -> char {
    match format {
        StateFormat::Notation => notation_for(occupant),
        StateFormat::Ownership => match occupant {
            None => '0',
            Some(piece) => char::from(b'1' + piece.owner().index() as u8),
        },
    }
}

/// `None` means the character is not part of the format. `Some(None)` is an
/// empty square.
fn decode_square(ch: char, format: StateFormat) -> Option<Option<Piece>> {
    match format {
        StateFormat::Notation if ch == EMPTY_NOTATION => Some(None),
        StateFormat::Notation => piece_from_notation(ch).map(Some),
        StateFormat::Ownership => {
            let digit = ch.to_digit(10)? as usize;
            if digit == 0 {
                return Some(None);
            }
            let owner = Color::from_index(digit - 1)?;
            Some(Some(Piece::new(owner, PieceKind::Pawn)))
        }
    }
}
