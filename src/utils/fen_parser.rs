//! FEN placement field to board placements.
//!
//! Only the piece-placement field is read. FEN lists the far rank (rank 8)
//! first; since the board's origin is the visual top-left, segment `y` of the
//! placement field lands on row `y`. Parsing always finishes before the grid
//! is touched, so a strict-mode failure leaves the board as it was.

use log::{debug, trace};

use crate::board::board_types::Piece;
use crate::board::grid::Grid;
use crate::errors::{BoardErrors, BoardResult};
use crate::utils::piece_codec::piece_from_notation;

/// How malformed placement strings are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FenParseMode {
    /// Never fails. Malformed input yields a partially populated board.
    #[default]
    Lenient,
    /// Rejects malformed input with the reason.
    Strict,
}

/// A piece and the square it goes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: usize,
    pub y: usize,
    pub piece: Piece,
}

pub fn parse_placement(
    fen: &str,
    width: usize,
    height: usize,
    mode: FenParseMode,
) -> BoardResult<Vec<Placement>> {
    match mode {
        FenParseMode::Lenient => Ok(parse_lenient(fen, width, height)),
        FenParseMode::Strict => parse_strict(fen, width, height),
    }
}

/// Parses `fen` and places its pieces on `grid`. Squares the placement
/// leaves empty are not cleared.
pub fn apply_placement(grid: &mut Grid<Piece>, fen: &str, mode: FenParseMode) -> BoardResult<()> {
    let placements = parse_placement(fen, grid.width(), grid.height(), mode)?;

    for placement in placements {
        let (x, y) = (placement.x as i32, placement.y as i32);
        grid.checked_square_mut(x, y)?
            .set_occupant(placement.piece);
        trace!("placed {:?} at ({x}, {y})", placement.piece);
    }

    Ok(())
}

fn parse_lenient(fen: &str, width: usize, height: usize) -> Vec<Placement> {
    let mut placements = Vec::new();
    let mut x = 0usize;
    let mut y = 0usize;

    for ch in fen.chars() {
        if ch == '/' {
            y += 1;
            x = 0;
            continue;
        }

        if let Some(run) = ch.to_digit(10) {
            x += run as usize;
            continue;
        }

        if ch.is_ascii_alphabetic() {
            match piece_from_notation(ch) {
                Some(piece) if x < width && y < height => {
                    placements.push(Placement { x, y, piece });
                }
                Some(_) => debug!("dropping '{ch}' at ({x}, {y}): outside the board"),
                None => debug!("ignoring unknown piece letter '{ch}' at ({x}, {y})"),
            }
        }

        x += 1;
    }

    placements
}

fn parse_strict(fen: &str, width: usize, height: usize) -> BoardResult<Vec<Placement>> {
    let ranks: Vec<&str> = fen.split('/').collect();
    if ranks.len() != height {
        return Err(BoardErrors::InvalidFENrankCount {
            expected: height,
            found: ranks.len(),
        });
    }

    let mut placements = Vec::new();

    for (y, rank_str) in ranks.iter().enumerate() {
        let mut x = 0usize;

        for ch in rank_str.chars() {
            if let Some(run) = ch.to_digit(10) {
                let run = run as usize;
                if !(1..=width).contains(&run) {
                    return Err(BoardErrors::InvalidFENemptyRun(ch));
                }
                x += run;
                continue;
            }

            let piece = piece_from_notation(ch).ok_or(BoardErrors::InvalidFENtoken(ch))?;

            if x >= width {
                return Err(BoardErrors::InvalidFENrankWidth {
                    rank: y,
                    files: x + 1,
                    expected: width,
                });
            }

            placements.push(Placement { x, y, piece });
            x += 1;
        }

        if x != width {
            return Err(BoardErrors::InvalidFENrankWidth {
                rank: y,
                files: x,
                expected: width,
            });
        }
    }

    Ok(placements)
}
