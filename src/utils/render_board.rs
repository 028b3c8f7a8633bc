//! Plain-text board diagram.
//!
//! Prints notation letters with coordinates along the edges, for debugging
//! and test output.

use crate::board::board_types::Piece;
use crate::board::grid::Grid;
use crate::utils::piece_codec::piece_to_notation;

/// Render the board top row first. Empty squares print as `·`.
pub fn render_board(grid: &Grid<Piece>) -> String {
    let mut out = String::new();
    let header: String = (0..grid.width())
        .map(|x| format!(" {}", x % 10))
        .collect();

    out.push(' ');
    out.push_str(&header);
    out.push('\n');

    for y in 0..grid.height() {
        out.push(char::from(b'0' + (y % 10) as u8));

        for x in 0..grid.width() {
            out.push(' ');
            match grid.square(x as i32, y as i32).and_then(|square| square.piece()) {
                Some(piece) => out.push(piece_to_notation(piece)),
                None => out.push('·'),
            }
        }

        out.push('\n');
    }

    out.push(' ');
    out.push_str(&header);

    out
}
