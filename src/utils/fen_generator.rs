use crate::board::board_types::Piece;
use crate::board::grid::Grid;
use crate::utils::piece_codec::piece_to_notation;

/// Placement field for the current board, top row first.
pub fn generate_placement(grid: &Grid<Piece>) -> String {
    let mut out = String::new();

    for y in 0..grid.height() {
        let mut empty_count = 0usize;

        for x in 0..grid.width() {
            match grid.square(x as i32, y as i32).and_then(|square| square.piece()) {
                Some(piece) => {
                    push_empty_run(&mut out, empty_count);
                    empty_count = 0;
                    out.push(piece_to_notation(piece));
                }
                None => empty_count += 1,
            }
        }

        push_empty_run(&mut out, empty_count);

        if y + 1 < grid.height() {
            out.push('/');
        }
    }

    out
}

// Runs longer than 9 only occur on boards wider than chess; they are split.
fn push_empty_run(out: &mut String, mut count: usize) {
    while count > 0 {
        let step = count.min(9);
        out.push(char::from(b'0' + step as u8));
        count -= step;
    }
}

#[cfg(test)]
mod tests {
    use super::generate_placement;
    use crate::board::board_rules::STARTING_PLACEMENT_FEN;
    use crate::board::board_types::Piece;
    use crate::board::grid::Grid;
    use crate::utils::fen_parser::{apply_placement, FenParseMode};

    fn round_trip(fen: &str) -> String {
        let mut grid = Grid::<Piece>::new(8, 8).expect("grid should build");
        apply_placement(&mut grid, fen, FenParseMode::Strict).expect("placement should parse");
        generate_placement(&grid)
    }

    #[test]
    fn round_trip_starting_placement() {
        assert_eq!(round_trip(STARTING_PLACEMENT_FEN), STARTING_PLACEMENT_FEN);
    }

    #[test]
    fn round_trip_custom_placement() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1";
        assert_eq!(round_trip(fen), fen);
    }

    #[test]
    fn empty_board_is_all_runs() {
        let grid = Grid::<Piece>::new(8, 8).expect("grid should build");
        assert_eq!(generate_placement(&grid), "8/8/8/8/8/8/8/8");
    }
}
