/// Piece and player types shared by the grid, codecs and rules hooks.
///
/// A piece is a small `Copy` value. The framework-facing game tag packs the
/// kind into the low bits and the owner into bit 7.

/// Owning player. `Light` is player 0, `Dark` is player 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Player number to color; anything other than 0 or 1 is not a player.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Color::Light),
            1 => Some(Color::Dark),
            _ => None,
        }
    }

    /// Color bits as they appear in a game tag (`0` or `128`).
    #[inline]
    pub const fn tag_bits(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => DARK_TAG_BIT,
        }
    }
}

/// Bit set in a game tag when the piece belongs to player 1.
pub const DARK_TAG_BIT: u8 = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Kind value used in game tags (`1..=6`, `0` is reserved for "no piece").
    #[inline]
    pub const fn tag_value(self) -> u8 {
        self.index() as u8 + 1
    }

    #[inline]
    pub const fn from_tag_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase English name, as used in sprite file names.
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

/// A placed piece. Fields are fixed at construction; a change of owner or
/// kind means replacing the square's occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    owner: Color,
}

impl Piece {
    #[inline]
    pub const fn new(owner: Color, kind: PieceKind) -> Self {
        Self { kind, owner }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn owner(self) -> Color {
        self.owner
    }

    /// Combined color/kind tag: `kind.tag_value() + 128 * owner.index()`.
    #[inline]
    pub const fn game_tag(self) -> u8 {
        self.owner.tag_bits() | self.kind.tag_value()
    }

    pub const fn from_game_tag(tag: u8) -> Option<Self> {
        let owner = if tag & DARK_TAG_BIT != 0 {
            Color::Dark
        } else {
            Color::Light
        };
        match PieceKind::from_tag_value(tag & !DARK_TAG_BIT) {
            Some(kind) => Some(Self::new(owner, kind)),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Piece, PieceKind, DARK_TAG_BIT};

    #[test]
    fn game_tags_encode_owner_in_high_bit() {
        let light_rook = Piece::new(Color::Light, PieceKind::Rook);
        let dark_rook = Piece::new(Color::Dark, PieceKind::Rook);

        assert_eq!(light_rook.game_tag(), 4);
        assert_eq!(dark_rook.game_tag(), 132);
        assert_eq!(dark_rook.game_tag() & DARK_TAG_BIT, DARK_TAG_BIT);
    }

    #[test]
    fn game_tag_decodes_back_to_piece() {
        for owner in [Color::Light, Color::Dark] {
            for kind in PieceKind::ALL {
                let piece = Piece::new(owner, kind);
                assert_eq!(Piece::from_game_tag(piece.game_tag()), Some(piece));
            }
        }
        assert_eq!(Piece::from_game_tag(0), None);
        assert_eq!(Piece::from_game_tag(DARK_TAG_BIT), None);
        assert_eq!(Piece::from_game_tag(7), None);
    }

    #[test]
    fn player_indices_map_to_colors() {
        assert_eq!(Color::from_index(0), Some(Color::Light));
        assert_eq!(Color::from_index(1), Some(Color::Dark));
        assert_eq!(Color::from_index(2), None);
        assert_eq!(Color::Light.opposite(), Color::Dark);
    }
}
