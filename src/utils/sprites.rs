use crate::board::board_types::{Color, PieceKind};

/// Sprite file the asset loader is expected to provide, e.g. `w_knight.png`.
pub fn sprite_path(owner: Color, kind: PieceKind) -> String {
    let prefix = match owner {
        Color::Light => "w_",
        Color::Dark => "b_",
    };
    format!("{prefix}{}.png", kind.name())
}
