//! Board alphabet.
//!
//! Cells are stored as raw bytes so a board flattens directly into its canonical key.

pub const WALL: u8 = b'#';
pub const FLOOR: u8 = b' ';
pub const STORAGE: u8 = b'.';
pub const PIECE: u8 = b'$';
pub const PIECE_ON_STORAGE: u8 = b'*';
pub const PLAYER: u8 = b'@';
pub const PLAYER_ON_STORAGE: u8 = b'+';

#[inline]
pub fn is_known(c: u8) -> bool {
    matches!(
        c,
        WALL | FLOOR | STORAGE | PIECE | PIECE_ON_STORAGE | PLAYER | PLAYER_ON_STORAGE
    )
}

/// Floor or storage with nothing on it.
#[inline]
pub fn is_vacant(c: u8) -> bool {
    c == FLOOR || c == STORAGE
}

#[inline]
pub fn is_player(c: u8) -> bool {
    c == PLAYER || c == PLAYER_ON_STORAGE
}

#[inline]
pub fn is_capturable(c: u8) -> bool {
    c == PIECE
}

/// The cell left behind when the player (or a captured piece) leaves it.
#[inline]
pub fn vacated(c: u8) -> u8 {
    match c {
        PLAYER_ON_STORAGE | STORAGE => STORAGE,
        _ => FLOOR,
    }
}

/// The player marker for entering a cell that currently holds `c`.
#[inline]
pub fn entered(c: u8) -> u8 {
    if c == STORAGE {
        PLAYER_ON_STORAGE
    } else {
        PLAYER
    }
}
