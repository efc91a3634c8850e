use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;

/// The chess piece whose movement the player borrows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    King,
    #[default]
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PieceKind {
    pub const ALL: [PieceKind; 5] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Unit directions for sliding pieces.
    #[inline]
    pub fn slide_dirs(self) -> &'static [Coord] {
        use PieceKind::*;
        match self {
            Queen => &QUEEN_DIRS,
            Rook => &ROOK_DIRS,
            Bishop => &BISHOP_DIRS,
            _ => &[],
        }
    }

    pub fn name(self) -> &'static str {
        use PieceKind::*;
        match self {
            King => "king",
            Queen => "queen",
            Rook => "rook",
            Bishop => "bishop",
            Knight => "knight",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown piece {s:?} (expected king, queen, rook, bishop or knight)")
            })
    }
}

pub const ROOK_DIRS: [Coord; 4] = [
    Coord { x: 1, y: 0 },
    Coord { x: -1, y: 0 },
    Coord { x: 0, y: 1 },
    Coord { x: 0, y: -1 },
];

pub const BISHOP_DIRS: [Coord; 4] = [
    Coord { x: 1, y: 1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: 1 },
    Coord { x: -1, y: -1 },
];

pub const QUEEN_DIRS: [Coord; 8] = [
    Coord { x: 1, y: 0 },
    Coord { x: -1, y: 0 },
    Coord { x: 0, y: 1 },
    Coord { x: 0, y: -1 },
    Coord { x: 1, y: 1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: 1 },
    Coord { x: -1, y: -1 },
];

pub const KNIGHT_DELTAS: [Coord; 8] = [
    Coord { x: -2, y: -1 },
    Coord { x: -2, y: 1 },
    Coord { x: -1, y: -2 },
    Coord { x: -1, y: 2 },
    Coord { x: 1, y: -2 },
    Coord { x: 1, y: 2 },
    Coord { x: 2, y: -1 },
    Coord { x: 2, y: 1 },
];
