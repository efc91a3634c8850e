use crate::chess::piece::{PieceKind, KNIGHT_DELTAS};
use crate::core::board::Board;
use crate::core::cell;
use crate::core::coord::Coord;
use crate::scenario::MovesLike;

/// Movement rules: the player moves like `piece` and captures by landing on a `$`.
///
/// - sliders (rook, bishop, queen) need every intermediate cell vacant
/// - king steps one square, knight jumps over anything
/// - walls and secured pieces (`*`) can never be entered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rules {
    pub piece: PieceKind,
}

impl Rules {
    pub fn new(piece: PieceKind) -> Self {
        Self { piece }
    }

    /// True iff `delta` is a legal move from the current player square.
    ///
    /// Does not touch the board.
    pub fn is_legal(&self, board: &Board, delta: Coord) -> bool {
        if delta.is_origin() {
            return false;
        }
        let from = board.player();
        let to = from + delta;

        let Some(target) = board.cell(to) else {
            return false;
        };
        if !cell::is_vacant(target) && !cell::is_capturable(target) {
            return false;
        }

        match self.piece {
            PieceKind::King => delta.chebyshev_norm() == 1,
            PieceKind::Knight => KNIGHT_DELTAS.contains(&delta),
            PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => {
                let Some((dir, dist)) = delta.ray() else {
                    return false;
                };
                if !self.piece.slide_dirs().contains(&dir) {
                    return false;
                }
                (1..dist).all(|step| board.cell(from + dir * step).map_or(false, cell::is_vacant))
            }
        }
    }
}

impl MovesLike for Rules {
    fn attempt_move(&self, board: &mut Board, delta: Coord) -> bool {
        if !self.is_legal(board, delta) {
            return false;
        }
        let to = board.player() + delta;
        board.relocate_player(to);
        true
    }
}
