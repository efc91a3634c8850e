//! Chess movement for the player piece.

pub mod piece;
pub mod rules;
