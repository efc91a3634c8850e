//! Low-level board primitives.
//!
//! - [`coord`]: 1-indexed board coordinates and move deltas.
//! - [`cell`]: the board alphabet, stored as raw bytes.
//! - [`board`]: a fixed-size grid plus player position; its cell buffer is the canonical key.

pub mod board;
pub mod cell;
pub mod coord;
