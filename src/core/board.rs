use std::fmt;

use crate::core::cell;
use crate::core::coord::Coord;
use crate::scenario::SearchError;
use crate::search::resources::ResourceTracker;

/// Largest board the move notation can address (columns `a..z`).
pub const MAX_WIDTH: usize = 26;
/// Largest board the move notation can address (rows `1..9`).
pub const MAX_HEIGHT: usize = 9;

/// One complete puzzle configuration: a fixed-size grid plus the player position.
///
/// Cells are stored row-major in a single buffer, which doubles as the canonical encoding used
/// for duplicate detection. The player marker (`@` or `+`) always sits at [`Board::player`], so
/// the flattened grid alone identifies the state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<u8>,
    player: Coord,
}

impl Board {
    /// Build a board from row-major cells, locating the player marker.
    pub fn new(width: usize, height: usize, cells: Vec<u8>) -> Result<Self, SearchError> {
        if width == 0 || height == 0 {
            return Err(SearchError::InvalidBoard {
                reason: "board has no cells".to_string(),
            });
        }
        if width > MAX_WIDTH || height > MAX_HEIGHT {
            return Err(SearchError::InvalidBoard {
                reason: format!(
                    "board is {width}x{height}; at most {MAX_WIDTH} columns and \
                     {MAX_HEIGHT} rows are supported"
                ),
            });
        }
        if cells.len() != width * height {
            return Err(SearchError::InvalidBoard {
                reason: format!(
                    "expected {} cells for a {width}x{height} board, got {}",
                    width * height,
                    cells.len()
                ),
            });
        }

        let mut player = None;
        for (i, &c) in cells.iter().enumerate() {
            if !cell::is_known(c) {
                return Err(SearchError::InvalidBoard {
                    reason: format!(
                        "unknown cell {:?} at line {}, column {}",
                        c as char,
                        i / width + 1,
                        i % width + 1
                    ),
                });
            }
            if cell::is_player(c) {
                if player.is_some() {
                    return Err(SearchError::InvalidBoard {
                        reason: "board has more than one player marker".to_string(),
                    });
                }
                player = Some(Coord::new((i % width) as i32 + 1, (i / width) as i32 + 1));
            }
        }

        let player = player.ok_or_else(|| SearchError::InvalidBoard {
            reason: "board has no player marker".to_string(),
        })?;

        Ok(Self {
            width,
            height,
            cells,
            player,
        })
    }

    /// Deep copy with a fallible allocation for the cell buffer.
    pub fn try_clone(&self, tracker: &ResourceTracker) -> Result<Self, SearchError> {
        let mut cells = Vec::new();
        tracker.try_reserve_vec("board_copy", "cells", &mut cells, self.cells.len())?;
        cells.extend_from_slice(&self.cells);
        Ok(Self {
            width: self.width,
            height: self.height,
            cells,
            player: self.player,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn player(&self) -> Coord {
        self.player
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.x >= 1 && c.y >= 1 && c.x as usize <= self.width && c.y as usize <= self.height
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some((c.y as usize - 1) * self.width + (c.x as usize - 1))
        } else {
            None
        }
    }

    /// Cell at `c`, or `None` off the board.
    #[inline]
    pub fn cell(&self, c: Coord) -> Option<u8> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Canonical encoding: the grid flattened row-major.
    #[inline]
    pub fn canonical_key(&self) -> &[u8] {
        debug_assert!(self.cell(self.player).map_or(false, cell::is_player));
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Number of capturable pieces still on the board.
    pub fn remaining_pieces(&self) -> usize {
        self.cells.iter().filter(|&&c| cell::is_capturable(c)).count()
    }

    /// Move the player marker to `to`, removing whatever stood there.
    ///
    /// Legality is the caller's concern; `to` must be on the board.
    pub(crate) fn relocate_player(&mut self, to: Coord) {
        let (Some(from_idx), Some(to_idx)) = (self.index(self.player), self.index(to)) else {
            return;
        };
        let target = cell::vacated(self.cells[to_idx]);
        self.cells[from_idx] = cell::vacated(self.cells[from_idx]);
        self.cells[to_idx] = cell::entered(target);
        self.player = to;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(&String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}
