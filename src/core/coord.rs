use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A board coordinate or a move delta.
///
/// Board coordinates are 1-indexed: `x` is the column, `y` the row (row 1 is the first line of
/// the board file). Deltas use the same type with the origin as the "no move" vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_origin(self) -> bool {
        self == Self::ORIGIN
    }

    #[inline]
    pub fn chebyshev_norm(self) -> i32 {
        self.x.abs().max(self.y.abs())
    }

    /// Unit step and step count if `self` lies on a rook or bishop ray.
    #[inline]
    pub fn ray(self) -> Option<(Coord, i32)> {
        let (dx, dy) = (self.x, self.y);

        // rook-like
        if dx == 0 && dy != 0 {
            return Some((Coord::new(0, dy.signum()), dy.abs()));
        }
        if dy == 0 && dx != 0 {
            return Some((Coord::new(dx.signum(), 0), dx.abs()));
        }

        // bishop-like
        if dx != 0 && dx.abs() == dy.abs() {
            return Some((Coord::new(dx.signum(), dy.signum()), dx.abs()));
        }

        None
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i32) -> Coord {
        Coord {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
