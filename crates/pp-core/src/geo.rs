//! Grid coordinate type.
//!
//! The board is a square of integer millimetre coordinates.  Comparisons use
//! the squared distance so ties stay exact; [`GridPoint::distance`] is only
//! for display.

/// A point on the board, in integer grid units.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance.  Orders identically to [`distance`][Self::distance].
    #[inline]
    pub fn distance_sq(self, other: GridPoint) -> i64 {
        let dx = (other.x - self.x) as i64;
        let dy = (other.y - self.y) as i64;
        dx * dx + dy * dy
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: GridPoint) -> f64 {
        (self.distance_sq(other) as f64).sqrt()
    }

    /// `true` when both coordinates lie in `[0, extent]`.
    #[inline]
    pub fn within_extent(self, extent: i32) -> bool {
        (0..=extent).contains(&self.x) && (0..=extent).contains(&self.y)
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
