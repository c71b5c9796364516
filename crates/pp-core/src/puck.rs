//! The `Puck` entity.

use crate::{GridPoint, PuckId, SpotId};

/// A mobile token on the board.
///
/// A puck starts at an arbitrary grid position with no spot.  Assignment and
/// compaction move it onto a parking spot; the work cycle marks it processed
/// exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Puck {
    id:        PuckId,
    position:  GridPoint,
    spot:      Option<SpotId>,
    processed: bool,
}

impl Puck {
    pub fn new(id: PuckId, position: GridPoint) -> Self {
        Self {
            id,
            position,
            spot: None,
            processed: false,
        }
    }

    #[inline]
    pub fn id(&self) -> PuckId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> GridPoint {
        self.position
    }

    #[inline]
    pub fn set_position(&mut self, position: GridPoint) {
        self.position = position;
    }

    /// The spot this puck currently sits on, if it has been assigned.
    #[inline]
    pub fn spot(&self) -> Option<SpotId> {
        self.spot
    }

    /// Move onto `spot`, which lives at `position`.
    #[inline]
    pub fn park(&mut self, spot: SpotId, position: GridPoint) {
        self.spot = Some(spot);
        self.position = position;
    }

    /// Forget the spot without moving.
    #[inline]
    pub fn unpark(&mut self) {
        self.spot = None;
    }

    #[inline]
    pub fn is_processed(&self) -> bool {
        self.processed
    }

    /// One-way: a processed puck stays processed.
    #[inline]
    pub fn mark_processed(&mut self) {
        self.processed = true;
    }
}
