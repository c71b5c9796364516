//! Parking spots and the fixed 3×3 path layout.

use crate::{GridPoint, SpotId};

/// The nine spot positions in path order: index 0 is the tail, index 8 the
/// head.  The path snakes through the 3×3 grid, so both the coordinates and
/// their order are part of the contract.
pub const SPOT_LAYOUT: [GridPoint; 9] = [
    GridPoint::new(180, 60),
    GridPoint::new(300, 60),
    GridPoint::new(420, 60),
    GridPoint::new(420, 180),
    GridPoint::new(300, 180),
    GridPoint::new(180, 180),
    GridPoint::new(180, 300),
    GridPoint::new(300, 300),
    GridPoint::new(420, 300),
];

/// A fixed position on the path with an occupancy flag.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParkingSpot {
    id:       SpotId,
    position: GridPoint,
    occupied: bool,
}

impl ParkingSpot {
    /// An unoccupied spot.
    pub fn new(id: SpotId, position: GridPoint) -> Self {
        Self {
            id,
            position,
            occupied: false,
        }
    }

    /// Build the full path from [`SPOT_LAYOUT`].
    pub fn layout() -> Vec<ParkingSpot> {
        SPOT_LAYOUT
            .iter()
            .enumerate()
            .map(|(i, &p)| ParkingSpot::new(SpotId(i as u8), p))
            .collect()
    }

    #[inline]
    pub fn id(&self) -> SpotId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> GridPoint {
        self.position
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Flip occupancy: an occupied spot becomes free and vice versa.
    #[inline]
    pub fn toggle_occupied(&mut self) {
        self.occupied = !self.occupied;
    }
}
