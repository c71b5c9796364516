//! Plain data row types written by output backends.

use pp_core::Stage;

/// One puck at the end of one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuckSnapshotRow {
    pub stage:     Stage,
    pub puck_id:   u32,
    /// Index in the puck sequence; the highest index is the head.
    pub sequence:  u32,
    pub x:         i32,
    pub y:         i32,
    /// `u8::MAX` while the puck is not parked.
    pub spot_id:   u8,
    pub processed: bool,
}

/// One parking spot at the end of one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpotSnapshotRow {
    pub stage:    Stage,
    pub spot_id:  u8,
    pub x:        i32,
    pub y:        i32,
    pub occupied: bool,
}
