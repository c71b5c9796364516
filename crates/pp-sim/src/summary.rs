//! Result of a complete run.

use pp_core::GridPoint;

/// What [`Coordinator::run`][crate::Coordinator::run] did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    /// Number of pucks on the board.
    pub pucks: usize,
    /// Whether assignment left gaps that compaction had to remove.
    pub had_gaps: bool,
    /// Units of work performed by the round-robin cycle.
    pub processed: usize,
    /// Puck positions in final sequence order.
    pub final_positions: Vec<GridPoint>,
}
