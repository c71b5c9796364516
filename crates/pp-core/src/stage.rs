//! Pipeline stage labels shared by the coordinator and output crates.

/// The point in a run at which a snapshot of pucks and spots was taken.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stage {
    /// Pucks sit at their random starting positions.
    Populated,
    /// Every puck is on its nearest free spot.
    Assigned,
    /// Gaps have been removed (or there were none).
    Compacted,
    /// The work cycle has finished.
    Processed,
}

impl Stage {
    /// Human-readable label, used as the CSV column value.
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Populated => "populated",
            Stage::Assigned  => "assigned",
            Stage::Compacted => "compacted",
            Stage::Processed => "processed",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
